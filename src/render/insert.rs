//! INSERT clause assembly.

use crate::ast::{FieldSelection, RenderRequest};
use crate::error::{RenderError, RenderResult};

pub(crate) fn build_insert(req: &RenderRequest) -> RenderResult<String> {
    let (names, literals): (Vec<&str>, Vec<String>) = match &req.fields {
        Some(FieldSelection::Assignments(pairs)) => (
            pairs.iter().map(|(field, _)| field.as_str()).collect(),
            pairs.iter().map(|(_, value)| value.to_string()).collect(),
        ),
        Some(FieldSelection::Columns(cols)) if !req.values.is_empty() => (
            cols.iter().map(String::as_str).collect(),
            req.values.iter().map(|value| value.to_string()).collect(),
        ),
        _ => {
            return Err(RenderError::shape(
                "INSERT requires field assignments, or a column list with a parallel value list",
            ));
        }
    };

    Ok(format!(
        "INSERT INTO {}\n({})\nVALUES ({})",
        req.table,
        names.join(", "),
        literals.join(", ")
    ))
}
