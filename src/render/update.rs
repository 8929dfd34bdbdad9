//! UPDATE clause assembly.

use crate::ast::{FieldSelection, RenderRequest};
use crate::error::{RenderError, RenderResult};

pub(crate) fn build_update(req: &RenderRequest) -> RenderResult<String> {
    let Some(FieldSelection::Assignments(pairs)) = &req.fields else {
        return Err(RenderError::shape("UPDATE requires field assignments"));
    };

    let assignments: Vec<String> = pairs
        .iter()
        .map(|(field, value)| format!("{} = {}", field, value))
        .collect();

    let mut lines = vec![
        format!("UPDATE {}", req.table),
        "SET".to_string(),
        format!("  {}", assignments.join(",\n  ")),
    ];

    super::push_where(&mut lines, &req.conditions);

    Ok(lines.join("\n"))
}
