//! CREATE TABLE clause assembly.

use crate::ast::RenderRequest;
use crate::error::{RenderError, RenderResult};

pub(crate) fn build_create(req: &RenderRequest) -> RenderResult<String> {
    if req.column_types.is_empty() {
        return Err(RenderError::config(
            "column type definitions are required for CREATE TABLE",
        ));
    }

    let defs: Vec<String> = req
        .column_types
        .iter()
        .map(|col| {
            // Fixed order: type, PRIMARY KEY, NOT NULL.
            let mut parts = vec![format!("  {} {}", col.name, col.data_type)];
            if col.primary_key {
                parts.push("PRIMARY KEY".to_string());
            }
            if col.not_null {
                parts.push("NOT NULL".to_string());
            }
            parts.join(" ")
        })
        .collect();

    Ok(format!(
        "CREATE TABLE {} (\n{}\n)",
        req.table,
        defs.join(",\n")
    ))
}
