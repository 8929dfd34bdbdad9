//! Statement renderers.
//!
//! [`Renderer`] dispatches a [`RenderRequest`] either to the pass-through
//! fragment join (non-table tag groups) or to one of the per-statement
//! builders below.

mod create;
mod delete;
mod insert;
mod select;
mod update;

use crate::ast::{ConditionEntry, RenderRequest, Statement};
use crate::catalog::{Catalog, GroupKind};
use crate::error::{RenderError, RenderResult};

/// Renders SQL text from a request, resolving table names against a catalog.
///
/// Stateless apart from the borrowed catalog; every call is independent.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    catalog: &'a Catalog,
}

impl<'a> Renderer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Render a request to SQL text.
    ///
    /// A table name that resolves to a non-table tag group short-circuits to
    /// the pass-through fragment join. A name missing from the catalog is not
    /// an error; it renders as a literal table identifier.
    pub fn render(&self, req: &RenderRequest) -> RenderResult<String> {
        if req.table.is_empty() {
            return Err(RenderError::config("table name is required"));
        }

        if let Some(group) = self.catalog.resolve(&req.table)
            && group.kind != GroupKind::Table
        {
            return Ok(self.join_fragments(req));
        }

        match req.statement {
            Statement::Create => create::build_create(req),
            Statement::Select => Ok(select::build_select(req)),
            Statement::Insert => insert::build_insert(req),
            Statement::Update => update::build_update(req),
            Statement::Delete => Ok(delete::build_delete(req)),
        }
    }

    /// Pass-through rendering: the selected tags' raw fragments, newline
    /// joined in catalog order. Every other request parameter is ignored.
    fn join_fragments(&self, req: &RenderRequest) -> String {
        let selected = req.selected_fields();
        self.catalog
            .tags(&req.table)
            .iter()
            .filter(|tag| selected.contains(&tag.name.as_str()))
            .map(|tag| tag.fragment.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Append the WHERE lines shared by SELECT, UPDATE and DELETE: the entries'
/// SQL texts joined by single spaces, in list order, with no injected
/// connectives. Nothing is appended when the list is empty.
pub(crate) fn push_where(lines: &mut Vec<String>, conditions: &[ConditionEntry]) {
    if conditions.is_empty() {
        return;
    }
    lines.push("WHERE".to_string());
    let parts: Vec<&str> = conditions.iter().map(|c| c.sql.as_str()).collect();
    lines.push(format!("  {}", parts.join(" ")));
}
