//! DELETE clause assembly.

use crate::ast::RenderRequest;

pub(crate) fn build_delete(req: &RenderRequest) -> String {
    let mut lines = vec![format!("DELETE FROM {}", req.table)];
    super::push_where(&mut lines, &req.conditions);
    lines.join("\n")
}
