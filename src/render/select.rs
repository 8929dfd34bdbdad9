//! SELECT clause assembly.

use crate::ast::{AggregateFunc, RenderRequest};

pub(crate) fn build_select(req: &RenderRequest) -> String {
    let mut lines = vec!["SELECT".to_string()];
    let selected = req.selected_fields();

    if selected.is_empty() {
        lines.push("  *".to_string());
    } else if let Some(group_by) = req.group_by.as_ref().filter(|g| !g.aggregate_fields.is_empty())
    {
        // Selected grouping fields first, then aggregate expressions.
        let mut parts: Vec<String> = group_by
            .group_fields
            .iter()
            .filter(|field| selected.contains(&field.as_str()))
            .cloned()
            .collect();

        for (field, func) in &group_by.aggregate_fields {
            match func {
                AggregateFunc::Count if field == "*" => parts.push("COUNT(*)".to_string()),
                AggregateFunc::CountDistinct => {
                    parts.push(format!("COUNT(DISTINCT {})", field));
                }
                // A plain aggregate field must also be selected.
                _ if selected.contains(&field.as_str()) => {
                    parts.push(format!("{}({})", func, field));
                }
                _ => {}
            }
        }
        lines.push(format!("  {}", parts.join(",\n  ")));
    } else {
        lines.push(format!("  {}", selected.join(",\n  ")));
    }

    lines.push(format!("FROM {}", req.table));

    super::push_where(&mut lines, &req.conditions);

    if let Some(group_by) = &req.group_by {
        let fields: Vec<&str> = group_by
            .group_fields
            .iter()
            .map(String::as_str)
            .filter(|field| selected.contains(field))
            .collect();
        if !fields.is_empty() {
            lines.push("GROUP BY".to_string());
            lines.push(format!("  {}", fields.join(", ")));
        }
    }

    let orders: Vec<String> = req
        .order_by
        .iter()
        .filter(|spec| selected.contains(&spec.field.as_str()))
        .map(|spec| format!("{} {}", spec.field, spec.order))
        .collect();
    if !orders.is_empty() {
        lines.push("ORDER BY".to_string());
        lines.push(format!("  {}", orders.join(", ")));
    }

    lines.join("\n")
}
