//! Structural SQL validation and optimization hints.
//!
//! Shallow regex shape-checking of SQL text, not grammatical parsing: the
//! statement kind is classified from the leading keyword and a handful of
//! per-kind patterns catch missing or dangling clauses. Valid SELECTs also
//! collect advisory suggestions; suggestions never affect validity.

use regex::Regex;

/// Outcome of validating one SQL string.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub valid: bool,
    pub error: Option<String>,
    pub suggestions: Vec<String>,
}

impl ValidationReport {
    fn failure(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
            suggestions: Vec::new(),
        }
    }

    fn success(suggestions: Vec<String>) -> Self {
        Self {
            valid: true,
            error: None,
            suggestions,
        }
    }
}

/// Statement-kind classification from the leading keyword.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SqlKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl SqlKind {
    fn classify(sql: &str) -> Option<Self> {
        let upper = sql.to_uppercase();
        if upper.starts_with("SELECT") {
            Some(SqlKind::Select)
        } else if upper.starts_with("INSERT") {
            Some(SqlKind::Insert)
        } else if upper.starts_with("UPDATE") {
            Some(SqlKind::Update)
        } else if upper.starts_with("DELETE") {
            Some(SqlKind::Delete)
        } else {
            None
        }
    }
}

/// Validator with per-kind structural patterns, compiled once.
pub struct SyntaxValidator {
    select_shape: Regex,
    dangling_group_by: Regex,
    dangling_order_by: Regex,
    dangling_where: Regex,
    insert_shape: Regex,
    values_list: Regex,
    update_shape: Regex,
    set_assignment: Regex,
    delete_shape: Regex,
    select_star: Regex,
    has_where: Regex,
    has_order_by: Regex,
    has_group_by: Regex,
    select_distinct: Regex,
}

impl Default for SyntaxValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxValidator {
    /// Create a validator with the default patterns.
    pub fn new() -> Self {
        Self {
            select_shape: Regex::new(
                r"(?i)SELECT\s+(?:[\w\s,.*()]+?|\([\w\s,.*]+\))\s+FROM\s+\w+",
            )
            .unwrap(),
            dangling_group_by: Regex::new(r"(?i)GROUP\s+BY\s*(?:$|WHERE|ORDER\s+BY|HAVING|LIMIT)")
                .unwrap(),
            dangling_order_by: Regex::new(r"(?i)ORDER\s+BY\s*(?:$|WHERE|GROUP\s+BY|HAVING|LIMIT)")
                .unwrap(),
            dangling_where: Regex::new(r"(?i)WHERE\s*(?:$|GROUP\s+BY|ORDER\s+BY|HAVING|LIMIT)")
                .unwrap(),
            insert_shape: Regex::new(r"(?i)INSERT\s+INTO\s+\w+").unwrap(),
            values_list: Regex::new(r"(?i)VALUES\s*\([^)]*\)").unwrap(),
            update_shape: Regex::new(r"(?i)UPDATE\s+\w+\s+SET").unwrap(),
            set_assignment: Regex::new(r"(?i)SET\s+\w+\s*=\s*[^,\s]+").unwrap(),
            delete_shape: Regex::new(r"(?i)DELETE\s+FROM\s+\w+").unwrap(),
            select_star: Regex::new(r"(?i)SELECT\s+\*").unwrap(),
            has_where: Regex::new(r"(?i)\sWHERE\s").unwrap(),
            has_order_by: Regex::new(r"(?i)\sORDER\s+BY\s").unwrap(),
            has_group_by: Regex::new(r"(?i)\sGROUP\s+BY\s").unwrap(),
            select_distinct: Regex::new(r"(?i)SELECT\s+DISTINCT").unwrap(),
        }
    }

    /// Validate a SQL string: a verdict plus either an error or suggestions.
    pub fn validate(&self, sql: &str) -> ValidationReport {
        let sql = sql.trim();
        if sql.is_empty() {
            return ValidationReport::failure("SQL statement is empty");
        }

        match SqlKind::classify(sql) {
            Some(SqlKind::Select) => self.check_select(sql),
            Some(SqlKind::Insert) => self.check_insert(sql),
            Some(SqlKind::Update) => self.check_update(sql),
            Some(SqlKind::Delete) => self.check_delete(sql),
            None => ValidationReport::failure("unrecognized SQL statement type"),
        }
    }

    fn check_select(&self, sql: &str) -> ValidationReport {
        if !self.select_shape.is_match(sql) {
            return ValidationReport::failure(
                "malformed SELECT clause: missing or invalid SELECT ... FROM",
            );
        }
        if self.dangling_group_by.is_match(sql) {
            return ValidationReport::failure("GROUP BY clause has no fields");
        }
        if self.dangling_order_by.is_match(sql) {
            return ValidationReport::failure("ORDER BY clause has no fields");
        }
        if self.dangling_where.is_match(sql) {
            return ValidationReport::failure("WHERE clause has no conditions");
        }
        ValidationReport::success(self.select_suggestions(sql))
    }

    fn check_insert(&self, sql: &str) -> ValidationReport {
        if !self.insert_shape.is_match(sql) {
            return ValidationReport::failure("malformed INSERT clause: missing INSERT INTO table");
        }
        if sql.to_uppercase().contains("VALUES") && !self.values_list.is_match(sql) {
            return ValidationReport::failure("malformed VALUES clause");
        }
        ValidationReport::success(Vec::new())
    }

    fn check_update(&self, sql: &str) -> ValidationReport {
        if !self.update_shape.is_match(sql) {
            return ValidationReport::failure("malformed UPDATE clause: missing SET");
        }
        if !self.set_assignment.is_match(sql) {
            return ValidationReport::failure("malformed SET clause: no field assignments");
        }
        ValidationReport::success(Vec::new())
    }

    fn check_delete(&self, sql: &str) -> ValidationReport {
        if !self.delete_shape.is_match(sql) {
            return ValidationReport::failure("malformed DELETE clause: missing DELETE FROM table");
        }
        ValidationReport::success(Vec::new())
    }

    /// Advisory suggestions for a SELECT that already passed validation.
    fn select_suggestions(&self, sql: &str) -> Vec<String> {
        let mut suggestions = Vec::new();
        if self.select_star.is_match(sql) {
            suggestions.push("Avoid SELECT *; list only the columns you need".to_string());
        }
        if !self.has_where.is_match(sql) {
            suggestions.push("Consider adding a WHERE clause to limit the result set".to_string());
        }
        if self.has_order_by.is_match(sql) {
            suggestions.push("Make sure ORDER BY columns are covered by an index".to_string());
        }
        if self.has_group_by.is_match(sql) {
            suggestions.push("Make sure GROUP BY columns are covered by an index".to_string());
        }
        if self.select_distinct.is_match(sql) {
            suggestions.push("DISTINCT can be expensive; confirm it is necessary".to_string());
        }
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sql() {
        let report = SyntaxValidator::new().validate("   ");
        assert!(!report.valid);
        assert!(report.error.unwrap().contains("empty"));
    }

    #[test]
    fn test_unrecognized_statement_type() {
        let report = SyntaxValidator::new().validate("TRUNCATE TABLE users");
        assert!(!report.valid);
        assert_eq!(report.error.as_deref(), Some("unrecognized SQL statement type"));
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_select_star_suggestions() {
        let report = SyntaxValidator::new().validate("SELECT * FROM t");
        assert!(report.valid);
        assert!(report.error.is_none());
        assert!(report.suggestions.iter().any(|s| s.contains("SELECT *")));
        assert!(report.suggestions.iter().any(|s| s.contains("WHERE")));
        assert_eq!(report.suggestions.len(), 2);
    }

    #[test]
    fn test_select_missing_column_list() {
        let report = SyntaxValidator::new().validate("SELECT FROM t");
        assert!(!report.valid);
        assert!(report.error.unwrap().contains("malformed SELECT"));
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_select_dangling_clauses() {
        let v = SyntaxValidator::new();

        let report = v.validate("SELECT id FROM t GROUP BY");
        assert!(!report.valid);
        assert!(report.error.unwrap().contains("GROUP BY"));

        let report = v.validate("SELECT id FROM t ORDER BY");
        assert!(!report.valid);
        assert!(report.error.unwrap().contains("ORDER BY"));

        let report = v.validate("SELECT id FROM t WHERE ORDER BY id");
        assert!(!report.valid);
        assert!(report.error.unwrap().contains("WHERE"));
    }

    #[test]
    fn test_select_index_and_distinct_hints() {
        let v = SyntaxValidator::new();

        let report = v.validate("SELECT id FROM t WHERE id = 1 ORDER BY id");
        assert!(report.valid);
        assert!(report.suggestions.iter().any(|s| s.contains("ORDER BY")));

        let report = v.validate("SELECT DISTINCT dept FROM t WHERE dept > 1 GROUP BY dept");
        assert!(report.valid);
        assert!(report.suggestions.iter().any(|s| s.contains("GROUP BY")));
        assert!(report.suggestions.iter().any(|s| s.contains("DISTINCT")));
    }

    #[test]
    fn test_insert_shapes() {
        let v = SyntaxValidator::new();

        assert!(v.validate("INSERT INTO users (id) VALUES (1)").valid);
        // VALUES is optional (INSERT ... SELECT passes the shape check).
        assert!(v.validate("INSERT INTO users SELECT id FROM archive").valid);

        let report = v.validate("INSERT users (id) VALUES (1)");
        assert!(!report.valid);
        assert!(report.error.unwrap().contains("INSERT"));

        let report = v.validate("INSERT INTO users (id) VALUES");
        assert!(!report.valid);
        assert!(report.error.unwrap().contains("VALUES"));
    }

    #[test]
    fn test_update_shapes() {
        let v = SyntaxValidator::new();

        assert!(v.validate("UPDATE users SET name = 'bob' WHERE id = 1").valid);

        let report = v.validate("UPDATE users name = 'bob'");
        assert!(!report.valid);
        assert!(report.error.unwrap().contains("SET"));

        let report = v.validate("UPDATE users SET");
        assert!(!report.valid);
        assert!(report.error.unwrap().contains("SET"));
    }

    #[test]
    fn test_delete_shapes() {
        let v = SyntaxValidator::new();

        assert!(v.validate("DELETE FROM users WHERE id = 1").valid);
        assert!(v.validate("delete from users").valid);

        let report = v.validate("DELETE users");
        assert!(!report.valid);
        assert!(report.error.unwrap().contains("DELETE"));
    }

    #[test]
    fn test_multiline_statements_pass() {
        let v = SyntaxValidator::new();
        let report = v.validate("SELECT\n  id,\n  name\nFROM users\nWHERE\n  id = 1");
        assert!(report.valid);
        assert!(report.suggestions.is_empty());
    }
}
