use pretty_assertions::assert_eq;
use tagsql::prelude::*;

fn catalog_fixture() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add_group(TagGroup::new("users", GroupKind::Table));
    catalog.add_group(TagGroup::new("report_snippets", GroupKind::Book).child_of("books"));
    catalog.add_tag(
        "report_snippets",
        Tag::new("monthly", "SELECT month, total FROM monthly_report", TagKind::Book),
    );
    catalog.add_tag(
        "report_snippets",
        Tag::new("yearly", "SELECT year, total FROM yearly_report", TagKind::Book),
    );
    catalog
}

#[test]
fn select_with_fields_and_condition() {
    let catalog = catalog_fixture();
    let sql = Renderer::new(&catalog)
        .render(
            &RenderRequest::select("users")
                .columns(["id", "name"])
                .condition("by_id", "id = 1"),
        )
        .unwrap();

    assert_eq!(sql, "SELECT\n  id,\n  name\nFROM users\nWHERE\n  id = 1");
}

#[test]
fn insert_from_field_assignments() {
    let catalog = catalog_fixture();
    let sql = Renderer::new(&catalog)
        .render(&RenderRequest::insert("users").assign("id", 1).assign("name", "bob"))
        .unwrap();

    assert_eq!(sql, "INSERT INTO users\n(id, name)\nVALUES (1, 'bob')");
}

#[test]
fn create_without_column_types_fails() {
    let catalog = catalog_fixture();
    let err = Renderer::new(&catalog)
        .render(&RenderRequest::create("t"))
        .unwrap_err();

    assert!(matches!(err, RenderError::Config(_)));
}

#[test]
fn aggregate_field_list_with_count_star() {
    let catalog = catalog_fixture();
    let sql = Renderer::new(&catalog)
        .render(
            &RenderRequest::select("users")
                .columns(["dept"])
                .group_by(GroupBySpec::new(["dept"]).aggregate("*", AggregateFunc::Count)),
        )
        .unwrap();

    assert!(sql.contains("dept,\n  COUNT(*)"));
    assert!(sql.ends_with("GROUP BY\n  dept"));
}

#[test]
fn pass_through_group_ignores_all_other_parameters() {
    let catalog = catalog_fixture();
    let sql = Renderer::new(&catalog)
        .render(
            &RenderRequest::select("report_snippets")
                .columns(["monthly", "yearly"])
                .condition("junk", "?????")
                .order_by("garbage", SortOrder::Desc),
        )
        .unwrap();

    assert_eq!(
        sql,
        "SELECT month, total FROM monthly_report\nSELECT year, total FROM yearly_report"
    );
}

#[test]
fn validator_agrees_with_rendered_statements() {
    let catalog = catalog_fixture();
    let renderer = Renderer::new(&catalog);
    let validator = SyntaxValidator::new();

    let requests = [
        RenderRequest::select("users")
            .columns(["id", "name"])
            .condition("by_id", "id = 1")
            .order_by("name", SortOrder::Asc),
        RenderRequest::select("users"),
        RenderRequest::insert("users").assign("id", 1).assign("name", "bob"),
        RenderRequest::insert("users")
            .columns(["id", "note"])
            .with_values([Value::Int(7), Value::Null]),
        RenderRequest::update("users")
            .assign("name", "alice")
            .condition("by_id", "id = 2"),
        RenderRequest::delete("users").condition("stale", "last_seen < '2020-01-01'"),
        RenderRequest::delete("users"),
    ];

    for req in &requests {
        let sql = renderer.render(req).unwrap();
        let report = validator.validate(&sql);
        assert!(report.valid, "rendered SQL failed validation: {}", sql);
    }
}

#[test]
fn validate_select_star_returns_both_hints() {
    let report = SyntaxValidator::new().validate("SELECT * FROM t");
    assert!(report.valid);
    assert!(report.suggestions.iter().any(|s| s.contains("SELECT *")));
    assert!(report.suggestions.iter().any(|s| s.contains("WHERE")));
}

#[test]
fn validate_select_without_columns_fails() {
    let report = SyntaxValidator::new().validate("SELECT FROM t");
    assert!(!report.valid);
    assert!(report.error.unwrap().contains("malformed SELECT"));
}
