// Live schema inspection against the fixture tables

use diesel::connection::SimpleConnection;
use redmine_schema::catalog;
use redmine_schema::db::inspect;

#[test]
fn fixture_schema_matches_catalog() {
    let mut db = test_db!();
    let report = inspect::check(&mut db.conn, &db.schema).unwrap();

    assert!(report.is_compatible(), "{:#?}", report);
    assert_eq!(report.checked_tables, catalog::tables().len());
    assert!(report.extra_columns.is_empty());
    assert!(report.length_mismatches.is_empty());
    assert!(report.foreign_key_issues.is_empty(), "{:#?}", report.foreign_key_issues);
}

#[test]
fn altered_schema_is_reported() {
    let mut db = test_db!();
    db.conn
        .batch_execute(
            "ALTER TABLE news DROP COLUMN summary; \
             ALTER TABLE news ADD COLUMN legacy_flag boolean; \
             ALTER TABLE trackers ALTER COLUMN position SET NOT NULL; \
             ALTER TABLE issues DROP CONSTRAINT fk_issues_project_id",
        )
        .unwrap();

    let report = inspect::check(&mut db.conn, &db.schema).unwrap();
    assert!(!report.is_compatible());
    assert_eq!(report.missing_columns.len(), 1);
    assert_eq!(report.missing_columns[0].table, "news");
    assert_eq!(report.missing_columns[0].column, "summary");
    assert_eq!(report.extra_columns.len(), 1);
    assert_eq!(report.extra_columns[0].column, "legacy_flag");
    assert_eq!(report.nullability_mismatches.len(), 1);
    assert_eq!(report.nullability_mismatches[0].table, "trackers");

    assert_eq!(report.foreign_key_issues.len(), 1);
    let fk = &report.foreign_key_issues[0];
    assert_eq!((fk.table.as_str(), fk.column.as_str()), ("issues", "project_id"));
    assert_eq!(fk.delete_rule, None);
}

#[test]
fn shared_constraint_names_keep_their_own_delete_rule() {
    let mut db = test_db!();
    db.conn
        .batch_execute(
            "ALTER TABLE issues DROP CONSTRAINT fk_issues_project_id; \
             ALTER TABLE news DROP CONSTRAINT fk_news_project_id; \
             ALTER TABLE issues ADD CONSTRAINT fk_project FOREIGN KEY (project_id) \
                 REFERENCES projects (id) ON DELETE CASCADE; \
             ALTER TABLE news ADD CONSTRAINT fk_project FOREIGN KEY (project_id) \
                 REFERENCES projects (id) ON DELETE RESTRICT",
        )
        .unwrap();

    let live = inspect::load_foreign_keys(&mut db.conn, &db.schema).unwrap();
    assert_eq!(live.len(), catalog::foreign_keys().len());
    let project_refs: Vec<(&str, &str)> = live
        .iter()
        .filter(|fk| {
            fk.column_name == "project_id" && (fk.table_name == "issues" || fk.table_name == "news")
        })
        .map(|fk| (fk.table_name.as_str(), fk.delete_rule.as_str()))
        .collect();
    assert_eq!(project_refs, vec![("issues", "CASCADE"), ("news", "RESTRICT")]);

    let report = inspect::check(&mut db.conn, &db.schema).unwrap();
    assert!(report.is_compatible());
    assert_eq!(report.foreign_key_issues.len(), 1);
    let fk = &report.foreign_key_issues[0];
    assert_eq!((fk.table.as_str(), fk.column.as_str()), ("issues", "project_id"));
    assert_eq!(fk.delete_rule.as_deref(), Some("CASCADE"));
}

#[test]
fn empty_schema_misses_every_table() {
    let mut db = test_db!();
    let empty = format!("{}_empty", db.schema);
    db.conn
        .batch_execute(&format!("CREATE SCHEMA \"{}\"", empty))
        .unwrap();
    let report = inspect::check(&mut db.conn, &empty).unwrap();
    assert_eq!(report.missing_tables.len(), catalog::tables().len());
    assert_eq!(report.foreign_key_issues.len(), catalog::foreign_keys().len());
}
