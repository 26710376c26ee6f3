// Static catalog consistency

use std::collections::HashSet;

use redmine_schema::catalog::{self, ColumnType};

#[test]
fn catalog_maps_every_redmine_table_once() {
    let names: Vec<&str> = catalog::tables().iter().map(|t| t.name).collect();
    assert_eq!(names.len(), 56);

    let unique: HashSet<&str> = names.iter().copied().collect();
    assert_eq!(unique.len(), names.len());

    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, names);

    for expected in ["issues", "projects", "users", "wiki_content_versions", "changeset_parents"] {
        assert!(catalog::table(expected).is_some(), "missing {}", expected);
    }
    assert!(catalog::table("workspaces").is_none());
}

#[test]
fn every_table_has_a_surrogate_id() {
    for table in catalog::tables() {
        let first = table.columns[0];
        assert_eq!(first.name, "id", "{}", table.name);
        assert_eq!(first.column_type, ColumnType::Int4, "{}", table.name);
        assert!(!first.nullable, "{}", table.name);
    }
}

#[test]
fn column_names_are_unique_per_table() {
    for table in catalog::tables() {
        let names: HashSet<&str> = table.columns.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), table.columns.len(), "{}", table.name);
    }
}

#[test]
fn redmine_column_names_replace_generated_ones() {
    let items = catalog::table("import_items").unwrap();
    assert!(items.column("import_id").is_some());
    assert!(items.column("import_id_id").is_none());

    let parents = catalog::table("changeset_parents").unwrap();
    assert!(parents.column("parent_id").is_some());
    assert!(parents.column("parent").is_none());

    let users = catalog::table("users").unwrap();
    assert!(users.column("type").is_some());
}

#[test]
fn nullability_follows_the_upstream_schema() {
    let issues = catalog::table("issues").unwrap();
    assert!(!issues.column("project_id").unwrap().nullable);
    assert!(!issues.column("priority_id").unwrap().nullable);
    assert!(issues.column("parent_id").unwrap().nullable);
    assert!(issues.column("root_id").unwrap().nullable);

    let attachments = catalog::table("attachments").unwrap();
    assert!(attachments.column("container_id").unwrap().nullable);
    assert!(attachments.column("container_type").unwrap().nullable);
    assert_eq!(
        attachments.column("filesize").unwrap().column_type,
        ColumnType::Int8
    );
}

#[test]
fn foreign_keys_point_at_mapped_columns() {
    for fk in catalog::foreign_keys() {
        let table = catalog::table(fk.table)
            .unwrap_or_else(|| panic!("unknown table {}", fk.table));
        let column = table
            .column(fk.column)
            .unwrap_or_else(|| panic!("unknown column {}.{}", fk.table, fk.column));
        assert_eq!(column.column_type, ColumnType::Int4, "{}.{}", fk.table, fk.column);
        assert!(
            catalog::table(fk.references).is_some(),
            "{}.{} references unknown {}",
            fk.table,
            fk.column,
            fk.references
        );
    }
}

#[test]
fn polymorphic_and_bare_columns_carry_no_foreign_key() {
    let bare = [
        ("journals", "journalized_id"),
        ("comments", "commented_id"),
        ("watchers", "watchable_id"),
        ("custom_values", "customized_id"),
        ("attachments", "container_id"),
        ("changeset_parents", "parent_id"),
        ("member_roles", "inherited_from"),
    ];
    for (table, column) in bare {
        assert!(
            !catalog::foreign_keys()
                .iter()
                .any(|fk| fk.table == table && fk.column == column),
            "{}.{} must not be a foreign key",
            table,
            column
        );
    }
}

#[test]
fn referencing_lists_what_blocks_a_delete() {
    let on_users: Vec<(&str, &str)> = catalog::referencing("users")
        .map(|fk| (fk.table, fk.column))
        .collect();
    assert!(on_users.contains(&("members", "user_id")));
    assert!(on_users.contains(&("groups_users", "group_id")));
    assert!(on_users.contains(&("issues", "author_id")));

    let on_issues: Vec<(&str, &str)> = catalog::referencing("issues")
        .map(|fk| (fk.table, fk.column))
        .collect();
    assert!(on_issues.contains(&("issues", "parent_id")));
    assert!(on_issues.contains(&("issue_relations", "issue_to_id")));

    assert_eq!(catalog::referencing("settings").count(), 0);
}

#[test]
fn unique_keys_name_mapped_columns() {
    for key in catalog::unique_keys() {
        let table = catalog::table(key.table).unwrap();
        for column in key.columns {
            assert!(table.column(column).is_some(), "{}.{}", key.table, column);
        }
    }
    assert!(catalog::unique_keys()
        .iter()
        .any(|k| k.table == "changesets" && k.columns == ["repository_id", "revision"]));
    assert!(catalog::unique_keys()
        .iter()
        .any(|k| k.table == "members" && k.columns == ["user_id", "project_id"]));
}
