//! Compares a live database against the static catalog.

use std::collections::{BTreeMap, HashMap};

use diesel::prelude::*;
use diesel::sql_types::{Integer, Nullable, Text};
use serde::Serialize;

use crate::catalog::{self, ForeignKeySpec, TableSpec};
use crate::error::AppResult;

/// One row of `information_schema.columns`.
#[derive(QueryableByName, Debug, Clone, PartialEq, Eq)]
pub struct LiveColumn {
    #[diesel(sql_type = Text)]
    pub table_name: String,
    #[diesel(sql_type = Text)]
    pub column_name: String,
    #[diesel(sql_type = Text)]
    pub data_type: String,
    #[diesel(sql_type = Text)]
    pub is_nullable: String,
    #[diesel(sql_type = Nullable<Integer>)]
    pub character_maximum_length: Option<i32>,
}

impl LiveColumn {
    pub fn nullable(&self) -> bool {
        self.is_nullable.eq_ignore_ascii_case("YES")
    }
}

/// One referencing column of a foreign key constraint, read from `pg_constraint`.
#[derive(QueryableByName, Debug, Clone, PartialEq, Eq)]
pub struct LiveForeignKey {
    #[diesel(sql_type = Text)]
    pub table_name: String,
    #[diesel(sql_type = Text)]
    pub column_name: String,
    #[diesel(sql_type = Text)]
    pub referenced_table: String,
    #[diesel(sql_type = Text)]
    pub delete_rule: String,
}

impl LiveForeignKey {
    /// RESTRICT and NO ACTION both reject deleting a referenced row.
    pub fn restricts_delete(&self) -> bool {
        matches!(self.delete_rule.as_str(), "RESTRICT" | "NO ACTION")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKeyIssue {
    pub table: String,
    pub column: String,
    pub references: String,
    /// `None` when no constraint exists, otherwise the live delete rule.
    pub delete_rule: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NullabilityMismatch {
    pub table: String,
    pub column: String,
    pub expected_nullable: bool,
    pub actual_nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeMismatch {
    pub table: String,
    pub column: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaReport {
    pub schema: String,
    pub checked_tables: usize,
    pub missing_tables: Vec<String>,
    pub missing_columns: Vec<ColumnRef>,
    pub nullability_mismatches: Vec<NullabilityMismatch>,
    pub type_mismatches: Vec<TypeMismatch>,
    /// Varchar columns whose declared length differs. Reads and writes still
    /// work unless a value exceeds the live limit.
    pub length_mismatches: Vec<TypeMismatch>,
    /// Live columns the mapping does not know about.
    pub extra_columns: Vec<ColumnRef>,
    /// References the database does not enforce with restrict-on-delete.
    /// Upstream installs often carry no constraints at all, so these do not
    /// make the schema incompatible.
    pub foreign_key_issues: Vec<ForeignKeyIssue>,
}

impl SchemaReport {
    /// The mapping can read and write every table. Extra columns and length
    /// differences are tolerated.
    pub fn is_compatible(&self) -> bool {
        self.missing_tables.is_empty()
            && self.missing_columns.is_empty()
            && self.nullability_mismatches.is_empty()
            && self.type_mismatches.is_empty()
    }

    pub fn problem_count(&self) -> usize {
        self.missing_tables.len()
            + self.missing_columns.len()
            + self.nullability_mismatches.len()
            + self.type_mismatches.len()
    }
}

pub fn load_columns(conn: &mut PgConnection, schema_name: &str) -> AppResult<Vec<LiveColumn>> {
    let rows = diesel::sql_query(
        "SELECT table_name::text AS table_name, \
                column_name::text AS column_name, \
                data_type::text AS data_type, \
                is_nullable::text AS is_nullable, \
                character_maximum_length::int4 AS character_maximum_length \
         FROM information_schema.columns \
         WHERE table_schema = $1 \
         ORDER BY table_name, ordinal_position",
    )
    .bind::<Text, _>(schema_name)
    .load::<LiveColumn>(conn)?;
    Ok(rows)
}

/// One row per referencing column. Constraint names are only unique per
/// table, so rows are read from `pg_constraint` by owning table.
pub fn load_foreign_keys(
    conn: &mut PgConnection,
    schema_name: &str,
) -> AppResult<Vec<LiveForeignKey>> {
    let rows = diesel::sql_query(
        "SELECT src.relname::text AS table_name, \
                att.attname::text AS column_name, \
                dst.relname::text AS referenced_table, \
                (CASE con.confdeltype \
                    WHEN 'r' THEN 'RESTRICT' \
                    WHEN 'c' THEN 'CASCADE' \
                    WHEN 'n' THEN 'SET NULL' \
                    WHEN 'd' THEN 'SET DEFAULT' \
                    ELSE 'NO ACTION' \
                 END)::text AS delete_rule \
         FROM pg_catalog.pg_constraint con \
         JOIN pg_catalog.pg_class src ON src.oid = con.conrelid \
         JOIN pg_catalog.pg_class dst ON dst.oid = con.confrelid \
         JOIN pg_catalog.pg_namespace nsp ON nsp.oid = src.relnamespace \
         JOIN pg_catalog.pg_attribute att \
           ON att.attrelid = con.conrelid AND att.attnum = ANY (con.conkey) \
         WHERE con.contype = 'f' AND nsp.nspname = $1 \
         ORDER BY src.relname, att.attname",
    )
    .bind::<Text, _>(schema_name)
    .load::<LiveForeignKey>(conn)?;
    Ok(rows)
}

/// Reads the live columns and constraints of `schema_name` and compares them
/// with the catalog.
pub fn check(conn: &mut PgConnection, schema_name: &str) -> AppResult<SchemaReport> {
    let live = load_columns(conn, schema_name)?;
    let live_fks = load_foreign_keys(conn, schema_name)?;
    let mut report = compare(schema_name, catalog::tables(), &live);
    report.foreign_key_issues = compare_foreign_keys(catalog::foreign_keys(), &live_fks);
    tracing::info!(
        schema = schema_name,
        compatible = report.is_compatible(),
        problems = report.problem_count(),
        extra_columns = report.extra_columns.len(),
        foreign_key_issues = report.foreign_key_issues.len(),
        "schema inspected"
    );
    Ok(report)
}

/// Catalog references that are missing from the database or not enforced
/// with a restricting delete rule.
pub fn compare_foreign_keys(
    expected: &[ForeignKeySpec],
    live: &[LiveForeignKey],
) -> Vec<ForeignKeyIssue> {
    expected
        .iter()
        .filter_map(|spec| {
            let found = live.iter().find(|fk| {
                fk.table_name == spec.table
                    && fk.column_name == spec.column
                    && fk.referenced_table == spec.references
            });
            match found {
                Some(fk) if fk.restricts_delete() => None,
                other => Some(ForeignKeyIssue {
                    table: spec.table.to_string(),
                    column: spec.column.to_string(),
                    references: spec.references.to_string(),
                    delete_rule: other.map(|fk| fk.delete_rule.clone()),
                }),
            }
        })
        .collect()
}

/// Pure comparison of catalog tables against live columns. Live tables the
/// catalog does not map are ignored.
pub fn compare(schema_name: &str, expected: &[TableSpec], live: &[LiveColumn]) -> SchemaReport {
    let mut by_table: BTreeMap<&str, HashMap<&str, &LiveColumn>> = BTreeMap::new();
    for col in live {
        by_table
            .entry(col.table_name.as_str())
            .or_default()
            .insert(col.column_name.as_str(), col);
    }

    let mut report = SchemaReport {
        schema: schema_name.to_string(),
        checked_tables: expected.len(),
        ..Default::default()
    };

    for table in expected {
        let Some(columns) = by_table.get(table.name) else {
            report.missing_tables.push(table.name.to_string());
            continue;
        };

        for spec in table.columns {
            let Some(found) = columns.get(spec.name) else {
                report.missing_columns.push(ColumnRef {
                    table: table.name.to_string(),
                    column: spec.name.to_string(),
                });
                continue;
            };

            if found.nullable() != spec.nullable {
                report.nullability_mismatches.push(NullabilityMismatch {
                    table: table.name.to_string(),
                    column: spec.name.to_string(),
                    expected_nullable: spec.nullable,
                    actual_nullable: found.nullable(),
                });
            }

            let expected_type = spec.column_type.information_schema_name();
            if found.data_type != expected_type {
                report.type_mismatches.push(TypeMismatch {
                    table: table.name.to_string(),
                    column: spec.name.to_string(),
                    expected: expected_type.to_string(),
                    actual: found.data_type.clone(),
                });
            } else if let Some(len) = spec.column_type.max_length() {
                let actual = found.character_maximum_length;
                if actual != Some(len as i32) {
                    report.length_mismatches.push(TypeMismatch {
                        table: table.name.to_string(),
                        column: spec.name.to_string(),
                        expected: format!("varchar({})", len),
                        actual: actual
                            .map(|n| format!("varchar({})", n))
                            .unwrap_or_else(|| "varchar".to_string()),
                    });
                }
            }
        }

        let mut extra: Vec<&str> = columns
            .keys()
            .copied()
            .filter(|name| table.column(name).is_none())
            .collect();
        extra.sort_unstable();
        report
            .extra_columns
            .extend(extra.into_iter().map(|column| ColumnRef {
                table: table.name.to_string(),
                column: column.to_string(),
            }));
    }

    report
}
