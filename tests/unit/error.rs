// Classification of persistence failures

use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use redmine_schema::AppError;

struct Info {
    message: &'static str,
    constraint: Option<&'static str>,
}

impl DatabaseErrorInformation for Info {
    fn message(&self) -> &str {
        self.message
    }
    fn details(&self) -> Option<&str> {
        None
    }
    fn hint(&self) -> Option<&str> {
        None
    }
    fn table_name(&self) -> Option<&str> {
        None
    }
    fn column_name(&self) -> Option<&str> {
        None
    }
    fn constraint_name(&self) -> Option<&str> {
        self.constraint
    }
    fn statement_position(&self) -> Option<i32> {
        None
    }
}

fn db_error(kind: DatabaseErrorKind, message: &'static str, constraint: Option<&'static str>) -> DieselError {
    DieselError::DatabaseError(kind, Box::new(Info { message, constraint }))
}

#[test]
fn unique_violation_becomes_conflict() {
    let err = AppError::from(db_error(
        DatabaseErrorKind::UniqueViolation,
        "duplicate key value violates unique constraint",
        Some("uq_members_user_id_project_id"),
    ));
    assert!(err.is_conflict());
    match err {
        AppError::Conflict { constraint, .. } => {
            assert_eq!(constraint.as_deref(), Some("uq_members_user_id_project_id"))
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn foreign_key_violation_is_classified() {
    let err = AppError::from(db_error(
        DatabaseErrorKind::ForeignKeyViolation,
        "update or delete on table \"projects\" violates foreign key constraint",
        Some("fk_issues_project_id"),
    ));
    assert!(err.is_foreign_key_violation());
    assert!(!err.is_conflict());
    assert!(err.to_string().starts_with("Foreign key violation"));
}

#[test]
fn missing_row_becomes_not_found() {
    let err = AppError::from(DieselError::NotFound);
    assert!(err.is_not_found());
}

#[test]
fn other_database_errors_pass_through() {
    let err = AppError::from(db_error(
        DatabaseErrorKind::NotNullViolation,
        "null value in column",
        None,
    ));
    assert!(matches!(err, AppError::Database(_)));
    assert!(!err.is_conflict());
    assert!(!err.is_foreign_key_violation());
}

#[test]
fn helper_constructors_describe_the_problem() {
    assert_eq!(
        AppError::not_found("projects 4").to_string(),
        "Not found: projects 4"
    );
    assert_eq!(
        AppError::hierarchy("node 3 is part of a parent cycle").to_string(),
        "Hierarchy error: node 3 is part of a parent cycle"
    );
}
