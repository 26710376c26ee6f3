use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(DieselError),

    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Connection error: {0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("Conflict: {message}")]
    Conflict {
        message: String,
        constraint: Option<String>,
    },

    #[error("Foreign key violation: {message}")]
    ForeignKey {
        message: String,
        constraint: Option<String>,
    },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Hierarchy error: {message}")]
    Hierarchy { message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<DieselError> for AppError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                tracing::debug!(constraint = ?info.constraint_name(), "unique violation");
                AppError::Conflict {
                    message: info.message().to_string(),
                    constraint: info.constraint_name().map(str::to_string),
                }
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                tracing::debug!(constraint = ?info.constraint_name(), "foreign key violation");
                AppError::ForeignKey {
                    message: info.message().to_string(),
                    constraint: info.constraint_name().map(str::to_string),
                }
            }
            DieselError::NotFound => AppError::NotFound {
                resource: "record".to_string(),
            },
            other => AppError::Database(other),
        }
    }
}

impl AppError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn hierarchy(message: impl Into<String>) -> Self {
        Self::Hierarchy {
            message: message.into(),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::Conflict { .. })
    }

    /// True for a delete rejected because dependents still reference the row,
    /// and for a write whose reference points at a missing row.
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, AppError::ForeignKey { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }
}
