//! Store error taxonomy.
//!
//! PostgreSQL rejects bad writes with SQLSTATE class 23 codes. The store
//! splits those into two recoverable-by-choice variants and leaves every
//! other driver error opaque, so callers decide which failures stop a run.

use thiserror::Error;

/// SQLSTATE: unique_violation.
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE: check_violation.
const CHECK_VIOLATION: &str = "23514";
/// SQLSTATE: not_null_violation.
const NOT_NULL_VIOLATION: &str = "23502";
/// SQLSTATE: foreign_key_violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Errors surfaced by [`crate::DirectoryStore`] operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique, check, or not-null constraint rejected the write.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// The write referenced a client row that does not exist.
    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Any other database failure, including schema errors.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

/// Integrity-violation category for a SQLSTATE code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViolationKind {
    Constraint,
    ForeignKey,
}

/// Classifies a SQLSTATE code, if it names an integrity violation we map.
pub(crate) fn classify_sqlstate(code: &str) -> Option<ViolationKind> {
    match code {
        UNIQUE_VIOLATION | CHECK_VIOLATION | NOT_NULL_VIOLATION => Some(ViolationKind::Constraint),
        FOREIGN_KEY_VIOLATION => Some(ViolationKind::ForeignKey),
        _ => None,
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if let Some(kind) = db_err.code().and_then(|code| classify_sqlstate(code.as_ref())) {
                return match kind {
                    ViolationKind::Constraint => StoreError::ConstraintViolation(db_err.to_string()),
                    ViolationKind::ForeignKey => StoreError::ForeignKeyViolation(db_err.to_string()),
                };
            }
        }
        StoreError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_unique_violation() {
        assert_eq!(classify_sqlstate("23505"), Some(ViolationKind::Constraint));
    }

    #[test]
    fn test_classify_check_violation() {
        assert_eq!(classify_sqlstate("23514"), Some(ViolationKind::Constraint));
    }

    #[test]
    fn test_classify_not_null_violation() {
        assert_eq!(classify_sqlstate("23502"), Some(ViolationKind::Constraint));
    }

    #[test]
    fn test_classify_foreign_key_violation() {
        assert_eq!(classify_sqlstate("23503"), Some(ViolationKind::ForeignKey));
    }

    #[test]
    fn test_classify_other_codes_pass_through() {
        // undefined_table, as raised by dropping an absent schema
        assert_eq!(classify_sqlstate("42P01"), None);
        assert_eq!(classify_sqlstate(""), None);
    }

    #[test]
    fn test_non_database_errors_stay_opaque() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::ConstraintViolation("duplicate mail".to_string());
        assert_eq!(err.to_string(), "constraint violation: duplicate mail");

        let err = StoreError::ForeignKeyViolation("no such client".to_string());
        assert_eq!(err.to_string(), "foreign key violation: no such client");
    }
}
