//! # Constraint Classification
//!
//! Maps store failures onto the constraint kinds declared by the schema.
//! PostgreSQL and SQLite report the same violations with different codes and
//! messages; both are recognised here.

use std::fmt;

use sea_orm::{DbErr, SqlErr};

/// Kinds of constraint enforced by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Primary key or unique index violation
    Unique,
    /// Missing parent row, or parent still referenced by a NO ACTION key
    ForeignKey,
    /// Required column left empty
    NotNull,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintKind::Unique => write!(f, "unique"),
            ConstraintKind::ForeignKey => write!(f, "foreign_key"),
            ConstraintKind::NotNull => write!(f, "not_null"),
        }
    }
}

/// Driver message fragments, lowercased.
const UNIQUE_PATTERNS: &[&str] = &["unique constraint failed", "duplicate key value violates unique constraint"];
const FOREIGN_KEY_PATTERNS: &[&str] = &["foreign key constraint failed", "violates foreign key constraint"];
const NOT_NULL_PATTERNS: &[&str] = &["not null constraint failed", "violates not-null constraint"];

/// Classifies a Sea-ORM error as a constraint violation.
///
/// Returns the constraint kind together with the driver's message, or `None`
/// when the error is not a constraint failure.
pub fn classify_db_err(err: &DbErr) -> Option<(ConstraintKind, String)> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => return Some((ConstraintKind::Unique, message)),
        Some(SqlErr::ForeignKeyConstraintViolation(message)) => return Some((ConstraintKind::ForeignKey, message)),
        _ => {},
    }

    let message = driver_message(err);
    classify_message(&message).map(|kind| (kind, message))
}

/// The driver's own text, without Sea-ORM's `Custom Error:` /
/// `Execution Error:` / `Query Error:` prefix.
fn driver_message(err: &DbErr) -> String {
    match err {
        DbErr::Custom(message) => message.clone(),
        DbErr::Exec(inner) | DbErr::Query(inner) => inner.to_string(),
        other => other.to_string(),
    }
}

/// Classifies a raw driver message.
pub fn classify_message(message: &str) -> Option<ConstraintKind> {
    let lowered = message.to_lowercase();
    let matches_any = |patterns: &[&str]| patterns.iter().any(|p| lowered.contains(p));

    if matches_any(NOT_NULL_PATTERNS) {
        Some(ConstraintKind::NotNull)
    }
    else if matches_any(FOREIGN_KEY_PATTERNS) {
        Some(ConstraintKind::ForeignKey)
    }
    else if matches_any(UNIQUE_PATTERNS) {
        Some(ConstraintKind::Unique)
    }
    else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_messages() {
        assert_eq!(
            classify_message("UNIQUE constraint failed: products.product_id"),
            Some(ConstraintKind::Unique)
        );
        assert_eq!(
            classify_message("FOREIGN KEY constraint failed"),
            Some(ConstraintKind::ForeignKey)
        );
        assert_eq!(
            classify_message("NOT NULL constraint failed: reviews.review_score"),
            Some(ConstraintKind::NotNull)
        );
    }

    #[test]
    fn test_postgres_messages() {
        assert_eq!(
            classify_message("duplicate key value violates unique constraint \"payments_pkey\""),
            Some(ConstraintKind::Unique)
        );
        assert_eq!(
            classify_message(
                "insert or update on table \"reviews\" violates foreign key constraint \"fk_reviews_order_id\""
            ),
            Some(ConstraintKind::ForeignKey)
        );
        assert_eq!(
            classify_message("null value in column \"price\" of relation \"order_items\" violates not-null constraint"),
            Some(ConstraintKind::NotNull)
        );
    }

    #[test]
    fn test_unrelated_message() {
        assert_eq!(classify_message("connection reset by peer"), None);
    }

    #[test]
    fn test_classify_custom_db_err() {
        let err = DbErr::Custom("FOREIGN KEY constraint failed".to_string());
        let (kind, message) = classify_db_err(&err).expect("should classify");
        assert_eq!(kind, ConstraintKind::ForeignKey);
        assert_eq!(message, "FOREIGN KEY constraint failed");
    }

    #[test]
    fn test_classified_message_drops_orm_prefix() {
        use sea_orm::RuntimeErr;

        let err = DbErr::Exec(RuntimeErr::Internal(
            "NOT NULL constraint failed: products.product_weight_g".to_string(),
        ));
        let (kind, message) = classify_db_err(&err).expect("should classify");
        assert_eq!(kind, ConstraintKind::NotNull);
        assert_eq!(message, "NOT NULL constraint failed: products.product_weight_g");
    }

    #[test]
    fn test_display() {
        assert_eq!(ConstraintKind::Unique.to_string(), "unique");
        assert_eq!(ConstraintKind::ForeignKey.to_string(), "foreign_key");
        assert_eq!(ConstraintKind::NotNull.to_string(), "not_null");
    }
}
