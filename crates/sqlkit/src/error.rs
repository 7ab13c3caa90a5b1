//! Error types for sqlkit

use crate::stmt::StatementKind;
use thiserror::Error;

/// Result type alias for sqlkit operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors reported when a statement cannot be rendered.
///
/// Only [`render`](crate::Select::render) reports errors. The permissive
/// `to_sql()` path never fails and may emit incomplete SQL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// A clause the statement cannot be rendered without was never set.
    #[error("{statement} statement is missing its {clause} clause")]
    MissingClause {
        statement: StatementKind,
        clause: &'static str,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl SqlError {
    /// Create a missing-clause error
    pub fn missing(statement: StatementKind, clause: &'static str) -> Self {
        Self::MissingClause { statement, clause }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a missing-clause error
    pub fn is_missing_clause(&self) -> bool {
        matches!(self, Self::MissingClause { .. })
    }
}
