//! `tracing` events for rendered statements.
//!
//! With the `tracing` feature (on by default) every successful `render()`
//! emits a `DEBUG` event and every rejected one a `WARN` event, both on target
//! `sqlkit.sql`. Without the feature these functions compile to nothing.
//!
//! The crate never installs a subscriber.

use crate::error::SqlError;
use crate::stmt::StatementKind;

/// Rendered SQL longer than this many bytes is truncated in log events.
pub const MAX_LOGGED_SQL: usize = 200;

/// Longest prefix of `sql` that fits in `max_bytes` without splitting a char.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn clip_sql(sql: &str, max_bytes: usize) -> &str {
    let end = sql
        .char_indices()
        .map(|(start, c)| start + c.len_utf8())
        .take_while(|&end| end <= max_bytes)
        .last()
        .unwrap_or(0);
    &sql[..end]
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn display_sql(sql: &str) -> String {
    if sql.len() > MAX_LOGGED_SQL {
        format!("{}...", clip_sql(sql, MAX_LOGGED_SQL))
    } else {
        sql.to_string()
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn rendered(kind: StatementKind, sql: &str) {
    tracing::debug!(
        target: "sqlkit.sql",
        statement = %kind,
        sql = %display_sql(sql),
        "rendered statement"
    );
}

#[cfg(feature = "tracing")]
pub(crate) fn rejected(kind: StatementKind, err: &SqlError) {
    tracing::warn!(
        target: "sqlkit.sql",
        statement = %kind,
        error = %err,
        "statement rejected"
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn rendered(_kind: StatementKind, _sql: &str) {}

#[cfg(not(feature = "tracing"))]
pub(crate) fn rejected(_kind: StatementKind, _err: &SqlError) {}
