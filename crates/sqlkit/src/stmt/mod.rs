//! Statement builders.
//!
//! Each statement kind accumulates clause fragments through `&mut self`
//! methods and serializes them in a fixed clause order:
//!
//! - [`Select`]: `SELECT [DISTINCT] .. FROM .. JOIN .. WHERE .. GROUP BY .. HAVING .. ORDER BY .. LIMIT .. OFFSET ..`
//! - [`Insert`]: `INSERT [OR REPLACE] INTO ..(..) VALUES(..)`
//! - [`Update`]: `UPDATE .. SET .. [WHERE ..]`
//! - [`Delete`]: `DELETE FROM .. [WHERE ..]`
//!
//! `to_sql()` always succeeds and may produce incomplete SQL for an
//! unfinished builder. `render()` validates mandatory clauses first, stores
//! the text in the builder (see `last_sql()`), and logs it.
//! `reset()` returns a builder to its freshly constructed state.

mod delete;
mod insert;
mod select;
mod update;

pub use delete::Delete;
pub use insert::Insert;
pub use select::{JoinKind, Select, SelectItem};
pub use update::Update;

use crate::error::SqlResult;
use crate::predicate::Predicate;
use std::fmt;

/// The kind of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base trait for statement builders.
pub trait Statement {
    /// The statement kind.
    fn kind(&self) -> StatementKind;

    /// Build the SQL string from the current state.
    fn build_sql(&self) -> String;

    /// Check that every mandatory clause is present.
    fn validate(&self) -> SqlResult<()> {
        Ok(())
    }
}

/// Inherent `to_sql`, `render`, `last_sql` and `Display` for a statement type
/// with a `pub(super) last_sql: String` field.
macro_rules! impl_render {
    ($($t:ty),* $(,)?) => {
        $(
            impl $t {
                /// Build the SQL text without validation.
                pub fn to_sql(&self) -> String {
                    <Self as crate::stmt::Statement>::build_sql(self)
                }

                /// Validate, build and cache the SQL text.
                pub fn render(&mut self) -> crate::error::SqlResult<String> {
                    let kind = <Self as crate::stmt::Statement>::kind(self);
                    if let Err(err) = <Self as crate::stmt::Statement>::validate(self) {
                        crate::trace::rejected(kind, &err);
                        return Err(err);
                    }
                    let sql = <Self as crate::stmt::Statement>::build_sql(self);
                    crate::trace::rendered(kind, &sql);
                    self.last_sql.clone_from(&sql);
                    Ok(sql)
                }

                /// The text produced by the last successful `render()`.
                pub fn last_sql(&self) -> &str {
                    &self.last_sql
                }
            }

            impl std::fmt::Display for $t {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.to_sql())
                }
            }
        )*
    };
}

impl_render!(Select, Insert, Update, Delete);

/// Join conditions with `sep`, parenthesizing conditions that write as an OR
/// node when there is more than one condition.
pub(crate) fn join_conditions(out: &mut String, conditions: &[Predicate], sep: &str) {
    let live: Vec<&Predicate> = conditions.iter().filter(|p| !p.is_empty()).collect();
    let wrap = live.len() > 1;
    for (i, p) in live.into_iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        if wrap && matches!(p.effective(), Predicate::Or(..)) {
            out.push('(');
            p.write_to(out);
            out.push(')');
        } else {
            p.write_to(out);
        }
    }
}

/// Check if any condition renders to text.
pub(crate) fn has_conditions(conditions: &[Predicate]) -> bool {
    conditions.iter().any(|p| !p.is_empty())
}

#[cfg(test)]
mod tests;
