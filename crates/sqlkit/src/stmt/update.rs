use super::{Statement, StatementKind, has_conditions, join_conditions};
use crate::error::{SqlError, SqlResult};
use crate::predicate::Predicate;
use crate::value::Value;

/// UPDATE statement builder.
///
/// The table and assignment targets are written as given, unquoted.
///
/// ```rust
/// use sqlkit::update;
///
/// let mut q = update("users");
/// q.set("age", 31).where_("id = 1");
/// assert_eq!(q.to_sql(), "UPDATE users SET age = 31 WHERE id = 1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Update {
    table: Option<String>,
    /// `column = value` fragments
    assignments: Vec<String>,
    where_conditions: Vec<Predicate>,
    pub(super) last_sql: String,
}

impl Update {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target table.
    pub fn update(&mut self, table: &str) -> &mut Self {
        self.table = Some(table.to_string()).filter(|t| !t.trim().is_empty());
        self
    }

    /// Add `column = value`. `None` renders as `null`.
    pub fn set(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        let mut assignment = String::from(column);
        assignment.push_str(" = ");
        value.into().write_to(&mut assignment);
        self.assignments.push(assignment);
        self
    }

    /// Add a WHERE condition (AND-joined with the others).
    pub fn where_(&mut self, cond: impl Into<Predicate>) -> &mut Self {
        self.where_conditions.push(cond.into());
        self
    }

    /// Clear every clause so the builder can be reused.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }
}

impl Statement for Update {
    fn kind(&self) -> StatementKind {
        StatementKind::Update
    }

    fn build_sql(&self) -> String {
        let mut sql = String::from("UPDATE ");
        if let Some(table) = &self.table {
            sql.push_str(table);
        }
        sql.push_str(" SET ");
        sql.push_str(&self.assignments.join(", "));

        if has_conditions(&self.where_conditions) {
            sql.push_str(" WHERE ");
            join_conditions(&mut sql, &self.where_conditions, " AND ");
        }
        sql
    }

    fn validate(&self) -> SqlResult<()> {
        if self.table.is_none() {
            return Err(SqlError::missing(StatementKind::Update, "table"));
        }
        if self.assignments.is_empty() {
            return Err(SqlError::missing(StatementKind::Update, "SET"));
        }
        Ok(())
    }
}
