use super::{Statement, StatementKind, has_conditions, join_conditions};
use crate::error::{SqlError, SqlResult};
use crate::ident::TableRef;
use crate::predicate::Predicate;

/// DELETE statement builder.
///
/// Without a WHERE condition every row of the table is targeted.
#[derive(Debug, Clone, Default)]
pub struct Delete {
    table: Option<String>,
    where_conditions: Vec<Predicate>,
    pub(super) last_sql: String,
}

impl Delete {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target table. Accepts a name or a [`TableRef`].
    pub fn from(&mut self, table: impl Into<TableRef>) -> &mut Self {
        let table = table.into();
        self.table = if table.is_empty() {
            None
        } else {
            Some(table.to_string())
        };
        self
    }

    /// Set the target table qualified by a schema: `schema."table"`.
    pub fn from_schema(&mut self, schema: &str, table: &str) -> &mut Self {
        self.from(TableRef::new(table).schema(schema))
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

impl Statement for Delete {
    fn kind(&self) -> StatementKind {
        StatementKind::Delete
    }

    fn build_sql(&self) -> String {
        let mut sql = String::from("DELETE FROM ");
        if let Some(table) = &self.table {
            sql.push_str(table);
        }
        if has_conditions(&self.where_conditions) {
            sql.push_str(" WHERE ");
            join_conditions(&mut sql, &self.where_conditions, " AND ");
        }
        sql
    }

    fn validate(&self) -> SqlResult<()> {
        if self.table.is_none() {
            return Err(SqlError::missing(StatementKind::Delete, "FROM"));
        }
        Ok(())
    }
}
