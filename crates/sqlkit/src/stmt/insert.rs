use super::{Statement, StatementKind};
use crate::error::{SqlError, SqlResult};
use crate::ident::{TableRef, push_quoted};
use crate::value::Value;

/// INSERT statement builder.
///
/// ```rust
/// use sqlkit::insert;
///
/// let mut q = insert();
/// q.insert("name", "Alice").insert("age", 30).table("users");
/// assert_eq!(q.to_sql(), r#"INSERT INTO "users"("name", "age") VALUES('Alice', 30)"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Insert {
    /// Rendered target table
    table: Option<String>,
    /// Quoted column names
    columns: Vec<String>,
    /// Formatted values, parallel to `columns`
    values: Vec<String>,
    /// `INSERT OR REPLACE`
    replace: bool,
    pub(super) last_sql: String,
}

impl Insert {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column and its value. `None` renders as `null`.
    pub fn insert(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.push_column(column, value.into().to_sql())
    }

    /// Add a column whose value is bound later through a `?` placeholder.
    pub fn insert_placeholder(&mut self, column: &str) -> &mut Self {
        self.push_column(column, "?".to_string())
    }

    fn push_column(&mut self, column: &str, value: String) -> &mut Self {
        let mut name = String::with_capacity(column.len() + 2);
        push_quoted(&mut name, column);
        self.columns.push(name);
        self.values.push(value);
        self
    }

    /// Set the target table. Accepts a name or a [`TableRef`].
    pub fn table(&mut self, table: impl Into<TableRef>) -> &mut Self {
        let table = table.into();
        self.table = if table.is_empty() {
            None
        } else {
            Some(table.to_string())
        };
        self
    }

    /// Set the target table qualified by a schema: `schema."table"`.
    pub fn table_schema(&mut self, schema: &str, table: &str) -> &mut Self {
        self.table(TableRef::new(table).schema(schema))
    }

    /// Emit `INSERT OR REPLACE INTO` instead of `INSERT INTO`.
    pub fn replace(&mut self, replace: bool) -> &mut Self {
        self.replace = replace;
        self
    }

    /// Clear every clause so the builder can be reused.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }
}

impl Statement for Insert {
    fn kind(&self) -> StatementKind {
        StatementKind::Insert
    }

    fn build_sql(&self) -> String {
        let mut sql = String::from(if self.replace {
            "INSERT OR REPLACE INTO "
        } else {
            "INSERT INTO "
        });
        if let Some(table) = &self.table {
            sql.push_str(table);
        }
        sql.push('(');
        sql.push_str(&self.columns.join(", "));
        sql.push_str(") VALUES(");
        sql.push_str(&self.values.join(", "));
        sql.push(')');
        sql
    }

    fn validate(&self) -> SqlResult<()> {
        if self.table.is_none() {
            return Err(SqlError::missing(StatementKind::Insert, "INTO"));
        }
        if self.columns.is_empty() {
            return Err(SqlError::missing(StatementKind::Insert, "column list"));
        }
        Ok(())
    }
}
