//! Column expressions.
//!
//! [`Column`] is an append-only text buffer holding one scalar expression or
//! predicate. Every operator consumes the column, appends fixed SQL syntax plus
//! a formatted operand, and hands the column back so calls chain:
//!
//! ```rust
//! use sqlkit::{col, Column, Qualifier};
//!
//! let adult = col("age").gte(18);
//! assert_eq!(adult.as_str(), r#""age" >= 18"#);
//!
//! let total = Column::qualified("price", Qualifier::new().table("o")) * 2;
//! assert_eq!(total.to_string(), r#"o."price" * 2"#);
//! ```
//!
//! Combining two columns with [`Column::and`] / [`Column::or`] produces a
//! [`Predicate`] tree instead of rewriting either operand.

use crate::ident::push_quoted;
use crate::predicate::Predicate;
use crate::stmt::Select;
use crate::value::{Value, format_list};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Construction-time decorations of a column: table prefix, cast, output alias.
///
/// Renders around the column text as `table.<text>::cast AS alias`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Qualifier {
    pub table: Option<String>,
    pub cast: Option<String>,
    pub alias: Option<String>,
}

impl Qualifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix with a table name or alias.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = non_empty(table.into());
        self
    }

    /// Append a `::type` cast.
    pub fn cast(mut self, ty: impl Into<String>) -> Self {
        self.cast = non_empty(ty.into());
        self
    }

    /// Append ` AS alias`.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = non_empty(alias.into());
        self
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// A single SQL expression built by chaining operators.
#[derive(Debug, Clone, Default)]
pub struct Column {
    sql: String,
}

impl Column {
    /// A bare quoted column: `"name"`.
    pub fn new(name: &str) -> Self {
        Self::qualified(name, Qualifier::default())
    }

    /// A quoted column with a table prefix: `table."name"`.
    pub fn with_table(table: &str, name: &str) -> Self {
        Self::qualified(name, Qualifier::new().table(table))
    }

    /// A quoted column with decorations.
    pub fn qualified(name: &str, q: Qualifier) -> Self {
        let mut sql = String::new();
        push_quoted(&mut sql, name);
        Self::decorate(sql, q)
    }

    /// Wrap an already-built expression with new decorations.
    pub fn wrap(expr: Column, q: Qualifier) -> Self {
        Self::decorate(expr.sql, q)
    }

    /// A literal value used as an expression (`'text'::cast AS alias`).
    ///
    /// Pass a [`Param`](crate::Param) to emit the text unquoted.
    pub fn value(value: impl Into<Value>, q: Qualifier) -> Self {
        Self::decorate(value.into().to_sql(), q)
    }

    /// Raw SQL text used as an expression.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self { sql: sql.into() }
    }

    fn decorate(body: String, q: Qualifier) -> Self {
        let mut sql = String::with_capacity(body.len() + 16);
        if let Some(table) = &q.table {
            sql.push_str(table);
            sql.push('.');
        }
        sql.push_str(&body);
        if let Some(cast) = &q.cast {
            sql.push_str("::");
            sql.push_str(cast);
        }
        if let Some(alias) = &q.alias {
            sql.push_str(" AS ");
            sql.push_str(alias);
        }
        Self { sql }
    }

    /// The accumulated SQL text.
    pub fn as_str(&self) -> &str {
        &self.sql
    }

    /// Consume the column, returning its SQL text.
    pub fn into_sql(self) -> String {
        self.sql
    }

    /// Check if nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    fn push_op(mut self, op: &str, value: impl Into<Value>) -> Self {
        self.sql.push(' ');
        self.sql.push_str(op);
        self.sql.push(' ');
        value.into().write_to(&mut self.sql);
        self
    }

    // ==================== Comparison ====================

    /// `<expr> = value`
    pub fn eq(self, value: impl Into<Value>) -> Self {
        self.push_op("=", value)
    }

    /// `<expr> != value`
    pub fn ne(self, value: impl Into<Value>) -> Self {
        self.push_op("!=", value)
    }

    /// `<expr> > value`
    pub fn gt(self, value: impl Into<Value>) -> Self {
        self.push_op(">", value)
    }

    /// `<expr> >= value`
    pub fn gte(self, value: impl Into<Value>) -> Self {
        self.push_op(">=", value)
    }

    /// `<expr> < value`
    pub fn lt(self, value: impl Into<Value>) -> Self {
        self.push_op("<", value)
    }

    /// `<expr> <= value`
    pub fn lte(self, value: impl Into<Value>) -> Self {
        self.push_op("<=", value)
    }

    // ==================== NULL checks ====================

    /// `<expr> IS NULL`
    pub fn is_null(mut self) -> Self {
        self.sql.push_str(" IS NULL");
        self
    }

    /// `<expr> IS NOT NULL`
    pub fn is_not_null(mut self) -> Self {
        self.sql.push_str(" IS NOT NULL");
        self
    }

    // ==================== Lists & sub-queries ====================

    /// `<expr> IN (v1, v2, ...)`
    ///
    /// An empty list renders as `IN ()`, which the database will reject.
    pub fn in_list<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.sql.push_str(" IN (");
        self.sql.push_str(&format_list(values));
        self.sql.push(')');
        self
    }

    /// `<expr> NOT IN (v1, v2, ...)`
    ///
    /// A single-element list renders as `<expr> != v1`.
    pub fn not_in<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mut values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.len() == 1 {
            let only = values.remove(0);
            return self.push_op("!=", only);
        }
        self.sql.push_str(" NOT IN (");
        self.sql.push_str(&format_list(values));
        self.sql.push(')');
        self
    }

    /// `<expr> IN (<sql>)` with raw sub-query text.
    pub fn in_sql(mut self, subquery: &str) -> Self {
        self.sql.push_str(" IN (");
        self.sql.push_str(subquery);
        self.sql.push(')');
        self
    }

    /// `<expr> IN (<select>)`
    pub fn in_query(self, subquery: &Select) -> Self {
        self.in_sql(&subquery.to_sql())
    }

    // ==================== Pattern matching ====================

    /// `<expr> LIKE 'pattern'`. An empty pattern leaves the column unchanged.
    ///
    /// Wildcards (`%`, `_`) must be part of `pattern`.
    pub fn like(self, pattern: &str) -> Self {
        if pattern.is_empty() {
            return self;
        }
        self.push_op("LIKE", pattern)
    }

    /// `<expr> ILIKE 'pattern'`. An empty pattern leaves the column unchanged.
    pub fn ilike(self, pattern: &str) -> Self {
        if pattern.is_empty() {
            return self;
        }
        self.push_op("ILIKE", pattern)
    }

    // ==================== String concatenation ====================

    /// `<expr> || 'data'`
    pub fn append(self, data: &str) -> Self {
        self.push_op("||", data)
    }

    /// `'data' || <expr>`
    pub fn prepend(mut self, data: &str) -> Self {
        let mut sql = Value::from(data).to_sql();
        sql.push_str(" || ");
        sql.push_str(&self.sql);
        self.sql = sql;
        self
    }

    // ==================== Boolean combination ====================

    /// `<expr> AND <sql>`, appended in place.
    pub fn and_raw(mut self, sql: &str) -> Self {
        self.sql.push_str(" AND ");
        self.sql.push_str(sql);
        self
    }

    /// `<expr> OR <sql>`, appended in place.
    pub fn or_raw(mut self, sql: &str) -> Self {
        self.sql.push_str(" OR ");
        self.sql.push_str(sql);
        self
    }

    /// `(<expr>) AND (<other>)` as a new predicate.
    pub fn and(self, other: impl Into<Predicate>) -> Predicate {
        Predicate::from(self).and(other)
    }

    /// `(<expr>) OR (<other>)` as a new predicate.
    pub fn or(self, other: impl Into<Predicate>) -> Predicate {
        Predicate::from(self).or(other)
    }
}

macro_rules! impl_arith {
    ($($trait:ident, $method:ident, $op:literal;)*) => {
        $(
            impl<T: Into<Value>> $trait<T> for Column {
                type Output = Column;

                fn $method(self, rhs: T) -> Column {
                    self.push_op($op, rhs)
                }
            }
        )*
    };
}

impl_arith! {
    Add, add, "+";
    Sub, sub, "-";
    Mul, mul, "*";
    Div, div, "/";
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl AsRef<str> for Column {
    fn as_ref(&self) -> &str {
        &self.sql
    }
}

impl From<Column> for Value {
    fn from(c: Column) -> Self {
        Value::Expr(c.sql)
    }
}

impl From<&Column> for Value {
    fn from(c: &Column) -> Self {
        Value::Expr(c.sql.clone())
    }
}

/// Shorthand for [`Column::new`].
pub fn col(name: &str) -> Column {
    Column::new(name)
}
