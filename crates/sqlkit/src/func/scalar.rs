use super::{is_blank, push_alias};
use crate::stmt::Select;
use crate::value::{Value, format_list};
use std::fmt::Display;

/// `CAST(expr AS type)`
#[derive(Debug, Clone)]
pub struct Cast {
    expr: String,
    ty: String,
}

impl Cast {
    pub fn new(expr: impl Display, ty: &str) -> Self {
        Self {
            expr: expr.to_string(),
            ty: ty.to_string(),
        }
    }

    /// Build the SQL fragment.
    pub fn to_sql(&self) -> String {
        format!("CAST({} AS {})", self.expr, self.ty)
    }
}

/// `ROUND(expr, precision) [AS alias]`
///
/// `expr` is usually a [`Column`](crate::Column) or a [`Cast`].
#[derive(Debug, Clone)]
pub struct Round {
    expr: String,
    precision: i32,
    alias: Option<String>,
}

impl Round {
    pub fn new(expr: impl Display, precision: i32) -> Self {
        Self {
            expr: expr.to_string(),
            precision,
            alias: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Build the SQL fragment.
    pub fn to_sql(&self) -> String {
        let mut sql = format!("ROUND({}, {})", self.expr, self.precision);
        push_alias(&mut sql, self.alias.as_deref());
        sql
    }
}

/// `COALESCE(a, b, ...) [AS alias]`
#[derive(Debug, Clone, Default)]
pub struct Coalesce {
    args: Vec<Value>,
    alias: Option<String>,
}

impl Coalesce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a list of operands.
    pub fn of<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            alias: None,
        }
    }

    /// Append one operand.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Build the SQL fragment.
    pub fn to_sql(&self) -> String {
        let mut sql = format!("COALESCE({})", format_list(&self.args));
        push_alias(&mut sql, self.alias.as_deref());
        sql
    }
}

/// `EXISTS (subquery) [AS alias]`
#[derive(Debug, Clone)]
pub struct Exists {
    subquery: String,
    alias: Option<String>,
}

impl Exists {
    pub fn new(subquery: &Select) -> Self {
        Self::raw(subquery.to_sql())
    }

    /// Wrap raw sub-query text.
    pub fn raw(subquery: impl Into<String>) -> Self {
        Self {
            subquery: subquery.into(),
            alias: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into()).filter(|a: &String| !is_blank(a));
        self
    }

    /// Build the SQL fragment.
    pub fn to_sql(&self) -> String {
        let mut sql = format!("EXISTS ({})", self.subquery);
        push_alias(&mut sql, self.alias.as_deref());
        sql
    }
}
