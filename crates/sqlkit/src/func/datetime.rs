use crate::ident::push_quoted;
use std::fmt::Display;

/// `to_timestamp(expr)`
#[derive(Debug, Clone)]
pub struct ToTimestamp {
    expr: String,
}

impl ToTimestamp {
    pub fn new(expr: impl Display) -> Self {
        Self {
            expr: expr.to_string(),
        }
    }

    /// Build the SQL fragment.
    pub fn to_sql(&self) -> String {
        format!("to_timestamp({})", self.expr)
    }
}

/// `to_char(source[, 'format']) [AS "alias"]`
///
/// The source is emitted as-is for column references and function results,
/// or wrapped in single quotes when it is a literal value.
#[derive(Debug, Clone)]
pub struct ToChar {
    source: String,
    quote_source: bool,
    format: Option<String>,
    alias: Option<String>,
}

impl ToChar {
    /// `quote_source` wraps `source` in single quotes.
    pub fn new(source: impl Display, quote_source: bool) -> Self {
        Self {
            source: source.to_string(),
            quote_source,
            format: None,
            alias: None,
        }
    }

    /// Format a column or other expression.
    pub fn expr(source: impl Display) -> Self {
        Self::new(source, false)
    }

    /// Format a literal value such as `'2024-01-01 10:00'`.
    pub fn literal(source: &str) -> Self {
        Self::new(source, true)
    }

    /// Format the result of `to_timestamp(...)`.
    pub fn timestamp(ts: &ToTimestamp) -> Self {
        Self::new(ts.to_sql(), false)
    }

    /// Set the template pattern, e.g. `YYYY-MM-DD`.
    pub fn format(mut self, pattern: &str) -> Self {
        self.format = Some(pattern.to_string()).filter(|p: &String| !p.is_empty());
        self
    }

    /// Set the output alias, emitted as a quoted identifier.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into()).filter(|a: &String| !a.is_empty());
        self
    }

    /// Build the SQL fragment.
    pub fn to_sql(&self) -> String {
        let mut sql = String::from("to_char(");
        if self.quote_source {
            sql.push('\'');
            sql.push_str(&self.source);
            sql.push('\'');
        } else {
            sql.push_str(&self.source);
        }
        if let Some(format) = &self.format {
            sql.push_str(", '");
            sql.push_str(format);
            sql.push('\'');
        }
        sql.push(')');
        if let Some(alias) = &self.alias {
            sql.push_str(" AS ");
            push_quoted(&mut sql, alias);
        }
        sql
    }
}
