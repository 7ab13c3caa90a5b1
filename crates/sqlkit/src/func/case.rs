use super::push_alias;
use crate::predicate::Predicate;
use crate::value::Value;

/// `CASE WHEN .. THEN .. [ELSE ..] END [AS alias]`
///
/// Each [`when`](Case::when) clause is placed in front of the ones added
/// before it, so clauses render newest first:
///
/// ```rust
/// use sqlkit::{col, Case};
///
/// let c = Case::new()
///     .when(col("n").lt(0), "negative")
///     .when(col("n").eq(0), "zero")
///     .otherwise("positive");
/// assert_eq!(
///     c.to_sql(),
///     r#"CASE WHEN "n" = 0 THEN 'zero' WHEN "n" < 0 THEN 'negative' ELSE 'positive' END"#
/// );
/// ```
///
/// Add clauses in reverse when the first match must win.
#[derive(Debug, Clone, Default)]
pub struct Case {
    whens: Vec<(String, String)>,
    otherwise: Option<String>,
    alias: Option<String>,
}

impl Case {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `WHEN cond THEN result` clause.
    pub fn when(mut self, cond: impl Into<Predicate>, result: impl Into<Value>) -> Self {
        self.whens
            .push((cond.into().to_sql(), result.into().to_sql()));
        self
    }

    /// Set the `ELSE` text. It is always quoted; blank text is ignored.
    pub fn otherwise(mut self, text: &str) -> Self {
        self.otherwise = if text.trim().is_empty() {
            None
        } else {
            Some(Value::from(text).to_sql())
        };
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Build the SQL fragment.
    pub fn to_sql(&self) -> String {
        let mut sql = String::from("CASE");
        for (cond, result) in self.whens.iter().rev() {
            sql.push_str(" WHEN ");
            sql.push_str(cond);
            sql.push_str(" THEN ");
            sql.push_str(result);
        }
        if let Some(otherwise) = &self.otherwise {
            sql.push_str(" ELSE ");
            sql.push_str(otherwise);
        }
        sql.push_str(" END");
        push_alias(&mut sql, self.alias.as_deref());
        sql
    }
}
