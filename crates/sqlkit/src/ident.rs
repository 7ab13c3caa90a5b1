//! Identifier quoting and table references.
//!
//! Identifiers are wrapped in double quotes as given. No validation or
//! escaping of embedded `"` is performed, so names must come from trusted
//! code rather than user input.

use std::fmt;

/// The identifier quote character.
pub const QUOTE: char = '"';

/// Wrap `name` in double quotes.
pub fn quote_ident(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    push_quoted(&mut out, name);
    out
}

pub(crate) fn push_quoted(out: &mut String, name: &str) {
    out.push(QUOTE);
    out.push_str(name);
    out.push(QUOTE);
}

/// A table reference: optional schema, quoted name, optional alias.
///
/// Renders as `schema."name" alias`.
///
/// ```rust
/// use sqlkit::TableRef;
///
/// let t = TableRef::new("users").schema("public").alias("u");
/// assert_eq!(t.to_string(), r#"public."users" u"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub name: String,
    pub schema: Option<String>,
    pub alias: Option<String>,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            alias: None,
        }
    }

    /// Qualify with a schema (tablespace).
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into()).filter(|s: &String| !s.is_empty());
        self
    }

    /// Attach an alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into()).filter(|s: &String| !s.is_empty());
        self
    }

    /// Check if the table name is blank.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
    }

    pub(crate) fn write_to(&self, out: &mut String) {
        if let Some(schema) = &self.schema {
            out.push_str(schema);
            out.push('.');
        }
        push_quoted(out, &self.name);
        if let Some(alias) = &self.alias {
            out.push(' ');
            out.push_str(alias);
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out);
        f.write_str(&out)
    }
}

impl From<&str> for TableRef {
    fn from(name: &str) -> Self {
        TableRef::new(name)
    }
}

impl From<String> for TableRef {
    fn from(name: String) -> Self {
        TableRef::new(name)
    }
}

impl From<&String> for TableRef {
    fn from(name: &String) -> Self {
        TableRef::new(name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("users"), "\"users\"");
        assert_eq!(quote_ident("CamelCase"), "\"CamelCase\"");
    }

    #[test]
    fn test_table_ref_forms() {
        assert_eq!(TableRef::new("users").to_string(), "\"users\"");
        assert_eq!(
            TableRef::new("users").schema("app").to_string(),
            "app.\"users\""
        );
        assert_eq!(TableRef::new("users").alias("u").to_string(), "\"users\" u");
    }

    #[test]
    fn test_empty_schema_and_alias_are_ignored() {
        let t = TableRef::new("users").schema("").alias("");
        assert_eq!(t.schema, None);
        assert_eq!(t.alias, None);
        assert_eq!(t.to_string(), "\"users\"");
    }
}
