//! SQL literal formatting.
//!
//! Every value that ends up inside a statement goes through [`Value`], a closed
//! set of literal kinds. Each kind has exactly one text rendering:
//!
//! | Kind | Rendering |
//! |------|-----------|
//! | integers, finite floats, decimals | decimal text, unquoted |
//! | non-finite floats | `'NaN'`, `'Infinity'`, `'-Infinity'` |
//! | `bool` | `TRUE` / `FALSE` |
//! | text, `char`, dates, UUIDs | wrapped in single quotes |
//! | `None` / [`Value::Null`] | `null` |
//! | [`Param`] | its text, verbatim |
//! | columns and functions | their text, verbatim |
//! | nested statements | their text in parentheses |
//!
//! Embedded single quotes are **not** escaped. Text values are expected to be
//! trusted; use a [`Param`] marker and bind the value out-of-band otherwise.

use std::fmt;

/// A literal or nested fragment ready to be written into SQL text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `null`
    Null,
    /// `TRUE` / `FALSE`
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point.
    Float(f64),
    /// Quoted string literal.
    Text(String),
    /// Raw fragment emitted unchanged (bind markers, keywords, identifiers).
    Raw(String),
    /// Rendered expression or function, emitted unchanged.
    Expr(String),
    /// Rendered sub-statement, emitted in parentheses.
    Statement(String),
}

impl Value {
    /// Check if this is the `null` literal.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Write the SQL rendering of this value into `out`.
    pub fn write_to(&self, out: &mut String) {
        match self {
            Value::Null => out.push_str("null"),
            Value::Bool(true) => out.push_str("TRUE"),
            Value::Bool(false) => out.push_str("FALSE"),
            Value::Int(v) => out.push_str(&v.to_string()),
            Value::UInt(v) => out.push_str(&v.to_string()),
            Value::Float(v) => write_float(out, *v),
            Value::Text(s) => {
                out.push('\'');
                out.push_str(s);
                out.push('\'');
            }
            Value::Raw(s) | Value::Expr(s) => out.push_str(s),
            Value::Statement(s) => {
                out.push('(');
                out.push_str(s);
                out.push(')');
            }
        }
    }

    /// Render this value as SQL text.
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

fn write_float(out: &mut String, v: f64) {
    if v.is_nan() {
        out.push_str("'NaN'");
    } else if v.is_infinite() {
        out.push_str(if v > 0.0 { "'Infinity'" } else { "'-Infinity'" });
    } else {
        out.push_str(&v.to_string());
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// Format any supported value as SQL literal text.
///
/// ```rust
/// assert_eq!(sqlkit::format(42), "42");
/// assert_eq!(sqlkit::format("alice"), "'alice'");
/// assert_eq!(sqlkit::format(None::<i32>), "null");
/// ```
pub fn format(value: impl Into<Value>) -> String {
    value.into().to_sql()
}

/// Format a sequence of values joined by `", "`.
pub(crate) fn format_list<I, T>(values: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    let mut out = String::new();
    for (i, v) in values.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        v.into().write_to(&mut out);
    }
    out
}

/// A raw marker emitted into SQL exactly as given.
///
/// Used for caller-supplied placeholders that a separate execution layer
/// binds, or for identifiers and keywords that must not be quoted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param(String);

impl Param {
    /// Wrap arbitrary text.
    pub fn new(text: impl Into<String>) -> Self {
        Param(text.into())
    }

    /// Postgres positional placeholder: `$n`.
    pub fn positional(n: usize) -> Self {
        Param(format!("${n}"))
    }

    /// Named placeholder: `:name`.
    pub fn named(name: &str) -> Self {
        Param(format!(":{name}"))
    }

    /// Anonymous placeholder: `?`.
    pub fn question() -> Self {
        Param("?".to_string())
    }

    /// The marker text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $wide:ty, $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $wide)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64, u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<Param> for Value {
    fn from(v: Param) -> Self {
        Value::Raw(v.0)
    }
}

impl From<&Param> for Value {
    fn from(v: &Param) -> Self {
        Value::Raw(v.0.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl From<chrono::NaiveDateTime> for Value {
    fn from(v: chrono::NaiveDateTime) -> Self {
        Value::Text(v.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

impl From<chrono::NaiveDate> for Value {
    fn from(v: chrono::NaiveDate) -> Self {
        Value::Text(v.format("%Y-%m-%d").to_string())
    }
}

impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for Value
where
    Tz::Offset: fmt::Display,
{
    fn from(v: chrono::DateTime<Tz>) -> Self {
        Value::Text(v.to_rfc3339())
    }
}

impl From<uuid::Uuid> for Value {
    fn from(v: uuid::Uuid) -> Self {
        Value::Text(v.hyphenated().to_string())
    }
}

#[cfg(feature = "rust_decimal")]
impl From<rust_decimal::Decimal> for Value {
    fn from(v: rust_decimal::Decimal) -> Self {
        Value::Raw(v.to_string())
    }
}
