//! SQL function expressions.
//!
//! Each type renders to a single fragment of SQL text and can be used
//! anywhere a value or select-list item is accepted:
//!
//! - [`WindowFunc`]: `ROW_NUMBER`, `RANK`, `DENSE_RANK`, `SUM .. OVER`,
//!   `COUNT .. OVER`, plain `COUNT`
//! - [`Case`]: `CASE WHEN .. THEN .. ELSE .. END`
//! - [`Cast`], [`Round`], [`Coalesce`], [`Exists`]
//! - [`ToTimestamp`], [`ToChar`]
//!
//! ```rust
//! use sqlkit::{col, select, WindowFunc};
//!
//! let rn = WindowFunc::row_number(col("id"))
//!     .partition_by(col("dept"))
//!     .order_by(col("salary"), true)
//!     .alias("rn");
//!
//! let mut q = select();
//! q.column(rn).from("staff");
//! assert_eq!(
//!     q.to_sql(),
//!     r#"SELECT ROW_NUMBER("id") OVER (PARTITION BY "dept" ORDER BY "salary" DESC) AS rn FROM "staff""#
//! );
//! ```

mod case;
mod datetime;
mod scalar;
mod window;

pub use case::Case;
pub use datetime::{ToChar, ToTimestamp};
pub use scalar::{Cast, Coalesce, Exists, Round};
pub use window::WindowFunc;

/// Text that is "meaningfully non-empty": something other than whitespace.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Append ` AS alias` when the alias is not blank.
pub(crate) fn push_alias(out: &mut String, alias: Option<&str>) {
    if let Some(alias) = alias.filter(|a| !is_blank(a)) {
        out.push_str(" AS ");
        out.push_str(alias);
    }
}

/// Implements `Display`, value conversion and select-list conversion for a
/// function type with a `to_sql(&self) -> String` method.
macro_rules! impl_sql_fragment {
    ($($t:ty),* $(,)?) => {
        $(
            impl std::fmt::Display for $t {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.to_sql())
                }
            }

            impl From<$t> for crate::value::Value {
                fn from(v: $t) -> Self {
                    crate::value::Value::Expr(v.to_sql())
                }
            }

            impl From<&$t> for crate::value::Value {
                fn from(v: &$t) -> Self {
                    crate::value::Value::Expr(v.to_sql())
                }
            }

            impl From<$t> for crate::stmt::SelectItem {
                fn from(v: $t) -> Self {
                    crate::stmt::SelectItem::raw(v.to_sql())
                }
            }

            impl From<&$t> for crate::stmt::SelectItem {
                fn from(v: &$t) -> Self {
                    crate::stmt::SelectItem::raw(v.to_sql())
                }
            }
        )*
    };
}

impl_sql_fragment!(
    WindowFunc,
    Case,
    Cast,
    Round,
    Coalesce,
    Exists,
    ToTimestamp,
    ToChar,
);
