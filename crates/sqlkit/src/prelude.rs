//! Convenient imports for typical `sqlkit` usage.
//!
//! ```rust
//! use sqlkit::prelude::*;
//!
//! let mut q = select();
//! q.column("id").from("users").where_(col("id").in_list([1, 2]));
//! assert_eq!(q.to_sql(), r#"SELECT "id" FROM "users" WHERE "id" IN (1, 2)"#);
//! ```

pub use crate::{
    Case, Column, Delete, Insert, Param, Predicate, Qualifier, Select, SqlError, SqlResult,
    Statement, TableRef, Update, WindowFunc, col, delete, format, insert, select, update,
};
