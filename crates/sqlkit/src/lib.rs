//! # sqlkit
//!
//! A composable SQL statement builder that renders plain SQL text.
//!
//! ## Features
//!
//! - **Text out**: statements render to a `String`; nothing is executed or bound
//! - **Closed value formatting**: every literal goes through [`Value`], one rendering per kind
//! - **Predicate trees**: `and` / `or` build new nodes instead of mutating operands
//! - **Function expressions**: window functions, `CASE`, `CAST`, `ROUND`, `COALESCE`, `EXISTS`, `to_char`
//! - **Two render paths**: permissive `to_sql()`, validating `render()`
//! - **Logging**: rendered statements are emitted as `tracing` events (feature `tracing`)
//!
//! ## Statements
//!
//! ```rust
//! use sqlkit::{col, delete, insert, select, update};
//!
//! // SELECT
//! let mut q = select();
//! q.select(["id", "name"])
//!     .from("users")
//!     .where_(col("age").gt(18))
//!     .order_by(col("name"), false)
//!     .limit(10);
//! assert_eq!(
//!     q.render().unwrap(),
//!     r#"SELECT "id", "name" FROM "users" WHERE "age" > 18 ORDER BY "name" LIMIT 10"#
//! );
//!
//! // INSERT
//! let mut q = insert();
//! q.insert("name", "Alice").insert("age", 30).table("users");
//! assert_eq!(q.to_sql(), r#"INSERT INTO "users"("name", "age") VALUES('Alice', 30)"#);
//!
//! // UPDATE
//! let mut q = update("users");
//! q.set("age", 31).where_("id = 1");
//! assert_eq!(q.to_sql(), "UPDATE users SET age = 31 WHERE id = 1");
//!
//! // DELETE
//! let mut q = delete();
//! q.from("users").where_("id = 1");
//! assert_eq!(q.to_sql(), r#"DELETE FROM "users" WHERE id = 1"#);
//! ```
//!
//! ## Quoting
//!
//! Identifiers are wrapped in `"` and text literals in `'`. Neither is
//! escaped: text containing quotes must come from a trusted source, or be
//! passed as a [`Param`] marker and bound by the execution layer.

pub mod error;
pub mod expr;
pub mod func;
pub mod ident;
pub mod predicate;
pub mod prelude;
pub mod stmt;
pub mod trace;
pub mod value;

pub use error::{SqlError, SqlResult};
pub use expr::{Column, Qualifier, col};
pub use func::{Case, Cast, Coalesce, Exists, Round, ToChar, ToTimestamp, WindowFunc};
pub use ident::{QUOTE, TableRef, quote_ident};
pub use predicate::Predicate;
pub use stmt::{Delete, Insert, JoinKind, Select, SelectItem, Statement, StatementKind, Update};
pub use trace::MAX_LOGGED_SQL;
pub use value::{Param, Value, format};

/// Start a SELECT statement.
pub fn select() -> Select {
    Select::new()
}

/// Start an INSERT statement. Set the table with [`Insert::table`].
pub fn insert() -> Insert {
    Insert::new()
}

/// Start an UPDATE statement on `table`.
pub fn update(table: &str) -> Update {
    let mut stmt = Update::new();
    stmt.update(table);
    stmt
}

/// Start a DELETE statement. Set the table with [`Delete::from`].
pub fn delete() -> Delete {
    Delete::new()
}
