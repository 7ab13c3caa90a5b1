use super::{Statement, StatementKind, has_conditions, join_conditions};
use crate::error::{SqlError, SqlResult};
use crate::expr::Column;
use crate::ident::{TableRef, push_quoted, quote_ident};
use crate::predicate::Predicate;
use crate::value::{Param, Value};
use std::fmt::Display;

/// One entry of a select list.
///
/// Plain strings are column names and get quoted (`"*"` and `t.*` are kept
/// as-is). Columns, functions and parameters are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem(String);

impl SelectItem {
    /// Raw select-list text, emitted unchanged.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self(sql.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn name_item(name: &str) -> SelectItem {
    if name == "*" || name.ends_with(".*") {
        SelectItem::raw(name)
    } else {
        SelectItem(quote_ident(name))
    }
}

impl From<&str> for SelectItem {
    fn from(name: &str) -> Self {
        name_item(name)
    }
}

impl From<String> for SelectItem {
    fn from(name: String) -> Self {
        name_item(&name)
    }
}

impl From<&String> for SelectItem {
    fn from(name: &String) -> Self {
        name_item(name)
    }
}

impl From<Column> for SelectItem {
    fn from(c: Column) -> Self {
        SelectItem(c.into_sql())
    }
}

impl From<&Column> for SelectItem {
    fn from(c: &Column) -> Self {
        SelectItem(c.as_str().to_string())
    }
}

impl From<Param> for SelectItem {
    fn from(p: Param) -> Self {
        SelectItem(p.as_str().to_string())
    }
}

/// Join type keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    LeftOuter,
    Right,
    RightOuter,
    Full,
    FullOuter,
    Cross,
}

impl JoinKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::LeftOuter => "LEFT OUTER JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::RightOuter => "RIGHT OUTER JOIN",
            JoinKind::Full => "FULL JOIN",
            JoinKind::FullOuter => "FULL OUTER JOIN",
            JoinKind::Cross => "CROSS JOIN",
        }
    }
}

/// SELECT statement builder.
///
/// ```rust
/// use sqlkit::{col, select};
///
/// let mut q = select();
/// q.select(["id", "name"]).from("users").where_(col("age").gt(18));
/// assert_eq!(q.to_sql(), r#"SELECT "id", "name" FROM "users" WHERE "age" > 18"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Select {
    /// Select list, in insertion order
    columns: Vec<String>,
    distinct: bool,
    /// Rendered FROM source
    from: Option<String>,
    /// Rendered join clauses, each carrying its own ON
    joins: Vec<String>,
    where_conditions: Vec<Predicate>,
    group_by: Vec<String>,
    having_conditions: Vec<Predicate>,
    /// (expression, descending)
    order_by: Vec<(String, bool)>,
    limit: Option<u64>,
    offset: Option<u64>,
    /// Build error (reported by `render()`)
    build_error: Option<String>,
    pub(super) last_sql: String,
}

impl Select {
    /// Create an empty SELECT.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Select list ====================

    /// Append several select-list entries.
    pub fn select<I, T>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SelectItem>,
    {
        for item in items {
            self.column(item);
        }
        self
    }

    /// Append one select-list entry.
    pub fn column(&mut self, item: impl Into<SelectItem>) -> &mut Self {
        self.columns.push(item.into().0);
        self
    }

    /// Append `(subquery) AS alias`.
    pub fn select_subquery(&mut self, subquery: &Select, alias: &str) -> &mut Self {
        let mut item = format!("({})", subquery.to_sql());
        if !alias.trim().is_empty() {
            item.push_str(" AS ");
            item.push_str(alias);
        }
        self.columns.push(item);
        self
    }

    pub fn distinct(&mut self) -> &mut Self {
        self.distinct = true;
        self
    }

    // ==================== Source ====================

    /// Set the FROM table. Accepts a name or a [`TableRef`].
    pub fn from(&mut self, table: impl Into<TableRef>) -> &mut Self {
        let table = table.into();
        if table.is_empty() {
            self.set_source(None)
        } else {
            let mut sql = String::new();
            table.write_to(&mut sql);
            self.set_source(Some(sql))
        }
    }

    /// Set the FROM table qualified by a schema: `schema."table"`.
    pub fn from_schema(&mut self, schema: &str, table: &str) -> &mut Self {
        self.from(TableRef::new(table).schema(schema))
    }

    /// Select from a sub-query: `(subquery) alias`.
    pub fn from_subquery(&mut self, subquery: &Select, alias: &str) -> &mut Self {
        let mut sql = format!("({})", subquery.to_sql());
        push_alias(&mut sql, alias);
        self.set_source(Some(sql))
    }

    /// Set the FROM source as raw SQL text.
    pub fn from_raw(&mut self, sql: &str) -> &mut Self {
        self.set_source(Some(sql.to_string()).filter(|s| !s.trim().is_empty()))
    }

    /// Select from the `UNION ALL` of several statements:
    /// `((a) UNION ALL (b)) alias`.
    pub fn from_union<'a, I>(&mut self, parts: I, alias: &str) -> &mut Self
    where
        I: IntoIterator<Item = &'a Select>,
    {
        let parts: Vec<String> = parts
            .into_iter()
            .map(|s| format!("({})", s.to_sql()))
            .collect();
        if parts.is_empty() {
            self.build_error = Some("from_union requires at least one statement".to_string());
            return self;
        }
        let mut sql = format!("({})", parts.join(" UNION ALL "));
        push_alias(&mut sql, alias);
        self.set_source(Some(sql))
    }

    // Replacing the source drops an error left by an earlier empty union.
    fn set_source(&mut self, from: Option<String>) -> &mut Self {
        self.from = from;
        self.build_error = None;
        self
    }

    // ==================== Joins ====================

    /// Add a join of any kind. `on` is ignored for [`JoinKind::Cross`].
    pub fn join(
        &mut self,
        kind: JoinKind,
        table: impl Into<TableRef>,
        on: impl Into<Predicate>,
    ) -> &mut Self {
        let mut sql = String::from(kind.as_str());
        sql.push(' ');
        table.into().write_to(&mut sql);
        let on = on.into();
        if kind != JoinKind::Cross && !on.is_empty() {
            sql.push_str(" ON ");
            on.write_to(&mut sql);
        }
        self.joins.push(sql);
        self
    }

    pub fn inner_join(
        &mut self,
        table: impl Into<TableRef>,
        on: impl Into<Predicate>,
    ) -> &mut Self {
        self.join(JoinKind::Inner, table, on)
    }

    pub fn left_join(&mut self, table: impl Into<TableRef>, on: impl Into<Predicate>) -> &mut Self {
        self.join(JoinKind::Left, table, on)
    }

    pub fn left_outer_join(
        &mut self,
        table: impl Into<TableRef>,
        on: impl Into<Predicate>,
    ) -> &mut Self {
        self.join(JoinKind::LeftOuter, table, on)
    }

    pub fn right_join(
        &mut self,
        table: impl Into<TableRef>,
        on: impl Into<Predicate>,
    ) -> &mut Self {
        self.join(JoinKind::Right, table, on)
    }

    pub fn right_outer_join(
        &mut self,
        table: impl Into<TableRef>,
        on: impl Into<Predicate>,
    ) -> &mut Self {
        self.join(JoinKind::RightOuter, table, on)
    }

    pub fn full_join(&mut self, table: impl Into<TableRef>, on: impl Into<Predicate>) -> &mut Self {
        self.join(JoinKind::Full, table, on)
    }

    pub fn full_outer_join(
        &mut self,
        table: impl Into<TableRef>,
        on: impl Into<Predicate>,
    ) -> &mut Self {
        self.join(JoinKind::FullOuter, table, on)
    }

    pub fn cross_join(&mut self, table: impl Into<TableRef>) -> &mut Self {
        self.join(JoinKind::Cross, table, "")
    }

    // ==================== Conditions ====================

    /// Add a WHERE condition (AND-joined with the others).
    pub fn where_(&mut self, cond: impl Into<Predicate>) -> &mut Self {
        self.where_conditions.push(cond.into());
        self
    }

    /// Add `EXISTS (a) OR EXISTS (b) ...` as one WHERE condition.
    pub fn where_exists<'a, I>(&mut self, subqueries: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Select>,
    {
        self.push_exists("EXISTS", subqueries)
    }

    /// Add `NOT EXISTS (a) OR NOT EXISTS (b) ...` as one WHERE condition.
    pub fn where_not_exists<'a, I>(&mut self, subqueries: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Select>,
    {
        self.push_exists("NOT EXISTS", subqueries)
    }

    fn push_exists<'a, I>(&mut self, keyword: &str, subqueries: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Select>,
    {
        let cond = subqueries
            .into_iter()
            .map(|s| Predicate::raw(format!("{} ({})", keyword, s.to_sql())))
            .reduce(|acc, p| acc.or(p));
        if let Some(cond) = cond {
            self.where_conditions.push(cond);
        }
        self
    }

    /// Add `"column" BETWEEN low AND high`.
    pub fn where_between(
        &mut self,
        column: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> &mut Self {
        let mut sql = String::new();
        push_quoted(&mut sql, column);
        sql.push_str(" BETWEEN ");
        low.into().write_to(&mut sql);
        sql.push_str(" AND ");
        high.into().write_to(&mut sql);
        self.where_conditions.push(Predicate::Raw(sql));
        self
    }

    /// Add a HAVING condition (AND-joined with the others).
    pub fn having(&mut self, cond: impl Into<Predicate>) -> &mut Self {
        self.having_conditions.push(cond.into());
        self
    }

    // ==================== Grouping & ordering ====================

    /// Append GROUP BY expressions. Strings are emitted unquoted; pass
    /// [`col`](crate::col) for a quoted column.
    pub fn group_by<I, T>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        self.group_by
            .extend(columns.into_iter().map(|c| c.to_string()));
        self
    }

    /// Set the ORDER BY expression, replacing any previous ordering.
    pub fn order_by(&mut self, column: impl Display, desc: bool) -> &mut Self {
        self.order_by.clear();
        self.add_order_by(column, desc)
    }

    /// Append a secondary ORDER BY expression.
    pub fn add_order_by(&mut self, column: impl Display, desc: bool) -> &mut Self {
        let column = column.to_string();
        if !column.trim().is_empty() {
            self.order_by.push((column, desc));
        }
        self
    }

    // ==================== Pagination ====================

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    /// Set OFFSET and LIMIT together.
    pub fn limit_offset(&mut self, offset: u64, limit: u64) -> &mut Self {
        self.offset = Some(offset);
        self.limit = Some(limit);
        self
    }

    /// Pagination helper.
    ///
    /// `page` is 1-based (clamped to >= 1).
    /// `per_page` is clamped to >= 1.
    pub fn paginate(&mut self, page: u64, per_page: u64) -> &mut Self {
        let p = page.max(1);
        let size = per_page.max(1);
        self.limit = Some(size);
        self.offset = Some((p - 1).saturating_mul(size));
        self
    }

    /// Clear every clause so the builder can be reused.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }
}

fn push_alias(out: &mut String, alias: &str) {
    if !alias.trim().is_empty() {
        out.push(' ');
        out.push_str(alias);
    }
}

impl Statement for Select {
    fn kind(&self) -> StatementKind {
        StatementKind::Select
    }

    fn build_sql(&self) -> String {
        let mut sql = String::from("SELECT ");
        if self.distinct {
            sql.push_str("DISTINCT ");
        }
        sql.push_str(&self.columns.join(", "));

        if let Some(from) = &self.from {
            sql.push_str(" FROM ");
            sql.push_str(from);
        }

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }

        if has_conditions(&self.where_conditions) {
            sql.push_str(" WHERE ");
            join_conditions(&mut sql, &self.where_conditions, " AND ");
        }

        if !self.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.group_by.join(", "));
        }

        if has_conditions(&self.having_conditions) {
            sql.push_str(" HAVING ");
            join_conditions(&mut sql, &self.having_conditions, " AND ");
        }

        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            for (i, (column, desc)) in self.order_by.iter().enumerate() {
                if i > 0 {
                    sql.push_str(", ");
                }
                sql.push_str(column);
                if *desc {
                    sql.push_str(" DESC");
                }
            }
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {}", offset));
        }

        sql
    }

    fn validate(&self) -> SqlResult<()> {
        if let Some(err) = &self.build_error {
            return Err(SqlError::Validation(err.clone()));
        }
        if self.columns.is_empty() {
            return Err(SqlError::missing(StatementKind::Select, "select list"));
        }
        if self.from.is_none() {
            return Err(SqlError::missing(StatementKind::Select, "FROM"));
        }
        Ok(())
    }
}

impl From<&Select> for Value {
    fn from(s: &Select) -> Self {
        Value::Statement(s.to_sql())
    }
}

impl From<Select> for Value {
    fn from(s: Select) -> Self {
        Value::Statement(s.to_sql())
    }
}
