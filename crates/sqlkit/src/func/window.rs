use super::{is_blank, push_alias};
use std::fmt::Display;

/// A window function (`FUNC(arg) OVER (...)`) or plain `COUNT(arg)`.
///
/// `PARTITION BY` and `ORDER BY` are emitted only when their text is not
/// blank. Order entries whose column is blank are skipped.
#[derive(Debug, Clone)]
pub struct WindowFunc {
    name: &'static str,
    arg: String,
    over: bool,
    partition: String,
    order: Vec<(String, bool)>,
    alias: Option<String>,
}

impl WindowFunc {
    fn over(name: &'static str, arg: String) -> Self {
        Self {
            name,
            arg,
            over: true,
            partition: String::new(),
            order: Vec::new(),
            alias: None,
        }
    }

    /// `ROW_NUMBER(arg) OVER (...)`
    pub fn row_number(arg: impl Display) -> Self {
        Self::over("ROW_NUMBER", arg.to_string())
    }

    /// `RANK() OVER (...)`
    pub fn rank() -> Self {
        Self::over("RANK", String::new())
    }

    /// `DENSE_RANK() OVER (...)`
    pub fn dense_rank() -> Self {
        Self::over("DENSE_RANK", String::new())
    }

    /// `SUM(arg) OVER (...)`
    pub fn sum_over(arg: impl Display) -> Self {
        Self::over("SUM", arg.to_string())
    }

    /// `COUNT(arg) OVER (...)`
    pub fn count_over(arg: impl Display) -> Self {
        Self::over("COUNT", arg.to_string())
    }

    /// Plain aggregate `COUNT(arg)` without a window.
    pub fn count(arg: impl Display) -> Self {
        Self {
            over: false,
            ..Self::over("COUNT", arg.to_string())
        }
    }

    /// Set the `PARTITION BY` text.
    pub fn partition_by(mut self, partition: impl Display) -> Self {
        self.partition = partition.to_string();
        self
    }

    /// Order by a single column, replacing any previous ordering.
    pub fn order_by(mut self, column: impl Display, desc: bool) -> Self {
        self.order = vec![(column.to_string(), desc)];
        self
    }

    /// Order by a list of `(column, desc)` pairs, replacing any previous ordering.
    pub fn order_by_list<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = (C, bool)>,
        C: Display,
    {
        self.order = columns
            .into_iter()
            .map(|(c, desc)| (c.to_string(), desc))
            .collect();
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Build the SQL fragment.
    pub fn to_sql(&self) -> String {
        let mut sql = String::with_capacity(64);
        sql.push_str(self.name);
        sql.push('(');
        sql.push_str(&self.arg);
        sql.push(')');

        if self.over {
            let mut window: Vec<String> = Vec::with_capacity(2);
            if !is_blank(&self.partition) {
                window.push(format!("PARTITION BY {}", self.partition));
            }
            let order: Vec<String> = self
                .order
                .iter()
                .filter(|(c, _)| !is_blank(c))
                .map(|(c, desc)| format!("{} {}", c, if *desc { "DESC" } else { "ASC" }))
                .collect();
            if !order.is_empty() {
                window.push(format!("ORDER BY {}", order.join(", ")));
            }
            sql.push_str(" OVER (");
            sql.push_str(&window.join(" "));
            sql.push(')');
        }

        push_alias(&mut sql, self.alias.as_deref());
        sql
    }
}
