//! Boolean predicate trees for WHERE / HAVING / ON clauses.
//!
//! Combining two conditions never mutates either side: `and` / `or` build a
//! new node that owns both operands, and rendering walks the tree,
//! parenthesizing each operand of a binary node.

use crate::expr::Column;
use std::fmt;

/// A boolean condition.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// A column expression used as a condition.
    Expr(Column),

    /// Raw SQL text.
    Raw(String),

    /// `(left) AND (right)`
    And(Box<Predicate>, Box<Predicate>),

    /// `(left) OR (right)`
    Or(Box<Predicate>, Box<Predicate>),

    /// `NOT (inner)`
    Not(Box<Predicate>),
}

impl Predicate {
    /// Create a raw SQL predicate.
    pub fn raw(sql: impl Into<String>) -> Self {
        Predicate::Raw(sql.into())
    }

    /// Combine with AND.
    pub fn and(self, other: impl Into<Predicate>) -> Self {
        Predicate::And(Box::new(self), Box::new(other.into()))
    }

    /// Combine with OR.
    pub fn or(self, other: impl Into<Predicate>) -> Self {
        Predicate::Or(Box::new(self), Box::new(other.into()))
    }

    /// Negate.
    pub fn not(inner: impl Into<Predicate>) -> Self {
        Predicate::Not(Box::new(inner.into()))
    }

    /// Check if this predicate renders to nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Predicate::Expr(c) => c.as_str().trim().is_empty(),
            Predicate::Raw(s) => s.trim().is_empty(),
            Predicate::And(l, r) | Predicate::Or(l, r) => l.is_empty() && r.is_empty(),
            Predicate::Not(inner) => inner.is_empty(),
        }
    }

    /// The node that is actually written once empty operands collapse.
    ///
    /// `("" AND (a OR b))` writes as the bare OR node, so callers deciding on
    /// parentheses must look at this rather than at `self`.
    pub(crate) fn effective(&self) -> &Predicate {
        match self {
            Predicate::And(l, r) | Predicate::Or(l, r) => match (l.is_empty(), r.is_empty()) {
                (false, true) => l.effective(),
                (true, false) => r.effective(),
                _ => self,
            },
            _ => self,
        }
    }

    /// Write the SQL fragment into `out`.
    pub fn write_to(&self, out: &mut String) {
        match self {
            Predicate::Expr(c) => out.push_str(c.as_str()),
            Predicate::Raw(s) => out.push_str(s),
            Predicate::And(l, r) => write_binary(out, l, "AND", r),
            Predicate::Or(l, r) => write_binary(out, l, "OR", r),
            Predicate::Not(inner) => {
                out.push_str("NOT (");
                inner.write_to(out);
                out.push(')');
            }
        }
    }

    /// Build the SQL fragment.
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

fn write_binary(out: &mut String, left: &Predicate, op: &str, right: &Predicate) {
    // An empty side collapses to the other side.
    match (left.is_empty(), right.is_empty()) {
        (true, true) => {}
        (false, true) => left.write_to(out),
        (true, false) => right.write_to(out),
        (false, false) => {
            write_side(out, left, op);
            out.push(' ');
            out.push_str(op);
            out.push(' ');
            write_side(out, right, op);
        }
    }
}

// A chain of the same operator is written flat: `(a) OR (b) OR (c)`.
fn write_side(out: &mut String, side: &Predicate, op: &str) {
    let side = side.effective();
    let same_op = match side {
        Predicate::And(..) => op == "AND",
        Predicate::Or(..) => op == "OR",
        _ => false,
    };
    if same_op {
        side.write_to(out);
    } else {
        out.push('(');
        side.write_to(out);
        out.push(')');
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

impl From<Column> for Predicate {
    fn from(c: Column) -> Self {
        Predicate::Expr(c)
    }
}

impl From<&Column> for Predicate {
    fn from(c: &Column) -> Self {
        Predicate::Expr(c.clone())
    }
}

impl From<&str> for Predicate {
    fn from(s: &str) -> Self {
        Predicate::Raw(s.to_string())
    }
}

impl From<String> for Predicate {
    fn from(s: String) -> Self {
        Predicate::Raw(s)
    }
}

impl From<&Predicate> for Predicate {
    fn from(p: &Predicate) -> Self {
        p.clone()
    }
}
