//! A small textual language for driving a [`Tree`]. Each word is one operation:
//!
//! | text         | operation          |
//! |--------------|--------------------|
//! | `insert:V`   | [`Op::Insert`]     |
//! | `remove:V`   | [`Op::Remove`]     |
//! | `contains:V` | [`Op::Contains`]   |
//! | `get:V`      | [`Op::Get`]        |
//! | `size`       | [`Op::Size`]       |
//! | `list`       | [`Op::ToArray`]    |
//!
//! # Examples
//!
//! ```
//! use bst_engine::op::{Op, Outcome};
//! use bst_engine::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for word in ["insert:3", "insert:1", "remove:3", "list"] {
//!     let op: Op<i64> = word.parse().unwrap();
//!     let outcome = tree.apply(op);
//!     if let Outcome::Values(values) = outcome {
//!         assert_eq!(values, vec![1]);
//!     }
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::tree::{Node, Tree};

/// A single thing to do to a [`Tree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op<T> {
    /// Insert the value into the tree.
    Insert(T),
    /// Remove one node holding the value.
    Remove(T),
    /// Ask whether the value is in the tree.
    Contains(T),
    /// Look up the node holding the value.
    Get(T),
    /// Count the nodes.
    Size,
    /// List every value in order.
    ToArray,
}

/// Why a word couldn't be parsed into an [`Op`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseOpError {
    /// The word before `:` isn't an operation name.
    #[error("unknown operation `{0}`")]
    UnknownOp(String),
    /// A value-taking operation was given without `:V`.
    #[error("operation `{0}` needs a value, e.g. `{0}:42`")]
    MissingValue(String),
    /// `size` or `list` was given a value.
    #[error("operation `{0}` doesn't take a value")]
    UnexpectedValue(String),
    /// The value after `:` didn't parse.
    #[error("invalid value `{value}` for `{op}`: {reason}")]
    InvalidValue {
        /// The operation name.
        op: String,
        /// The text that failed to parse.
        value: String,
        /// The value parser's message.
        reason: String,
    },
}

impl<T> FromStr for Op<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = ParseOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = match s.split_once(':') {
            Some((name, value)) => (name, Some(value)),
            None => (s, None),
        };

        let parse_value = |ctor: fn(T) -> Op<T>| -> Result<Op<T>, ParseOpError> {
            let value = value.ok_or_else(|| ParseOpError::MissingValue(name.to_string()))?;
            value
                .trim()
                .parse()
                .map(ctor)
                .map_err(|e: T::Err| ParseOpError::InvalidValue {
                    op: name.to_string(),
                    value: value.to_string(),
                    reason: e.to_string(),
                })
        };
        let no_value = |op: Op<T>| match value {
            Some(_) => Err(ParseOpError::UnexpectedValue(name.to_string())),
            None => Ok(op),
        };

        match name {
            "insert" => parse_value(Op::Insert),
            "remove" => parse_value(Op::Remove),
            "contains" => parse_value(Op::Contains),
            "get" => parse_value(Op::Get),
            "size" => no_value(Op::Size),
            "list" => no_value(Op::ToArray),
            _ => Err(ParseOpError::UnknownOp(name.to_string())),
        }
    }
}

impl<T> fmt::Display for Op<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Insert(v) => write!(f, "insert:{}", v),
            Op::Remove(v) => write!(f, "remove:{}", v),
            Op::Contains(v) => write!(f, "contains:{}", v),
            Op::Get(v) => write!(f, "get:{}", v),
            Op::Size => write!(f, "size"),
            Op::ToArray => write!(f, "list"),
        }
    }
}

/// A node found by [`Op::Get`], detached from the tree's lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NodeView<T> {
    /// The node's value.
    pub value: T,
    /// The left child's value.
    pub left: Option<T>,
    /// The right child's value.
    pub right: Option<T>,
}

impl<T> From<&Node<T>> for NodeView<T>
where
    T: Copy,
{
    fn from(node: &Node<T>) -> Self {
        Self {
            value: node.value,
            left: node.left().map(|n| n.value),
            right: node.right().map(|n| n.value),
        }
    }
}

/// What applying an [`Op`] produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The value was inserted.
    Inserted(T),
    /// A removal was attempted. `found` is false when it was a no-op.
    Removed {
        /// The value asked for.
        value: T,
        /// Whether a node was removed.
        found: bool,
    },
    /// Answer to [`Op::Contains`].
    Contains {
        /// The value asked for.
        value: T,
        /// Whether it is in the tree.
        found: bool,
    },
    /// Answer to [`Op::Get`].
    Node(Option<NodeView<T>>),
    /// Answer to [`Op::Size`].
    Size(usize),
    /// Answer to [`Op::ToArray`].
    Values(Vec<T>),
}

impl<T> fmt::Display for Outcome<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn slot<T: fmt::Display>(f: &mut fmt::Formatter<'_>, v: &Option<T>) -> fmt::Result {
            match v {
                Some(v) => write!(f, "{}", v),
                None => write!(f, "-"),
            }
        }

        match self {
            Outcome::Inserted(v) => write!(f, "inserted {}", v),
            Outcome::Removed { value, found: true } => write!(f, "removed {}", value),
            Outcome::Removed { value, found: false } => write!(f, "{} not found", value),
            Outcome::Contains { value, found } => write!(f, "contains {}: {}", value, found),
            Outcome::Node(None) => write!(f, "no such node"),
            Outcome::Node(Some(view)) => {
                write!(f, "node {} (left: ", view.value)?;
                slot(f, &view.left)?;
                write!(f, ", right: ")?;
                slot(f, &view.right)?;
                write!(f, ")")
            }
            Outcome::Size(n) => write!(f, "size {}", n),
            Outcome::Values(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl<T> Tree<T>
where
    T: Ord + Copy,
{
    /// Runs a single [`Op`] against this tree.
    pub fn apply(&mut self, op: Op<T>) -> Outcome<T> {
        match op {
            Op::Insert(value) => {
                self.insert(value);
                Outcome::Inserted(value)
            }
            Op::Remove(value) => Outcome::Removed {
                value,
                found: self.remove(&value),
            },
            Op::Contains(value) => Outcome::Contains {
                value,
                found: self.contains(&value),
            },
            Op::Get(value) => Outcome::Node(self.get_node(&value).map(NodeView::from)),
            Op::Size => Outcome::Size(self.size()),
            Op::ToArray => Outcome::Values(self.to_array()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_ops() {
        assert_eq!("insert:5".parse::<Op<i32>>(), Ok(Op::Insert(5)));
        assert_eq!("remove:-3".parse::<Op<i32>>(), Ok(Op::Remove(-3)));
        assert_eq!("contains: 7".parse::<Op<i32>>(), Ok(Op::Contains(7)));
        assert_eq!("get:0".parse::<Op<i32>>(), Ok(Op::Get(0)));
    }

    #[test]
    fn test_parse_bare_ops() {
        assert_eq!("size".parse::<Op<i32>>(), Ok(Op::Size));
        assert_eq!("list".parse::<Op<i32>>(), Ok(Op::ToArray));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "push:1".parse::<Op<i32>>(),
            Err(ParseOpError::UnknownOp("push".to_string()))
        );
        assert_eq!(
            "insert".parse::<Op<i32>>(),
            Err(ParseOpError::MissingValue("insert".to_string()))
        );
        assert_eq!(
            "size:3".parse::<Op<i32>>(),
            Err(ParseOpError::UnexpectedValue("size".to_string()))
        );
        assert!(matches!(
            "insert:abc".parse::<Op<i32>>(),
            Err(ParseOpError::InvalidValue { ref op, ref value, .. }) if op == "insert" && value == "abc"
        ));
    }

    #[test]
    fn test_display_parses_back() {
        for op in [
            Op::Insert(1),
            Op::Remove(2),
            Op::Contains(3),
            Op::Get(4),
            Op::Size,
            Op::ToArray,
        ] {
            assert_eq!(op.to_string().parse::<Op<i32>>(), Ok(op));
        }
    }

    #[test]
    fn test_apply() {
        let mut tree = Tree::new();

        assert_eq!(tree.apply(Op::Insert(42)), Outcome::Inserted(42));
        tree.apply(Op::Insert(23));
        tree.apply(Op::Insert(611));

        assert_eq!(
            tree.apply(Op::Get(42)),
            Outcome::Node(Some(NodeView {
                value: 42,
                left: Some(23),
                right: Some(611),
            }))
        );
        assert_eq!(tree.apply(Op::Get(1)), Outcome::Node(None));
        assert_eq!(
            tree.apply(Op::Contains(23)),
            Outcome::Contains { value: 23, found: true }
        );
        assert_eq!(
            tree.apply(Op::Remove(23)),
            Outcome::Removed { value: 23, found: true }
        );
        assert_eq!(
            tree.apply(Op::Remove(23)),
            Outcome::Removed { value: 23, found: false }
        );
        assert_eq!(tree.apply(Op::Size), Outcome::Size(2));
        assert_eq!(tree.apply(Op::ToArray), Outcome::Values(vec![42, 611]));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Inserted(1).to_string(), "inserted 1");
        assert_eq!(
            Outcome::Removed { value: 1, found: false }.to_string(),
            "1 not found"
        );
        assert_eq!(
            Outcome::Node(Some(NodeView {
                value: 5,
                left: None,
                right: Some(7),
            }))
            .to_string(),
            "node 5 (left: -, right: 7)"
        );
        assert_eq!(Outcome::Values(vec![1, 2, 2]).to_string(), "[1, 2, 2]");
        assert_eq!(Outcome::<i32>::Values(vec![]).to_string(), "[]");
    }
}
