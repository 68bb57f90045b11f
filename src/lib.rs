//! This crate exposes a mutable, unbalanced Binary Search Tree (BST) over ordered scalar values
//! along with a tiny operation language for driving it from the command line.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! may have child `Node`s. The invariants kept here are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Inserts therefore always
//!    put duplicates to the right.
//! 2. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than or equal to its own value. In a tree built by inserts
//!    alone this is strictly less. Removing a node with two children copies in
//!    the largest value of its left subtree, and when that value appears there
//!    more than once an equal copy stays on the left.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the
//! root `Node` to a leaf `Node`. Nothing here rebalances the tree so inserting
//! sorted input gives a tree whose height equals its size. Visiting the left
//! subtree, then the subtree root, then the right subtree yields the values in
//! sorted order.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod op;
pub mod tree;

pub use op::{NodeView, Op, Outcome, ParseOpError};
pub use tree::{Link, Node, Tree};
