//! A mutable, unbalanced BST. Nodes own their children through `Option<Box<_>>` and there are
//! no parent pointers. Duplicate values are allowed and always go to the right.
//!
//! # Examples
//!
//! ```
//! use bst_engine::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! tree.insert(1);
//! tree.insert(0);
//! assert_eq!(tree.to_array(), vec![0, 1, 1]);
//!
//! // Removing takes out a single node holding the value.
//! assert!(tree.remove(&1));
//! assert_eq!(tree.to_array(), vec![0, 1]);
//!
//! // Removing something that isn't there does nothing.
//! assert!(!tree.remove(&42));
//! assert_eq!(tree.size(), 2);
//! ```

use std::cmp::Ordering;

use log::{debug, trace};

/// An owning child slot. `None` marks the empty subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree holding values of type `T`. It's never rebalanced so the order of
/// insertion decides its shape.
///
/// Inserting, searching, removing, counting, flattening and dropping all walk the tree with a
/// loop, so a degenerate tree (e.g. built from sorted input) is fine at any height. The derived
/// `Clone` and `Debug` impls, and `PartialEq` on [`Node`], still recurse once per level.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
}

/// A single value and its two subtrees. Every value in `right` is greater than or equal to
/// `value`. Every value in `left` is less than or equal to it, and strictly less when the tree was
/// built by inserts alone: removing a node with two children promotes its in-order predecessor,
/// and if that value is duplicated in the left subtree an equal copy stays on the left.
///
/// The fields are public so a tree of a particular shape can be built by hand and handed to
/// [`Tree::from_root`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    /// The value stored in this node.
    pub value: T,
    /// Values smaller than `value`, or equal after a predecessor promotion.
    pub left: Link<T>,
    /// Values greater than or equal to `value`.
    pub right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new `Node` holding `value` with no children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Construct a `Node` with the given children. No ordering checks are done.
    pub fn with_children(value: T, left: Link<T>, right: Link<T>) -> Self {
        Self { value, left, right }
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Wrap an already built subtree. The caller is responsible for it respecting the ordering
    /// invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::tree::{Node, Tree};
    ///
    /// let left = Node::with_children(23, None, Some(Box::new(Node::new(31))));
    /// let root = Node::with_children(42, Some(Box::new(left)), Some(Box::new(Node::new(611))));
    /// let mut tree = Tree::from_root(root);
    ///
    /// tree.remove(&23);
    /// assert_eq!(tree.root().and_then(|n| n.left()).map(|n| n.value), Some(31));
    /// ```
    pub fn from_root(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree. See [`size`].
    pub fn size(&self) -> usize {
        size(self.root())
    }
}

impl<T> Tree<T>
where
    T: Ord + Copy,
{
    /// Inserts a new node holding `value`. Values equal to an existing node's value are placed in
    /// its right subtree, so inserting always grows the tree by exactly one node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value, 2);
    /// assert_eq!(root.left().map(|n| n.value), Some(1));
    /// assert_eq!(root.right().map(|n| n.value), Some(2));
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut slot = &mut self.root;
        loop {
            match slot {
                Some(node) => {
                    slot = if value < node.value {
                        trace!("insert: descending left");
                        &mut node.left
                    } else {
                        trace!("insert: descending right");
                        &mut node.right
                    };
                }
                None => {
                    *slot = Some(Box::new(Node::new(value)));
                    return;
                }
            }
        }
    }

    /// Whether a node holding `value` is on the search path for `value`.
    pub fn contains(&self, value: &T) -> bool {
        contains(self.root(), value)
    }

    /// The first node holding `value` on the search path. See [`get_node`].
    pub fn get_node(&self, value: &T) -> Option<&Node<T>> {
        get_node(self.root(), value)
    }

    /// All values in non-decreasing order.
    pub fn to_array(&self) -> Vec<T> {
        to_array(self.root())
    }

    /// Removes one node holding `value` and returns whether anything was removed. An empty tree or
    /// a value that isn't on its search path leaves the tree untouched.
    ///
    /// A node with two children isn't detached. It takes the value of its in-order predecessor
    /// (the rightmost node of its left subtree) and that predecessor is spliced out instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::tree::Tree;
    ///
    /// let mut tree: Tree<i32> = [7, 3, 10, 1, 5].into_iter().collect();
    ///
    /// assert!(tree.remove(&7));
    /// assert_eq!(tree.root().map(|n| n.value), Some(5));
    /// assert_eq!(tree.to_array(), vec![1, 3, 5, 10]);
    ///
    /// assert!(!tree.remove(&7));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let mut slot = &mut self.root;
        loop {
            let (go_left, go_right) = match slot.as_deref() {
                None => {
                    debug!("remove: value not found, nothing to do");
                    return false;
                }
                Some(node) => (*value < node.value, *value > node.value),
            };
            if go_left {
                slot = &mut slot.as_mut().unwrap().left;
            } else if go_right {
                slot = &mut slot.as_mut().unwrap().right;
            } else {
                break;
            }
        }

        *slot = slot.take().and_then(detach);
        true
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord + Copy,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord + Copy,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Whether a node holding `value` is reachable from `root` by ordinary BST descent.
///
/// # Examples
///
/// ```
/// use bst_engine::tree::{contains, Node};
///
/// let root = Node::with_children(42, Some(Box::new(Node::new(23))), None);
///
/// assert!(contains(Some(&root), &23));
/// assert!(!contains(Some(&root), &611));
/// assert!(!contains(None, &42));
/// ```
pub fn contains<T>(root: Option<&Node<T>>, value: &T) -> bool
where
    T: Ord,
{
    get_node(root, value).is_some()
}

/// Finds the first node holding `value` on the search path from `root`. With duplicates in the
/// tree this need not be the only such node: copies living off the search path aren't looked for.
pub fn get_node<'a, T>(root: Option<&'a Node<T>>, value: &T) -> Option<&'a Node<T>>
where
    T: Ord,
{
    let mut current = root;
    while let Some(node) = current {
        current = match value.cmp(&node.value) {
            Ordering::Equal => return Some(node),
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
        };
    }
    None
}

/// Counts the nodes reachable from `root`.
pub fn size<T>(root: Option<&Node<T>>) -> usize {
    let mut count = 0;
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left());
        stack.extend(node.right());
    }
    count
}

/// Collects every value reachable from `root` with an in-order walk, giving them in
/// non-decreasing order.
pub fn to_array<T>(root: Option<&Node<T>>) -> Vec<T>
where
    T: Copy,
{
    let mut out = Vec::with_capacity(size(root));
    // Nodes whose left subtree has been pushed but whose value hasn't been emitted yet.
    let mut pending: Vec<&Node<T>> = Vec::new();
    let mut current = root;
    loop {
        while let Some(node) = current {
            pending.push(node);
            current = node.left();
        }
        match pending.pop() {
            Some(node) => {
                out.push(node.value);
                current = node.right();
            }
            None => return out,
        }
    }
}

/// Takes `node` out of the tree and returns what should sit in its slot instead.
fn detach<T>(mut node: Box<Node<T>>) -> Link<T> {
    match (node.left.take(), node.right.take()) {
        (None, None) => {
            debug!("remove: detaching leaf");
            None
        }
        (None, Some(right)) => {
            debug!("remove: promoting right child");
            Some(right)
        }
        (Some(left), None) => {
            debug!("remove: promoting left child");
            Some(left)
        }
        (Some(left), Some(right)) => {
            debug!("remove: replacing value with in-order predecessor");
            let (predecessor, new_left) = take_largest(left);
            node.value = predecessor;
            node.left = new_left;
            node.right = Some(right);
            Some(node)
        }
    }
}

/// Splits the rightmost node off `root`. Returns its value and the subtree left behind, where the
/// rightmost node's left child has taken its place under its parent.
fn take_largest<T>(mut root: Box<Node<T>>) -> (T, Link<T>) {
    let mut parent = &mut root;
    while parent
        .right
        .as_ref()
        .map_or(false, |child| child.right.is_some())
    {
        parent = parent.right.as_mut().unwrap();
    }

    match parent.right.take() {
        Some(largest) => {
            let Node { value, left, .. } = *largest;
            parent.right = left;
            (value, Some(root))
        }
        None => {
            let Node { value, left, .. } = *root;
            (value, left)
        }
    }
}
