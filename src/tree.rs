//! An owning, unbalanced BST. Every node exclusively owns its two children so dropping a node
//! drops its whole subtree and cloning the tree deep-copies every node.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(tree.find(&1).is_none());
//!
//! assert!(tree.insert(5));
//! assert!(tree.insert(3));
//! assert!(tree.insert(8));
//!
//! // Keys are unique so a second insert is rejected.
//! assert!(!tree.insert(3));
//!
//! assert_eq!(tree.traverse(Order::Inorder), vec![3, 5, 8]);
//!
//! // Erasing reports whether the key was there.
//! assert!(tree.erase(&5));
//! assert!(!tree.erase(&5));
//! assert_eq!(tree.traverse(Order::Inorder), vec![3, 8]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::str::FromStr;

use log::{debug, trace};

use crate::error::{TreeError, TreeResult};

/// An owned, possibly empty, subtree.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree of unique keys. This can be used for inserting, finding, and erasing
/// keys. It does no rebalancing so inserting keys in sorted order degrades it into a list.
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: deep_copy(self.root()),
        }
    }

    /// Releases every node of `self` and then deep-copies `source` into it.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = deep_copy(source.root());
    }
}

/// Which of its parent's links a node hangs off.
#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Copies every node below `root` into freshly allocated nodes of the same shape.
///
/// The source is listed in pre-order first, so a parent always comes before its children.
/// Building the copies back to front then finishes both children of a node before the node
/// itself is built, without recursing.
fn deep_copy<T>(root: Option<&Node<T>>) -> Link<T>
where
    T: Clone,
{
    let mut listed: Vec<(&Node<T>, Option<(usize, Side)>)> = Vec::new();
    let mut stack: Vec<_> = root.map(|root| (root, None)).into_iter().collect();
    while let Some((node, parent)) = stack.pop() {
        let index = listed.len();
        listed.push((node, parent));
        stack.extend(node.right().map(|right| (right, Some((index, Side::Right)))));
        stack.extend(node.left().map(|left| (left, Some((index, Side::Left)))));
    }

    let mut children: Vec<(Link<T>, Link<T>)> =
        std::iter::repeat_with(|| (None, None)).take(listed.len()).collect();
    let mut copied_root = None;
    for (index, (node, parent)) in listed.into_iter().enumerate().rev() {
        let (left, right) = mem::take(&mut children[index]);
        let copy = Some(Box::new(Node {
            key: node.key.clone(),
            left,
            right,
        }));
        match parent {
            Some((parent, Side::Left)) => children[parent].0 = copy,
            Some((parent, Side::Right)) => children[parent].1 = copy,
            None => copied_root = copy,
        }
    }
    copied_root
}

impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    /// Two trees are equal when they have the same shape and the same keys in the same places.
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self.root(), other.root())];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.key == b.key => {
                    stack.push((a.right(), b.right()));
                    stack.push((a.left(), b.left()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    /// Lists the nodes in pre-order. Each node only names its children's keys so deep trees
    /// don't recurse.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes = Vec::new();
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            nodes.push(node);
            stack.extend(node.right());
            stack.extend(node.left());
        }
        f.debug_struct("Tree").field("nodes", &nodes).finish()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    /// Inserts every key in turn. Duplicates are skipped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the keys in the tree. This visits every node.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    /// Returns the root node, if there is one.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Finds the node holding the given key. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let node = tree.find(&2).unwrap();
    /// assert_eq!(node.key(), &2);
    /// assert_eq!(node.children(), 2);
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Returns `true` if the tree holds the given key.
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        self.find(key).is_some()
    }

    /// Inserts the given key as a new leaf. Returns `false`, leaving the tree untouched, if the
    /// key is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let slot = slot_for(&mut self.root, &key);
        if slot.is_some() {
            debug!("insert rejected, key already present");
            return false;
        }

        *slot = Some(Node::new_boxed(key));
        trace!("attached new leaf");
        true
    }

    /// Erases the node holding the given key. Returns `false` if the tree doesn't hold the key.
    ///
    /// A node with two children is replaced by its in-order successor, the smallest key of its
    /// right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, Tree};
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert!(tree.erase(&5));
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(7));
    /// assert_eq!(tree.traverse(Order::Inorder), vec![1, 3, 4, 7, 8, 9]);
    /// ```
    pub fn erase(&mut self, key: &T) -> bool
    where
        T: Ord,
    {
        let slot = slot_for(&mut self.root, key);
        let Some(mut erased) = slot.take() else {
            debug!("erase rejected, key not present");
            return false;
        };

        // The children are moved out before `erased` is dropped so only that one node goes away.
        *slot = match (erased.left.take(), erased.right.take()) {
            (None, None) => {
                trace!("detached leaf");
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!("spliced only child into the vacated slot");
                Some(child)
            }
            (Some(left), Some(right)) => {
                let (mut successor, rest) = right.take_min();
                trace!("promoted in-order successor into the vacated slot");
                successor.left = Some(left);
                successor.right = rest;
                Some(successor)
            }
        };
        true
    }

    /// Releases every node. Calling this on an empty tree does nothing.
    ///
    /// This walks the tree with an explicit stack so that a degenerate (list-like) tree can't
    /// overflow the call stack.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }

    /// Collects every key in the given [`Order`]. The result has one entry per node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, Tree};
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse(Order::Preorder), vec![2, 1, 3]);
    /// assert_eq!(tree.traverse(Order::Inorder), vec![1, 2, 3]);
    /// assert_eq!(tree.traverse(Order::Postorder), vec![1, 3, 2]);
    /// ```
    pub fn traverse(&self, order: Order) -> Vec<T>
    where
        T: Clone,
    {
        let mut keys = Vec::new();
        if let Some(root) = self.root() {
            root.collect(order, &mut keys);
        }
        keys
    }

    /// Renders one line per node, in pre-order, naming the node's address, its key, and its
    /// children's keys and addresses (or `null`). This is only meant for eyeballing the shape of
    /// the tree.
    pub fn debug_info(&self) -> String
    where
        T: fmt::Display,
    {
        DebugInfo(self.root()).to_string()
    }

    /// Exchanges the contents of two trees without touching any node.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.root, &mut other.root);
    }
}

/// Walks down from `slot` to the link holding `key`, or to the empty link where `key` would be
/// attached.
fn slot_for<'a, T>(mut slot: &'a mut Link<T>, key: &T) -> &'a mut Link<T>
where
    T: Ord,
{
    while let Some(ordering) = slot.as_deref().map(|node| key.cmp(&node.key)) {
        slot = match (ordering, slot) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, found) => return found,
        };
    }
    slot
}

/// The order in which [`Tree::traverse`] visits keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Order {
    /// A node's key, then its left subtree, then its right subtree.
    Preorder,
    /// A node's left subtree, then its key, then its right subtree. This yields sorted keys.
    #[default]
    Inorder,
    /// A node's left subtree, then its right subtree, then its key.
    Postorder,
}

impl Order {
    /// Every supported order.
    pub const ALL: [Order; 3] = [Order::Preorder, Order::Inorder, Order::Postorder];

    /// The name accepted by [`Order::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Order::Preorder => "preorder",
            Order::Inorder => "inorder",
            Order::Postorder => "postorder",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Order {
    type Err = TreeError;

    /// Parses an order by name, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, TreeError};
    ///
    /// assert_eq!("PostOrder".parse::<Order>(), Ok(Order::Postorder));
    /// assert_eq!(
    ///     "levelorder".parse::<Order>(),
    ///     Err(TreeError::UnsupportedOrder("levelorder".to_string()))
    /// );
    /// ```
    fn from_str(s: &str) -> TreeResult<Self> {
        Order::ALL
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TreeError::UnsupportedOrder(s.to_string()))
    }
}

/// A single key and the two subtrees it owns. Nodes are only ever handed out by reference so
/// the tree's ordering can't be broken from the outside.
pub struct Node<T> {
    key: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl<T> Node<T> {
    fn new_boxed(key: T) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &T {
        &self.key
    }

    /// The root of the left subtree. All of its keys are smaller than this node's key.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree. All of its keys are larger than this node's key.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// How many children (0, 1, or 2) this node has.
    pub fn children(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Detaches the smallest node of this subtree by following left links. Returns that node,
    /// with its own right subtree already moved out, along with what remains of the subtree.
    ///
    /// The minimum's right subtree takes its place under its old parent, so when `self` is the
    /// minimum the remainder is just `self`'s right subtree.
    fn take_min(mut self: Box<Self>) -> (Box<Self>, Link<T>) {
        match self.left.take() {
            None => {
                let rest = self.right.take();
                (self, rest)
            }
            Some(left) => {
                let (min, rest) = left.take_min();
                self.left = rest;
                (min, Some(self))
            }
        }
    }

    fn collect(&self, order: Order, keys: &mut Vec<T>)
    where
        T: Clone,
    {
        if order == Order::Preorder {
            keys.push(self.key.clone());
        }
        if let Some(left) = self.left() {
            left.collect(order, keys);
        }
        if order == Order::Inorder {
            keys.push(self.key.clone());
        }
        if let Some(right) = self.right() {
            right.collect(order, keys);
        }
        if order == Order::Postorder {
            keys.push(self.key.clone());
        }
    }
}

/// Pre-order dump used by [`Tree::debug_info`].
struct DebugInfo<'a, T>(Option<&'a Node<T>>);

impl<T> fmt::Display for DebugInfo<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<&Node<T>> = self.0.into_iter().collect();
        while let Some(node) = stack.pop() {
            write!(f, "@{:p}: key={} ", node, node.key)?;
            for (side, child) in [("left", node.left()), ("right", node.right())] {
                match child {
                    Some(child) => write!(f, "{}->{} @{:p} ", side, child.key, child)?,
                    None => write!(f, "{}->null ", side)?,
                }
            }
            writeln!(f)?;

            // Right first so the left subtree is printed first.
            stack.extend(node.right());
            stack.extend(node.left());
        }
        Ok(())
    }
}
