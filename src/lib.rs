//! This crate exposes an owning, unbalanced Binary Search Tree (BST) of unique keys along with a
//! couple of small helpers for feeding it and printing what comes out.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and erase stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The [`Tree`] here does no rebalancing, so
//! inserting keys in sorted order gives a tree whose height is its size. Shuffling the keys
//! first (see [`shuffle`]) usually keeps it much shallower.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree. See [`Order`] for the traversals on offer.
//!
//! ```
//! use ordered_tree::shuffle::perfect_shuffle;
//! use ordered_tree::util::Sequence;
//! use ordered_tree::{Order, Tree};
//!
//! let mut keys: Vec<_> = (0..10).collect();
//! perfect_shuffle(&mut keys, 0);
//!
//! let mut tree: Tree<_> = keys.into_iter().collect();
//! tree.erase(&5);
//!
//! let sorted = tree.traverse(Order::Inorder);
//! assert_eq!(Sequence(&sorted).to_string(), "[ 0 1 2 3 4 6 7 8 9 ]");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod shuffle;
pub mod tree;
pub mod util;

pub use error::{TreeError, TreeResult};
pub use tree::{Node, Order, Tree};
