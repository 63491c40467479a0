//! This crate exposes two Binary Search Trees (BSTs), mostly for educational
//! purposes: a plain [`bst::Tree`] and a self-balancing [`avl::Tree`].
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! add, find, and remove stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element
//! and may have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree hold
//!    data less than its own data.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree hold
//!    data greater than its own data.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Neither tree stores duplicates: adding data that compares equal to stored
//! data does nothing.
//!
//! ## Pointer reinforcement
//!
//! Every mutating operation is written as a recursive function that takes
//! ownership of a subtree root and hands back the (possibly different) root of
//! that subtree. The caller always stores the returned root in the slot it
//! came from. For the BST this only matters when nodes are created or
//! unlinked, but it is what lets the AVL tree propagate rotations up the path.
//!
//! ## Absent data
//!
//! Operations accept `impl Into<Option<_>>` so plain values can be passed
//! directly while `None` stands for "no data". Absent data is rejected with
//! [`Error::InvalidArgument`] before the tree is touched.
//!
//! ```
//! use search_trees::{avl, Error};
//!
//! let mut tree: avl::Tree<i32> = [5, 4, 3].into_iter().collect();
//!
//! assert_eq!(tree.root().map(|n| *n.data()), Some(4));
//! assert_eq!(tree.find_median(), Ok(&4));
//! assert_eq!(tree.add(None), Err(Error::InvalidArgument { operation: "add" }));
//! assert_eq!(tree.remove(&42), Err(Error::NotFound));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod bst;
mod error;
mod util;


pub use error::{Error, Result};
