//! An ordinary Binary Search Tree with no balancing. Its shape depends entirely
//! on the order in which data is added, so adding sorted data degenerates it
//! into a linked list.
//!
//! # Examples
//!
//! ```
//! use search_trees::bst::Tree;
//! use search_trees::Error;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.get(&1), Err(Error::NotFound));
//!
//! tree.add(1).unwrap();
//! assert_eq!(tree.get(&1), Ok(&1));
//!
//! // Adding the same data again does nothing.
//! tree.add(1).unwrap();
//! assert_eq!(tree.len(), 1);
//!
//! // Removing data returns what was stored.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.contains(&1), Ok(false));
//! ```

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::util::{self, BinaryNode};
use crate::{Error, Result};

type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree storing distinct, totally ordered data.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.insert(data);
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, size: 0 }
    }

    /// Builds a tree by adding every element of `data` in order. Duplicates are skipped.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if any element is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst::Tree;
    /// use search_trees::Error;
    ///
    /// let tree = Tree::<i32>::try_from_iter([2, 0, 1]).unwrap();
    /// assert_eq!(tree.preorder(), [&2, &0, &1]);
    ///
    /// let tree = Tree::<i32>::try_from_iter([Some(2), None]);
    /// assert_eq!(tree.unwrap_err(), Error::InvalidArgument { operation: "add" });
    /// ```
    pub fn try_from_iter<I>(data: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
        T: Ord,
    {
        let mut tree = Self::new();
        for d in data {
            tree.add(d)?;
        }
        Ok(tree)
    }

    /// The number of elements stored in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree stores no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The root of the tree, for inspecting its shape.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Adds `data` as a new leaf. If equal data is already stored, nothing happens.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `data` is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1).unwrap();
    /// tree.add(0).unwrap();
    /// tree.add(2).unwrap();
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.data(), &1);
    /// assert_eq!(root.left().map(|n| *n.data()), Some(0));
    /// assert_eq!(root.right().map(|n| *n.data()), Some(2));
    /// ```
    pub fn add(&mut self, data: impl Into<Option<T>>) -> Result<()>
    where
        T: Ord,
    {
        let data = util::required(data.into(), "add")?;
        self.insert(data);
        Ok(())
    }

    fn insert(&mut self, data: T)
    where
        T: Ord,
    {
        let mut added = false;
        self.root = Some(Node::add(self.root.take(), data, &mut added));
        if added {
            self.size += 1;
        }
    }

    /// Removes the element equal to `data` and returns the stored element. A
    /// node with two children takes its successor's data, and the successor's
    /// node is unlinked instead.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `data` is absent, [`Error::NotFound`] if
    /// it isn't stored.
    pub fn remove<'a>(&mut self, data: impl Into<Option<&'a T>>) -> Result<T>
    where
        T: Ord + 'a,
    {
        let data = util::required(data.into(), "remove")?;
        let (root, removed) = Node::remove(self.root.take(), data);
        self.root = root;

        let removed = removed.ok_or(Error::NotFound)?;
        self.size -= 1;
        Ok(removed)
    }

    /// Returns the stored element equal to `data`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `data` is absent, [`Error::NotFound`] if
    /// it isn't stored.
    pub fn get<'a>(&self, data: impl Into<Option<&'a T>>) -> Result<&T>
    where
        T: Ord + 'a,
    {
        let data = util::required(data.into(), "get")?;
        util::find(self.root(), data).ok_or(Error::NotFound)
    }

    /// Whether an element equal to `data` is stored.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `data` is absent.
    pub fn contains<'a>(&self, data: impl Into<Option<&'a T>>) -> Result<bool>
    where
        T: Ord + 'a,
    {
        let data = util::required(data.into(), "contains")?;
        Ok(util::find(self.root(), data).is_some())
    }

    /// Every element, each node before its left then right subtree.
    pub fn preorder(&self) -> Vec<&T> {
        util::preorder(self.root())
    }

    /// Every element in ascending order.
    pub fn inorder(&self) -> Vec<&T> {
        util::inorder(self.root())
    }

    /// Every element, each node after its left then right subtree.
    pub fn postorder(&self) -> Vec<&T> {
        util::postorder(self.root())
    }

    /// Every element, level by level from the root, left to right.
    pub fn levelorder(&self) -> Vec<&T> {
        util::levelorder(self.root())
    }

    /// The height of the tree, computed by visiting every node. An empty tree
    /// has a height of -1 and a lone root has a height of 0.
    pub fn height(&self) -> isize {
        util::height(self.root())
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        debug!(released = self.size, "clearing tree");
        self.root = None;
        self.size = 0;
    }

    /// Removes every element strictly greater than `threshold` and returns
    /// the new root.
    ///
    /// Only the path along which kept and removed data meet is walked. Once a
    /// node is too large, it and its whole right subtree are dropped and its
    /// left subtree takes its place.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `threshold` is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst::Tree;
    ///
    /// let mut tree: Tree<_> = [50, 25, 75, 12, 37].into_iter().collect();
    /// let root = tree.prune_greater_than(&30).unwrap().unwrap();
    ///
    /// assert_eq!(root.data(), &25);
    /// assert_eq!(tree.inorder(), [&12, &25]);
    /// ```
    pub fn prune_greater_than<'a>(
        &mut self,
        threshold: impl Into<Option<&'a T>>,
    ) -> Result<Option<&Node<T>>>
    where
        T: Ord + 'a,
    {
        let threshold = util::required(threshold.into(), "prune")?;
        let mut removed = 0;
        self.root = Node::prune_greater_than(self.root.take(), threshold, &mut removed);
        self.size -= removed;

        debug!(removed, remaining = self.size, "pruned tree");
        Ok(self.root())
    }
}

/// A node of a [`Tree`]. It owns its data and both of its subtrees.
#[derive(Debug, Clone)]
pub struct Node<T> {
    data: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> BinaryNode for Node<T> {
    type Data = T;

    fn data(&self) -> &T {
        &self.data
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<T> Node<T> {
    fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    /// The data stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Adds `data` below `link` and returns the subtree's root. `added` is set
    /// when a node was created.
    fn add(link: Link<T>, data: T, added: &mut bool) -> Box<Self>
    where
        T: Ord,
    {
        let Some(mut node) = link else {
            *added = true;
            return Self::new_boxed(data);
        };

        match data.cmp(&node.data) {
            Ordering::Less => node.left = Some(Self::add(node.left.take(), data, added)),
            Ordering::Equal => trace!("skipping duplicate"),
            Ordering::Greater => node.right = Some(Self::add(node.right.take(), data, added)),
        }

        if cfg!(debug_assertions) {
            if let Some(left) = node.left() {
                assert!(node.data > left.data);
            }
            if let Some(right) = node.right() {
                assert!(node.data < right.data);
            }
        }
        node
    }

    /// Removes `data` from below `link`. Returns the subtree's new root and the
    /// removed data, which is `None` when nothing matched. In that case the
    /// subtree comes back exactly as it went in.
    fn remove(link: Link<T>, data: &T) -> (Link<T>, Option<T>)
    where
        T: Ord,
    {
        let Some(mut node) = link else {
            return (None, None);
        };

        match data.cmp(&node.data) {
            Ordering::Less => {
                let (left, removed) = Self::remove(node.left.take(), data);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove(node.right.take(), data);
                node.right = right;
                (Some(node), removed)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => (None, Some(node.data)),
                (Some(child), None) | (None, Some(child)) => (Some(child), Some(node.data)),
                (Some(left), Some(right)) => {
                    let (right, successor) = Self::remove_smallest(right);
                    let removed = std::mem::replace(&mut node.data, successor);
                    node.left = Some(left);
                    node.right = right;
                    (Some(node), Some(removed))
                }
            },
        }
    }

    /// Unlinks the leftmost node of the subtree rooted at `node`. Returns the
    /// subtree's new root and the unlinked node's data.
    fn remove_smallest(mut node: Box<Self>) -> (Link<T>, T) {
        match node.left.take() {
            None => (node.right.take(), node.data),
            Some(left) => {
                let (left, smallest) = Self::remove_smallest(left);
                node.left = left;
                (Some(node), smallest)
            }
        }
    }

    /// Drops every node below `link` holding data greater than `threshold`,
    /// adding the number of dropped nodes to `removed`.
    fn prune_greater_than(link: Link<T>, threshold: &T, removed: &mut usize) -> Link<T>
    where
        T: Ord,
    {
        let mut node = link?;
        if node.data > *threshold {
            // Everything to the right is larger still.
            *removed += 1 + util::count(node.right());
            Self::prune_greater_than(node.left.take(), threshold, removed)
        } else {
            node.right = Self::prune_greater_than(node.right.take(), threshold, removed);
            Some(node)
        }
    }
}
