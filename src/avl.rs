//! A self-balancing Binary Search Tree (specifically, an AVL tree). After every
//! add or remove, each node on the path back up to the root recomputes its
//! cached height and balance factor and, if it has become too lopsided,
//! rotates. This keeps the height of the tree `O(lg N)`.
//!
//! Each node also caches how many nodes its subtree holds, which lets
//! [`Tree::find_median`] walk straight to the middle element.
//!
//! # Examples
//!
//! ```
//! use search_trees::avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Adding in descending order would make a plain BST lean left. Here the
//! // tree rotates instead.
//! tree.add(5).unwrap();
//! tree.add(4).unwrap();
//! tree.add(3).unwrap();
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.data(), &4);
//! assert_eq!(root.balance_factor(), 0);
//! assert_eq!(tree.height(), 1);
//!
//! // Removing data returns what was stored.
//! assert_eq!(tree.remove(&4), Ok(4));
//! assert_eq!(tree.len(), 2);
//! ```

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::util::{self, BinaryNode};
use crate::{Error, Result};

type Link<T> = Option<Box<Node<T>>>;

/// An AVL tree storing distinct, totally ordered data.
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

    /// The height of the tree: -1 when empty, 0 for a lone root. This reads the
    /// root's cached height so it doesn't visit the rest of the tree.
    pub fn height(&self) -> isize {
        self.root().map_or(-1, |n| n.height)
    }

    /// Adds `data` as a new leaf, then rebalances every node on the way back
    /// up. If equal data is already stored, nothing happens.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `data` is absent.
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

    /// Removes the element equal to `data` and returns the stored element,
    /// rebalancing every node on the way back up. A node with two children
    /// takes its predecessor's data, and the predecessor's node is unlinked
    /// instead.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `data` is absent, [`Error::NotFound`] if
    /// it isn't stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::avl::Tree;
    ///
    /// let mut tree: Tree<_> = [646, 477, 856, 386, 526].into_iter().collect();
    /// assert_eq!(tree.remove(&477), Ok(477));
    ///
    /// // 477 was replaced by its predecessor.
    /// let left = tree.root().and_then(|n| n.left()).unwrap();
    /// assert_eq!(left.data(), &386);
    /// assert_eq!(left.balance_factor(), -1);
    /// ```
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

    /// Returns the middle element of the sorted data.
    ///
    /// Only the nodes on the path to the median are visited: at each node, the
    /// cached size of the left subtree says whether the median's rank lies to
    /// the left, here, or to the right.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the tree is empty or holds an even number of
    /// elements, since neither has a single middle element.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::avl::Tree;
    /// use search_trees::Error;
    ///
    /// let mut tree: Tree<_> = [76, 34, 90, 20, 40].into_iter().collect();
    /// assert_eq!(tree.find_median(), Ok(&40));
    ///
    /// tree.add(81).unwrap();
    /// assert_eq!(tree.find_median(), Err(Error::NotFound));
    ///
    /// tree.add(100).unwrap();
    /// assert_eq!(tree.find_median(), Ok(&76));
    /// ```
    pub fn find_median(&self) -> Result<&T> {
        if self.size % 2 == 0 {
            debug!(size = self.size, "no median for an even number of elements");
            return Err(Error::NotFound);
        }

        let mut rank = self.size / 2;
        let mut node = self.root();
        while let Some(n) = node {
            let left_size = n.left().map_or(0, |l| l.size);
            node = match rank.cmp(&left_size) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Ok(&n.data),
                Ordering::Greater => {
                    rank -= left_size + 1;
                    n.right()
                }
            };
        }
        unreachable!("cached subtree sizes disagree with the tree's size")
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

    /// Removes every element.
    pub fn clear(&mut self) {
        debug!(released = self.size, "clearing tree");
        self.root = None;
        self.size = 0;
    }
}

/// A node of a [`Tree`]. Alongside its data and subtrees it caches the height,
/// balance factor and size of the subtree rooted here.
#[derive(Debug, Clone)]
pub struct Node<T> {
    data: T,
    left: Link<T>,
    right: Link<T>,

    /// How many edges are on the longest path down to a leaf. A node with no
    /// children has a height of 0.
    height: isize,
    /// `height(left) - height(right)`, where an empty subtree has height -1.
    balance_factor: isize,
    /// How many nodes are in the subtree rooted here, this one included.
    size: usize,
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
            height: 0,
            balance_factor: 0,
            size: 1,
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

    /// The cached height of the subtree rooted here. A leaf has a height of 0.
    pub fn height(&self) -> isize {
        self.height
    }

    /// The cached difference between the heights of the left and right subtrees.
    pub fn balance_factor(&self) -> isize {
        self.balance_factor
    }

    /// The cached number of nodes in the subtree rooted here.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Recomputes the cached fields from the children's cached fields. Must be
    /// called whenever a child link changes, before the balance factor is read.
    fn update(&mut self) {
        let (left_height, left_size) = self.left().map_or((-1, 0), |n| (n.height, n.size));
        let (right_height, right_size) = self.right().map_or((-1, 0), |n| (n.height, n.size));

        self.height = 1 + left_height.max(right_height);
        self.balance_factor = left_height - right_height;
        self.size = 1 + left_size + right_size;
    }

    /// Rotates `node` if it has become too tall on one side, returning the
    /// subtree's new root. `node` must already be [`update`](Self::update)d.
    ///
    /// See [the Wikipedia page][wiki] for terminology.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
    fn rotate(mut node: Box<Self>) -> Box<Self> {
        let balance_factor = node.balance_factor;
        let node = match balance_factor {
            bf if bf > 1 => {
                if node.left().map_or(0, |n| n.balance_factor) < 0 {
                    trace!("rotating left-right");
                    node.left = node.left.take().map(Self::rotate_left);
                }
                Self::rotate_right(node)
            }
            bf if bf < -1 => {
                if node.right().map_or(0, |n| n.balance_factor) > 0 {
                    trace!("rotating right-left");
                    node.right = node.right.take().map(Self::rotate_right);
                }
                Self::rotate_left(node)
            }
            _ => node,
        };

        if cfg!(debug_assertions) {
            let left_height = node.left().map_or(-1, |n| n.height);
            let right_height = node.right().map_or(-1, |n| n.height);
            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!(node.balance_factor.abs() <= 1);
        }
        node
    }

    /// Rotate `node` to the right. This moves the left child up vertically and
    /// `node` down vertically. Used to rebalance the tree when the left child
    /// is too tall.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      old_root                new_root
    ///      /     \                 /     \
    ///  new_root   z    rotate ->  x    old_root
    ///   /   \                           /   \
    ///  x     y                         y     z
    /// ```
    fn rotate_right(mut old_root: Box<Self>) -> Box<Self> {
        trace!("rotating right");
        let mut new_root = old_root.left.take().expect("Rotate right => left child");

        old_root.left = new_root.right.take();
        old_root.update();

        new_root.right = Some(old_root);
        new_root.update();
        new_root
    }

    /// Rotate `node` to the left, the mirror image of [`rotate_right`](Self::rotate_right).
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    fn rotate_left(mut old_root: Box<Self>) -> Box<Self> {
        trace!("rotating left");
        let mut new_root = old_root.right.take().expect("Rotate left => right child");

        old_root.right = new_root.left.take();
        old_root.update();

        new_root.left = Some(old_root);
        new_root.update();
        new_root
    }

    /// Recomputes `node`'s cached fields and rebalances it.
    fn rebalance(mut node: Box<Self>) -> Box<Self> {
        node.update();
        Self::rotate(node)
    }

    /// Adds `data` below `link` and returns the subtree's (rebalanced) root.
    /// `added` is set when a node was created.
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
        Self::rebalance(node)
    }

    /// Removes `data` from below `link`. Returns the subtree's new root and the
    /// removed data, which is `None` when nothing matched. A miss relinks every
    /// node where it was, and rebalancing an untouched node changes nothing.
    fn remove(link: Link<T>, data: &T) -> (Link<T>, Option<T>)
    where
        T: Ord,
    {
        let Some(mut node) = link else {
            return (None, None);
        };

        let removed = match data.cmp(&node.data) {
            Ordering::Less => {
                let (left, removed) = Self::remove(node.left.take(), data);
                node.left = left;
                removed
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove(node.right.take(), data);
                node.right = right;
                removed
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => return (None, Some(node.data)),
                (Some(child), None) | (None, Some(child)) => {
                    return (Some(child), Some(node.data))
                }
                (Some(left), Some(right)) => {
                    let (left, predecessor) = Self::remove_largest(left);
                    node.left = left;
                    node.right = Some(right);
                    Some(std::mem::replace(&mut node.data, predecessor))
                }
            },
        };
        (Some(Self::rebalance(node)), removed)
    }

    /// Unlinks the rightmost node of the subtree rooted at `node`. Returns the
    /// subtree's new (rebalanced) root and the unlinked node's data.
    fn remove_largest(mut node: Box<Self>) -> (Link<T>, T) {
        match node.right.take() {
            None => (node.left.take(), node.data),
            Some(right) => {
                let (right, largest) = Self::remove_largest(right);
                node.right = right;
                (Some(Self::rebalance(node)), largest)
            }
        }
    }
}
