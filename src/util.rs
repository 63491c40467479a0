//! Read-only algorithms shared by both trees. They only need to know how to get
//! from a node to its data and children, which [`BinaryNode`] provides.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::{Error, Result};

/// A node of a binary tree that owns its children.
pub(crate) trait BinaryNode {
    type Data;

    fn data(&self) -> &Self::Data;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
}

/// Unwraps the data handed to `operation` or rejects it as absent.
pub(crate) fn required<D>(data: Option<D>, operation: &'static str) -> Result<D> {
    data.ok_or(Error::InvalidArgument { operation })
}

/// Finds the stored data comparing equal to `data` by walking down from `node`.
pub(crate) fn find<'n, N>(mut node: Option<&'n N>, data: &N::Data) -> Option<&'n N::Data>
where
    N: BinaryNode,
    N::Data: Ord,
{
    while let Some(n) = node {
        node = match data.cmp(n.data()) {
            Ordering::Less => n.left(),
            Ordering::Equal => return Some(n.data()),
            Ordering::Greater => n.right(),
        };
    }
    None
}

pub(crate) fn preorder<N: BinaryNode>(node: Option<&N>) -> Vec<&N::Data> {
    fn visit<'n, N: BinaryNode>(node: Option<&'n N>, out: &mut Vec<&'n N::Data>) {
        if let Some(n) = node {
            out.push(n.data());
            visit(n.left(), out);
            visit(n.right(), out);
        }
    }

    let mut out = Vec::new();
    visit(node, &mut out);
    out
}

pub(crate) fn inorder<N: BinaryNode>(node: Option<&N>) -> Vec<&N::Data> {
    fn visit<'n, N: BinaryNode>(node: Option<&'n N>, out: &mut Vec<&'n N::Data>) {
        if let Some(n) = node {
            visit(n.left(), out);
            out.push(n.data());
            visit(n.right(), out);
        }
    }

    let mut out = Vec::new();
    visit(node, &mut out);
    out
}

pub(crate) fn postorder<N: BinaryNode>(node: Option<&N>) -> Vec<&N::Data> {
    fn visit<'n, N: BinaryNode>(node: Option<&'n N>, out: &mut Vec<&'n N::Data>) {
        if let Some(n) = node {
            visit(n.left(), out);
            visit(n.right(), out);
            out.push(n.data());
        }
    }

    let mut out = Vec::new();
    visit(node, &mut out);
    out
}

/// Breadth-first traversal, driven by a FIFO queue seeded with `node`.
pub(crate) fn levelorder<N: BinaryNode>(node: Option<&N>) -> Vec<&N::Data> {
    let mut out = Vec::new();
    let mut queue: VecDeque<&N> = node.into_iter().collect();
    while let Some(n) = queue.pop_front() {
        out.push(n.data());
        queue.extend(n.left());
        queue.extend(n.right());
    }
    out
}

/// Recomputes the height of the subtree rooted at `node`. An empty subtree has
/// a height of -1 and a leaf has a height of 0.
pub(crate) fn height<N: BinaryNode>(node: Option<&N>) -> isize {
    match node {
        None => -1,
        Some(n) => 1 + height(n.left()).max(height(n.right())),
    }
}

/// Counts the nodes in the subtree rooted at `node`.
pub(crate) fn count<N: BinaryNode>(node: Option<&N>) -> usize {
    match node {
        None => 0,
        Some(n) => 1 + count(n.left()) + count(n.right()),
    }
}
