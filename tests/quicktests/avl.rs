use search_trees::avl::{Node, Tree};

use std::collections::BTreeSet;

use crate::Op;

/// Walks the whole tree checking that every cached field matches the real
/// shape of the tree. Returns the real height and size of the subtree.
fn check_node<T: Ord>(node: Option<&Node<T>>) -> Option<(isize, usize)> {
    let Some(node) = node else {
        return Some((-1, 0));
    };
    if node.left().map_or(false, |l| l.data() >= node.data())
        || node.right().map_or(false, |r| r.data() <= node.data())
    {
        return None;
    }

    let (left_height, left_size) = check_node(node.left())?;
    let (right_height, right_size) = check_node(node.right())?;
    let height = 1 + left_height.max(right_height);
    let size = 1 + left_size + right_size;

    let balanced = (left_height - right_height).abs() <= 1
        && node.balance_factor() == left_height - right_height;
    (balanced && node.height() == height && node.size() == size).then_some((height, size))
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        for op in &ops {
            match op {
                Op::Add(x) => {
                    tree.add(*x).unwrap();
                    set.insert(*x);
                }
                Op::Remove(x) => {
                    if tree.remove(x).ok() != set.take(x) {
                        return false;
                    }
                }
            }
            if check_node(tree.root()).map(|(_, size)| size) != Some(set.len()) {
                return false;
            }
        }

        tree.inorder() == set.iter().collect::<Vec<_>>()
    }
}

quickcheck::quickcheck! {
    fn height_is_cached(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();

        check_node(tree.root()).map(|(height, _)| height) == Some(tree.height())
    }
}

quickcheck::quickcheck! {
    fn median_is_middle_of_inorder(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let inorder = tree.inorder();

        match tree.find_median() {
            Ok(median) => inorder.len() % 2 == 1 && inorder[inorder.len() / 2] == median,
            Err(_) => inorder.len() % 2 == 0,
        }
    }
}
