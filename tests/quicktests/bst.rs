use search_trees::bst::Tree;
use search_trees::Error;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same elements in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Add(x) => {
                bst.add(x.clone()).unwrap();
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                let _ = bst.remove(x);
                set.remove(x);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len() && tree.inorder() == set.iter().collect::<Vec<_>>()
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x) == Ok(true))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.contains(x) == Ok(false) && tree.get(x) == Err(Error::NotFound))
    }
}

quickcheck::quickcheck! {
    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for remove in &removes {
            let _ = tree.remove(remove);
        }

        let mut still_present = xs;
        still_present.retain(|x| !removes.contains(x));

        removes.iter().all(|x| tree.contains(x) == Ok(false))
            && still_present.iter().all(|x| tree.contains(x) == Ok(true))
    }
}

quickcheck::quickcheck! {
    fn prune_keeps_small_elements(xs: Vec<i8>, threshold: i8) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let mut expected: Vec<_> = xs.into_iter().filter(|x| *x <= threshold).collect();
        expected.sort_unstable();
        expected.dedup();

        tree.prune_greater_than(&threshold).unwrap();
        tree.len() == expected.len() && tree.inorder() == expected.iter().collect::<Vec<_>>()
    }
}

quickcheck::quickcheck! {
    fn traversals_hold_every_element(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let inorder = tree.inorder();
        sorted(tree.preorder()) == inorder
            && sorted(tree.postorder()) == inorder
            && sorted(tree.levelorder()) == inorder
    }
}

fn sorted(mut v: Vec<&i8>) -> Vec<&i8> {
    v.sort_unstable();
    v
}
