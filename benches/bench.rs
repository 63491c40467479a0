use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use search_trees::{avl, bst};

#[derive(Clone)]
enum TreeEnum<T> {
    Bst(bst::Tree<T>),
    Avl(avl::Tree<T>),
}

impl<T: Ord> TreeEnum<T> {
    fn contains(&self, data: &T) -> bool {
        let found = match self {
            Self::Bst(t) => t.contains(data),
            Self::Avl(t) => t.contains(data),
        };
        found.unwrap_or_default()
    }

    fn add(&mut self, data: T) {
        let _ = match self {
            Self::Bst(t) => t.add(data),
            Self::Avl(t) => t.add(data),
        };
    }

    fn remove(&mut self, data: &T) {
        let _ = match self {
            Self::Bst(t) => t.remove(data),
            Self::Avl(t) => t.remove(data),
        };
    }
}

/// Helper to bench a function on both trees.
/// It creates a group for the given name and closure and runs tests for various sizes of trees
/// before finishing the group. Data is added in ascending order, so the BST degenerates into a
/// linked list while the AVL tree stays balanced.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut TreeEnum<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // Deeper than this and the degenerate BST recurses too far.
    for num_levels in [3, 7, 11] {
        let num_nodes = 2i32.pow(num_levels) - 1;
        let largest_element_in_tree = num_nodes - 1;

        let tree_tests = [
            ("bst", TreeEnum::Bst((0..num_nodes).collect())),
            ("avl", TreeEnum::Avl((0..num_nodes).collect())),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

/// The median only exists on the AVL tree, so it gets its own group.
fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("median");

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2i32.pow(num_levels) - 1;
        let tree: avl::Tree<_> = (0..num_nodes).collect();

        group.bench_with_input(BenchmarkId::new("avl", num_nodes), &tree, |b, tree| {
            b.iter(|| black_box(tree.find_median()))
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "contains", |tree, i| {
        let _found = black_box(tree.contains(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        tree.remove(&i);
    });

    bench_helper(c, "add", |tree, i| {
        tree.add(i + 1);
    });

    bench_helper(c, "contains-miss", |tree, i| {
        let _found = black_box(tree.contains(&(i + 1)));
    });
    bench_helper(c, "remove-miss", |tree, i| {
        tree.remove(&(i + 1));
    });

    bench_median(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
