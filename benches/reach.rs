mod common;

use common::{refgraph_chain, refgraph_random, RANDOM_SEED};
use fastrand::Rng;
use refgraph::algo::Reachable;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn refgraph_descendants_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = refgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| Reachable::on(&graph).run(&0).map(|reachable| reachable.len()));
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn refgraph_descendants_limited_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = refgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| {
        Reachable::on(&graph)
            .generations(3)
            .run(&0)
            .map(|reachable| reachable.len())
    });
}

#[divan::bench(consts = [1000, 100000])]
fn refgraph_ancestors_chain<const N: usize>(bencher: divan::Bencher) {
    let graph = refgraph_chain(N);
    let last = N as u32 - 1;

    bencher.bench(|| {
        Reachable::on(&graph)
            .ancestors()
            .run(&last)
            .map(|reachable| reachable.len())
    });
}

// Side edges followed last keep finding shorter paths to the tail.
#[divan::bench(consts = [1000, 4000])]
fn refgraph_descendants_shortcut_ladder<const N: usize>(bencher: divan::Bencher) {
    let n = N as u32;
    let mut pairs = Vec::new();
    for i in 0..n {
        pairs.push((i, n + 1 + i));
        pairs.push((i, i + 1));
        pairs.push((n + 1 + i, n));
    }
    for j in 0..n {
        pairs.push((if j == 0 { n } else { 2 * n + j }, 2 * n + 1 + j));
    }
    let graph = refgraph::storage::AdjList::<u32>::from_edge_pairs(0..3 * n + 1, pairs).unwrap();

    bencher.bench(|| Reachable::on(&graph).run(&0).map(|reachable| reachable.len()));
}
