mod common;

use common::{petgraph_random, refgraph_chain, refgraph_random, RANDOM_SEED};
use fastrand::Rng;
use refgraph::{algo::StronglyConnectedComponents, core::DirectedGraph};

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn refgraph_gabow_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = refgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| StronglyConnectedComponents::on(&graph).run().len());
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn petgraph_tarjan_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| petgraph::algo::tarjan_scc(&graph).len());
}

#[divan::bench(consts = [1000, 100000])]
fn refgraph_gabow_chain<const N: usize>(bencher: divan::Bencher) {
    let graph = refgraph_chain(N);

    bencher.bench(|| StronglyConnectedComponents::on(&graph).run().len());
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn refgraph_scc_subgraphs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = refgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| graph.strongly_connected_components());
}
