#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;
use refgraph::storage::AdjList;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Random pairs of distinct vertices, each included with probability `p`.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    /// Returns the next pair, oriented at random.
    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some(if rng.bool() { (*v, *w) } else { (*w, *v) })
        } else {
            None
        }
    }
}

pub fn refgraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> AdjList<u32> {
    let mut pairs = Vec::new();
    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        pairs.push((u as u32, v as u32));
    }

    AdjList::from_edge_pairs(0..vertex_count as u32, pairs).unwrap()
}

pub fn refgraph_chain(vertex_count: usize) -> AdjList<u32> {
    let n = vertex_count as u32;
    AdjList::from_edge_pairs(0..n, (1..n).map(|i| (i - 1, i))).unwrap()
}

pub fn petgraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> DiGraph<u32, ()> {
    let mut graph = DiGraph::with_capacity(vertex_count, 0);

    for i in 0..vertex_count {
        graph.add_node(i as u32);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    graph
}
