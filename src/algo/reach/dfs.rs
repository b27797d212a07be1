use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{error::GraphError, marker::Direction, Neighbors, VertexSet};

pub struct Visited<'a, G: VertexSet> {
    pub order: Vec<&'a G::Vertex>,
    pub keys: FxHashSet<G::Key>,
}

pub fn dfs<'a, G>(
    graph: &'a G,
    start: &G::Vertex,
    dir: Direction,
    limit: Option<usize>,
) -> Result<Visited<'a, G>, GraphError>
where
    G: Neighbors + VertexSet,
{
    let key = graph.id_map(start);
    let start = graph
        .vertex(&key)
        .ok_or_else(|| GraphError::not_found(&key))?;

    let visited = match limit {
        Some(limit) => bounded(graph, start, dir, limit),
        None => unbounded(graph, start, dir),
    };

    tracing::trace!(reached = visited.order.len(), ?limit, "reachability search finished");

    Ok(visited)
}

// Every vertex is expanded exactly once.
fn unbounded<'a, G>(graph: &'a G, start: &'a G::Vertex, dir: Direction) -> Visited<'a, G>
where
    G: Neighbors + VertexSet,
{
    let mut keys = FxHashSet::default();
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(vertex) = stack.pop() {
        if !keys.insert(graph.id_map(vertex)) {
            continue;
        }

        order.push(vertex);

        for neighbor in graph.neighbors_directed(vertex, dir).into_iter().flatten() {
            if !keys.contains(&graph.id_map(neighbor)) {
                stack.push(neighbor);
            }
        }
    }

    Visited { order, keys }
}

fn bounded<'a, G>(
    graph: &'a G,
    start: &'a G::Vertex,
    dir: Direction,
    limit: usize,
) -> Visited<'a, G>
where
    G: Neighbors + VertexSet,
{
    // Shortest known distance of every discovered vertex. A vertex is expanded
    // again whenever a strictly shorter path to it is found, so that the bound
    // is applied to the real distance and not to the first path found.
    let mut depths = FxHashMap::default();
    let mut keys = FxHashSet::default();
    let mut order = Vec::new();

    depths.insert(graph.id_map(start), 0usize);
    let mut stack = vec![(start, 0usize)];

    while let Some((vertex, depth)) = stack.pop() {
        let key = graph.id_map(vertex);

        if depths.get(&key).is_some_and(|&best| best < depth) {
            continue;
        }

        if keys.insert(key) {
            order.push(vertex);
        }

        if depth >= limit {
            continue;
        }

        let next = depth + 1;
        for neighbor in graph.neighbors_directed(vertex, dir).into_iter().flatten() {
            let key = graph.id_map(neighbor);
            let improved = match depths.get(&key) {
                Some(&known) => next < known,
                None => true,
            };

            if improved {
                depths.insert(key, next);
                stack.push((neighbor, next));
            }
        }
    }

    Visited { order, keys }
}
