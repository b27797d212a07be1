use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{Neighbors, VertexSet};

enum Task<'a, V> {
    Visit(&'a V),
    Edge(&'a V),
    PostVisit(&'a V),
}

pub fn gabow<G>(graph: &G) -> Vec<Vec<&G::Vertex>>
where
    G: Neighbors + VertexSet,
{
    let mut components = Vec::new();

    // Position of a vertex on the path stack at the time it was visited. Kept
    // after the vertex is assigned to a component so it is never visited again.
    let mut index = FxHashMap::default();
    let mut identified = FxHashSet::default();
    let mut stack = Vec::new();
    let mut boundaries = Vec::new();
    let mut tasks = Vec::new();

    for root in graph.vertices() {
        if index.contains_key(&graph.id_map(root)) {
            continue;
        }

        tasks.push(Task::Visit(root));

        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit(vertex) => {
                    let position = stack.len();
                    index.insert(graph.id_map(vertex), position);
                    stack.push(vertex);
                    boundaries.push(position);
                    tasks.push(Task::PostVisit(vertex));

                    // Edges are scheduled so that they are popped in the
                    // order of children.
                    let first = tasks.len();
                    tasks.extend(graph.children(vertex).into_iter().flatten().map(Task::Edge));
                    tasks[first..].reverse();
                }
                Task::Edge(vertex) => {
                    let key = graph.id_map(vertex);
                    match index.get(&key) {
                        None => tasks.push(Task::Visit(vertex)),
                        Some(&position) if !identified.contains(&key) => {
                            while boundaries.last().is_some_and(|&boundary| position < boundary) {
                                boundaries.pop();
                            }
                        }
                        Some(_) => {}
                    }
                }
                Task::PostVisit(vertex) => {
                    let Some(&position) = index.get(&graph.id_map(vertex)) else {
                        continue;
                    };

                    if boundaries.last() == Some(&position) {
                        boundaries.pop();

                        let component = stack.split_off(position);
                        identified.extend(component.iter().map(|&v| graph.id_map(v)));

                        tracing::trace!(size = component.len(), "component identified");
                        components.push(component);
                    }
                }
            }
        }
    }

    components
}
