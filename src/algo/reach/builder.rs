use crate::core::{error::GraphError, marker::Direction, Neighbors, VertexSet};

use super::{dfs::dfs, Reachable};

pub struct ReachableBuilder<'a, G> {
    graph: &'a G,
    dir: Direction,
    generations: Option<usize>,
}

impl<'a, G> Reachable<'a, G>
where
    G: VertexSet,
{
    /// Starts configuring the search on the given graph. Without further
    /// configuration, all descendants of the start vertex are found.
    pub fn on(graph: &'a G) -> ReachableBuilder<'a, G> {
        ReachableBuilder {
            graph,
            dir: Direction::Outgoing,
            generations: None,
        }
    }
}

impl<'a, G> ReachableBuilder<'a, G>
where
    G: VertexSet,
{
    /// Follows edges from tail to head.
    pub fn descendants(self) -> Self {
        self.direction(Direction::Outgoing)
    }

    /// Follows edges from head to tail.
    pub fn ancestors(self) -> Self {
        self.direction(Direction::Incoming)
    }

    pub fn direction(self, dir: Direction) -> Self {
        Self { dir, ..self }
    }

    /// Includes only vertices at most `generations` edges away from the start.
    pub fn generations(self, generations: usize) -> Self {
        self.generations_opt(Some(generations))
    }

    /// Like [`generations`](Self::generations), with `None` meaning no bound.
    pub fn generations_opt(self, generations: Option<usize>) -> Self {
        Self {
            generations,
            ..self
        }
    }

    /// Runs the search from `start`.
    ///
    /// Fails with [`GraphError::NotFound`] if `start` is not in the graph.
    pub fn run(self, start: &G::Vertex) -> Result<Reachable<'a, G>, GraphError>
    where
        G: Neighbors,
    {
        let visited = dfs(self.graph, start, self.dir, self.generations)?;

        Ok(Reachable {
            graph: self.graph,
            vertices: visited.order,
            keys: visited.keys,
        })
    }
}
