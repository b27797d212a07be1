use crate::core::{GraphBase, Neighbors, VertexSet};

use super::{gabow::gabow, StronglyConnectedComponents};

pub struct StronglyConnectedComponentsBuilder<'a, G> {
    graph: &'a G,
}

impl<'a, G> StronglyConnectedComponents<'a, G>
where
    G: GraphBase,
{
    pub fn on(graph: &'a G) -> StronglyConnectedComponentsBuilder<'a, G> {
        StronglyConnectedComponentsBuilder { graph }
    }
}

impl<'a, G> StronglyConnectedComponentsBuilder<'a, G>
where
    G: GraphBase,
{
    pub fn run(self) -> StronglyConnectedComponents<'a, G>
    where
        G: Neighbors + VertexSet,
    {
        let components = gabow(self.graph);

        tracing::debug!(
            vertices = self.graph.vertex_count(),
            components = components.len(),
            "strongly connected components found"
        );

        StronglyConnectedComponents {
            graph: self.graph,
            components,
        }
    }
}
