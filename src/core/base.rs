/// An edge of a graph together with its endpoints.
#[derive(Debug)]
pub struct EdgeRef<'a, V, E> {
    /// Position of the edge in the insertion order of its graph.
    pub index: usize,
    pub tail: &'a V,
    pub head: &'a V,
    pub attr: &'a E,
}

impl<V, E> Clone for EdgeRef<'_, V, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, E> Copy for EdgeRef<'_, V, E> {}
