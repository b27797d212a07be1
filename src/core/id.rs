//! Identity maps from vertices to hashable keys.
//!
//! Algorithms never hash or compare vertices directly. Instead, every graph
//! owns an [`IdMap`] and vertices are stored in sets and maps through their
//! keys. This allows vertices that are neither hashable nor comparable, and
//! vertices whose natural equality differs from their identity in the graph.

use std::{fmt::Debug, hash::Hash};

use crate::storage::AnnotatedVertex;

/// Requirements on a key produced by an identity map.
pub trait KeyType: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> KeyType for T {}

/// A function from a vertex to a stable, hashable key.
///
/// The function must be deterministic and injective over the vertex set of
/// any graph it is used with.
pub trait IdMap<V: ?Sized> {
    type Key: KeyType;

    fn key_of(&self, vertex: &V) -> Self::Key;
}

/// The vertex is its own key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<V: KeyType> IdMap<V> for Identity {
    type Key = V;

    fn key_of(&self, vertex: &V) -> V {
        vertex.clone()
    }
}

/// Key given by an arbitrary function.
///
/// ```
/// use refgraph::core::id::{IdMap, KeyFn};
///
/// let by_len = KeyFn::new(|s: &String| s.len());
/// assert_eq!(by_len.key_of(&String::from("abc")), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeyFn<F>(F);

impl<F> KeyFn<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<V, K, F> IdMap<V> for KeyFn<F>
where
    K: KeyType,
    F: Fn(&V) -> K,
{
    type Key = K;

    fn key_of(&self, vertex: &V) -> K {
        (self.0)(vertex)
    }
}

/// Key of an annotated vertex is its id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ById;

impl<I: KeyType> IdMap<AnnotatedVertex<I>> for ById {
    type Key = I;

    fn key_of(&self, vertex: &AnnotatedVertex<I>) -> I {
        vertex.id.clone()
    }
}
