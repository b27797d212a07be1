//! Set algebra on graphs sharing an identity map.
//!
//! Both operations return a complete subgraph of the left operand, so edges of
//! the right operand never appear in the result. Operands are matched by key
//! only, which is meaningful only when both graphs use the same identity map.

use rustc_hash::FxHashSet;

use crate::core::{Subgraph, VertexSet};

pub fn difference<G, H>(lhs: &G, rhs: &H) -> G
where
    G: Subgraph,
    H: VertexSet<Key = G::Key>,
{
    filter_by_membership(lhs, rhs, false)
}

pub fn intersection<G, H>(lhs: &G, rhs: &H) -> G
where
    G: Subgraph,
    H: VertexSet<Key = G::Key>,
{
    filter_by_membership(lhs, rhs, true)
}

fn filter_by_membership<G, H>(lhs: &G, rhs: &H, keep_members: bool) -> G
where
    G: Subgraph,
    H: VertexSet<Key = G::Key>,
{
    let members = rhs
        .vertices()
        .map(|vertex| rhs.id_map(vertex))
        .collect::<FxHashSet<_>>();

    lhs.complete_subgraph_on_vertices(
        lhs.vertices()
            .filter(|vertex| members.contains(&lhs.id_map(vertex)) == keep_members),
    )
}

/// Implements `&a - &b` and `&a & &b` for a concrete graph type in terms of
/// [`difference`] and [`intersection`].
macro_rules! impl_set_ops {
    ([$($params:tt)*] $ty:ty where [$($bounds:tt)*]) => {
        impl<'g, $($params)*> ::std::ops::Sub<&'g $ty> for &'g $ty
        where
            $($bounds)*
        {
            type Output = $ty;

            fn sub(self, rhs: &'g $ty) -> $ty {
                $crate::ops::difference(self, rhs)
            }
        }

        impl<'g, $($params)*> ::std::ops::BitAnd<&'g $ty> for &'g $ty
        where
            $($bounds)*
        {
            type Output = $ty;

            fn bitand(self, rhs: &'g $ty) -> $ty {
                $crate::ops::intersection(self, rhs)
            }
        }
    };
}

pub(crate) use impl_set_ops;
