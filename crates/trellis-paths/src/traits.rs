use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Add;

/// Path cost. `Default` is taken as zero.
///
/// Implemented for every integer type; edge costs must be non-negative for
/// the searches to return optimal paths.
pub trait Cost: Copy + Ord + Add<Output = Self> + Default {}

impl<T: Copy + Ord + Add<Output = T> + Default> Cost for T {}

/// A search-graph vertex: anything comparable and hashable.
pub trait Location: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Location for T {}

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather<L> {
    /// Append neighbors of `loc` into `buf`. The caller clears `buf` before calling.
    ///
    /// Duplicates are allowed.
    fn neighbors(&self, loc: &L, buf: &mut Vec<L>);
}

/// Pather with weighted (non-negative cost) edges.
pub trait WeightedPather<L>: Pather<L> {
    type Cost: Cost;

    /// Cost of moving from `from` to its neighbor `to`.
    fn cost(&self, from: &L, to: &L) -> Self::Cost;
}

/// Full A* pather: a goal predicate and an admissible heuristic.
pub trait AstarPather<L>: WeightedPather<L> {
    /// Whether `loc` ends the search.
    fn is_goal(&self, loc: &L) -> bool;

    /// Estimate of the remaining cost from `loc` to the nearest goal.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, loc: &L) -> Self::Cost;
}

// ---------------------------------------------------------------------------
// Closure adapter
// ---------------------------------------------------------------------------

/// Bundles caller closures into a pather.
///
/// Unused roles are filled with `()`; a role only has to be a closure when
/// the search asks for the matching trait.
pub(crate) struct FnPather<L, K, I, G, C, N, H> {
    pub(crate) is_goal: G,
    pub(crate) cost: C,
    pub(crate) neighborhood: N,
    pub(crate) heuristic: H,
    _marker: PhantomData<fn(&L) -> (K, I)>,
}

impl<L, K, I, G, C, N, H> FnPather<L, K, I, G, C, N, H> {
    pub(crate) fn new(is_goal: G, cost: C, neighborhood: N, heuristic: H) -> Self {
        Self {
            is_goal,
            cost,
            neighborhood,
            heuristic,
            _marker: PhantomData,
        }
    }
}

impl<L, K, I, G, C, N, H> Pather<L> for FnPather<L, K, I, G, C, N, H>
where
    N: Fn(&L) -> I,
    I: IntoIterator<Item = L>,
{
    fn neighbors(&self, loc: &L, buf: &mut Vec<L>) {
        buf.extend((self.neighborhood)(loc));
    }
}

impl<L, K, I, G, C, N, H> WeightedPather<L> for FnPather<L, K, I, G, C, N, H>
where
    N: Fn(&L) -> I,
    I: IntoIterator<Item = L>,
    C: Fn(&L, &L) -> K,
    K: Cost,
{
    type Cost = K;

    fn cost(&self, from: &L, to: &L) -> K {
        (self.cost)(from, to)
    }
}

impl<L, K, I, G, C, N, H> AstarPather<L> for FnPather<L, K, I, G, C, N, H>
where
    N: Fn(&L) -> I,
    I: IntoIterator<Item = L>,
    C: Fn(&L, &L) -> K,
    K: Cost,
    G: Fn(&L) -> bool,
    H: Fn(&L) -> K,
{
    fn is_goal(&self, loc: &L) -> bool {
        (self.is_goal)(loc)
    }

    fn estimate(&self, loc: &L) -> K {
        (self.heuristic)(loc)
    }
}
