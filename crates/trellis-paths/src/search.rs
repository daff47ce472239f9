use std::collections::{BinaryHeap, HashMap};

use crate::traits::{Cost, Location};

// ---------------------------------------------------------------------------
// Internal node for A*/Dijkstra priority-queue searches
// ---------------------------------------------------------------------------

/// Best known route to one location.
///
/// A location without a node has an infinite `g`.
pub(crate) struct Node<L, C> {
    pub(crate) loc: L,
    pub(crate) g: C,
    pub(crate) f: C,
    pub(crate) parent: Option<usize>,
}

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
///
/// Equal `f` values pop in push order.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef<C> {
    pub(crate) idx: usize,
    pub(crate) f: C,
    seq: u64,
}

impl<C: Ord> Ord for NodeRef<C> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl<C: Ord> PartialOrd for NodeRef<C> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Working state of one best-first search. Created per call, never reused.
///
/// The arena stands in for the `came_from`, `g_score` and `f_score` maps;
/// the heap holds lazily deleted entries, so a location may be queued more
/// than once and only the entry matching its current `f` is live.
pub(crate) struct SearchState<L, C> {
    slots: HashMap<L, usize>,
    pub(crate) nodes: Vec<Node<L, C>>,
    open: BinaryHeap<NodeRef<C>>,
    seq: u64,
    pub(crate) stale: usize,
}

impl<L: Location, C: Cost> SearchState<L, C> {
    pub(crate) fn new() -> Self {
        Self {
            slots: HashMap::new(),
            nodes: Vec::new(),
            open: BinaryHeap::new(),
            seq: 0,
            stale: 0,
        }
    }

    /// Record `g` for `loc` if it beats the best known cost, and queue it
    /// with priority `f(loc)`. `f` is only evaluated on improvement.
    ///
    /// Returns whether the location was improved.
    pub(crate) fn relax(
        &mut self,
        loc: L,
        g: C,
        parent: Option<usize>,
        f: impl FnOnce(&L) -> C,
    ) -> bool {
        let (idx, f) = match self.slots.get(&loc) {
            Some(&idx) => {
                let node = &mut self.nodes[idx];
                if g >= node.g {
                    return false;
                }
                let f = f(&node.loc);
                node.g = g;
                node.f = f;
                node.parent = parent;
                (idx, f)
            }
            None => {
                let idx = self.nodes.len();
                let f = f(&loc);
                self.slots.insert(loc.clone(), idx);
                self.nodes.push(Node { loc, g, f, parent });
                (idx, f)
            }
        };
        self.open.push(NodeRef { idx, f, seq: self.seq });
        self.seq += 1;
        true
    }

    /// Pop the live open entry with the smallest `f`, skipping stale ones.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(current) = self.open.pop() {
            if current.f == self.nodes[current.idx].f {
                return Some(current.idx);
            }
            self.stale += 1;
        }
        None
    }

    /// Walk `parent` links back from `idx` and return the path start-first.
    pub(crate) fn path(&self, idx: usize) -> Vec<L> {
        let mut path = Vec::new();
        let mut cur = Some(idx);
        while let Some(ci) = cur {
            path.push(self.nodes[ci].loc.clone());
            cur = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }

    /// Consume the state into the best known cost of every location reached.
    pub(crate) fn into_costs(self) -> HashMap<L, C> {
        self.nodes.into_iter().map(|n| (n.loc, n.g)).collect()
    }
}
