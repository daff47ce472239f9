use std::collections::{HashMap, VecDeque};

use crate::traits::{FnPather, Location, Pather};

/// Compute a multi-source breadth-first search distance map.
///
/// Each step has cost 1. Expansion stops when the distance exceeds
/// `max_dist`. Returns the distance of every location reached.
pub fn bfs_map<L, P>(
    pather: &P,
    sources: impl IntoIterator<Item = L>,
    max_dist: usize,
) -> HashMap<L, usize>
where
    L: Location,
    P: Pather<L>,
{
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();

    for src in sources {
        if dist.contains_key(&src) {
            continue;
        }
        dist.insert(src.clone(), 0);
        queue.push_back((src, 0));
    }

    let mut nbuf = Vec::new();

    while let Some((current, d)) = queue.pop_front() {
        if d == max_dist {
            continue;
        }
        nbuf.clear();
        pather.neighbors(&current, &mut nbuf);

        for np in nbuf.drain(..) {
            if dist.contains_key(&np) {
                continue;
            }
            dist.insert(np.clone(), d + 1);
            queue.push_back((np, d + 1));
        }
    }

    log::trace!("bfs: {} locations within {max_dist} steps", dist.len());
    dist
}

/// [`bfs_map`] over a neighborhood closure.
pub fn bfs<L, I>(
    sources: impl IntoIterator<Item = L>,
    neighborhood: impl Fn(&L) -> I,
    max_dist: usize,
) -> HashMap<L, usize>
where
    L: Location,
    I: IntoIterator<Item = L>,
{
    let pather = FnPather::<L, (), I, (), (), _, ()>::new((), (), neighborhood, ());
    bfs_map(&pather, sources, max_dist)
}
