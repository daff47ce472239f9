use crate::search::SearchState;
use crate::traits::{AstarPather, Cost, FnPather, Location};

/// Compute a minimum-cost path from `start` to the first location that
/// satisfies [`AstarPather::is_goal`], using A*.
///
/// Returns the full path (including both endpoints) or `None` if every
/// reachable location was expanded without meeting a goal.
///
/// The goal test happens when a location is popped, not when it is pushed,
/// so a goal reached through an expensive edge does not win over a cheaper
/// route still in the open set. Edge costs must be non-negative and the
/// estimate admissible for the result to be optimal; zero-cost cycles under
/// an inconsistent estimate may not terminate.
pub fn astar_path<L, P>(pather: &P, start: L) -> Option<Vec<L>>
where
    L: Location,
    P: AstarPather<L>,
{
    let mut state = SearchState::new();
    state.relax(start, P::Cost::default(), None, |loc| pather.estimate(loc));

    let mut nbuf = Vec::new();
    let mut expanded = 0usize;

    while let Some(ci) = state.pop() {
        if pather.is_goal(&state.nodes[ci].loc) {
            let path = state.path(ci);
            log::debug!(
                "astar: goal reached after {expanded} expansions ({} stale pops), {} steps",
                state.stale,
                path.len() - 1
            );
            return Some(path);
        }
        expanded += 1;

        let current_g = state.nodes[ci].g;
        nbuf.clear();
        pather.neighbors(&state.nodes[ci].loc, &mut nbuf);

        for np in nbuf.drain(..) {
            let tentative_g = current_g + pather.cost(&state.nodes[ci].loc, &np);
            state.relax(np, tentative_g, Some(ci), |loc| {
                tentative_g + pather.estimate(loc)
            });
        }
    }

    log::debug!("astar: open set exhausted after {expanded} expansions");
    None
}

/// A* over closures: the single-call form of [`astar_path`].
///
/// - `is_goal` ends the search at the first popped location it accepts;
/// - `cost(from, to)` weighs an edge (non-negative);
/// - `neighborhood(loc)` lists candidate successors, duplicates allowed;
/// - `heuristic(loc)` estimates the remaining cost and must not overestimate.
///
/// ```
/// use trellis_paths::astar;
///
/// // Walk the number line from 0 to 7 in steps of 1 or 3.
/// let path = astar(
///     0i32,
///     |&n| n == 7,
///     |_, _| 1u32,
///     |&n| [n + 1, n + 3],
///     |&n| ((7 - n).max(0) as u32).div_ceil(3),
/// )
/// .unwrap();
/// assert_eq!(path.len() - 1, 3);
/// ```
pub fn astar<L, C, I>(
    start: L,
    is_goal: impl Fn(&L) -> bool,
    cost: impl Fn(&L, &L) -> C,
    neighborhood: impl Fn(&L) -> I,
    heuristic: impl Fn(&L) -> C,
) -> Option<Vec<L>>
where
    L: Location,
    C: Cost,
    I: IntoIterator<Item = L>,
{
    let pather = FnPather::<L, C, I, _, _, _, _>::new(is_goal, cost, neighborhood, heuristic);
    astar_path(&pather, start)
}

/// Sum of `cost` over consecutive pairs of `path`.
///
/// Zero for paths with fewer than two locations.
pub fn path_cost<L, C: Cost>(path: &[L], cost: impl Fn(&L, &L) -> C) -> C {
    path.windows(2)
        .fold(C::default(), |acc, step| acc + cost(&step[0], &step[1]))
}
