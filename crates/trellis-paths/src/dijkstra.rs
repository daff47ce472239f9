use std::collections::HashMap;

use crate::astar::astar_path;
use crate::search::SearchState;
use crate::traits::{Cost, FnPather, Location, WeightedPather};

/// Compute a multi-source Dijkstra cost map.
///
/// Every source starts at cost 0. Expansion stops when the cumulative
/// cost exceeds `max_cost`. Returns the cost of every location reached.
pub fn dijkstra_map<L, P>(
    pather: &P,
    sources: impl IntoIterator<Item = L>,
    max_cost: P::Cost,
) -> HashMap<L, P::Cost>
where
    L: Location,
    P: WeightedPather<L>,
{
    let zero = P::Cost::default();
    let mut state = SearchState::new();
    for src in sources {
        state.relax(src, zero, None, |_| zero);
    }

    let mut nbuf = Vec::new();
    while let Some(ci) = state.pop() {
        let current_g = state.nodes[ci].g;
        nbuf.clear();
        pather.neighbors(&state.nodes[ci].loc, &mut nbuf);

        for np in nbuf.drain(..) {
            let tentative = current_g + pather.cost(&state.nodes[ci].loc, &np);
            if tentative > max_cost {
                continue;
            }
            state.relax(np, tentative, Some(ci), |_| tentative);
        }
    }

    log::trace!("dijkstra: {} locations within reach", state.nodes.len());
    state.into_costs()
}

/// Cheapest path from `start` to a goal: [`astar`](crate::astar) with a
/// zero heuristic.
pub fn dijkstra<L, C, I>(
    start: L,
    is_goal: impl Fn(&L) -> bool,
    cost: impl Fn(&L, &L) -> C,
    neighborhood: impl Fn(&L) -> I,
) -> Option<Vec<L>>
where
    L: Location,
    C: Cost,
    I: IntoIterator<Item = L>,
{
    let pather =
        FnPather::<L, C, I, _, _, _, _>::new(is_goal, cost, neighborhood, |_: &L| C::default());
    astar_path(&pather, start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::path_cost;
    use crate::traits::Pather;
    use trellis_core::{BoundaryMode, Grid, Point};

    /// Digit grid where entering a cell costs its digit.
    struct Weights(Grid<u32>);

    impl Pather<Point> for Weights {
        fn neighbors(&self, p: &Point, buf: &mut Vec<Point>) {
            buf.extend(self.0.neighbor_points(*p, |_| true));
        }
    }

    impl WeightedPather<Point> for Weights {
        type Cost = u32;

        fn cost(&self, _from: &Point, to: &Point) -> u32 {
            self.0[*to]
        }
    }

    fn weights() -> Weights {
        let rows = ["131", "191", "111"];
        Weights(
            Grid::from_rows(
                rows.iter().map(|r| r.chars().filter_map(|c| c.to_digit(10))),
                BoundaryMode::Clamped,
            )
            .unwrap(),
        )
    }

    #[test]
    fn cost_map_from_corner() {
        let w = weights();
        let costs = dijkstra_map(&w, [Point::ZERO], u32::MAX);
        assert_eq!(costs.len(), 9);
        assert_eq!(costs[&Point::ZERO], 0);
        assert_eq!(costs[&Point::new(1, 0)], 3);
        assert_eq!(costs[&Point::new(2, 0)], 4);
        assert_eq!(costs[&Point::new(0, 2)], 2);
        assert_eq!(costs[&Point::new(2, 2)], 4);
        assert_eq!(costs[&Point::new(1, 1)], 10);
    }

    #[test]
    fn cost_map_respects_max_cost() {
        let w = weights();
        let costs = dijkstra_map(&w, [Point::ZERO], 2);
        let mut reached: Vec<Point> = costs.keys().copied().collect();
        reached.sort();
        assert_eq!(reached, vec![Point::ZERO, Point::new(0, 1), Point::new(0, 2)]);
    }

    #[test]
    fn multi_source() {
        let w = weights();
        let costs = dijkstra_map(&w, [Point::ZERO, Point::new(2, 2)], u32::MAX);
        assert_eq!(costs[&Point::new(2, 2)], 0);
        assert_eq!(costs[&Point::new(2, 0)], 2);
    }

    #[test]
    fn dijkstra_path_avoids_expensive_cells() {
        let w = weights();
        let path = dijkstra(
            Point::ZERO,
            |&p| p == Point::new(2, 0),
            |a, b| w.cost(a, b),
            |&p| w.0.neighbor_points(p, |_| true),
        )
        .unwrap();
        assert_eq!(path_cost(&path, |a, b| w.cost(a, b)), 4);
        assert!(!path.contains(&Point::new(1, 1)));
    }
}
