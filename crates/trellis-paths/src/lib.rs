//! Best-first and breadth-first search over caller-defined location spaces.
//!
//! A location is any `Clone + Eq + Hash` value; the graph is whatever the
//! caller's neighbor function says it is. Searches keep their working state
//! local to one call, so nothing here needs to be shared between threads.
//!
//! - **A\*** shortest path to a goal predicate ([`astar_path`], [`astar`])
//! - **Dijkstra** cost maps and paths ([`dijkstra_map`], [`dijkstra`])
//! - **BFS** unweighted distance maps ([`bfs_map`], [`bfs`])
//!
//! [`manhattan`] is the usual admissible estimate for four-way moves on
//! [`trellis_core::Point`]s.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! The closure entry points wrap their arguments in an internal pather, so
//! callers only implement the traits when a named type reads better.

mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod search;
mod traits;

pub use astar::{astar, astar_path, path_cost};
pub use bfs::{bfs, bfs_map};
pub use dijkstra::{dijkstra, dijkstra_map};
pub use distance::manhattan;
pub use traits::{AstarPather, Cost, Location, Pather, WeightedPather};
