//! **trellis-core**: geometry primitives and a generic 2D grid.
//!
//! [`Grid`] stores any cell type in row-major order and answers coordinate
//! and neighbour queries under a [`BoundaryMode`]: clamped grids end at their
//! edges, wrapping grids tile the plane.

pub mod geom;
pub mod grid;

pub use geom::{FOUR_WAY, Point};
pub use grid::{BoundaryMode, Grid, GridError};
