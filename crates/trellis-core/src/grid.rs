//! The [`Grid`] type, a rectangular, row-major 2D container over any `T`.
//!
//! A grid is built once from its rows and never resized. How coordinates
//! outside the raw bounds are treated is decided by its [`BoundaryMode`]:
//! clamped grids report them as absent, wrapping grids reduce them modulo the
//! grid size so that every integer coordinate names a cell.
//!
//! Cells are owned by the grid. Callers wanting to mutate cells in place
//! store interior-mutable values (`Cell`, `RefCell`) and the grid reflects
//! those writes on the next read.

use std::ops::Index;

use crate::geom::Point;

/// How a [`Grid`] treats coordinates outside `[0, width) × [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryMode {
    /// Out-of-range coordinates are absent.
    #[default]
    Clamped,
    /// The grid tiles the plane; coordinates are taken modulo the size.
    Wrapping,
}

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A row's length differs from the first row's.
    #[error("grid: row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A dimension does not fit the `i32` coordinate space.
    #[error("grid: dimension {0} exceeds the coordinate range")]
    TooLarge(usize),
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular 2D grid of `T` in row-major order.
///
/// Invariant: `cells.len() == width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
    mode: BoundaryMode,
}

impl<T> Grid<T> {
    /// Build a grid from its rows.
    ///
    /// The width is the length of the first row (0 without rows) and the
    /// height is the number of rows. Ragged input is rejected with
    /// [`GridError::RaggedRow`] rather than padded or truncated.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>, mode: BoundaryMode) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for (y, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(row);
            let found = cells.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::RaggedRow {
                        row: y,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }
        let width = width.unwrap_or(0);
        let w = i32::try_from(width).map_err(|_| GridError::TooLarge(width))?;
        let h = i32::try_from(height).map_err(|_| GridError::TooLarge(height))?;
        log::trace!("grid: built {w}x{h} ({mode:?})");
        Ok(Self {
            cells,
            width: w,
            height: h,
            mode,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn boundary_mode(&self) -> BoundaryMode {
        self.mode
    }

    /// Same cells, different boundary mode.
    pub fn with_boundary_mode(self, mode: BoundaryMode) -> Self {
        Self { mode, ..self }
    }

    /// Whether the grid holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raw bounds check, independent of the boundary mode.
    ///
    /// Wrapping callers use this to tell "the same tile, one period over"
    /// apart from a tile of the original grid.
    #[inline]
    pub fn is_in_bounds(&self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Coordinates of the cell stored at flat index `i`.
    #[inline]
    fn point_at(&self, i: usize) -> Point {
        let w = self.width as usize;
        Point::new((i % w) as i32, (i / w) as i32)
    }

    /// Flat index of `p` after applying the boundary mode.
    fn index(&self, p: Point) -> Option<usize> {
        let p = match self.mode {
            BoundaryMode::Clamped => p,
            BoundaryMode::Wrapping => {
                if self.cells.is_empty() {
                    return None;
                }
                Point::new(p.x.rem_euclid(self.width), p.y.rem_euclid(self.height))
            }
        };
        if !self.is_in_bounds(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// The cell at `p`, or `None` when `p` is absent under the boundary mode.
    ///
    /// Wrapping grids return a cell for every coordinate unless empty.
    pub fn get(&self, p: Point) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// The cells of the four axis-aligned neighbours of `p` that exist and
    /// satisfy `keep`, in [`FOUR_WAY`](crate::FOUR_WAY) order (left, right, up, down).
    pub fn neighbors(&self, p: Point, keep: impl Fn(&T) -> bool) -> Vec<&T> {
        p.neighbors_4()
            .into_iter()
            .filter_map(|n| self.get(n))
            .filter(|cell| keep(*cell))
            .collect()
    }

    /// Like [`neighbors`](Grid::neighbors) but returns the neighbour
    /// coordinates, unreduced even in wrapping mode.
    pub fn neighbor_points(&self, p: Point, keep: impl Fn(&T) -> bool) -> Vec<Point> {
        p.neighbors_4()
            .into_iter()
            .filter(|&n| self.get(n).is_some_and(&keep))
            .collect()
    }

    /// Row-major slice of all cells.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// The rows of the grid, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        let w = self.width as usize;
        (0..self.height as usize).map(move |y| &self.cells[y * w..(y + 1) * w])
    }

    pub fn for_each_row(&self, f: impl FnMut(&[T])) {
        self.rows().for_each(f);
    }

    pub fn for_each_row_indexed(&self, mut f: impl FnMut(usize, &[T])) {
        self.rows().enumerate().for_each(|(y, row)| f(y, row));
    }

    pub fn map_rows<U>(&self, f: impl FnMut(&[T]) -> U) -> Vec<U> {
        self.rows().map(f).collect()
    }

    pub fn map_rows_indexed<U>(&self, mut f: impl FnMut(usize, &[T]) -> U) -> Vec<U> {
        self.rows().enumerate().map(|(y, row)| f(y, row)).collect()
    }

    /// Row-major iterator over `(Point, &T)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (self.point_at(i), cell))
    }

    /// Row-major iterator over every in-bounds coordinate.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        (0..self.cells.len()).map(|i| self.point_at(i))
    }

    /// Position of the first cell (row-major) satisfying `pred`.
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<Point> {
        self.iter().find(|(_, cell)| pred(cell)).map(|(p, _)| p)
    }

    /// A grid of the same shape and boundary mode with every cell mapped.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            width: self.width,
            height: self.height,
            mode: self.mode,
        }
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid of the given dimensions filled with `T::default()`.
    pub fn new(width: i32, height: i32, mode: BoundaryMode) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![T::default(); w as usize * h as usize],
            width: w,
            height: h,
            mode,
        }
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    /// # Panics
    ///
    /// In clamped mode, when `p` is outside the grid. In wrapping mode, only
    /// when the grid is empty.
    fn index(&self, p: Point) -> &T {
        match self.get(p) {
            Some(cell) => cell,
            None => panic!("grid: {p} is outside the {}x{} grid", self.width, self.height),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']], BoundaryMode::Wrapping).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
