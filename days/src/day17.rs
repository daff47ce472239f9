//! Day 17: steering a crucible across a heat-loss grid.
//!
//! The search state is the crucible, not the cell: position, heading and how
//! many blocks it has gone straight. A* runs over that composite location.

use trellis_core::{BoundaryMode, FOUR_WAY, Grid, Point};
use trellis_paths::{astar, manhattan, path_cost};

use crate::error::ParseError;
use crate::parse::char_grid;

/// How far a crucible may and must travel before turning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub min_run: u8,
    pub max_run: u8,
}

impl Rules {
    pub const ORDINARY: Self = Self { min_run: 1, max_run: 3 };
    pub const ULTRA: Self = Self { min_run: 4, max_run: 10 };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crucible {
    pub pos: Point,
    /// [`Point::ZERO`] before the first move.
    pub dir: Point,
    pub run: u8,
}

impl Crucible {
    fn moves(self, rules: Rules) -> impl Iterator<Item = Crucible> {
        FOUR_WAY.into_iter().filter_map(move |d| {
            if d == -self.dir {
                return None;
            }
            let run = if d == self.dir {
                (self.run < rules.max_run).then_some(self.run + 1)?
            } else if self.dir != Point::ZERO && self.run < rules.min_run {
                return None;
            } else {
                1
            };
            Some(Crucible {
                pos: self.pos + d,
                dir: d,
                run,
            })
        })
    }
}

pub fn parse(input: &str) -> Result<Grid<u32>, ParseError> {
    char_grid(input, BoundaryMode::Clamped, |pos, ch| {
        ch.to_digit(10).ok_or(ParseError::Tile { ch, pos })
    })
}

/// Cheapest route from the top-left to the bottom-right cell.
pub fn route(grid: &Grid<u32>, rules: Rules) -> Option<Vec<Crucible>> {
    let end = grid.size() - Point::new(1, 1);
    let cheapest = grid.cells().iter().copied().min().unwrap_or(0);
    let start = Crucible {
        pos: Point::ZERO,
        dir: Point::ZERO,
        run: 0,
    };
    astar(
        start,
        |c| c.pos == end && (c.run >= rules.min_run || c.dir == Point::ZERO),
        |_, to| grid[to.pos],
        |c| c.moves(rules).filter(move |next| grid.is_in_bounds(next.pos)),
        |c| manhattan(c.pos, end) as u32 * cheapest,
    )
}

/// Heat lost along the cheapest route, or `None` when no route obeys `rules`.
pub fn min_heat_loss(grid: &Grid<u32>, rules: Rules) -> Option<u32> {
    let path = route(grid, rules)?;
    Some(path_cost(&path, |_, to| grid[to.pos]))
}

pub fn part1(input: &str) -> Result<Option<u32>, ParseError> {
    Ok(min_heat_loss(&parse(input)?, Rules::ORDINARY))
}

pub fn part2(input: &str) -> Result<Option<u32>, ParseError> {
    Ok(min_heat_loss(&parse(input)?, Rules::ULTRA))
}
