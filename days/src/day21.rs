//! Day 21: counting garden plots reachable in an exact number of steps.
//!
//! A plot reachable in `d` steps is reachable in `d + 2`, `d + 4`, ... by
//! stepping back and forth, so the answer is every plot whose BFS distance is
//! at most `steps` and has the same parity. The infinite garden is the same
//! grid in [`BoundaryMode::Wrapping`].

use trellis_core::{BoundaryMode, Grid, Point};
use trellis_paths::bfs;

use crate::error::ParseError;
use crate::parse::char_grid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tile {
    #[default]
    Plot,
    Rock,
}

#[derive(Debug, Clone)]
pub struct Garden {
    pub grid: Grid<Tile>,
    pub start: Point,
}

impl Garden {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut start = None;
        let grid = char_grid(input, BoundaryMode::Clamped, |pos, ch| match ch {
            '.' => Ok(Tile::Plot),
            '#' => Ok(Tile::Rock),
            'S' => {
                start = Some(pos);
                Ok(Tile::Plot)
            }
            ch => Err(ParseError::Tile { ch, pos }),
        })?;
        let start = start.ok_or(ParseError::NoStart)?;
        Ok(Self { grid, start })
    }

    /// The same garden repeated in every direction.
    pub fn tiled(self) -> Self {
        Self {
            grid: self.grid.with_boundary_mode(BoundaryMode::Wrapping),
            start: self.start,
        }
    }

    /// Plots the elf can stand on after exactly `steps` steps.
    pub fn reachable(&self, steps: usize) -> usize {
        let dist = bfs(
            [self.start],
            |&p| self.grid.neighbor_points(p, |&t| t == Tile::Plot),
            steps,
        );
        dist.values().filter(|&&d| d % 2 == steps % 2).count()
    }

    /// Whether the tiled garden grows as a quadratic in whole grid widths:
    /// a square grid, the start in its centre and a rock-free row and column
    /// through the start.
    pub fn grows_quadratically(&self) -> bool {
        let size = self.grid.size();
        let axis_clear = (0..size.x).all(|x| self.grid[Point::new(x, self.start.y)] == Tile::Plot)
            && (0..size.y).all(|y| self.grid[Point::new(self.start.x, y)] == Tile::Plot);
        size.x == size.y && self.start == Point::new(size.x / 2, size.y / 2) && axis_clear
    }

    /// Plots reachable on the tiled garden after `steps` steps.
    ///
    /// Uses [`extrapolated`](Garden::extrapolated) when it applies and runs
    /// the search directly otherwise.
    pub fn reachable_tiled(&self, steps: usize) -> u64 {
        self.extrapolated(steps)
            .unwrap_or_else(|| self.clone().tiled().reachable(steps) as u64)
    }

    /// Plots reachable on the tiled garden, fitted to a quadratic in whole
    /// grid widths instead of searched step by step.
    ///
    /// With `steps = n * width + rem`, the garden is sampled at
    /// `rem + k * width` for `k` in `1..=4`. The first sample already has the
    /// diamond past the edge of the centre tile; the fourth must land on the
    /// parabola through the other three. `None` when the garden does not
    /// [`grow quadratically`](Garden::grows_quadratically), when `steps` is
    /// within the sampled range, or when the samples disagree.
    pub fn extrapolated(&self, steps: usize) -> Option<u64> {
        let width = self.grid.width() as usize;
        if width == 0 || steps / width < 5 || !self.grows_quadratically() {
            return None;
        }
        let (n, rem) = (steps / width, steps % width);
        let tiled = self.clone().tiled();
        let [a, b, c, d] = [1, 2, 3, 4].map(|k| tiled.reachable(rem + k * width) as i64);
        if d - 3 * c + 3 * b - a != 0 {
            log::warn!("garden: samples {a}, {b}, {c}, {d} are not quadratic, searching instead");
            return None;
        }
        log::debug!("garden: extrapolating {steps} steps from samples {a}, {b}, {c}");
        let m = i64::try_from(n).ok()? - 1;
        let total = a + m * (b - a) + m * (m - 1) / 2 * (c - 2 * b + a);
        u64::try_from(total).ok()
    }
}

pub fn part1(input: &str, steps: usize) -> Result<usize, ParseError> {
    Ok(Garden::parse(input)?.reachable(steps))
}

pub fn part2(input: &str, steps: usize) -> Result<u64, ParseError> {
    Ok(Garden::parse(input)?.reachable_tiled(steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const EXAMPLE: &str = indoc::indoc! { "
        ...........
        .....###.#.
        .###.##..#.
        ..#.#...#..
        ....#.#....
        .##..S####.
        .##..#...#.
        .......##..
        .##.#.####.
        .##..##.##.
        ...........
    " };

    const OPEN: &str = indoc::indoc! { "
        .....
        .....
        ..S..
        .....
        .....
    " };

    #[test]
    fn parses_start() {
        let garden = Garden::parse(EXAMPLE).unwrap();
        assert_eq!(garden.start, Point::new(5, 5));
        assert_eq!(garden.grid.size(), Point::new(11, 11));
        assert_eq!(garden.grid[Point::new(5, 1)], Tile::Rock);
        assert!(!garden.grows_quadratically());
    }

    #[test_case(1 => 2)]
    #[test_case(2 => 4)]
    #[test_case(3 => 6)]
    #[test_case(6 => 16)]
    fn bounded_garden(steps: usize) -> usize {
        part1(EXAMPLE, steps).unwrap()
    }

    #[test_case(6 => 16)]
    #[test_case(10 => 50)]
    #[test_case(50 => 1594)]
    #[test_case(100 => 6536)]
    fn tiled_garden(steps: usize) -> u64 {
        part2(EXAMPLE, steps).unwrap()
    }

    #[test]
    fn bounded_garden_stops_at_the_edge() {
        // After enough steps every plot of matching parity is reachable.
        let garden = Garden::parse(OPEN).unwrap();
        assert_eq!(garden.reachable(40), 13);
        assert_eq!(garden.reachable(41), 12);
    }

    #[test_case(17 => 324; "searched directly below five widths")]
    #[test_case(1000 => 1_002_001; "far out")]
    fn open_tiled_garden_is_a_diamond(steps: usize) -> u64 {
        let garden = Garden::parse(OPEN).unwrap();
        assert!(garden.grows_quadratically());
        garden.reachable_tiled(steps)
    }

    #[test]
    fn extrapolation_matches_search() {
        let garden = Garden::parse(OPEN).unwrap();
        let tiled = garden.clone().tiled();
        assert_eq!(garden.extrapolated(22), None);
        for steps in [25, 29, 33] {
            assert!(garden.extrapolated(steps).is_some());
            assert_eq!(garden.reachable_tiled(steps), tiled.reachable(steps) as u64);
        }
    }

    const ROCKY_7: &str = indoc::indoc! { "
        .#.....
        ..#..#.
        #....#.
        ...S...
        .#...#.
        ..#...#
        .......
    " };

    const ROCKY_9: &str = indoc::indoc! { "
        .........
        .##...#..
        .#....##.
        ...#.....
        ....S....
        ..#...#..
        .#.....#.
        ..##.....
        .........
    " };

    #[test_case(ROCKY_7; "seven wide")]
    #[test_case(ROCKY_9; "nine wide")]
    fn rocky_gardens_agree_for_every_remainder(input: &str) {
        let garden = Garden::parse(input).unwrap();
        assert!(garden.grows_quadratically());
        let width = garden.grid.width() as usize;
        let tiled = garden.clone().tiled();
        for steps in 5 * width..6 * width {
            assert_eq!(
                garden.reachable_tiled(steps),
                tiled.reachable(steps) as u64,
                "{steps} steps ({} past a whole width)",
                steps % width
            );
        }
    }

    #[test]
    fn rejects_bad_gardens() {
        assert!(matches!(Garden::parse("..\n.."), Err(ParseError::NoStart)));
        assert!(matches!(
            Garden::parse(".S\n.?"),
            Err(ParseError::Tile { ch: '?', .. })
        ));
    }
}
