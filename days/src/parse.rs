//! Shared input helpers.

use trellis_core::{BoundaryMode, Grid, Point};

use crate::error::ParseError;

/// Build a grid from text, one row per non-blank line, converting each
/// character with `tile`.
pub fn char_grid<T>(
    input: &str,
    mode: BoundaryMode,
    mut tile: impl FnMut(Point, char) -> Result<T, ParseError>,
) -> Result<Grid<T>, ParseError> {
    let mut rows = Vec::new();
    for (y, line) in input
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .enumerate()
    {
        let row = line
            .chars()
            .enumerate()
            .map(|(x, ch)| tile(Point::new(x as i32, y as i32), ch))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(Grid::from_rows(rows, mode)?)
}

/// Parse whitespace-separated integers, reporting `line` (1-based) on error.
pub fn numbers(line: usize, s: &str) -> Result<Vec<i64>, ParseError> {
    s.split_whitespace()
        .map(|token| {
            token.parse().map_err(|source| ParseError::Number {
                line,
                token: token.to_string(),
                source,
            })
        })
        .collect()
}
