use trellis_core::{GridError, Point};

/// Errors raised while reading puzzle input.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("line {line}: expected {expected}, found {found:?}")]
    Unexpected {
        line: usize,
        expected: &'static str,
        found: String,
    },
    #[error("line {line}: invalid number {token:?}")]
    Number {
        line: usize,
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("line {line}: {what} overflows the 64-bit range")]
    Overflow { line: usize, what: &'static str },
    #[error("seed ranges need an even number of values, found {0}")]
    OddSeedCount(usize),
    #[error("invalid tile {ch:?} at {pos}")]
    Tile { ch: char, pos: Point },
    #[error("no start tile")]
    NoStart,
    #[error(transparent)]
    Grid(#[from] GridError),
}
