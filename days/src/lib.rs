//! Puzzle solvers built on `trellis-core`, `trellis-paths` and
//! `trellis-ranges`.
//!
//! Each `dayNN` module parses its own input and exposes `part1`/`part2`.

pub mod day05;
pub mod day17;
pub mod day21;
mod error;
pub mod parse;

pub use error::ParseError;
