//! Day 5: seeds pushed through a chain of almanac maps.
//!
//! Every `name map:` block becomes a [`TranslationStage`]; part 2 reads the
//! seed line as `(start, len)` pairs and maps whole ranges at once.

use std::ops::Range;
use std::str::FromStr;

use rayon::prelude::*;
use trellis_ranges::{Interval, IntervalSet, Pipeline, TranslationStage};

use crate::error::ParseError;
use crate::parse::numbers;

#[derive(Debug, Clone)]
pub struct Almanac {
    pub seeds: Vec<i64>,
    pub pipeline: Pipeline,
    seeds_line: usize,
}

impl Almanac {
    /// The seed line read as `(start, len)` pairs.
    pub fn seed_ranges(&self) -> Result<Vec<Range<i64>>, ParseError> {
        if self.seeds.len() % 2 != 0 {
            return Err(ParseError::OddSeedCount(self.seeds.len()));
        }
        self.seeds
            .chunks_exact(2)
            .map(|pair| {
                let end = pair[0].checked_add(pair[1]);
                end.map(|end| pair[0]..end).ok_or(ParseError::Overflow {
                    line: self.seeds_line,
                    what: "seed range",
                })
            })
            .collect()
    }
}

impl FromStr for Almanac {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

        let (line, first) = lines
            .by_ref()
            .find(|(_, l)| !l.is_empty())
            .ok_or(ParseError::Empty)?;
        let seeds = first
            .strip_prefix("seeds:")
            .ok_or_else(|| ParseError::Unexpected {
                line,
                expected: "\"seeds:\"",
                found: first.to_string(),
            })?;
        let seeds_line = line;
        let seeds = numbers(line, seeds)?;

        let mut stages = Vec::new();
        let mut current: Option<(String, Vec<Interval>)> = None;
        for (line, text) in lines {
            if text.is_empty() {
                continue;
            }
            if let Some(name) = text.strip_suffix("map:") {
                if let Some((name, intervals)) = current.take() {
                    stages.push(TranslationStage::new(name, intervals));
                }
                current = Some((name.trim().to_string(), Vec::new()));
                continue;
            }
            let Some((_, intervals)) = current.as_mut() else {
                return Err(ParseError::Unexpected {
                    line,
                    expected: "a map header",
                    found: text.to_string(),
                });
            };
            match numbers(line, text)?[..] {
                [destination, source, len] => {
                    let interval = Interval::checked(source, destination, len)
                        .ok_or(ParseError::Overflow { line, what: "map entry" })?;
                    intervals.push(interval);
                }
                _ => {
                    return Err(ParseError::Unexpected {
                        line,
                        expected: "\"destination source length\"",
                        found: text.to_string(),
                    });
                }
            }
        }
        if let Some((name, intervals)) = current {
            stages.push(TranslationStage::new(name, intervals));
        }

        log::debug!("almanac: {} seeds, {} stages", seeds.len(), stages.len());
        Ok(Self {
            seeds,
            pipeline: Pipeline::new(stages),
            seeds_line,
        })
    }
}

/// Lowest location of any single seed.
pub fn part1(input: &str) -> Result<Option<i64>, ParseError> {
    let almanac: Almanac = input.parse()?;
    Ok(almanac
        .seeds
        .iter()
        .map(|&seed| almanac.pipeline.map_value(seed))
        .min())
}

/// Lowest location of any seed in the seed ranges.
///
/// Ranges are independent, so each is mapped on its own rayon task.
pub fn part2(input: &str) -> Result<Option<i64>, ParseError> {
    let almanac: Almanac = input.parse()?;
    let ranges = almanac.seed_ranges()?;
    Ok(ranges
        .into_par_iter()
        .filter_map(|range| almanac.pipeline.min_location(&IntervalSet::single(range)))
        .min())
}
