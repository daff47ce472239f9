//! Exact translation of huge integer sets through chained offset tables.
//!
//! An [`IntervalSet`] stands for a union of half-open spans without ever
//! listing members, so sets of billions of values cost as much as the spans
//! describing them. An [`Interval`] moves the part of a set inside its domain
//! by a fixed offset; a [`TranslationStage`] applies a list of intervals with
//! identity fallback; a [`Pipeline`] chains stages.
//!
//! ```
//! use trellis_ranges::{Interval, IntervalSet, Pipeline, TranslationStage};
//!
//! let pipeline = Pipeline::new(vec![TranslationStage::new(
//!     "seed-to-soil",
//!     vec![Interval::new(98, 50, 2), Interval::new(50, 52, 48)],
//! )]);
//! let seeds = IntervalSet::single(79..93);
//! assert_eq!(pipeline.min_location(&seeds), Some(81));
//! ```

mod interval;
mod set;
mod stage;

pub use interval::Interval;
pub use set::IntervalSet;
pub use stage::{Pipeline, TranslationStage};
