//! Chained interval translation: [`TranslationStage`] and [`Pipeline`].

use crate::interval::Interval;
use crate::set::IntervalSet;

/// A named list of [`Interval`]s applied as one translation step.
///
/// Values outside every domain pass through unchanged. Domains are expected
/// not to overlap; when they do, the interval listed first wins (see
/// [`overlapping_domains`](TranslationStage::overlapping_domains)).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranslationStage {
    name: String,
    intervals: Vec<Interval>,
}

impl TranslationStage {
    pub fn new(name: impl Into<String>, intervals: Vec<Interval>) -> Self {
        let stage = Self {
            name: name.into(),
            intervals,
        };
        if let Some((a, b)) = stage.overlapping_domains() {
            log::warn!("stage {}: domains of intervals {a} and {b} overlap", stage.name);
        }
        stage
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Translate one value through the first interval containing it.
    pub fn map_value(&self, v: i64) -> i64 {
        self.intervals
            .iter()
            .find(|iv| iv.contains(v))
            .map_or(v, |iv| iv.map_value(v))
    }

    /// Translate a whole set.
    ///
    /// Each interval in turn claims its share of what is still unmapped;
    /// whatever no interval claimed is appended unchanged.
    pub fn map_set(&self, set: &IntervalSet) -> IntervalSet {
        let mut mapped = IntervalSet::new();
        let mut unmapped = set.clone();
        for iv in &self.intervals {
            if unmapped.is_empty() {
                break;
            }
            let (inside, outside) = iv.partition(&unmapped);
            mapped.extend(iv.map_set(&inside));
            unmapped = outside;
        }
        mapped.extend(unmapped);
        log::trace!(
            "stage {}: {} spans in, {} spans out",
            self.name,
            set.spans().len(),
            mapped.spans().len()
        );
        mapped
    }

    /// The first pair of interval indices whose domains overlap, if any.
    pub fn overlapping_domains(&self) -> Option<(usize, usize)> {
        let mut order: Vec<usize> = (0..self.intervals.len())
            .filter(|&i| !self.intervals[i].domain().is_empty())
            .collect();
        order.sort_by_key(|&i| self.intervals[i].domain().start);
        order.windows(2).find_map(|w| {
            let (a, b) = (w[0], w[1]);
            let overlap = self.intervals[b].domain().start < self.intervals[a].domain().end;
            overlap.then_some((a.min(b), a.max(b)))
        })
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// An ordered chain of stages; the output of one feeds the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pipeline {
    stages: Vec<TranslationStage>,
}

impl Pipeline {
    pub fn new(stages: Vec<TranslationStage>) -> Self {
        Self { stages }
    }

    #[inline]
    pub fn stages(&self) -> &[TranslationStage] {
        &self.stages
    }

    pub fn map_value(&self, v: i64) -> i64 {
        self.stages.iter().fold(v, |v, stage| stage.map_value(v))
    }

    pub fn map_set(&self, set: &IntervalSet) -> IntervalSet {
        self.stages
            .iter()
            .fold(set.clone(), |set, stage| stage.map_set(&set))
    }

    /// Smallest value `set` maps to, or `None` for an empty set.
    pub fn min_location(&self, set: &IntervalSet) -> Option<i64> {
        self.map_set(set).min()
    }
}

impl FromIterator<TranslationStage> for Pipeline {
    fn from_iter<I: IntoIterator<Item = TranslationStage>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pipeline_round_trip() {
        let pipeline: Pipeline = [
            TranslationStage::new("a", vec![Interval::new(98, 50, 2)]),
            TranslationStage::new("b", vec![Interval::new(0, 10, 5), Interval::new(5, 0, 5)]),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&pipeline).unwrap();
        let back: Pipeline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pipeline);
        assert_eq!(back.map_value(99), 51);

        let set: IntervalSet = [0..3, 7..9].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(serde_json::from_str::<IntervalSet>(&json).unwrap(), set);
    }
}
