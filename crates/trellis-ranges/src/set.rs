//! [`IntervalSet`], a union of half-open `i64` spans.

use std::fmt;
use std::ops::Range;

/// A set of integers stored as half-open spans, never as members.
///
/// Spans are kept in insertion order and empty spans are dropped on insert.
/// Operations in this crate produce disjoint spans from disjoint input;
/// [`normalized`](IntervalSet::normalized) sorts and merges any set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalSet {
    spans: Vec<Range<i64>>,
}

impl IntervalSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding one span.
    pub fn single(span: Range<i64>) -> Self {
        let mut set = Self::new();
        set.push(span);
        set
    }

    /// One single-member span per value.
    ///
    /// `i64::MAX` has no half-open span and is skipped.
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
        values
            .into_iter()
            .filter_map(|v| Some(v..v.checked_add(1)?))
            .collect()
    }

    /// Append `span` unless it is empty.
    pub fn push(&mut self, span: Range<i64>) {
        if !span.is_empty() {
            self.spans.push(span);
        }
    }

    #[inline]
    pub fn spans(&self) -> &[Range<i64>] {
        &self.spans
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Range<i64>> {
        self.spans.iter()
    }

    /// Whether the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Number of members, assuming disjoint spans.
    pub fn count(&self) -> u128 {
        self.spans
            .iter()
            .map(|s| (i128::from(s.end) - i128::from(s.start)) as u128)
            .sum()
    }

    pub fn contains(&self, v: i64) -> bool {
        self.spans.iter().any(|s| s.contains(&v))
    }

    /// Smallest member: the least lower bound over all spans.
    pub fn min(&self) -> Option<i64> {
        self.spans.iter().map(|s| s.start).min()
    }

    /// Sorted, with overlapping and touching spans merged.
    pub fn normalized(&self) -> Self {
        let mut sorted = self.spans.clone();
        sorted.sort_by_key(|s| (s.start, s.end));
        let mut merged: Vec<Range<i64>> = Vec::with_capacity(sorted.len());
        for span in sorted {
            match merged.last_mut() {
                Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
                _ => merged.push(span),
            }
        }
        Self { spans: merged }
    }
}

impl FromIterator<Range<i64>> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Range<i64>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Range<i64>> for IntervalSet {
    fn extend<I: IntoIterator<Item = Range<i64>>>(&mut self, iter: I) {
        for span in iter {
            self.push(span);
        }
    }
}

impl IntoIterator for IntervalSet {
    type Item = Range<i64>;
    type IntoIter = std::vec::IntoIter<Range<i64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Range<i64>;
    type IntoIter = std::slice::Iter<'a, Range<i64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, s) in self.spans.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}, {})", s.start, s.end)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_spans_are_dropped() {
        let set: IntervalSet = [5..5, 1..3, 9..2].into_iter().collect();
        assert_eq!(set.spans(), &[1..3]);
        assert!(IntervalSet::single(4..4).is_empty());
    }

    #[test]
    fn count_min_contains() {
        let set: IntervalSet = [10..20, -5..0].into_iter().collect();
        assert_eq!(set.count(), 15);
        assert_eq!(set.min(), Some(-5));
        assert!(set.contains(-5));
        assert!(set.contains(19));
        assert!(!set.contains(20));
        assert!(!set.contains(0));
        assert_eq!(IntervalSet::new().min(), None);
    }

    #[test]
    fn count_spans_the_whole_i64_domain() {
        let set = IntervalSet::single(i64::MIN..i64::MAX);
        assert_eq!(set.count(), u64::MAX as u128);
    }

    #[test]
    fn from_values_is_one_span_each() {
        let set = IntervalSet::from_values([79, 14]);
        assert_eq!(set.spans(), &[79..80, 14..15]);
        assert_eq!(set.count(), 2);
        let edge = IntervalSet::from_values([i64::MIN, i64::MAX]);
        assert_eq!(edge.spans(), &[i64::MIN..i64::MIN + 1]);
    }

    #[test]
    fn normalized_merges_touching_and_overlapping() {
        let set: IntervalSet = [8..10, 0..3, 3..5, 2..4].into_iter().collect();
        assert_eq!(set.normalized().spans(), &[0..5, 8..10]);
        assert_eq!(set.to_string(), "{[8, 10), [0, 3), [3, 5), [2, 4)}");
    }
}
