//! [`Interval`] is one translation window, a source domain and an offset.

use std::ops::Range;

use crate::set::IntervalSet;

/// Maps the half-open domain `[start, start + len)` by a fixed `offset`.
///
/// A non-positive `len` gives an empty domain that maps nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    start: i64,
    len: i64,
    offset: i64,
}

impl Interval {
    /// The window sending `[source, source + len)` onto
    /// `[destination, destination + len)`, or `None` when either window or
    /// the offset between them leaves the `i64` range.
    pub fn checked(source: i64, destination: i64, len: i64) -> Option<Self> {
        let offset = destination.checked_sub(source)?;
        source.checked_add(len.max(0))?;
        destination.checked_add(len.max(0))?;
        Some(Self {
            start: source,
            len,
            offset,
        })
    }

    /// [`checked`](Interval::checked) for tables known to fit.
    ///
    /// # Panics
    ///
    /// When the windows do not fit in `i64`.
    pub fn new(source: i64, destination: i64, len: i64) -> Self {
        match Self::checked(source, destination, len) {
            Some(iv) => iv,
            None => panic!("interval {source} -> {destination} (len {len}) overflows i64"),
        }
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        self.offset
    }

    #[inline]
    pub fn domain(&self) -> Range<i64> {
        self.start..self.start.saturating_add(self.len.max(0))
    }

    #[inline]
    pub fn contains(&self, v: i64) -> bool {
        self.domain().contains(&v)
    }

    /// Translate one value. Does not check membership.
    #[inline]
    pub fn map_value(&self, v: i64) -> i64 {
        v + self.offset
    }

    /// Split every span of `set` into the part inside the domain and the
    /// parts outside it.
    ///
    /// A span crossing one edge of the domain becomes two pieces, a span
    /// strictly covering it becomes three. Nothing is lost or duplicated:
    /// the pieces of `(inside, outside)` together are exactly `set`.
    pub fn partition(&self, set: &IntervalSet) -> (IntervalSet, IntervalSet) {
        let domain = self.domain();
        if domain.is_empty() {
            return (IntervalSet::new(), set.clone());
        }

        let mut inside = IntervalSet::new();
        let mut outside = IntervalSet::new();
        for span in set {
            inside.push(span.start.max(domain.start)..span.end.min(domain.end));
            outside.push(span.start..span.end.min(domain.start));
            outside.push(span.start.max(domain.end)..span.end);
        }
        (inside, outside)
    }

    /// Translate both ends of every span. Only meaningful for spans inside
    /// the domain; the caller partitions first.
    pub fn map_set(&self, set: &IntervalSet) -> IntervalSet {
        set.iter()
            .map(|s| self.map_value(s.start)..self.map_value(s.end))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_mapping() {
        let iv = Interval::new(98, 50, 2);
        assert_eq!(iv.domain(), 98..100);
        assert_eq!(iv.offset(), -48);
        assert!(iv.contains(99));
        assert!(!iv.contains(100));
        assert_eq!(iv.map_value(99), 51);
    }

    #[test]
    fn partition_straddling_span() {
        // [10, 20) against [0, 15) +100.
        let iv = Interval::new(0, 100, 15);
        let (inside, outside) = iv.partition(&IntervalSet::single(10..20));
        assert_eq!(inside.spans(), &[10..15]);
        assert_eq!(outside.spans(), &[15..20]);
        assert_eq!(iv.map_set(&inside).spans(), &[110..115]);
    }

    #[test]
    fn partition_span_covering_domain_splits_in_three() {
        let iv = Interval::new(5, 0, 3);
        let (inside, outside) = iv.partition(&IntervalSet::single(0..10));
        assert_eq!(inside.spans(), &[5..8]);
        assert_eq!(outside.spans(), &[0..5, 8..10]);
    }

    #[test]
    fn partition_disjoint_and_contained() {
        let iv = Interval::new(100, 0, 50);
        let set: IntervalSet = [0..10, 110..120, 149..160].into_iter().collect();
        let (inside, outside) = iv.partition(&set);
        assert_eq!(inside.spans(), &[110..120, 149..150]);
        assert_eq!(outside.spans(), &[0..10, 150..160]);
        assert_eq!(inside.count() + outside.count(), set.count());
    }

    #[test]
    fn zero_length_domain_maps_nothing() {
        let iv = Interval::new(5, 500, 0);
        assert!(!iv.contains(5));
        let set = IntervalSet::single(0..10);
        let (inside, outside) = iv.partition(&set);
        assert!(inside.is_empty());
        assert_eq!(outside, set);
        let negative = Interval::new(5, 500, -3);
        assert!(negative.domain().is_empty());
    }

    #[test]
    fn windows_must_fit_in_i64() {
        assert_eq!(Interval::checked(i64::MIN, i64::MAX, 1), None);
        assert_eq!(Interval::checked(i64::MAX - 1, 0, 2), None);
        assert_eq!(Interval::checked(0, i64::MAX - 1, 2), None);
        let edge = Interval::checked(i64::MAX - 2, 0, 2).unwrap();
        assert_eq!(edge.domain(), i64::MAX - 2..i64::MAX);
        assert_eq!(edge.map_value(i64::MAX - 1), 1);
        // A negative length never extends the window.
        assert!(Interval::checked(i64::MAX, 0, -7).is_some());
    }

    #[test]
    #[should_panic(expected = "overflows i64")]
    fn new_rejects_overflowing_tables() {
        let _ = Interval::new(-1, i64::MAX, 1);
    }
}
