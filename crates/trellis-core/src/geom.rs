//! Integer points and the four-way direction table.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A cell coordinate or a direction. X grows right, Y grows down, matching
/// the order lines and characters appear in text input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin, and the "not moving yet" direction.
    pub const ZERO: Self = Self::new(0, 0);
    pub const LEFT: Self = Self::new(-1, 0);
    pub const RIGHT: Self = Self::new(1, 0);
    pub const UP: Self = Self::new(0, -1);
    pub const DOWN: Self = Self::new(0, 1);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Steps needed to reach the origin moving only along the axes.
    #[inline]
    pub const fn manhattan_length(self) -> i32 {
        self.x.abs() + self.y.abs()
    }

    /// `self` moved one step in each [`FOUR_WAY`] direction, in that order.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        FOUR_WAY.map(|d| self + d)
    }
}

/// Left, right, up, down. Every neighbour query enumerates in this order.
pub const FOUR_WAY: [Point; 4] = [Point::LEFT, Point::RIGHT, Point::UP, Point::DOWN];

/// Row-major: compares `y` first, then `x`, so sorted points read like text.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, d: Self) -> Self {
        Self::new(self.x + d.x, self.y + d.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, d: Self) -> Self {
        Self::new(self.x - d.x, self.y - d.y)
    }
}

/// The opposite direction.
impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_and_reversal() {
        let p = Point::new(2, 7);
        assert_eq!(p + Point::RIGHT + Point::DOWN, Point::new(3, 8));
        assert_eq!(p - Point::new(2, 7), Point::ZERO);
        assert_eq!(-Point::UP, Point::DOWN);
        assert_eq!(-Point::ZERO, Point::ZERO);
    }

    #[test]
    fn manhattan_length_counts_axis_steps() {
        assert_eq!(Point::new(-3, 4).manhattan_length(), 7);
        assert_eq!(Point::ZERO.manhattan_length(), 0);
        assert_eq!((Point::new(1, 1) - Point::new(4, -1)).manhattan_length(), 5);
    }

    #[test]
    fn four_way_is_left_right_up_down() {
        assert_eq!(
            Point::new(5, 5).neighbors_4(),
            [
                Point::new(4, 5),
                Point::new(6, 5),
                Point::new(5, 4),
                Point::new(5, 6)
            ]
        );
        for d in FOUR_WAY {
            assert_eq!(d.manhattan_length(), 1);
            assert!(FOUR_WAY.contains(&-d));
        }
    }

    #[test]
    fn sorting_reads_like_text() {
        let mut pts = vec![Point::new(0, 2), Point::new(9, 0), Point::new(1, 1), Point::new(0, 1)];
        pts.sort();
        assert_eq!(
            pts,
            vec![Point::new(9, 0), Point::new(0, 1), Point::new(1, 1), Point::new(0, 2)]
        );
        assert_eq!(Point::new(-1, 3).to_string(), "(-1, 3)");
    }
}
