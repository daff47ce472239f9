use trellis_core::Point;

/// Axis-aligned step count between two points: the cheapest possible
/// four-way route when every step costs at least 1.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a - b).manhattan_length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_and_zero_on_the_diagonal() {
        let (a, b) = (Point::new(1, -2), Point::new(4, 2));
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }
}
