//! Summary statistics over integer sequences.

use serde::Serialize;
use std::iter::FromIterator;

/// Count, sum, min, max and average of a sequence of integers.
///
/// An empty summary reports `min = i64::MAX` and `max = i64::MIN` so that
/// the first accepted value always replaces both bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of values seen
    pub count: u64,
    /// Sum of all values
    pub sum: i64,
    /// Smallest value seen
    pub min: i64,
    /// Largest value seen
    pub max: i64,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            count: 0,
            sum: 0,
            min: i64::MAX,
            max: i64::MIN,
        }
    }
}

impl Summary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one value. The sum wraps on overflow.
    pub fn accept(&mut self, value: i64) {
        self.count += 1;
        self.sum = self.sum.wrapping_add(value);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Merge another summary into this one.
    pub fn combine(&mut self, other: &Summary) {
        self.count += other.count;
        self.sum = self.sum.wrapping_add(other.sum);
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Arithmetic mean, or `0.0` when nothing was recorded.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }
}

impl Extend<i64> for Summary {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.accept(value);
        }
    }
}

impl Extend<i32> for Summary {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(i64::from));
    }
}

impl FromIterator<i64> for Summary {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut summary = Summary::new();
        summary.extend(iter);
        summary
    }
}

impl FromIterator<i32> for Summary {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        iter.into_iter().map(i64::from).collect()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "count={}, sum={}, min={}, max={}, avg={:.2}",
            self.count,
            self.sum,
            self.min,
            self.max,
            self.average()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let s = Summary::new();
        assert_eq!(s.count, 0);
        assert_eq!(s.min, i64::MAX);
        assert_eq!(s.max, i64::MIN);
        assert_eq!(s.average(), 0.0);
    }

    #[test]
    fn test_collect_one_to_ten() {
        let s: Summary = (1i64..=10).collect();
        assert_eq!(s.count, 10);
        assert_eq!(s.sum, 55);
        assert_eq!(s.min, 1);
        assert_eq!(s.max, 10);
        assert_eq!(s.average(), 5.5);
        assert_eq!(s.to_string(), "count=10, sum=55, min=1, max=10, avg=5.50");
    }

    #[test]
    fn test_combine() {
        let mut left: Summary = vec![1i64, 2, 3].into_iter().collect();
        let right: Summary = vec![-4i64, 10].into_iter().collect();
        left.combine(&right);
        assert_eq!(left.count, 5);
        assert_eq!(left.sum, 12);
        assert_eq!(left.min, -4);
        assert_eq!(left.max, 10);
    }

    #[test]
    fn test_sum_wraps_instead_of_panicking() {
        let s: Summary = vec![i64::MAX, 1].into_iter().collect();
        assert_eq!(s.count, 2);
        assert_eq!(s.sum, i64::MIN);
        assert_eq!(s.max, i64::MAX);

        let mut left: Summary = vec![i64::MAX].into_iter().collect();
        left.combine(&vec![2i64].into_iter().collect());
        assert_eq!(left.sum, i64::MIN + 1);
    }

    #[test]
    fn test_combine_with_empty_keeps_bounds() {
        let mut s: Summary = vec![7i64].into_iter().collect();
        s.combine(&Summary::new());
        assert_eq!(s.min, 7);
        assert_eq!(s.max, 7);
        assert_eq!(s.count, 1);
    }
}
