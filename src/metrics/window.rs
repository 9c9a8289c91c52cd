//! Per-partition sorted-sequence scans
//!
//! Calculators group rows into partitions (region, customer), sort each
//! partition chronologically, and then scan it with one of these lazy
//! adapters:
//!
//! - `WithPrevious`: pairs each element with its predecessor (lag 1)
//! - `TrailingWindowSums`: sum over a trailing calendar window ending at
//!   each element's date, inclusive at both ends
//! - `dense_rank_by`: rank with ties sharing a rank and no gaps

use chrono::{Months, NaiveDate};

/// Iterator adapter yielding `(previous, current)` pairs.
///
/// The first element's `previous` is `None`.
pub struct WithPrevious<I: Iterator> {
    inner: I,
    previous: Option<I::Item>,
}

impl<I> Iterator for WithPrevious<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (Option<I::Item>, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.inner.next()?;
        let previous = self.previous.replace(current.clone());
        Some((previous, current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

pub trait WindowExt: Iterator + Sized {
    fn with_previous(self) -> WithPrevious<Self> {
        WithPrevious {
            inner: self,
            previous: None,
        }
    }
}

impl<I: Iterator> WindowExt for I {}

/// Trailing calendar-window sums over date-sorted points.
///
/// For the point at date `d` the window covers `[d - months, d]`.
/// Points must be sorted ascending by date.
pub struct TrailingWindowSums<'a> {
    points: &'a [(NaiveDate, f64)],
    months: Months,
    /// Next point to emit
    head: usize,
    /// First point still inside the window
    tail: usize,
}

impl<'a> TrailingWindowSums<'a> {
    pub fn new(points: &'a [(NaiveDate, f64)], months: u32) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].0 <= w[1].0));
        Self {
            points,
            months: Months::new(months),
            head: 0,
            tail: 0,
        }
    }
}

impl Iterator for TrailingWindowSums<'_> {
    /// `(date, value at date, window sum ending at date)`
    type Item = (NaiveDate, f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let (date, value) = *self.points.get(self.head)?;
        self.head += 1;

        let start = date.checked_sub_months(self.months).unwrap_or(NaiveDate::MIN);
        while self.points[self.tail].0 < start {
            self.tail += 1;
        }

        // Summed from scratch so rounding error cannot accumulate across
        // the scan
        let sum = self.points[self.tail..self.head].iter().map(|p| p.1).sum();
        Some((date, value, sum))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.points.len() - self.head;
        (remaining, Some(remaining))
    }
}

/// Dense ranks over items already sorted by `key`.
///
/// Equal keys share a rank; the next distinct key gets rank + 1.
pub fn dense_rank_by<'a, T, K, F>(items: &'a [T], key: F) -> impl Iterator<Item = (usize, &'a T)>
where
    K: PartialEq,
    F: Fn(&T) -> K + 'a,
{
    let mut rank = 0;
    items.iter().with_previous().map(move |(previous, current)| {
        if previous.map_or(true, |p| key(p) != key(current)) {
            rank += 1;
        }
        (rank, current)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_with_previous() {
        let pairs: Vec<_> = [1, 2, 3].iter().with_previous().collect();
        assert_eq!(pairs, vec![(None, &1), (Some(&1), &2), (Some(&2), &3)]);
    }

    #[test]
    fn test_with_previous_empty() {
        assert_eq!(std::iter::empty::<u8>().with_previous().count(), 0);
    }

    #[test]
    fn test_trailing_window_drops_old_points() {
        let points = vec![
            (date(2022, 1, 15), 10.0),
            (date(2022, 6, 1), 20.0),
            (date(2023, 1, 15), 5.0),
            (date(2023, 1, 16), 1.0),
        ];
        let sums: Vec<f64> = TrailingWindowSums::new(&points, 12).map(|s| s.2).collect();

        // 2023-01-15 still sees 2022-01-15 (inclusive lower bound)
        // 2023-01-16 no longer does
        assert_eq!(sums, vec![10.0, 30.0, 35.0, 26.0]);
    }

    #[test]
    fn test_trailing_window_same_day_points() {
        let points = vec![(date(2023, 3, 1), 2.0), (date(2023, 3, 1), 3.0)];
        let sums: Vec<f64> = TrailingWindowSums::new(&points, 12).map(|s| s.2).collect();
        assert_eq!(sums, vec![2.0, 5.0]);
    }

    #[test]
    fn test_dense_rank_ties_share_rank() {
        let profits = [100.0, 100.0, 90.0, 80.0, 80.0, 10.0];
        let ranks: Vec<usize> = dense_rank_by(&profits, |p| *p).map(|(r, _)| r).collect();
        assert_eq!(ranks, vec![1, 1, 2, 3, 3, 4]);
    }
}
