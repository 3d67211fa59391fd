// In crates/analysis/src/moving_average.rs

use crate::{Error, Result};
use core_types::Observation;
use rust_decimal::Decimal;

/// A moving-average series aligned with the observation series it was
/// computed from.
///
/// Invariant: `len()` always equals the length of the source observations,
/// with the leading entries absent until the window has filled.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingAverageSeries {
    window: usize,
    values: Vec<Option<Decimal>>,
}

impl MovingAverageSeries {
    /// The window size this series was computed with.
    pub fn window(&self) -> usize {
        self.window
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value at `index`, or `None` when the value is absent (window not
    /// yet filled) or the index is out of range.
    pub fn value_at(&self, index: usize) -> Option<Decimal> {
        self.values.get(index).copied().flatten()
    }
}

/// Computes simple (unweighted) moving averages over a daily close series.
#[derive(Debug, Default)]
pub struct MovingAverageCalculator;

impl MovingAverageCalculator {
    /// Computes the moving average of `window` closes at every index of
    /// `observations`.
    ///
    /// The value at index `i` is the arithmetic mean of the closes at
    /// `[i - window + 1, i]`, and is absent while `i + 1 < window`. All
    /// arithmetic stays in `Decimal`.
    pub fn compute(observations: &[Observation], window: usize) -> Result<MovingAverageSeries> {
        if window == 0 {
            return Err(Error::InvalidWindow);
        }
        if observations.is_empty() {
            return Err(Error::InsufficientData {
                reason: "cannot compute a moving average over an empty series".to_string(),
            });
        }

        let divisor = Decimal::from(window);
        let mut values = Vec::with_capacity(observations.len());
        let mut window_sum = Decimal::ZERO;

        for (i, observation) in observations.iter().enumerate() {
            window_sum += observation.close;
            if i >= window {
                // Slide the window: the oldest close drops out of the sum.
                window_sum -= observations[i - window].close;
            }

            if i + 1 < window {
                values.push(None);
            } else {
                values.push(Some(window_sum / divisor));
            }
        }

        Ok(MovingAverageSeries { window, values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use rust_decimal_macros::dec;

    fn series(closes: &[Decimal]) -> Vec<Observation> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, close)| Observation {
                date: start + Days::new(i as u64),
                close: *close,
            })
            .collect()
    }

    #[test]
    fn constant_series_yields_the_constant_for_every_window() {
        let observations = series(&[dec!(100.1); 8]);
        for window in 1..=observations.len() {
            let ma = MovingAverageCalculator::compute(&observations, window).unwrap();
            assert_eq!(ma.len(), observations.len());
            for i in 0..observations.len() {
                if i + 1 < window {
                    assert_eq!(ma.value_at(i), None, "window {window}, index {i}");
                } else {
                    assert_eq!(ma.value_at(i), Some(dec!(100.1)), "window {window}, index {i}");
                }
            }
        }
    }

    #[test]
    fn averages_the_most_recent_window_closes() {
        let observations = series(&[dec!(1), dec!(2), dec!(3), dec!(4), dec!(5)]);
        let ma = MovingAverageCalculator::compute(&observations, 3).unwrap();

        assert_eq!(ma.value_at(0), None);
        assert_eq!(ma.value_at(1), None);
        assert_eq!(ma.value_at(2), Some(dec!(2)));
        assert_eq!(ma.value_at(3), Some(dec!(3)));
        assert_eq!(ma.value_at(4), Some(dec!(4)));
    }

    #[test]
    fn window_one_reproduces_the_closes() {
        let observations = series(&[dec!(10.5), dec!(11.25), dec!(9.75)]);
        let ma = MovingAverageCalculator::compute(&observations, 1).unwrap();
        for (i, observation) in observations.iter().enumerate() {
            assert_eq!(ma.value_at(i), Some(observation.close));
        }
    }

    #[test]
    fn window_larger_than_series_is_all_absent() {
        let observations = series(&[dec!(1), dec!(2)]);
        let ma = MovingAverageCalculator::compute(&observations, 5).unwrap();
        assert_eq!(ma.len(), 2);
        assert_eq!(ma.value_at(0), None);
        assert_eq!(ma.value_at(1), None);
    }

    #[test]
    fn rejects_zero_window() {
        let observations = series(&[dec!(1)]);
        assert!(matches!(
            MovingAverageCalculator::compute(&observations, 0),
            Err(Error::InvalidWindow)
        ));
    }

    #[test]
    fn rejects_empty_series() {
        assert!(matches!(
            MovingAverageCalculator::compute(&[], 2),
            Err(Error::InsufficientData { .. })
        ));
    }

    #[test]
    fn out_of_range_index_reads_as_absent() {
        let observations = series(&[dec!(1), dec!(2)]);
        let ma = MovingAverageCalculator::compute(&observations, 1).unwrap();
        assert_eq!(ma.value_at(99), None);
    }
}
