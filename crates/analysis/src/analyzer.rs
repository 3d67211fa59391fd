// In crates/analysis/src/analyzer.rs

use crate::moving_average::MovingAverageCalculator;
use crate::trend::{CrossoverDetector, TrendClassifier};
use crate::types::AnalysisSettings;
use crate::{Error, Result};
use core_types::{Observation, Symbol, SymbolReport};

/// Runs the full per-symbol pipeline: moving averages, trend status, and
/// day-over-day crossover detection.
///
/// The analyzer is a pure composition of the calculator, classifier, and
/// detector; it holds no state beyond its settings and is cheap to clone
/// into concurrent per-symbol tasks.
#[derive(Debug, Clone)]
pub struct SymbolAnalyzer {
    /// The configuration for this analyzer instance.
    settings: AnalysisSettings,
}

impl SymbolAnalyzer {
    /// Creates a new `SymbolAnalyzer` instance from its settings.
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    /// Analyzes one symbol's close series, most recent day last.
    ///
    /// A series shorter than `long_window + 1` still produces a report: the
    /// days whose averages have not filled yet classify as `Unknown`, and a
    /// crossover is only reported when both days are classified. Fewer than
    /// two observations is a hard error, since there is no "yesterday" to
    /// compare against.
    pub fn analyze(&self, symbol: Symbol, observations: &[Observation]) -> Result<SymbolReport> {
        if observations.len() < 2 {
            return Err(Error::InsufficientData {
                reason: format!(
                    "{} has {} observation(s), need at least 2",
                    symbol,
                    observations.len()
                ),
            });
        }

        let short = MovingAverageCalculator::compute(observations, self.settings.short_window)?;
        let long = MovingAverageCalculator::compute(observations, self.settings.long_window)?;

        // The two most recent trading days in the series.
        let today = observations.len() - 1;
        let yesterday = today - 1;

        let today_status = TrendClassifier::classify(short.value_at(today), long.value_at(today));
        let yesterday_status =
            TrendClassifier::classify(short.value_at(yesterday), long.value_at(yesterday));
        let cross_event = CrossoverDetector::detect(yesterday_status, today_status);

        let latest = &observations[today];
        Ok(SymbolReport {
            symbol,
            date: latest.date,
            price: latest.close,
            short_ma: short.value_at(today),
            long_ma: long.value_at(today),
            status: today_status,
            cross_event,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use core_types::{CrossEvent, SymbolStatus};
    use rust_decimal::Decimal;
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

    fn analyzer(short_window: usize, long_window: usize) -> SymbolAnalyzer {
        SymbolAnalyzer::new(AnalysisSettings {
            short_window,
            long_window,
        })
    }

    #[test]
    fn reports_a_bearish_crossover_day() {
        // Yesterday the short MA sat above the long MA, today it dropped
        // below it: 106 -> 100 against a flat 105 backdrop.
        let observations = series(&[dec!(105), dec!(105), dec!(105), dec!(105), dec!(106), dec!(100)]);
        let report = analyzer(2, 4)
            .analyze(Symbol("^DJI".to_string()), &observations)
            .unwrap();

        assert_eq!(report.status, SymbolStatus::Below);
        assert_eq!(report.cross_event, CrossEvent::CrossedBelow);
        assert_eq!(report.price, dec!(100));
        assert_eq!(report.short_ma, Some(dec!(103)));
        assert_eq!(report.long_ma, Some(dec!(104)));
        assert_eq!(
            report.date,
            NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()
        );
    }

    #[test]
    fn reports_a_bullish_crossover_day() {
        let observations = series(&[dec!(105), dec!(105), dec!(105), dec!(105), dec!(104), dec!(110)]);
        let report = analyzer(2, 4)
            .analyze(Symbol("^IXIC".to_string()), &observations)
            .unwrap();

        assert_eq!(report.status, SymbolStatus::Above);
        assert_eq!(report.cross_event, CrossEvent::CrossedAbove);
    }

    #[test]
    fn no_event_when_the_trend_holds() {
        let observations = series(&[dec!(100), dec!(101), dec!(102), dec!(103), dec!(104), dec!(105)]);
        let report = analyzer(2, 4)
            .analyze(Symbol("^DJI".to_string()), &observations)
            .unwrap();

        assert_eq!(report.status, SymbolStatus::Above);
        assert_eq!(report.cross_event, CrossEvent::None);
    }

    #[test]
    fn thin_history_degrades_to_unknown_instead_of_failing() {
        // Three observations against a long window of 210: both days are
        // unclassifiable, so no crossover can be reported either.
        let observations = series(&[dec!(100), dec!(101), dec!(102)]);
        let report = analyzer(2, 210)
            .analyze(Symbol("^DJI".to_string()), &observations)
            .unwrap();

        assert_eq!(report.status, SymbolStatus::Unknown);
        assert_eq!(report.cross_event, CrossEvent::None);
        assert_eq!(report.long_ma, None);
        assert_eq!(report.price, dec!(102));
    }

    #[test]
    fn exactly_long_window_classifies_today_but_reports_no_event() {
        // Today's long MA is defined, yesterday's is not: the status is
        // real but there is nothing to compare it against yet.
        let observations = series(&[dec!(105), dec!(105), dec!(105), dec!(100)]);
        let report = analyzer(2, 4)
            .analyze(Symbol("^DJI".to_string()), &observations)
            .unwrap();

        assert_eq!(report.status, SymbolStatus::Below);
        assert_eq!(report.cross_event, CrossEvent::None);
    }

    #[test]
    fn fewer_than_two_observations_is_an_error() {
        let observations = series(&[dec!(100)]);
        assert!(matches!(
            analyzer(2, 210).analyze(Symbol("^DJI".to_string()), &observations),
            Err(Error::InsufficientData { .. })
        ));
    }
}
