// In crates/analysis/src/trend.rs

use core_types::{CrossEvent, SymbolStatus};
use rust_decimal::Decimal;

/// Derives a trend status from a pair of moving-average values.
#[derive(Debug, Default)]
pub struct TrendClassifier;

impl TrendClassifier {
    /// Classifies one day.
    ///
    /// `Unknown` when either average is absent; `Below` only on a strict
    /// `short < long`; ties land on `Above`.
    pub fn classify(short_ma: Option<Decimal>, long_ma: Option<Decimal>) -> SymbolStatus {
        match (short_ma, long_ma) {
            (Some(short), Some(long)) => {
                if short < long {
                    SymbolStatus::Below
                } else {
                    SymbolStatus::Above
                }
            }
            _ => SymbolStatus::Unknown,
        }
    }
}

/// Detects a day-over-day transition between trend statuses.
#[derive(Debug, Default)]
pub struct CrossoverDetector;

impl CrossoverDetector {
    /// Compares yesterday's status with today's.
    ///
    /// A crossover requires both days to be classified; any `Unknown`
    /// produces `CrossEvent::None`.
    pub fn detect(yesterday: SymbolStatus, today: SymbolStatus) -> CrossEvent {
        match (yesterday, today) {
            (SymbolStatus::Above, SymbolStatus::Below) => CrossEvent::CrossedBelow,
            (SymbolStatus::Below, SymbolStatus::Above) => CrossEvent::CrossedAbove,
            _ => CrossEvent::None,
        }
    }
}
