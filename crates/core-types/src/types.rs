// In crates/core-types/src/types.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A market index or instrument symbol (e.g., "^DJI").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single daily closing price, as delivered by the market data provider.
///
/// Observations are ordered by date, one per trading day, and are never
/// mutated once fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// The trading day this close belongs to.
    pub date: NaiveDate,
    /// The closing price for that day.
    pub close: Decimal,
}

/// Where the short moving average sits relative to the long one on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolStatus {
    /// Short MA at or above the long MA (ties classify as `Above`).
    Above,
    /// Short MA strictly below the long MA.
    Below,
    /// At least one moving-average value is absent for the day.
    Unknown,
}

impl SymbolStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Above => "ABOVE",
            Self::Below => "BELOW",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for SymbolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A day-over-day transition between trend statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossEvent {
    /// No transition, including any day with an `Unknown` status.
    None,
    /// Bearish signal: the short MA moved below the long MA.
    CrossedBelow,
    /// Bullish signal: the short MA moved above the long MA.
    CrossedAbove,
}

impl CrossEvent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::CrossedBelow => "CROSSED_BELOW",
            Self::CrossedAbove => "CROSSED_ABOVE",
        }
    }
}

impl std::fmt::Display for CrossEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The analysis outcome for one symbol on its most recent trading day.
///
/// Created fresh each run by the symbol analyzer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolReport {
    pub symbol: Symbol,
    /// The most recent trading day in the fetched series.
    pub date: NaiveDate,
    /// The closing price on that day, at full precision.
    pub price: Decimal,
    /// The short moving average, absent while the window is still filling.
    pub short_ma: Option<Decimal>,
    /// The long moving average, absent while the window is still filling.
    pub long_ma: Option<Decimal>,
    pub status: SymbolStatus,
    pub cross_event: CrossEvent,
}

/// One run's combined report across the whole watchlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Per-symbol results, in watchlist order. Symbols whose fetch or
    /// analysis failed are excluded rather than represented by a placeholder.
    pub symbol_reports: Vec<SymbolReport>,
    /// Whether the configured urgency policy flagged this run.
    pub urgent: bool,
    /// When the report was aggregated.
    pub generated_at: DateTime<Utc>,
}
