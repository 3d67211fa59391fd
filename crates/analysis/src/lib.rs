// In crates/analysis/src/lib.rs

pub mod analyzer;
pub mod error;
pub mod moving_average;
pub mod trend;
pub mod types;

// Re-export public types
pub use analyzer::SymbolAnalyzer;
pub use error::{Error, Result};
pub use moving_average::{MovingAverageCalculator, MovingAverageSeries};
pub use trend::{CrossoverDetector, TrendClassifier};
pub use types::AnalysisSettings;
