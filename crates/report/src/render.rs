// In crates/report/src/render.rs

use core_types::Report;
use rust_decimal::Decimal;
use std::fmt::Write;

/// A rendered message, ready for the notification sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMessage {
    pub subject: String,
    pub body: String,
}

/// Renders a run report into a subject line and a plain-text body.
///
/// Numeric values are displayed at two decimals; the report itself keeps
/// full precision.
pub fn compose(report: &Report) -> ComposedMessage {
    let subject = if report.urgent {
        "MARKET ALERT: short MA below long MA detected".to_string()
    } else {
        "Market update: daily moving-average check".to_string()
    };

    let mut body = String::new();
    let _ = writeln!(
        body,
        "Daily moving-average check, generated {}.\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    for symbol_report in &report.symbol_reports {
        let _ = writeln!(body, "--- {} ---", symbol_report.symbol);
        let _ = writeln!(body, "Date:     {}", symbol_report.date.format("%Y-%m-%d"));
        let _ = writeln!(body, "Status:   {}", symbol_report.status);
        let _ = writeln!(body, "Price:    {:.2}", symbol_report.price);
        let _ = writeln!(body, "Short MA: {}", format_average(symbol_report.short_ma));
        let _ = writeln!(body, "Long MA:  {}", format_average(symbol_report.long_ma));
        let _ = writeln!(body, "Signal:   {}\n", symbol_report.cross_event);
    }

    ComposedMessage { subject, body }
}

fn format_average(value: Option<Decimal>) -> String {
    match value {
        Some(average) => format!("{average:.2}"),
        None => "n/a".to_string(),
    }
}
