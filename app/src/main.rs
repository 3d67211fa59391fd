// In app/src/main.rs

use analysis::SymbolAnalyzer;
use anyhow::Result;
use api_client::MarketDataClient;
use app_config::Settings;
use clap::{Parser, Subcommand};
use core_types::{Report, Symbol, SymbolReport};
use notifier::{ConsoleNotifier, Notifier, OutboundMessage, SmtpNotifier};
use report::{RecipientRouter, ReportAggregator, compose, policy_for};
use tracing_subscriber::prelude::*;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "A market index moving-average alert service.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetches the watchlist, analyzes it, and delivers the report.
    Run {
        /// Print the composed message instead of emailing it.
        #[arg(long)]
        dry_run: bool,
    },

    /// Analyzes the watchlist and prints the report without delivering anything.
    Preview,
}

// --- Main Application Entry Point ---

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(
        tracing_subscriber::filter::Targets::new()
            // The HTTP stack is chatty at debug level; keep it quiet.
            .with_target("hyper", tracing::Level::WARN)
            .with_target("reqwest", tracing::Level::WARN)
            .with_default(tracing::Level::INFO),
    );
    tracing_subscriber::registry().with(fmt_layer).init();

    // Parse command-line arguments.
    let cli = Cli::parse();

    tracing::info!("Starting Sentinel application");

    match cli.command {
        Commands::Run { dry_run } => {
            run_app(dry_run).await?;
        }
        Commands::Preview => {
            handle_preview().await?;
        }
    }

    tracing::info!("Sentinel application has finished successfully.");

    Ok(())
}

// --- "Run" Subcommand Logic ---

/// The primary logic for the `run` command: fetch, analyze, aggregate,
/// route, deliver.
async fn run_app(dry_run: bool) -> Result<()> {
    // --- 1. Initialization ---
    let settings = app_config::load_settings()?;
    settings.validate()?;
    tracing::info!("Application settings loaded successfully.");

    // Instantiate the delivery boundary up front: a configuration problem
    // must surface before any network call is made.
    let notifier: Box<dyn Notifier> = if dry_run {
        tracing::info!("Dry run: the report will be printed, not emailed.");
        Box::new(ConsoleNotifier)
    } else {
        Box::new(SmtpNotifier::new(&settings.email)?)
    };

    // --- 2. Per-Symbol Analysis ---
    let symbol_reports = analyze_watchlist(&settings).await?;
    if symbol_reports.is_empty() {
        tracing::warn!("No symbol was analyzed successfully; nothing to report.");
        return Ok(());
    }

    // --- 3. Aggregation & Routing ---
    let policy = policy_for(settings.report.urgency_policy);
    let run_report = ReportAggregator::aggregate(symbol_reports, policy.as_ref());
    tracing::info!(
        urgent = run_report.urgent,
        policy = policy.name(),
        symbols = run_report.symbol_reports.len(),
        "Report aggregated."
    );

    let recipients = RecipientRouter::route(&settings.recipients, run_report.urgent);
    let message = compose(&run_report);

    // --- 4. Delivery ---
    for recipient in recipients {
        let outbound = OutboundMessage {
            to: recipient.clone(),
            subject: message.subject.clone(),
            body: message.body.clone(),
        };
        if let Err(error) = notifier.send(&outbound).await {
            // The computation already succeeded; a delivery failure is
            // logged and the run carries on to the remaining recipients.
            tracing::error!(%error, to = %recipient, "Failed to deliver the report.");
        }
    }

    Ok(())
}

// --- "Preview" Subcommand Logic ---

/// Handles the logic for the `preview` subcommand.
async fn handle_preview() -> Result<()> {
    let settings = app_config::load_settings()?;
    tracing::info!("Application settings loaded successfully.");

    let symbol_reports = analyze_watchlist(&settings).await?;
    if symbol_reports.is_empty() {
        tracing::warn!("No symbol was analyzed successfully; nothing to preview.");
        return Ok(());
    }

    let policy = policy_for(settings.report.urgency_policy);
    let run_report = ReportAggregator::aggregate(symbol_reports, policy.as_ref());
    print_report(&run_report, policy.name());

    Ok(())
}

/// Helper function to print the aggregated report to stdout.
fn print_report(run_report: &Report, policy_name: &str) {
    let message = compose(run_report);

    println!("\n--- Report Preview ---");
    println!("Policy:  {policy_name}");
    println!("Urgent:  {}", run_report.urgent);
    println!("Subject: {}", message.subject);
    println!("----------------------\n");
    println!("{}", message.body);
}

// --- Watchlist Fan-Out ---

/// Fetches and analyzes every watchlist symbol concurrently.
///
/// Each symbol runs in its own task; results rejoin in watchlist order so
/// the report reads the same from run to run.
async fn analyze_watchlist(settings: &Settings) -> Result<Vec<SymbolReport>> {
    let client = MarketDataClient::new(&settings.provider)?;
    let analyzer = SymbolAnalyzer::new(settings.analysis.clone());

    let mut handles = Vec::with_capacity(settings.watchlist.symbols.len());
    for symbol_name in &settings.watchlist.symbols {
        let symbol = Symbol(symbol_name.clone());
        let client = client.clone();
        let analyzer = analyzer.clone();
        handles.push(tokio::spawn(async move {
            let outcome = analyze_symbol(&client, &analyzer, &symbol).await;
            (symbol, outcome)
        }));
    }

    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        outcomes.push(handle.await?);
    }

    Ok(successful_reports(outcomes))
}

/// Fetches one symbol's close series and runs the analysis pipeline on it.
async fn analyze_symbol(
    client: &MarketDataClient,
    analyzer: &SymbolAnalyzer,
    symbol: &Symbol,
) -> Result<SymbolReport> {
    let observations = client.get_daily_closes(symbol).await?;
    tracing::debug!(symbol = %symbol.0, days = observations.len(), "Fetched close series.");
    let symbol_report = analyzer.analyze(symbol.clone(), &observations)?;
    Ok(symbol_report)
}

/// Keeps the successful analyses and drops the failures.
///
/// A symbol whose fetch or analysis failed is logged and excluded from the
/// report; it never aborts the run for the other symbols.
fn successful_reports(outcomes: Vec<(Symbol, Result<SymbolReport>)>) -> Vec<SymbolReport> {
    let mut symbol_reports = Vec::with_capacity(outcomes.len());
    for (symbol, outcome) in outcomes {
        match outcome {
            Ok(symbol_report) => symbol_reports.push(symbol_report),
            Err(error) => {
                tracing::warn!(symbol = %symbol.0, error = %error, "Skipping symbol; it is excluded from this report.");
            }
        }
    }
    symbol_reports
}
