//! # costful-cli
//!
//! Command-line interface for the costful cost intelligence engine.
//! All I/O, logging and process concerns live here; the engine crates
//! stay pure.

use clap::{Parser, Subcommand};
use costful::focus::{
    ingest_rows, normalize_private_dc, FocusError, IngestReport, PrivateDcInputs, RawBillingRow,
    ValidationConfig,
};
use costful::forecast::{predict, CostHistoryPoint};
use costful::insight::{detect_anomalies_with, generate_executive_summary, AnomalyConfig};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "costful")]
#[command(about = "FinOps cost normalization and intelligence CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize private datacenter parameters into canonical records
    Normalize {
        /// Total hardware acquisition cost
        #[arg(long)]
        hardware_cost: f64,

        /// Amortization horizon in years
        #[arg(long, default_value = "5.0")]
        useful_life: f64,

        /// Monthly power and cooling cost
        #[arg(long, default_value = "0.0")]
        power_cost: f64,

        /// Write records as JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate and ingest a FOCUS cost export
    Ingest {
        /// Input CSV with FOCUS column headers
        #[arg(short, long)]
        input: PathBuf,

        /// Leading rows to validate before accepting the batch
        #[arg(long, default_value = "50")]
        sample_size: usize,
    },

    /// Forecast future cost from a cost history CSV
    Forecast {
        /// Input CSV with a label column followed by a cost column
        #[arg(short, long)]
        input: PathBuf,

        /// Number of future periods to project
        #[arg(long, default_value = "6")]
        horizon: usize,

        /// Column name for cost values
        #[arg(short, long, default_value = "cost")]
        column: String,

        /// Write the forecast as JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Detect cost spikes in a FOCUS cost export
    Detect {
        /// Input CSV with FOCUS column headers
        #[arg(short, long)]
        input: PathBuf,

        /// Sigma threshold for flagging a spike
        #[arg(long, default_value = "1.5")]
        threshold: f64,

        /// Sigma threshold for high severity
        #[arg(long, default_value = "2.5")]
        high_threshold: f64,
    },

    /// Executive summary across private and public spend
    Summary {
        /// Total hardware acquisition cost
        #[arg(long)]
        hardware_cost: f64,

        /// Amortization horizon in years
        #[arg(long, default_value = "5.0")]
        useful_life: f64,

        /// Monthly power and cooling cost
        #[arg(long, default_value = "0.0")]
        power_cost: f64,

        /// Optional public cloud FOCUS CSV for comparison context
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Load FOCUS rows from a header-labeled CSV file.
fn load_focus_rows(path: &Path) -> CliResult<Vec<RawBillingRow>> {
    let file = File::open(path).map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: RawBillingRow = result.map_err(|e| format!("Failed to read record: {}", e))?;
        rows.push(row);
    }
    tracing::debug!(rows = rows.len(), path = %path.display(), "loaded cost export");
    Ok(rows)
}

/// Load a cost history from a CSV file, taking period labels from the
/// first column and costs from the named column.
fn load_history(path: &Path, column: &str) -> CliResult<Vec<CostHistoryPoint>> {
    let file = File::open(path).map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();
    let col_idx = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| format!("Column '{}' not found", column))?;

    let mut history = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        let label = record.get(0).unwrap_or_default().to_string();
        let cost = record
            .get(col_idx)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .ok_or_else(|| format!("Non-numeric cost in row '{}'", label))?;
        history.push(CostHistoryPoint::new(label, cost));
    }
    Ok(history)
}

fn ingest_export(path: &Path, sample_size: usize) -> CliResult<IngestReport> {
    let rows = load_focus_rows(path)?;
    ingest_rows(&rows, &ValidationConfig::new(sample_size)).map_err(|e| match e {
        FocusError::BatchRejected { errors } => {
            format!("Validation failed:\n{}", errors.join("\n"))
        }
        other => other.to_string(),
    })
}

fn write_or_print(output: Option<&Path>, json: &str) -> CliResult<()> {
    match output {
        Some(path) => std::fs::write(path, json)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e)),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Normalize {
            hardware_cost,
            useful_life,
            power_cost,
            output,
        } => {
            let inputs = PrivateDcInputs::new(hardware_cost, useful_life, power_cost);
            let records = normalize_private_dc(&inputs).map_err(|e| e.to_string())?;
            tracing::info!(records = records.len(), "normalized private datacenter");

            let json = serde_json::to_string_pretty(&records)
                .map_err(|e| format!("Failed to serialize records: {}", e))?;
            write_or_print(output.as_deref(), &json)
        }

        Commands::Ingest { input, sample_size } => {
            let report = ingest_export(&input, sample_size)?;
            println!("Validation successful");
            println!("  rows:             {}", report.total_rows);
            println!("  accepted:         {}", report.records.len());
            println!("  distinct services: {}", report.distinct_services);
            if report.skipped_rows > 0 {
                tracing::warn!(skipped = report.skipped_rows, "rows dropped past the sample");
                println!("  skipped:          {}", report.skipped_rows);
            }
            Ok(())
        }

        Commands::Forecast {
            input,
            horizon,
            column,
            output,
        } => {
            let history = load_history(&input, &column)?;
            let forecast = predict(&history, horizon).map_err(|e| e.to_string())?;
            tracing::info!(
                slope = forecast.slope,
                horizon,
                "fitted linear trend over {} periods",
                history.len()
            );

            match output {
                Some(path) => {
                    let json = serde_json::to_string_pretty(&forecast)
                        .map_err(|e| format!("Failed to serialize forecast: {}", e))?;
                    write_or_print(Some(&path), &json)
                }
                None => {
                    println!(
                        "Trend {} (slope {:.2}, intercept {:.2})",
                        forecast.trend(),
                        forecast.slope,
                        forecast.intercept
                    );
                    for projection in &forecast.projections {
                        println!("  index {}: ${:.2}", projection.index, projection.predicted_cost);
                    }
                    Ok(())
                }
            }
        }

        Commands::Detect {
            input,
            threshold,
            high_threshold,
        } => {
            let report = ingest_export(&input, ValidationConfig::default().sample_size)?;
            let config = AnomalyConfig::new(threshold, high_threshold);
            let anomalies = detect_anomalies_with(&report.records, &config);

            if anomalies.is_empty() {
                println!("No anomalies detected across {} records", report.records.len());
            } else {
                println!("{} anomaly(ies) detected", anomalies.len());
                for anomaly in &anomalies {
                    println!("  [{}] {}", anomaly.severity, anomaly.message);
                }
            }
            Ok(())
        }

        Commands::Summary {
            hardware_cost,
            useful_life,
            power_cost,
            input,
        } => {
            let inputs = PrivateDcInputs::new(hardware_cost, useful_life, power_cost);
            let private_records = normalize_private_dc(&inputs).map_err(|e| e.to_string())?;
            let public_records = match input {
                Some(path) => {
                    ingest_export(&path, ValidationConfig::default().sample_size)?.records
                }
                None => Vec::new(),
            };

            println!("Executive summary");
            for insight in generate_executive_summary(&private_records, &public_records) {
                println!("  - {}", insight);
            }

            let anomalies = detect_anomalies_with(&public_records, &AnomalyConfig::default());
            if !anomalies.is_empty() {
                println!("Anomalies in public spend");
                for anomaly in &anomalies {
                    println!("  [{}] {}", anomaly.severity, anomaly.message);
                }
            }
            Ok(())
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
