// ABOUTME: cardio-series CLI - computes activity detail JSON from a request file
// ABOUTME: Reads activity + minute samples, prints summary, chart series, zones, pace, and recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors
//!
//! Usage:
//! ```bash
//! # Compact JSON on stdout
//! cardio-series request.json
//!
//! # Indented output, Tanaka max heart rate, debug logs on stderr
//! cardio-series request.json --pretty --max-hr-algorithm tanaka -v
//! ```

use anyhow::Result;
use cardio_series::logging::LoggingConfig;
use cardio_series::{read_request_file, ActivityDetailConfig, ActivitySeriesBuilder, MaxHrAlgorithm};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "cardio-series",
    about = "Activity detail chart series and statistics",
    long_about = "Computes summary statistics, heart rate and intensity chart series, heart rate zones, pace, and recovery for one activity from a JSON request file."
)]
struct Cli {
    /// Path to a JSON request (`activity`, `minutes`, `selected_date`, optional `date_of_birth`)
    request: PathBuf,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Override the max heart rate formula (fox, tanaka, nes, gulati)
    #[arg(long)]
    max_hr_algorithm: Option<MaxHrAlgorithm>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.verbose().init()?;
    } else {
        logging.init()?;
    }

    let mut config = ActivityDetailConfig::from_env()?;
    if let Some(algorithm) = cli.max_hr_algorithm {
        config.max_hr_algorithm = algorithm;
    }

    let request = read_request_file(&cli.request)?;
    let detail = ActivitySeriesBuilder::new()
        .with_config(config)?
        .build_request(&request)?;

    info!(
        activity_id = %detail.activity_id,
        heart_rate_points = detail.heart_rate_series.len(),
        intensity_points = detail.intensity_series.len(),
        "Activity detail computed"
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&detail)?
    } else {
        serde_json::to_string(&detail)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
