//! forecast-digest CLI
//!
//! Fetches an OpenWeatherMap 3-hour forecast and prints it condensed into
//! daily summaries.

#![allow(clippy::print_stdout)]

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use infrastructure::{AppConfig, init_logging};

/// forecast-digest CLI
#[derive(Parser)]
#[command(name = "forecast-digest")]
#[command(author, version, about = "Daily weather summaries from OpenWeatherMap", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./forecast-digest.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a forecast and print the daily summaries as JSON
    ///
    /// Example: forecast-digest forecast --lat 52.52 --lon 13.405 --units metric
    Forecast(ForecastArgs),

    /// Summarize a saved OpenWeatherMap /forecast response
    ///
    /// Example: forecast-digest summarize --input response.json --lat 52.52 --lon 13.405
    Summarize(SummarizeArgs),
}

/// Arguments of the `forecast` command
#[derive(Args)]
struct ForecastArgs {
    /// Latitude (-90 to 90)
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude (-180 to 180)
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// Measurement system: metric or imperial (default: metric)
    #[arg(short, long)]
    units: Option<String>,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Also write the report as pretty JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Append the report to this JSON Lines dataset
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Print compact JSON
    #[arg(long)]
    compact: bool,
}

/// Arguments of the `summarize` command
#[derive(Args)]
struct SummarizeArgs {
    /// Raw /forecast response body
    #[arg(short, long)]
    input: PathBuf,

    /// Latitude (-90 to 90)
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude (-180 to 180)
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// Measurement system: metric or imperial (default: metric)
    #[arg(short, long)]
    units: Option<String>,

    /// Print compact JSON
    #[arg(long)]
    compact: bool,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let filter = match (cli.verbose, config.logging.filter.as_deref()) {
        (0, Some(filter)) => filter,
        (verbose, _) => log_filter_from_verbosity(verbose),
    };
    init_logging(&config.logging, filter)?;

    match cli.command {
        Commands::Forecast(args) => commands::forecast(args, &config).await,
        Commands::Summarize(args) => commands::summarize(&args, &config).await,
    }
}
