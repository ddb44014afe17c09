//! Command-line entry point for the campsite availability scanner.
//!
//! One invocation runs one scan: check a recreation.gov campground for
//! campsites with at least one open night in the given date range, print a
//! summary and the booking link, and exit.

use std::collections::HashMap;

use anyhow::{Context, Result};
use campsite_scan::{
    RecGovClient, RecGovConfig, ScanRequest, booking_page, format_summary, run_scan,
};
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Input format for the start and end dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Parser)]
#[command(name = "campsite-scanner")]
#[command(version)]
#[command(about = "Check a recreation.gov campground for open campsites in a date range")]
struct Cli {
    /// Recreation.gov campground id (e.g. 232825)
    campground_id: String,

    /// First date to check, YYYY-MM-DD
    start_date: String,

    /// Last date to check, YYYY-MM-DD
    end_date: String,

    /// Extra request header as "Name: Value" (repeatable). Supplying a
    /// User-Agent here replaces the generated one.
    #[arg(long = "header", value_name = "NAME: VALUE")]
    headers: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let start_date = NaiveDate::parse_from_str(&cli.start_date, DATE_FORMAT)
        .with_context(|| format!("Invalid start date {:?}, expected YYYY-MM-DD", cli.start_date))?;
    let end_date = NaiveDate::parse_from_str(&cli.end_date, DATE_FORMAT)
        .with_context(|| format!("Invalid end date {:?}, expected YYYY-MM-DD", cli.end_date))?;
    let headers = parse_headers(&cli.headers)?;

    let client = RecGovClient::new(Some(RecGovConfig {
        headers,
        ..RecGovConfig::default()
    }))?;

    let request = ScanRequest {
        campground_id: cli.campground_id,
        start_date,
        end_date,
    };

    let availability = run_scan(&client, &request).await?;
    let facility_name = client.campground_name(&request.campground_id).await?;

    println!("{}", format_summary(&facility_name, &request, &availability));
    println!(
        "To make a reservation go to: {}",
        booking_page(&request.campground_id)
    );

    Ok(())
}

fn parse_headers(raw: &[String]) -> Result<HashMap<String, String>> {
    raw.iter()
        .map(|header| {
            let (name, value) = header
                .split_once(':')
                .with_context(|| format!("Malformed header {header:?}, expected \"Name: Value\""))?;
            Ok((name.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}
