//! # Campsite Scan
//!
//! This crate checks recreation.gov campground availability for a date range
//! and reports which campsites still have at least one open night. One scan
//! fetches availability one calendar month at a time, collapses the monthly
//! records into a per-site list of open dates, and hands the result back for
//! reporting.

/// Collapse raw monthly records into per-site open dates.
mod filter;
pub use filter::*;

/// Enumerate the first-of-month markers covering a query window.
mod months;
pub use months::*;

/// Client for the recreation.gov availability and campground APIs.
mod rec_gov_client;
pub use rec_gov_client::*;

/// Types for availability scan requests, results, and errors.
mod scan_types;
pub use scan_types::*;

/// Scan driver and report formatting.
mod scanner;
pub use scanner::*;

/// Randomized browser User-Agent generation.
mod user_agent;
pub use user_agent::*;
