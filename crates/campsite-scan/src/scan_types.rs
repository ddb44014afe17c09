use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single availability query: one campground, one inclusive date window.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Recreation.gov campground id (e.g. "232825")
    pub campground_id: String,

    /// First date to check (inclusive)
    pub start_date: NaiveDate,

    /// Last date to check (inclusive)
    pub end_date: NaiveDate,
}

impl ScanRequest {
    /// Reject inverted date windows before any request is made.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.end_date < self.start_date {
            return Err(ScanError::InvalidDateRange);
        }
        Ok(())
    }
}

/// Aggregated availability for one campground over a query window.
///
/// `sites` maps campsite id to the dates with an open night, appended in the
/// order the months were fetched. Campsites with no open nights in the window
/// are omitted entirely; empty date lists never appear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampgroundAvailability {
    /// Id of the scanned campground
    pub campground_id: String,

    /// Campsite id mapped to its open dates within the window
    pub sites: BTreeMap<String, Vec<NaiveDate>>,

    /// When the scan ran
    pub checked_at: DateTime<Utc>,
}

impl CampgroundAvailability {
    /// Number of campsites with at least one open night.
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }
}

/// Custom error type for scan operations
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Invalid date window
    #[error("Invalid date range: end date must not be before start date")]
    InvalidDateRange,

    /// Campground not found
    #[error("Campground not found")]
    CampgroundNotFound,

    /// Rate limited by recreation.gov
    #[error("Rate limited by recreation.gov")]
    RateLimited,

    /// Request rejected by recreation.gov's bot filtering
    #[error("Request rejected by recreation.gov")]
    AuthenticationFailed,

    /// Any other non-success API status
    #[error("API error: {0}")]
    ApiError(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Data format error
    #[error("Data format error: {0}")]
    DataFormat(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
