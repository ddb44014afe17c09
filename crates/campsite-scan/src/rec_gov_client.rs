use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::months::month_param;
use crate::scan_types::ScanError;
use crate::user_agent::random_user_agent;

const DEFAULT_BASE_URL: &str = "https://www.recreation.gov";

/// Configuration for the recreation.gov client.
#[derive(Debug, Clone)]
pub struct RecGovConfig {
    /// Base URL for recreation.gov
    pub base_url: String,

    /// Headers attached to every request. When no `User-Agent` entry is
    /// present, a randomized browser agent is generated instead.
    pub headers: HashMap<String, String>,

    /// Request timeout (default: 30 seconds)
    pub timeout: Duration,
}

impl Default for RecGovConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headers: HashMap::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Client for the recreation.gov availability and campground APIs.
pub struct RecGovClient {
    client: Client,
    base_url: String,
}

/// One month of availability as returned by the monthly endpoint.
#[derive(Debug, Deserialize)]
pub struct MonthAvailability {
    /// Campsite id mapped to that campsite's data for the month
    pub campsites: BTreeMap<String, CampsiteMonth>,
}

/// Per-campsite data inside a monthly availability response.
#[derive(Debug, Deserialize)]
pub struct CampsiteMonth {
    /// ISO datetime string mapped to a status such as "Available"
    pub availabilities: BTreeMap<String, String>,

    /// Campsite type (e.g. "STANDARD NONELECTRIC"), when present
    pub campsite_type: Option<String>,

    /// Loop the campsite belongs to, when present
    #[serde(rename = "loop")]
    pub campsite_loop: Option<String>,
}

/// Campground metadata response wrapper.
#[derive(Debug, Deserialize)]
struct CampgroundResponse {
    campground: CampgroundDetails,
}

/// The subset of campground metadata the reporter needs.
#[derive(Debug, Deserialize)]
struct CampgroundDetails {
    facility_name: String,
}

impl RecGovClient {
    /// Create a new recreation.gov API client.
    pub fn new(config: Option<RecGovConfig>) -> Result<Self, ScanError> {
        let config = config.unwrap_or_default();

        let mut default_headers = HeaderMap::new();
        for (key, value) in &config.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| ScanError::ConfigError(format!("Invalid header name {key:?}: {e}")))?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                ScanError::ConfigError(format!("Invalid value for header {key:?}: {e}"))
            })?;
            default_headers.insert(header_name, header_value);
        }

        let mut builder = Client::builder()
            .default_headers(default_headers)
            .timeout(config.timeout);

        if !config
            .headers
            .keys()
            .any(|key| key.eq_ignore_ascii_case("user-agent"))
        {
            builder = builder.user_agent(random_user_agent());
        }

        let client = builder
            .build()
            .map_err(|e| ScanError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Fetch one calendar month of availability for a campground.
    ///
    /// A non-success status drops the month: the run keeps going on the
    /// other months, so the result is `Ok(None)` with the status logged.
    /// Transport failures and undecodable bodies are real errors.
    pub async fn fetch_month(
        &self,
        campground_id: &str,
        month_start: NaiveDate,
    ) -> Result<Option<MonthAvailability>, ScanError> {
        let url = format!(
            "{}/api/camps/availability/campground/{}/month",
            self.base_url,
            urlencoding::encode(campground_id)
        );
        let start_date_param = month_param(month_start);

        debug!("Requesting {}?start_date={}", url, start_date_param);

        let response = self
            .client
            .get(&url)
            .query(&[("start_date", start_date_param.as_str())])
            .send()
            .await
            .map_err(|e| ScanError::Network(format!("HTTP request failed: {e}")))?;

        if !response.status().is_success() {
            warn!(
                "Availability request for {} month {} returned HTTP {}, skipping month",
                campground_id,
                month_start,
                response.status()
            );
            return Ok(None);
        }

        let month: MonthAvailability = response.json().await.map_err(|e| {
            ScanError::DataFormat(format!("Failed to parse availability response: {e}"))
        })?;

        Ok(Some(month))
    }

    /// Fetch every month marker in order, keeping the months that succeed.
    ///
    /// Requests go out one at a time; the returned list can be shorter than
    /// `months` when some months were dropped.
    pub async fn fetch_months(
        &self,
        campground_id: &str,
        months: &[NaiveDate],
    ) -> Result<Vec<MonthAvailability>, ScanError> {
        let mut records = Vec::new();
        for month_start in months {
            if let Some(month) = self.fetch_month(campground_id, *month_start).await? {
                records.push(month);
            }
        }
        Ok(records)
    }

    /// Resolve a campground id to its human-readable facility name.
    pub async fn campground_name(&self, campground_id: &str) -> Result<String, ScanError> {
        let url = format!(
            "{}/api/camps/campgrounds/{}",
            self.base_url,
            urlencoding::encode(campground_id)
        );

        debug!("Requesting campground metadata from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ScanError::Network(format!("HTTP request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(match status.as_u16() {
                429 => ScanError::RateLimited,
                401 | 403 => ScanError::AuthenticationFailed,
                404 => ScanError::CampgroundNotFound,
                _ => ScanError::ApiError(format!("HTTP {status}")),
            });
        }

        let record: CampgroundResponse = response.json().await.map_err(|e| {
            ScanError::DataFormat(format!("Failed to parse campground response: {e}"))
        })?;

        Ok(record.campground.facility_name)
    }
}

/// Booking page for a campground on recreation.gov.
pub fn booking_page(campground_id: &str) -> String {
    format!(
        "{DEFAULT_BASE_URL}/camping/campgrounds/{}/availability",
        urlencoding::encode(campground_id)
    )
}
