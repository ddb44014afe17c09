use chrono::Utc;
use tracing::{debug, info};

use crate::filter::filter_availability;
use crate::months::month_starts;
use crate::rec_gov_client::RecGovClient;
use crate::scan_types::{CampgroundAvailability, ScanError, ScanRequest};

/// Run one availability scan.
///
/// Enumerates the months covering the window, fetches each month's
/// availability in order, and collapses the responses into per-site open
/// dates. Months the API refuses are dropped along the way, so a partial
/// result is still a result.
pub async fn run_scan(
    client: &RecGovClient,
    request: &ScanRequest,
) -> Result<CampgroundAvailability, ScanError> {
    request.validate()?;

    let months = month_starts(request.start_date, request.end_date)?;
    debug!(
        "Scanning campground {} across {} month(s)",
        request.campground_id,
        months.len()
    );

    let records = client.fetch_months(&request.campground_id, &months).await?;
    if records.len() < months.len() {
        info!(
            "Fetched {}/{} month(s) for campground {}",
            records.len(),
            months.len(),
            request.campground_id
        );
    }

    let sites = filter_availability(&records, request.start_date, request.end_date);

    Ok(CampgroundAvailability {
        campground_id: request.campground_id.clone(),
        sites,
        checked_at: Utc::now(),
    })
}

/// One-line human summary of a finished scan.
pub fn format_summary(
    facility_name: &str,
    request: &ScanRequest,
    availability: &CampgroundAvailability,
) -> String {
    format!(
        "{}: {} site(s) with availability between {} and {}",
        facility_name,
        availability.site_count(),
        request.start_date,
        request.end_date
    )
}
