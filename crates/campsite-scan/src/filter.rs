use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::rec_gov_client::MonthAvailability;

/// Status string marking a bookable night. Comparison is exact; statuses
/// like "Reserved", "Not Available", and "Not Reservable" never qualify.
const AVAILABLE: &str = "Available";

/// Datetime format used by availability keys, e.g. `2020-08-30T00:00:00Z`.
const AVAILABILITY_DATE_FORMAT: &str = "%Y-%m-%dT00:00:00Z";

/// Collapse raw monthly records into a per-site list of open dates.
///
/// A date qualifies when it parses under the fixed availability format,
/// falls inside the inclusive window, and its status is exactly
/// [`AVAILABLE`]. Qualifying dates accumulate per site in month-fetch
/// order, without deduplication. Campsites with no qualifying dates are
/// left out of the result entirely.
///
/// Availability keys that fail to parse are skipped with a warning rather
/// than failing the scan; one bad record should not cost the whole report.
pub fn filter_availability(
    records: &[MonthAvailability],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> BTreeMap<String, Vec<NaiveDate>> {
    let mut sites: BTreeMap<String, Vec<NaiveDate>> = BTreeMap::new();

    for month in records {
        for (site_id, campsite) in &month.campsites {
            let mut dates = Vec::new();
            for (date_str, status) in &campsite.availabilities {
                let date = match NaiveDate::parse_from_str(date_str, AVAILABILITY_DATE_FORMAT) {
                    Ok(date) => date,
                    Err(_) => {
                        warn!(
                            "Skipping malformed availability date {:?} for site {}",
                            date_str, site_id
                        );
                        continue;
                    }
                };

                if date < start_date || date > end_date {
                    continue;
                }

                if status != AVAILABLE {
                    continue;
                }

                dates.push(date);
            }

            if !dates.is_empty() {
                sites.entry(site_id.clone()).or_default().extend(dates);
            }
        }
    }

    sites
}
