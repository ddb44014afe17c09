use std::collections::HashMap;
use std::time::Duration;

use campsite_scan::{
    RecGovClient, RecGovConfig, ScanError, ScanRequest, format_summary, run_scan,
};
use chrono::NaiveDate;
use httpmock::prelude::*;
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn test_client(server: &MockServer) -> RecGovClient {
    RecGovClient::new(Some(RecGovConfig {
        base_url: server.base_url(),
        ..RecGovConfig::default()
    }))
    .unwrap()
}

const MONTH_PATH: &str = "/api/camps/availability/campground/232825/month";

#[tokio::test]
async fn scan_filters_each_fetched_month_to_the_window() {
    let server = MockServer::start();

    // August: one open night before the window, one inside it.
    let august = server.mock(|when, then| {
        when.method(GET)
            .path(MONTH_PATH)
            .query_param("start_date", "2020-08-01T00:00:00.000Z");
        then.status(200).json_body(json!({
            "campsites": {
                "64407": {
                    "availabilities": {
                        "2020-08-28T00:00:00Z": "Available",
                        "2020-08-30T00:00:00Z": "Available"
                    }
                }
            }
        }));
    });
    let september = server.mock(|when, then| {
        when.method(GET)
            .path(MONTH_PATH)
            .query_param("start_date", "2020-09-01T00:00:00.000Z");
        then.status(200).json_body(json!({
            "campsites": {
                "64407": {
                    "availabilities": { "2020-09-15T00:00:00Z": "Available" }
                },
                "64408": {
                    "availabilities": { "2020-09-20T00:00:00Z": "Reserved" }
                }
            }
        }));
    });
    let october = server.mock(|when, then| {
        when.method(GET)
            .path(MONTH_PATH)
            .query_param("start_date", "2020-10-01T00:00:00.000Z");
        then.status(200).json_body(json!({ "campsites": {} }));
    });

    let request = ScanRequest {
        campground_id: "232825".to_string(),
        start_date: date(2020, 8, 29),
        end_date: date(2020, 10, 30),
    };
    let availability = run_scan(&test_client(&server), &request).await.unwrap();

    august.assert();
    september.assert();
    october.assert();

    // 2020-08-28 is before the window; 64408 never had an open night.
    assert_eq!(availability.site_count(), 1);
    assert_eq!(
        availability.sites["64407"],
        vec![date(2020, 8, 30), date(2020, 9, 15)]
    );
}

#[tokio::test]
async fn a_failed_month_is_dropped_and_the_rest_still_report() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path(MONTH_PATH)
            .query_param("start_date", "2020-08-01T00:00:00.000Z");
        then.status(200).json_body(json!({
            "campsites": {
                "64407": {
                    "availabilities": { "2020-08-30T00:00:00Z": "Available" }
                }
            }
        }));
    });
    let september = server.mock(|when, then| {
        when.method(GET)
            .path(MONTH_PATH)
            .query_param("start_date", "2020-09-01T00:00:00.000Z");
        then.status(503);
    });
    server.mock(|when, then| {
        when.method(GET)
            .path(MONTH_PATH)
            .query_param("start_date", "2020-10-01T00:00:00.000Z");
        then.status(200).json_body(json!({
            "campsites": {
                "64409": {
                    "availabilities": { "2020-10-02T00:00:00Z": "Available" }
                }
            }
        }));
    });

    let request = ScanRequest {
        campground_id: "232825".to_string(),
        start_date: date(2020, 8, 29),
        end_date: date(2020, 10, 30),
    };
    let availability = run_scan(&test_client(&server), &request).await.unwrap();

    september.assert();
    assert_eq!(availability.site_count(), 2);
    assert_eq!(availability.sites["64407"], vec![date(2020, 8, 30)]);
    assert_eq!(availability.sites["64409"], vec![date(2020, 10, 2)]);
}

#[tokio::test]
async fn fully_reserved_campground_reports_zero_sites() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path(MONTH_PATH)
            .query_param("start_date", "2020-08-01T00:00:00.000Z");
        then.status(200).json_body(json!({
            "campsites": {
                "64407": {
                    "availabilities": {
                        "2020-08-29T00:00:00Z": "Reserved",
                        "2020-08-30T00:00:00Z": "Reserved"
                    }
                }
            }
        }));
    });

    let request = ScanRequest {
        campground_id: "232825".to_string(),
        start_date: date(2020, 8, 29),
        end_date: date(2020, 8, 31),
    };
    let availability = run_scan(&test_client(&server), &request).await.unwrap();

    assert!(availability.sites.is_empty());
    assert_eq!(
        format_summary("Upper Pines", &request, &availability),
        "Upper Pines: 0 site(s) with availability between 2020-08-29 and 2020-08-31"
    );
}

#[tokio::test]
async fn campground_name_comes_from_facility_metadata() {
    let server = MockServer::start();

    let metadata = server.mock(|when, then| {
        when.method(GET).path("/api/camps/campgrounds/232825");
        then.status(200).json_body(json!({
            "campground": {
                "facility_name": "UPPER PINES",
                "facility_id": "232825"
            }
        }));
    });

    let name = test_client(&server)
        .campground_name("232825")
        .await
        .unwrap();

    metadata.assert();
    assert_eq!(name, "UPPER PINES");
}

#[tokio::test]
async fn unknown_campground_maps_to_a_typed_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/camps/campgrounds/999999");
        then.status(404);
    });

    let result = test_client(&server).campground_name("999999").await;
    assert!(matches!(result, Err(ScanError::CampgroundNotFound)));
}

#[tokio::test]
async fn caller_supplied_user_agent_reaches_the_wire() {
    let server = MockServer::start();

    let month = server.mock(|when, then| {
        when.method(GET)
            .path(MONTH_PATH)
            .header("user-agent", "campsite-scan-test/1.0")
            .query_param("start_date", "2020-08-01T00:00:00.000Z");
        then.status(200).json_body(json!({ "campsites": {} }));
    });

    let client = RecGovClient::new(Some(RecGovConfig {
        base_url: server.base_url(),
        headers: HashMap::from([(
            "User-Agent".to_string(),
            "campsite-scan-test/1.0".to_string(),
        )]),
        timeout: Duration::from_secs(5),
    }))
    .unwrap();

    let record = client.fetch_month("232825", date(2020, 8, 1)).await.unwrap();

    month.assert();
    assert!(record.is_some());
}

#[tokio::test]
async fn a_generated_browser_agent_is_sent_by_default() {
    let server = MockServer::start();

    let month = server.mock(|when, then| {
        when.method(GET)
            .path(MONTH_PATH)
            .header_exists("user-agent")
            .query_param("start_date", "2020-08-01T00:00:00.000Z");
        then.status(200).json_body(json!({ "campsites": {} }));
    });

    test_client(&server)
        .fetch_month("232825", date(2020, 8, 1))
        .await
        .unwrap();

    month.assert();
}
