mod common;

use common::{MockApi, client, client_with_token, unreachable_origin};
use nh_client::api::models::{DashboardStats, ValidationCheck};
use serde_json::json;

fn dashboard_mock() -> MockApi {
    let mock = MockApi::new();
    mock.reply(
        "GET /api/nh",
        200,
        json!({"success": true, "data": [{"nh_number": "NH44"}, {"nh_number": "NH38"}]}),
    );
    mock.reply(
        "GET /api/segments",
        200,
        json!({"success": true, "data": [{"segment_id": 1}, {"segment_id": 2}, {"segment_id": 3}]}),
    );
    mock.reply(
        "GET /api/divisions",
        200,
        json!({"success": true, "data": [{"division_name": "Madurai"}]}),
    );
    mock
}

#[tokio::test]
async fn dashboard_stats_count_each_listing() {
    let mock = dashboard_mock();
    let origin = mock.spawn().await;

    let (client, _store) = client(&origin).await;
    let stats = client.get_dashboard_stats().await;

    assert_eq!(stats.total_nhs, 2);
    assert_eq!(stats.total_segments, 3);
    assert_eq!(stats.total_offices, 1);
    assert_eq!(stats.segments[2], json!({"segment_id": 3}));
    assert_eq!(mock.requests().len(), 3);
}

#[tokio::test]
async fn application_failures_count_as_zero() {
    let mock = MockApi::new();
    mock.reply("GET /api/nh", 200, json!({"success": true, "data": [{"nh_number": "NH44"}]}));
    mock.reply("GET /api/segments", 500, json!({"success": false, "message": "Error: db down"}));
    mock.reply("GET /api/divisions", 200, json!({"success": true, "data": {"not": "a list"}}));
    let origin = mock.spawn().await;

    let (client, _store) = client(&origin).await;
    let stats = client.get_dashboard_stats().await;

    assert_eq!(stats.total_nhs, 1);
    assert_eq!(stats.total_segments, 0);
    assert_eq!(stats.total_offices, 0);
    assert!(stats.segments.is_empty());
}

#[tokio::test]
async fn one_malformed_response_zeroes_the_dashboard() {
    let mock = dashboard_mock();
    mock.reply_raw_once("GET /api/divisions", 502, "Bad Gateway");
    let origin = mock.spawn().await;

    let (client, _store) = client(&origin).await;
    assert_eq!(client.get_dashboard_stats().await, DashboardStats::empty());
    // 其余两个请求照常发出
    assert_eq!(mock.requests().len(), 3);
}

#[tokio::test]
async fn unreachable_server_zeroes_the_dashboard() {
    let origin = unreachable_origin().await;
    let (client, _store) = client(&origin).await;
    assert_eq!(client.get_dashboard_stats().await, DashboardStats::empty());
}

#[tokio::test]
async fn validation_collects_all_three_checks() {
    let mock = MockApi::new();
    mock.reply(
        "GET /api/validation/overlapping-segments",
        200,
        json!({"success": true, "data": [{"segment1_id": 1, "segment2_id": 2}]}),
    );
    mock.reply(
        "GET /api/validation/overlapping-configurations",
        200,
        json!({"success": true, "data": []}),
    );
    mock.reply(
        "GET /api/validation/out-of-bounds",
        200,
        json!({"success": true, "data": [{"detail_id": 5}, {"detail_id": 6}]}),
    );
    let origin = mock.spawn().await;

    let (client, _store) = client_with_token(&origin, "abc").await;
    let report = client.run_validation().await;

    assert_eq!(report.overlapping_segments.len(), 1);
    assert!(report.overlapping_configs.is_empty());
    assert_eq!(report.out_of_bounds.len(), 2);
    assert!(report.failed_checks.is_empty());
    assert!(
        mock.requests()
            .iter()
            .all(|r| r.authorization.as_deref() == Some("Bearer abc"))
    );
}

#[tokio::test]
async fn failed_validation_check_is_reported_not_raised() {
    let mock = MockApi::new();
    mock.reply(
        "GET /api/validation/overlapping-segments",
        200,
        json!({"success": true, "data": [{"segment1_id": 1}]}),
    );
    mock.reply_raw_once("GET /api/validation/overlapping-configurations", 500, "oops");
    mock.reply(
        "GET /api/validation/out-of-bounds",
        200,
        json!({"success": true, "data": []}),
    );
    let origin = mock.spawn().await;

    let (client, _store) = client_with_token(&origin, "abc").await;
    let report = client.run_validation().await;

    assert_eq!(report.overlapping_segments.len(), 1);
    assert_eq!(
        report.failed_checks,
        vec![ValidationCheck::OverlappingConfigurations]
    );
    assert!(!report.is_clean());
}

#[tokio::test]
async fn concurrent_invalid_tokens_each_retry_once() {
    let mock = dashboard_mock();
    for route in ["GET /api/nh", "GET /api/segments", "GET /api/divisions"] {
        mock.reply_once(route, 422, json!({"error": "Invalid token"}));
    }
    let origin = mock.spawn().await;

    let (client, store) = client_with_token(&origin, "expired").await;
    let stats = client.get_dashboard_stats().await;

    assert_eq!(stats.total_nhs, 2);
    assert_eq!(stats.total_segments, 3);
    assert_eq!(stats.total_offices, 1);
    assert!(!client.is_authenticated());
    assert!(!store.contains_key("nh_token"));

    let requests = mock.requests();
    assert_eq!(requests.len(), 6);
    let with_token = requests
        .iter()
        .filter(|r| r.authorization.as_deref() == Some("Bearer expired"))
        .count();
    assert_eq!(with_token, 3);
}
