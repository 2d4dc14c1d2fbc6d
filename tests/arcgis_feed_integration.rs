//! Integration tests for the ArcGIS incident feed adapter against a mock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fireaid::adapters::arcgis::ArcGisIncidentFeed;
use fireaid::config::FeedConfig;
use fireaid::domain::foundation::ErrorCode;
use fireaid::domain::incident::IncidentQuery;
use fireaid::ports::IncidentFeed;

const LAYER_PATH: &str = "/arcgis/rest/services/Incidents/FeatureServer/0";

fn feed_for(server: &MockServer, order_by: Option<&str>) -> ArcGisIncidentFeed {
    let config = FeedConfig {
        layer_url: format!("{}{}", server.uri(), LAYER_PATH),
        order_by_fields: order_by.map(str::to_string),
        timeout_secs: 1,
        ..FeedConfig::default()
    };
    ArcGisIncidentFeed::new(config).unwrap()
}

fn query_path() -> String {
    format!("{}/query", LAYER_PATH)
}

// =============================================================================
// Request shape
// =============================================================================

#[tokio::test]
async fn sends_fixed_params_and_state_clause() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(query_path()))
        .and(query_param("f", "json"))
        .and(query_param("where", "1=1 AND POOState = 'US-CA'"))
        .and(query_param("returnGeometry", "false"))
        .and(query_param("resultRecordCount", "10"))
        .and(query_param(
            "outFields",
            "IncidentName,POOState,IncidentTypeCategory,IncidentSize,PercentContained,ModifiedOnDateTime,POOCounty,FireDiscoveryDateTime",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"features": []})))
        .expect(1)
        .mount(&server)
        .await;

    let feed = feed_for(&server, None);
    let result = feed
        .search(&IncidentQuery::default().with_state(Some("ca")))
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn sends_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"features": []})))
        .mount(&server)
        .await;

    feed_for(&server, None)
        .search(&IncidentQuery::default())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let agent = requests[0].headers.get("user-agent").unwrap();
    assert_eq!(agent.to_str().unwrap(), "FireGPT/1.0");
}

#[tokio::test]
async fn ordering_is_sent_only_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"features": []})))
        .mount(&server)
        .await;

    feed_for(&server, Some("FireDiscoveryDateTime DESC"))
        .search(&IncidentQuery::default())
        .await
        .unwrap();
    feed_for(&server, None)
        .search(&IncidentQuery::default())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let ordering = |i: usize| {
        requests[i]
            .url
            .query_pairs()
            .find(|(k, _)| k == "orderByFields")
            .map(|(_, v)| v.into_owned())
    };
    assert_eq!(ordering(0).as_deref(), Some("FireDiscoveryDateTime DESC"));
    assert_eq!(ordering(1), None);
}

// =============================================================================
// Response handling
// =============================================================================

#[tokio::test]
async fn reshapes_features_keeping_null_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "features": [
                {"attributes": {
                    "IncidentName": "Park",
                    "POOState": "US-CA",
                    "IncidentSize": 429603.0,
                    "PercentContained": null,
                    "FireDiscoveryDateTime": 1721844600000_i64
                }},
                {}
            ]
        })))
        .mount(&server)
        .await;

    let result = feed_for(&server, None)
        .search(&IncidentQuery::default())
        .await
        .unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].name, Some(json!("Park")));
    assert_eq!(result[0].percent_contained, None);
    assert_eq!(result[0].discovered, Some(json!(1721844600000_i64)));

    let empty = serde_json::to_value(&result[1]).unwrap();
    assert_eq!(empty.as_object().unwrap().len(), 8);
    assert!(empty.as_object().unwrap().values().all(|v| v.is_null()));
}

#[tokio::test]
async fn null_attribute_bag_becomes_all_null_feature() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "features": [
                {"attributes": null},
                {"attributes": {"IncidentName": "Creek"}}
            ]
        })))
        .mount(&server)
        .await;

    let result = feed_for(&server, None)
        .search(&IncidentQuery::default())
        .await
        .unwrap();

    assert_eq!(result.len(), 2);
    let first = serde_json::to_value(&result[0]).unwrap();
    assert_eq!(first.as_object().unwrap().len(), 8);
    assert!(first.as_object().unwrap().values().all(|v| v.is_null()));
    assert_eq!(result[1].name, Some(json!("Creek")));
}

#[tokio::test]
async fn null_feature_list_is_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"features": null})))
        .mount(&server)
        .await;

    let result = feed_for(&server, None)
        .search(&IncidentQuery::default())
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn in_band_error_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"code": 400, "message": "'Invalid field: Foo' parameter is invalid"}
        })))
        .mount(&server)
        .await;

    let err = feed_for(&server, Some("Foo DESC"))
        .search(&IncidentQuery::default())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::UpstreamError);
    assert!(err.message.starts_with("ArcGIS error:"));
    assert!(err.message.contains("Invalid field"));
}

#[tokio::test]
async fn http_error_is_upstream_error_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = feed_for(&server, None)
        .search(&IncidentQuery::default())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::UpstreamError);
    assert!(err.message.contains("503"));
    assert!(err.message.contains("maintenance"));
    assert_eq!(err.details.get("status").map(String::as_str), Some("503"));
}

#[tokio::test]
async fn undecodable_body_is_upstream_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = feed_for(&server, None)
        .search(&IncidentQuery::default())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::UpstreamUnavailable);
}

#[tokio::test]
async fn slow_feed_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(query_path()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"features": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = feed_for(&server, None)
        .search(&IncidentQuery::default())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::UpstreamUnavailable);
    assert!(err.message.contains("timed out"));
}

#[tokio::test]
async fn unreachable_feed_is_upstream_unavailable() {
    let config = FeedConfig {
        layer_url: "http://127.0.0.1:1/FeatureServer/0".to_string(),
        timeout_secs: 2,
        ..FeedConfig::default()
    };
    let err = ArcGisIncidentFeed::new(config)
        .unwrap()
        .search(&IncidentQuery::default())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::UpstreamUnavailable);
}
