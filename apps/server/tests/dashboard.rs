use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use rust_decimal_macros::dec;
use tickerboard_market_data::{FailureKind, FixtureProvider};
use tickerboard_server::{api::app_router, build_state_with_provider, config::Config};
use tower::ServiceExt;

fn test_config() -> Config {
    Config::from_lookup(|_| None).unwrap()
}

fn test_provider() -> Arc<FixtureProvider> {
    Arc::new(
        FixtureProvider::new()
            .with_closes("BHP.AX", &[dec!(45.00)], &[dec!(44.00), dec!(45.10)])
            .with_closes("CBA.AX", &[dec!(120.00)], &[dec!(120.00), dec!(121.00)])
            .with_closes("RIO.AX", &[], &[dec!(118.00), dec!(119.50)])
            .with_closes("AAPL", &[dec!(105.00)], &[dec!(100.00), dec!(104.00)])
            .with_failure("TSLA", FailureKind::Network)
            .with_closes("MSFT", &[dec!(95.00)], &[dec!(100.00), dec!(96.00)]),
    )
}

fn test_router(provider: Arc<FixtureProvider>) -> Router {
    let config = test_config();
    let state = build_state_with_provider(&config, provider);
    app_router(state, &config)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_works() {
    let (status, _, body) = get(test_router(test_provider()), "/api/v1/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn data_returns_every_entry_in_watchlist_order() {
    let (status, content_type, body) = get(test_router(test_provider()), "/data").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/json"));

    let names = [
        "BHP (ASX)",
        "CBA (ASX)",
        "RIO (ASX)",
        "Apple (US)",
        "Tesla (US)",
        "Microsoft (US)",
    ];
    let positions: Vec<usize> = names
        .iter()
        .map(|name| body.find(&format!("\"{}\"", name)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["Apple (US)"]["symbol"], "AAPL");
    assert_eq!(json["Apple (US)"]["price"], 105.0);
    assert_eq!(json["Apple (US)"]["previous_close"], 100.0);
    assert_eq!(json["Apple (US)"]["percent_change"], "+5.00%");
    assert_eq!(json["Apple (US)"]["trend"], "up");
    assert_eq!(json["Apple (US)"]["region"], "us");

    assert_eq!(json["CBA (ASX)"]["percent_change"], "+0.00%");
    assert_eq!(json["CBA (ASX)"]["trend"], "flat");

    assert_eq!(json["RIO (ASX)"]["price"], "N/A");
    assert_eq!(json["RIO (ASX)"]["percent_change"], "N/A");

    assert_eq!(json["Tesla (US)"]["price"], "Error");
    assert_eq!(json["Tesla (US)"]["trend"], "flat");
    assert_eq!(json["Tesla (US)"]["failure"], "network");

    assert_eq!(json["Microsoft (US)"]["percent_change"], "-5.00%");
    assert_eq!(json["Microsoft (US)"]["trend"], "down");
}

#[tokio::test]
async fn data_applies_query_and_region_filter_before_fetching() {
    let provider = test_provider();
    let (status, _, body) = get(test_router(provider.clone()), "/data?q=bhp&filter=asx").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["BHP (ASX)"]);
    assert_eq!(provider.requested_symbols(), vec!["BHP.AX", "BHP.AX"]);
}

#[tokio::test]
async fn us_filter_excludes_asx_entries() {
    let (_, _, body) = get(test_router(test_provider()), "/data?filter=US").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let board = json.as_object().unwrap();
    assert_eq!(board.len(), 3);
    assert!(board.values().all(|record| record["region"] == "us"));
}

#[tokio::test]
async fn unknown_filter_is_bad_request() {
    let provider = test_provider();
    let (status, _, body) = get(test_router(provider.clone()), "/data?filter=eu").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["code"], 400);
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn index_renders_tiles() {
    let (status, content_type, body) = get(test_router(test_provider()), "/?q=apple").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(body.contains(r#"data-name="Apple (US)""#));
    assert!(body.contains(r#"<span class="value">105.00</span><span class="percent">(+5.00%)</span>"#));
    assert!(!body.contains(r#"data-name="Tesla (US)""#));
    assert!(body.contains(r#"value="apple""#));
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let (status, _, body) = get(test_router(test_provider()), "/quotes").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["message"], "Not Found");
}
