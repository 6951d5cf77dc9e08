//! End-to-end flow tests covering complete user scenarios.

mod common;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use swatchbook::models::{AppConfig, SortBy};

use common::{fixtures, MockHttpServer, TestApp};

#[tokio::test]
async fn test_reload_then_browse() {
    let server = MockHttpServer::start().await;
    server.mock_get_json("/colors.json", fixtures::colors_json()).await;
    server.mock_get_json("/segments.json", fixtures::segments_json()).await;

    let app = TestApp::with_config(AppConfig {
        colors_url: Some(server.url_for("/colors.json")),
        segments_url: Some(server.url_for("/segments.json")),
        sort_by: SortBy::Brightness,
        ..AppConfig::default()
    });

    // Step 1: nothing loaded yet
    assert_eq!(
        common::color_hexes(&app.get("/api/colors").await),
        Vec::<String>::new()
    );

    // Step 2: reload from the configured locations
    let response = app.post("/api/reload").await;
    common::assert_ok(&response);
    let report: Value = response.json();
    assert_eq!(report["colors"], json!({"success": true, "count": 5}));
    assert_eq!(report["segments"], json!({"success": true, "count": 3}));
    assert!(report["finished_at"].is_string());

    // Step 3: browse in the configured order
    assert_eq!(
        common::color_hexes(&app.get("/api/colors").await),
        vec!["#FFFFFF", "#00FF00", "#FF0000", "#0000FF", "#000000"]
    );

    // Step 4: pick the closest color to something typed in
    let response = app.get("/api/match?color=%23EEE").await;
    let json: Value = response.json();
    assert_eq!(json["index"], 0);
    assert_eq!(json["entry"]["name"], "White");
}

#[tokio::test]
async fn test_reload_reports_failures() {
    let server = MockHttpServer::start().await;
    server.mock_get_json("/segments.json", fixtures::segments_json()).await;

    let app = TestApp::with_config(AppConfig {
        colors_url: Some(server.url_for("/colors.json")),
        segments_url: Some(server.url_for("/segments.json")),
        ..AppConfig::default()
    });

    let response = app.post("/api/reload").await;
    common::assert_ok(&response);
    let report: Value = response.json();

    assert_eq!(report["colors"]["success"], false);
    assert!(report["colors"]["error"]
        .as_str()
        .unwrap()
        .contains("returned HTTP 404"));
    assert_eq!(report["segments"]["success"], true);
}

#[tokio::test]
async fn test_reload_without_locations() {
    let app = TestApp::new();

    let response = app.post("/api/reload").await;
    let report: Value = response.json();

    assert_eq!(report["colors"], json!({"success": false, "count": 0}));
    assert_eq!(report["segments"], json!({"success": false, "count": 0}));
}

#[tokio::test]
async fn test_sorted_colors_are_cached() {
    let app = TestApp::with_library(&[("#FF0000", "Red"), ("#00FF00", "Green")], &[]).await;

    let first = common::color_hexes(&app.get("/api/colors?sort=hue").await);
    let second = common::color_hexes(&app.get("/api/colors").await);
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    assert_eq!(app.library.read().await.sort_runs(), 1);

    app.library
        .write()
        .await
        .set_colors([("#0000FF", "Blue"), ("#FF0000", "Red")]);
    let third = common::color_hexes(&app.get("/api/colors").await);
    assert_eq!(third, vec!["#0000FF", "#FF0000"]);
    assert_eq!(app.library.read().await.sort_runs(), 2);
}

#[tokio::test]
async fn test_grouped_view_flow() {
    let app = TestApp::with_library(fixtures::NAMED_COLORS, fixtures::GRAY_SEGMENTS).await;

    {
        let mut library = app.library.write().await;
        swatchbook::services::presenter::apply_view_settings(
            &mut library,
            true,
            swatch_core::SortMetric::Brightness,
            true,
        );
    }

    let response = app.get("/api/gradient").await;
    let json: Value = response.json();
    assert_eq!(json["stops"], json!(fixtures::GRAY_SEGMENTS));

    let response = app.get("/api/colors").await;
    let json: Value = response.json();
    assert_eq!(json["sort_by"], "segment");
}
