//! Integration tests for the library endpoints.

mod common;

use axum::http::StatusCode;
use common::{fixtures, TestApp};
use pretty_assertions::assert_eq;
use serde_json::Value;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.get("/health").await;
    common::assert_ok(&response);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_empty_library_lists_nothing() {
    let app = TestApp::new();
    let response = app.get("/api/colors").await;

    let json: Value = response.json();
    assert_eq!(json["sort_by"], "segment");
    assert_eq!(json["ascending"], true);
    assert_eq!(common::color_hexes(&response), Vec::<String>::new());
}

#[tokio::test]
async fn test_colors_by_brightness() {
    let app = TestApp::with_library(fixtures::NAMED_COLORS, &[]).await;

    let response = app.get("/api/colors?sort=brightness").await;
    assert_eq!(
        common::color_hexes(&response),
        vec!["#FFFFFF", "#00FF00", "#FF0000", "#0000FF", "#000000"]
    );

    let response = app.get("/api/colors?sort=brightness&ascending=false").await;
    assert_eq!(
        common::color_hexes(&response),
        vec!["#000000", "#0000FF", "#FF0000", "#00FF00", "#FFFFFF"]
    );
}

#[tokio::test]
async fn test_colors_by_hue_keeps_ties_in_load_order() {
    let app = TestApp::with_library(fixtures::NAMED_COLORS, &[]).await;

    let response = app.get("/api/colors?sort=hue").await;
    assert_eq!(
        common::color_hexes(&response),
        vec!["#0000FF", "#00FF00", "#FF0000", "#FFFFFF", "#000000"]
    );
}

#[tokio::test]
async fn test_sort_settings_stick() {
    let app = TestApp::with_library(fixtures::NAMED_COLORS, &[]).await;

    app.get("/api/colors?sort=hue&ascending=false").await;
    let response = app.get("/api/colors").await;

    let json: Value = response.json();
    assert_eq!(json["sort_by"], "hue");
    assert_eq!(json["ascending"], false);

    let library = app.library.read().await;
    assert_eq!(library.sort_runs(), 1);
}

#[tokio::test]
async fn test_colors_by_segment() {
    let app = TestApp::with_library(
        &[
            ("#EEEEEE", "Paper"),
            ("#111111", "Ink"),
            ("#999999", "Light gray"),
            ("#777777", "Dark gray"),
        ],
        fixtures::GRAY_SEGMENTS,
    )
    .await;

    let response = app.get("/api/colors").await;
    assert_eq!(
        common::color_hexes(&response),
        vec!["#111111", "#777777", "#999999", "#EEEEEE"]
    );

    let response = app.get("/api/colors?ascending=false").await;
    assert_eq!(
        common::color_hexes(&response),
        vec!["#EEEEEE", "#999999", "#777777", "#111111"]
    );
}

#[tokio::test]
async fn test_entries_carry_display_data() {
    let app = TestApp::with_library(&[("#FFFFFF", "White"), ("#000000", "")], &[]).await;

    let response = app.get("/api/colors?sort=brightness&selected=1").await;
    common::assert_ok(&response);
    let json: Value = response.json();
    let colors = json["colors"].as_array().unwrap();

    assert_eq!(colors[0]["name"], "White");
    assert_eq!(colors[0]["text_color"], "dark");
    assert_eq!(colors[0]["selected"], false);
    assert_eq!(colors[1]["name"], "#000000");
    assert_eq!(colors[1]["text_color"], "light");
    assert_eq!(colors[1]["rgb"], serde_json::json!([0, 0, 0]));
    assert_eq!(colors[1]["selected"], true);
}

#[tokio::test]
async fn test_unknown_sort_is_bad_request() {
    let app = TestApp::new();
    let response = app.get("/api/colors?sort=rainbow").await;
    common::assert_api_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_groups() {
    let app = TestApp::with_library(fixtures::NAMED_COLORS, fixtures::GRAY_SEGMENTS).await;

    let response = app.get("/api/colors/groups").await;
    common::assert_ok(&response);
    let json: Value = response.json();

    assert_eq!(json["segments"], serde_json::json!(fixtures::GRAY_SEGMENTS));

    let groups: Vec<Vec<String>> = serde_json::from_value(json["groups"].clone()).unwrap();
    assert_eq!(groups.len(), 3);

    let mut dark = groups[0].clone();
    dark.sort();
    assert_eq!(dark, vec!["#000000", "#0000FF", "#FF0000"]);
    assert!(groups[1].is_empty());
    let mut light = groups[2].clone();
    light.sort();
    assert_eq!(light, vec!["#00FF00", "#FFFFFF"]);
}

#[tokio::test]
async fn test_groups_without_segments() {
    let app = TestApp::with_library(fixtures::NAMED_COLORS, &[]).await;

    let response = app.get("/api/colors/groups").await;
    let json: Value = response.json();
    let groups: Vec<Vec<String>> = serde_json::from_value(json["groups"].clone()).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), fixtures::NAMED_COLORS.len());
}

#[tokio::test]
async fn test_gradient_follows_sort() {
    let app = TestApp::with_library(fixtures::NAMED_COLORS, fixtures::GRAY_SEGMENTS).await;

    let response = app.get("/api/gradient").await;
    common::assert_ok(&response);
    let json: Value = response.json();
    assert_eq!(json["stops"], serde_json::json!(fixtures::GRAY_SEGMENTS));

    app.get("/api/colors?sort=brightness").await;
    let response = app.get("/api/gradient").await;
    let json: Value = response.json();
    assert_eq!(
        json["stops"],
        serde_json::json!(["#FFFFFF", "#00FF00", "#FF0000", "#0000FF", "#000000"])
    );
}

#[tokio::test]
async fn test_openapi_lists_all_paths() {
    use utoipa::OpenApi;

    let doc = swatchbook::api::ApiDoc::openapi();
    for path in [
        "/api/colors",
        "/api/colors/groups",
        "/api/gradient",
        "/api/match",
        "/api/blend",
        "/api/validate",
        "/api/reload",
    ] {
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
