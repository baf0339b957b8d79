mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use olist_dashboard::api::{self, DashboardService};
use olist_dashboard::config::DashboardConfig;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app(dir: &tempfile::TempDir) -> axum::Router {
    let config = DashboardConfig {
        data_dir: dir.path().to_path_buf(),
        histogram_bins: 4,
        ..Default::default()
    };
    let service = DashboardService::from_config(&config).unwrap();
    api::router(Arc::new(service))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let dir = common::dataset_dir();
    let (status, body) = get(app(&dir), "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_stats_and_menu() {
    let dir = common::dataset_dir();
    let (status, stats) = get(app(&dir), "/api/v1/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["orders"], 5);
    assert_eq!(stats["geolocation"], 3);

    let (_, menu) = get(app(&dir), "/api/v1/menu").await;
    let keys: Vec<&str> = menu
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["key"].as_str().unwrap())
        .collect();
    assert_eq!(
        keys,
        vec!["home", "delivery-tracking", "products", "sellers", "transactions"]
    );
}

#[tokio::test]
async fn test_delivery_view() {
    let dir = common::dataset_dir();
    let (status, body) = get(app(&dir), "/api/v1/views/delivery-tracking").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["view"], "delivery-tracking");
    assert_eq!(body["summary"]["orders"], 2);
    assert_eq!(body["summary"]["shortest_days"], 4);
    assert_eq!(body["summary"]["longest_days"], 12);
    assert_eq!(body["delivery_time_histogram"].as_array().unwrap().len(), 4);
    assert_eq!(body["order_status"][0]["name"], "shipped");
}

#[tokio::test]
async fn test_products_view_selection() {
    let dir = common::dataset_dir();
    let (_, body) = get(app(&dir), "/api/v1/views/products?category=toys").await;
    assert_eq!(body["selected_category"], "toys");
    assert_eq!(body["selected_category_sales"]["status"], "found");
    assert_eq!(body["selected_category_sales"]["value"], 160.0);

    let (status, body) = get(app(&dir), "/api/v1/views/products?category=garden_tools").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected_category_sales"]["status"], "not_found");
}

#[tokio::test]
async fn test_sellers_view() {
    let dir = common::dataset_dir();
    let (_, body) = get(app(&dir), "/api/v1/views/sellers?city=sao%20paulo").await;
    assert_eq!(body["heat_points"].as_array().unwrap().len(), 3);
    assert_eq!(body["sellers_in_city"]["value"], serde_json::json!(["s2", "s3"]));

    let (_, body) = get(app(&dir), "/api/v1/views/sellers?city=recife").await;
    assert_eq!(body["sellers_in_city"]["status"], "not_found");
    assert_eq!(body["sellers_in_city"]["message"], "No sellers found for this city.");
}

#[tokio::test]
async fn test_transactions_view() {
    let dir = common::dataset_dir();
    let (_, body) = get(app(&dir), "/api/v1/views/transactions").await;
    let months = body["monthly_sales"].as_array().unwrap();
    assert_eq!(months.len(), 2);
    assert_eq!(months[0]["month"], "2017-01-01");
    assert_eq!(months[1]["month"], "2017-02-01");
    assert_eq!(body["payment_types"][0]["name"], "credit_card");
}

#[tokio::test]
async fn test_unknown_view() {
    let dir = common::dataset_dir();
    let (status, body) = get(app(&dir), "/api/v1/views/reports").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("reports"));
}
