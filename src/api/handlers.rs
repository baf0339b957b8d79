//! REST API handlers for the dashboard
//!
//! These handlers use the shared DashboardService.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::service::DashboardService;
use crate::loader::DatasetStats;
use crate::views::{self, MenuEntry, View, ViewPayload, ViewRequest};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type AppState = Arc<DashboardService>;

/// GET /api/v1/health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// GET /api/v1/stats
pub async fn get_stats(State(service): State<AppState>) -> Json<DatasetStats> {
    Json(service.stats())
}

/// GET /api/v1/menu
pub async fn get_menu() -> Json<Vec<MenuEntry>> {
    Json(views::menu())
}

/// GET /api/v1/views/:view
pub async fn get_view(
    State(service): State<AppState>,
    Path(view): Path<String>,
    Query(request): Query<ViewRequest>,
) -> Result<Json<ViewPayload>, (StatusCode, Json<ErrorResponse>)> {
    match view.parse::<View>() {
        Ok(view) => Ok(Json(service.render(view, &request))),
        Err(e) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}
