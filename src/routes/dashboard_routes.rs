use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;

use crate::controllers::dashboard_controller::DashboardController;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats))
        .route("/customer-growth", get(customer_growth))
        .route("/company-stats", get(company_stats))
        .route("/trip-stats", get(trip_stats))
        .route("/recent-activities", get(recent_activities))
}

async fn stats(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.stats().await?))
}

async fn customer_growth(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.customer_growth().await?))
}

async fn company_stats(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.company_stats().await?))
}

async fn trip_stats(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.trip_stats().await?))
}

async fn recent_activities(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.recent_activities().await?))
}
