use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;

use crate::controllers::analytics_controller::AnalyticsController;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_analytics_router() -> Router<AppState> {
    Router::new()
        .route("/booking-stats", get(booking_stats))
        .route("/company-performance", get(company_performance))
        .route("/revenue-over-time", get(revenue_over_time))
}

async fn booking_stats(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let controller = AnalyticsController::new(state.pool.clone());
    Ok(Json(controller.booking_stats().await?))
}

async fn company_performance(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let controller = AnalyticsController::new(state.pool.clone());
    Ok(Json(controller.company_performance().await?))
}

async fn revenue_over_time(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let controller = AnalyticsController::new(state.pool.clone());
    Ok(Json(controller.revenue_over_time().await?))
}
