use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controllers::trip_stop_controller::TripStopController;
use crate::dto::trip_stop_dto::{
    CreateTripStopRequest, TripStopResponse, TripStopStatsResponse, UpdateTripStopRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_stop_router() -> Router<AppState> {
    Router::new()
        .route("/:company_id/trips/:trip_id/stops", get(list_stops))
        .route("/:company_id/trips/:trip_id/stops", post(create_stop))
        .route("/:company_id/trips/:trip_id/stops/stats", get(stop_stats))
        .route("/:company_id/trips/:trip_id/stops/:stop_id", put(update_stop))
        .route("/:company_id/trips/:trip_id/stops/:stop_id", delete(delete_stop))
}

async fn list_stops(
    State(state): State<AppState>,
    Path((company_id, trip_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<TripStopResponse>>, AppError> {
    let controller = TripStopController::new(state.pool.clone());
    let response = controller.list(company_id, trip_id).await?;
    Ok(Json(response))
}

async fn create_stop(
    State(state): State<AppState>,
    Path((company_id, trip_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<CreateTripStopRequest>,
) -> Result<(StatusCode, Json<TripStopResponse>), AppError> {
    let controller = TripStopController::new(state.pool.clone());
    let response = controller.create(company_id, trip_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_stop(
    State(state): State<AppState>,
    Path((company_id, trip_id, stop_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(request): Json<UpdateTripStopRequest>,
) -> Result<Json<TripStopResponse>, AppError> {
    let controller = TripStopController::new(state.pool.clone());
    let response = controller
        .update(company_id, trip_id, stop_id, request)
        .await?;
    Ok(Json(response))
}

async fn delete_stop(
    State(state): State<AppState>,
    Path((company_id, trip_id, stop_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<Value>, AppError> {
    let controller = TripStopController::new(state.pool.clone());
    controller.delete(company_id, trip_id, stop_id).await?;
    Ok(Json(json!({ "message": "Arrêt eliminado exitosamente" })))
}

async fn stop_stats(
    State(state): State<AppState>,
    Path((company_id, trip_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<TripStopStatsResponse>, AppError> {
    let controller = TripStopController::new(state.pool.clone());
    let response = controller.stats(company_id, trip_id).await?;
    Ok(Json(response))
}
