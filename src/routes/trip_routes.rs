use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controllers::trip_controller::TripController;
use crate::dto::trip_dto::{
    CreateTripRequest, CreateTripResponse, TripFilters, TripResponse, UpdateTripRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/:company_id/trips", post(create_trip))
        .route("/:company_id/trips", get(list_trips))
        .route("/:company_id/trips/:trip_id", get(get_trip))
        .route("/:company_id/trips/:trip_id", put(update_trip))
        .route("/:company_id/trips/:trip_id", delete(delete_trip))
}

async fn create_trip(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(request): Json<CreateTripRequest>,
) -> Result<(StatusCode, Json<CreateTripResponse>), AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.create(company_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_trips(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Query(filters): Query<TripFilters>,
) -> Result<Json<Vec<TripResponse>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.list(company_id, filters.status).await?;
    Ok(Json(response))
}

async fn get_trip(
    State(state): State<AppState>,
    Path((company_id, trip_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<TripResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.get_by_id(company_id, trip_id).await?;
    Ok(Json(response))
}

async fn update_trip(
    State(state): State<AppState>,
    Path((company_id, trip_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateTripRequest>,
) -> Result<Json<Value>, AppError> {
    let controller = TripController::new(state.pool.clone());
    controller.update(company_id, trip_id, request).await?;
    Ok(Json(json!({ "message": "Viaje actualizado exitosamente" })))
}

async fn delete_trip(
    State(state): State<AppState>,
    Path((company_id, trip_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Value>, AppError> {
    let controller = TripController::new(state.pool.clone());
    controller.delete(company_id, trip_id).await?;
    Ok(Json(json!({ "message": "Viaje eliminado exitosamente" })))
}
