use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controllers::station_controller::StationController;
use crate::dto::company_dto::ApiResponse;
use crate::dto::station_dto::{
    CreateStationRequest, StationResponse, StationWithMovementsResponse, UpdateStationRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_station_router() -> Router<AppState> {
    Router::new()
        .route("/:company_id/stations", post(create_station))
        .route("/:company_id/stations", get(list_stations))
        .route("/:company_id/stations/:station_id", get(get_station))
        .route("/:company_id/stations/:station_id", put(update_station))
        .route("/:company_id/stations/:station_id", delete(delete_station))
}

async fn create_station(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(request): Json<CreateStationRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let controller = StationController::new(state.pool.clone());
    let station: StationResponse = controller.create(company_id, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Estación creada exitosamente",
            "station": station,
        })),
    ))
}

async fn list_stations(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<Vec<StationWithMovementsResponse>>, AppError> {
    let controller = StationController::new(state.pool.clone());
    let response = controller.list_by_company(company_id).await?;
    Ok(Json(response))
}

async fn get_station(
    State(state): State<AppState>,
    Path((company_id, station_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<StationWithMovementsResponse>, AppError> {
    let controller = StationController::new(state.pool.clone());
    let response = controller.get_by_id(station_id, company_id).await?;
    Ok(Json(response))
}

async fn update_station(
    State(state): State<AppState>,
    Path((company_id, station_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateStationRequest>,
) -> Result<Json<ApiResponse<StationWithMovementsResponse>>, AppError> {
    let controller = StationController::new(state.pool.clone());
    let response = controller.update(station_id, company_id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_station(
    State(state): State<AppState>,
    Path((company_id, station_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Value>, AppError> {
    let controller = StationController::new(state.pool.clone());
    controller.delete(station_id, company_id).await?;
    Ok(Json(json!({ "message": "Estación eliminada exitosamente" })))
}
