use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::company_dto::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/:company_id/vehicles", post(create_vehicle))
        .route("/:company_id/vehicles", get(list_vehicles))
        .route("/:company_id/vehicles/:vehicle_id", get(get_vehicle))
        .route("/:company_id/vehicles/:vehicle_id", put(update_vehicle))
        .route("/:company_id/vehicles/:vehicle_id", delete(delete_vehicle))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleResponse>>), AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicle = controller.create(company_id, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            vehicle,
            "Vehículo creado exitosamente".to_string(),
        )),
    ))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list_by_company(company_id).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path((company_id, vehicle_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(vehicle_id, company_id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path((company_id, vehicle_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicle = controller.update(vehicle_id, company_id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        vehicle,
        "Vehículo actualizado exitosamente".to_string(),
    )))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path((company_id, vehicle_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(vehicle_id, company_id).await?;
    Ok(Json(json!({ "message": "Vehículo eliminado exitosamente" })))
}
