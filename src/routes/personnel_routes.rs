use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controllers::personnel_controller::PersonnelController;
use crate::dto::personnel_dto::{
    CreatePersonnelRequest, PersonnelFilters, PersonnelResponse, UpdatePersonnelRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_personnel_router() -> Router<AppState> {
    Router::new()
        .route("/:company_id/personnel", post(create_personnel))
        .route("/:company_id/personnel", get(list_personnel))
        .route("/:company_id/personnel/:personnel_id", get(get_personnel))
        .route("/:company_id/personnel/:personnel_id", put(update_personnel))
        .route("/:company_id/personnel/:personnel_id", delete(delete_personnel))
}

async fn create_personnel(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(request): Json<CreatePersonnelRequest>,
) -> Result<(StatusCode, Json<PersonnelResponse>), AppError> {
    let controller = PersonnelController::new(state.pool.clone());
    let response = controller.create(company_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_personnel(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Query(filters): Query<PersonnelFilters>,
) -> Result<Json<Vec<PersonnelResponse>>, AppError> {
    let controller = PersonnelController::new(state.pool.clone());
    let response = controller.list_by_company(company_id, filters).await?;
    Ok(Json(response))
}

async fn get_personnel(
    State(state): State<AppState>,
    Path((company_id, personnel_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<PersonnelResponse>, AppError> {
    let controller = PersonnelController::new(state.pool.clone());
    let response = controller.get_by_id(personnel_id, company_id).await?;
    Ok(Json(response))
}

async fn update_personnel(
    State(state): State<AppState>,
    Path((company_id, personnel_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdatePersonnelRequest>,
) -> Result<Json<PersonnelResponse>, AppError> {
    let controller = PersonnelController::new(state.pool.clone());
    let response = controller.update(personnel_id, company_id, request).await?;
    Ok(Json(response))
}

async fn delete_personnel(
    State(state): State<AppState>,
    Path((company_id, personnel_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Value>, AppError> {
    let controller = PersonnelController::new(state.pool.clone());
    controller.delete(personnel_id, company_id).await?;
    Ok(Json(json!({ "message": "Personal eliminado exitosamente" })))
}
