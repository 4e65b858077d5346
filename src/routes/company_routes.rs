use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controllers::company_controller::CompanyController;
use crate::dto::company_dto::{
    CompanyDetailResponse, CompanyResponse, CreateCompanyRequest, UpdateCompanyRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_company_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_company))
        .route("/", get(list_companies))
        .route("/:company_id", get(get_company))
        .route("/:company_id", put(update_company))
        .route("/:company_id", delete(delete_company))
        .route("/:company_id/details", get(get_company))
}

async fn create_company(
    State(state): State<AppState>,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<(axum::http::StatusCode, Json<Value>), AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let company = controller.create(request).await?;
    Ok((
        axum::http::StatusCode::CREATED,
        Json(json!({
            "message": "Compañía creada exitosamente",
            "company": company,
        })),
    ))
}

async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_company(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<CompanyDetailResponse>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.get_detail(company_id).await?;
    Ok(Json(response))
}

async fn update_company(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(request): Json<UpdateCompanyRequest>,
) -> Result<Json<Value>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    controller.update(company_id, request).await?;
    Ok(Json(json!({ "message": "Compañía actualizada exitosamente" })))
}

async fn delete_company(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    controller.delete(company_id).await?;
    Ok(Json(json!({ "message": "Compañía eliminada exitosamente" })))
}
