use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controllers::route_controller::RouteController;
use crate::dto::route_dto::{CreateRouteRequest, RouteResponse, UpdateRouteRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/:company_id/routes", post(create_route))
        .route("/:company_id/routes", get(list_routes))
        .route("/:company_id/routes/:route_id", get(get_route))
        .route("/:company_id/routes/:route_id", put(update_route))
        .route("/:company_id/routes/:route_id", delete(delete_route))
}

async fn create_route(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(request): Json<CreateRouteRequest>,
) -> Result<(StatusCode, Json<RouteResponse>), AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.create(company_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_routes(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<Vec<RouteResponse>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.list_by_company(company_id).await?;
    Ok(Json(response))
}

async fn get_route(
    State(state): State<AppState>,
    Path((company_id, route_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<RouteResponse>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.get_by_id(route_id, company_id).await?;
    Ok(Json(response))
}

async fn update_route(
    State(state): State<AppState>,
    Path((company_id, route_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateRouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.update(route_id, company_id, request).await?;
    Ok(Json(response))
}

async fn delete_route(
    State(state): State<AppState>,
    Path((company_id, route_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Value>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    controller.delete(route_id, company_id).await?;
    Ok(Json(json!({ "message": "Ruta eliminada exitosamente" })))
}
