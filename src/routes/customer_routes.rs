use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controllers::customer_controller::CustomerController;
use crate::dto::customer_dto::{
    CustomerLoginRequest, CustomerLoginResponse, CustomerResponse, CustomerSummaryResponse,
    RegisterCustomerRequest, UpdateCustomerProfileRequest, UpdateCustomerStatusRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{JwtClaims, JwtConfig};

/// Rutas públicas: inscripción y login
pub fn create_public_customer_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Rutas protegidas: perfil del cliente autenticado y administración
pub fn create_protected_customer_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/profile", put(update_profile))
        .route("/", get(list_customers))
        .route("/:customer_id/status", put(update_status))
}

fn controller(state: &AppState) -> CustomerController {
    CustomerController::new(state.pool.clone(), JwtConfig::from(&state.config))
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    let response = controller(&state).register(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<CustomerLoginRequest>,
) -> Result<Json<CustomerLoginResponse>, AppError> {
    let response = controller(&state).login(request).await?;
    Ok(Json(response))
}

async fn get_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<JwtClaims>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer_id = claims.subject_id()?;
    let response = controller(&state).get_profile(customer_id).await?;
    Ok(Json(response))
}

async fn update_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<JwtClaims>,
    Json(request): Json<UpdateCustomerProfileRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer_id = claims.subject_id()?;
    let response = controller(&state).update_profile(customer_id, request).await?;
    Ok(Json(response))
}

async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerSummaryResponse>>, AppError> {
    let response = controller(&state).list().await?;
    Ok(Json(response))
}

async fn update_status(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    Json(request): Json<UpdateCustomerStatusRequest>,
) -> Result<Json<Value>, AppError> {
    controller(&state)
        .update_status(customer_id, &request.status)
        .await?;
    Ok(Json(json!({ "message": "Estado actualizado exitosamente" })))
}
