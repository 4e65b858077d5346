use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{BookingListResponse, BookingResponse, UpdateBookingStatusRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bookings))
        .route("/:booking_id", get(get_booking))
        .route("/:booking_id/status", put(update_booking_status))
}

async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<BookingListResponse>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.get_by_id(booking_id).await?;
    Ok(Json(serde_json::json!({
        "status": "success",
        "data": response,
    })))
}

async fn update_booking_status(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller
        .update_status(booking_id, &request.status)
        .await?;
    Ok(Json(response))
}
