use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::trip::TripStatus;

// Request para cambiar el estado de una reserva
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

// Response de reserva con el join completo cliente/viaje/ruta/vehículo
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking_id: Uuid,
    pub trip_id: Uuid,
    pub customer_id: Uuid,
    pub total_amount: Decimal,
    pub seats_booked: i32,
    pub passenger_info: serde_json::Value,
    pub booking_status: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub price: Decimal,
    pub trip_status: TripStatus,
    pub departure_city: String,
    pub departure_address: Option<String>,
    pub arrival_city: String,
    pub arrival_address: Option<String>,
    pub registration_number: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub distance: Decimal,
    pub duration: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Envoltura de listado
#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    pub status: String,
    pub data: Vec<BookingResponse>,
}
