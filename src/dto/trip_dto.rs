use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::trip::TripStatus;

// Request para crear un viaje
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTripRequest {
    pub route_id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub price: Decimal,
    #[validate(range(min = 1))]
    pub available_seats: i32,
}

// Request para actualizar un viaje (sparse: solo los campos presentes)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTripRequest {
    pub route_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub status: Option<TripStatus>,
    pub price: Option<Decimal>,
    #[validate(range(min = 0))]
    pub available_seats: Option<i32>,
}

// Filtro de listado
#[derive(Debug, Deserialize)]
pub struct TripFilters {
    pub status: Option<String>,
}

// Sub-objetos anidados de la response de viaje
#[derive(Debug, Serialize)]
pub struct TripRouteInfo {
    pub departure_station_name: String,
    pub arrival_station_name: String,
    pub distance: Decimal,
    pub duration: i32,
}

#[derive(Debug, Serialize)]
pub struct TripVehicleInfo {
    pub registration_number: String,
    pub brand: String,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct TripDriverInfo {
    pub name: String,
    pub phone: String,
    pub license_number: String,
}

// Response de viaje con la información anidada para el frontend
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub route_id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub status: TripStatus,
    pub price: Decimal,
    pub available_seats: i32,
    pub route: TripRouteInfo,
    pub vehicle: TripVehicleInfo,
    pub driver: TripDriverInfo,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Acuse de creación de viaje
#[derive(Debug, Serialize)]
pub struct CreateTripResponse {
    pub message: String,
    pub id: Uuid,
}
