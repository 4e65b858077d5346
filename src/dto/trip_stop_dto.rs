use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Request para agregar un arrêt a un viaje
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTripStopRequest {
    pub station_id: Uuid,
    pub arrival_time: DateTime<Utc>,
    pub departure_time: DateTime<Utc>,
    #[validate(range(min = 1))]
    pub stop_order: i32,
    pub price: Option<Decimal>,
    pub available_seats: Option<i32>,
    pub platform: Option<String>,
    pub notes: Option<String>,
}

// Request para actualizar un arrêt
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTripStopRequest {
    pub station_id: Option<Uuid>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub departure_time: Option<DateTime<Utc>>,
    #[validate(range(min = 1))]
    pub stop_order: Option<i32>,
    pub price: Option<Decimal>,
    pub available_seats: Option<i32>,
    #[validate(range(min = 0))]
    pub boarding_count: Option<i32>,
    #[validate(range(min = 0))]
    pub alighting_count: Option<i32>,
    pub status: Option<String>,
    pub platform: Option<String>,
    pub notes: Option<String>,
}

// Response de arrêt con la información de su estación
#[derive(Debug, Serialize)]
pub struct TripStopResponse {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub station_id: Uuid,
    pub arrival_time: DateTime<Utc>,
    pub departure_time: DateTime<Utc>,
    pub stop_order: i32,
    pub price: Option<Decimal>,
    pub available_seats: Option<i32>,
    pub boarding_count: i32,
    pub alighting_count: i32,
    pub status: String,
    pub platform: Option<String>,
    pub notes: Option<String>,
    pub station_name: String,
    pub station_city: String,
    pub station_address: Option<String>,
    pub station_latitude: Option<f64>,
    pub station_longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Estadísticas de los arrêts de un viaje
#[derive(Debug, Serialize)]
pub struct TripStopStatsResponse {
    pub total_stops: i64,
    pub total_boardings: i64,
    pub total_alightings: i64,
    pub min_available_seats: Option<i32>,
    pub completed_stops: i64,
    pub cancelled_stops: i64,
}
