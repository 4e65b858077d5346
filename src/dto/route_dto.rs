use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Request para crear una ruta
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    pub departure_station_id: Uuid,
    pub arrival_station_id: Uuid,
    pub distance: Decimal,
    #[validate(range(min = 1))]
    pub duration: i32,
    pub base_price: Decimal,
}

// Request para actualizar una ruta
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRouteRequest {
    pub departure_station_id: Option<Uuid>,
    pub arrival_station_id: Option<Uuid>,
    pub distance: Option<Decimal>,
    #[validate(range(min = 1))]
    pub duration: Option<i32>,
    pub base_price: Option<Decimal>,
}

// Response de ruta con los nombres de las estaciones
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub departure_station_id: Uuid,
    pub arrival_station_id: Uuid,
    pub departure_station_name: String,
    pub arrival_station_name: String,
    pub distance: Decimal,
    pub duration: i32,
    pub base_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
