use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::station::StationFeatures;

// Request para crear una estación
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStationRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub capacity: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub is_main_station: bool,
    pub features: Option<StationFeatures>,
}

// Request para actualizar una estación
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStationRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub capacity: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_main_station: Option<bool>,
    pub features: Option<StationFeatures>,
    pub status: Option<String>,
}

// Response de estación
#[derive(Debug, Serialize)]
pub struct StationResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub city: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub capacity: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_main_station: bool,
    pub features: StationFeatures,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Response de estación con contadores de movimientos
#[derive(Debug, Serialize)]
pub struct StationWithMovementsResponse {
    #[serde(flatten)]
    pub station: StationResponse,
    pub departures_count: i64,
    pub arrivals_count: i64,
    pub stops_count: i64,
}
