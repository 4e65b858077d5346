use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::{VehicleFeatures, VehicleStatus, VehicleType};

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[serde(rename = "registrationNumber")]
    pub registration_number: String,
    #[validate(length(min = 1, max = 100))]
    pub brand: String,
    #[validate(length(min = 1, max = 100))]
    pub model: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    #[validate(range(min = 1, max = 200))]
    pub capacity: i32,
    #[serde(rename = "manufactureYear")]
    #[validate(range(min = 1950, max = 2030))]
    pub manufacture_year: Option<i32>,
    pub features: Option<VehicleFeatures>,
    pub status: Option<VehicleStatus>,
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[serde(rename = "registrationNumber")]
    pub registration_number: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub brand: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,
    #[serde(rename = "type")]
    pub vehicle_type: Option<VehicleType>,
    #[validate(range(min = 1, max = 200))]
    pub capacity: Option<i32>,
    #[serde(rename = "manufactureYear")]
    #[validate(range(min = 1950, max = 2030))]
    pub manufacture_year: Option<i32>,
    pub features: Option<VehicleFeatures>,
    pub status: Option<VehicleStatus>,
}

// Estadísticas de viajes del vehículo
#[derive(Debug, Serialize)]
pub struct VehicleStatistics {
    #[serde(rename = "completedTrips")]
    pub completed_trips: i64,
    #[serde(rename = "activeTrips")]
    pub active_trips: i64,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    #[serde(rename = "registrationNumber")]
    pub registration_number: String,
    pub brand: String,
    pub model: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub capacity: i32,
    #[serde(rename = "manufactureYear")]
    pub manufacture_year: Option<i32>,
    pub features: VehicleFeatures,
    pub status: VehicleStatus,
    pub statistics: Option<VehicleStatistics>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
