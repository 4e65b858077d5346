use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::personnel::PersonnelStatus;
use crate::models::station::StationFeatures;
use crate::models::trip::TripStatus;
use crate::models::vehicle::VehicleStatus;

// Request para crear una compañía
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub alternate_email: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub phone: String,
    pub alternate_phone: Option<String>,
    pub whatsapp: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub postal_code: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub registration_number: Option<String>,
    pub tax_number: Option<String>,
    pub legal_status: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub manager_name: Option<String>,
    pub manager_position: Option<String>,
    pub insurance_provider: Option<String>,
    pub insurance_policy_number: Option<String>,
    pub insurance_expiry_date: Option<NaiveDate>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub coverage_areas: Vec<String>,
    #[serde(default)]
    pub transport_types: Vec<String>,
}

// Request para actualizar una compañía
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub logo_url: Option<String>,
    pub status: Option<String>,
}

// Ubicación GPS anidada en las responses
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub latitude: f64,
    pub longitude: f64,
}

// Response de compañía con sus agregados
#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub alternate_email: Option<String>,
    pub phone: String,
    pub alternate_phone: Option<String>,
    pub whatsapp: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub postal_code: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub registration_number: Option<String>,
    pub tax_number: Option<String>,
    pub manager_name: Option<String>,
    pub manager_position: Option<String>,
    pub status: String,
    pub location: Option<LocationResponse>,
    pub coverage_areas: Vec<String>,
    pub transport_types: Vec<String>,
    pub stations_count: i64,
    pub drivers_count: i64,
    pub vehicles_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Sub-objetos del detalle de compañía
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CompanyVehicleSummary {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub registration_number: String,
    pub capacity: i32,
    pub status: VehicleStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CompanyDriverSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub license_number: Option<String>,
    pub status: PersonnelStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct UpcomingTripResponse {
    pub id: Uuid,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub available_seats: i32,
    pub price: Decimal,
    pub station_name: String,
    pub station_city: String,
    pub vehicle_number: String,
}

#[derive(Debug, Serialize)]
pub struct CompanyStationDetail {
    pub id: Uuid,
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
    pub departures_count: i64,
    pub arrivals_count: i64,
    pub stops_count: i64,
    pub total_movements: i64,
    pub next_departures: Vec<UpcomingTripResponse>,
    pub next_arrivals: Vec<UpcomingTripResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CompanyTripStopSummary {
    pub station_name: String,
    pub station_city: String,
    pub arrival_time: DateTime<Utc>,
    pub departure_time: DateTime<Utc>,
    pub stop_order: i32,
}

#[derive(Debug, Serialize)]
pub struct CompanyTripSummary {
    pub id: Uuid,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub distance: Decimal,
    pub duration: i32,
    pub base_price: Decimal,
    pub total_price: Decimal,
    pub available_seats: i32,
    pub status: TripStatus,
    pub vehicle_number: String,
    pub vehicle_brand: String,
    pub vehicle_model: String,
    pub driver_name: String,
    pub departure_station: String,
    pub departure_city: String,
    pub arrival_station: String,
    pub arrival_city: String,
    pub stops: Vec<CompanyTripStopSummary>,
}

#[derive(Debug, Serialize)]
pub struct CompanyTripStats {
    pub total: usize,
    pub scheduled: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub total_revenue: Decimal,
}

// Detalle completo de una compañía
#[derive(Debug, Serialize)]
pub struct CompanyDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub logo_url: Option<String>,
    pub status: String,
    pub coverage_areas: Vec<String>,
    pub transport_types: Vec<String>,
    pub fleet_size: i64,
    pub drivers_count: i64,
    pub stations_count: i64,
    pub trips_count: i64,
    pub vehicles: Vec<CompanyVehicleSummary>,
    pub drivers: Vec<CompanyDriverSummary>,
    pub stations: Vec<CompanyStationDetail>,
    pub trips: Vec<CompanyTripSummary>,
    pub trip_stats: CompanyTripStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

