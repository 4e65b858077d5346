//! Modelo de Vehicle
//!
//! Contiene el struct Vehicle, sus features y la máquina de estados
//! del vehículo. El ciclo de vida de los viajes es el único camino de
//! escritura permitido para las transiciones active <-> busy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del vehículo - mapea al ENUM vehicle_status
///
/// Transiciones del ciclo de vida de viajes: active -> busy al asignar,
/// busy -> active al liberar. `maintenance` e `inactive` los fija el
/// operador y el ciclo de vida de viajes nunca entra ni sale de ellos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "vehicle_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Active,
    Busy,
    Maintenance,
    Inactive,
}

impl VehicleStatus {
    /// Transición al asignar el vehículo a un viaje; None si el estado
    /// actual no admite asignación
    pub fn on_assign(self) -> Option<VehicleStatus> {
        match self {
            VehicleStatus::Active => Some(VehicleStatus::Busy),
            _ => None,
        }
    }

    /// Transición al liberar el vehículo de un viaje
    pub fn on_release(self) -> Option<VehicleStatus> {
        match self {
            VehicleStatus::Busy => Some(VehicleStatus::Active),
            _ => None,
        }
    }
}

/// Tipo de vehículo - mapea al ENUM vehicle_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "vehicle_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Bus,
    Minibus,
    Van,
}

/// Equipamiento del vehículo, almacenado como columna JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleFeatures {
    #[serde(rename = "hasAC", default)]
    pub has_ac: bool,
    #[serde(rename = "hasWifi", default)]
    pub has_wifi: bool,
    #[serde(rename = "hasToilet", default)]
    pub has_toilet: bool,
    #[serde(rename = "hasTv", default)]
    pub has_tv: bool,
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub company_id: Uuid,
    pub registration_number: String,
    pub brand: String,
    pub model: String,
    #[sqlx(rename = "type")]
    pub vehicle_type: VehicleType,
    pub capacity: i32,
    pub manufacture_year: Option<i32>,
    pub features: Json<VehicleFeatures>,
    pub status: VehicleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_transition() {
        assert_eq!(VehicleStatus::Active.on_assign(), Some(VehicleStatus::Busy));
        assert_eq!(VehicleStatus::Busy.on_assign(), None);
        assert_eq!(VehicleStatus::Maintenance.on_assign(), None);
        assert_eq!(VehicleStatus::Inactive.on_assign(), None);
    }

    #[test]
    fn test_release_transition() {
        // Liberar solo saca al vehículo de busy; los estados fijados por
        // el operador no se tocan.
        assert_eq!(VehicleStatus::Busy.on_release(), Some(VehicleStatus::Active));
        assert_eq!(VehicleStatus::Active.on_release(), None);
        assert_eq!(VehicleStatus::Maintenance.on_release(), None);
        assert_eq!(VehicleStatus::Inactive.on_release(), None);
    }

    #[test]
    fn test_features_default_from_empty_json() {
        let features: VehicleFeatures = serde_json::from_str("{}").unwrap();
        assert!(!features.has_ac);
        assert!(!features.has_wifi);
        assert!(!features.has_toilet);
        assert!(!features.has_tv);
    }

    #[test]
    fn test_features_camel_case_keys() {
        let features: VehicleFeatures =
            serde_json::from_str(r#"{"hasAC": true, "hasWifi": true}"#).unwrap();
        assert!(features.has_ac);
        assert!(features.has_wifi);
        assert!(!features.has_toilet);
    }
}
