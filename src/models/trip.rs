//! Modelo de Trip
//!
//! Un viaje referencia exactamente una ruta, un vehículo y un chauffeur
//! de la misma empresa. El vehículo queda ocupado mientras el viaje está
//! vivo; el chauffeur no se marca ocupado (asimetría heredada del
//! comportamiento de producción, ver DESIGN.md).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del viaje - mapea al ENUM trip_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "trip_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl TripStatus {
    /// Un viaje terminal libera el vehículo que tenía asignado
    pub fn is_terminal(self) -> bool {
        matches!(self, TripStatus::Completed | TripStatus::Cancelled)
    }
}

/// Trip principal - mapea exactamente a la tabla trips
#[derive(Debug, Clone, FromRow)]
pub struct Trip {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses_release_the_vehicle() {
        assert!(TripStatus::Completed.is_terminal());
        assert!(TripStatus::Cancelled.is_terminal());
        assert!(!TripStatus::Scheduled.is_terminal());
        assert!(!TripStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TripStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let parsed: TripStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, TripStatus::Cancelled);
    }
}
