//! Modelo de Station

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Equipamiento de la estación, almacenado como columna JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationFeatures {
    #[serde(rename = "hasWaitingRoom", default)]
    pub has_waiting_room: bool,
    #[serde(rename = "hasTicketOffice", default)]
    pub has_ticket_office: bool,
    #[serde(rename = "hasParking", default)]
    pub has_parking: bool,
}

/// Station principal - mapea exactamente a la tabla stations
#[derive(Debug, Clone, FromRow)]
pub struct Station {
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
    pub features: Json<StationFeatures>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_default_from_empty_json() {
        let features: StationFeatures = serde_json::from_str("{}").unwrap();
        assert!(!features.has_waiting_room);
        assert!(!features.has_ticket_office);
        assert!(!features.has_parking);
    }

    #[test]
    fn test_features_round_trip_camel_case() {
        let features = StationFeatures {
            has_waiting_room: true,
            has_ticket_office: false,
            has_parking: true,
        };
        let json = serde_json::to_value(&features).unwrap();
        assert_eq!(json["hasWaitingRoom"], true);
        assert_eq!(json["hasParking"], true);
    }
}
