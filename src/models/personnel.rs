//! Modelo de Personnel
//!
//! El personal agrupa chauffeurs y agentes de una empresa; el tipo
//! discrimina las reglas de borrado (un chauffeur con viaje en curso
//! no puede eliminarse).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Tipo de personal - mapea al ENUM personnel_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "personnel_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PersonnelType {
    Driver,
    Agent,
}

/// Estado del personal - mapea al ENUM personnel_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "personnel_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PersonnelStatus {
    Active,
    Inactive,
    OnLeave,
}

impl PersonnelStatus {
    /// Solo un chauffeur activo puede recibir un viaje
    pub fn is_assignable(self) -> bool {
        matches!(self, PersonnelStatus::Active)
    }
}

/// Personnel principal - mapea exactamente a la tabla personnel
#[derive(Debug, Clone, FromRow)]
pub struct Personnel {
    pub id: Uuid,
    pub company_id: Uuid,
    #[sqlx(rename = "type")]
    pub personnel_type: PersonnelType,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub hire_date: NaiveDate,
    pub status: PersonnelStatus,
    pub license_number: Option<String>,
    pub license_expiry_date: Option<NaiveDate>,
    pub license_type: Option<String>,
    pub role: Option<String>,
    pub station_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_active_driver_is_assignable() {
        assert!(PersonnelStatus::Active.is_assignable());
        assert!(!PersonnelStatus::Inactive.is_assignable());
        assert!(!PersonnelStatus::OnLeave.is_assignable());
    }

    #[test]
    fn test_on_leave_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PersonnelStatus::OnLeave).unwrap(),
            "\"on_leave\""
        );
    }
}
