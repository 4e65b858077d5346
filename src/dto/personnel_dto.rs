use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::personnel::{Personnel, PersonnelStatus, PersonnelType};

// Request para crear un miembro del personal
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePersonnelRequest {
    #[serde(rename = "type")]
    pub personnel_type: PersonnelType,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(min = 8, max = 255))]
    pub password: String,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub hire_date: NaiveDate,
    pub status: Option<PersonnelStatus>,
    #[validate(length(max = 50))]
    pub license_number: Option<String>,
    pub license_expiry_date: Option<NaiveDate>,
    #[validate(length(max = 50))]
    pub license_type: Option<String>,
    #[validate(length(max = 50))]
    pub role: Option<String>,
    pub station_id: Option<Uuid>,
}

// Request para actualizar un miembro del personal
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePersonnelRequest {
    #[serde(rename = "type")]
    pub personnel_type: Option<PersonnelType>,
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
    #[validate(length(min = 8, max = 255))]
    pub password: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    pub status: Option<PersonnelStatus>,
    #[validate(length(max = 50))]
    pub license_number: Option<String>,
    pub license_expiry_date: Option<NaiveDate>,
    #[validate(length(max = 50))]
    pub license_type: Option<String>,
    #[validate(length(max = 50))]
    pub role: Option<String>,
    pub station_id: Option<Uuid>,
}

impl UpdatePersonnelRequest {
    /// Un update sin ningún campo presente no tiene nada que aplicar
    pub fn is_empty(&self) -> bool {
        self.personnel_type.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.birth_date.is_none()
            && self.hire_date.is_none()
            && self.status.is_none()
            && self.license_number.is_none()
            && self.license_expiry_date.is_none()
            && self.license_type.is_none()
            && self.role.is_none()
            && self.station_id.is_none()
    }
}

// Filtros de listado
#[derive(Debug, Deserialize)]
pub struct PersonnelFilters {
    #[serde(rename = "type")]
    pub personnel_type: Option<PersonnelType>,
    pub station_id: Option<Uuid>,
}

// Response de personal (sin password)
#[derive(Debug, Serialize)]
pub struct PersonnelResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    #[serde(rename = "type")]
    pub personnel_type: PersonnelType,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
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
    pub station_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PersonnelResponse {
    pub fn from_personnel(personnel: Personnel, station_name: Option<String>) -> Self {
        Self {
            id: personnel.id,
            company_id: personnel.company_id,
            personnel_type: personnel.personnel_type,
            first_name: personnel.first_name,
            last_name: personnel.last_name,
            email: personnel.email,
            phone: personnel.phone,
            address: personnel.address,
            birth_date: personnel.birth_date,
            hire_date: personnel.hire_date,
            status: personnel.status,
            license_number: personnel.license_number,
            license_expiry_date: personnel.license_expiry_date,
            license_type: personnel.license_type,
            role: personnel.role,
            station_id: personnel.station_id,
            station_name,
            created_at: personnel.created_at,
            updated_at: personnel.updated_at,
        }
    }
}
