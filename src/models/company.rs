//! Modelo de Company
//!
//! Una empresa es el límite de tenencia del sistema: posee sus
//! estaciones, vehículos, personal, rutas y viajes. Las referencias
//! cruzadas entre empresas se rechazan.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Company principal - mapea exactamente a la tabla companies
#[derive(Debug, Clone, FromRow)]
pub struct Company {
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
    pub legal_status: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub manager_name: Option<String>,
    pub manager_position: Option<String>,
    pub insurance_provider: Option<String>,
    pub insurance_policy_number: Option<String>,
    pub insurance_expiry_date: Option<NaiveDate>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
