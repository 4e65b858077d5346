use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::customer::Customer;

// Request de inscripción de cliente
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterCustomerRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(min = 8, max = 20))]
    pub phone: String,
    #[validate(length(min = 8, max = 255))]
    pub password: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub id_card_number: Option<String>,
    pub id_card_type: Option<String>,
}

// Request de login de cliente
#[derive(Debug, Deserialize)]
pub struct CustomerLoginRequest {
    pub email: String,
    pub password: String,
}

// Request para actualizar el perfil del cliente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCustomerProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub id_card_number: Option<String>,
    pub id_card_type: Option<String>,
}

// Request para cambiar el estado de la cuenta (admin)
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerStatusRequest {
    pub status: String,
}

// Response de perfil de cliente (sin password)
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub id_card_number: Option<String>,
    pub id_card_type: Option<String>,
    pub profile_photo: Option<String>,
    pub account_status: String,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            phone: customer.phone,
            date_of_birth: customer.date_of_birth,
            gender: customer.gender,
            address: customer.address,
            city: customer.city,
            country: customer.country,
            id_card_number: customer.id_card_number,
            id_card_type: customer.id_card_type,
            profile_photo: customer.profile_photo,
            account_status: customer.account_status,
            email_verified: customer.email_verified,
            phone_verified: customer.phone_verified,
            last_login: customer.last_login,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}

// Response de login de cliente con bearer token
#[derive(Debug, Serialize)]
pub struct CustomerLoginResponse {
    pub token: String,
    pub customer: CustomerResponse,
}

// Resumen para el listado de administración
#[derive(Debug, Serialize)]
pub struct CustomerSummaryResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub profile_photo: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub account_status: String,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
