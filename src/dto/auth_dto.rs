use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Request de login de administración
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Resumen del usuario autenticado (sin password)
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub role: String,
}

// Response de login con bearer token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}
