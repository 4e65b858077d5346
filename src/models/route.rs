//! Modelo de Route
//!
//! Una ruta une dos estaciones de la misma empresa. El par
//! (departure, arrival) es único dentro de cada empresa.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Route principal - mapea exactamente a la tabla routes
#[derive(Debug, Clone, FromRow)]
pub struct Route {
    pub id: Uuid,
    pub company_id: Uuid,
    pub departure_station_id: Uuid,
    pub arrival_station_id: Uuid,
    pub distance: Decimal,
    pub duration: i32,
    pub base_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
