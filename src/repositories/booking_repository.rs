//! Repositorio de reservas

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::trip::TripStatus;
use crate::utils::errors::AppError;

/// Fila de reserva con el join completo cliente/viaje/ruta/vehículo
#[derive(Debug, sqlx::FromRow)]
pub struct BookingDetailsRow {
    pub booking_id: Uuid,
    pub trip_id: Uuid,
    pub customer_id: Uuid,
    pub total_amount: Decimal,
    pub seats_booked: i32,
    pub passenger_info: Json<serde_json::Value>,
    pub booking_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub price: Decimal,
    pub trip_status: TripStatus,
    pub departure_city: String,
    pub departure_address: Option<String>,
    pub arrival_city: String,
    pub arrival_address: Option<String>,
    pub registration_number: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub distance: Decimal,
    pub duration: i32,
}

const BOOKING_DETAILS_QUERY: &str = r#"
    SELECT
        b.booking_id, b.trip_id, b.customer_id, b.total_amount,
        b.seats_booked, b.passenger_info,
        b.status AS booking_status,
        b.created_at, b.updated_at,
        c.first_name, c.last_name, c.email, c.phone,
        t.departure_time, t.arrival_time, t.price,
        t.status AS trip_status,
        ds.name AS departure_city,
        ds.address AS departure_address,
        arr_s.name AS arrival_city,
        arr_s.address AS arrival_address,
        v.registration_number, v.brand, v.model,
        r.distance, r.duration
    FROM bookings b
    JOIN customers c ON b.customer_id = c.id
    JOIN trips t ON b.trip_id = t.id
    JOIN routes r ON t.route_id = r.id
    JOIN stations ds ON r.departure_station_id = ds.id
    JOIN stations arr_s ON r.arrival_station_id = arr_s.id
    LEFT JOIN vehicles v ON t.vehicle_id = v.id
"#;

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<BookingDetailsRow>, AppError> {
        let query = format!("{} ORDER BY b.created_at DESC", BOOKING_DETAILS_QUERY);

        let bookings = sqlx::query_as::<_, BookingDetailsRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(bookings)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<BookingDetailsRow>, AppError> {
        let query = format!("{} WHERE b.booking_id = $1", BOOKING_DETAILS_QUERY);

        let booking = sqlx::query_as::<_, BookingDetailsRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<(), AppError> {
        let result =
            sqlx::query("UPDATE bookings SET status = $2, updated_at = NOW() WHERE booking_id = $1")
                .bind(id)
                .bind(status)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Reserva no encontrada".to_string()));
        }

        Ok(())
    }
}
