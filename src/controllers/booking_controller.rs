//! Controller de reservas

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::booking_dto::{BookingListResponse, BookingResponse};
use crate::repositories::booking_repository::{BookingDetailsRow, BookingRepository};
use crate::utils::errors::AppError;

pub struct BookingController {
    repository: BookingRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BookingRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<BookingListResponse, AppError> {
        let bookings = self.repository.list_all().await?;

        Ok(BookingListResponse {
            status: "success".to_string(),
            data: bookings.into_iter().map(format_booking).collect(),
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<BookingResponse, AppError> {
        let booking = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        Ok(format_booking(booking))
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> Result<BookingResponse, AppError> {
        self.repository.update_status(id, status).await?;

        let updated = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::Internal("Reserva actualizada pero no recuperable".to_string())
            })?;

        Ok(format_booking(updated))
    }
}

fn format_booking(row: BookingDetailsRow) -> BookingResponse {
    BookingResponse {
        booking_id: row.booking_id,
        trip_id: row.trip_id,
        customer_id: row.customer_id,
        total_amount: row.total_amount,
        seats_booked: row.seats_booked,
        passenger_info: row.passenger_info.0,
        booking_status: row.booking_status,
        first_name: row.first_name,
        last_name: row.last_name,
        email: row.email,
        phone: row.phone,
        departure_time: row.departure_time,
        arrival_time: row.arrival_time,
        price: row.price,
        trip_status: row.trip_status,
        departure_city: row.departure_city,
        departure_address: row.departure_address,
        arrival_city: row.arrival_city,
        arrival_address: row.arrival_address,
        registration_number: row.registration_number,
        brand: row.brand,
        model: row.model,
        distance: row.distance,
        duration: row.duration,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}
