//! Controller de viajes
//!
//! Orquesta el ciclo de vida de asignación de recursos: las
//! precondiciones y mutaciones viven en el repositorio, dentro de una
//! transacción; aquí solo validación de entrada y formateo de salida.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::trip_dto::{
    CreateTripRequest, CreateTripResponse, TripDriverInfo, TripResponse, TripRouteInfo,
    TripVehicleInfo, UpdateTripRequest,
};
use crate::models::trip::TripStatus;
use crate::repositories::trip_repository::{TripDetailsRow, TripRepository};
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::validate_positive;
use validator::Validate;

pub struct TripController {
    repository: TripRepository,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TripRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        company_id: Uuid,
        status: Option<String>,
    ) -> Result<Vec<TripResponse>, AppError> {
        let status = parse_status_filter(status.as_deref())?;

        let trips = self.repository.list_by_company(company_id, status).await?;

        Ok(trips.into_iter().map(format_trip).collect())
    }

    pub async fn get_by_id(&self, company_id: Uuid, id: Uuid) -> Result<TripResponse, AppError> {
        let trip = self
            .repository
            .find_detailed(company_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        Ok(format_trip(trip))
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        request: CreateTripRequest,
    ) -> Result<CreateTripResponse, AppError> {
        request.validate()?;

        validate_positive(request.price)
            .map_err(|_| validation_error("price", "el precio debe ser positivo"))?;

        if request.arrival_time <= request.departure_time {
            return Err(validation_error(
                "arrival_time",
                "la llegada debe ser posterior a la salida",
            ));
        }

        let trip = self.repository.create(company_id, &request).await?;

        Ok(CreateTripResponse {
            message: "Viaje creado exitosamente".to_string(),
            id: trip.id,
        })
    }

    pub async fn update(
        &self,
        company_id: Uuid,
        id: Uuid,
        request: UpdateTripRequest,
    ) -> Result<(), AppError> {
        request.validate()?;

        if let Some(price) = request.price {
            validate_positive(price)
                .map_err(|_| validation_error("price", "el precio debe ser positivo"))?;
        }

        self.repository.update(company_id, id, &request).await
    }

    pub async fn delete(&self, company_id: Uuid, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(company_id, id).await
    }
}

/// El filtro de estado acepta los valores del enum o "all"/ausente
fn parse_status_filter(status: Option<&str>) -> Result<Option<TripStatus>, AppError> {
    match status {
        None | Some("all") => Ok(None),
        Some("scheduled") => Ok(Some(TripStatus::Scheduled)),
        Some("in_progress") => Ok(Some(TripStatus::InProgress)),
        Some("completed") => Ok(Some(TripStatus::Completed)),
        Some("cancelled") => Ok(Some(TripStatus::Cancelled)),
        Some(_) => Err(validation_error("status", "estado de viaje desconocido")),
    }
}

/// Anidar los campos del join como los espera el frontend
fn format_trip(row: TripDetailsRow) -> TripResponse {
    TripResponse {
        id: row.id,
        company_id: row.company_id,
        route_id: row.route_id,
        vehicle_id: row.vehicle_id,
        driver_id: row.driver_id,
        departure_time: row.departure_time,
        arrival_time: row.arrival_time,
        status: row.status,
        price: row.price,
        available_seats: row.available_seats,
        route: TripRouteInfo {
            departure_station_name: row.departure_station_name,
            arrival_station_name: row.arrival_station_name,
            distance: row.distance,
            duration: row.duration,
        },
        vehicle: TripVehicleInfo {
            registration_number: row.registration_number,
            brand: row.brand,
            model: row.model,
        },
        driver: TripDriverInfo {
            name: format!("{} {}", row.first_name, row.last_name)
                .trim()
                .to_string(),
            phone: row.phone.unwrap_or_default(),
            license_number: row.license_number.unwrap_or_default(),
        },
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_filter() {
        assert_eq!(parse_status_filter(None).unwrap(), None);
        assert_eq!(parse_status_filter(Some("all")).unwrap(), None);
        assert_eq!(
            parse_status_filter(Some("in_progress")).unwrap(),
            Some(TripStatus::InProgress)
        );
        assert!(parse_status_filter(Some("flying")).is_err());
    }
}
