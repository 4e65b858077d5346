//! Controller de arrêts de viaje

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::trip_stop_dto::{
    CreateTripStopRequest, TripStopResponse, TripStopStatsResponse, UpdateTripStopRequest,
};
use crate::repositories::trip_stop_repository::{TripStopRepository, TripStopWithStation};
use crate::utils::errors::{not_found_error, AppError};

pub struct TripStopController {
    repository: TripStopRepository,
}

impl TripStopController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TripStopRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        company_id: Uuid,
        trip_id: Uuid,
    ) -> Result<Vec<TripStopResponse>, AppError> {
        self.ensure_trip_owned(trip_id, company_id).await?;

        let stops = self.repository.list_by_trip(trip_id).await?;

        Ok(stops.into_iter().map(format_stop).collect())
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        trip_id: Uuid,
        request: CreateTripStopRequest,
    ) -> Result<TripStopResponse, AppError> {
        request.validate()?;

        self.ensure_trip_owned(trip_id, company_id).await?;

        if !self
            .repository
            .station_belongs_to_company(request.station_id, company_id)
            .await?
        {
            return Err(AppError::NotFound(
                "Estación no encontrada o no pertenece a esta empresa".to_string(),
            ));
        }

        let stop = self.repository.create(trip_id, &request).await?;

        let created = self
            .repository
            .find_with_station(stop.id)
            .await?
            .ok_or_else(|| AppError::Internal("Arrêt creado pero no recuperable".to_string()))?;

        Ok(format_stop(created))
    }

    pub async fn update(
        &self,
        company_id: Uuid,
        trip_id: Uuid,
        stop_id: Uuid,
        request: UpdateTripStopRequest,
    ) -> Result<TripStopResponse, AppError> {
        request.validate()?;

        if !self
            .repository
            .stop_belongs_to_trip(stop_id, trip_id, company_id)
            .await?
        {
            return Err(AppError::NotFound(
                "Arrêt no encontrado o no pertenece a este viaje".to_string(),
            ));
        }

        if let Some(station_id) = request.station_id {
            if !self
                .repository
                .station_belongs_to_company(station_id, company_id)
                .await?
            {
                return Err(AppError::NotFound(
                    "Estación no encontrada o no pertenece a esta empresa".to_string(),
                ));
            }
        }

        self.repository.update(stop_id, &request).await?;

        let updated = self
            .repository
            .find_with_station(stop_id)
            .await?
            .ok_or_else(|| AppError::Internal("Arrêt actualizado pero no recuperable".to_string()))?;

        Ok(format_stop(updated))
    }

    pub async fn delete(
        &self,
        company_id: Uuid,
        trip_id: Uuid,
        stop_id: Uuid,
    ) -> Result<(), AppError> {
        self.repository
            .delete_and_reorder(company_id, trip_id, stop_id)
            .await
    }

    pub async fn stats(
        &self,
        company_id: Uuid,
        trip_id: Uuid,
    ) -> Result<TripStopStatsResponse, AppError> {
        self.ensure_trip_owned(trip_id, company_id).await?;

        let stats = self.repository.stats(trip_id).await?;

        Ok(TripStopStatsResponse {
            total_stops: stats.total_stops,
            total_boardings: stats.total_boardings,
            total_alightings: stats.total_alightings,
            min_available_seats: stats.min_available_seats,
            completed_stops: stats.completed_stops,
            cancelled_stops: stats.cancelled_stops,
        })
    }

    async fn ensure_trip_owned(&self, trip_id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        if !self
            .repository
            .trip_belongs_to_company(trip_id, company_id)
            .await?
        {
            return Err(not_found_error("Viaje"));
        }

        Ok(())
    }
}

fn format_stop(row: TripStopWithStation) -> TripStopResponse {
    let stop = row.stop;

    TripStopResponse {
        id: stop.id,
        trip_id: stop.trip_id,
        station_id: stop.station_id,
        arrival_time: stop.arrival_time,
        departure_time: stop.departure_time,
        stop_order: stop.stop_order,
        price: stop.price,
        available_seats: stop.available_seats,
        boarding_count: stop.boarding_count,
        alighting_count: stop.alighting_count,
        status: stop.status,
        platform: stop.platform,
        notes: stop.notes,
        station_name: row.station_name,
        station_city: row.station_city,
        station_address: row.station_address,
        station_latitude: row.station_latitude,
        station_longitude: row.station_longitude,
        created_at: stop.created_at,
        updated_at: stop.updated_at,
    }
}
