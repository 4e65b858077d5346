//! Controller de estaciones

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::station_dto::{
    CreateStationRequest, StationResponse, StationWithMovementsResponse, UpdateStationRequest,
};
use crate::repositories::station_repository::{StationRepository, StationWithMovements};
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::validate_coordinates;

pub struct StationController {
    repository: StationRepository,
}

impl StationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: StationRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        request: CreateStationRequest,
    ) -> Result<StationResponse, AppError> {
        request.validate()?;

        if let (Some(lat), Some(lng)) = (request.latitude, request.longitude) {
            validate_coordinates(lat, lng)
                .map_err(|_| validation_error("location", "coordenadas inválidas"))?;
        }

        let station = self.repository.create(company_id, &request).await?;

        Ok(StationResponse {
            id: station.id,
            company_id: station.company_id,
            name: station.name,
            city: station.city,
            address: station.address,
            phone: station.phone,
            email: station.email,
            capacity: station.capacity,
            latitude: station.latitude,
            longitude: station.longitude,
            is_main_station: station.is_main_station,
            features: station.features.0,
            status: station.status,
            created_at: station.created_at,
            updated_at: station.updated_at,
        })
    }

    pub async fn list_by_company(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<StationWithMovementsResponse>, AppError> {
        let stations = self.repository.list_by_company(company_id).await?;

        Ok(stations.into_iter().map(format_station).collect())
    }

    pub async fn get_by_id(
        &self,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<StationWithMovementsResponse, AppError> {
        let station = self
            .repository
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Estación no encontrada".to_string()))?;

        Ok(format_station(station))
    }

    pub async fn update(
        &self,
        id: Uuid,
        company_id: Uuid,
        request: UpdateStationRequest,
    ) -> Result<StationWithMovementsResponse, AppError> {
        request.validate()?;

        if self.repository.find_by_id(id, company_id).await?.is_none() {
            return Err(AppError::NotFound(
                "Estación no encontrada o no pertenece a esta empresa".to_string(),
            ));
        }

        self.repository.update(id, company_id, &request).await?;

        let updated = self
            .repository
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal("Estación actualizada pero no recuperable".to_string())
            })?;

        Ok(format_station(updated))
    }

    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id, company_id).await
    }
}

fn format_station(row: StationWithMovements) -> StationWithMovementsResponse {
    let station = row.station;

    StationWithMovementsResponse {
        station: StationResponse {
            id: station.id,
            company_id: station.company_id,
            name: station.name,
            city: station.city,
            address: station.address,
            phone: station.phone,
            email: station.email,
            capacity: station.capacity,
            latitude: station.latitude,
            longitude: station.longitude,
            is_main_station: station.is_main_station,
            features: station.features.0,
            status: station.status,
            created_at: station.created_at,
            updated_at: station.updated_at,
        },
        departures_count: row.departures_count,
        arrivals_count: row.arrivals_count,
        stops_count: row.stops_count,
    }
}
