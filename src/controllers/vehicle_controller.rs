//! Controller de vehículos

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse, VehicleStatistics,
};
use crate::repositories::vehicle_repository::{VehicleRepository, VehicleWithStats};
use crate::utils::errors::{conflict_error, not_found_error, validation_error, AppError};
use crate::utils::validation::validate_registration_number;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        request: CreateVehicleRequest,
    ) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        validate_registration_number(&request.registration_number)
            .map_err(|_| validation_error("registrationNumber", "matrícula inválida"))?;

        if self
            .repository
            .registration_number_exists(&request.registration_number, company_id)
            .await?
        {
            return Err(conflict_error(
                "La matrícula ya está registrada para esta empresa",
            ));
        }

        let vehicle = self.repository.create(company_id, &request).await?;

        Ok(VehicleResponse {
            id: vehicle.id,
            company_id: vehicle.company_id,
            registration_number: vehicle.registration_number,
            brand: vehicle.brand,
            model: vehicle.model,
            vehicle_type: vehicle.vehicle_type,
            capacity: vehicle.capacity,
            manufacture_year: vehicle.manufacture_year,
            features: vehicle.features.0,
            status: vehicle.status,
            statistics: None,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        })
    }

    pub async fn list_by_company(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.list_by_company(company_id).await?;

        Ok(vehicles.into_iter().map(format_vehicle).collect())
    }

    pub async fn get_by_id(
        &self,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| not_found_error("Vehículo"))?;

        Ok(format_vehicle(vehicle))
    }

    pub async fn update(
        &self,
        id: Uuid,
        company_id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        if self.repository.find_by_id(id, company_id).await?.is_none() {
            return Err(not_found_error("Vehículo"));
        }

        self.repository.update(id, company_id, &request).await?;

        let updated = self
            .repository
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| AppError::Internal("Vehículo actualizado pero no recuperable".to_string()))?;

        Ok(format_vehicle(updated))
    }

    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id, company_id).await
    }
}

fn format_vehicle(row: VehicleWithStats) -> VehicleResponse {
    let vehicle = row.vehicle;

    VehicleResponse {
        id: vehicle.id,
        company_id: vehicle.company_id,
        registration_number: vehicle.registration_number,
        brand: vehicle.brand,
        model: vehicle.model,
        vehicle_type: vehicle.vehicle_type,
        capacity: vehicle.capacity,
        manufacture_year: vehicle.manufacture_year,
        features: vehicle.features.0,
        status: vehicle.status,
        statistics: Some(VehicleStatistics {
            completed_trips: row.completed_trips,
            active_trips: row.active_trips,
        }),
        created_at: vehicle.created_at,
        updated_at: vehicle.updated_at,
    }
}
