//! Controller de personal

use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::personnel_dto::{
    CreatePersonnelRequest, PersonnelFilters, PersonnelResponse, UpdatePersonnelRequest,
};
use crate::repositories::personnel_repository::{PersonnelRepository, PersonnelWithStation};
use crate::utils::errors::{validation_error, AppError};

pub struct PersonnelController {
    repository: PersonnelRepository,
}

impl PersonnelController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PersonnelRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        request: CreatePersonnelRequest,
    ) -> Result<PersonnelResponse, AppError> {
        request.validate()?;

        if self.repository.email_exists(&request.email, None).await? {
            return Err(AppError::Conflict(
                "Esta dirección de email ya está en uso".to_string(),
            ));
        }

        if let Some(station_id) = request.station_id {
            if !self
                .repository
                .station_belongs_to_company(station_id, company_id)
                .await?
            {
                return Err(validation_error("station_id", "estación inválida"));
            }
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let personnel = self
            .repository
            .create(company_id, &request, password_hash)
            .await?;

        let created = self
            .repository
            .find_by_id(personnel.id, company_id)
            .await?
            .ok_or_else(|| AppError::Internal("Personal creado pero no recuperable".to_string()))?;

        Ok(format_personnel(created))
    }

    pub async fn list_by_company(
        &self,
        company_id: Uuid,
        filters: PersonnelFilters,
    ) -> Result<Vec<PersonnelResponse>, AppError> {
        let personnel = self.repository.list_by_company(company_id, &filters).await?;

        Ok(personnel.into_iter().map(format_personnel).collect())
    }

    pub async fn get_by_id(
        &self,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<PersonnelResponse, AppError> {
        let personnel = self
            .repository
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Personal no encontrado".to_string()))?;

        Ok(format_personnel(personnel))
    }

    pub async fn update(
        &self,
        id: Uuid,
        company_id: Uuid,
        request: UpdatePersonnelRequest,
    ) -> Result<PersonnelResponse, AppError> {
        request.validate()?;

        if request.is_empty() {
            return Err(validation_error("body", "ningún dato para actualizar"));
        }

        let existing = self
            .repository
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Personal no encontrado".to_string()))?;

        if let Some(ref email) = request.email {
            if *email != existing.personnel.email
                && self.repository.email_exists(email, Some(id)).await?
            {
                return Err(AppError::Conflict(
                    "Esta dirección de email ya está en uso".to_string(),
                ));
            }
        }

        if let Some(station_id) = request.station_id {
            if !self
                .repository
                .station_belongs_to_company(station_id, company_id)
                .await?
            {
                return Err(validation_error("station_id", "estación inválida"));
            }
        }

        let password_hash = match request.password {
            Some(ref password) => Some(
                hash(password, DEFAULT_COST)
                    .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?,
            ),
            None => None,
        };

        self.repository
            .update(id, company_id, &request, password_hash)
            .await?;

        let updated = self
            .repository
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal("Personal actualizado pero no recuperable".to_string())
            })?;

        Ok(format_personnel(updated))
    }

    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id, company_id).await
    }
}

fn format_personnel(row: PersonnelWithStation) -> PersonnelResponse {
    PersonnelResponse::from_personnel(row.personnel, row.station_name)
}
