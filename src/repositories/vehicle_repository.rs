//! Repositorio de vehículos
//!
//! El estado de disponibilidad (active/busy) lo muta exclusivamente el
//! ciclo de vida de viajes; aquí solo se aceptan los estados fijados
//! por el operador al crear/actualizar.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::trip::TripStatus;
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppError;

/// Fila de vehículo con sus estadísticas de viajes
#[derive(Debug, sqlx::FromRow)]
pub struct VehicleWithStats {
    #[sqlx(flatten)]
    pub vehicle: Vehicle,
    pub completed_trips: i64,
    pub active_trips: i64,
}

const VEHICLE_WITH_STATS_QUERY: &str = r#"
    SELECT
        v.*,
        (SELECT COUNT(*) FROM trips t
         WHERE t.vehicle_id = v.id AND t.status = 'completed') AS completed_trips,
        (SELECT COUNT(*) FROM trips t
         WHERE t.vehicle_id = v.id AND t.status = 'in_progress') AS active_trips
    FROM vehicles v
"#;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        request: &CreateVehicleRequest,
    ) -> Result<Vehicle, AppError> {
        let features = request.features.clone().unwrap_or_default();
        let status = request.status.unwrap_or(VehicleStatus::Active);

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                id, company_id, registration_number, brand, model, type,
                capacity, manufacture_year, features, status,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(&request.registration_number)
        .bind(&request.brand)
        .bind(&request.model)
        .bind(request.vehicle_type)
        .bind(request.capacity)
        .bind(request.manufacture_year)
        .bind(sqlx::types::Json(features))
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn registration_number_exists(
        &self,
        registration_number: &str,
        company_id: Uuid,
    ) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM vehicles \
             WHERE registration_number = $1 AND company_id = $2)",
        )
        .bind(registration_number)
        .bind(company_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<Option<VehicleWithStats>, AppError> {
        let query = format!(
            "{} WHERE v.id = $1 AND v.company_id = $2",
            VEHICLE_WITH_STATS_QUERY
        );

        let vehicle = sqlx::query_as::<_, VehicleWithStats>(&query)
            .bind(id)
            .bind(company_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn list_by_company(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<VehicleWithStats>, AppError> {
        let query = format!(
            "{} WHERE v.company_id = $1 ORDER BY v.registration_number ASC",
            VEHICLE_WITH_STATS_QUERY
        );

        let vehicles = sqlx::query_as::<_, VehicleWithStats>(&query)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    pub async fn update(
        &self,
        id: Uuid,
        company_id: Uuid,
        request: &UpdateVehicleRequest,
    ) -> Result<(), AppError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE vehicles SET updated_at = NOW()");

        if let Some(ref registration_number) = request.registration_number {
            builder
                .push(", registration_number = ")
                .push_bind(registration_number);
        }
        if let Some(ref brand) = request.brand {
            builder.push(", brand = ").push_bind(brand);
        }
        if let Some(ref model) = request.model {
            builder.push(", model = ").push_bind(model);
        }
        if let Some(vehicle_type) = request.vehicle_type {
            builder.push(", type = ").push_bind(vehicle_type);
        }
        if let Some(capacity) = request.capacity {
            builder.push(", capacity = ").push_bind(capacity);
        }
        if let Some(manufacture_year) = request.manufacture_year {
            builder.push(", manufacture_year = ").push_bind(manufacture_year);
        }
        if let Some(ref features) = request.features {
            builder
                .push(", features = ")
                .push_bind(sqlx::types::Json(features.clone()));
        }
        if let Some(status) = request.status {
            builder.push(", status = ").push_bind(status);
        }

        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" AND company_id = ").push_bind(company_id);

        builder.build().execute(&self.pool).await?;

        Ok(())
    }

    /// Borrar un vehículo. Rechazado si tiene viajes en curso.
    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<Uuid> = sqlx::query_scalar(
            "SELECT id FROM vehicles WHERE id = $1 AND company_id = $2 FOR UPDATE",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&mut *tx)
        .await?;

        if exists.is_none() {
            return Err(AppError::NotFound(
                "Vehículo no encontrado o no pertenece a esta empresa".to_string(),
            ));
        }

        let has_active_trips: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM trips WHERE vehicle_id = $1 AND status = $2)",
        )
        .bind(id)
        .bind(TripStatus::InProgress)
        .fetch_one(&mut *tx)
        .await?;

        if has_active_trips {
            return Err(AppError::Conflict(
                "Imposible eliminar un vehículo con viajes en curso".to_string(),
            ));
        }

        sqlx::query("DELETE FROM vehicles WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
