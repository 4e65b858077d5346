//! Repositorio de personal

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::personnel_dto::{CreatePersonnelRequest, PersonnelFilters, UpdatePersonnelRequest};
use crate::models::personnel::{Personnel, PersonnelStatus, PersonnelType};
use crate::models::trip::TripStatus;
use crate::utils::errors::AppError;

/// Fila de personal con el nombre de su estación
#[derive(Debug, sqlx::FromRow)]
pub struct PersonnelWithStation {
    #[sqlx(flatten)]
    pub personnel: Personnel,
    pub station_name: Option<String>,
}

const PERSONNEL_WITH_STATION_QUERY: &str = r#"
    SELECT p.*, s.name AS station_name
    FROM personnel p
    LEFT JOIN stations s ON p.station_id = s.id
"#;

pub struct PersonnelRepository {
    pool: PgPool,
}

impl PersonnelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn email_exists(
        &self,
        email: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM personnel \
             WHERE email = $1 AND ($2::uuid IS NULL OR id != $2))",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn station_belongs_to_company(
        &self,
        station_id: Uuid,
        company_id: Uuid,
    ) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM stations WHERE id = $1 AND company_id = $2)",
        )
        .bind(station_id)
        .bind(company_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        request: &CreatePersonnelRequest,
        password_hash: String,
    ) -> Result<Personnel, AppError> {
        let status = request.status.unwrap_or(PersonnelStatus::Active);

        let personnel = sqlx::query_as::<_, Personnel>(
            r#"
            INSERT INTO personnel (
                id, company_id, type, first_name, last_name, email, password,
                phone, address, birth_date, hire_date, status,
                license_number, license_expiry_date, license_type, role,
                station_id, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                    $13, $14, $15, $16, $17, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(request.personnel_type)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(password_hash)
        .bind(&request.phone)
        .bind(&request.address)
        .bind(request.birth_date)
        .bind(request.hire_date)
        .bind(status)
        .bind(&request.license_number)
        .bind(request.license_expiry_date)
        .bind(&request.license_type)
        .bind(&request.role)
        .bind(request.station_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(personnel)
    }

    pub async fn list_by_company(
        &self,
        company_id: Uuid,
        filters: &PersonnelFilters,
    ) -> Result<Vec<PersonnelWithStation>, AppError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(PERSONNEL_WITH_STATION_QUERY);
        builder.push(" WHERE p.company_id = ").push_bind(company_id);

        if let Some(personnel_type) = filters.personnel_type {
            builder.push(" AND p.type = ").push_bind(personnel_type);
        }
        if let Some(station_id) = filters.station_id {
            builder.push(" AND p.station_id = ").push_bind(station_id);
        }

        builder.push(" ORDER BY p.created_at DESC");

        let personnel = builder
            .build_query_as::<PersonnelWithStation>()
            .fetch_all(&self.pool)
            .await?;

        Ok(personnel)
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<Option<PersonnelWithStation>, AppError> {
        let query = format!(
            "{} WHERE p.id = $1 AND p.company_id = $2",
            PERSONNEL_WITH_STATION_QUERY
        );

        let personnel = sqlx::query_as::<_, PersonnelWithStation>(&query)
            .bind(id)
            .bind(company_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(personnel)
    }

    pub async fn update(
        &self,
        id: Uuid,
        company_id: Uuid,
        request: &UpdatePersonnelRequest,
        password_hash: Option<String>,
    ) -> Result<(), AppError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE personnel SET updated_at = NOW()");

        if let Some(personnel_type) = request.personnel_type {
            builder.push(", type = ").push_bind(personnel_type);
        }
        if let Some(ref first_name) = request.first_name {
            builder.push(", first_name = ").push_bind(first_name);
        }
        if let Some(ref last_name) = request.last_name {
            builder.push(", last_name = ").push_bind(last_name);
        }
        if let Some(ref email) = request.email {
            builder.push(", email = ").push_bind(email);
        }
        if let Some(password) = password_hash {
            builder.push(", password = ").push_bind(password);
        }
        if let Some(ref phone) = request.phone {
            builder.push(", phone = ").push_bind(phone);
        }
        if let Some(ref address) = request.address {
            builder.push(", address = ").push_bind(address);
        }
        if let Some(birth_date) = request.birth_date {
            builder.push(", birth_date = ").push_bind(birth_date);
        }
        if let Some(hire_date) = request.hire_date {
            builder.push(", hire_date = ").push_bind(hire_date);
        }
        if let Some(status) = request.status {
            builder.push(", status = ").push_bind(status);
        }
        if let Some(ref license_number) = request.license_number {
            builder.push(", license_number = ").push_bind(license_number);
        }
        if let Some(license_expiry_date) = request.license_expiry_date {
            builder
                .push(", license_expiry_date = ")
                .push_bind(license_expiry_date);
        }
        if let Some(ref license_type) = request.license_type {
            builder.push(", license_type = ").push_bind(license_type);
        }
        if let Some(ref role) = request.role {
            builder.push(", role = ").push_bind(role);
        }
        if let Some(station_id) = request.station_id {
            builder.push(", station_id = ").push_bind(station_id);
        }

        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" AND company_id = ").push_bind(company_id);

        builder.build().execute(&self.pool).await?;

        Ok(())
    }

    /// Borrar un miembro del personal. Un chauffeur con viajes en curso
    /// no puede eliminarse.
    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let personnel_type: Option<PersonnelType> = sqlx::query_scalar(
            "SELECT type FROM personnel WHERE id = $1 AND company_id = $2 FOR UPDATE",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&mut *tx)
        .await?;

        let personnel_type = personnel_type
            .ok_or_else(|| AppError::NotFound("Personal no encontrado".to_string()))?;

        if personnel_type == PersonnelType::Driver {
            let has_active_trips: bool = sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM trips WHERE driver_id = $1 AND status = $2)",
            )
            .bind(id)
            .bind(TripStatus::InProgress)
            .fetch_one(&mut *tx)
            .await?;

            if has_active_trips {
                return Err(AppError::Conflict(
                    "Imposible eliminar un chauffeur con viajes en curso".to_string(),
                ));
            }
        }

        sqlx::query("DELETE FROM personnel WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
