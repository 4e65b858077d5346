//! Repositorio de viajes
//!
//! Ciclo de vida de asignación de recursos: cada operación corre dentro
//! de una sola transacción, con lock de fila (FOR UPDATE) sobre el
//! vehículo desde la primera verificación hasta el commit. Ningún otro
//! camino de escritura toca el estado de disponibilidad del vehículo.
//!
//! El chauffeur no se marca ocupado al asignarlo: un chauffeur puede
//! tener viajes superpuestos. Asimetría heredada del comportamiento de
//! producción, mantenida a propósito (ver DESIGN.md).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

use crate::dto::trip_dto::{CreateTripRequest, UpdateTripRequest};
use crate::models::personnel::PersonnelStatus;
use crate::models::trip::{Trip, TripStatus};
use crate::models::vehicle::VehicleStatus;
use crate::utils::errors::AppError;

/// Fila del join completo de un viaje para las responses del frontend
#[derive(Debug, sqlx::FromRow)]
pub struct TripDetailsRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub route_id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub status: TripStatus,
    pub price: Decimal,
    pub available_seats: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub distance: Decimal,
    pub duration: i32,
    pub departure_station_name: String,
    pub arrival_station_name: String,
    pub registration_number: String,
    pub brand: String,
    pub model: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub license_number: Option<String>,
}

const TRIP_DETAILS_QUERY: &str = r#"
    SELECT
        t.id, t.company_id, t.route_id, t.vehicle_id, t.driver_id,
        t.departure_time, t.arrival_time, t.status, t.price,
        t.available_seats, t.created_at, t.updated_at,
        r.distance, r.duration,
        ds.name AS departure_station_name,
        arr_s.name AS arrival_station_name,
        v.registration_number, v.brand, v.model,
        p.first_name, p.last_name, p.phone, p.license_number
    FROM trips t
    JOIN routes r ON t.route_id = r.id
    JOIN stations ds ON r.departure_station_id = ds.id
    JOIN stations arr_s ON r.arrival_station_id = arr_s.id
    JOIN vehicles v ON t.vehicle_id = v.id
    JOIN personnel p ON t.driver_id = p.id
"#;

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_company(
        &self,
        company_id: Uuid,
        status: Option<TripStatus>,
    ) -> Result<Vec<TripDetailsRow>, AppError> {
        let query = format!(
            "{} WHERE t.company_id = $1 AND ($2::trip_status IS NULL OR t.status = $2) \
             ORDER BY t.departure_time DESC",
            TRIP_DETAILS_QUERY
        );

        let trips = sqlx::query_as::<_, TripDetailsRow>(&query)
            .bind(company_id)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;

        Ok(trips)
    }

    pub async fn find_detailed(
        &self,
        company_id: Uuid,
        id: Uuid,
    ) -> Result<Option<TripDetailsRow>, AppError> {
        let query = format!("{} WHERE t.company_id = $1 AND t.id = $2", TRIP_DETAILS_QUERY);

        let trip = sqlx::query_as::<_, TripDetailsRow>(&query)
            .bind(company_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(trip)
    }

    /// Crear un viaje. Precondiciones en orden, la primera que falla gana:
    /// ruta propia, vehículo propio y asignable, chauffeur propio y activo.
    /// El vehículo pasa a busy en la misma transacción que el INSERT.
    pub async fn create(
        &self,
        company_id: Uuid,
        request: &CreateTripRequest,
    ) -> Result<Trip, AppError> {
        let mut tx = self.pool.begin().await?;

        let route_exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM routes WHERE id = $1 AND company_id = $2)",
        )
        .bind(request.route_id)
        .bind(company_id)
        .fetch_one(&mut *tx)
        .await?;

        if !route_exists {
            return Err(AppError::NotFound(
                "Ruta no encontrada o no pertenece a esta empresa".to_string(),
            ));
        }

        // Lock de fila sobre el vehículo hasta el commit
        let vehicle_status: Option<VehicleStatus> = sqlx::query_scalar(
            "SELECT status FROM vehicles WHERE id = $1 AND company_id = $2 FOR UPDATE",
        )
        .bind(request.vehicle_id)
        .bind(company_id)
        .fetch_optional(&mut *tx)
        .await?;

        let vehicle_status = vehicle_status.ok_or_else(|| {
            AppError::NotFound("Vehículo no encontrado o no pertenece a esta empresa".to_string())
        })?;

        let busy_status = vehicle_status.on_assign().ok_or_else(|| {
            AppError::Conflict("El vehículo no está disponible para un nuevo viaje".to_string())
        })?;

        let driver_status: Option<PersonnelStatus> = sqlx::query_scalar(
            "SELECT status FROM personnel \
             WHERE id = $1 AND company_id = $2 AND type = 'driver'",
        )
        .bind(request.driver_id)
        .bind(company_id)
        .fetch_optional(&mut *tx)
        .await?;

        let driver_status = driver_status.ok_or_else(|| {
            AppError::NotFound("Chauffeur no encontrado o no pertenece a esta empresa".to_string())
        })?;

        if !driver_status.is_assignable() {
            return Err(AppError::Conflict(
                "El chauffeur no está disponible para un nuevo viaje".to_string(),
            ));
        }

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (
                id, company_id, route_id, vehicle_id, driver_id,
                departure_time, arrival_time, status, price, available_seats,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(request.route_id)
        .bind(request.vehicle_id)
        .bind(request.driver_id)
        .bind(request.departure_time)
        .bind(request.arrival_time)
        .bind(TripStatus::Scheduled)
        .bind(request.price)
        .bind(request.available_seats)
        .fetch_one(&mut *tx)
        .await?;

        set_vehicle_status(&mut tx, request.vehicle_id, busy_status).await?;

        tx.commit().await?;

        Ok(trip)
    }

    /// Update sparse de un viaje. El vehicle_id previo se captura bajo lock
    /// antes de mutar nada: si el vehículo cambia se libera el anterior y
    /// se ocupa el nuevo; si el estado resultante es terminal se libera el
    /// vehículo que el viaje tenía al entrar, aunque no haya cambio de
    /// vehículo en la misma request.
    pub async fn update(
        &self,
        company_id: Uuid,
        id: Uuid,
        request: &UpdateTripRequest,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let original: Option<(Uuid, TripStatus)> = sqlx::query_as(
            "SELECT vehicle_id, status FROM trips \
             WHERE id = $1 AND company_id = $2 FOR UPDATE",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&mut *tx)
        .await?;

        let (old_vehicle_id, old_status) = original.ok_or_else(|| {
            AppError::NotFound("Viaje no encontrado o no pertenece a esta empresa".to_string())
        })?;

        // Vehículo de reemplazo: verificado y bloqueado antes de mutar
        let mut pending_assignment: Option<(Uuid, VehicleStatus)> = None;
        if let Some(new_vehicle_id) = request.vehicle_id {
            if new_vehicle_id != old_vehicle_id {
                let new_status: Option<VehicleStatus> = sqlx::query_scalar(
                    "SELECT status FROM vehicles WHERE id = $1 AND company_id = $2 FOR UPDATE",
                )
                .bind(new_vehicle_id)
                .bind(company_id)
                .fetch_optional(&mut *tx)
                .await?;

                let new_status = new_status.ok_or_else(|| {
                    AppError::NotFound(
                        "Nuevo vehículo no encontrado o no pertenece a esta empresa".to_string(),
                    )
                })?;

                let busy_status = new_status.on_assign().ok_or_else(|| {
                    AppError::Conflict("El nuevo vehículo no está disponible".to_string())
                })?;

                pending_assignment = Some((new_vehicle_id, busy_status));
            }
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE trips SET updated_at = NOW()");

        if let Some(route_id) = request.route_id {
            builder.push(", route_id = ").push_bind(route_id);
        }
        if let Some(vehicle_id) = request.vehicle_id {
            builder.push(", vehicle_id = ").push_bind(vehicle_id);
        }
        if let Some(driver_id) = request.driver_id {
            builder.push(", driver_id = ").push_bind(driver_id);
        }
        if let Some(departure_time) = request.departure_time {
            builder.push(", departure_time = ").push_bind(departure_time);
        }
        if let Some(arrival_time) = request.arrival_time {
            builder.push(", arrival_time = ").push_bind(arrival_time);
        }
        if let Some(status) = request.status {
            builder.push(", status = ").push_bind(status);
        }
        if let Some(price) = request.price {
            builder.push(", price = ").push_bind(price);
        }
        if let Some(available_seats) = request.available_seats {
            builder.push(", available_seats = ").push_bind(available_seats);
        }

        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" AND company_id = ").push_bind(company_id);

        builder.build().execute(&mut *tx).await?;

        if let Some((new_vehicle_id, busy_status)) = pending_assignment {
            release_vehicle(&mut tx, old_vehicle_id).await?;
            set_vehicle_status(&mut tx, new_vehicle_id, busy_status).await?;
        }

        // Estado resultante: el enviado, o el que ya tenía el viaje
        let resulting_status = request.status.unwrap_or(old_status);
        if resulting_status.is_terminal() {
            release_vehicle(&mut tx, old_vehicle_id).await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Borrar un viaje liberando su vehículo en la misma transacción
    pub async fn delete(&self, company_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let vehicle_id: Option<Uuid> = sqlx::query_scalar(
            "SELECT vehicle_id FROM trips WHERE id = $1 AND company_id = $2 FOR UPDATE",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&mut *tx)
        .await?;

        let vehicle_id = vehicle_id.ok_or_else(|| {
            AppError::NotFound("Viaje no encontrado o no pertenece a esta empresa".to_string())
        })?;

        release_vehicle(&mut tx, vehicle_id).await?;

        sqlx::query("DELETE FROM trips WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

/// Fijar el estado del vehículo dentro de la transacción. Los llamadores
/// ya verificaron la transición con la tabla de VehicleStatus bajo lock.
async fn set_vehicle_status(
    tx: &mut Transaction<'_, Postgres>,
    vehicle_id: Uuid,
    status: VehicleStatus,
) -> Result<(), AppError> {
    sqlx::query("UPDATE vehicles SET status = $2, updated_at = NOW() WHERE id = $1")
        .bind(vehicle_id)
        .bind(status)
        .execute(&mut **tx)
        .await?;

    Ok(())
}

/// Liberar el vehículo de un viaje: busy -> active según la tabla de
/// transiciones. Los estados fijados por el operador (maintenance,
/// inactive) quedan intactos.
async fn release_vehicle(
    tx: &mut Transaction<'_, Postgres>,
    vehicle_id: Uuid,
) -> Result<(), AppError> {
    let current: Option<VehicleStatus> =
        sqlx::query_scalar("SELECT status FROM vehicles WHERE id = $1 FOR UPDATE")
            .bind(vehicle_id)
            .fetch_optional(&mut **tx)
            .await?;

    if let Some(released) = current.and_then(VehicleStatus::on_release) {
        set_vehicle_status(tx, vehicle_id, released).await?;
    }

    Ok(())
}
