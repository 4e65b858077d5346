//! Repositorio de arrêts de viaje
//!
//! El borrado y la renumeración de `stop_order` corren en una sola
//! transacción, con lock sobre la fila del viaje: ningún lector de un
//! estado commiteado ve huecos ni duplicados en el orden.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::trip_stop_dto::{CreateTripStopRequest, UpdateTripStopRequest};
use crate::models::trip_stop::{renumber_by_arrival, TripStop};
use crate::utils::errors::AppError;

/// Fila de arrêt con la información de su estación
#[derive(Debug, sqlx::FromRow)]
pub struct TripStopWithStation {
    #[sqlx(flatten)]
    pub stop: TripStop,
    pub station_name: String,
    pub station_city: String,
    pub station_address: Option<String>,
    pub station_latitude: Option<f64>,
    pub station_longitude: Option<f64>,
}

/// Agregados de los arrêts de un viaje
#[derive(Debug, sqlx::FromRow)]
pub struct TripStopStatsRow {
    pub total_stops: i64,
    pub total_boardings: i64,
    pub total_alightings: i64,
    pub min_available_seats: Option<i32>,
    pub completed_stops: i64,
    pub cancelled_stops: i64,
}

const STOP_WITH_STATION_QUERY: &str = r#"
    SELECT
        ts.*,
        s.name AS station_name,
        s.city AS station_city,
        s.address AS station_address,
        s.latitude AS station_latitude,
        s.longitude AS station_longitude
    FROM trip_stops ts
    JOIN stations s ON ts.station_id = s.id
"#;

pub struct TripStopRepository {
    pool: PgPool,
}

impl TripStopRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Verificar que el viaje pertenece a la empresa
    pub async fn trip_belongs_to_company(
        &self,
        trip_id: Uuid,
        company_id: Uuid,
    ) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM trips WHERE id = $1 AND company_id = $2)",
        )
        .bind(trip_id)
        .bind(company_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn list_by_trip(&self, trip_id: Uuid) -> Result<Vec<TripStopWithStation>, AppError> {
        let query = format!("{} WHERE ts.trip_id = $1 ORDER BY ts.stop_order", STOP_WITH_STATION_QUERY);

        let stops = sqlx::query_as::<_, TripStopWithStation>(&query)
            .bind(trip_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(stops)
    }

    pub async fn find_with_station(
        &self,
        stop_id: Uuid,
    ) -> Result<Option<TripStopWithStation>, AppError> {
        let query = format!("{} WHERE ts.id = $1", STOP_WITH_STATION_QUERY);

        let stop = sqlx::query_as::<_, TripStopWithStation>(&query)
            .bind(stop_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(stop)
    }

    /// Verificar que el arrêt existe y pertenece al viaje/empresa
    pub async fn stop_belongs_to_trip(
        &self,
        stop_id: Uuid,
        trip_id: Uuid,
        company_id: Uuid,
    ) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS( \
                SELECT 1 FROM trip_stops ts \
                JOIN trips t ON ts.trip_id = t.id \
                WHERE ts.id = $1 AND ts.trip_id = $2 AND t.company_id = $3)",
        )
        .bind(stop_id)
        .bind(trip_id)
        .bind(company_id)
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
        trip_id: Uuid,
        request: &CreateTripStopRequest,
    ) -> Result<TripStop, AppError> {
        let stop = sqlx::query_as::<_, TripStop>(
            r#"
            INSERT INTO trip_stops (
                id, trip_id, station_id, arrival_time, departure_time,
                stop_order, price, available_seats, platform, notes,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(trip_id)
        .bind(request.station_id)
        .bind(request.arrival_time)
        .bind(request.departure_time)
        .bind(request.stop_order)
        .bind(request.price)
        .bind(request.available_seats)
        .bind(&request.platform)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(stop)
    }

    pub async fn update(
        &self,
        stop_id: Uuid,
        request: &UpdateTripStopRequest,
    ) -> Result<(), AppError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE trip_stops SET updated_at = NOW()");

        if let Some(station_id) = request.station_id {
            builder.push(", station_id = ").push_bind(station_id);
        }
        if let Some(arrival_time) = request.arrival_time {
            builder.push(", arrival_time = ").push_bind(arrival_time);
        }
        if let Some(departure_time) = request.departure_time {
            builder.push(", departure_time = ").push_bind(departure_time);
        }
        if let Some(stop_order) = request.stop_order {
            builder.push(", stop_order = ").push_bind(stop_order);
        }
        if let Some(price) = request.price {
            builder.push(", price = ").push_bind(price);
        }
        if let Some(available_seats) = request.available_seats {
            builder.push(", available_seats = ").push_bind(available_seats);
        }
        if let Some(boarding_count) = request.boarding_count {
            builder.push(", boarding_count = ").push_bind(boarding_count);
        }
        if let Some(alighting_count) = request.alighting_count {
            builder.push(", alighting_count = ").push_bind(alighting_count);
        }
        if let Some(ref status) = request.status {
            builder.push(", status = ").push_bind(status);
        }
        if let Some(ref platform) = request.platform {
            builder.push(", platform = ").push_bind(platform);
        }
        if let Some(ref notes) = request.notes {
            builder.push(", notes = ").push_bind(notes);
        }

        builder.push(" WHERE id = ").push_bind(stop_id);

        builder.build().execute(&self.pool).await?;

        Ok(())
    }

    /// Borrar un arrêt y renumerar los restantes como secuencia densa
    /// 1..N-1 ordenada por hora de llegada, atómicamente.
    pub async fn delete_and_reorder(
        &self,
        company_id: Uuid,
        trip_id: Uuid,
        stop_id: Uuid,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        // Lock sobre el viaje: serializa la renumeración frente a
        // inserciones/borrados concurrentes de arrêts del mismo viaje.
        let trip_exists: Option<Uuid> = sqlx::query_scalar(
            "SELECT id FROM trips WHERE id = $1 AND company_id = $2 FOR UPDATE",
        )
        .bind(trip_id)
        .bind(company_id)
        .fetch_optional(&mut *tx)
        .await?;

        if trip_exists.is_none() {
            return Err(AppError::NotFound(
                "Viaje no encontrado o no pertenece a esta empresa".to_string(),
            ));
        }

        let deleted = sqlx::query("DELETE FROM trip_stops WHERE id = $1 AND trip_id = $2")
            .bind(stop_id)
            .bind(trip_id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "Arrêt no encontrado o no pertenece a este viaje".to_string(),
            ));
        }

        let remaining: Vec<(Uuid, DateTime<Utc>)> =
            sqlx::query_as("SELECT id, arrival_time FROM trip_stops WHERE trip_id = $1")
                .bind(trip_id)
                .fetch_all(&mut *tx)
                .await?;

        for (id, stop_order) in renumber_by_arrival(remaining) {
            sqlx::query("UPDATE trip_stops SET stop_order = $2 WHERE id = $1")
                .bind(id)
                .bind(stop_order)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn stats(&self, trip_id: Uuid) -> Result<TripStopStatsRow, AppError> {
        let stats = sqlx::query_as::<_, TripStopStatsRow>(
            r#"
            SELECT
                COUNT(*) AS total_stops,
                COALESCE(SUM(boarding_count), 0) AS total_boardings,
                COALESCE(SUM(alighting_count), 0) AS total_alightings,
                MIN(available_seats) AS min_available_seats,
                COUNT(*) FILTER (WHERE status = 'completed') AS completed_stops,
                COUNT(*) FILTER (WHERE status = 'cancelled') AS cancelled_stops
            FROM trip_stops
            WHERE trip_id = $1
            "#,
        )
        .bind(trip_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }
}
