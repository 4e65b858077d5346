//! Repositorio de estaciones

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::station_dto::{CreateStationRequest, UpdateStationRequest};
use crate::models::station::Station;
use crate::utils::errors::AppError;

/// Fila de estación con sus contadores de movimientos
#[derive(Debug, sqlx::FromRow)]
pub struct StationWithMovements {
    #[sqlx(flatten)]
    pub station: Station,
    pub departures_count: i64,
    pub arrivals_count: i64,
    pub stops_count: i64,
}

const STATION_WITH_MOVEMENTS_QUERY: &str = r#"
    SELECT
        st.*,
        (SELECT COUNT(DISTINCT t.id) FROM trips t
         JOIN routes r ON t.route_id = r.id
         WHERE r.departure_station_id = st.id AND t.company_id = st.company_id) AS departures_count,
        (SELECT COUNT(DISTINCT t.id) FROM trips t
         JOIN routes r ON t.route_id = r.id
         WHERE r.arrival_station_id = st.id AND t.company_id = st.company_id) AS arrivals_count,
        (SELECT COUNT(DISTINCT ts.trip_id) FROM trip_stops ts
         JOIN trips t ON ts.trip_id = t.id
         WHERE ts.station_id = st.id AND t.company_id = st.company_id) AS stops_count
    FROM stations st
"#;

pub struct StationRepository {
    pool: PgPool,
}

impl StationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        request: &CreateStationRequest,
    ) -> Result<Station, AppError> {
        let features = request.features.clone().unwrap_or_default();

        let station = sqlx::query_as::<_, Station>(
            r#"
            INSERT INTO stations (
                id, company_id, name, city, address, phone, email, capacity,
                latitude, longitude, is_main_station, features, status,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                    'active', NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(&request.name)
        .bind(&request.city)
        .bind(&request.address)
        .bind(&request.phone)
        .bind(&request.email)
        .bind(request.capacity.unwrap_or(0))
        .bind(request.latitude)
        .bind(request.longitude)
        .bind(request.is_main_station)
        .bind(sqlx::types::Json(features))
        .fetch_one(&self.pool)
        .await?;

        Ok(station)
    }

    pub async fn list_by_company(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<StationWithMovements>, AppError> {
        let query = format!(
            "{} WHERE st.company_id = $1 ORDER BY st.name ASC",
            STATION_WITH_MOVEMENTS_QUERY
        );

        let stations = sqlx::query_as::<_, StationWithMovements>(&query)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(stations)
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<Option<StationWithMovements>, AppError> {
        let query = format!(
            "{} WHERE st.id = $1 AND st.company_id = $2",
            STATION_WITH_MOVEMENTS_QUERY
        );

        let station = sqlx::query_as::<_, StationWithMovements>(&query)
            .bind(id)
            .bind(company_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(station)
    }

    pub async fn update(
        &self,
        id: Uuid,
        company_id: Uuid,
        request: &UpdateStationRequest,
    ) -> Result<(), AppError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE stations SET updated_at = NOW()");

        if let Some(ref name) = request.name {
            builder.push(", name = ").push_bind(name);
        }
        if let Some(ref city) = request.city {
            builder.push(", city = ").push_bind(city);
        }
        if let Some(ref address) = request.address {
            builder.push(", address = ").push_bind(address);
        }
        if let Some(ref phone) = request.phone {
            builder.push(", phone = ").push_bind(phone);
        }
        if let Some(ref email) = request.email {
            builder.push(", email = ").push_bind(email);
        }
        if let Some(capacity) = request.capacity {
            builder.push(", capacity = ").push_bind(capacity);
        }
        if let Some(latitude) = request.latitude {
            builder.push(", latitude = ").push_bind(latitude);
        }
        if let Some(longitude) = request.longitude {
            builder.push(", longitude = ").push_bind(longitude);
        }
        if let Some(is_main_station) = request.is_main_station {
            builder.push(", is_main_station = ").push_bind(is_main_station);
        }
        if let Some(ref features) = request.features {
            builder
                .push(", features = ")
                .push_bind(sqlx::types::Json(features.clone()));
        }
        if let Some(ref status) = request.status {
            builder.push(", status = ").push_bind(status);
        }

        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" AND company_id = ").push_bind(company_id);

        builder.build().execute(&self.pool).await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM stations WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "Estación no encontrada o no pertenece a esta empresa".to_string(),
            ));
        }

        Ok(())
    }
}
