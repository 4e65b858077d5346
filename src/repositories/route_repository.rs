//! Repositorio de rutas
//!
//! El par (departure, arrival) es único dentro de cada empresa; el mismo
//! par en otra empresa es válido.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::route_dto::CreateRouteRequest;
use crate::models::route::Route;
use crate::utils::errors::AppError;

/// Fila de ruta con los nombres de sus estaciones
#[derive(Debug, sqlx::FromRow)]
pub struct RouteWithStations {
    #[sqlx(flatten)]
    pub route: Route,
    pub departure_station_name: String,
    pub arrival_station_name: String,
}

const ROUTE_WITH_STATIONS_QUERY: &str = r#"
    SELECT
        r.*,
        ds.name AS departure_station_name,
        arr_s.name AS arrival_station_name
    FROM routes r
    JOIN stations ds ON r.departure_station_id = ds.id
    JOIN stations arr_s ON r.arrival_station_id = arr_s.id
"#;

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Verificar que ambas estaciones existen y pertenecen a la empresa
    pub async fn stations_belong_to_company(
        &self,
        departure_station_id: Uuid,
        arrival_station_id: Uuid,
        company_id: Uuid,
    ) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM stations \
             WHERE (id = $1 OR id = $2) AND company_id = $3",
        )
        .bind(departure_station_id)
        .bind(arrival_station_id)
        .bind(company_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count == 2)
    }

    /// Verificar si ya existe una ruta con el mismo par de estaciones
    pub async fn pair_exists(
        &self,
        departure_station_id: Uuid,
        arrival_station_id: Uuid,
        company_id: Uuid,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM routes \
             WHERE departure_station_id = $1 AND arrival_station_id = $2 \
               AND company_id = $3 AND ($4::uuid IS NULL OR id != $4))",
        )
        .bind(departure_station_id)
        .bind(arrival_station_id)
        .bind(company_id)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        request: &CreateRouteRequest,
    ) -> Result<Route, AppError> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (
                id, company_id, departure_station_id, arrival_station_id,
                distance, duration, base_price, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(request.departure_station_id)
        .bind(request.arrival_station_id)
        .bind(request.distance)
        .bind(request.duration)
        .bind(request.base_price)
        .fetch_one(&self.pool)
        .await?;

        Ok(route)
    }

    pub async fn list_by_company(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<RouteWithStations>, AppError> {
        let query = format!(
            "{} WHERE r.company_id = $1 ORDER BY r.created_at DESC",
            ROUTE_WITH_STATIONS_QUERY
        );

        let routes = sqlx::query_as::<_, RouteWithStations>(&query)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(routes)
    }

    pub async fn find_with_stations(
        &self,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<Option<RouteWithStations>, AppError> {
        let query = format!(
            "{} WHERE r.id = $1 AND r.company_id = $2",
            ROUTE_WITH_STATIONS_QUERY
        );

        let route = sqlx::query_as::<_, RouteWithStations>(&query)
            .bind(id)
            .bind(company_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(route)
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<Option<Route>, AppError> {
        let route =
            sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE id = $1 AND company_id = $2")
                .bind(id)
                .bind(company_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(route)
    }

    pub async fn update(
        &self,
        id: Uuid,
        company_id: Uuid,
        departure_station_id: Option<Uuid>,
        arrival_station_id: Option<Uuid>,
        distance: Option<rust_decimal::Decimal>,
        duration: Option<i32>,
        base_price: Option<rust_decimal::Decimal>,
    ) -> Result<(), AppError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE routes SET updated_at = NOW()");

        if let Some(departure) = departure_station_id {
            builder.push(", departure_station_id = ").push_bind(departure);
        }
        if let Some(arrival) = arrival_station_id {
            builder.push(", arrival_station_id = ").push_bind(arrival);
        }
        if let Some(distance) = distance {
            builder.push(", distance = ").push_bind(distance);
        }
        if let Some(duration) = duration {
            builder.push(", duration = ").push_bind(duration);
        }
        if let Some(base_price) = base_price {
            builder.push(", base_price = ").push_bind(base_price);
        }

        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" AND company_id = ").push_bind(company_id);

        builder.build().execute(&self.pool).await?;

        Ok(())
    }

    /// Borrar una ruta. Rechazada si tiene viajes programados o en curso.
    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<Uuid> = sqlx::query_scalar(
            "SELECT id FROM routes WHERE id = $1 AND company_id = $2 FOR UPDATE",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&mut *tx)
        .await?;

        if exists.is_none() {
            return Err(AppError::NotFound(
                "Ruta no encontrada o no pertenece a esta empresa".to_string(),
            ));
        }

        let has_dependent_trips: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM trips \
             WHERE route_id = $1 AND status IN ('scheduled', 'in_progress'))",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        if has_dependent_trips {
            return Err(AppError::Conflict(
                "Imposible eliminar esta ruta: tiene viajes programados o en curso".to_string(),
            ));
        }

        sqlx::query("DELETE FROM routes WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
