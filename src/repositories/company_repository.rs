//! Repositorio de compañías
//!
//! La creación inserta la compañía y sus tablas de join (zonas de
//! cobertura y tipos de transporte) en una sola transacción.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::company_dto::{
    CompanyDriverSummary, CompanyVehicleSummary, CreateCompanyRequest, UpcomingTripResponse,
    UpdateCompanyRequest,
};
use crate::models::company::Company;
use crate::models::trip::TripStatus;
use crate::utils::errors::AppError;

/// Fila de compañía con sus contadores
#[derive(Debug, sqlx::FromRow)]
pub struct CompanyWithCounts {
    #[sqlx(flatten)]
    pub company: Company,
    pub stations_count: i64,
    pub drivers_count: i64,
    pub vehicles_count: i64,
}

/// Fila de compañía con los contadores del detalle
#[derive(Debug, sqlx::FromRow)]
pub struct CompanyDetailCounts {
    #[sqlx(flatten)]
    pub company: Company,
    pub stations_count: i64,
    pub drivers_count: i64,
    pub vehicles_count: i64,
    pub trips_count: i64,
}

/// Fila de viaje del detalle de compañía (sin sus arrêts)
#[derive(Debug, sqlx::FromRow)]
pub struct CompanyTripRow {
    pub id: Uuid,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub distance: Decimal,
    pub duration: i32,
    pub base_price: Decimal,
    pub total_price: Decimal,
    pub available_seats: i32,
    pub status: TripStatus,
    pub vehicle_number: String,
    pub vehicle_brand: String,
    pub vehicle_model: String,
    pub driver_name: String,
    pub departure_station: String,
    pub departure_city: String,
    pub arrival_station: String,
    pub arrival_city: String,
}

/// Fila de arrêt del detalle de compañía
#[derive(Debug, sqlx::FromRow)]
pub struct CompanyTripStopRow {
    pub trip_id: Uuid,
    pub station_name: String,
    pub station_city: String,
    pub arrival_time: DateTime<Utc>,
    pub departure_time: DateTime<Utc>,
    pub stop_order: i32,
}

pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateCompanyRequest) -> Result<Company, AppError> {
        let mut tx = self.pool.begin().await?;

        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (
                id, name, email, alternate_email, phone, alternate_phone,
                whatsapp, address, city, district, postal_code, website,
                description, logo_url, registration_number, tax_number,
                legal_status, creation_date, manager_name, manager_position,
                insurance_provider, insurance_policy_number,
                insurance_expiry_date, latitude, longitude, status,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24,
                    $25, 'active', NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.alternate_email)
        .bind(&request.phone)
        .bind(&request.alternate_phone)
        .bind(&request.whatsapp)
        .bind(&request.address)
        .bind(&request.city)
        .bind(&request.district)
        .bind(&request.postal_code)
        .bind(&request.website)
        .bind(&request.description)
        .bind(&request.logo_url)
        .bind(&request.registration_number)
        .bind(&request.tax_number)
        .bind(&request.legal_status)
        .bind(request.creation_date)
        .bind(&request.manager_name)
        .bind(&request.manager_position)
        .bind(&request.insurance_provider)
        .bind(&request.insurance_policy_number)
        .bind(request.insurance_expiry_date)
        .bind(request.latitude)
        .bind(request.longitude)
        .fetch_one(&mut *tx)
        .await?;

        for city in &request.coverage_areas {
            sqlx::query("INSERT INTO coverage_areas (id, company_id, city) VALUES ($1, $2, $3)")
                .bind(Uuid::new_v4())
                .bind(company.id)
                .bind(city)
                .execute(&mut *tx)
                .await?;
        }

        for transport_type in &request.transport_types {
            sqlx::query("INSERT INTO transport_types (id, company_id, type) VALUES ($1, $2, $3)")
                .bind(Uuid::new_v4())
                .bind(company.id)
                .bind(transport_type)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(company)
    }

    pub async fn list_with_counts(&self) -> Result<Vec<CompanyWithCounts>, AppError> {
        let companies = sqlx::query_as::<_, CompanyWithCounts>(
            r#"
            SELECT
                c.*,
                (SELECT COUNT(*) FROM stations WHERE company_id = c.id) AS stations_count,
                (SELECT COUNT(*) FROM personnel
                 WHERE company_id = c.id AND type = 'driver') AS drivers_count,
                (SELECT COUNT(*) FROM vehicles WHERE company_id = c.id) AS vehicles_count
            FROM companies c
            ORDER BY c.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(companies)
    }

    pub async fn find_with_counts(&self, id: Uuid) -> Result<Option<CompanyDetailCounts>, AppError> {
        let company = sqlx::query_as::<_, CompanyDetailCounts>(
            r#"
            SELECT
                c.*,
                (SELECT COUNT(*) FROM stations WHERE company_id = c.id) AS stations_count,
                (SELECT COUNT(*) FROM personnel
                 WHERE company_id = c.id AND type = 'driver') AS drivers_count,
                (SELECT COUNT(*) FROM vehicles WHERE company_id = c.id) AS vehicles_count,
                (SELECT COUNT(*) FROM trips WHERE company_id = c.id) AS trips_count
            FROM companies c
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    pub async fn coverage_areas(&self, company_id: Uuid) -> Result<Vec<String>, AppError> {
        let cities: Vec<String> =
            sqlx::query_scalar("SELECT city FROM coverage_areas WHERE company_id = $1")
                .bind(company_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(cities)
    }

    pub async fn transport_types(&self, company_id: Uuid) -> Result<Vec<String>, AppError> {
        let types: Vec<String> =
            sqlx::query_scalar("SELECT type FROM transport_types WHERE company_id = $1")
                .bind(company_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(types)
    }

    pub async fn update(&self, id: Uuid, request: &UpdateCompanyRequest) -> Result<(), AppError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE companies SET updated_at = NOW()");

        if let Some(ref name) = request.name {
            builder.push(", name = ").push_bind(name);
        }
        if let Some(ref email) = request.email {
            builder.push(", email = ").push_bind(email);
        }
        if let Some(ref phone) = request.phone {
            builder.push(", phone = ").push_bind(phone);
        }
        if let Some(ref address) = request.address {
            builder.push(", address = ").push_bind(address);
        }
        if let Some(ref logo_url) = request.logo_url {
            builder.push(", logo_url = ").push_bind(logo_url);
        }
        if let Some(ref status) = request.status {
            builder.push(", status = ").push_bind(status);
        }

        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Compañía no encontrada".to_string()));
        }

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Compañía no encontrada".to_string()));
        }

        Ok(())
    }

    pub async fn vehicles_summary(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<CompanyVehicleSummary>, AppError> {
        let vehicles = sqlx::query_as::<_, CompanyVehicleSummary>(
            "SELECT id, brand, model, registration_number, capacity, status, created_at \
             FROM vehicles WHERE company_id = $1",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn drivers_summary(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<CompanyDriverSummary>, AppError> {
        let drivers = sqlx::query_as::<_, CompanyDriverSummary>(
            "SELECT id, first_name, last_name, phone, license_number, status, created_at \
             FROM personnel WHERE company_id = $1 AND type = 'driver'",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(drivers)
    }

    /// Próximos 5 departures programados desde una estación
    pub async fn next_departures(
        &self,
        station_id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<UpcomingTripResponse>, AppError> {
        let trips = sqlx::query_as::<_, UpcomingTripResponse>(
            r#"
            SELECT
                t.id, t.departure_time, t.arrival_time, t.available_seats, t.price,
                arr_s.name AS station_name,
                arr_s.city AS station_city,
                v.registration_number AS vehicle_number
            FROM trips t
            JOIN routes r ON t.route_id = r.id
            JOIN stations arr_s ON r.arrival_station_id = arr_s.id
            JOIN vehicles v ON t.vehicle_id = v.id
            WHERE r.departure_station_id = $1
              AND t.company_id = $2
              AND t.status = 'scheduled'
              AND t.departure_time >= NOW()
            ORDER BY t.departure_time ASC
            LIMIT 5
            "#,
        )
        .bind(station_id)
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    /// Próximas 5 arrivals programadas hacia una estación
    pub async fn next_arrivals(
        &self,
        station_id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<UpcomingTripResponse>, AppError> {
        let trips = sqlx::query_as::<_, UpcomingTripResponse>(
            r#"
            SELECT
                t.id, t.departure_time, t.arrival_time, t.available_seats, t.price,
                dep_s.name AS station_name,
                dep_s.city AS station_city,
                v.registration_number AS vehicle_number
            FROM trips t
            JOIN routes r ON t.route_id = r.id
            JOIN stations dep_s ON r.departure_station_id = dep_s.id
            JOIN vehicles v ON t.vehicle_id = v.id
            WHERE r.arrival_station_id = $1
              AND t.company_id = $2
              AND t.status = 'scheduled'
              AND t.arrival_time >= NOW()
            ORDER BY t.arrival_time ASC
            LIMIT 5
            "#,
        )
        .bind(station_id)
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    pub async fn trips_summary(&self, company_id: Uuid) -> Result<Vec<CompanyTripRow>, AppError> {
        let trips = sqlx::query_as::<_, CompanyTripRow>(
            r#"
            SELECT
                t.id, t.departure_time, t.arrival_time,
                r.distance, r.duration, r.base_price,
                t.price AS total_price, t.available_seats, t.status,
                v.registration_number AS vehicle_number,
                v.brand AS vehicle_brand,
                v.model AS vehicle_model,
                d.first_name || ' ' || d.last_name AS driver_name,
                ds.name AS departure_station,
                ds.city AS departure_city,
                arr_s.name AS arrival_station,
                arr_s.city AS arrival_city
            FROM trips t
            JOIN routes r ON t.route_id = r.id
            JOIN vehicles v ON t.vehicle_id = v.id
            JOIN personnel d ON t.driver_id = d.id
            JOIN stations ds ON r.departure_station_id = ds.id
            JOIN stations arr_s ON r.arrival_station_id = arr_s.id
            WHERE t.company_id = $1
            ORDER BY t.departure_time ASC
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    pub async fn stops_for_trips(
        &self,
        trip_ids: &[Uuid],
    ) -> Result<Vec<CompanyTripStopRow>, AppError> {
        if trip_ids.is_empty() {
            return Ok(Vec::new());
        }

        let stops = sqlx::query_as::<_, CompanyTripStopRow>(
            r#"
            SELECT
                ts.trip_id,
                s.name AS station_name,
                s.city AS station_city,
                ts.arrival_time, ts.departure_time, ts.stop_order
            FROM trip_stops ts
            JOIN stations s ON ts.station_id = s.id
            WHERE ts.trip_id = ANY($1)
            ORDER BY ts.stop_order ASC
            "#,
        )
        .bind(trip_ids.to_vec())
        .fetch_all(&self.pool)
        .await?;

        Ok(stops)
    }
}
