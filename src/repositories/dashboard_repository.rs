//! Repositorio del dashboard global
//!
//! Rollups SQL directos; sin caché ni pre-agregación.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::utils::errors::AppError;

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct CustomerStatsRow {
    pub total_customers: i64,
    pub active_customers: i64,
    pub verified_customers: i64,
    pub new_customers_30d: i64,
}

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct CompanyStatsRow {
    pub total_companies: i64,
    pub active_companies: i64,
    pub new_companies_30d: i64,
}

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct TripStatsRow {
    pub total_trips: i64,
    pub upcoming_trips: i64,
    pub new_trips_30d: i64,
}

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct CustomerGrowthRow {
    pub month: String,
    pub new_customers: i64,
    pub active_customers: i64,
}

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct CompanyActivityRow {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub total_trips: i64,
    pub total_personnel: i64,
}

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct DailyTripsRow {
    pub date: NaiveDate,
    pub total_trips: i64,
    pub companies_count: i64,
}

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct RecentActivityRow {
    pub id: Uuid,
    pub name: String,
    pub date: DateTime<Utc>,
}

pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn customer_stats(&self) -> Result<CustomerStatsRow, AppError> {
        let stats = sqlx::query_as::<_, CustomerStatsRow>(
            r#"
            SELECT
                COUNT(*) AS total_customers,
                COUNT(*) FILTER (WHERE account_status = 'active') AS active_customers,
                COUNT(*) FILTER (WHERE email_verified) AS verified_customers,
                COUNT(*) FILTER (WHERE created_at >= NOW() - INTERVAL '30 days')
                    AS new_customers_30d
            FROM customers
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }

    pub async fn company_stats(&self) -> Result<CompanyStatsRow, AppError> {
        let stats = sqlx::query_as::<_, CompanyStatsRow>(
            r#"
            SELECT
                COUNT(*) AS total_companies,
                COUNT(*) FILTER (WHERE status = 'active') AS active_companies,
                COUNT(*) FILTER (WHERE created_at >= NOW() - INTERVAL '30 days')
                    AS new_companies_30d
            FROM companies
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }

    pub async fn trip_stats(&self) -> Result<TripStatsRow, AppError> {
        let stats = sqlx::query_as::<_, TripStatsRow>(
            r#"
            SELECT
                COUNT(*) AS total_trips,
                COUNT(*) FILTER (WHERE departure_time >= NOW()) AS upcoming_trips,
                COUNT(*) FILTER (WHERE created_at >= NOW() - INTERVAL '30 days')
                    AS new_trips_30d
            FROM trips
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }

    pub async fn customer_growth(&self) -> Result<Vec<CustomerGrowthRow>, AppError> {
        let rows = sqlx::query_as::<_, CustomerGrowthRow>(
            r#"
            SELECT
                to_char(created_at, 'YYYY-MM') AS month,
                COUNT(*) AS new_customers,
                COUNT(*) FILTER (WHERE account_status = 'active') AS active_customers
            FROM customers
            WHERE created_at >= NOW() - INTERVAL '12 months'
            GROUP BY to_char(created_at, 'YYYY-MM')
            ORDER BY month ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn top_companies(&self) -> Result<Vec<CompanyActivityRow>, AppError> {
        let rows = sqlx::query_as::<_, CompanyActivityRow>(
            r#"
            SELECT
                c.id, c.name, c.city,
                COUNT(DISTINCT t.id) AS total_trips,
                COUNT(DISTINCT p.id) AS total_personnel
            FROM companies c
            LEFT JOIN trips t ON t.company_id = c.id
            LEFT JOIN personnel p ON p.company_id = c.id
            WHERE c.status = 'active'
            GROUP BY c.id, c.name, c.city
            ORDER BY total_trips DESC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn daily_trips(&self) -> Result<Vec<DailyTripsRow>, AppError> {
        let rows = sqlx::query_as::<_, DailyTripsRow>(
            r#"
            SELECT
                departure_time::date AS date,
                COUNT(*) AS total_trips,
                COUNT(DISTINCT company_id) AS companies_count
            FROM trips
            WHERE departure_time BETWEEN NOW() - INTERVAL '30 days'
                                     AND NOW() + INTERVAL '30 days'
            GROUP BY departure_time::date
            ORDER BY date ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn recent_customers(&self) -> Result<Vec<RecentActivityRow>, AppError> {
        let rows = sqlx::query_as::<_, RecentActivityRow>(
            r#"
            SELECT id, first_name || ' ' || last_name AS name, created_at AS date
            FROM customers
            WHERE created_at >= NOW() - INTERVAL '7 days'
            ORDER BY created_at DESC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn recent_companies(&self) -> Result<Vec<RecentActivityRow>, AppError> {
        let rows = sqlx::query_as::<_, RecentActivityRow>(
            r#"
            SELECT id, name, created_at AS date
            FROM companies
            WHERE created_at >= NOW() - INTERVAL '7 days'
            ORDER BY created_at DESC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn recent_trips(&self) -> Result<Vec<RecentActivityRow>, AppError> {
        let rows = sqlx::query_as::<_, RecentActivityRow>(
            r#"
            SELECT
                t.id,
                c.name || ' - ' || ds.city || ' -> ' || arr_s.city AS name,
                t.created_at AS date
            FROM trips t
            JOIN companies c ON t.company_id = c.id
            JOIN routes r ON t.route_id = r.id
            JOIN stations ds ON r.departure_station_id = ds.id
            JOIN stations arr_s ON r.arrival_station_id = arr_s.id
            WHERE t.created_at >= NOW() - INTERVAL '7 days'
            ORDER BY t.created_at DESC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
