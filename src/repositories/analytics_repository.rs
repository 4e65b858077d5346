//! Repositorio de analytics de reservas
//!
//! Rollups de los últimos 30 días sobre la tabla de reservas.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::utils::errors::AppError;

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct BookingStatsRow {
    pub total: i64,
    pub completed: i64,
    pub cancelled: i64,
    pub pending: i64,
    pub revenue: Decimal,
    pub average_price: Decimal,
}

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct CompanyPerformanceRow {
    pub company_id: Uuid,
    pub company_name: String,
    pub total_bookings: i64,
    pub revenue: Decimal,
    pub completion_rate: f64,
}

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct DailyRevenueRow {
    pub date: NaiveDate,
    pub amount: Decimal,
}

pub struct AnalyticsRepository {
    pool: PgPool,
}

impl AnalyticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn booking_stats(&self) -> Result<BookingStatsRow, AppError> {
        let stats = sqlx::query_as::<_, BookingStatsRow>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'completed') AS completed,
                COUNT(*) FILTER (WHERE status = 'cancelled') AS cancelled,
                COUNT(*) FILTER (WHERE status = 'pending') AS pending,
                COALESCE(SUM(total_amount), 0) AS revenue,
                COALESCE(AVG(total_amount), 0) AS average_price
            FROM bookings
            WHERE created_at >= NOW() - INTERVAL '30 days'
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }

    pub async fn company_performance(&self) -> Result<Vec<CompanyPerformanceRow>, AppError> {
        let rows = sqlx::query_as::<_, CompanyPerformanceRow>(
            r#"
            SELECT
                c.id AS company_id,
                c.name AS company_name,
                COUNT(b.booking_id) AS total_bookings,
                COALESCE(SUM(b.total_amount), 0) AS revenue,
                CASE
                    WHEN COUNT(b.booking_id) > 0 THEN
                        (COUNT(*) FILTER (WHERE b.status = 'completed'))::float8
                            / COUNT(b.booking_id)::float8
                    ELSE 0
                END AS completion_rate
            FROM companies c
            LEFT JOIN trips t ON t.company_id = c.id
            LEFT JOIN bookings b ON b.trip_id = t.id
            GROUP BY c.id, c.name
            ORDER BY revenue DESC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn revenue_over_time(&self) -> Result<Vec<DailyRevenueRow>, AppError> {
        let rows = sqlx::query_as::<_, DailyRevenueRow>(
            r#"
            SELECT
                created_at::date AS date,
                COALESCE(SUM(total_amount), 0) AS amount
            FROM bookings
            WHERE created_at >= NOW() - INTERVAL '30 days'
            GROUP BY created_at::date
            ORDER BY date
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
