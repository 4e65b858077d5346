//! Controller de analytics de reservas

use rust_decimal::Decimal;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::repositories::analytics_repository::AnalyticsRepository;
use crate::utils::errors::AppError;

/// Porcentaje de comisión de la plataforma sobre cada reserva
const COMMISSION_PERCENTAGE: u32 = 15;

pub struct AnalyticsController {
    repository: AnalyticsRepository,
}

impl AnalyticsController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AnalyticsRepository::new(pool),
        }
    }

    pub async fn booking_stats(&self) -> Result<Value, AppError> {
        let stats = self.repository.booking_stats().await?;

        let commission_rate = Decimal::new(COMMISSION_PERCENTAGE as i64, 2);
        let total_commission = stats.revenue * commission_rate;
        let average_commission = if stats.total > 0 {
            total_commission / Decimal::from(stats.total)
        } else {
            Decimal::ZERO
        };

        Ok(json!({
            "total": stats.total,
            "completed": stats.completed,
            "cancelled": stats.cancelled,
            "pending": stats.pending,
            "revenue": stats.revenue,
            "averagePrice": stats.average_price,
            "commission": {
                "percentage": COMMISSION_PERCENTAGE,
                "totalAmount": total_commission,
                "averagePerBooking": average_commission,
            }
        }))
    }

    pub async fn company_performance(&self) -> Result<Value, AppError> {
        let rows = self.repository.company_performance().await?;
        Ok(json!(rows))
    }

    pub async fn revenue_over_time(&self) -> Result<Value, AppError> {
        let rows = self.repository.revenue_over_time().await?;
        Ok(json!(rows))
    }
}
