//! Controller del dashboard global

use serde_json::{json, Value};
use sqlx::PgPool;

use crate::repositories::dashboard_repository::DashboardRepository;
use crate::utils::errors::AppError;

pub struct DashboardController {
    repository: DashboardRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DashboardRepository::new(pool),
        }
    }

    pub async fn stats(&self) -> Result<Value, AppError> {
        let customers = self.repository.customer_stats().await?;
        let companies = self.repository.company_stats().await?;
        let trips = self.repository.trip_stats().await?;

        Ok(json!({
            "customers": customers,
            "companies": companies,
            "trips": trips,
            // Rollup de reservas pendiente de cablear al dashboard
            "bookings": {
                "total_bookings": 0,
                "pending_bookings": 0,
                "completed_bookings": 0,
                "revenue_30d": 0
            }
        }))
    }

    pub async fn customer_growth(&self) -> Result<Value, AppError> {
        let rows = self.repository.customer_growth().await?;
        Ok(json!(rows))
    }

    pub async fn company_stats(&self) -> Result<Value, AppError> {
        let rows = self.repository.top_companies().await?;
        Ok(json!(rows))
    }

    pub async fn trip_stats(&self) -> Result<Value, AppError> {
        let rows = self.repository.daily_trips().await?;
        Ok(json!(rows))
    }

    pub async fn recent_activities(&self) -> Result<Value, AppError> {
        let customers = self.repository.recent_customers().await?;
        let companies = self.repository.recent_companies().await?;
        let trips = self.repository.recent_trips().await?;

        let mut activities: Vec<Value> = Vec::new();

        for row in customers {
            activities.push(json!({
                "type": "new_customer",
                "id": row.id,
                "name": row.name,
                "date": row.date,
            }));
        }
        for row in companies {
            activities.push(json!({
                "type": "new_company",
                "id": row.id,
                "name": row.name,
                "date": row.date,
            }));
        }
        for row in trips {
            activities.push(json!({
                "type": "new_trip",
                "id": row.id,
                "name": row.name,
                "date": row.date,
            }));
        }

        // Ordenar por fecha descendente y conservar las 10 más recientes
        activities.sort_by(|a, b| {
            b["date"]
                .as_str()
                .unwrap_or_default()
                .cmp(a["date"].as_str().unwrap_or_default())
        });
        activities.truncate(10);

        Ok(json!(activities))
    }
}
