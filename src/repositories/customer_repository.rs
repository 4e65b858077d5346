//! Repositorio de clientes

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::customer_dto::{RegisterCustomerRequest, UpdateCustomerProfileRequest};
use crate::models::customer::Customer;
use crate::utils::errors::AppError;

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    pub async fn phone_exists(&self, phone: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE phone = $1)")
                .bind(phone)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    pub async fn create(
        &self,
        request: &RegisterCustomerRequest,
        password_hash: String,
    ) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (
                id, first_name, last_name, email, phone, password,
                date_of_birth, gender, address, city, country,
                id_card_number, id_card_type, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(password_hash)
        .bind(request.date_of_birth)
        .bind(&request.gender)
        .bind(&request.address)
        .bind(&request.city)
        .bind(&request.country)
        .bind(&request.id_card_number)
        .bind(&request.id_card_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(customer)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(customer)
    }

    pub async fn touch_last_login(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("UPDATE customers SET last_login = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        let customers =
            sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(customers)
    }

    pub async fn update_profile(
        &self,
        id: Uuid,
        request: &UpdateCustomerProfileRequest,
    ) -> Result<(), AppError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE customers SET updated_at = NOW()");

        if let Some(ref first_name) = request.first_name {
            builder.push(", first_name = ").push_bind(first_name);
        }
        if let Some(ref last_name) = request.last_name {
            builder.push(", last_name = ").push_bind(last_name);
        }
        if let Some(date_of_birth) = request.date_of_birth {
            builder.push(", date_of_birth = ").push_bind(date_of_birth);
        }
        if let Some(ref gender) = request.gender {
            builder.push(", gender = ").push_bind(gender);
        }
        if let Some(ref address) = request.address {
            builder.push(", address = ").push_bind(address);
        }
        if let Some(ref city) = request.city {
            builder.push(", city = ").push_bind(city);
        }
        if let Some(ref country) = request.country {
            builder.push(", country = ").push_bind(country);
        }
        if let Some(ref id_card_number) = request.id_card_number {
            builder.push(", id_card_number = ").push_bind(id_card_number);
        }
        if let Some(ref id_card_type) = request.id_card_type {
            builder.push(", id_card_type = ").push_bind(id_card_type);
        }

        builder.push(" WHERE id = ").push_bind(id);

        builder.build().execute(&self.pool).await?;

        Ok(())
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE customers SET account_status = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(status)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Cliente no encontrado".to_string()));
        }

        Ok(())
    }
}
