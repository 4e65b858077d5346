//! Controller de clientes

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::customer_dto::{
    CustomerLoginRequest, CustomerLoginResponse, CustomerResponse, CustomerSummaryResponse,
    RegisterCustomerRequest, UpdateCustomerProfileRequest,
};
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::{validate_enum, validate_phone};

pub struct CustomerController {
    repository: CustomerRepository,
    jwt_config: JwtConfig,
}

impl CustomerController {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
            jwt_config,
        }
    }

    pub async fn register(
        &self,
        request: RegisterCustomerRequest,
    ) -> Result<CustomerResponse, AppError> {
        request.validate()?;

        validate_phone(&request.phone)
            .map_err(|_| validation_error("phone", "número de teléfono inválido"))?;

        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict("Este email ya está en uso".to_string()));
        }

        if self.repository.phone_exists(&request.phone).await? {
            return Err(AppError::Conflict(
                "Este número de teléfono ya está en uso".to_string(),
            ));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let customer = self.repository.create(&request, password_hash).await?;

        Ok(customer.into())
    }

    pub async fn login(
        &self,
        request: CustomerLoginRequest,
    ) -> Result<CustomerLoginResponse, AppError> {
        let customer = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                AppError::Unauthorized("Email o contraseña incorrectos".to_string())
            })?;

        let valid = verify(&request.password, &customer.password)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized(
                "Email o contraseña incorrectos".to_string(),
            ));
        }

        self.repository.touch_last_login(customer.id).await?;

        let token = generate_token(customer.id, "customer", &self.jwt_config)?;

        Ok(CustomerLoginResponse {
            token,
            customer: customer.into(),
        })
    }

    pub async fn get_profile(&self, customer_id: Uuid) -> Result<CustomerResponse, AppError> {
        let customer = self
            .repository
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        Ok(customer.into())
    }

    pub async fn update_profile(
        &self,
        customer_id: Uuid,
        request: UpdateCustomerProfileRequest,
    ) -> Result<CustomerResponse, AppError> {
        request.validate()?;

        if self.repository.find_by_id(customer_id).await?.is_none() {
            return Err(AppError::NotFound("Cliente no encontrado".to_string()));
        }

        self.repository.update_profile(customer_id, &request).await?;

        let updated = self
            .repository
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal("Cliente actualizado pero no recuperable".to_string())
            })?;

        Ok(updated.into())
    }

    pub async fn list(&self) -> Result<Vec<CustomerSummaryResponse>, AppError> {
        let customers = self.repository.list_all().await?;

        Ok(customers
            .into_iter()
            .map(|c| CustomerSummaryResponse {
                id: c.id,
                first_name: c.first_name,
                last_name: c.last_name,
                email: c.email,
                phone: c.phone,
                profile_photo: c.profile_photo,
                city: c.city,
                country: c.country,
                account_status: c.account_status,
                email_verified: c.email_verified,
                phone_verified: c.phone_verified,
                last_login: c.last_login,
                created_at: c.created_at,
            })
            .collect())
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<(), AppError> {
        validate_enum(status, &["active", "inactive", "suspended"])
            .map_err(|_| validation_error("status", "estado de cuenta desconocido"))?;

        self.repository.update_status(id, status).await
    }
}
