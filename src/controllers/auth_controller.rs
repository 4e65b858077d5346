//! Controller de autenticación de administración

use bcrypt::verify;
use sqlx::PgPool;

use crate::dto::auth_dto::{LoginRequest, LoginResponse, UserSummary};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    repository: UserRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt_config,
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = verify(&request.password, &user.password)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(user.id, &user.role, &self.jwt_config)?;

        tracing::info!("Login exitoso para {}", user.email);

        Ok(LoginResponse {
            token,
            user: UserSummary {
                id: user.id,
                email: user.email,
                full_name: user.full_name,
                role: user.role,
            },
        })
    }
}
