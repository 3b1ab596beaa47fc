//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, MIN_JWT_SECRET_LENGTH,
    TOKEN_EXPIRATION_HOURS,
};
use crate::errors::{AppError, AppResult};

const DEV_ADMIN_SECRET: &str = "dev-admin-secret-key-minimum-32-chars!!";
const DEV_USER_SECRET: &str = "dev-user-secret-key-minimum-32-chars!!!";

/// Application configuration.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    admin_jwt_secret: String,
    user_jwt_secret: String,
    pub token_expiration_hours: i64,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("admin_jwt_secret", &"[REDACTED]")
            .field("user_jwt_secret", &"[REDACTED]")
            .field("token_expiration_hours", &self.token_expiration_hours)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// # Errors
    /// Fails when a signing secret is missing in a release build, is shorter
    /// than the minimum length, or when both domains share the same secret.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let admin_jwt_secret = secret_from_env("JWT_ADMIN_SECRET", DEV_ADMIN_SECRET)?;
        let user_jwt_secret = secret_from_env("JWT_USER_SECRET", DEV_USER_SECRET)?;

        Self::new(
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            admin_jwt_secret,
            user_jwt_secret,
        )
        .map(|config| Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            ..config
        })
    }

    /// Build a configuration from explicit values, using default host and port.
    pub fn new(
        database_url: impl Into<String>,
        admin_jwt_secret: impl Into<String>,
        user_jwt_secret: impl Into<String>,
    ) -> AppResult<Self> {
        let admin_jwt_secret = admin_jwt_secret.into();
        let user_jwt_secret = user_jwt_secret.into();

        for (name, secret) in [
            ("JWT_ADMIN_SECRET", &admin_jwt_secret),
            ("JWT_USER_SECRET", &user_jwt_secret),
        ] {
            if secret.len() < MIN_JWT_SECRET_LENGTH {
                return Err(AppError::internal(format!(
                    "{} must be at least {} characters long",
                    name, MIN_JWT_SECRET_LENGTH
                )));
            }
        }

        // The two signing domains never share a secret
        if admin_jwt_secret == user_jwt_secret {
            return Err(AppError::internal(
                "JWT_ADMIN_SECRET and JWT_USER_SECRET must differ",
            ));
        }

        Ok(Self {
            database_url: database_url.into(),
            admin_jwt_secret,
            user_jwt_secret,
            token_expiration_hours: TOKEN_EXPIRATION_HOURS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        })
    }

    /// Secret bytes of the admin signing domain.
    pub fn admin_secret_bytes(&self) -> &[u8] {
        self.admin_jwt_secret.as_bytes()
    }

    /// Secret bytes of the user signing domain.
    pub fn user_secret_bytes(&self) -> &[u8] {
        self.user_jwt_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn secret_from_env(name: &str, dev_default: &str) -> AppResult<String> {
    match env::var(name) {
        Ok(secret) => Ok(secret),
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("{} not set, using insecure default for development", name);
            Ok(dev_default.to_string())
        }
        Err(_) => Err(AppError::internal(format!(
            "{} environment variable must be set in production",
            name
        ))),
    }
}
