//! Authentication service - registration and login for both identity spaces.
//!
//! Admins and users go through the same code path; the `AccountKind`
//! selects the table and the signing domain of the issued token.

use async_trait::async_trait;
use std::sync::Arc;

use super::token_service::{AdminClaims, TokenService, UserClaims};
use crate::config::MSG_USERNAME_EXISTS;
use crate::domain::{AccountKind, AccountResponse, NewAccount, Password};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Registration input; presence of `username` is checked by the handler
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Authenticated account and its freshly issued token
#[derive(Debug, Clone)]
pub struct Session {
    pub account: AccountResponse,
    pub token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new account of `kind`
    async fn register(&self, kind: AccountKind, registration: Registration)
        -> AppResult<AccountResponse>;

    /// Verify credentials and issue a token in the signing domain of `kind`
    async fn login(&self, kind: AccountKind, email: String, password: String) -> AppResult<Session>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    admin_tokens: Arc<TokenService<AdminClaims>>,
    user_tokens: Arc<TokenService<UserClaims>>,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(
        uow: Arc<U>,
        admin_tokens: Arc<TokenService<AdminClaims>>,
        user_tokens: Arc<TokenService<UserClaims>>,
    ) -> Self {
        Self {
            uow,
            admin_tokens,
            user_tokens,
        }
    }

    fn issue(&self, kind: AccountKind, account: &AccountResponse) -> AppResult<String> {
        match kind {
            AccountKind::Admin => self.admin_tokens.issue(account.id),
            AccountKind::User => self.user_tokens.issue(account.id),
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(
        &self,
        kind: AccountKind,
        registration: Registration,
    ) -> AppResult<AccountResponse> {
        let accounts = self.uow.accounts(kind);

        if accounts
            .find_by_username(&registration.username)
            .await?
            .is_some()
        {
            return Err(AppError::validation(MSG_USERNAME_EXISTS));
        }

        let password_hash = Password::new(&registration.password)?.into_string();

        let account = accounts
            .create(NewAccount {
                firstname: registration.firstname,
                lastname: registration.lastname,
                username: registration.username,
                email: registration.email,
                password_hash,
            })
            .await?;

        tracing::info!(kind = %kind, id = %account.id, "Account registered");
        Ok(AccountResponse::from(account))
    }

    async fn login(&self, kind: AccountKind, email: String, password: String) -> AppResult<Session> {
        let account = self.uow.accounts(kind).find_by_email(&email).await?;

        // Verify against a dummy hash when nothing matched so both paths cost the same
        let stored = match &account {
            Some(account) => Password::from_hash(account.password_hash.clone()),
            None => Password::dummy(),
        };
        let password_valid = stored.verify(&password);

        let account = match account {
            Some(account) if password_valid => AccountResponse::from(account),
            _ => return Err(AppError::InvalidCredentials),
        };

        let token = self.issue(kind, &account)?;
        Ok(Session { account, token })
    }
}
