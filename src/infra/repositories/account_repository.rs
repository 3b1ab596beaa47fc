//! Admin and user account repositories.
//!
//! Both tables share one trait; the stores differ only in the entity
//! they target.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::base::unique_violation_as;
use super::entities::{admin, user};
use crate::config::MSG_USERNAME_EXISTS;
use crate::domain::{Account, NewAccount};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by its unique username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;

    /// Find the first account registered with this email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Insert a new account; a duplicate username fails with a validation error
    async fn create(&self, account: NewAccount) -> AppResult<Account>;
}

macro_rules! account_store {
    ($(#[$doc:meta])* $name:ident, $entity:ident) => {
        $(#[$doc])*
        pub struct $name {
            db: DatabaseConnection,
        }

        impl $name {
            /// Create new repository instance
            pub fn new(db: DatabaseConnection) -> Self {
                Self { db }
            }
        }

        #[async_trait]
        impl AccountRepository for $name {
            async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
                let result = $entity::Entity::find()
                    .filter($entity::Column::Username.eq(username))
                    .one(&self.db)
                    .await
                    .map_err(AppError::from)?;

                Ok(result.map(Account::from))
            }

            async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
                let result = $entity::Entity::find()
                    .filter($entity::Column::Email.eq(email))
                    .one(&self.db)
                    .await
                    .map_err(AppError::from)?;

                Ok(result.map(Account::from))
            }

            async fn create(&self, account: NewAccount) -> AppResult<Account> {
                let active_model = $entity::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    firstname: Set(account.firstname),
                    lastname: Set(account.lastname),
                    username: Set(account.username),
                    email: Set(account.email),
                    password_hash: Set(account.password_hash),
                    created_at: Set(chrono::Utc::now()),
                };

                let model = active_model
                    .insert(&self.db)
                    .await
                    .map_err(|e| unique_violation_as(e, MSG_USERNAME_EXISTS))?;

                Ok(Account::from(model))
            }
        }
    };
}

account_store!(
    /// Accounts of the `admins` table
    AdminStore,
    admin
);

account_store!(
    /// Accounts of the `users` table
    UserStore,
    user
);
