//! Feedback repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use super::base::ReadRepository;
use super::entities::feedback::{ActiveModel, Entity as FeedbackEntity, Model};
use crate::domain::Feedback;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Store a message from `user_id`
    async fn create(&self, user_id: Uuid, message: String) -> AppResult<Feedback>;

    /// List all feedback
    async fn list(&self) -> AppResult<Vec<Feedback>>;
}

pub struct FeedbackStore {
    db: DatabaseConnection,
}

impl FeedbackStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<FeedbackEntity, Model> for FeedbackStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl FeedbackRepository for FeedbackStore {
    async fn create(&self, user_id: Uuid, message: String) -> AppResult<Feedback> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            message: Set(message),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Feedback::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Feedback>> {
        let models = self.fetch_all().await?;
        Ok(models.into_iter().map(Feedback::from).collect())
    }
}
