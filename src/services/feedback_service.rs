//! Feedback service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::Feedback;
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[async_trait]
pub trait FeedbackService: Send + Sync {
    async fn submit(&self, user_id: Uuid, message: String) -> AppResult<Feedback>;

    async fn list(&self) -> AppResult<Vec<Feedback>>;
}

pub struct FeedbackManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> FeedbackManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> FeedbackService for FeedbackManager<U> {
    async fn submit(&self, user_id: Uuid, message: String) -> AppResult<Feedback> {
        self.uow.feedback().create(user_id, message).await
    }

    async fn list(&self) -> AppResult<Vec<Feedback>> {
        self.uow.feedback().list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockFeedbackRepository;
    use crate::infra::StubUnitOfWork;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_submit_owned_by_caller() {
        let user = Uuid::new_v4();
        let mut feedback = MockFeedbackRepository::new();
        feedback
            .expect_create()
            .with(eq(user), eq(String::from("Great produce")))
            .returning(|user_id, message| {
                Ok(Feedback {
                    id: Uuid::new_v4(),
                    user_id,
                    message,
                })
            });

        let service = FeedbackManager::new(Arc::new(StubUnitOfWork {
            feedback: Arc::new(feedback),
            ..Default::default()
        }));

        let stored = service.submit(user, "Great produce".into()).await.unwrap();
        assert_eq!(stored.user_id, user);
    }
}
