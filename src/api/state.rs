//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AdminClaims, AuthService, CartService, CatalogService, FeedbackService, OrderService,
    ServiceContainer, Services, TokenService, UserClaims,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub catalog_service: Arc<dyn CatalogService>,
    pub cart_service: Arc<dyn CartService>,
    pub order_service: Arc<dyn OrderService>,
    pub feedback_service: Arc<dyn FeedbackService>,
    /// Verifies tokens for admin-gated routes
    pub admin_tokens: Arc<TokenService<AdminClaims>>,
    /// Verifies tokens for user-gated routes
    pub user_tokens: Arc<TokenService<UserClaims>>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    ///
    /// The same token services sign (login) and verify (gates).
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let admin_tokens = Arc::new(TokenService::admin(config));
        let user_tokens = Arc::new(TokenService::user(config));

        let container = Services::from_connection(
            database.get_connection(),
            admin_tokens.clone(),
            user_tokens.clone(),
        );

        Self::from_container(&container, admin_tokens, user_tokens, database)
    }

    /// Create application state from any service container.
    pub fn from_container(
        container: &dyn ServiceContainer,
        admin_tokens: Arc<TokenService<AdminClaims>>,
        user_tokens: Arc<TokenService<UserClaims>>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service: container.auth(),
            catalog_service: container.catalog(),
            cart_service: container.cart(),
            order_service: container.orders(),
            feedback_service: container.feedback(),
            admin_tokens,
            user_tokens,
            database,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Feedback};
    use crate::infra::repositories::{MockCategoryRepository, MockFeedbackRepository};
    use crate::infra::StubUnitOfWork;
    use crate::services::{
        Authenticator, CartManager, CatalogManager, FeedbackManager, MockServiceContainer,
        OrderManager,
    };
    use sea_orm::DatabaseConnection;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_state_routes_calls_to_container_services() {
        let category = Category {
            id: Uuid::new_v4(),
            category: "Bakery".into(),
            description: None,
        };
        let mut categories = MockCategoryRepository::new();
        let listed = category.clone();
        categories
            .expect_list()
            .times(1)
            .returning(move || Ok(vec![listed.clone()]));

        let author = Uuid::new_v4();
        let mut feedback = MockFeedbackRepository::new();
        feedback
            .expect_create()
            .times(1)
            .returning(|user_id, message| {
                Ok(Feedback {
                    id: Uuid::new_v4(),
                    user_id,
                    message,
                })
            });

        let uow = Arc::new(StubUnitOfWork {
            categories: Arc::new(categories),
            feedback: Arc::new(feedback),
            ..Default::default()
        });
        let admin_tokens = Arc::new(TokenService::new(b"admin-secret-for-tests-0123456789abcdef", 3));
        let user_tokens = Arc::new(TokenService::new(b"user-secret-for-tests-0123456789abcdefg", 3));

        let mut container = MockServiceContainer::new();
        let (uow_a, a, u) = (uow.clone(), admin_tokens.clone(), user_tokens.clone());
        container
            .expect_auth()
            .times(1)
            .returning(move || Arc::new(Authenticator::new(uow_a.clone(), a.clone(), u.clone())));
        let uow_c = uow.clone();
        container
            .expect_catalog()
            .times(1)
            .returning(move || Arc::new(CatalogManager::new(uow_c.clone())));
        let uow_k = uow.clone();
        container
            .expect_cart()
            .times(1)
            .returning(move || Arc::new(CartManager::new(uow_k.clone())));
        let uow_o = uow.clone();
        container
            .expect_orders()
            .times(1)
            .returning(move || Arc::new(OrderManager::new(uow_o.clone())));
        container
            .expect_feedback()
            .times(1)
            .returning(move || Arc::new(FeedbackManager::new(uow.clone())));

        let database = Arc::new(Database::from_connection(DatabaseConnection::default()));
        let state = AppState::from_container(&container, admin_tokens, user_tokens, database);

        assert_eq!(state.catalog_service.list_categories().await.unwrap(), vec![category]);

        let stored = state
            .feedback_service
            .submit(author, "Fresh bread".into())
            .await
            .unwrap();
        assert_eq!(stored.user_id, author);
        assert_eq!(stored.message, "Fresh bread");

        // The state signs with the token services it was handed
        let token = state.user_tokens.issue(author).unwrap();
        assert_eq!(state.user_tokens.verify(&token).unwrap().user.id, author);
    }
}
