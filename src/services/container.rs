//! Service Container - Centralized service access.
//!
//! Builds every service over one shared unit of work and the two
//! token domains.

use std::sync::Arc;

use super::{
    AdminClaims, AuthService, Authenticator, CartManager, CartService, CatalogManager,
    CatalogService, FeedbackManager, FeedbackService, OrderManager, OrderService, TokenService,
    UserClaims,
};
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn catalog(&self) -> Arc<dyn CatalogService>;

    fn cart(&self) -> Arc<dyn CartService>;

    fn orders(&self) -> Arc<dyn OrderService>;

    fn feedback(&self) -> Arc<dyn FeedbackService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    catalog_service: Arc<dyn CatalogService>,
    cart_service: Arc<dyn CartService>,
    order_service: Arc<dyn OrderService>,
    feedback_service: Arc<dyn FeedbackService>,
}

impl Services {
    /// Create service container from database connection and the token domains
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        admin_tokens: Arc<TokenService<AdminClaims>>,
        user_tokens: Arc<TokenService<UserClaims>>,
    ) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), admin_tokens, user_tokens)),
            catalog_service: Arc::new(CatalogManager::new(uow.clone())),
            cart_service: Arc::new(CartManager::new(uow.clone())),
            order_service: Arc::new(OrderManager::new(uow.clone())),
            feedback_service: Arc::new(FeedbackManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }

    fn cart(&self) -> Arc<dyn CartService> {
        self.cart_service.clone()
    }

    fn orders(&self) -> Arc<dyn OrderService> {
        self.order_service.clone()
    }

    fn feedback(&self) -> Arc<dyn FeedbackService> {
        self.feedback_service.clone()
    }
}
