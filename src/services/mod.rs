//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, and reach the database only through the
//! Unit of Work.

mod auth_service;
mod cart_service;
mod catalog_service;
pub mod container;
mod feedback_service;
mod order_service;
pub mod token_service;

use uuid::Uuid;

use crate::errors::{AppError, AppResult};

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Registration, Session};
pub use cart_service::{CartManager, CartService};
pub use catalog_service::{CatalogManager, CatalogService};
pub use feedback_service::{FeedbackManager, FeedbackService};
pub use order_service::{OrderManager, OrderService, PlaceOrder};
pub use token_service::{AdminClaims, DomainClaims, TokenService, UserClaims, UserIdentity};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;

/// Parse a client-supplied id; anything that is not a UUID names nothing
/// and is reported as `not_found_message`.
pub(crate) fn parse_id(raw: &str, not_found_message: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found(not_found_message))
}
