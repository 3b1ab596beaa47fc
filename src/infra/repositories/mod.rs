//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod account_repository;
mod base;
mod cart_repository;
mod category_repository;
pub(crate) mod entities;
mod feedback_repository;
mod order_repository;
mod product_repository;

pub use account_repository::{AccountRepository, AdminStore, UserStore};
pub use base::ReadRepository;
pub use cart_repository::{CartRepository, CartStore};
pub use category_repository::{CategoryRepository, CategoryStore};
pub use feedback_repository::{FeedbackRepository, FeedbackStore};
pub use order_repository::{OrderRepository, OrderStore, PaymentRepository, PaymentStore};
pub use product_repository::{ProductRepository, ProductStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use account_repository::MockAccountRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use cart_repository::MockCartRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use category_repository::MockCategoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use feedback_repository::MockFeedbackRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use order_repository::{MockOrderRepository, MockPaymentRepository};
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
