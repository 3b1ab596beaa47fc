//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - Repositories over the SeaORM entities
//! - Unit of Work giving services one handle on every repository

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    AccountRepository, CartRepository, CategoryRepository, FeedbackRepository, OrderRepository,
    PaymentRepository, ProductRepository,
};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use unit_of_work::StubUnitOfWork;
