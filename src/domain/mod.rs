//! Domain layer - Core business entities and logic
//!
//! Entities here are independent of the database layer; repositories
//! convert their SeaORM models into these types.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod feedback;
pub mod order;
pub mod password;

pub use account::{Account, AccountKind, AccountResponse, NewAccount};
pub use cart::{CartItem, NewCartItem};
pub use catalog::{Category, NewCategory, NewProduct, Product, UpdateProduct};
pub use feedback::Feedback;
pub use order::{NewOrder, NewPayment, Order, Payment};
pub use password::Password;
