//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod admin;
pub mod cart_item;
pub mod category;
pub mod feedback;
pub mod order;
pub mod payment;
pub mod product;
pub mod user;
