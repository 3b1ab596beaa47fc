//! API middleware.

mod auth;

pub use auth::{admin_auth_middleware, bearer_token, user_auth_middleware};
