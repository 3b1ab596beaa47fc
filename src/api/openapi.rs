//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, cart_handler, category_handler, feedback_handler, order_handler,
    product_handler,
};
use crate::domain::{AccountResponse, CartItem, Category, Feedback, Order, Product};
use crate::types::MessageResponse;

/// OpenAPI documentation for the Grocery API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Grocery API",
        version = "0.1.0",
        description = "Grocery store backend: catalog, cart, orders and feedback"
    ),
    servers(
        (url = "http://localhost:5100", description = "Local development server")
    ),
    paths(
        auth_handler::register_admin,
        auth_handler::login_admin,
        auth_handler::register_user,
        auth_handler::login_user,
        category_handler::create_category,
        category_handler::list_categories,
        product_handler::create_product,
        product_handler::list_products,
        product_handler::get_product,
        product_handler::update_product,
        product_handler::delete_product,
        cart_handler::add_to_cart,
        cart_handler::list_cart,
        cart_handler::remove_from_cart,
        order_handler::place_order,
        order_handler::list_orders,
        order_handler::my_orders,
        feedback_handler::submit_feedback,
        feedback_handler::list_feedback,
    ),
    components(
        schemas(
            AccountResponse,
            Category,
            Product,
            CartItem,
            Order,
            Feedback,
            MessageResponse,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::AdminLoginResponse,
            auth_handler::UserLoginResponse,
            category_handler::CategoryRequest,
            product_handler::ProductRequest,
            cart_handler::CartRequest,
            order_handler::OrderRequest,
            feedback_handler::FeedbackRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Admin and user registration and login"),
        (name = "Catalog", description = "Categories and products"),
        (name = "Cart", description = "The caller's shopping cart"),
        (name = "Orders", description = "Order placement and listing"),
        (name = "Feedback", description = "Customer feedback")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "Admin token from /admin/login or user token from /login",
                        ))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/admin/register",
            "/login",
            "/categories",
            "/products/{id}",
            "/cart/{product_id}",
            "/orders",
            "/my-orders",
            "/feedback",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{} missing", path);
        }

        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
