//! Order handlers.

use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{admin_auth_middleware, user_auth_middleware};
use crate::api::AppState;
use crate::config::DEFAULT_QUANTITY;
use crate::domain::Order;
use crate::errors::AppResult;
use crate::services::{AdminClaims, PlaceOrder, UserIdentity};
use crate::types::Created;

/// Order request. Any client-sent price is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    #[schema(example = "Ada")]
    pub firstname: String,
    #[serde(default)]
    #[schema(example = "Lovelace")]
    pub lastname: String,
    #[serde(default)]
    #[schema(example = "555-0100")]
    pub phone: String,
    pub product_id: Option<String>,
    /// Defaults to 1
    #[schema(example = 3)]
    pub quantity: Option<i32>,
    #[serde(default)]
    #[schema(example = "cod")]
    pub payment_method: String,
    #[serde(default)]
    #[schema(example = "12 Analytical St")]
    pub address: String,
}

impl From<OrderRequest> for PlaceOrder {
    fn from(request: OrderRequest) -> Self {
        Self {
            firstname: request.firstname,
            lastname: request.lastname,
            phone: request.phone,
            product_id: request.product_id,
            quantity: request.quantity.unwrap_or(DEFAULT_QUANTITY),
            payment_method: request.payment_method,
            address: request.address,
        }
    }
}

/// `POST /orders` is for users, `GET /orders` for admins
pub fn order_routes(state: &AppState) -> Router<AppState> {
    let user_only = middleware::from_fn_with_state(state.clone(), user_auth_middleware);
    let admin_only = middleware::from_fn_with_state(state.clone(), admin_auth_middleware);

    Router::new()
        .route(
            "/orders",
            get(list_orders)
                .route_layer(admin_only)
                .merge(post(place_order).route_layer(user_only.clone())),
        )
        .route("/my-orders", get(my_orders).route_layer(user_only))
}

/// Place an order for one product
#[utoipa::path(
    post,
    path = "/orders",
    tag = "Orders",
    request_body = OrderRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Order placed; a pending payment was recorded", body = Order),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid user token")
    )
)]
pub async fn place_order(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    ValidatedJson(payload): ValidatedJson<OrderRequest>,
) -> AppResult<Created<Order>> {
    let order = state
        .order_service
        .place_order(user.id, payload.into())
        .await?;

    Ok(Created(order))
}

/// All orders
#[utoipa::path(
    get,
    path = "/orders",
    tag = "Orders",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Every order", body = Vec<Order>),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid admin token")
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminClaims>,
) -> AppResult<Json<Vec<Order>>> {
    tracing::debug!(admin = %admin.user_id, "Listing all orders");
    Ok(Json(state.order_service.list_all().await?))
}

/// The caller's orders
#[utoipa::path(
    get,
    path = "/my-orders",
    tag = "Orders",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Orders placed by the caller", body = Vec<Order>),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid user token")
    )
)]
pub async fn my_orders(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.order_service.list_for_user(user.id).await?))
}
