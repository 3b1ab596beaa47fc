//! Cart handlers. Every route acts on the caller's own cart.

use axum::{
    extract::{Path, State},
    middleware,
    response::Json,
    routing::{delete, get},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::user_auth_middleware;
use crate::api::AppState;
use crate::config::{DEFAULT_QUANTITY, MSG_CART_FIELDS_REQUIRED, MSG_REMOVED_FROM_CART};
use crate::domain::{CartItem, NewCartItem, Product};
use crate::errors::{AppError, AppResult};
use crate::services::UserIdentity;
use crate::types::{Created, MessageResponse};

/// Add-to-cart request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartRequest {
    /// A value that is not a product id counts as missing
    #[schema(example = "6f9619ff-8b86-d011-b42d-00cf4fc964ff")]
    pub product_id: Option<String>,
    #[schema(example = "Banana")]
    pub product_name: Option<String>,
    /// Defaults to 1
    #[schema(example = 2)]
    pub quantity: Option<i32>,
}

impl CartRequest {
    fn into_new_item(self, user_id: Uuid) -> AppResult<NewCartItem> {
        let product_id = self
            .product_id
            .and_then(|raw| Uuid::parse_str(&raw).ok());

        match (product_id, self.product_name.filter(|n| !n.is_empty())) {
            (Some(product_id), Some(product_name)) => Ok(NewCartItem {
                user_id,
                product_id,
                product_name,
                quantity: self.quantity.unwrap_or(DEFAULT_QUANTITY),
            }),
            _ => Err(AppError::validation(MSG_CART_FIELDS_REQUIRED)),
        }
    }
}

/// All cart routes require a user token
pub fn cart_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/cart", get(list_cart).post(add_to_cart))
        .route("/cart/:product_id", delete(remove_from_cart))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            user_auth_middleware,
        ))
}

/// Add a product to the caller's cart
#[utoipa::path(
    post,
    path = "/cart",
    tag = "Cart",
    request_body = CartRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Cart row created", body = CartItem),
        (status = 400, description = "productId and productName are required", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid user token")
    )
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    ValidatedJson(payload): ValidatedJson<CartRequest>,
) -> AppResult<Created<CartItem>> {
    let item = state
        .cart_service
        .add(payload.into_new_item(user.id)?)
        .await?;

    Ok(Created(item))
}

/// Products referenced by the caller's cart
#[utoipa::path(
    get,
    path = "/cart",
    tag = "Cart",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Products in the cart, one entry per distinct product", body = Vec<Product>),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid user token")
    )
)]
pub async fn list_cart(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(state.cart_service.list_products(user.id).await?))
}

/// Remove one cart row for the product
#[utoipa::path(
    delete,
    path = "/cart/{product_id}",
    tag = "Cart",
    params(("product_id" = String, Path, description = "Product id of the row to remove")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Removed from cart", body = MessageResponse),
        (status = 404, description = "Item not found", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid user token")
    )
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(product_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.cart_service.remove(user.id, &product_id).await?;
    Ok(Json(MessageResponse::new(MSG_REMOVED_FROM_CART)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_defaults_to_one() {
        let request: CartRequest = serde_json::from_value(serde_json::json!({
            "productId": Uuid::new_v4(),
            "productName": "Milk"
        }))
        .unwrap();

        let item = request.into_new_item(Uuid::new_v4()).unwrap();
        assert_eq!(item.quantity, DEFAULT_QUANTITY);
    }

    #[test]
    fn test_product_fields_required() {
        let request = CartRequest {
            product_id: Some(Uuid::new_v4().to_string()),
            product_name: None,
            quantity: Some(2),
        };

        let error = request.into_new_item(Uuid::new_v4()).unwrap_err();
        assert!(matches!(error, AppError::Validation(ref m) if m == MSG_CART_FIELDS_REQUIRED));
    }

    #[test]
    fn test_unparsable_product_id_counts_as_missing() {
        let request: CartRequest = serde_json::from_value(serde_json::json!({
            "productId": "not-an-id",
            "productName": "Milk"
        }))
        .unwrap();

        let error = request.into_new_item(Uuid::new_v4()).unwrap_err();
        assert!(matches!(error, AppError::Validation(ref m) if m == MSG_CART_FIELDS_REQUIRED));
    }
}
