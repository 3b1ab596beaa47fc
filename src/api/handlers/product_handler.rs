//! Product handlers.

use axum::{
    extract::{Path, State},
    middleware,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::admin_auth_middleware;
use crate::api::AppState;
use crate::config::{MSG_PRODUCT_DELETED, MSG_PRODUCT_FIELDS_REQUIRED};
use crate::domain::{NewProduct, Product, UpdateProduct};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, MessageResponse};

/// Product body, shared by create and update.
///
/// On create every field must be present and truthy: non-empty strings,
/// non-zero numbers. On update only the present fields are applied.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[schema(example = "Banana")]
    pub productname: Option<String>,
    #[schema(example = "Organic, fair trade")]
    pub description: Option<String>,
    #[schema(example = 1.25)]
    pub price: Option<f64>,
    #[schema(example = "https://cdn.example.com/banana.png")]
    pub image: Option<String>,
    #[schema(example = "Fruits")]
    pub category: Option<String>,
    #[schema(example = 40)]
    pub count_in_stock: Option<i32>,
    #[schema(example = 4.5)]
    pub rating: Option<f64>,
}

impl ProductRequest {
    /// All fields truthy, or `All product fields are required`
    pub fn into_new_product(self) -> AppResult<NewProduct> {
        fn text(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        fn number(value: Option<f64>) -> Option<f64> {
            value.filter(|v| *v != 0.0)
        }

        let missing = || AppError::validation(MSG_PRODUCT_FIELDS_REQUIRED);

        Ok(NewProduct {
            productname: text(self.productname).ok_or_else(missing)?,
            description: text(self.description).ok_or_else(missing)?,
            price: number(self.price).ok_or_else(missing)?,
            image: text(self.image).ok_or_else(missing)?,
            category: text(self.category).ok_or_else(missing)?,
            count_in_stock: self.count_in_stock.filter(|v| *v != 0).ok_or_else(missing)?,
            rating: number(self.rating).ok_or_else(missing)?,
        })
    }
}

impl From<ProductRequest> for UpdateProduct {
    fn from(request: ProductRequest) -> Self {
        Self {
            productname: request.productname,
            description: request.description,
            price: request.price,
            image: request.image,
            category: request.category,
            count_in_stock: request.count_in_stock,
            rating: request.rating,
        }
    }
}

/// Reads are public; writes require an admin token
pub fn product_routes(state: &AppState) -> Router<AppState> {
    let admin_only = middleware::from_fn_with_state(state.clone(), admin_auth_middleware);

    Router::new()
        .route(
            "/products",
            get(list_products).merge(post(create_product).route_layer(admin_only.clone())),
        )
        .route(
            "/products/:id",
            get(get_product).merge(
                put(update_product)
                    .merge(delete(delete_product))
                    .route_layer(admin_only),
            ),
        )
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Catalog",
    request_body = ProductRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "All product fields are required", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid admin token")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> AppResult<Created<Product>> {
    let product = state
        .catalog_service
        .create_product(payload.into_new_product()?)
        .await?;

    Ok(Created(product))
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Catalog",
    responses(
        (status = 200, description = "All products", body = Vec<Product>)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(state.catalog_service.list_products().await?))
}

/// Get one product
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Catalog",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    Ok(Json(state.catalog_service.get_product(&id).await?))
}

/// Update the given fields of a product
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Catalog",
    params(("id" = String, Path, description = "Product id")),
    request_body = ProductRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid admin token")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> AppResult<Json<Product>> {
    let product = state
        .catalog_service
        .update_product(&id, payload.into())
        .await?;

    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Catalog",
    params(("id" = String, Path, description = "Product id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid admin token")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.catalog_service.delete_product(&id).await?;
    Ok(Json(MessageResponse::new(MSG_PRODUCT_DELETED)))
}
