//! Category handlers.

use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::admin_auth_middleware;
use crate::api::AppState;
use crate::domain::{Category, NewCategory};
use crate::errors::AppResult;
use crate::types::Created;

/// Category creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategoryRequest {
    #[validate(
        required(message = "Category is required"),
        length(min = 1, message = "Category is required")
    )]
    #[schema(example = "Fruits")]
    pub category: Option<String>,
    #[schema(example = "Fresh seasonal fruit")]
    pub description: Option<String>,
}

/// Listing is public; creation requires an admin token
pub fn category_routes(state: &AppState) -> Router<AppState> {
    Router::new().route(
        "/categories",
        get(list_categories).merge(post(create_category).route_layer(
            middleware::from_fn_with_state(state.clone(), admin_auth_middleware),
        )),
    )
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "Catalog",
    request_body = CategoryRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Missing or duplicate category", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid admin token")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CategoryRequest>,
) -> AppResult<Created<Category>> {
    let category = state
        .catalog_service
        .create_category(NewCategory {
            category: payload.category.unwrap_or_default(),
            description: payload.description,
        })
        .await?;

    Ok(Created(category))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Catalog",
    responses(
        (status = 200, description = "All categories", body = Vec<Category>)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.catalog_service.list_categories().await?))
}
