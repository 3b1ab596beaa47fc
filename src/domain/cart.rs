//! Shopping cart rows.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One cart row owned by a user. Several rows may reference the same product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    #[schema(example = "Banana")]
    pub product_name: String,
    #[schema(example = 1)]
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
}
