//! Catalog entities: categories and products.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Product category, unique by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[schema(example = "Fruits")]
    pub category: String,
    #[schema(example = "Fresh seasonal fruit")]
    pub description: Option<String>,
}

/// Category creation data
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub category: String,
    pub description: Option<String>,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[schema(example = "Banana")]
    pub productname: String,
    pub description: String,
    #[schema(example = 1.25)]
    pub price: f64,
    #[schema(example = "https://cdn.example.com/banana.png")]
    pub image: String,
    #[schema(example = "Fruits")]
    pub category: String,
    #[schema(example = 40)]
    pub count_in_stock: i32,
    #[schema(example = 4.5)]
    pub rating: f64,
    pub date_created: DateTime<Utc>,
}

/// Product creation data; every field has passed the presence check
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub productname: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub count_in_stock: i32,
    pub rating: f64,
}

/// Partial product update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub productname: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub count_in_stock: Option<i32>,
    pub rating: Option<f64>,
}

impl Product {
    /// Apply the fields present in `update`
    pub fn apply(&mut self, update: UpdateProduct) {
        if let Some(v) = update.productname {
            self.productname = v;
        }
        if let Some(v) = update.description {
            self.description = v;
        }
        if let Some(v) = update.price {
            self.price = v;
        }
        if let Some(v) = update.image {
            self.image = v;
        }
        if let Some(v) = update.category {
            self.category = v;
        }
        if let Some(v) = update.count_in_stock {
            self.count_in_stock = v;
        }
        if let Some(v) = update.rating {
            self.rating = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banana() -> Product {
        Product {
            id: Uuid::new_v4(),
            productname: "Banana".into(),
            description: "Yellow".into(),
            price: 1.25,
            image: "banana.png".into(),
            category: "Fruits".into(),
            count_in_stock: 40,
            rating: 4.5,
            date_created: Utc::now(),
        }
    }

    #[test]
    fn test_apply_replaces_only_given_fields() {
        let mut product = banana();
        let original = product.clone();

        product.apply(UpdateProduct {
            price: Some(0.99),
            count_in_stock: Some(12),
            ..Default::default()
        });

        assert_eq!(product.price, 0.99);
        assert_eq!(product.count_in_stock, 12);
        assert_eq!(product.productname, original.productname);
        assert_eq!(product.date_created, original.date_created);
    }

    #[test]
    fn test_product_json_shape() {
        let json = serde_json::to_value(banana()).unwrap();
        assert!(json.get("_id").is_some());
        assert!(json.get("countInStock").is_some());
        assert!(json.get("dateCreated").is_some());
        assert!(json.get("count_in_stock").is_none());
    }
}
