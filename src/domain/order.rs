//! Orders and the payment record created alongside each one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Single-product order. `product_name` and `price` are snapshots taken
/// when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    /// Owner
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub phone: String,
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    #[schema(example = "cod")]
    pub payment_method: String,
    pub address: String,
    /// Unit price times quantity
    pub price: f64,
    #[schema(example = "Pending")]
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub firstname: String,
    pub lastname: String,
    pub user_id: Uuid,
    pub phone: String,
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub payment_method: String,
    pub address: String,
    pub price: f64,
}

/// Payment record; one per order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub name: String,
    #[serde(rename = "order")]
    pub order_id: Uuid,
    pub amount: f64,
    /// Order status at the moment the payment was recorded
    pub delivery_status: String,
    pub payment_method: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub user_id: Uuid,
    pub name: String,
    pub order_id: Uuid,
    pub amount: f64,
    pub delivery_status: String,
    pub payment_method: String,
}

impl NewPayment {
    /// Payment for a freshly stored order, billed to `"<firstname> <lastname>"`
    pub fn for_order(order: &Order) -> Self {
        Self {
            user_id: order.user_id,
            name: format!("{} {}", order.firstname, order.lastname),
            order_id: order.id,
            amount: order.price,
            delivery_status: order.status.clone(),
            payment_method: order.payment_method.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_snapshots_order() {
        let order = Order {
            id: Uuid::new_v4(),
            firstname: "Ada".into(),
            lastname: "Lovelace".into(),
            user_id: Uuid::new_v4(),
            phone: "555-0100".into(),
            product_id: Uuid::new_v4(),
            product_name: "Apples".into(),
            quantity: 3,
            payment_method: "card".into(),
            address: "12 Analytical St".into(),
            price: 30.0,
            status: "Pending".into(),
            created_at: Utc::now(),
        };

        let payment = NewPayment::for_order(&order);
        assert_eq!(payment.name, "Ada Lovelace");
        assert_eq!(payment.order_id, order.id);
        assert_eq!(payment.user_id, order.user_id);
        assert_eq!(payment.amount, 30.0);
        assert_eq!(payment.delivery_status, "Pending");
        assert_eq!(payment.payment_method, "card");
    }
}
