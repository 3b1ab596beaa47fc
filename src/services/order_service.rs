//! Order service - order placement and listing.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::parse_id;
use crate::config::MSG_PRODUCT_NOT_FOUND;
use crate::domain::{NewOrder, NewPayment, Order};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Order request as placed by a user. Price is never taken from the client.
#[derive(Debug, Clone, Default)]
pub struct PlaceOrder {
    pub firstname: String,
    pub lastname: String,
    pub phone: String,
    pub product_id: Option<String>,
    pub quantity: i32,
    pub payment_method: String,
    pub address: String,
}

#[async_trait]
pub trait OrderService: Send + Sync {
    /// Store the order and its pending payment
    async fn place_order(&self, user_id: Uuid, order: PlaceOrder) -> AppResult<Order>;

    async fn list_all(&self) -> AppResult<Vec<Order>>;

    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Order>>;
}

pub struct OrderManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> OrderManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> OrderService for OrderManager<U> {
    async fn place_order(&self, user_id: Uuid, request: PlaceOrder) -> AppResult<Order> {
        let product_id = parse_id(
            request.product_id.as_deref().unwrap_or_default(),
            MSG_PRODUCT_NOT_FOUND,
        )?;

        let product = self
            .uow
            .products()
            .find_by_id(product_id)
            .await?
            .ok_or_not_found(MSG_PRODUCT_NOT_FOUND)?;

        let order = self
            .uow
            .orders()
            .create(NewOrder {
                firstname: request.firstname,
                lastname: request.lastname,
                user_id,
                phone: request.phone,
                product_id: product.id,
                product_name: product.productname,
                quantity: request.quantity,
                payment_method: request.payment_method,
                address: request.address,
                price: product.price * f64::from(request.quantity),
            })
            .await?;

        // Not transactional: if the payment insert fails the order stays behind
        // without a payment and the caller gets a 500.
        let payment = self
            .uow
            .payments()
            .create(NewPayment::for_order(&order))
            .await?;

        tracing::info!(order = %order.id, payment = %payment.id, amount = order.price, "Order placed");
        Ok(order)
    }

    async fn list_all(&self) -> AppResult<Vec<Order>> {
        self.uow.orders().list().await
    }

    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Order>> {
        self.uow.orders().list_for_user(user_id).await
    }
}
