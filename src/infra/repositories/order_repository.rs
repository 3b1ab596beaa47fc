//! Order and payment repositories.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::base::ReadRepository;
use super::entities::{order, payment};
use crate::config::{ORDER_STATUS_PENDING, PAYMENT_STATUS_PENDING};
use crate::domain::{NewOrder, NewPayment, Order, Payment};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert an order with the default status
    async fn create(&self, order: NewOrder) -> AppResult<Order>;

    /// List every order
    async fn list(&self) -> AppResult<Vec<Order>>;

    /// List orders owned by `user_id`, oldest first
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Order>>;
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Insert a pending payment
    async fn create(&self, payment: NewPayment) -> AppResult<Payment>;
}

pub struct OrderStore {
    db: DatabaseConnection,
}

impl OrderStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<order::Entity, order::Model> for OrderStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl OrderRepository for OrderStore {
    async fn create(&self, new_order: NewOrder) -> AppResult<Order> {
        let active_model = order::ActiveModel {
            id: Set(Uuid::new_v4()),
            firstname: Set(new_order.firstname),
            lastname: Set(new_order.lastname),
            user_id: Set(new_order.user_id),
            phone: Set(new_order.phone),
            product_id: Set(new_order.product_id),
            product_name: Set(new_order.product_name),
            quantity: Set(new_order.quantity),
            payment_method: Set(new_order.payment_method),
            address: Set(new_order.address),
            price: Set(new_order.price),
            status: Set(ORDER_STATUS_PENDING.to_string()),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Order::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Order>> {
        let models = self.fetch_all().await?;
        Ok(models.into_iter().map(Order::from).collect())
    }

    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Order>> {
        let models = order::Entity::find()
            .filter(order::Column::UserId.eq(user_id))
            .order_by_asc(order::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Order::from).collect())
    }
}

pub struct PaymentStore {
    db: DatabaseConnection,
}

impl PaymentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentRepository for PaymentStore {
    async fn create(&self, new_payment: NewPayment) -> AppResult<Payment> {
        let active_model = payment::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(new_payment.user_id),
            name: Set(new_payment.name),
            order_id: Set(new_payment.order_id),
            amount: Set(new_payment.amount),
            delivery_status: Set(new_payment.delivery_status),
            payment_method: Set(new_payment.payment_method),
            status: Set(PAYMENT_STATUS_PENDING.to_string()),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Payment::from(model))
    }
}
