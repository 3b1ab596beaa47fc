//! Cart repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::cart_item::{self, ActiveModel, Entity as CartItemEntity};
use crate::domain::{CartItem, NewCartItem};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Insert a cart row
    async fn create(&self, item: NewCartItem) -> AppResult<CartItem>;

    /// All rows owned by `user_id`
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<CartItem>>;

    /// Delete one row owned by `user_id` for `product_id`; `false` if none matched
    async fn delete_one(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool>;
}

pub struct CartStore {
    db: DatabaseConnection,
}

impl CartStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartRepository for CartStore {
    async fn create(&self, item: NewCartItem) -> AppResult<CartItem> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(item.user_id),
            product_id: Set(item.product_id),
            product_name: Set(item.product_name),
            quantity: Set(item.quantity),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(CartItem::from(model))
    }

    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<CartItem>> {
        let models = CartItemEntity::find()
            .filter(cart_item::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(CartItem::from).collect())
    }

    async fn delete_one(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        let Some(row) = CartItemEntity::find()
            .filter(cart_item::Column::UserId.eq(user_id))
            .filter(cart_item::Column::ProductId.eq(product_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?
        else {
            return Ok(false);
        };

        let result = CartItemEntity::delete_by_id(row.id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
