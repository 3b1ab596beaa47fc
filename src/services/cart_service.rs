//! Cart service - per-user cart rows.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use super::parse_id;
use crate::config::MSG_ITEM_NOT_FOUND;
use crate::domain::{CartItem, NewCartItem, Product};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait CartService: Send + Sync {
    /// Add a row owned by `item.user_id`
    async fn add(&self, item: NewCartItem) -> AppResult<CartItem>;

    /// Products referenced by the user's cart, one entry per distinct product
    async fn list_products(&self, user_id: Uuid) -> AppResult<Vec<Product>>;

    /// Remove one row of the user's cart referencing `product_id`
    async fn remove(&self, user_id: Uuid, product_id: &str) -> AppResult<()>;
}

pub struct CartManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CartManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CartService for CartManager<U> {
    async fn add(&self, item: NewCartItem) -> AppResult<CartItem> {
        self.uow.cart().create(item).await
    }

    async fn list_products(&self, user_id: Uuid) -> AppResult<Vec<Product>> {
        let rows = self.uow.cart().list_for_user(user_id).await?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut seen = HashSet::new();
        let ids: Vec<Uuid> = rows
            .into_iter()
            .map(|row| row.product_id)
            .filter(|id| seen.insert(*id))
            .collect();

        self.uow.products().find_by_ids(ids).await
    }

    async fn remove(&self, user_id: Uuid, product_id: &str) -> AppResult<()> {
        let product_id = parse_id(product_id, MSG_ITEM_NOT_FOUND)?;

        if self.uow.cart().delete_one(user_id, product_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(MSG_ITEM_NOT_FOUND))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::{MockCartRepository, MockProductRepository};
    use crate::infra::StubUnitOfWork;
    use mockall::predicate::eq;

    fn row(user_id: Uuid, product_id: Uuid) -> CartItem {
        CartItem {
            id: Uuid::new_v4(),
            user_id,
            product_id,
            product_name: "Milk".into(),
            quantity: 1,
        }
    }

    #[tokio::test]
    async fn test_empty_cart_skips_product_query() {
        let mut cart = MockCartRepository::new();
        cart.expect_list_for_user().returning(|_| Ok(Vec::new()));
        let mut products = MockProductRepository::new();
        products.expect_find_by_ids().never();

        let service = CartManager::new(Arc::new(StubUnitOfWork {
            cart: Arc::new(cart),
            products: Arc::new(products),
            ..Default::default()
        }));

        assert!(service.list_products(Uuid::new_v4()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cart_products_query_distinct_ids() {
        let user = Uuid::new_v4();
        let milk = Uuid::new_v4();
        let bread = Uuid::new_v4();

        let mut cart = MockCartRepository::new();
        cart.expect_list_for_user()
            .with(eq(user))
            .returning(move |u| Ok(vec![row(u, milk), row(u, bread), row(u, milk)]));
        let mut products = MockProductRepository::new();
        products
            .expect_find_by_ids()
            .withf(move |ids| ids == &vec![milk, bread])
            .returning(|_| Ok(Vec::new()));

        let service = CartManager::new(Arc::new(StubUnitOfWork {
            cart: Arc::new(cart),
            products: Arc::new(products),
            ..Default::default()
        }));

        service.list_products(user).await.unwrap();
    }

    #[tokio::test]
    async fn test_remove_item_owned_by_someone_else() {
        let caller = Uuid::new_v4();
        let product = Uuid::new_v4();

        // Only the caller's rows are ever considered
        let mut cart = MockCartRepository::new();
        cart.expect_delete_one()
            .with(eq(caller), eq(product))
            .times(1)
            .returning(|_, _| Ok(false));

        let service = CartManager::new(Arc::new(StubUnitOfWork {
            cart: Arc::new(cart),
            ..Default::default()
        }));

        let error = service
            .remove(caller, &product.to_string())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::NotFound(ref m) if m == MSG_ITEM_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_remove_unparsable_id() {
        let service = CartManager::new(Arc::new(StubUnitOfWork::default()));
        let error = service.remove(Uuid::new_v4(), "42").await.unwrap_err();
        assert!(matches!(error, AppError::NotFound(_)));
    }
}
