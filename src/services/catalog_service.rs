//! Catalog service - categories and products.

use async_trait::async_trait;
use std::sync::Arc;

use super::parse_id;
use crate::config::{MSG_CATEGORY_EXISTS, MSG_PRODUCT_NOT_FOUND};
use crate::domain::{Category, NewCategory, NewProduct, Product, UpdateProduct};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Catalog service trait for dependency injection.
///
/// Product ids arrive as raw path segments; anything that does not name
/// a stored product is reported as `Product not found`.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn create_category(&self, category: NewCategory) -> AppResult<Category>;

    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    async fn create_product(&self, product: NewProduct) -> AppResult<Product>;

    async fn list_products(&self) -> AppResult<Vec<Product>>;

    async fn get_product(&self, id: &str) -> AppResult<Product>;

    /// Replace the fields present in `update`, keep the rest
    async fn update_product(&self, id: &str, update: UpdateProduct) -> AppResult<Product>;

    async fn delete_product(&self, id: &str) -> AppResult<()>;
}

pub struct CatalogManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CatalogManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CatalogService for CatalogManager<U> {
    async fn create_category(&self, category: NewCategory) -> AppResult<Category> {
        let categories = self.uow.categories();

        if categories.find_by_name(&category.category).await?.is_some() {
            return Err(AppError::validation(MSG_CATEGORY_EXISTS));
        }

        categories.create(category).await
    }

    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.uow.categories().list().await
    }

    async fn create_product(&self, product: NewProduct) -> AppResult<Product> {
        let product = self.uow.products().create(product).await?;
        tracing::debug!(id = %product.id, "Product created");
        Ok(product)
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.uow.products().list().await
    }

    async fn get_product(&self, id: &str) -> AppResult<Product> {
        let id = parse_id(id, MSG_PRODUCT_NOT_FOUND)?;

        self.uow
            .products()
            .find_by_id(id)
            .await?
            .ok_or_not_found(MSG_PRODUCT_NOT_FOUND)
    }

    async fn update_product(&self, id: &str, update: UpdateProduct) -> AppResult<Product> {
        let mut product = self.get_product(id).await?;
        product.apply(update);

        // The row may have been deleted between the read and the write
        self.uow
            .products()
            .update(product)
            .await?
            .ok_or_not_found(MSG_PRODUCT_NOT_FOUND)
    }

    async fn delete_product(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id, MSG_PRODUCT_NOT_FOUND)?;

        if self.uow.products().delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(MSG_PRODUCT_NOT_FOUND))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::{MockCategoryRepository, MockProductRepository};
    use crate::infra::StubUnitOfWork;
    use chrono::Utc;
    use mockall::predicate::eq;
    use uuid::Uuid;

    fn tomato(id: Uuid) -> Product {
        Product {
            id,
            productname: "Tomato".into(),
            description: "Vine ripened".into(),
            price: 2.5,
            image: "tomato.png".into(),
            category: "Vegetables".into(),
            count_in_stock: 20,
            rating: 4.0,
            date_created: Utc::now(),
        }
    }

    fn catalog(uow: StubUnitOfWork) -> CatalogManager<StubUnitOfWork> {
        CatalogManager::new(Arc::new(uow))
    }

    #[tokio::test]
    async fn test_create_category_rejects_duplicate() {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_name()
            .with(eq("Fruits"))
            .returning(|_| {
                Ok(Some(Category {
                    id: Uuid::new_v4(),
                    category: "Fruits".into(),
                    description: None,
                }))
            });
        categories.expect_create().never();

        let service = catalog(StubUnitOfWork {
            categories: Arc::new(categories),
            ..Default::default()
        });

        let error = service
            .create_category(NewCategory {
                category: "Fruits".into(),
                description: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::Validation(ref m) if m == MSG_CATEGORY_EXISTS));
    }

    #[tokio::test]
    async fn test_get_product_unparsable_id_is_not_found() {
        // No repository expectation: the lookup must not happen
        let service = catalog(StubUnitOfWork::default());

        let error = service.get_product("not-a-uuid").await.unwrap_err();
        assert!(matches!(error, AppError::NotFound(ref m) if m == MSG_PRODUCT_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_get_product_missing() {
        let mut products = MockProductRepository::new();
        products.expect_find_by_id().returning(|_| Ok(None));

        let service = catalog(StubUnitOfWork {
            products: Arc::new(products),
            ..Default::default()
        });

        let error = service
            .get_product(&Uuid::new_v4().to_string())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_product_keeps_unspecified_fields() {
        let id = Uuid::new_v4();
        let mut products = MockProductRepository::new();
        products
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |id| Ok(Some(tomato(id))));
        products
            .expect_update()
            .withf(|p| p.price == 3.0 && p.productname == "Tomato" && p.count_in_stock == 20)
            .returning(|p| Ok(Some(p)));

        let service = catalog(StubUnitOfWork {
            products: Arc::new(products),
            ..Default::default()
        });

        let updated = service
            .update_product(
                &id.to_string(),
                UpdateProduct {
                    price: Some(3.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.price, 3.0);
    }

    #[tokio::test]
    async fn test_delete_missing_product() {
        let mut products = MockProductRepository::new();
        products.expect_delete().returning(|_| Ok(false));

        let service = catalog(StubUnitOfWork {
            products: Arc::new(products),
            ..Default::default()
        });

        let error = service
            .delete_product(&Uuid::new_v4().to_string())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::NotFound(ref m) if m == MSG_PRODUCT_NOT_FOUND));
    }
}
