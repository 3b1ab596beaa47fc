//! Product repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::base::ReadRepository;
use super::entities::product::{self, ActiveModel, Entity as ProductEntity, Model};
use crate::domain::{NewProduct, Product};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find product by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Find every product whose ID is in `ids`
    async fn find_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<Product>>;

    /// List all products
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// Insert a product stamped with the current time
    async fn create(&self, product: NewProduct) -> AppResult<Product>;

    /// Overwrite a stored product; `None` if it no longer exists
    async fn update(&self, product: Product) -> AppResult<Option<Product>>;

    /// Delete product by ID; `false` if nothing was deleted
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<ProductEntity, Model> for ProductStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let result = self.fetch_by_id(id).await?;
        Ok(result.map(Product::from))
    }

    async fn find_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .filter(product::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        let models = self.fetch_all().await?;
        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn create(&self, product: NewProduct) -> AppResult<Product> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            productname: Set(product.productname),
            description: Set(product.description),
            price: Set(product.price),
            image: Set(product.image),
            category: Set(product.category),
            count_in_stock: Set(product.count_in_stock),
            rating: Set(product.rating),
            date_created: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    async fn update(&self, product: Product) -> AppResult<Option<Product>> {
        let active_model = ActiveModel {
            id: Set(product.id),
            productname: Set(product.productname),
            description: Set(product.description),
            price: Set(product.price),
            image: Set(product.image),
            category: Set(product.category),
            count_in_stock: Set(product.count_in_stock),
            rating: Set(product.rating),
            date_created: Set(product.date_created),
        };

        match active_model.update(&self.db).await {
            Ok(model) => Ok(Some(Product::from(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = ProductEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
