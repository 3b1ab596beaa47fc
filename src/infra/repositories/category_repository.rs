//! Category repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::base::{unique_violation_as, ReadRepository};
use super::entities::category::{self, ActiveModel, Entity as CategoryEntity, Model};
use crate::config::MSG_CATEGORY_EXISTS;
use crate::domain::{Category, NewCategory};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by its unique name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Category>>;

    /// Insert a category; a duplicate name fails with a validation error
    async fn create(&self, category: NewCategory) -> AppResult<Category>;

    /// List all categories
    async fn list(&self) -> AppResult<Vec<Category>>;
}

pub struct CategoryStore {
    db: DatabaseConnection,
}

impl CategoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<CategoryEntity, Model> for CategoryStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl CategoryRepository for CategoryStore {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        let result = CategoryEntity::find()
            .filter(category::Column::Category.eq(name))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Category::from))
    }

    async fn create(&self, category: NewCategory) -> AppResult<Category> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            category: Set(category.category),
            description: Set(category.description),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| unique_violation_as(e, MSG_CATEGORY_EXISTS))?;

        Ok(Category::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Category>> {
        let models = self.fetch_all().await?;
        Ok(models.into_iter().map(Category::from).collect())
    }
}
