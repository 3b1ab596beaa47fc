//! Base repository helpers shared by every SeaORM store.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, FromQueryResult, PrimaryKeyTrait, SqlErr};

use crate::errors::{AppError, AppResult};

/// Read operations (Query) common to all tables
#[async_trait]
pub trait ReadRepository<E, M>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Fetch a row by primary key
    async fn fetch_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> AppResult<Option<M>>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + Send,
    {
        E::find_by_id(id)
            .one(self.db())
            .await
            .map_err(Into::into)
    }

    /// Fetch every row
    async fn fetch_all(&self) -> AppResult<Vec<M>> {
        E::find()
            .all(self.db())
            .await
            .map_err(Into::into)
    }
}

/// Map a unique-constraint violation raised on insert to the same
/// validation error the pre-insert check produces.
pub(crate) fn unique_violation_as(err: DbErr, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::validation(message),
        _ => AppError::Database(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_errors_stay_database_errors() {
        let error = unique_violation_as(DbErr::Custom("boom".into()), "Username already exists");
        assert!(matches!(error, AppError::Database(_)));
    }
}
