//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20250716_000001_create_accounts_tables;
mod m20250716_000002_create_catalog_tables;
mod m20250716_000003_create_commerce_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250716_000001_create_accounts_tables::Migration),
            Box::new(m20250716_000002_create_catalog_tables::Migration),
            Box::new(m20250716_000003_create_commerce_tables::Migration),
        ]
    }
}
