//! Migration: Create admins and users tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [Accounts::Admins, Accounts::Users] {
            manager
                .create_table(
                    Table::create()
                        .table(table)
                        .if_not_exists()
                        .col(ColumnDef::new(Accounts::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Accounts::Firstname).string().not_null())
                        .col(ColumnDef::new(Accounts::Lastname).string().not_null())
                        // Backs the pre-insert duplicate check against concurrent registrations
                        .col(
                            ColumnDef::new(Accounts::Username)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Accounts::Email).string().not_null())
                        .col(ColumnDef::new(Accounts::PasswordHash).string().not_null())
                        .col(
                            ColumnDef::new(Accounts::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;
        }

        for (name, table) in [
            ("idx_admins_email", Accounts::Admins),
            ("idx_users_email", Accounts::Users),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(table)
                        .col(Accounts::Email)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Users).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Admins).to_owned())
            .await
    }
}

#[derive(Iden, Clone, Copy)]
enum Accounts {
    Admins,
    Users,
    Id,
    Firstname,
    Lastname,
    Username,
    Email,
    PasswordHash,
    CreatedAt,
}
