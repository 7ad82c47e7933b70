//! Migration to create the whatsapp_templates table.
//!
//! Templates carry a category, a message body and the id of the user who
//! created them. `created_by_id` is guarded by a foreign key so that a
//! template can never point at a missing user.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WhatsappTemplates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WhatsappTemplates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WhatsappTemplates::Name).text().not_null())
                    .col(ColumnDef::new(WhatsappTemplates::Type).text().not_null())
                    .col(ColumnDef::new(WhatsappTemplates::Content).text().not_null())
                    .col(
                        ColumnDef::new(WhatsappTemplates::CreatedById)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WhatsappTemplates::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(WhatsappTemplates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(WhatsappTemplates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_whatsapp_templates_created_by_id")
                            .from(WhatsappTemplates::Table, WhatsappTemplates::CreatedById)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookups by creator
        manager
            .create_index(
                Index::create()
                    .name("idx_whatsapp_templates_created_by_id")
                    .table(WhatsappTemplates::Table)
                    .col(WhatsappTemplates::CreatedById)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_whatsapp_templates_created_by_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WhatsappTemplates::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WhatsappTemplates {
    Table,
    Id,
    Name,
    Type,
    Content,
    CreatedById,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
