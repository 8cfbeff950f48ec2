use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppAssets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AppAssets::AssetName)
                            .string_len(100)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AppAssets::MimeType).string_len(100).not_null())
                    .col(ColumnDef::new(AppAssets::Data).binary().not_null())
                    .col(
                        ColumnDef::new(AppAssets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(AppAssets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppAssets::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AppAssets {
    Table,
    AssetName,
    MimeType,
    Data,
    CreatedAt,
    UpdatedAt,
}
