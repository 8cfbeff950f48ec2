use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::StudentName).string_len(150).not_null())
                    .col(ColumnDef::new(Payments::Phone).string_len(30).not_null())
                    .col(ColumnDef::new(Payments::ProjectName).string_len(200).not_null())
                    .col(ColumnDef::new(Payments::Amount).decimal_len(12, 2).not_null())
                    .col(ColumnDef::new(Payments::Screenshot).string_len(100))
                    .col(
                        ColumnDef::new(Payments::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Payments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_screenshot")
                            .from(Payments::Table, Payments::Screenshot)
                            .to(AppAssets::Table, AppAssets::AssetName)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE payments
                ADD CONSTRAINT payments_status_check
                CHECK (status IN ('pending', 'verified', 'rejected'));

                ALTER TABLE payments
                ADD CONSTRAINT payments_amount_positive
                CHECK (amount > 0);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_payments_created_at
                ON payments (created_at DESC, id DESC);

                CREATE INDEX IF NOT EXISTS idx_payments_status
                ON payments (status);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payments::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
    StudentName,
    Phone,
    ProjectName,
    Amount,
    Screenshot,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AppAssets {
    Table,
    AssetName,
}
