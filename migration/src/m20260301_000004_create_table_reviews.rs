use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::StudentName).string_len(150).not_null())
                    .col(ColumnDef::new(Reviews::CollegeName).string_len(200).not_null())
                    .col(ColumnDef::new(Reviews::YearOfStudy).string_len(50).not_null())
                    .col(ColumnDef::new(Reviews::ProjectName).string_len(200).not_null())
                    .col(ColumnDef::new(Reviews::Rating).small_integer().not_null())
                    .col(ColumnDef::new(Reviews::Experience).text().not_null())
                    .col(ColumnDef::new(Reviews::PricingReview).text())
                    .col(
                        ColumnDef::new(Reviews::IsApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Reviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE reviews
                ADD CONSTRAINT reviews_rating_range
                CHECK (rating BETWEEN 1 AND 5);
                "#,
            )
            .await?;

        // Public listing only ever reads approved rows
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_reviews_created_at
                ON reviews (created_at DESC, id DESC);

                CREATE INDEX IF NOT EXISTS idx_reviews_approved
                ON reviews (created_at DESC, id DESC)
                WHERE is_approved = TRUE;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    StudentName,
    CollegeName,
    YearOfStudy,
    ProjectName,
    Rating,
    Experience,
    PricingReview,
    IsApproved,
    CreatedAt,
}
