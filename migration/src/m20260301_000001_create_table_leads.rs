use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leads::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Leads::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Leads::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Leads::College).string_len(200).not_null())
                    .col(ColumnDef::new(Leads::Branch).string_len(150).not_null())
                    .col(ColumnDef::new(Leads::ProjectDomain).string_len(150).not_null())
                    .col(ColumnDef::new(Leads::Budget).string_len(100).not_null())
                    .col(ColumnDef::new(Leads::Deadline).string_len(100).not_null())
                    .col(ColumnDef::new(Leads::Phone).string_len(30).not_null())
                    .col(ColumnDef::new(Leads::Message).text())
                    .col(
                        ColumnDef::new(Leads::Status)
                            .string_len(20)
                            .not_null()
                            .default("new"),
                    )
                    .col(
                        ColumnDef::new(Leads::CreatedAt)
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
                ALTER TABLE leads
                ADD CONSTRAINT leads_status_check
                CHECK (status IN ('new', 'contacted', 'in_progress', 'completed'));
                "#,
            )
            .await?;

        // Admin listing is newest first; stats count by status
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_leads_created_at
                ON leads (created_at DESC, id DESC);

                CREATE INDEX IF NOT EXISTS idx_leads_status
                ON leads (status);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Leads::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Leads {
    Table,
    Id,
    Name,
    College,
    Branch,
    ProjectDomain,
    Budget,
    Deadline,
    Phone,
    Message,
    Status,
    CreatedAt,
}
