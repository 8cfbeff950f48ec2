pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_table_leads;
mod m20260301_000002_create_table_app_assets;
mod m20260301_000003_create_table_payments;
mod m20260301_000004_create_table_reviews;
mod m20260301_000005_create_table_projects;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_table_leads::Migration),
            Box::new(m20260301_000002_create_table_app_assets::Migration),
            Box::new(m20260301_000003_create_table_payments::Migration),
            Box::new(m20260301_000004_create_table_reviews::Migration),
            Box::new(m20260301_000005_create_table_projects::Migration),
        ]
    }
}
