pub mod lead_query_postgres;
pub mod lead_repository_postgres;
pub mod sea_orm_entity;

pub use lead_query_postgres::LeadQueryPostgres;
pub use lead_repository_postgres::LeadRepositoryPostgres;
