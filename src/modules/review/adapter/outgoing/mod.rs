pub mod review_query_postgres;
pub mod review_repository_postgres;
pub mod sea_orm_entity;

pub use review_query_postgres::ReviewQueryPostgres;
pub use review_repository_postgres::ReviewRepositoryPostgres;
