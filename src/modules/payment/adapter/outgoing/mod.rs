pub mod payment_query_postgres;
pub mod payment_repository_postgres;
pub mod sea_orm_entity;

pub use payment_query_postgres::PaymentQueryPostgres;
pub use payment_repository_postgres::PaymentRepositoryPostgres;
