pub mod payment_query;
pub mod payment_repository;

pub use payment_query::{PaymentQuery, PaymentQueryError};
pub use payment_repository::{NewPayment, PaymentRepository, PaymentRepositoryError, Screenshot};
