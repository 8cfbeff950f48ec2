mod delete_payment;
mod get_payments;
mod submit_payment;
mod update_payment_status;

pub use delete_payment::*;
pub use get_payments::*;
pub use submit_payment::*;
pub use update_payment_status::*;
