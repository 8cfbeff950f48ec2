pub mod lead_query;
pub mod lead_repository;

pub use lead_query::{LeadQuery, LeadQueryError};
pub use lead_repository::{LeadRepository, LeadRepositoryError, NewLead};
