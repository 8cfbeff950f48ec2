mod delete_lead;
mod get_leads;
mod submit_lead;
mod update_lead_status;

pub use delete_lead::*;
pub use get_leads::*;
pub use submit_lead::*;
pub use update_lead_status::*;
