mod delete_lead_service;
mod get_leads_service;
mod submit_lead_service;
mod update_lead_status_service;

pub use delete_lead_service::DeleteLeadService;
pub use get_leads_service::GetLeadsService;
pub use submit_lead_service::SubmitLeadService;
pub use update_lead_status_service::UpdateLeadStatusService;
