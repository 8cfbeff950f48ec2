use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::asset::adapter::incoming::web::routes as asset_routes;
use crate::modules::auth::adapter::incoming::web::routes as auth_routes;
use crate::modules::lead::adapter::incoming::web::routes as lead_routes;
use crate::modules::payment::adapter::incoming::web::routes as payment_routes;
use crate::modules::project::adapter::incoming::web::routes as project_routes;
use crate::modules::review::adapter::incoming::web::routes as review_routes;
use crate::modules::stats::adapter::incoming::web::routes as stats_routes;

use crate::modules::auth::application::ports::incoming::use_cases::LoginAdminResult;
use crate::modules::lead::application::ports::incoming::use_cases::LeadSubmission;
use crate::modules::project::application::ports::incoming::use_cases::{
    ProjectSubmission, ProjectUpdate,
};
use crate::modules::review::application::ports::incoming::use_cases::ReviewSubmission;
use crate::modules::stats::application::domain::entities::DashboardStats;
use crate::shared::api::response::{Created, Deleted};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DevSpark Labs API",
        version = "1.0.0",
        description = "Back-office and public endpoints for the DevSpark Labs site"
    ),
    paths(
        crate::health::health,
        crate::health::readiness,
        // Auth
        auth_routes::login_admin_handler,
        auth_routes::verify_admin_handler,
        // Leads
        lead_routes::submit_lead_handler,
        lead_routes::get_leads_handler,
        lead_routes::update_lead_status_handler,
        lead_routes::delete_lead_handler,
        // Payments
        payment_routes::submit_payment_handler,
        payment_routes::get_payments_handler,
        payment_routes::update_payment_status_handler,
        payment_routes::delete_payment_handler,
        // Reviews
        review_routes::submit_review_handler,
        review_routes::get_approved_reviews_handler,
        review_routes::get_all_reviews_handler,
        review_routes::set_review_approval_handler,
        review_routes::create_admin_review_handler,
        review_routes::delete_review_handler,
        // Projects
        project_routes::get_projects_handler,
        project_routes::get_single_project_handler,
        project_routes::create_project_handler,
        project_routes::update_project_handler,
        project_routes::delete_project_handler,
        // Stats
        stats_routes::get_stats_handler,
        // Assets
        asset_routes::get_asset_handler,
        asset_routes::put_asset_handler,
    ),
    components(
        schemas(
            Created,
            Deleted,
            auth_routes::LoginAdminRequest,
            auth_routes::VerifyAdminResponse,
            LoginAdminResult,
            LeadSubmission,
            lead_routes::UpdateLeadStatusRequest,
            lead_routes::LeadStatusUpdated,
            payment_routes::UpdatePaymentStatusRequest,
            payment_routes::PaymentStatusUpdated,
            ReviewSubmission,
            review_routes::ReviewApprovalRequest,
            review_routes::ReviewApprovalUpdated,
            ProjectSubmission,
            ProjectUpdate,
            DashboardStats,
            asset_routes::AssetStored,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Auth", description = "Admin login and token check"),
        (name = "Leads", description = "Project enquiries"),
        (name = "Payments", description = "Payment proofs awaiting verification"),
        (name = "Reviews", description = "Student testimonials"),
        (name = "Projects", description = "Public project catalog"),
        (name = "Dashboard", description = "Dashboard counters"),
        (name = "Assets", description = "Images served from the database"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /api/admin/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route_group() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/health",
            "/api/admin/login",
            "/api/leads",
            "/api/payments/{id}/status",
            "/api/reviews/{id}/approve",
            "/api/projects/{id}",
            "/api/stats",
            "/api/assets/{name}",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
