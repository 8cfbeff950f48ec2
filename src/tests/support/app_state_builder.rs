use std::sync::Arc;

use actix_web::web;

use crate::modules::asset::application::{
    asset_use_cases::AssetUseCases,
    ports::incoming::use_cases::{GetAssetUseCase, PutAssetUseCase},
};
use crate::modules::auth::application::{
    auth_use_cases::AuthUseCases, ports::incoming::use_cases::LoginAdminUseCase,
};
use crate::modules::lead::application::{
    lead_use_cases::LeadUseCases,
    ports::incoming::use_cases::{
        DeleteLeadUseCase, GetLeadsUseCase, SubmitLeadUseCase, UpdateLeadStatusUseCase,
    },
};
use crate::modules::payment::application::{
    payment_use_cases::PaymentUseCases,
    ports::incoming::use_cases::{
        DeletePaymentUseCase, GetPaymentsUseCase, SubmitPaymentUseCase,
        UpdatePaymentStatusUseCase,
    },
};
use crate::modules::project::application::{
    ports::incoming::use_cases::{
        CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
        UpdateProjectUseCase,
    },
    project_use_cases::ProjectUseCases,
};
use crate::modules::review::application::{
    ports::incoming::use_cases::{
        CreateAdminReviewUseCase, DeleteReviewUseCase, GetAllReviewsUseCase,
        GetApprovedReviewsUseCase, SetReviewApprovalUseCase, SubmitReviewUseCase,
    },
    review_use_cases::ReviewUseCases,
};
use crate::modules::stats::application::{
    ports::incoming::use_cases::GetStatsUseCase, stats_use_cases::StatsUseCases,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// `AppState` where every use case panics unless a test swaps it in.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    lead: LeadUseCases,
    payment: PaymentUseCases,
    review: ReviewUseCases,
    project: ProjectUseCases,
    stats: StatsUseCases,
    asset: AssetUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                login: Arc::new(StubAuth),
            },
            lead: LeadUseCases {
                submit: Arc::new(StubLeads),
                get_list: Arc::new(StubLeads),
                update_status: Arc::new(StubLeads),
                delete: Arc::new(StubLeads),
            },
            payment: PaymentUseCases {
                submit: Arc::new(StubPayments),
                get_list: Arc::new(StubPayments),
                update_status: Arc::new(StubPayments),
                delete: Arc::new(StubPayments),
            },
            review: ReviewUseCases {
                submit: Arc::new(StubReviews),
                get_approved: Arc::new(StubReviews),
                get_all: Arc::new(StubReviews),
                set_approval: Arc::new(StubReviews),
                create_admin: Arc::new(StubReviews),
                delete: Arc::new(StubReviews),
            },
            project: ProjectUseCases {
                get_list: Arc::new(StubProjects),
                get_single: Arc::new(StubProjects),
                create: Arc::new(StubProjects),
                update: Arc::new(StubProjects),
                delete: Arc::new(StubProjects),
            },
            stats: StatsUseCases {
                get: Arc::new(StubStats),
            },
            asset: AssetUseCases {
                get: Arc::new(StubAssets),
                put: Arc::new(StubAssets),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_admin(mut self, uc: impl LoginAdminUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_submit_lead(mut self, uc: impl SubmitLeadUseCase + 'static) -> Self {
        self.lead.submit = Arc::new(uc);
        self
    }

    pub fn with_get_leads(mut self, uc: impl GetLeadsUseCase + 'static) -> Self {
        self.lead.get_list = Arc::new(uc);
        self
    }

    pub fn with_update_lead_status(mut self, uc: impl UpdateLeadStatusUseCase + 'static) -> Self {
        self.lead.update_status = Arc::new(uc);
        self
    }

    pub fn with_delete_lead(mut self, uc: impl DeleteLeadUseCase + 'static) -> Self {
        self.lead.delete = Arc::new(uc);
        self
    }

    pub fn with_submit_payment(mut self, uc: impl SubmitPaymentUseCase + 'static) -> Self {
        self.payment.submit = Arc::new(uc);
        self
    }

    pub fn with_get_payments(mut self, uc: impl GetPaymentsUseCase + 'static) -> Self {
        self.payment.get_list = Arc::new(uc);
        self
    }

    pub fn with_update_payment_status(
        mut self,
        uc: impl UpdatePaymentStatusUseCase + 'static,
    ) -> Self {
        self.payment.update_status = Arc::new(uc);
        self
    }

    pub fn with_delete_payment(mut self, uc: impl DeletePaymentUseCase + 'static) -> Self {
        self.payment.delete = Arc::new(uc);
        self
    }

    pub fn with_submit_review(mut self, uc: impl SubmitReviewUseCase + 'static) -> Self {
        self.review.submit = Arc::new(uc);
        self
    }

    pub fn with_get_approved_reviews(
        mut self,
        uc: impl GetApprovedReviewsUseCase + 'static,
    ) -> Self {
        self.review.get_approved = Arc::new(uc);
        self
    }

    pub fn with_get_all_reviews(mut self, uc: impl GetAllReviewsUseCase + 'static) -> Self {
        self.review.get_all = Arc::new(uc);
        self
    }

    pub fn with_set_review_approval(
        mut self,
        uc: impl SetReviewApprovalUseCase + 'static,
    ) -> Self {
        self.review.set_approval = Arc::new(uc);
        self
    }

    pub fn with_create_admin_review(
        mut self,
        uc: impl CreateAdminReviewUseCase + 'static,
    ) -> Self {
        self.review.create_admin = Arc::new(uc);
        self
    }

    pub fn with_delete_review(mut self, uc: impl DeleteReviewUseCase + 'static) -> Self {
        self.review.delete = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(mut self, uc: impl GetSingleProjectUseCase + 'static) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + 'static) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_update_project(mut self, uc: impl UpdateProjectUseCase + 'static) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl DeleteProjectUseCase + 'static) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    pub fn with_get_stats(mut self, uc: impl GetStatsUseCase + 'static) -> Self {
        self.stats.get = Arc::new(uc);
        self
    }

    pub fn with_get_asset(mut self, uc: impl GetAssetUseCase + 'static) -> Self {
        self.asset.get = Arc::new(uc);
        self
    }

    pub fn with_put_asset(mut self, uc: impl PutAssetUseCase + 'static) -> Self {
        self.asset.put = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            lead: self.lead,
            payment: self.payment,
            review: self.review,
            project: self.project,
            stats: self.stats,
            asset: self.asset,
        })
    }
}
