//! Placeholders for use cases a handler test does not touch.

use async_trait::async_trait;

use crate::modules::asset::application::{
    domain::entities::Asset,
    ports::incoming::use_cases::{
        GetAssetError, GetAssetUseCase, PutAssetCommand, PutAssetError, PutAssetUseCase,
    },
};
use crate::modules::auth::application::ports::incoming::use_cases::{
    LoginAdminCommand, LoginAdminError, LoginAdminResult, LoginAdminUseCase,
};
use crate::modules::lead::application::{
    domain::entities::Lead,
    ports::incoming::use_cases::{
        DeleteLeadError, DeleteLeadUseCase, GetLeadsError, GetLeadsUseCase, SubmitLeadCommand,
        SubmitLeadError, SubmitLeadUseCase, UpdateLeadStatusCommand, UpdateLeadStatusError,
        UpdateLeadStatusUseCase,
    },
};
use crate::modules::payment::application::{
    domain::entities::Payment,
    ports::incoming::use_cases::{
        DeletePaymentError, DeletePaymentUseCase, GetPaymentsError, GetPaymentsUseCase,
        SubmitPaymentCommand, SubmitPaymentError, SubmitPaymentUseCase,
        UpdatePaymentStatusCommand, UpdatePaymentStatusError, UpdatePaymentStatusUseCase,
    },
};
use crate::modules::project::application::{
    domain::entities::Project,
    ports::incoming::use_cases::{
        CreateProjectCommand, CreateProjectError, CreateProjectUseCase, DeleteProjectError,
        DeleteProjectUseCase, GetProjectsError, GetProjectsUseCase, GetSingleProjectError,
        GetSingleProjectUseCase, UpdateProjectCommand, UpdateProjectError, UpdateProjectUseCase,
    },
};
use crate::modules::review::application::{
    domain::entities::Review,
    ports::incoming::use_cases::{
        CreateAdminReviewUseCase, DeleteReviewError, DeleteReviewUseCase, GetAllReviewsUseCase,
        GetApprovedReviewsUseCase, GetReviewsError, SetReviewApprovalCommand,
        SetReviewApprovalError, SetReviewApprovalUseCase, SubmitReviewCommand, SubmitReviewError,
        SubmitReviewUseCase,
    },
};
use crate::modules::stats::application::{
    domain::entities::DashboardStats,
    ports::incoming::use_cases::{GetStatsError, GetStatsUseCase},
};

#[derive(Default, Clone)]
pub struct StubAuth;

#[async_trait]
impl LoginAdminUseCase for StubAuth {
    async fn execute(
        &self,
        _command: LoginAdminCommand,
    ) -> Result<LoginAdminResult, LoginAdminError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLeads;

#[async_trait]
impl SubmitLeadUseCase for StubLeads {
    async fn execute(&self, _command: SubmitLeadCommand) -> Result<Lead, SubmitLeadError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetLeadsUseCase for StubLeads {
    async fn execute(&self) -> Result<Vec<Lead>, GetLeadsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateLeadStatusUseCase for StubLeads {
    async fn execute(
        &self,
        _command: UpdateLeadStatusCommand,
    ) -> Result<(), UpdateLeadStatusError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteLeadUseCase for StubLeads {
    async fn execute(&self, _lead_id: i64) -> Result<(), DeleteLeadError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPayments;

#[async_trait]
impl SubmitPaymentUseCase for StubPayments {
    async fn execute(&self, _command: SubmitPaymentCommand) -> Result<Payment, SubmitPaymentError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetPaymentsUseCase for StubPayments {
    async fn execute(&self) -> Result<Vec<Payment>, GetPaymentsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdatePaymentStatusUseCase for StubPayments {
    async fn execute(
        &self,
        _command: UpdatePaymentStatusCommand,
    ) -> Result<(), UpdatePaymentStatusError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeletePaymentUseCase for StubPayments {
    async fn execute(&self, _payment_id: i64) -> Result<(), DeletePaymentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubReviews;

#[async_trait]
impl SubmitReviewUseCase for StubReviews {
    async fn execute(&self, _command: SubmitReviewCommand) -> Result<Review, SubmitReviewError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreateAdminReviewUseCase for StubReviews {
    async fn execute(&self, _command: SubmitReviewCommand) -> Result<Review, SubmitReviewError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetApprovedReviewsUseCase for StubReviews {
    async fn execute(&self) -> Result<Vec<Review>, GetReviewsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetAllReviewsUseCase for StubReviews {
    async fn execute(&self) -> Result<Vec<Review>, GetReviewsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl SetReviewApprovalUseCase for StubReviews {
    async fn execute(
        &self,
        _command: SetReviewApprovalCommand,
    ) -> Result<(), SetReviewApprovalError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteReviewUseCase for StubReviews {
    async fn execute(&self, _review_id: i64) -> Result<(), DeleteReviewError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubProjects;

#[async_trait]
impl GetProjectsUseCase for StubProjects {
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetSingleProjectUseCase for StubProjects {
    async fn execute(&self, _project_id: i64) -> Result<Project, GetSingleProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreateProjectUseCase for StubProjects {
    async fn execute(&self, _command: CreateProjectCommand) -> Result<Project, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateProjectUseCase for StubProjects {
    async fn execute(&self, _command: UpdateProjectCommand) -> Result<Project, UpdateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteProjectUseCase for StubProjects {
    async fn execute(&self, _project_id: i64) -> Result<(), DeleteProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubStats;

#[async_trait]
impl GetStatsUseCase for StubStats {
    async fn execute(&self) -> Result<DashboardStats, GetStatsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAssets;

#[async_trait]
impl GetAssetUseCase for StubAssets {
    async fn execute(&self, _raw_name: &str) -> Result<Asset, GetAssetError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl PutAssetUseCase for StubAssets {
    async fn execute(&self, _command: PutAssetCommand) -> Result<(), PutAssetError> {
        unimplemented!("Not used in this test")
    }
}
