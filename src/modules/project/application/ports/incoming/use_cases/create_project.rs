use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::project::application::{
    domain::entities::{
        catalog_tag, normalize_features, project_title, Project, MAX_TAG_CHARS, MAX_TITLE_CHARS,
    },
    ports::outgoing::NewProject,
};
use crate::shared::api::coerce::FlexibleBool;
use crate::shared::validation::{optional_text, positive_amount, RequiredFields, ValidationError};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProjectSubmission {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub year_type: Option<String>,
    /// Number or numeric string.
    #[schema(value_type = Option<String>)]
    pub price: Option<Decimal>,
    /// Comma separated, e.g. `"Source code, Report"`.
    pub features: Option<String>,
    #[schema(value_type = Option<bool>)]
    pub is_popular: Option<FlexibleBool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProjectCommand {
    project: NewProject,
}

impl CreateProjectCommand {
    pub fn new(submission: ProjectSubmission) -> Result<Self, ValidationError> {
        let mut required = RequiredFields::new();
        let title = required.text("title", submission.title, MAX_TITLE_CHARS);
        let category = required.text("category", submission.category, MAX_TAG_CHARS);
        let year_type = required.text("year_type", submission.year_type, MAX_TAG_CHARS);
        let price = required.value("price", submission.price.map(Some));
        required.finish()?;

        let price = price.ok_or_else(|| ValidationError::MissingFields(vec!["price"]))?;
        let is_popular = match submission.is_popular {
            Some(flag) => flag.parse("is_popular")?,
            None => false,
        };

        Ok(Self {
            project: NewProject {
                title: project_title(&title)?,
                description: optional_text(submission.description),
                category: catalog_tag("category", &category)?,
                year_type: catalog_tag("year_type", &year_type)?,
                price: positive_amount("price", price)?,
                features: submission.features.as_deref().and_then(normalize_features),
                is_popular,
            },
        })
    }

    pub fn project(&self) -> &NewProject {
        &self.project
    }

    pub fn into_new_project(self) -> NewProject {
        self.project
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, command: CreateProjectCommand) -> Result<Project, CreateProjectError>;
}
