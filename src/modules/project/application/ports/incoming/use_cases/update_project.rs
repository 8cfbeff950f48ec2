use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::project::application::{
    domain::entities::{catalog_tag, normalize_features, project_title, Project},
    ports::outgoing::{PatchField, ProjectChanges},
};
use crate::shared::api::coerce::FlexibleBool;
use crate::shared::validation::{optional_text, positive_amount, ValidationError};

/// Omitted fields are kept; `null` clears `description` and `features`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProjectUpdate {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub category: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub year_type: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub price: PatchField<Decimal>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub features: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub is_popular: PatchField<FlexibleBool>,
}

fn non_null<T>(field: &'static str, value: PatchField<T>) -> Result<Option<T>, ValidationError> {
    match value {
        PatchField::Unset => Ok(None),
        PatchField::Null => Err(ValidationError::invalid(field, "cannot be null")),
        PatchField::Value(v) => Ok(Some(v)),
    }
}

fn clearable(value: PatchField<Option<String>>) -> PatchField<String> {
    match value {
        PatchField::Value(None) => PatchField::Null,
        PatchField::Value(Some(v)) => PatchField::Value(v),
        PatchField::Null => PatchField::Null,
        PatchField::Unset => PatchField::Unset,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProjectCommand {
    id: i64,
    changes: ProjectChanges,
}

impl UpdateProjectCommand {
    pub fn new(id: i64, update: ProjectUpdate) -> Result<Self, ValidationError> {
        let title = non_null("title", update.title)?
            .map(|t| project_title(&t))
            .transpose()?;
        let category = non_null("category", update.category)?
            .map(|c| catalog_tag("category", &c))
            .transpose()?;
        let year_type = non_null("year_type", update.year_type)?
            .map(|y| catalog_tag("year_type", &y))
            .transpose()?;
        let price = non_null("price", update.price)?
            .map(|p| positive_amount("price", p))
            .transpose()?;
        let is_popular = non_null("is_popular", update.is_popular)?
            .map(|flag| flag.parse("is_popular"))
            .transpose()?;

        Ok(Self {
            id,
            changes: ProjectChanges {
                title,
                description: clearable(update.description.map(|d| optional_text(Some(d)))),
                category,
                year_type,
                price,
                features: clearable(update.features.map(|f| normalize_features(&f))),
                is_popular,
            },
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn changes(&self) -> &ProjectChanges {
        &self.changes
    }

    pub fn into_parts(self) -> (i64, ProjectChanges) {
        (self.id, self.changes)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProjectCommand) -> Result<Project, UpdateProjectError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> Result<UpdateProjectCommand, ValidationError> {
        UpdateProjectCommand::new(7, serde_json::from_value(body).unwrap())
    }

    #[test]
    fn omitted_fields_are_kept() {
        let cmd = parse(json!({ "price": "2500.5" })).unwrap();

        assert_eq!(
            cmd.changes(),
            &ProjectChanges {
                price: Some(Decimal::new(250050, 2)),
                ..Default::default()
            }
        );
    }

    #[test]
    fn null_clears_nullable_fields() {
        let cmd = parse(json!({ "description": null, "features": null })).unwrap();

        assert_eq!(cmd.changes().description, PatchField::Null);
        assert_eq!(cmd.changes().features, PatchField::Null);
    }

    #[test]
    fn blank_text_clears_too() {
        let cmd = parse(json!({ "description": "  ", "features": " , " })).unwrap();

        assert_eq!(cmd.changes().description, PatchField::Null);
        assert_eq!(cmd.changes().features, PatchField::Null);
    }

    #[test]
    fn values_are_normalized() {
        let cmd = parse(json!({
            "title": " New title ",
            "category": "DataScience",
            "features": "A,B ,, C",
            "is_popular": 0,
        }))
        .unwrap();

        let changes = cmd.changes();
        assert_eq!(changes.title.as_deref(), Some("New title"));
        assert_eq!(changes.category.as_deref(), Some("datascience"));
        assert_eq!(changes.features, PatchField::Value("A, B, C".to_string()));
        assert_eq!(changes.is_popular, Some(false));
    }

    #[test]
    fn null_on_required_column_is_rejected() {
        for field in ["title", "category", "year_type", "price", "is_popular"] {
            let err = parse(json!({ field: null })).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidField { field: f, .. } if f == field),
                "{field}"
            );
        }
    }

    #[test]
    fn negative_price_is_rejected() {
        assert!(parse(json!({ "price": -10 })).is_err());
    }
}
