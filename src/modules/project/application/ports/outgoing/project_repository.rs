use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::project::application::domain::entities::Project;

// Explicit update semantics:
// - Unset: field omitted => keep stored value
// - Null: explicit null => clear the column (nullable columns only)
// - Value(v): replace with v
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PatchField<U> {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub year_type: String,
    pub price: Decimal,
    pub features: Option<String>,
    pub is_popular: bool,
}

/// Validated partial update; `None` keeps the stored value of a non-null column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: PatchField<String>,
    pub category: Option<String>,
    pub year_type: Option<String>,
    pub price: Option<Decimal>,
    pub features: PatchField<String>,
    pub is_popular: Option<bool>,
}

impl ProjectChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_unset()
            && self.category.is_none()
            && self.year_type.is_none()
            && self.price.is_none()
            && self.features.is_unset()
            && self.is_popular.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn insert_project(&self, project: NewProject) -> Result<Project, ProjectRepositoryError>;

    /// Returns the row as stored after the update.
    async fn update_project(
        &self,
        id: i64,
        changes: ProjectChanges,
    ) -> Result<Project, ProjectRepositoryError>;

    async fn delete_project(&self, id: i64) -> Result<(), ProjectRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        features: PatchField<String>,
    }

    #[test]
    fn omitted_null_and_value_are_distinct() {
        let omitted: Probe = serde_json::from_str("{}").unwrap();
        let null: Probe = serde_json::from_str(r#"{"features": null}"#).unwrap();
        let value: Probe = serde_json::from_str(r#"{"features": "PPT"}"#).unwrap();

        assert_eq!(omitted.features, PatchField::Unset);
        assert_eq!(null.features, PatchField::Null);
        assert_eq!(value.features, PatchField::Value("PPT".to_string()));
    }

    #[test]
    fn empty_changes_are_detected() {
        assert!(ProjectChanges::default().is_empty());
        assert!(!ProjectChanges {
            features: PatchField::Null,
            ..Default::default()
        }
        .is_empty());
    }
}
