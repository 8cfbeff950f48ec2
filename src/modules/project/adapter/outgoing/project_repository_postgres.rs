use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use std::sync::Arc;

use crate::modules::project::application::{
    domain::entities::Project,
    ports::outgoing::{
        NewProject, PatchField, ProjectChanges, ProjectRepository, ProjectRepositoryError,
    },
};

use super::sea_orm_entity::{
    ActiveModel as ProjectActiveModel, Column as ProjectColumn, Entity as ProjectEntity,
};

#[derive(Debug, Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

fn apply_nullable(field: PatchField<String>) -> sea_orm::ActiveValue<Option<String>> {
    match field {
        PatchField::Unset => NotSet,
        PatchField::Null => Set(None),
        PatchField::Value(v) => Set(Some(v)),
    }
}

fn changes_to_active_model(changes: ProjectChanges) -> ProjectActiveModel {
    ProjectActiveModel {
        title: changes.title.map_or(NotSet, Set),
        description: apply_nullable(changes.description),
        category: changes.category.map_or(NotSet, Set),
        year_type: changes.year_type.map_or(NotSet, Set),
        price: changes.price.map_or(NotSet, Set),
        features: apply_nullable(changes.features),
        is_popular: changes.is_popular.map_or(NotSet, Set),
        ..Default::default()
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn insert_project(&self, project: NewProject) -> Result<Project, ProjectRepositoryError> {
        let active = ProjectActiveModel {
            id: NotSet,
            title: Set(project.title),
            description: Set(project.description),
            category: Set(project.category),
            year_type: Set(project.year_type),
            price: Set(project.price),
            features: Set(project.features),
            is_popular: Set(project.is_popular),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = ProjectEntity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(inserted.into_project())
    }

    async fn update_project(
        &self,
        id: i64,
        changes: ProjectChanges,
    ) -> Result<Project, ProjectRepositoryError> {
        // Nothing to write; still answer with the stored row or NotFound
        if changes.is_empty() {
            return ProjectEntity::find_by_id(id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .map(|m| m.into_project())
                .ok_or(ProjectRepositoryError::NotFound);
        }

        let updated = ProjectEntity::update_many()
            .set(changes_to_active_model(changes))
            .filter(ProjectColumn::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(|m| m.into_project())
            .ok_or(ProjectRepositoryError::NotFound)
    }

    async fn delete_project(&self, id: i64) -> Result<(), ProjectRepositoryError> {
        let result = ProjectEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}
