use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Select};
use std::sync::Arc;

use crate::modules::project::application::{
    domain::entities::Project,
    ports::outgoing::{ProjectQuery, ProjectQueryError},
};

use super::sea_orm_entity::{Column as ProjectColumn, Entity as ProjectEntity};

#[derive(Debug, Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn catalog_order() -> Select<ProjectEntity> {
    ProjectEntity::find()
        .order_by_desc(ProjectColumn::IsPopular)
        .order_by_desc(ProjectColumn::CreatedAt)
        .order_by_desc(ProjectColumn::Id)
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list_catalog(&self) -> Result<Vec<Project>, ProjectQueryError> {
        let models = catalog_order()
            .all(&*self.db)
            .await
            .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.into_project()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, ProjectQueryError> {
        let model = ProjectEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.into_project()))
    }
}
