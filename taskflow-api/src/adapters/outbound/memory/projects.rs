use std::collections::BTreeMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::domain::{
    models::{Project, ProjectFields, ProjectId, ProjectPatch},
    ports::outbound::ProjectRepository,
    ProjectError,
};

/// Process-lifetime project storage.
///
/// The id counter and the records sit behind the same lock, so id
/// assignment and every read-modify-write happen under one write guard.
/// Ids only ever grow, which makes the map's key order the insertion order.
pub struct InMemoryProjectRepository {
    table: RwLock<ProjectTable>,
}

struct ProjectTable {
    next_id: ProjectId,
    projects: BTreeMap<ProjectId, Project>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(ProjectTable {
                next_id: ProjectId::FIRST,
                projects: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, ProjectError> {
        let table = self.table.read().await;
        Ok(table.projects.values().cloned().collect())
    }

    async fn get(&self, id: ProjectId) -> Result<Option<Project>, ProjectError> {
        let table = self.table.read().await;
        Ok(table.projects.get(&id).cloned())
    }

    async fn insert(
        &self,
        fields: ProjectFields,
        created_at: OffsetDateTime,
    ) -> Result<Project, ProjectError> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id = id
            .next()
            .ok_or_else(|| ProjectError::internal("project id space exhausted"))?;

        let project = fields.into_project(id, created_at);
        table.projects.insert(id, project.clone());
        tracing::debug!(project_id = %id, total = table.projects.len(), "Stored project");

        Ok(project)
    }

    async fn update(
        &self,
        id: ProjectId,
        patch: ProjectPatch,
        now: OffsetDateTime,
    ) -> Result<Project, ProjectError> {
        let mut table = self.table.write().await;
        let project = table
            .projects
            .get_mut(&id)
            .ok_or(ProjectError::NotFound(id))?;

        project.apply(patch, now)?;
        Ok(project.clone())
    }

    async fn remove(&self, id: ProjectId) -> Result<Option<Project>, ProjectError> {
        let mut table = self.table.write().await;
        Ok(table.projects.remove(&id))
    }
}
