use async_trait::async_trait;

use crate::domain::{
    models::{NewProject, Project, ProjectId, ProjectPatch},
    ProjectError,
};

/// Inbound port for project operations.
///
/// HTTP handlers talk to the store exclusively through this trait.
#[async_trait]
pub trait ProjectService: Send + Sync + 'static {
    /// All projects in insertion order.
    async fn list(&self) -> Result<Vec<Project>, ProjectError>;

    async fn get_by_id(&self, id: ProjectId) -> Result<Project, ProjectError>;

    /// Validate, apply defaults, assign the next id and store.
    async fn create(&self, project: NewProject) -> Result<Project, ProjectError>;

    /// Merge `patch` into an existing project and stamp `updatedAt`.
    async fn update(&self, id: ProjectId, patch: ProjectPatch) -> Result<Project, ProjectError>;

    /// Remove a project, returning the removed record.
    async fn delete(&self, id: ProjectId) -> Result<Project, ProjectError>;
}
