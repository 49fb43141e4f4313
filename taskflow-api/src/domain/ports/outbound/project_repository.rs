//! Project storage port (outbound).
//!
//! Implementations own id assignment and must run each mutation as a single
//! atomic read-modify-write.

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::{
    models::{Project, ProjectFields, ProjectId, ProjectPatch},
    ProjectError,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<Project>, ProjectError>;

    async fn get(&self, id: ProjectId) -> Result<Option<Project>, ProjectError>;

    /// Store under the next unused id.
    async fn insert(
        &self,
        fields: ProjectFields,
        created_at: OffsetDateTime,
    ) -> Result<Project, ProjectError>;

    /// Apply a patch to the stored project.
    ///
    /// Returns `ProjectError::NotFound` if there is no project with `id`.
    async fn update(
        &self,
        id: ProjectId,
        patch: ProjectPatch,
        now: OffsetDateTime,
    ) -> Result<Project, ProjectError>;

    async fn remove(&self, id: ProjectId) -> Result<Option<Project>, ProjectError>;
}
