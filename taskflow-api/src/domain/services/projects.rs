use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::{
    models::{NewProject, Project, ProjectId, ProjectPatch},
    ports::{inbound::ProjectService, outbound::ProjectRepository},
    ProjectError,
};

/// Implementation of the ProjectService inbound port.
///
/// Validates input, applies defaults and timestamps, then hands the write
/// to the repository, which owns id assignment.
pub struct ProjectServiceImpl<R> {
    repo: Arc<R>,
}

impl<R: ProjectRepository> ProjectServiceImpl<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Populate the store with the demo projects the frontend expects on a
    /// fresh start.
    pub async fn seed_sample_data(&self) -> Result<Vec<Project>, ProjectError> {
        let samples = [
            NewProject::new("E-commerce Website", "TechStore Inc")
                .with_hours_worked(45.0)
                .with_hourly_rate(50.0)
                .with_status("active")
                .with_description("Building a modern online store"),
            NewProject::new("Logo Design", "StartupXYZ")
                .with_hours_worked(8.0)
                .with_hourly_rate(60.0)
                .with_status("completed")
                .with_description("Brand identity design"),
        ];

        let mut seeded = Vec::with_capacity(samples.len());
        for sample in samples {
            seeded.push(self.create(sample).await?);
        }
        tracing::info!(count = seeded.len(), "Seeded sample projects");

        Ok(seeded)
    }
}

#[async_trait]
impl<R: ProjectRepository> ProjectService for ProjectServiceImpl<R> {
    async fn list(&self) -> Result<Vec<Project>, ProjectError> {
        self.repo.list().await
    }

    async fn get_by_id(&self, id: ProjectId) -> Result<Project, ProjectError> {
        self.repo.get(id).await?.ok_or(ProjectError::NotFound(id))
    }

    async fn create(&self, project: NewProject) -> Result<Project, ProjectError> {
        let fields = project.validate()?;
        let created = self.repo.insert(fields, OffsetDateTime::now_utc()).await?;

        tracing::info!(project_id = %created.id, name = %created.name, "Created project");
        Ok(created)
    }

    async fn update(&self, id: ProjectId, patch: ProjectPatch) -> Result<Project, ProjectError> {
        // Fail fast on bad field values before taking the write lock.
        patch.validate()?;
        let updated = self
            .repo
            .update(id, patch, OffsetDateTime::now_utc())
            .await?;

        tracing::info!(project_id = %id, "Updated project");
        Ok(updated)
    }

    async fn delete(&self, id: ProjectId) -> Result<Project, ProjectError> {
        let removed = self
            .repo
            .remove(id)
            .await?
            .ok_or(ProjectError::NotFound(id))?;

        tracing::info!(project_id = %id, "Deleted project");
        Ok(removed)
    }
}
