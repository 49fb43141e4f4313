use std::sync::Arc;

use crate::{
    adapters::outbound::memory::InMemoryProjectRepository,
    config::StoreSettings,
    domain::{ports::inbound::ProjectService, services::ProjectServiceImpl, ProjectError},
};

#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<dyn ProjectService>,
}

impl AppState {
    pub fn new(projects: Arc<dyn ProjectService>) -> Self {
        Self { projects }
    }

    /// Build the state around a fresh in-memory store.
    pub async fn in_memory(settings: &StoreSettings) -> Result<Self, ProjectError> {
        let repo = Arc::new(InMemoryProjectRepository::new());
        let service = ProjectServiceImpl::new(repo);

        if settings.seed_sample_data {
            service.seed_sample_data().await?;
        }

        Ok(Self::new(Arc::new(service)))
    }
}
