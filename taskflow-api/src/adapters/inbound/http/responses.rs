//! HTTP response types for the project endpoints.
//!
//! Every body is wrapped in an [`Envelope`]; these types serialize to the
//! JSON shape the frontend reads.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::models::{Project, ProjectId};

/// `{ success, data?, error?, count? }` wrapper around every response.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            count: None,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// A list payload; `count` mirrors the number of items.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(items.len()),
            data: Some(items),
            error: None,
        }
    }
}

impl Envelope<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            count: None,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// A project as the API exposes it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: ProjectId,
    pub name: String,
    pub client: String,
    /// Amounts are always written as JSON floats (`50.0`, not `50`).
    pub hourly_rate: f64,
    pub hours_worked: f64,
    pub status: String,
    pub description: String,
    /// ISO 8601.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Omitted until the project has been updated once.
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            client: project.client,
            hourly_rate: project.hourly_rate,
            hours_worked: project.hours_worked,
            status: project.status,
            description: project.description,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}
