use axum::{extract::State, http::StatusCode, routing::get, Router};
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::instrument;

use super::ApiError;
use crate::{
    adapters::inbound::http::{ApiJson, ApiPath, Envelope, ProjectResponse},
    app_state::AppState,
    domain::models::{NewProject, ProjectId, ProjectPatch},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
}

type ApiResult<T> = Result<T, ApiError>;

#[instrument(name = "GET /api/projects", skip(app_state))]
async fn list_projects(
    State(app_state): State<AppState>,
) -> ApiResult<Envelope<Vec<ProjectResponse>>> {
    let projects = app_state.projects.list().await?;
    let response: Vec<ProjectResponse> = projects.into_iter().map(ProjectResponse::from).collect();

    Ok(Envelope::list(response))
}

#[instrument(name = "GET /api/projects/:id", skip(app_state))]
async fn get_project(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<ProjectId>,
) -> ApiResult<Envelope<ProjectResponse>> {
    let project = app_state.projects.get_by_id(id).await?;

    Ok(Envelope::data(project.into()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateProjectBody {
    name: Option<String>,
    client: Option<String>,
    hourly_rate: Option<f64>,
    hours_worked: Option<f64>,
    status: Option<String>,
    description: Option<String>,
}

impl From<CreateProjectBody> for NewProject {
    fn from(body: CreateProjectBody) -> Self {
        Self {
            name: body.name,
            client: body.client,
            hourly_rate: body.hourly_rate,
            hours_worked: body.hours_worked,
            status: body.status,
            description: body.description,
        }
    }
}

#[instrument(name = "POST /api/projects", skip(app_state))]
async fn create_project(
    State(app_state): State<AppState>,
    ApiJson(body): ApiJson<CreateProjectBody>,
) -> ApiResult<(StatusCode, Envelope<ProjectResponse>)> {
    let project = app_state.projects.create(body.into()).await?;

    Ok((StatusCode::CREATED, Envelope::data(project.into())))
}

/// Partial update. `id` and `createdAt` may be echoed back but not changed;
/// any other field (e.g. `updatedAt`) is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProjectBody {
    id: Option<ProjectId>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    created_at: Option<OffsetDateTime>,
    name: Option<String>,
    client: Option<String>,
    hourly_rate: Option<f64>,
    hours_worked: Option<f64>,
    status: Option<String>,
    description: Option<String>,
}

impl From<UpdateProjectBody> for ProjectPatch {
    fn from(body: UpdateProjectBody) -> Self {
        Self {
            id: body.id,
            created_at: body.created_at,
            name: body.name,
            client: body.client,
            hourly_rate: body.hourly_rate,
            hours_worked: body.hours_worked,
            status: body.status,
            description: body.description,
        }
    }
}

#[instrument(name = "PUT /api/projects/:id", skip(app_state))]
async fn update_project(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<ProjectId>,
    ApiJson(body): ApiJson<UpdateProjectBody>,
) -> ApiResult<Envelope<ProjectResponse>> {
    let project = app_state.projects.update(id, body.into()).await?;

    Ok(Envelope::data(project.into()))
}

#[instrument(name = "DELETE /api/projects/:id", skip(app_state))]
async fn delete_project(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<ProjectId>,
) -> ApiResult<Envelope<ProjectResponse>> {
    let removed = app_state.projects.delete(id).await?;

    Ok(Envelope::data(removed.into()))
}
