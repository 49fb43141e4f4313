use axum::Json;
use serde::Serialize;
use std::collections::BTreeMap;

use super::ApiError;

#[derive(Debug, Serialize)]
pub struct ApiIndex {
    message: &'static str,
    endpoints: BTreeMap<&'static str, &'static str>,
}

pub async fn index() -> Json<ApiIndex> {
    let endpoints = BTreeMap::from([
        ("GET /api/projects", "Get all projects"),
        ("GET /api/projects/:id", "Get one project"),
        ("POST /api/projects", "Create new project"),
        ("PUT /api/projects/:id", "Update project"),
        ("DELETE /api/projects/:id", "Delete project"),
    ]);

    Json(ApiIndex {
        message: "TaskFlow API is running",
        endpoints,
    })
}

pub async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
