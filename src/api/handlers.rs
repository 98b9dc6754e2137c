//! HTTP request handlers for the Study Plan Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{delete, get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::RegisterMaterialRequest;
use super::response::{
    ApiError, ApiErrorResponse, CatalogNames, ExportResponse, ExportedMaterial, MaterialSummary,
    RegisteredMaterial,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/materials",
            post(register_material)
                .get(list_materials)
                .delete(clear_materials),
        )
        .route("/materials/:index", delete(remove_material))
        .route("/catalog", get(list_catalog))
        .route("/export", get(export_schedules))
        .with_state(state)
}

/// Handler for POST /materials.
///
/// Registers a material: resolves omitted fields against the catalog,
/// assigns the next review phase, computes the schedule, and appends the
/// entry to the planner.
async fn register_material(
    State(state): State<AppState>,
    payload: Result<Json<RegisterMaterialRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing material registration");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let spec = request.resolve(state.catalog());
    let material_name = spec.material_name.clone();

    let mut planner = state.planner().write().await;
    match planner.register(spec) {
        Ok(entry) => {
            let entry = entry.clone();
            let index = planner.len() - 1;
            let response = RegisteredMaterial::from_entry(index, &entry);
            info!(
                correlation_id = %correlation_id,
                material = %material_name,
                index,
                review_phase = response.review_phase,
                plan_days = response.plan.len(),
                "Material registered"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                material = %material_name,
                error = %err,
                "Material registration failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for GET /materials.
async fn list_materials(State(state): State<AppState>) -> impl IntoResponse {
    let planner = state.planner().read().await;
    let summaries: Vec<MaterialSummary> = planner
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| MaterialSummary::from_entry(index, entry))
        .collect();
    Json(summaries)
}

/// Handler for DELETE /materials/{index}.
async fn remove_material(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> impl IntoResponse {
    let mut planner = state.planner().write().await;
    match planner.remove(index) {
        Ok(entry) => {
            info!(
                material = %entry.spec.material_name,
                index,
                "Material removed"
            );
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for DELETE /materials.
async fn clear_materials(State(state): State<AppState>) -> impl IntoResponse {
    let mut planner = state.planner().write().await;
    let removed = planner.len();
    planner.clear();
    info!(removed, "Planner cleared");
    StatusCode::NO_CONTENT
}

/// Handler for GET /catalog.
async fn list_catalog(State(state): State<AppState>) -> impl IntoResponse {
    let materials = state
        .catalog()
        .names()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(CatalogNames { materials })
}

/// Handler for GET /export.
///
/// Produces the renderer feed: overall date bounds for pagination and one
/// record per material with its rendered per-date label map.
async fn export_schedules(State(state): State<AppState>) -> impl IntoResponse {
    let planner = state.planner().read().await;
    let bounds = planner.date_bounds();
    let materials: Vec<ExportedMaterial> = planner
        .entries()
        .iter()
        .map(ExportedMaterial::from_entry)
        .collect();

    Json(ExportResponse {
        start_date: bounds.map(|(start, _)| start),
        end_date: bounds.map(|(_, end)| end),
        materials,
    })
}
