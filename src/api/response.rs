//! Response types for the Study Plan Engine API.
//!
//! This module defines the success payloads, the error response structures,
//! and the mapping from engine errors to HTTP statuses.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::SchedulePlan;
use crate::planner::PlannerEntry;

/// Response body for a successful `POST /materials`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredMaterial {
    /// The index the material was registered at.
    pub index: usize,
    /// The subject the material belongs to.
    pub subject: String,
    /// The material's display name.
    pub material_name: String,
    /// The review phase assigned at registration time.
    pub review_phase: u32,
    /// Free-text description shown in listings.
    pub detail: String,
    /// The computed day-by-day plan.
    pub plan: SchedulePlan,
}

impl RegisteredMaterial {
    /// Builds the response from a planner entry and its index.
    pub fn from_entry(index: usize, entry: &PlannerEntry) -> Self {
        Self {
            index,
            subject: entry.spec.subject.clone(),
            material_name: entry.spec.material_name.clone(),
            review_phase: entry.review_phase,
            detail: entry.detail.clone(),
            plan: entry.plan.clone(),
        }
    }
}

/// One row of the `GET /materials` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialSummary {
    /// The material's position in the planner.
    pub index: usize,
    /// The subject the material belongs to.
    pub subject: String,
    /// The material's display name.
    pub material_name: String,
    /// Free-text description shown in listings.
    pub detail: String,
    /// The first date of the plan (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the plan (inclusive).
    pub end_date: NaiveDate,
}

impl MaterialSummary {
    /// Builds a listing row from a planner entry and its index.
    pub fn from_entry(index: usize, entry: &PlannerEntry) -> Self {
        Self {
            index,
            subject: entry.spec.subject.clone(),
            material_name: entry.spec.material_name.clone(),
            detail: entry.detail.clone(),
            start_date: entry.spec.start_date,
            end_date: entry.spec.end_date,
        }
    }
}

/// Response body for `GET /catalog`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogNames {
    /// The known material names, sorted.
    pub materials: Vec<String>,
}

/// One material record of the `GET /export` feed.
///
/// This is the record shape the report renderers consume; `plan` is the
/// per-date label mapping keyed by `YYYY-MM-DD` date strings, with review
/// markers distinguishable for highlighting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedMaterial {
    /// The subject the material belongs to.
    pub subject: String,
    /// The material's display name.
    pub material_name: String,
    /// The first date of the plan (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the plan (inclusive).
    pub end_date: NaiveDate,
    /// Free-text description shown in listings.
    pub detail: String,
    /// Rendered per-date labels keyed by date string.
    pub plan: BTreeMap<String, String>,
}

impl ExportedMaterial {
    /// Builds a renderer record from a planner entry.
    pub fn from_entry(entry: &PlannerEntry) -> Self {
        Self {
            subject: entry.spec.subject.clone(),
            material_name: entry.spec.material_name.clone(),
            start_date: entry.spec.start_date,
            end_date: entry.spec.end_date,
            detail: entry.detail.clone(),
            plan: entry.plan.label_map(),
        }
    }
}

/// Response body for `GET /export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    /// The earliest start date across all materials, when any exist.
    pub start_date: Option<NaiveDate>,
    /// The latest end date across all materials, when any exist.
    pub end_date: Option<NaiveDate>,
    /// The renderer records, in registration order.
    pub materials: Vec<ExportedMaterial>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ScheduleError> for ApiErrorResponse {
    fn from(error: ScheduleError) -> Self {
        match error {
            ScheduleError::InvalidRequest { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid request field '{}': {}", field, message),
                    "The material data contains invalid information",
                ),
            },
            ScheduleError::EntryNotFound { index } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "MATERIAL_NOT_FOUND",
                    format!("No registered material at index {}", index),
                    "The index does not refer to a registered material",
                ),
            },
            ScheduleError::CatalogRead { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATALOG_ERROR",
                    "Catalog error",
                    format!("Failed to read catalog {}: {}", path, message),
                ),
            },
        }
    }
}
