//! Request types for the Study Plan Engine API.
//!
//! This module defines the JSON request structure for the `POST /materials`
//! endpoint and its resolution against the material catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::BookCatalog;
use crate::models::{MaterialSpec, PacingMode};

/// Request body for the `POST /materials` endpoint.
///
/// `subject`, `material_capacity`, and `unit_label` may be omitted; they are
/// resolved from the catalog entry for `material_name`, falling back to the
/// manually derivable defaults when the catalog has no such material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterMaterialRequest {
    /// The material's display name (also the catalog lookup key).
    pub material_name: String,
    /// The subject the material belongs to. Falls back to the catalog, then
    /// to "General".
    #[serde(default)]
    pub subject: Option<String>,
    /// How the daily pace is derived.
    pub mode: PacingMode,
    /// Total quantity or per-day quantity, depending on `mode`.
    pub input_value: u32,
    /// Number of full passes through the material.
    #[serde(default = "default_laps")]
    pub laps: u32,
    /// Cycle length in days for review-day insertion.
    #[serde(default = "default_review_interval")]
    pub review_interval: u32,
    /// Display label for positions. Falls back to the catalog, then "p.".
    #[serde(default)]
    pub unit_label: Option<String>,
    /// The size of one lap. Falls back to the catalog, then to
    /// `input_value` (a manually entered material is its own lap).
    #[serde(default)]
    pub material_capacity: Option<u32>,
    /// The first date of the plan (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the plan (inclusive).
    pub end_date: NaiveDate,
}

fn default_laps() -> u32 {
    1
}

fn default_review_interval() -> u32 {
    4
}

impl RegisterMaterialRequest {
    /// Resolves the request into a [`MaterialSpec`], filling omitted fields
    /// from the catalog entry for the material name and falling back to the
    /// manual-entry defaults on a lookup miss.
    pub fn resolve(self, catalog: &BookCatalog) -> MaterialSpec {
        let known = catalog.get(&self.material_name);

        let subject = self
            .subject
            .or_else(|| known.map(|entry| entry.subject.clone()))
            .unwrap_or_else(|| "General".to_string());
        let unit_label = self
            .unit_label
            .or_else(|| known.map(|entry| entry.unit_label.clone()))
            .unwrap_or_else(|| "p.".to_string());
        let material_capacity = self
            .material_capacity
            .or_else(|| known.map(|entry| entry.capacity))
            .unwrap_or(self.input_value);

        MaterialSpec {
            subject,
            material_name: self.material_name,
            start_date: self.start_date,
            end_date: self.end_date,
            mode: self.mode,
            input_value: self.input_value,
            laps: self.laps,
            material_capacity,
            review_interval: self.review_interval,
            unit_label,
        }
    }
}
