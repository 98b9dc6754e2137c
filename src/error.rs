//! Error types for the Study Plan Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during schedule planning.

use thiserror::Error;

/// The main error type for the Study Plan Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use studyplan_engine::error::ScheduleError;
///
/// let error = ScheduleError::InvalidRequest {
///     field: "material_capacity".to_string(),
///     message: "must be at least 1".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid request field 'material_capacity': must be at least 1"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A schedule request violated a precondition of the calculator.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A planner entry index did not refer to a registered material.
    #[error("No registered material at index {index}")]
    EntryNotFound {
        /// The index that was requested.
        index: usize,
    },

    /// The material catalog file could not be read or decoded.
    #[error("Failed to read catalog '{path}': {message}")]
    CatalogRead {
        /// The path to the catalog file.
        path: String,
        /// A description of the read or decode failure.
        message: String,
    },
}

/// A type alias for Results that return ScheduleError.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
