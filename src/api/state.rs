//! Application state for the Study Plan Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::BookCatalog;
use crate::planner::StudyPlanner;

/// Shared application state.
///
/// Contains the loaded material catalog (read-only) and the planner of
/// registered materials (mutated by registration and removal).
#[derive(Clone)]
pub struct AppState {
    /// The loaded material catalog.
    catalog: Arc<BookCatalog>,
    /// The ordered list of registered materials.
    planner: Arc<RwLock<StudyPlanner>>,
}

impl AppState {
    /// Creates a new application state around the given catalog.
    pub fn new(catalog: BookCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            planner: Arc::new(RwLock::new(StudyPlanner::new())),
        }
    }

    /// Returns a reference to the material catalog.
    pub fn catalog(&self) -> &BookCatalog {
        &self.catalog
    }

    /// Returns the shared planner lock.
    pub fn planner(&self) -> &RwLock<StudyPlanner> {
        &self.planner
    }
}
