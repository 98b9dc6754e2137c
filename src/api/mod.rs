//! HTTP API module for the Study Plan Engine.
//!
//! This module provides the REST endpoints for registering materials,
//! managing the planner list, and exporting the computed schedules to the
//! report renderers.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::RegisterMaterialRequest;
pub use response::ApiError;
pub use state::AppState;
