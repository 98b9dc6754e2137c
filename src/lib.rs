//! Study Plan Engine
//!
//! This crate computes day-by-day study progress schedules for learning
//! materials, given a date range, a pacing mode, a lap count, and a periodic
//! review cadence. The schedule calculator is a pure function; around it sit
//! a CSV material catalog, an ordered planner of registered materials, and an
//! HTTP API that feeds the report renderers.

#![warn(missing_docs)]

pub mod api;
pub mod catalog;
pub mod error;
pub mod models;
pub mod planner;
pub mod scheduling;
