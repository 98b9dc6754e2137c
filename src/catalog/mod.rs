//! Material catalog for the Study Plan Engine.
//!
//! The catalog supplies the subject, capacity, and unit label for known
//! material names, loaded from a CSV file. Lookup misses fall back to the
//! caller's manually entered values, and a broken catalog degrades to an
//! empty one rather than failing the application.

mod loader;
mod types;

pub use loader::{load_catalog, load_catalog_or_empty};
pub use types::{BookCatalog, CatalogEntry};
