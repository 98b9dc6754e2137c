//! Catalog loading functionality.
//!
//! Reads the material catalog from a CSV file with rows of the form
//! `subject,name,capacity[,unit_label]`. Files written by spreadsheet tools
//! in a legacy Japanese locale are handled by falling back from UTF-8 to
//! Shift_JIS (cp932). Malformed rows are skipped, never fatal; a missing
//! file is an empty catalog.

use std::fs;
use std::path::Path;

use encoding_rs::SHIFT_JIS;
use tracing::warn;

use crate::error::{ScheduleError, ScheduleResult};

use super::types::{BookCatalog, CatalogEntry};

/// The unit label assumed when a row omits the fourth field.
const DEFAULT_UNIT_LABEL: &str = "p.";

/// Loads the catalog from a CSV file.
///
/// # Arguments
///
/// * `path` - Path to the catalog file (e.g. "catalog/books.csv")
///
/// # Returns
///
/// The parsed catalog. A missing file yields an empty catalog (`Ok`); an
/// unreadable or undecodable file yields
/// [`ScheduleError::CatalogRead`]. Rows are skipped (not fatal) when they
/// have fewer than three fields, a capacity that is not a positive integer,
/// or an empty material name.
///
/// # Example
///
/// ```no_run
/// use studyplan_engine::catalog::load_catalog;
///
/// let catalog = load_catalog("catalog/books.csv")?;
/// if let Some(entry) = catalog.get("Blue Chart Algebra") {
///     println!("{} has {} pages", entry.subject, entry.capacity);
/// }
/// # Ok::<(), studyplan_engine::error::ScheduleError>(())
/// ```
pub fn load_catalog<P: AsRef<Path>>(path: P) -> ScheduleResult<BookCatalog> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(BookCatalog::default());
    }

    let path_str = path.display().to_string();
    let bytes = fs::read(path).map_err(|e| ScheduleError::CatalogRead {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    let text = decode_catalog_bytes(bytes, &path_str)?;
    Ok(parse_catalog(&text))
}

/// Loads the catalog, degrading any failure to an empty catalog.
///
/// Total catalog failure must never abort the application; manual entry
/// still works against an empty catalog. The failure is logged.
pub fn load_catalog_or_empty<P: AsRef<Path>>(path: P) -> BookCatalog {
    match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(error) => {
            warn!(error = %error, "Catalog unavailable, falling back to empty catalog");
            BookCatalog::default()
        }
    }
}

/// Decodes catalog bytes as UTF-8, falling back to Shift_JIS.
fn decode_catalog_bytes(bytes: Vec<u8>, path_str: &str) -> ScheduleResult<String> {
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(error) => {
            let bytes = error.into_bytes();
            let (decoded, _, had_errors) = SHIFT_JIS.decode(&bytes);
            if had_errors {
                return Err(ScheduleError::CatalogRead {
                    path: path_str.to_string(),
                    message: "not valid UTF-8 or Shift_JIS".to_string(),
                });
            }
            Ok(decoded.into_owned())
        }
    }
}

/// Parses catalog rows, skipping any that are malformed.
fn parse_catalog(text: &str) -> BookCatalog {
    let mut catalog = BookCatalog::default();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(_) => continue,
        };
        if record.len() < 3 {
            continue;
        }

        let subject = record[0].trim();
        let name = record[1].trim();
        let capacity: u32 = match record[2].trim().parse() {
            Ok(capacity) if capacity > 0 => capacity,
            _ => continue,
        };
        if name.is_empty() {
            continue;
        }

        let unit_label = record
            .get(3)
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .unwrap_or(DEFAULT_UNIT_LABEL);

        catalog.insert(
            name.to_string(),
            CatalogEntry {
                subject: subject.to_string(),
                capacity,
                unit_label: unit_label.to_string(),
            },
        );
    }

    catalog
}
