//! Embedded reference catalogs for the Northern Beaches estimator.
//!
//! The regional seed data (trades, materials, project types) ships inside
//! the binary as CSV and is parsed and validated into an
//! [`estimator_core::models::Catalog`] once at startup.

pub mod loader;

use estimator_core::models::{Catalog, CatalogError};
use thiserror::Error;

pub use loader::{CsvLoadError, parse_materials, parse_project_types, parse_trades};

const TRADES_CSV: &str = include_str!("../data/trades.csv");
const MATERIALS_CSV: &str = include_str!("../data/materials.csv");
const PROJECT_TYPES_CSV: &str = include_str!("../data/project_types.csv");

/// Errors constructing the bundled catalog.
///
/// Either of these firing means the embedded seed data is malformed, which
/// is a build defect rather than a runtime condition; the error type exists
/// so callers can report it cleanly instead of panicking.
#[derive(Debug, Error)]
pub enum DataError {
    #[error(transparent)]
    Load(#[from] CsvLoadError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Parses and validates the embedded Northern Beaches seed data.
///
/// # Errors
///
/// Returns [`DataError`] if the embedded CSVs fail to parse or violate a
/// catalog invariant (duplicate ids, dangling trade references, inverted
/// price ranges).
pub fn northern_beaches_catalog() -> Result<Catalog, DataError> {
    let project_types = parse_project_types(PROJECT_TYPES_CSV)?;
    let trades = parse_trades(TRADES_CSV)?;
    let materials = parse_materials(MATERIALS_CSV)?;
    Ok(Catalog::new(project_types, trades, materials)?)
}
