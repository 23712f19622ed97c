//! CSV loaders for the regional reference catalogs.
//!
//! ## CSV formats
//!
//! Column order does **not** matter (headers are matched by name); header
//! names are case-sensitive. Whitespace around values is trimmed. Text
//! fields containing commas are quoted.
//!
//! `trades.csv`:
//!
//! | Column | Type | Notes |
//! |----------------|---------|-----------------------------------------|
//! | `id` | string | unique trade key, e.g. `plumber` |
//! | `name` | string | display name |
//! | `description` | string | one-line scope summary |
//! | `group` | string | `structural`, `mechanical`, `finishing`, `specialty` |
//! | `essential` | bool | `true` / `false` |
//! | `base_labor` | decimal | whole-dollar AUD before premium |
//! | `base_material`| decimal | whole-dollar AUD before premium |
//! | `premium_pct` | decimal | regional uplift, e.g. `15` for +15% |
//!
//! `materials.csv`:
//!
//! | Column | Type | Notes |
//! |---------------|---------|-------------------------------------------|
//! | `trade_id` | string | must reference a trade id |
//! | `category` | string | e.g. `Tapware` |
//! | `item_id` | string | unique within its (trade, category) |
//! | `name` | string | |
//! | `brand` | string | |
//! | `tier` | string | `budget`, `mid`, `premium` |
//! | `price_low` | decimal | supplier range, low end |
//! | `price_high` | decimal | supplier range, high end |
//! | `description` | string | |
//!
//! `project_types.csv`: `id`, `title`, `description`.

use rust_decimal::Decimal;
use serde::Deserialize;

use estimator_core::models::{
    MaterialItem, ProjectType, QualityTier, TradeDefinition, TradeGroup,
};

// ---------------------------------------------------------------------------
// Serde-compatible rows that mirror the CSV layouts exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TradeRow {
    id: String,
    name: String,
    description: String,
    group: String,
    essential: bool,
    base_labor: Decimal,
    base_material: Decimal,
    premium_pct: Decimal,
}

#[derive(Debug, Deserialize)]
struct MaterialRow {
    trade_id: String,
    category: String,
    item_id: String,
    name: String,
    brand: String,
    tier: String,
    price_low: Decimal,
    price_high: Decimal,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ProjectTypeRow {
    id: String,
    title: String,
    description: String,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting catalog CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `tier` cell contained a value that is not a recognised quality
    /// tier code. `row` is the 1-based data row number.
    #[error("unrecognised quality tier '{tier}' on row {row}")]
    InvalidTier { tier: String, row: usize },

    /// A `group` cell contained a value that is not a recognised trade
    /// group code. `row` is the 1-based data row number.
    #[error("unrecognised trade group '{group}' on row {row}")]
    InvalidGroup { group: String, row: usize },
}

// ---------------------------------------------------------------------------
// Core loaders
// ---------------------------------------------------------------------------

fn reader(input: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes())
}

/// Parse trade definitions from CSV text. Rows are returned in file order,
/// which is the catalog listing order.
pub fn parse_trades(input: &str) -> Result<Vec<TradeDefinition>, CsvLoadError> {
    reader(input)
        .deserialize::<TradeRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            let row_number = idx + 1; // 1-based for user-facing messages
            let group = TradeGroup::parse(&row.group).ok_or(CsvLoadError::InvalidGroup {
                group: row.group.clone(),
                row: row_number,
            })?;
            Ok(TradeDefinition {
                id: row.id,
                name: row.name,
                description: row.description,
                group,
                essential: row.essential,
                base_labor: row.base_labor,
                base_material: row.base_material,
                regional_premium_pct: row.premium_pct,
            })
        })
        .collect()
}

/// Parse material items from CSV text, in file order.
pub fn parse_materials(input: &str) -> Result<Vec<MaterialItem>, CsvLoadError> {
    reader(input)
        .deserialize::<MaterialRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            let row_number = idx + 1;
            let tier = QualityTier::parse(&row.tier).ok_or(CsvLoadError::InvalidTier {
                tier: row.tier.clone(),
                row: row_number,
            })?;
            Ok(MaterialItem {
                id: row.item_id,
                trade_id: row.trade_id,
                category: row.category,
                name: row.name,
                brand: row.brand,
                description: row.description,
                tier,
                price_low: row.price_low,
                price_high: row.price_high,
            })
        })
        .collect()
}

/// Parse project types from CSV text, in file order.
pub fn parse_project_types(input: &str) -> Result<Vec<ProjectType>, CsvLoadError> {
    reader(input)
        .deserialize::<ProjectTypeRow>()
        .map(|result| {
            let row = result?;
            Ok(ProjectType {
                id: row.id,
                title: row.title,
                description: row.description,
            })
        })
        .collect()
}
