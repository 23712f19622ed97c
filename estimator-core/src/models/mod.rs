mod catalog;
mod material;
mod project_type;
mod selection;
mod trade;

pub use catalog::{Catalog, CatalogError};
pub use material::{MaterialItem, QualityTier};
pub use project_type::ProjectType;
pub use selection::Selection;
pub use trade::{TradeDefinition, TradeGroup};
