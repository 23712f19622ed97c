pub mod calculations;
pub mod models;
pub mod wizard;

pub use calculations::{CostBreakdown, CostEstimator, TradeCostLine};
pub use models::*;
pub use wizard::{Wizard, WizardStep};
