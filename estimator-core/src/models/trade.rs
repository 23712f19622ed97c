use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Broad grouping used when listing the trade catalog.
///
/// Grouping is purely presentational; it has no effect on pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeGroup {
    Structural,
    Mechanical,
    Finishing,
    Specialty,
}

impl TradeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::Mechanical => "mechanical",
            Self::Finishing => "finishing",
            Self::Specialty => "specialty",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "structural" => Some(Self::Structural),
            "mechanical" => Some(Self::Mechanical),
            "finishing" => Some(Self::Finishing),
            "specialty" => Some(Self::Specialty),
            _ => None,
        }
    }

    /// Display label for catalog listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Structural => "Structural Trades",
            Self::Mechanical => "Mechanical Trades",
            Self::Finishing => "Finishing Trades",
            Self::Specialty => "Specialty Trades",
        }
    }
}

/// A construction trade with its regional base pricing.
///
/// `base_labor` and `base_material` are whole-dollar AUD amounts before the
/// Northern Beaches premium is applied. `regional_premium_pct` is the uplift
/// as a percentage (e.g. `15` for +15%), applied to both labor and material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub group: TradeGroup,
    pub essential: bool,
    pub base_labor: Decimal,
    pub base_material: Decimal,
    pub regional_premium_pct: Decimal,
}
