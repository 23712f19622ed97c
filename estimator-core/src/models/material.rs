use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Material price/quality class.
///
/// The ordering matters: the estimate engine takes the highest tier among a
/// trade's chosen materials when deciding the material cost multiplier, so
/// `Premium > Mid > Budget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Budget,
    Mid,
    Premium,
}

impl QualityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Mid => "mid",
            Self::Premium => "premium",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "budget" => Some(Self::Budget),
            "mid" => Some(Self::Mid),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }
}

/// A catalog material item offered for one category of one trade.
///
/// `id` is unique within its `(trade_id, category)` pair. The price range is
/// supplier guidance for display; the estimate engine prices materials off
/// the trade's base amounts and the item's `tier`, not off this range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialItem {
    pub id: String,
    pub trade_id: String,
    pub category: String,
    pub name: String,
    pub brand: String,
    pub description: String,
    pub tier: QualityTier,
    pub price_low: Decimal,
    pub price_high: Decimal,
}
