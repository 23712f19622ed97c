use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use thiserror::Error;

use super::{MaterialItem, ProjectType, TradeDefinition};

/// Errors detected while assembling a [`Catalog`] from reference data.
///
/// These are construction-time errors only: once a catalog exists, every
/// lookup on it is infallible (missing ids yield `None`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate project type id '{0}'")]
    DuplicateProjectType(String),

    #[error("duplicate trade id '{0}'")]
    DuplicateTradeId(String),

    #[error("trade '{trade_id}' has a negative regional premium")]
    NegativePremium { trade_id: String },

    #[error("material '{item_id}' references unknown trade '{trade_id}'")]
    UnknownTradeReference { item_id: String, trade_id: String },

    #[error("duplicate material id '{item_id}' in category '{category}' of trade '{trade_id}'")]
    DuplicateMaterialId {
        trade_id: String,
        category: String,
        item_id: String,
    },

    #[error("material '{item_id}' has price_low greater than price_high")]
    InvalidPriceRange { item_id: String },
}

/// The immutable regional reference data: project types, trades, and the
/// material database.
///
/// Constructed once at startup and never mutated. Listing order of trades
/// and materials is the order they were supplied in, which is the order the
/// presentation layer shows them in.
#[derive(Debug, Clone)]
pub struct Catalog {
    project_types: Vec<ProjectType>,
    trades: Vec<TradeDefinition>,
    materials: Vec<MaterialItem>,
    trade_index: HashMap<String, usize>,
}

impl Catalog {
    /// Validates the reference data and builds the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when ids collide, a material references a
    /// trade that does not exist, a price range is inverted, or a trade
    /// carries a negative premium.
    pub fn new(
        project_types: Vec<ProjectType>,
        trades: Vec<TradeDefinition>,
        materials: Vec<MaterialItem>,
    ) -> Result<Self, CatalogError> {
        let mut seen_types: HashSet<&str> = HashSet::new();
        for project_type in &project_types {
            if !seen_types.insert(&project_type.id) {
                return Err(CatalogError::DuplicateProjectType(project_type.id.clone()));
            }
        }

        let mut trade_index = HashMap::with_capacity(trades.len());
        for (idx, trade) in trades.iter().enumerate() {
            if trade.regional_premium_pct < Decimal::ZERO {
                return Err(CatalogError::NegativePremium {
                    trade_id: trade.id.clone(),
                });
            }
            if trade_index.insert(trade.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateTradeId(trade.id.clone()));
            }
        }

        let mut seen_materials: HashSet<(&str, &str, &str)> = HashSet::new();
        for item in &materials {
            if !trade_index.contains_key(&item.trade_id) {
                return Err(CatalogError::UnknownTradeReference {
                    item_id: item.id.clone(),
                    trade_id: item.trade_id.clone(),
                });
            }
            if item.price_low > item.price_high {
                return Err(CatalogError::InvalidPriceRange {
                    item_id: item.id.clone(),
                });
            }
            let key = (item.trade_id.as_str(), item.category.as_str(), item.id.as_str());
            if !seen_materials.insert(key) {
                return Err(CatalogError::DuplicateMaterialId {
                    trade_id: item.trade_id.clone(),
                    category: item.category.clone(),
                    item_id: item.id.clone(),
                });
            }
        }

        Ok(Self {
            project_types,
            trades,
            materials,
            trade_index,
        })
    }

    pub fn project_types(&self) -> &[ProjectType] {
        &self.project_types
    }

    pub fn project_type(&self, id: &str) -> Option<&ProjectType> {
        self.project_types.iter().find(|p| p.id == id)
    }

    pub fn trades(&self) -> &[TradeDefinition] {
        &self.trades
    }

    pub fn trade(&self, id: &str) -> Option<&TradeDefinition> {
        self.trade_index.get(id).map(|&idx| &self.trades[idx])
    }

    pub fn materials(&self) -> &[MaterialItem] {
        &self.materials
    }

    /// Material items for one trade, in catalog order.
    pub fn materials_for_trade<'a>(
        &'a self,
        trade_id: &'a str,
    ) -> impl Iterator<Item = &'a MaterialItem> {
        self.materials.iter().filter(move |m| m.trade_id == trade_id)
    }

    /// Resolves a material choice triple against the catalog.
    ///
    /// All three components must match; a choice recorded against the wrong
    /// trade or category does not resolve.
    pub fn material(
        &self,
        trade_id: &str,
        category: &str,
        item_id: &str,
    ) -> Option<&MaterialItem> {
        self.materials
            .iter()
            .find(|m| m.trade_id == trade_id && m.category == category && m.id == item_id)
    }
}
