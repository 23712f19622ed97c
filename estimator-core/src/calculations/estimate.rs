//! Itemized cost breakdown for a trade selection.
//!
//! This module implements the Northern Beaches pricing formula: per-trade
//! base labor and material costs uplifted by the trade's regional premium,
//! a material quality multiplier driven by the chosen items' tiers, and a
//! 10% contingency on the subtotal.
//!
//! # Pricing steps
//!
//! For each selected trade (in selection order):
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | `premium = regional_premium_pct / 100` |
//! | 2    | `labor = round(base_labor * (1 + premium))` |
//! | 3    | multiplier: any premium-tier choice -> 1.4, else any mid -> 1.2, else 1.0 |
//! | 4    | `material = round(base_material * (1 + premium) * multiplier)` |
//!
//! Then `subtotal = Σ labor + Σ material`, `contingency = round(subtotal * 0.10)`,
//! and `total = subtotal + contingency`. Rounding is to whole dollars at each
//! step listed, so intermediate rounding is reproduced exactly on every run.
//!
//! The computation is total: a trade id with no catalog entry, a material
//! choice that does not resolve, or an empty selection all degrade to zero
//! contribution rather than an error.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use estimator_core::calculations::CostEstimator;
//! use estimator_core::models::{Catalog, Selection, TradeDefinition, TradeGroup};
//!
//! let trades = vec![TradeDefinition {
//!     id: "plumber".to_string(),
//!     name: "Plumber".to_string(),
//!     description: String::new(),
//!     group: TradeGroup::Mechanical,
//!     essential: true,
//!     base_labor: dec!(8000),
//!     base_material: dec!(6000),
//!     regional_premium_pct: dec!(15),
//! }];
//! let catalog = Catalog::new(vec![], trades, vec![]).unwrap();
//!
//! let mut selection = Selection::new();
//! selection.toggle_trade("plumber");
//!
//! let breakdown = CostEstimator::new(&catalog).compute(&selection);
//!
//! assert_eq!(breakdown.total_labor, dec!(9200));
//! assert_eq!(breakdown.total_materials, dec!(6900));
//! assert_eq!(breakdown.contingency, dec!(1610));
//! assert_eq!(breakdown.total, dec!(17710));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::round_currency;
use crate::models::{Catalog, QualityTier, Selection, TradeDefinition};

/// One priced trade in the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeCostLine {
    pub trade_id: String,

    /// Labor cost with the regional premium applied, whole dollars.
    pub labor_cost: Decimal,

    /// Material cost with the regional premium and quality multiplier
    /// applied, whole dollars.
    pub material_cost: Decimal,

    /// `labor_cost + material_cost`.
    pub total: Decimal,

    /// The premium shown on the line, as a whole percentage.
    pub applied_premium_pct: Decimal,
}

/// The complete itemized estimate.
///
/// Derived fresh on every request; recomputing with an unchanged selection
/// and catalog yields an identical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub total_labor: Decimal,
    pub total_materials: Decimal,

    /// `total_labor + total_materials`.
    pub subtotal: Decimal,

    /// 10% of the subtotal, rounded to whole dollars.
    pub contingency: Decimal,

    /// `subtotal + contingency`.
    pub total: Decimal,

    /// One line per selected trade that exists in the catalog, in
    /// selection order.
    pub lines: Vec<TradeCostLine>,
}

impl CostBreakdown {
    fn zero() -> Self {
        Self {
            total_labor: Decimal::ZERO,
            total_materials: Decimal::ZERO,
            subtotal: Decimal::ZERO,
            contingency: Decimal::ZERO,
            total: Decimal::ZERO,
            lines: Vec::new(),
        }
    }

    /// Rough project timeline: two and a half weeks per priced trade,
    /// rounded up. Trades that produced no cost line do not count.
    pub fn timeline_weeks(&self) -> u32 {
        let n = self.lines.len() as u32;
        (n * 5).div_ceil(2)
    }
}

/// Pure estimate engine over an immutable catalog.
#[derive(Debug, Clone)]
pub struct CostEstimator<'a> {
    catalog: &'a Catalog,
}

impl<'a> CostEstimator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Computes the full cost breakdown for a selection.
    ///
    /// Deterministic and total: never fails, never performs I/O. Unknown
    /// trade ids are skipped silently and produce no line; an empty
    /// selection yields the all-zero breakdown.
    pub fn compute(&self, selection: &Selection) -> CostBreakdown {
        let mut breakdown = CostBreakdown::zero();

        for trade_id in &selection.selected_trade_ids {
            let Some(trade) = self.catalog.trade(trade_id) else {
                debug!(trade_id = %trade_id, "selected trade not in catalog, zero contribution");
                continue;
            };

            let premium = trade.regional_premium_pct / Decimal::ONE_HUNDRED;
            let labor_cost = self.labor_cost(trade, premium);
            let multiplier = self.material_multiplier(selection, trade_id);
            let material_cost = self.material_cost(trade, premium, multiplier);

            breakdown.total_labor += labor_cost;
            breakdown.total_materials += material_cost;
            breakdown.lines.push(TradeCostLine {
                trade_id: trade.id.clone(),
                labor_cost,
                material_cost,
                total: labor_cost + material_cost,
                applied_premium_pct: round_currency(premium * Decimal::ONE_HUNDRED),
            });
        }

        breakdown.subtotal = breakdown.total_labor + breakdown.total_materials;
        breakdown.contingency = self.contingency(breakdown.subtotal);
        breakdown.total = breakdown.subtotal + breakdown.contingency;
        breakdown
    }

    /// Labor base uplifted by the regional premium.
    fn labor_cost(
        &self,
        trade: &TradeDefinition,
        premium: Decimal,
    ) -> Decimal {
        round_currency(trade.base_labor * (Decimal::ONE + premium))
    }

    /// Material base uplifted by the regional premium and the quality
    /// multiplier.
    fn material_cost(
        &self,
        trade: &TradeDefinition,
        premium: Decimal,
        multiplier: Decimal,
    ) -> Decimal {
        round_currency(trade.base_material * (Decimal::ONE + premium) * multiplier)
    }

    /// Quality multiplier for one trade's material choices.
    ///
    /// The highest tier among the choices that resolve against the catalog
    /// wins: a single premium-tier item among budget picks still puts the
    /// whole trade on the 1.4x multiplier. Choices that do not resolve
    /// (unknown item, wrong trade or category) are ignored.
    fn material_multiplier(
        &self,
        selection: &Selection,
        trade_id: &str,
    ) -> Decimal {
        let highest = selection
            .choices_for_trade(trade_id)
            .into_iter()
            .flatten()
            .filter_map(|(category, item_id)| {
                self.catalog
                    .material(trade_id, category, item_id)
                    .map(|item| item.tier)
            })
            .max();

        match highest {
            Some(QualityTier::Premium) => Decimal::new(14, 1),
            Some(QualityTier::Mid) => Decimal::new(12, 1),
            Some(QualityTier::Budget) | None => Decimal::ONE,
        }
    }

    /// 10% contingency buffer on the subtotal.
    fn contingency(&self, subtotal: Decimal) -> Decimal {
        round_currency(subtotal * Decimal::new(10, 2))
    }
}
