//! Wizard controller for the estimate workflow.
//!
//! Owns the session's [`Selection`] and the current step, sequences the
//! linear step flow, and gates forward navigation on selection validity.
//! It owns no pricing logic; the presentation layer feeds the selection to
//! [`CostEstimator`](crate::calculations::CostEstimator) whenever it wants
//! a breakdown.

use serde::{Deserialize, Serialize};

use crate::models::Selection;

/// The wizard's linear step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    ProjectType,
    TradeSelection,
    MaterialSelection,
    SiteAssessment,
    Estimate,
}

// Forward order of the flow. Labels shown next to each step are a
// presentation concern; only the sequence is contract.
const STEPS: [WizardStep; 5] = [
    WizardStep::ProjectType,
    WizardStep::TradeSelection,
    WizardStep::MaterialSelection,
    WizardStep::SiteAssessment,
    WizardStep::Estimate,
];

impl WizardStep {
    /// Zero-based position in the flow.
    pub fn ordinal(&self) -> usize {
        STEPS.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn count() -> usize {
        STEPS.len()
    }
}

/// One estimate session: the user's selection plus where they are in the
/// flow.
///
/// All operations are synchronous and infallible. The only gate is on
/// forward navigation; a gated `advance()` is a no-op, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wizard {
    selection: Selection,
    step: WizardStep,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// A fresh session at the first step with an empty selection.
    pub fn new() -> Self {
        Self {
            selection: Selection::new(),
            step: WizardStep::ProjectType,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Sets the project type; the last write wins.
    pub fn select_project_type(&mut self, project_type: &str) {
        self.selection.project_type = project_type.to_string();
    }

    /// Symmetric add/remove of a trade in the selection set.
    pub fn toggle_trade(&mut self, trade_id: &str) {
        self.selection.toggle_trade(trade_id);
    }

    /// Upserts a material choice for a (trade, category) pair.
    pub fn set_material_choice(
        &mut self,
        trade_id: &str,
        category: &str,
        item_id: &str,
    ) {
        self.selection.set_material_choice(trade_id, category, item_id);
    }

    /// Whether the forward gate for the current step is open.
    ///
    /// Leaving the first step needs a chosen project type; any step past
    /// that needs at least one selected trade. The last step never
    /// advances. Presentation uses this to disable the continue action
    /// and show warning text.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::ProjectType => !self.selection.project_type.is_empty(),
            WizardStep::TradeSelection
            | WizardStep::MaterialSelection
            | WizardStep::SiteAssessment => !self.selection.selected_trade_ids.is_empty(),
            WizardStep::Estimate => false,
        }
    }

    /// Moves forward one step if the gate is open; otherwise a no-op.
    pub fn advance(&mut self) {
        if !self.can_advance() {
            return;
        }
        let next = self.step.ordinal() + 1;
        if next < STEPS.len() {
            self.step = STEPS[next];
        }
    }

    /// Moves backward one step. Always permitted and loses no state;
    /// a no-op on the first step.
    pub fn retreat(&mut self) {
        let ordinal = self.step.ordinal();
        if ordinal > 0 {
            self.step = STEPS[ordinal - 1];
        }
    }

    /// Discards the session: empty selection, first step.
    pub fn restart(&mut self) {
        self.selection = Selection::new();
        self.step = WizardStep::ProjectType;
    }

    /// Completion percentage for the progress bar, rounded to a whole
    /// number.
    pub fn progress_percent(&self) -> u32 {
        let done = (self.step.ordinal() + 1) * 100;
        let total = STEPS.len();
        ((done as f64 / total as f64).round()) as u32
    }
}
