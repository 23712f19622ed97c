use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The deployment is fixed to one region; every estimate carries it.
pub const DEFAULT_LOCATION: &str = "Northern Beaches";

/// The user's in-progress choices for one estimate session.
///
/// `selected_trade_ids` keeps insertion order and set semantics: toggling a
/// trade twice restores the previous value exactly, and the order here is the
/// order of the cost lines in the final breakdown.
///
/// `material_choices` maps trade id -> category -> chosen item id. Choices
/// for trades that are later deselected are retained rather than pruned;
/// they simply stop contributing until the trade is selected again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub project_type: String,
    pub location: String,
    pub selected_trade_ids: Vec<String>,
    pub material_choices: HashMap<String, HashMap<String, String>>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            project_type: String::new(),
            location: DEFAULT_LOCATION.to_string(),
            selected_trade_ids: Vec::new(),
            material_choices: HashMap::new(),
        }
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the trade is currently selected.
    pub fn is_trade_selected(&self, trade_id: &str) -> bool {
        self.selected_trade_ids.iter().any(|id| id == trade_id)
    }

    /// Symmetric add/remove. Adding appends at the end; removing preserves
    /// the relative order of the remaining trades.
    pub fn toggle_trade(&mut self, trade_id: &str) {
        if let Some(pos) = self.selected_trade_ids.iter().position(|id| id == trade_id) {
            self.selected_trade_ids.remove(pos);
        } else {
            self.selected_trade_ids.push(trade_id.to_string());
        }
    }

    /// Upsert a material choice; the last write for a (trade, category)
    /// pair wins.
    pub fn set_material_choice(
        &mut self,
        trade_id: &str,
        category: &str,
        item_id: &str,
    ) {
        self.material_choices
            .entry(trade_id.to_string())
            .or_default()
            .insert(category.to_string(), item_id.to_string());
    }

    /// The chosen item id for a (trade, category) pair, if any.
    pub fn material_choice(
        &self,
        trade_id: &str,
        category: &str,
    ) -> Option<&str> {
        self.material_choices
            .get(trade_id)?
            .get(category)
            .map(String::as_str)
    }

    /// All category -> item choices recorded for a trade.
    pub fn choices_for_trade(&self, trade_id: &str) -> Option<&HashMap<String, String>> {
        self.material_choices.get(trade_id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_selection_is_empty_with_fixed_location() {
        let selection = Selection::new();

        assert_eq!(selection.project_type, "");
        assert_eq!(selection.location, DEFAULT_LOCATION);
        assert!(selection.selected_trade_ids.is_empty());
        assert!(selection.material_choices.is_empty());
    }

    #[test]
    fn toggle_trade_adds_then_removes() {
        let mut selection = Selection::new();

        selection.toggle_trade("plumber");
        assert!(selection.is_trade_selected("plumber"));

        selection.toggle_trade("plumber");
        assert!(!selection.is_trade_selected("plumber"));
    }

    #[test]
    fn double_toggle_restores_prior_value_exactly() {
        let mut selection = Selection::new();
        selection.toggle_trade("builder");
        selection.toggle_trade("plumber");
        selection.toggle_trade("electrician");
        let before = selection.clone();

        selection.toggle_trade("carpenter");
        selection.toggle_trade("carpenter");

        assert_eq!(selection, before);
    }

    #[test]
    fn toggle_preserves_order_of_remaining_trades() {
        let mut selection = Selection::new();
        selection.toggle_trade("builder");
        selection.toggle_trade("plumber");
        selection.toggle_trade("electrician");

        selection.toggle_trade("plumber");

        assert_eq!(selection.selected_trade_ids, vec!["builder", "electrician"]);
    }

    #[test]
    fn set_material_choice_last_write_wins() {
        let mut selection = Selection::new();

        selection.set_material_choice("plumber", "Tapware", "tap-budget");
        selection.set_material_choice("plumber", "Tapware", "tap-premium");

        assert_eq!(
            selection.material_choice("plumber", "Tapware"),
            Some("tap-premium")
        );
    }

    #[test]
    fn material_choices_survive_trade_deselection() {
        let mut selection = Selection::new();
        selection.toggle_trade("plumber");
        selection.set_material_choice("plumber", "Tapware", "tap-mid");

        selection.toggle_trade("plumber");

        // Not pruned; just dormant until the trade is selected again.
        assert_eq!(
            selection.material_choice("plumber", "Tapware"),
            Some("tap-mid")
        );
    }
}
