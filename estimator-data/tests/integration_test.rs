//! End-to-end tests over the real embedded seed data.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use estimator_core::models::QualityTier;
use estimator_core::{CostEstimator, Selection, Wizard, WizardStep};
use estimator_data::northern_beaches_catalog;

#[test]
fn seed_catalog_loads_and_is_complete() {
    let catalog = northern_beaches_catalog().expect("embedded seed data must be valid");

    assert_eq!(catalog.project_types().len(), 3);
    assert_eq!(catalog.trades().len(), 12);
    assert_eq!(catalog.materials().len(), 24);
}

#[test]
fn seed_trades_match_the_regional_rate_table() {
    let catalog = northern_beaches_catalog().unwrap();

    let expected = [
        ("builder", dec!(15000), dec!(25000), dec!(15), true),
        ("excavation", dec!(8000), dec!(5000), dec!(10), false),
        ("concreter", dec!(12000), dec!(8000), dec!(18), false),
        ("bricklayer", dec!(18000), dec!(15000), dec!(22), false),
        ("roofer", dec!(12000), dec!(18000), dec!(20), false),
        ("plumber", dec!(8000), dec!(6000), dec!(15), true),
        ("electrician", dec!(9000), dec!(4000), dec!(18), true),
        ("hvac", dec!(6000), dec!(12000), dec!(16), false),
        ("carpenter", dec!(15000), dec!(20000), dec!(20), false),
        ("tiler", dec!(8000), dec!(6000), dec!(25), false),
        ("painter", dec!(6000), dec!(3000), dec!(12), false),
        ("landscaper", dec!(10000), dec!(8000), dec!(15), false),
    ];

    for (id, labor, material, premium, essential) in expected {
        let trade = catalog
            .trade(id)
            .unwrap_or_else(|| panic!("trade '{id}' missing from seed"));
        assert_eq!(trade.base_labor, labor, "base labor for {id}");
        assert_eq!(trade.base_material, material, "base material for {id}");
        assert_eq!(trade.regional_premium_pct, premium, "premium for {id}");
        assert_eq!(trade.essential, essential, "essential flag for {id}");
    }
}

#[test]
fn seed_materials_cover_each_tier_where_offered() {
    let catalog = northern_beaches_catalog().unwrap();

    // Plumber tapware carries a full budget/mid/premium ladder.
    let tiers: Vec<QualityTier> = catalog
        .materials_for_trade("plumber")
        .filter(|m| m.category == "Tapware")
        .map(|m| m.tier)
        .collect();
    assert_eq!(
        tiers,
        vec![QualityTier::Budget, QualityTier::Mid, QualityTier::Premium]
    );

    // Carpenter flooring deliberately has no budget option.
    assert!(
        catalog
            .materials_for_trade("carpenter")
            .filter(|m| m.category == "Flooring")
            .all(|m| m.tier != QualityTier::Budget)
    );
}

#[test]
fn plumber_worked_example_on_seed_data() {
    let catalog = northern_beaches_catalog().unwrap();
    let estimator = CostEstimator::new(&catalog);

    let mut selection = Selection::new();
    selection.toggle_trade("plumber");

    let breakdown = estimator.compute(&selection);
    assert_eq!(breakdown.lines[0].labor_cost, dec!(9200));
    assert_eq!(breakdown.lines[0].material_cost, dec!(6900));
    assert_eq!(breakdown.total, dec!(17710));

    selection.set_material_choice("plumber", "Tapware", "tap-premium");
    let upgraded = estimator.compute(&selection);
    assert_eq!(upgraded.lines[0].material_cost, dec!(9660));
    assert_eq!(upgraded.lines[0].total, dec!(18860));
}

#[test]
fn full_wizard_session_produces_a_priced_estimate() {
    let catalog = northern_beaches_catalog().unwrap();
    let estimator = CostEstimator::new(&catalog);

    let mut wizard = Wizard::new();
    wizard.select_project_type("renovation");
    wizard.advance();

    wizard.toggle_trade("plumber");
    wizard.toggle_trade("electrician");
    wizard.advance();

    wizard.set_material_choice("plumber", "Tapware", "tap-mid");
    wizard.advance();
    wizard.advance();
    assert_eq!(wizard.step(), WizardStep::Estimate);

    let breakdown = estimator.compute(wizard.selection());
    assert_eq!(breakdown.lines.len(), 2);
    // plumber: 9200 + round(6000*1.15*1.2)=8280; electrician: round(9000*1.18)=10620 + 4720
    assert_eq!(breakdown.subtotal, dec!(32820));
    assert_eq!(breakdown.contingency, dec!(3282));
    assert_eq!(breakdown.total, dec!(36102));
    assert_eq!(breakdown.timeline_weeks(), 5);
}

#[test]
fn restart_then_compute_is_all_zero_regardless_of_history() {
    let catalog = northern_beaches_catalog().unwrap();
    let estimator = CostEstimator::new(&catalog);

    let mut wizard = Wizard::new();
    wizard.select_project_type("extension");
    wizard.advance();
    wizard.toggle_trade("builder");
    wizard.toggle_trade("landscaper");
    wizard.set_material_choice("plumber", "Tapware", "tap-premium");
    wizard.advance();

    wizard.restart();

    let breakdown = estimator.compute(wizard.selection());
    assert_eq!(breakdown.total, dec!(0));
    assert!(breakdown.lines.is_empty());
    assert_eq!(wizard.step(), WizardStep::ProjectType);
}
