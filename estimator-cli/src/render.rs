//! Plain-text rendering of catalogs and estimates.
//!
//! Everything here is presentation only: the figures come straight from
//! `estimator-core` and are formatted, never recomputed.

use std::fmt::Write;

use rust_decimal::Decimal;

use estimator_core::models::{Catalog, Selection, TradeGroup};
use estimator_core::CostBreakdown;

/// Formats a whole-dollar AUD amount with thousands separators, e.g.
/// `$36,102`. Estimates are quoted in whole dollars throughout.
pub fn format_currency(amount: Decimal) -> String {
    let negative = amount < Decimal::ZERO;
    let whole = amount
        .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
        .abs();
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}")
}

/// Lists the available project types.
pub fn project_type_listing(catalog: &Catalog) -> String {
    let mut out = String::from("Project types:\n");
    for project_type in catalog.project_types() {
        let _ = writeln!(
            out,
            "  {:<18} {} — {}",
            project_type.id, project_type.title, project_type.description
        );
    }
    out
}

/// Lists the trade catalog grouped the way the wizard presents it.
pub fn trade_listing(catalog: &Catalog) -> String {
    let mut out = String::new();
    for group in [
        TradeGroup::Structural,
        TradeGroup::Mechanical,
        TradeGroup::Finishing,
        TradeGroup::Specialty,
    ] {
        let trades: Vec<_> = catalog.trades().iter().filter(|t| t.group == group).collect();
        if trades.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}:", group.display_name());
        for trade in trades {
            let essential = if trade.essential { " [essential]" } else { "" };
            let _ = writeln!(
                out,
                "  {:<12} {} (+{}% NB premium){}",
                trade.id, trade.name, trade.regional_premium_pct, essential
            );
            let _ = writeln!(out, "  {:<12} {}", "", trade.description);
        }
    }
    out
}

/// Lists material items, optionally restricted to one trade.
pub fn material_listing(
    catalog: &Catalog,
    trade_filter: Option<&str>,
) -> String {
    let mut out = String::new();
    for trade in catalog.trades() {
        if trade_filter.is_some_and(|f| f != trade.id) {
            continue;
        }
        let items: Vec<_> = catalog.materials_for_trade(&trade.id).collect();
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{} ({}):", trade.name, trade.id);
        let mut current_category = "";
        for item in items {
            if item.category != current_category {
                let _ = writeln!(out, "  {}:", item.category);
                current_category = &item.category;
            }
            let _ = writeln!(
                out,
                "    {:<20} {:<8} {}–{}  {} ({})",
                item.id,
                item.tier.as_str(),
                format_currency(item.price_low),
                format_currency(item.price_high),
                item.name,
                item.brand,
            );
        }
    }
    out
}

/// Renders the itemized estimate report.
pub fn breakdown_report(
    catalog: &Catalog,
    selection: &Selection,
    breakdown: &CostBreakdown,
) -> String {
    let mut out = String::new();

    let project = catalog
        .project_type(&selection.project_type)
        .map(|p| p.title.as_str())
        .unwrap_or(selection.project_type.as_str());
    let _ = writeln!(out, "Project Cost Estimate — {}", selection.location);
    if !project.is_empty() {
        let _ = writeln!(out, "Project type: {project}");
    }
    let _ = writeln!(
        out,
        "Estimated timeline: {} weeks",
        breakdown.timeline_weeks()
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Trade breakdown:");
    for line in &breakdown.lines {
        let name = catalog
            .trade(&line.trade_id)
            .map(|t| t.name.as_str())
            .unwrap_or(line.trade_id.as_str());
        let _ = writeln!(
            out,
            "  {:<28} (+{}% NB premium)  labor {:>10}  materials {:>10}  {:>10}",
            name,
            line.applied_premium_pct,
            format_currency(line.labor_cost),
            format_currency(line.material_cost),
            format_currency(line.total),
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "  {:<28} {:>10}", "Total Labor", format_currency(breakdown.total_labor));
    let _ = writeln!(
        out,
        "  {:<28} {:>10}",
        "Total Materials",
        format_currency(breakdown.total_materials)
    );
    let _ = writeln!(out, "  {:<28} {:>10}", "Subtotal", format_currency(breakdown.subtotal));
    let _ = writeln!(
        out,
        "  {:<28} {:>10}",
        "Contingency (10%)",
        format_currency(breakdown.contingency)
    );
    let _ = writeln!(out, "  {:<28} {:>10}", "Project Total", format_currency(breakdown.total));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "This estimate is indicative only. Final quotes should be obtained\n\
         from licensed contractors; prices vary with site conditions,\n\
         accessibility, and current market rates."
    );

    out
}
