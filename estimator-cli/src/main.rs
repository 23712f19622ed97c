use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use estimator_cli::args::MaterialArg;
use estimator_cli::render;
use estimator_core::{CostEstimator, Wizard, WizardStep};
use estimator_data::northern_beaches_catalog;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Construction cost estimator for Northern Beaches projects.
///
/// Prices a selection of trades and material quality choices against the
/// bundled regional rate table and prints an itemized cost breakdown.
#[derive(Debug, Parser)]
#[command(name = "nb-estimator")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the available project types.
    ListProjectTypes,

    /// List the trade catalog with regional premiums.
    ListTrades,

    /// List the material database, optionally for a single trade.
    ListMaterials {
        /// Restrict the listing to one trade id (e.g. `plumber`).
        #[arg(long)]
        trade: Option<String>,
    },

    /// Compute an itemized estimate for a set of trades.
    Estimate {
        /// Project type id (see `list-project-types`).
        #[arg(long, default_value = "new-construction")]
        project_type: String,

        /// Trade id to include; repeat for multiple trades.
        #[arg(long = "trade", required = true)]
        trades: Vec<String>,

        /// Material choice as TRADE:CATEGORY:ITEM; repeat as needed.
        #[arg(long = "material")]
        materials: Vec<MaterialArg>,
    },
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let catalog = northern_beaches_catalog()?;

    match cli.command {
        Command::ListProjectTypes => {
            print!("{}", render::project_type_listing(&catalog));
        }
        Command::ListTrades => {
            print!("{}", render::trade_listing(&catalog));
        }
        Command::ListMaterials { trade } => {
            print!("{}", render::material_listing(&catalog, trade.as_deref()));
        }
        Command::Estimate {
            project_type,
            trades,
            materials,
        } => {
            // The engine tolerates unknown ids silently; a human typing one
            // at the prompt gets a warning here instead.
            if catalog.project_type(&project_type).is_none() {
                warn!(project_type = %project_type, "unknown project type");
            }
            for trade_id in &trades {
                if catalog.trade(trade_id).is_none() {
                    warn!(trade_id = %trade_id, "unknown trade id, it will not be priced");
                }
            }

            let mut wizard = Wizard::new();
            wizard.select_project_type(&project_type);
            wizard.advance();
            for trade_id in &trades {
                wizard.toggle_trade(trade_id);
            }
            wizard.advance();
            for m in &materials {
                wizard.set_material_choice(&m.trade_id, &m.category, &m.item_id);
            }
            wizard.advance();
            wizard.advance();

            if wizard.step() != WizardStep::Estimate {
                // Repeating a trade id toggles it back off; the gate stays
                // shut if that empties the selection.
                anyhow::bail!("select at least one trade to continue");
            }

            let breakdown = CostEstimator::new(&catalog).compute(wizard.selection());
            print!(
                "{}",
                render::breakdown_report(&catalog, wizard.selection(), &breakdown)
            );
        }
    }

    Ok(())
}
