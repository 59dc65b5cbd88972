use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use u_roster::io::{self, Orientation};
use u_roster::models::PriorPeriod;
use u_roster::scheduler::RosterKpi;

#[derive(Debug, Parser)]
#[command(name = "u-roster", about = "Weekly duty roster generator")]
struct Cli {
    /// Roster configuration document (JSON)
    #[arg(long, default_value = "info.json")]
    config: PathBuf,
    /// Previous period's roster (CSV); missing or unreadable means no history
    #[arg(long, default_value = "weekly_schedule.csv")]
    history: PathBuf,
    /// Ignore any previous period
    #[arg(long)]
    no_history: bool,
    /// Where to write the new roster (CSV)
    #[arg(long, default_value = "weekly_schedule.csv")]
    output: PathBuf,
    /// Overrides the orientation set in the configuration
    #[arg(long, value_enum)]
    orientation: Option<Orientation>,
    /// Random seed; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,
    /// Log at debug level unless RUST_LOG is set
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

fn init_tracing(verbose: bool) {
    let fallback_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = io::load_config(&cli.config).context("cannot start without a valid roster")?;
    let prior = if cli.no_history {
        None
    } else {
        load_history(&cli.history)?
    };

    let seed = cli.seed.unwrap_or_else(time_seed);
    info!(seed, "random seed (pass --seed to reproduce)");
    let mut rng = StdRng::seed_from_u64(seed);

    let request = config.request();
    let outcome = config
        .scheduler()
        .schedule(&request, prior.as_ref(), &mut rng);

    let orientation = cli.orientation.unwrap_or(config.output.orientation);
    io::save_table(&outcome.table, orientation, &cli.output)?;

    // One line per empty slot, after the roster is written.
    for slot in &outcome.unfilled {
        warn!("unfilled: {slot}");
    }

    let kpi = RosterKpi::calculate(&outcome, &request);
    for (name, assigned) in &kpi.load_by_person {
        println!(
            "{name}: {assigned} this period ({} including history)",
            outcome.load.count(name)
        );
    }
    println!(
        "filled {}/{} slots ({:.0}%), {} by relaxing rotation",
        kpi.filled_slots,
        kpi.total_slots,
        kpi.fill_rate * 100.0,
        kpi.relaxed_slots
    );
    Ok(())
}

fn load_history(path: &std::path::Path) -> anyhow::Result<Option<PriorPeriod>> {
    match io::load_prior(path) {
        Ok(prior) => Ok(Some(prior)),
        Err(e) if e.is_missing_history() => {
            info!("no previous roster found, starting fresh");
            Ok(None)
        }
        Err(e) if e.is_recoverable() => {
            warn!(error = %e, "ignoring unreadable previous roster");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
