use clap::{Parser, ValueEnum};
use forest_fire_core::{
    CellState, FireSpreadPolicy, ForestConfig, ForestSimulation, DEFAULT_P_LIGHTNING,
    DEFAULT_P_SAPLING, DEFAULT_SEED, DEFAULT_SIZE,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Spread policy selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Fire moves one cell per day into neighboring trees
    NeighborSpread,
    /// A strike burns its whole connected stand at once
    InstantBurn,
}

impl From<PolicyArg> for FireSpreadPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::NeighborSpread => FireSpreadPolicy::NeighborSpread,
            PolicyArg::InstantBurn => FireSpreadPolicy::InstantBurn,
        }
    }
}

/// Forest fire automaton demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "forest-fire-headless")]
#[command(about = "Headless forest fire cellular automaton", long_about = None)]
struct Args {
    /// Grid rows
    #[arg(short = 'x', long, default_value_t = DEFAULT_SIZE)]
    size_x: usize,

    /// Grid columns
    #[arg(short = 'y', long, default_value_t = DEFAULT_SIZE)]
    size_y: usize,

    /// Daily probability that an empty cell sprouts a tree
    #[arg(short = 's', long, default_value_t = DEFAULT_P_SAPLING)]
    p_sapling: f64,

    /// Daily probability that a tree is struck by lightning
    #[arg(short = 'l', long, default_value_t = DEFAULT_P_LIGHTNING)]
    p_lightning: f64,

    /// Fire spread policy
    #[arg(short, long, value_enum, default_value_t = PolicyArg::NeighborSpread)]
    policy: PolicyArg,

    /// Random seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of days to simulate
    #[arg(short, long, default_value_t = 365)]
    days: u64,

    /// Report interval in days
    #[arg(short, long, default_value_t = 30)]
    report_interval: u64,

    /// Print the final grid ('.' empty, 'T' tree, '*' fire)
    #[arg(long)]
    show_grid: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = ForestConfig::default()
        .with_size(args.size_x, args.size_y)
        .with_probabilities(args.p_sapling, args.p_lightning)
        .with_policy(args.policy.into())
        .with_seed(args.seed);

    let mut sim = match ForestSimulation::from_config(&config) {
        Ok(sim) => sim,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    println!("=== Forest Fire Simulation ===\n");
    println!(
        "Grid: {}x{}, policy: {}, p_sapling: {}, p_lightning: {}, seed: {}\n",
        args.size_x,
        args.size_y,
        sim.policy(),
        sim.p_sapling(),
        sim.p_lightning(),
        args.seed
    );
    println!(
        "{:>6} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "day", "trees", "burning", "grown", "struck", "burned"
    );

    let cells = (args.size_x * args.size_y) as f64;
    let interval = args.report_interval.max(1);
    for _ in 0..args.days {
        let day = sim.advance();
        if day.day % interval == 0 || day.day == args.days {
            println!(
                "{:>6} {:>8} {:>8} {:>8} {:>8} {:>8}   cover {:>5.1}%",
                day.day,
                day.trees,
                day.burning,
                day.grown,
                day.struck,
                day.burned,
                100.0 * day.trees as f64 / cells
            );
        }
    }

    let stats = sim.stats();
    println!("\n=== Summary ===");
    println!("Days simulated:  {}", stats.days);
    println!("Trees grown:     {}", stats.total_grown);
    println!("Lightning hits:  {}", stats.total_struck);
    println!("Trees burned:    {}", stats.total_burned);
    println!("Peak burning:    {}", stats.peak_burning);
    info!("Simulation finished after {} days", stats.days);

    if args.show_grid {
        println!();
        let states = sim.cell_states();
        for row in states.chunks(args.size_y) {
            let line: String = row
                .iter()
                .map(|state| match state {
                    CellState::Empty => '.',
                    CellState::Tree => 'T',
                    CellState::Fire => '*',
                })
                .collect();
            println!("{line}");
        }
    }
}
