use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::intake::Serving;

#[derive(Parser)]
#[command(name = "watertrack", version, about = "Daily water intake tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's intake
    Status {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a custom amount in milliliters
    Add {
        /// Amount in ml
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[arg(long)]
        json: bool,
    },
    /// Add one glass (quick_add.glass_ml, 250 ml by default)
    Glass {
        #[arg(long)]
        json: bool,
    },
    /// Add one bottle (quick_add.bottle_ml, 500 ml by default)
    Bottle {
        #[arg(long)]
        json: bool,
    },
    /// Reset today's intake to zero
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Log to stderr so stdout stays parseable. Filter via WATERTRACK_LOG.
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("WATERTRACK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Status { json } => commands::intake::status(json),
        Commands::Add { amount, json } => commands::intake::add(&amount, json),
        Commands::Glass { json } => commands::intake::quick_add(Serving::Glass, json),
        Commands::Bottle { json } => commands::intake::quick_add(Serving::Bottle, json),
        Commands::Reset { yes, json } => commands::intake::reset(yes, json),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
