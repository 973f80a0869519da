mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "labsort",
    version,
    about = "Disposal classification and compatibility checks for laboratory chemical waste"
)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify substances read from a JSON file (an array of substance records)
    Classify {
        /// Path to JSON substance file
        input_file: PathBuf,

        /// Custom disposal policy file (default: built-in policy)
        #[arg(short, long, value_name = "FILE")]
        policy: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Include the decision trace
        #[arg(long)]
        trace: bool,
    },
    /// Classify a cart of catalog substances given by name, CAS number or alias
    Mix {
        /// Substance names (e.g. "acetone" "NaOH" "67-66-3")
        #[arg(required = true, value_name = "QUERY")]
        queries: Vec<String>,

        /// Custom disposal policy file (default: built-in policy)
        #[arg(short, long, value_name = "FILE")]
        policy: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Include the decision trace
        #[arg(long)]
        trace: bool,
    },
    /// Show one catalog record and how it classifies
    Lookup {
        /// Name, CAS number or alias
        query: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// List the built-in substance catalog
    Catalog,
    /// Inspect and validate disposal policies
    Policy {
        #[command(subcommand)]
        action: PolicyAction,
    },
}

#[derive(Subcommand)]
enum PolicyAction {
    /// Print the built-in policy as JSON
    Show,
    /// Validate a custom policy file
    Validate {
        /// Path to JSON policy file
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "labsort_core=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Classify {
            input_file,
            policy,
            output,
            trace,
        } => commands::classify::run(input_file, policy, &output, trace),
        Commands::Mix {
            queries,
            policy,
            output,
            trace,
        } => commands::mix::run(&queries, policy, &output, trace),
        Commands::Lookup { query, output } => commands::lookup::run(&query, &output),
        Commands::Catalog => commands::catalog::list(),
        Commands::Policy { action } => match action {
            PolicyAction::Show => commands::policy::show(),
            PolicyAction::Validate { file } => commands::policy::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
