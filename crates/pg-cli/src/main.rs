//! CLI frontend for the perilous encounter generator.

mod commands;

use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pg_engine::{DEFAULT_TABLE, GeneratorConfig};

#[derive(Parser)]
#[command(
    name = "perilous",
    about = "Perilous: roll discoveries and dangers from nested dice tables",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    options: GlobalOptions,

    /// Defaults to the interactive prompt
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct GlobalOptions {
    /// RNG seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Deepest allowed nesting of generated tables
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Most nodes a single result may contain
    #[arg(long, global = true)]
    max_nodes: Option<usize>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl GlobalOptions {
    fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(depth) = self.max_depth {
            config = config.with_max_depth(depth);
        }
        if let Some(nodes) = self.max_nodes {
            config = config.with_max_nodes(nodes);
        }
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for table names and print what they generate
    Repl {
        /// Table an empty line generates until another is named
        #[arg(long, default_value = DEFAULT_TABLE)]
        start: String,
    },

    /// Generate a table and print the result
    Roll {
        /// Table name
        table: String,

        /// Number of independent results
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,

        /// Roll this dice notation instead of the table's own (e.g. 2d6+1)
        #[arg(long)]
        dice: Option<String>,

        /// Leave out the table's associated items
        #[arg(long)]
        no_associated: bool,

        /// Print the results as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// List every table
    List,

    /// Show a table's dice, entries and associated items
    Show {
        /// Table name
        table: String,
    },

    /// Validate the built-in tables
    Check,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.options.verbose);
    let config = cli.options.config();
    tracing::debug!(seed = ?config.seed, limits = ?config.limits, "configured");

    let command = cli.command.unwrap_or(Commands::Repl {
        start: DEFAULT_TABLE.to_string(),
    });
    let result = match command {
        Commands::Repl { start } => commands::repl::run(&config, &start),
        Commands::Roll {
            table,
            count,
            dice,
            no_associated,
            json,
        } => commands::roll::run(&config, &table, count, dice.as_deref(), !no_associated, json),
        Commands::List => commands::list::run(),
        Commands::Show { table } => commands::show::run(&table),
        Commands::Check => commands::check::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
