//! Morpho CLI - grow and evolve artificial embryos.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "morpho")]
#[command(author, version, about = "Morpho - Artificial embryology of symbolic genomes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Morpho project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Evolve genomes for the surface fitness
    Evolve {
        /// Number of generations (default: from morpho.toml)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Random seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// History file (default: genesis<timestamp>)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Grow a genome into a body
    Grow {
        /// Genome to grow (quote it, genomes contain spaces)
        genome: String,

        /// Animation ticks to run after growth
        #[arg(short, long, default_value = "0")]
        ticks: u64,

        /// Print the body as JSON
        #[arg(long)]
        json: bool,
    },

    /// Grow a genome stored in an evolution history
    Show {
        /// History file written by `morpho evolve`
        history: String,

        /// Generation to read (default: the last one)
        #[arg(short, long)]
        generation: Option<u64>,

        /// Genome index within the generation
        #[arg(short, long, default_value = "0")]
        index: usize,

        /// Animation ticks to run after growth
        #[arg(short, long, default_value = "0")]
        ticks: u64,

        /// Print the body as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a random genome
    Random {
        /// Genome length in symbols
        #[arg(short, long, default_value = "1000")]
        length: usize,

        /// Random seed
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Evolve {
            generations,
            seed,
            output,
        } => commands::evolve::run(generations, seed, output, cli.verbose),
        Commands::Grow { genome, ticks, json } => commands::grow::run(&genome, ticks, json),
        Commands::Show {
            history,
            generation,
            index,
            ticks,
            json,
        } => commands::show::run(&history, generation, index, ticks, json),
        Commands::Random { length, seed } => commands::random::run(length, seed),
    }
}
