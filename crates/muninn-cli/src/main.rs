//! Muninn Command-Line Interface
//!
//! The main entry point for the Muninn OTOC estimation tool.
//!
//! ```text
//!        ___
//!      _(((,|      M U N I N N
//!     /  _-\\      Out-of-time-order correlators
//!    / C o\ \\     for random digital circuits
//!    | `-    \\
//!    |   \    |    "What is remembered
//!     \   `-, /     may yet be unscrambled"
//!      `~~~~~'
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::common::SimArgs;
use commands::{run, sweep, version};

use muninn_engine::EngineError;
use muninn_otoc::OtocError;

/// Muninn - OTOC^(k) estimation for random digital circuits
#[derive(Parser)]
#[command(name = "muninn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate OTOC^(k) at a fixed circuit depth
    Run {
        #[command(flatten)]
        sim: SimArgs,

        /// Evolution depth in cycles
        #[arg(short = 't', long, default_value = "6")]
        cycles: u32,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Write the JSON report to a file
        #[arg(short, long)]
        export: Option<String>,
    },

    /// Estimate OTOC^(k) for every depth from 0 to --max-cycles
    Sweep {
        #[command(flatten)]
        sim: SimArgs,

        /// Largest evolution depth in cycles
        #[arg(long, default_value = "12")]
        max_cycles: u32,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Write the JSON records to a file
        #[arg(short, long)]
        export: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Run {
            sim,
            cycles,
            format,
            export,
        } => run::execute(&sim, cycles, &format, export.as_deref()),

        Commands::Sweep {
            sim,
            max_cycles,
            format,
            export,
        } => sweep::execute(&sim, max_cycles, &format, export.as_deref()),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors; configuration mistakes and resource ceilings get
    // distinct exit codes so callers can tell "fix the flags" from
    // "retry with a smaller register".
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<OtocError>() {
        Some(
            OtocError::NoQubits
            | OtocError::EmptyThetaChoices
            | OtocError::NoSamples
            | OtocError::Ir(_),
        ) => 2,
        Some(OtocError::Engine(EngineError::ResourceExceeded { .. })) => 3,
        Some(OtocError::Engine(EngineError::Ir(_))) => 2,
        _ => 1,
    }
}
