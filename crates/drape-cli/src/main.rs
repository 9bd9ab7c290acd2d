//! Drape command-line interface.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "drape")]
#[command(version, about = "Drape: position-based dynamics cloth simulation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation. Without a config the hanging-cloth demo runs.
    Simulate {
        /// Path to a simulation input (TOML).
        #[arg(short, long)]
        config: Option<String>,

        /// Override the number of frames.
        #[arg(short, long)]
        frames: Option<u32>,

        /// Write every frame to this JSON file.
        #[arg(short, long)]
        output: Option<String>,

        /// Write a binary state snapshot of the final frame.
        #[arg(short, long)]
        snapshot: Option<String>,

        /// Log telemetry events through tracing.
        #[arg(long)]
        telemetry: bool,
    },

    /// Run benchmark scenarios.
    Benchmark {
        /// Which scenario to run (hanging_cloth, sphere_drape, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Override the number of frames per scenario.
        #[arg(short, long)]
        frames: Option<u32>,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect a state snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Validate a simulation input (.toml), a mesh (.json) or a snapshot.
    Validate {
        /// Path to the file.
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            config,
            frames,
            output,
            snapshot,
            telemetry,
        } => commands::simulate(commands::SimulateArgs {
            config: config.as_deref(),
            frames,
            output: output.as_deref(),
            snapshot: snapshot.as_deref(),
            telemetry,
        }),
        Commands::Benchmark {
            scenario,
            frames,
            output,
        } => commands::benchmark(&scenario, frames, output.as_deref()),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
