//! Headless CLI for RPSLife: rock, paper, scissors, lizard, Spock.
//!
//! Drives the simulation engine without a window: runs rounds to
//! convergence, prints scores and winners, and can dump the final state as
//! JSON.

mod commands;
mod presentation;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::run::RunOptions;

#[derive(Parser)]
#[command(
    name = "rps",
    about = "RPSLife: a simple sim game of rock, paper, scissors. Oh and also lizard and Spock.",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. info, debug)
    #[arg(long, global = true, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation until one kind is left
    Run {
        /// Width of the arena
        #[arg(short, long, default_value_t = 800)]
        width: i32,

        /// Height of the arena
        #[arg(long, default_value_t = 800)]
        height: i32,

        /// Number of tokens to spawn per kind
        #[arg(short = 'c', long, default_value_t = 20)]
        spawn_count: u32,

        /// Smallest velocity component
        #[arg(short, long, default_value_t = -5, allow_negative_numbers = true)]
        min_speed: i32,

        /// Largest velocity component
        #[arg(short = 'x', long, default_value_t = 5, allow_negative_numbers = true)]
        max_speed: i32,

        /// Nominal frame rate; with --kill-delay it sets the grace period
        #[arg(short, long, default_value_t = 15)]
        frame_rate: u64,

        /// Seconds tokens are held still before moving
        #[arg(long, default_value_t = 3)]
        kill_delay: u64,

        /// Grace period in ticks (overrides frame-rate x kill-delay)
        #[arg(short, long)]
        grace_ticks: Option<u64>,

        /// Side length of a token's bounding box
        #[arg(long, default_value_t = 30)]
        token_size: i32,

        /// RNG seed for spawn velocities
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Give up on a round after this many ticks
        #[arg(long, default_value_t = 10_000)]
        max_ticks: u64,

        /// Number of rounds; the engine is reset between rounds
        #[arg(short, long, default_value_t = 1)]
        rounds: u32,

        /// Exclude a token from its own collision scan
        #[arg(long)]
        skip_self: bool,

        /// Show the event log of the last round
        #[arg(short, long)]
        verbose: bool,

        /// Print the final state as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Write the final state as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the dominance table
    Rules,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log);

    let result = match cli.command {
        Commands::Run {
            width,
            height,
            spawn_count,
            min_speed,
            max_speed,
            frame_rate,
            kill_delay,
            grace_ticks,
            token_size,
            seed,
            max_ticks,
            rounds,
            skip_self,
            verbose,
            json,
            output,
        } => {
            let opts = RunOptions {
                width,
                height,
                spawn_count,
                min_speed,
                max_speed,
                grace_ticks: grace_ticks.unwrap_or(frame_rate.saturating_mul(kill_delay)),
                token_size,
                seed,
                max_ticks,
                rounds,
                skip_self,
                verbose,
                json,
                output,
            };
            commands::run::run(&opts)
        }
        Commands::Rules => commands::rules::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
