//! Pathwise CLI - command line operations for Monte Carlo option pricing.
//!
//! # Commands
//!
//! - `pathwise price` - Simulate a path ensemble and price a call/put pair,
//!   reporting the bootstrap interval next to the closed-form value

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Pathwise Monte Carlo pricing CLI
#[derive(Parser)]
#[command(name = "pathwise")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European call/put pair by Monte Carlo simulation
    Price {
        /// Initial value of the underlying
        #[arg(short, long, default_value = "2267.89")]
        spot: f64,

        /// Strike price
        #[arg(short = 'k', long, default_value = "2250.0")]
        strike: f64,

        /// Time to expiry in years
        #[arg(short, long, default_value = "0.0833333333")]
        maturity: f64,

        /// Flat rate: model drift and discount rate (annualised,
        /// continuously compounded)
        #[arg(short, long, default_value = "0.0076919")]
        rate: f64,

        /// Annualised volatility
        #[arg(long, default_value = "0.06")]
        volatility: f64,

        /// Model family (registry name, e.g. black-scholes)
        #[arg(long, default_value = "black-scholes")]
        model: String,

        /// Number of Monte Carlo paths
        #[arg(short = 'n', long, default_value = "2000")]
        paths: usize,

        /// Number of time steps per path
        #[arg(long, default_value = "1000")]
        steps: usize,

        /// Number of bootstrap resamples for the confidence interval
        #[arg(long, default_value = "1000")]
        bootstrap: usize,

        /// Seed for reproducible runs (omit for fresh entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            model,
            paths,
            steps,
            bootstrap,
            seed,
            format,
        } => commands::price::run(commands::price::PriceArgs {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            model,
            paths,
            steps,
            bootstrap,
            seed,
            format,
        }),
    }
}
