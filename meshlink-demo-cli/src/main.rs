//! Meshlink Demo CLI
//!
//! Command-line stand-in for the serving layer: feeds a raw join-link path
//! through the resolution engine and renders the outcome.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use meshlink_lib::{display_name, resolve_with, Resolution, ResolverConfig};

#[derive(Parser)]
#[command(name = "meshlink-demo")]
#[command(about = "Meshlink demo CLI - resolve join-link paths to deep-link targets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a raw path and query (e.g. "/u/verity.eth")
    Resolve {
        /// The path to resolve, leading slash optional
        path: String,

        /// Native scheme to build deep links with
        #[arg(long, default_value = "mesh-im")]
        scheme: String,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up the bundled display name for a canonical identifier
    Name {
        /// Canonical key or name text
        canonical: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Resolve { path, scheme, json } => run_resolve(&path, scheme, json),
        Commands::Name { canonical } => run_name(&canonical),
    }
}

fn run_resolve(path: &str, scheme: String, json: bool) -> Result<()> {
    let config = ResolverConfig {
        scheme,
        ..ResolverConfig::default()
    };

    match resolve_with(&config, path) {
        Ok(outcome) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                return Ok(());
            }
            match outcome {
                Resolution::Target(target) => {
                    println!("uri:       {}", target.uri);
                    println!("label:     {}", target.label);
                    println!("indexable: {}", target.indexable);
                }
                Resolution::RedirectToCanonical(canonical) => {
                    println!("beware of phishing: this link is not in canonical form");
                    println!("redirect to: {canonical}");
                }
            }
            Ok(())
        }
        Err(err) => {
            if err.is_attack() {
                tracing::warn!(%err, "rejected markup in input");
            }
            eprintln!("Invalid input format: {err}");
            std::process::exit(1);
        }
    }
}

fn run_name(canonical: &str) -> Result<()> {
    match display_name(canonical) {
        Some(name) => println!("{name}"),
        None => println!("(no registered name)"),
    }
    Ok(())
}
