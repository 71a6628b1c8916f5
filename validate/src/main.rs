//! zenith-validate - Check a hero data file offline.
//!
//! Runs the same load validation, filter and batched render the page uses,
//! and prints what the page would show.
//!
//! Usage: zenith-validate --data <file> [--config <toml>] [--role <role>] [--query <q>] [--frames]

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

use zenith_core::config::load_or_default;
use zenith_core::{Role, filter, parse_heroes};

use report::{Summary, simulate_frames};

#[derive(Parser)]
#[command(version, about = "Validate a hero data file")]
struct Cli {
    /// JSON hero collection
    #[arg(short, long)]
    data: PathBuf,

    /// Page config (TOML); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, default_value = zenith_types::ROLE_ALL)]
    role: String,

    #[arg(short, long, default_value = "")]
    query: String,

    /// Print the per-frame batches of the render pass
    #[arg(long)]
    frames: bool,
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("ZENITH_LOG_PATH")
        && let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
    {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(false)
            .with_writer(file)
            .init();
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let config = load_or_default(cli.config.as_deref())
        .map_err(|e| e.to_string())?
        .validated();

    let body = std::fs::read_to_string(&cli.data)
        .map_err(|e| format!("Failed to read {}: {e}", cli.data.display()))?;
    let heroes = parse_heroes(&body).map_err(|e| e.to_string())?;

    println!("{}", Summary::of(&heroes).line());

    let role = Role::parse(&cli.role);
    let matched = filter(&heroes, &role, &cli.query);
    tracing::debug!(role = %role, query = %cli.query, matched = matched.len(), "Filter applied");

    println!("role={role} query={:?}: {} match", cli.query, matched.len());
    for hero in &matched {
        println!("  {}", hero.name);
    }

    if cli.frames {
        for frame in simulate_frames(&config, matched) {
            println!("{}", frame.line());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            tracing::error!(error = %message, "Validation failed");
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
