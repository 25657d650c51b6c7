//! dvt - Dragon/Tiger round tracker
//!
//! Each subcommand performs at most one history mutation and then re-renders.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use dvt::history::{AssumeYes, StdinConfirmation};
use dvt::render::{StreamSurface, Target};
use dvt::view::{PredictionView, StatsView};
use dvt::{FileStore, HistoryStore, Outcome, Renderer, TrackerConfig, TrackerError};

#[derive(Parser)]
#[command(name = "dvt")]
#[command(version = "0.1.0")]
#[command(about = "Dragon/Tiger round tracker with trend-based guesses", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory holding history and settings (defaults to the platform data dir)
    #[arg(short, long, global = true, env = "DVT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a round: dragon (d), tiger (t) or tie (i)
    Add {
        /// Round outcome
        outcome: String,
    },

    /// Remove the most recent round
    Undo,

    /// Delete all recorded rounds
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show the recent history strip
    History,

    /// Show outcome counts and the current streak
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Guess the next round
    Predict {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show history, stats and prediction
    Show,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show data and settings file paths
    Paths,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stderr keeps stdout clean for --json
    let filter = if cli.verbose { "dvt=debug" } else { "dvt=warn" };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(TrackerConfig::default_data_dir);

    if let Err(e) = run(cli.command, &data_dir) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn run(command: Commands, data_dir: &Path) -> dvt::Result<()> {
    let config = TrackerConfig::load(data_dir)?;
    config.validate()?;

    if !config.color {
        colored::control::set_override(false);
    }

    let backend = FileStore::new(data_dir);
    let mut store = HistoryStore::new(backend).with_key(config.storage_key.clone());
    let renderer = Renderer::from_config(&config);

    match command {
        Commands::Add { outcome } => {
            let outcome: Outcome = outcome.parse()?;
            store.append(outcome)?;
            println!(
                "{} Recorded {} (round {})\n",
                "OK".green().bold(),
                outcome.label(),
                store.load().len()
            );
            render(&renderer, &store, Target::all())?;
        }

        Commands::Undo => {
            match store.remove_last()? {
                Some(round) => println!(
                    "{} Removed {}\n",
                    "OK".green().bold(),
                    round.result.label()
                ),
                None => println!("{} Nothing to undo\n", "Info:".blue()),
            }
            render(&renderer, &store, Target::all())?;
        }

        Commands::Clear { force } => {
            let cleared = if force {
                store.clear(&AssumeYes)?
            } else {
                store.clear(&StdinConfirmation)?
            };

            if !cleared {
                println!("{} Clear cancelled", "Info:".blue());
                return Ok(());
            }
            println!("{} History cleared\n", "OK".green().bold());
            render(&renderer, &store, Target::all())?;
        }

        Commands::History => render(&renderer, &store, [Target::History])?,

        Commands::Stats { json } => {
            if json {
                let view = StatsView::from_log(&store.load());
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                render(&renderer, &store, [Target::Stats])?;
            }
        }

        Commands::Predict { json } => {
            if json {
                let view = PredictionView::from_log(&store.load(), config.recent_limit);
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                render(&renderer, &store, [Target::Prediction])?;
            }
        }

        Commands::Show => render(&renderer, &store, Target::all())?,

        Commands::Config { action } => match action {
            ConfigAction::Show { json } => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&config)?);
                } else {
                    println!("\n{} Tracker Configuration", "Config:".cyan().bold());
                    println!("{}", "─".repeat(40));
                    println!("   Storage key: {}", config.storage_key);
                    println!("   History limit: {}", config.history_limit);
                    println!("   Recent limit: {}", config.recent_limit);
                    println!("   Color: {}", config.color);
                }
            }

            ConfigAction::Paths => {
                println!("Data directory: {}", data_dir.display());
                println!(
                    "Settings: {}",
                    TrackerConfig::settings_path(data_dir).display()
                );
                println!(
                    "History: {}",
                    store.backend().path_for(store.key()).display()
                );
            }
        },
    }

    Ok(())
}

/// Re-reads the store and renders `targets` to stdout.
fn render<const N: usize>(
    renderer: &Renderer,
    store: &HistoryStore<FileStore>,
    targets: [Target; N],
) -> Result<(), TrackerError> {
    let log = store.load();
    let stdout = io::stdout();
    let mut surface = StreamSurface::only(stdout.lock(), &targets);
    renderer.render_all(&log, &mut surface)?;
    surface.into_inner().flush()?;
    Ok(())
}
