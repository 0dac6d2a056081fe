use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use slidenav_core::AppConfig;
use slidenav_tui::Deck;

mod commands;

#[derive(Parser)]
#[command(name = "slidenav")]
#[command(author, version, about = "A full-screen slide presenter for the terminal")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Args, Clone, Default)]
struct RunArgs {
    /// Deck file; the built-in demo deck is used when omitted
    deck: Option<PathBuf>,
    /// Report a coarse (touch) pointer; narrow terminals then scroll natively
    #[arg(long)]
    coarse: bool,
    /// Disable the frame fade in mobile mode
    #[arg(long)]
    no_fade: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the presenter (default)
    Run(RunArgs),
    /// Print the mode and layout derived for a viewport
    Inspect {
        /// Deck file; the built-in demo deck is used when omitted
        deck: Option<PathBuf>,
        /// Viewport width in CSS pixels
        #[arg(long, default_value_t = 1280.0)]
        width: f64,
        /// Viewport height in CSS pixels
        #[arg(long, default_value_t = 800.0)]
        height: f64,
        /// Report a coarse (touch) pointer
        #[arg(long)]
        coarse: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    match cli.command {
        Some(Commands::Run(args)) => run(config, args),
        None => run(config, cli.run),
        Some(Commands::Inspect {
            deck,
            width,
            height,
            coarse,
            json,
        }) => {
            init_logging(&config, false)?;
            let deck = load_deck(deck.as_ref())?;
            commands::inspect::run(&config, &deck, width, height, coarse, json)
        }
        Some(Commands::Config { init }) => {
            init_logging(&config, false)?;
            commands::config::run(&config, init)
        }
    }
}

fn run(mut config: AppConfig, args: RunArgs) -> Result<()> {
    // The TUI owns the terminal, so logs go to a file
    init_logging(&config, true)?;
    if args.coarse {
        config.ui.pointer = slidenav_core::config::PointerPreference::Coarse;
    }
    if args.no_fade {
        config.navigator.frame_fade = false;
    }
    let deck = load_deck(args.deck.as_ref())?;
    commands::run::run(config, deck)
}

fn load_deck(path: Option<&PathBuf>) -> Result<Deck> {
    match path {
        Some(path) => Deck::load(path)
            .with_context(|| format!("failed to load deck {}", path.display())),
        None => Ok(Deck::demo()),
    }
}

/// Install the global subscriber; `RUST_LOG` overrides the configured level
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}
