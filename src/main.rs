//! Bridge crossing console game.
//!
//! # Usage
//!
//! ```bash
//! # Play with a random bridge
//! bridge-crossing
//!
//! # Reproducible bridge, JSON events on stdout
//! bridge-crossing --seed 42 --json
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use bridge_crossing::state::{BridgeGame, MoveEvents, QuitEvents};
use bridge_crossing::view::{InputView, JsonView, OutputView};
use bridge_crossing::{play, AppConfig, BridgeMaker, OutputFormat, RandomNumberGenerator};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Cross a bridge of stepping stones one guess at a time
#[derive(Parser, Debug)]
#[command(name = "bridge-crossing")]
#[command(version)]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long, default_value = "bridge.toml")]
    config: PathBuf,

    /// Seed for bridge generation
    #[arg(long)]
    seed: Option<u64>,

    /// Print game events as JSON lines
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load_or_default(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if args.json {
        config.output = OutputFormat::Json;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    tracing::info!(seed = ?config.seed, output = ?config.output, "starting");

    let mut move_events = MoveEvents::new();
    let mut quit_events = QuitEvents::new();
    match config.output {
        OutputFormat::Text => {
            let view = OutputView::new();
            view.print_start();
            move_events.subscribe(view);
            quit_events.subscribe(view);
        }
        OutputFormat::Json => {
            move_events.subscribe(JsonView::new());
            quit_events.subscribe(JsonView::new());
        }
    }

    let generator = match config.seed {
        Some(seed) => RandomNumberGenerator::seeded(seed),
        None => RandomNumberGenerator::new(),
    };
    let mut maker = BridgeMaker::new(generator);
    let mut game = BridgeGame::new(move_events, quit_events);

    // Keep stdout clean for JSON consumers
    let prompts: Box<dyn Write> = match config.output {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };
    let mut input = InputView::new(io::stdin().lock(), prompts);

    play(&mut game, &mut maker, &mut input).context("game aborted")?;
    Ok(())
}
