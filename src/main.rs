//! Binary entrypoint for the Wumpus CLI.
//!
//! Commands:
//! - `play [--seed <n>] [--arrows <n>]` - play on stdin/stdout (the default)
//! - `init` - write a starter `config.toml`
//!
//! See the library crate docs for module-level details: `wumpus::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use wumpus::config::{validate_arrows, Config};
use wumpus::game::render::RenderOptions;
use wumpus::game::rng::EntropySource;
use wumpus::game::Session;

#[derive(Parser)]
#[command(name = "wumpus")]
#[command(about = "Hunt the Wumpus in a twenty-room cave")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (optional; defaults are used when missing)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on the terminal
    Play {
        /// Fixed RNG seed for a reproducible cave
        #[arg(long)]
        seed: Option<u64>,

        /// Arrows per game (overrides the config file)
        #[arg(short, long)]
        arrows: Option<u32>,
    },
    /// Write a default configuration file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play {
        seed: None,
        arrows: None,
    }) {
        Commands::Play { seed, arrows } => {
            let config = Config::load_or_default(&cli.config)?;
            init_logging(&Some(config.clone()), cli.verbose);
            info!("Starting wumpus v{}", env!("CARGO_PKG_VERSION"));

            let arrows = arrows.unwrap_or(config.game.arrows);
            validate_arrows(arrows)?;
            let rng = match seed.or(config.game.seed) {
                Some(s) => {
                    info!("Using fixed seed {}", s);
                    EntropySource::seeded(s)
                }
                None => EntropySource::from_entropy(),
            };
            let opts = RenderOptions {
                show_hints: config.game.show_hints,
            };

            let mut session = Session::new(arrows, rng, opts);
            let stdin = std::io::stdin();
            session.run(stdin.lock(), std::io::stdout())?;
            info!(
                "Session finished: {} won, {} lost",
                session.wins, session.losses
            );
        }
        Commands::Init => {
            init_logging(&None, cli.verbose);
            Config::create_default(&cli.config)?;
            info!("Configuration file created at {}", cli.config);
            println!("Configuration file created at {}", cli.config);
        }
    }

    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity raises the configured level; stdout belongs to the game.
    let configured = config
        .as_ref()
        .map(|c| c.logging.level_filter())
        .unwrap_or(log::LevelFilter::Warn);
    let base_level = match verbosity {
        0 => configured,
        1 => configured.max(log::LevelFilter::Info),
        2 => configured.max(log::LevelFilter::Debug),
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|c| c.logging.file.as_ref())
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Echo to stderr only when a human is watching and asked for it.
        let echo = verbosity > 0 && atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if echo {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
