#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use unscramble::{
    builtin_words, init_logging, init_logging_with, load_word_list, parse_level, AiPlayer,
    CliListener, CliPlayer, GameConfig, Player, SessionController, SessionRunner,
};

#[derive(Parser)]
#[command(author, version, about = "Unscramble the letters, one word at a time", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[command(flatten)]
    options: GameOptions,
}

#[derive(clap::Args)]
#[cfg(feature = "std")]
struct GameOptions {
    #[arg(long, global = true, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, global = true, help = "JSON file with game settings")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "JSON file with [{\"word\": .., \"hint\": ..}] entries")]
    words: Option<PathBuf>,
    #[arg(long, global = true, help = "Number of words per session")]
    rounds: Option<usize>,
    #[arg(long, global = true, help = "Points for each solved word")]
    award: Option<u32>,
    #[arg(long, global = true, help = "Wrong attempts before the answer is revealed")]
    attempts: Option<u32>,
    #[arg(long, global = true, help = "Hints per word")]
    hints: Option<usize>,
    #[arg(long, global = true, help = "Skip all dwell windows and delays")]
    fast: bool,
    #[arg(long, global = true, value_parser = parse_log_level, help = "Log level (overrides UNSCRAMBLE_LOG)")]
    log_level: Option<log::LevelFilter>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play interactively in the terminal.
    Play,
    /// Watch the computer play a session.
    Auto {
        #[arg(long, default_value_t = 0.8, value_parser = parse_skill)]
        skill: f64,
    },
}

#[cfg(feature = "std")]
fn parse_skill(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err("skill must be between 0 and 1".to_string())
    }
}

#[cfg(feature = "std")]
fn parse_log_level(s: &str) -> Result<log::LevelFilter, String> {
    parse_level(s).ok_or_else(|| format!("unknown log level '{}'", s))
}

#[cfg(feature = "std")]
fn build_config(options: &GameOptions) -> anyhow::Result<GameConfig> {
    let mut config = match &options.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(rounds) = options.rounds {
        config.sample_size = rounds;
    }
    if let Some(award) = options.award {
        config.success_award = award;
    }
    if let Some(attempts) = options.attempts {
        config.round.max_wrong_attempts = attempts;
    }
    if let Some(hints) = options.hints {
        config.round.max_hints = hints;
    }
    if options.fast {
        config = config.without_delays();
    }
    config.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(config)
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let options = cli.options;
    match options.log_level {
        Some(level) => init_logging_with(level),
        None => init_logging(),
    }

    let config = build_config(&options)?;
    let words = match &options.words {
        Some(path) => load_word_list(path)?,
        None => builtin_words(),
    };
    if let Some(s) = options.seed {
        println!("Using fixed seed: {} (session will be reproducible)", s);
    }
    let session_rng = make_rng(options.seed);
    let mut player_rng = make_rng(options.seed.map(|s| s.wrapping_add(1)));

    let player: Box<dyn Player> = match cli.command {
        Commands::Play => {
            println!("Unscramble the letters to find the word. Type help for commands.");
            Box::new(CliPlayer::new())
        }
        Commands::Auto { skill } => Box::new(AiPlayer::from_entries(&words, skill)),
    };

    let (controller, events) =
        SessionController::start(&words, config, session_rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut runner = SessionRunner::new(player, controller, Box::new(CliListener::new()));
    runner.dispatch_initial(events);

    let shutdown = runner.shutdown_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.shutdown();
        }
    });

    let summary = runner.run(&mut player_rng).await?;
    log::info!("final score {}", summary.final_score);
    Ok(())
}
