//! Four - CLI
//!
//! Four-letter word guessing game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use four::{
    commands::{run_simple, score_words},
    config::GameConfig,
    game::Session,
    output::print_score_result,
    wordlists::{Lexicon, loader::load_from_file},
};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "four",
    about = "Guess the hidden four-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, built-in words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Game settings file (TOML); defaults apply when missing
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Seed for picking solutions, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Append log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a solution
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word to score against
        solution: String,
    },
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);

    if let Some(path) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(log_output)));
    }

    builder.init();
    Ok(())
}

/// Load the lexicon based on the -w flag
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": one word per line from a file
fn load_lexicon(wordlist: &str) -> Result<Lexicon> {
    let lexicon = match wordlist {
        "embedded" => Lexicon::embedded()?,
        path => {
            let lines = load_from_file(path)?;
            Lexicon::new(lines.iter().map(String::as_str))?
        }
    };
    info!("loaded {} words from {wordlist}", lexicon.len());
    Ok(lexicon)
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => Ok(GameConfig::load_or_default(path)?),
        None => Ok(GameConfig::default()),
    }
}

fn new_session(cli: &Cli) -> Result<Session> {
    let lexicon = load_lexicon(&cli.wordlist)?;
    let config = load_config(cli.config.as_deref())?;
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    Ok(Session::new(lexicon, config, rng))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Score { guess, solution } => run_score_command(guess, solution),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use four::interactive::{App, run_tui};

    let app = App::new(new_session(cli)?);
    run_tui(app)
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut session = new_session(cli)?;
    run_simple(&mut session)
}

fn run_score_command(guess: &str, solution: &str) -> Result<()> {
    let result = score_words(guess, solution)?;
    print_score_result(&result);
    Ok(())
}
