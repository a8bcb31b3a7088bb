//! Word Slayer - CLI
//!
//! Word battle game with TUI and CLI modes.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use word_slayer::{
    commands::{SimulationConfig, analyze_word, list_words, run_simple, run_simulation},
    core::{PowerTable, ReplacementPolicy},
    dictionary::{Dictionary, loader::load_from_file},
    engine::{BattleState, TieRule, WordEngine},
    game::{Battle, GameConfig},
    logging,
    output::{print_analysis_result, print_simulation_result, print_words_result},
};

#[derive(Parser)]
#[command(
    name = "word_slayer",
    about = "Word battle game: spell stronger words than the bot to bring its HP to zero",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded list) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Starting hit points for both sides
    #[arg(long, global = true, default_value_t = BattleState::DEFAULT_HP)]
    hp: u32,

    /// Seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Tie rule: draw (default), bot, player
    #[arg(long, global = true, default_value = "draw")]
    tie_rule: String,

    /// Letter replacement: value (default), position
    #[arg(long, global = true, default_value = "value")]
    replacement: String,

    /// More diagnostic output on stderr (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI battle (default)
    Play,

    /// Simple CLI battle (no TUI)
    Simple,

    /// List the words a set of letters can spell, strongest first
    Words {
        /// Up to seven letters
        letters: String,

        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show validity and letter-by-letter power of a word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Play automated bot-vs-bot battles and report statistics
    Simulate {
        /// Number of battles
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Abandon a battle after this many rounds
        #[arg(long, default_value = "200")]
        max_rounds: usize,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "all" => Dictionary::embedded().context("embedded word list is unusable"),
        path => load_from_file(path).with_context(|| format!("cannot use word list '{path}'")),
    }
}

fn game_config(cli: &Cli) -> Result<GameConfig> {
    let tie_rule = TieRule::from_name(&cli.tie_rule)
        .ok_or_else(|| anyhow!("unknown tie rule '{}' (draw, bot, player)", cli.tie_rule))?;
    let replacement = ReplacementPolicy::from_name(&cli.replacement).ok_or_else(|| {
        anyhow!(
            "unknown replacement policy '{}' (value, position)",
            cli.replacement
        )
    })?;

    Ok(GameConfig {
        initial_hp: cli.hp,
        seed: cli.seed,
        tie_rule,
        replacement,
    })
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    logging::init(cli.verbose, matches!(command, Commands::Play))?;

    let config = game_config(&cli)?;
    let dictionary = load_dictionary(&cli.wordlist)?;
    let table = PowerTable::STANDARD;
    let engine = WordEngine::new(&dictionary, &table);
    tracing::debug!(words = dictionary.len(), ?config, "ready");

    match command {
        Commands::Play => run_play_command(engine, config),
        Commands::Simple => run_simple(engine, config),
        Commands::Words { letters, limit } => {
            let result = list_words(&letters, engine)?;
            print_words_result(&result, limit);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, engine)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Simulate {
            games,
            max_rounds,
            no_progress,
        } => {
            println!("⚔️  Simulating {games} bot-vs-bot battles...");
            let sim = SimulationConfig {
                games,
                max_rounds,
                show_progress: !no_progress,
            };
            let result = run_simulation(engine, config, &sim);
            print_simulation_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(engine: WordEngine<'_>, config: GameConfig) -> Result<()> {
    use word_slayer::interactive::{App, run_tui};

    let app = App::new(Battle::new(config, engine));
    run_tui(app)
}
