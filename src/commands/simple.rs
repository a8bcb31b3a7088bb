//! Simple interactive CLI mode
//!
//! Text-based battle against the bot without the TUI

use crate::engine::WordEngine;
use crate::game::{Battle, GameConfig};
use crate::output::{print_battle_status, print_game_over, print_turn_report};
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// Commands start with `/` so they never collide with words.
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(engine: WordEngine<'_>, config: GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Slayer - Battle Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Spell a word from your letters. The stronger word hits the weaker");
    println!("side for the difference in power. First to 0 HP loses.\n");
    println!("Commands: /quit, /new for a new battle, /redeal for a new hand,");
    println!("          /hint to count the words in your hand\n");

    let mut battle = Battle::new(config, engine);
    println!("Seed: {} (pass --seed to replay)", battle.seed());

    loop {
        print_battle_status(&battle);

        let Some(input) = get_user_input("Your word")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "" => continue,
            "/quit" | "/q" | "/exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "/new" | "/n" => {
                battle.reset();
                println!("\n🔄 New battle started!\n");
                continue;
            }
            "/redeal" | "/r" => {
                if battle.redeal_player_hand() {
                    println!("\n🔄 You draw a new hand\n");
                } else {
                    println!("\n❌ Your hand still spells a word, no redeal\n");
                }
                continue;
            }
            "/hint" | "/h" => {
                let count = engine
                    .enumerate_valid_words(battle.player_hand().letters())
                    .len();
                println!("\n💡 Your hand spells {count} words\n");
                continue;
            }
            cmd if cmd.starts_with('/') => {
                println!("\n❌ Unknown command '{cmd}'\n");
                continue;
            }
            _ => {}
        }

        let report = battle.submit(&input);
        print_turn_report(&report);

        if battle.is_over() {
            print_game_over(&battle);

            match get_user_input("Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    battle.reset();
                    println!("\n🔄 New battle started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
