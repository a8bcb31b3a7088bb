//! Display functions for command results

use super::formatters::{hand_with_powers, hp_bar, power_breakdown};
use crate::commands::{AnalysisResult, SimulationResult, WordsResult};
use crate::engine::{Side, Winner};
use crate::game::{Battle, TurnReport};
use colored::Colorize;

const HP_BAR_WIDTH: usize = 25;

/// Print both hit point bars and the player's hand
pub fn print_battle_status(battle: &Battle<'_>) {
    let state = battle.state();
    let max = state.initial_hp();

    println!("{}", "─".repeat(60).cyan());
    println!(
        "🧑 Player  {}",
        hp_bar(state.player_hp(), max, HP_BAR_WIDTH).green()
    );
    println!(
        "🤖 Bot     {}",
        hp_bar(state.bot_hp(), max, HP_BAR_WIDTH).red()
    );
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Round {}  Your letters: {}",
        battle.rounds() + 1,
        hand_with_powers(battle.player_hand(), battle.engine().table())
            .bright_yellow()
            .bold()
    );
}

/// Print what a submitted word did
pub fn print_turn_report(report: &TurnReport) {
    match report {
        TurnReport::Rejected { word, reason } => {
            println!(
                "\n{} {}\n",
                format!("❌ '{}' is not playable:", word.to_uppercase()).red(),
                reason
            );
        }
        TurnReport::BotRedealt => {
            println!(
                "\n{}\n",
                "🤖 The bot cannot spell anything and draws a new hand. Play again!".yellow()
            );
        }
        TurnReport::Resolved(outcome) => {
            println!(
                "\n🧑 You played   {} ({} power)",
                outcome.player_word.to_uppercase().bright_white().bold(),
                outcome.player_damage
            );
            println!(
                "🤖 Bot played   {} ({} power)",
                outcome.bot_word.to_uppercase().bright_white().bold(),
                outcome.bot_damage
            );

            let line = match (outcome.winner, outcome.loser()) {
                (Winner::Draw, _) => "🤝 Draw! Nobody takes damage".yellow(),
                (Winner::Player, Some(_)) => {
                    format!("⚔️  You win the round! Bot loses {} HP", outcome.hp_delta).green()
                }
                (Winner::Bot, Some(_)) => {
                    format!("⚔️  Bot wins the round! You lose {} HP", outcome.hp_delta).red()
                }
                (winner, None) => format!("⚔️  {winner} takes the tie, no damage").yellow(),
            };
            println!("{}\n", line.bold());
        }
        TurnReport::GameOver { .. } => {
            println!("\n{}\n", "The battle is already over.".bright_black());
        }
    }
}

/// Print the end-of-battle banner
pub fn print_game_over(battle: &Battle<'_>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    let headline = match battle.victor() {
        Some(Side::Player) => "    🏆  V I C T O R Y !  🏆    ".bright_green().bold(),
        Some(Side::Bot) => "    💀  D E F E A T  💀    ".bright_red().bold(),
        None => "    ⚖️  N O   V I C T O R  ⚖️    ".bright_yellow().bold(),
    };
    println!("{headline}");
    println!("{}", "═".repeat(60).bright_cyan());

    let state = battle.state();
    println!(
        "\n  Rounds played: {}",
        battle.rounds().to_string().bright_cyan().bold()
    );
    println!(
        "  Final HP:      you {} / bot {}",
        state.player_hp(),
        state.bot_hp()
    );
    println!("  Seed:          {}\n", battle.seed());
}

/// Print the words a set of letters can spell
pub fn print_words_result(result: &WordsResult, limit: Option<usize>) {
    let letters: String = result.letters.iter().collect();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PLAYABLE WORDS:".bright_cyan().bold(),
        letters.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let Some((best, best_power)) = result.best() else {
        println!("\n{}", "No dictionary word can be spelled.".red());
        return;
    };

    println!("\n📖 {} words found", result.words.len());
    println!(
        "⭐ Strongest: {} ({} power)\n",
        best.to_uppercase().bright_green().bold(),
        best_power.to_string().bright_yellow()
    );
    let shown = limit.unwrap_or(result.words.len());
    for (i, (word, power)) in result.words.iter().take(shown).enumerate() {
        println!(
            "  {:>3}. {:<8} {}",
            (i + 1).to_string().bright_black(),
            word.to_uppercase().bright_white().bold(),
            format!("{power:>3}").bright_yellow()
        );
    }
    if shown < result.words.len() {
        println!(
            "  {}",
            format!("... and {} more", result.words.len() - shown).bright_black()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let validity = if result.valid {
        "✅ playable".green()
    } else {
        "❌ not in dictionary".red()
    };
    println!("\n   Valid:    {validity}");
    println!(
        "   Power:    {}",
        result.power.to_string().bright_yellow().bold()
    );
    println!("   Letters:  {}", power_breakdown(&result.breakdown));

    if !result.related.is_empty() {
        println!("\n🔀 {}", "Also spelled from these letters:".bright_cyan().bold());
        for (word, power) in result.related.iter().take(10) {
            println!("   • {} ({power})", word.to_uppercase());
        }
    }
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!("   Base seed:        {}", result.base_seed);
    println!(
        "   Player wins:      {} ({:.1}%)",
        result.player_wins.to_string().green(),
        result.player_win_rate()
    );
    println!(
        "   Bot wins:         {} ({:.1}%)",
        result.bot_wins.to_string().red(),
        result.bot_win_rate()
    );
    println!("   Unfinished:       {}", result.unfinished);
    println!("   Hands redealt:    {}", result.total_redeals);

    println!("\n⏱️  {}", "Rounds:".bright_cyan().bold());
    println!(
        "   Average:          {}",
        format!("{:.2}", result.average_rounds).bright_yellow().bold()
    );
    println!("   Shortest:         {}", result.min_rounds.to_string().green());
    println!("   Longest:          {}", result.max_rounds.to_string().yellow());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let finished: usize = result.distribution.values().sum();
    if finished == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&rounds, &count) in &result.distribution {
        let pct = (count as f64 / finished as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {rounds:>3}: {bar} {count:4} ({pct:5.1}%)");
    }
}
