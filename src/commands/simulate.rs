//! Bot-vs-bot simulation
//!
//! Plays many automated battles in parallel and aggregates the results.
//! Every game owns an RNG seeded from `base_seed + index`, so a base seed
//! always reproduces the same statistics.

use crate::engine::{BattleState, Side, WordEngine};
use crate::game::{Battle, GameConfig, TurnReport};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Settings for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub games: usize,
    /// Resolved rounds after which a game is abandoned
    pub max_rounds: usize,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            max_rounds: 200,
            show_progress: true,
        }
    }
}

/// How a single automated game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub seed: u64,
    pub rounds: usize,
    /// `None` for unfinished games and double knockouts
    pub victor: Option<Side>,
    pub finished: bool,
    /// Hands redealt because they spelled nothing
    pub redeals: usize,
    pub final_state: BattleState,
}

/// Aggregate statistics over all games
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub base_seed: u64,
    pub player_wins: usize,
    pub bot_wins: usize,
    pub unfinished: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub total_redeals: usize,
    /// Rounds played to finish a game, keyed by round count
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

impl SimulationResult {
    /// Share of games won by the player side, in percent
    #[must_use]
    pub fn player_win_rate(&self) -> f64 {
        percentage(self.player_wins, self.games)
    }

    #[must_use]
    pub fn bot_win_rate(&self) -> f64 {
        percentage(self.bot_wins, self.games)
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Play one automated game to the end or to `max_rounds`
///
/// Both sides pick a uniformly random playable word each round. A side whose
/// hand spells nothing is redealt; a game stuck redealing for `max_rounds`
/// turns in a row is abandoned too.
#[must_use]
pub fn simulate_game(
    engine: WordEngine<'_>,
    config: GameConfig,
    seed: u64,
    max_rounds: usize,
) -> GameSummary {
    let mut battle = Battle::new(config.with_seed(seed), engine);
    let mut redeals = 0;
    let mut stalled = 0;

    while !battle.is_over() && battle.rounds() < max_rounds && stalled < max_rounds {
        let Some(word) = battle.auto_word() else {
            battle.redeal_player_hand();
            redeals += 1;
            stalled += 1;
            continue;
        };

        match battle.submit(&word) {
            TurnReport::Resolved(_) => stalled = 0,
            TurnReport::BotRedealt => {
                redeals += 1;
                stalled += 1;
            }
            TurnReport::Rejected { word, reason } => {
                tracing::warn!(%word, %reason, seed, "automated word rejected");
                break;
            }
            TurnReport::GameOver { .. } => break,
        }
    }

    GameSummary {
        seed,
        rounds: battle.rounds(),
        victor: battle.victor(),
        finished: battle.is_over(),
        redeals,
        final_state: battle.state(),
    }
}

/// Run `sim.games` automated games in parallel
///
/// Uses `config.seed` as the base seed when set, otherwise draws one; the
/// base seed is reported back in the result.
#[must_use]
pub fn run_simulation(
    engine: WordEngine<'_>,
    config: GameConfig,
    sim: &SimulationConfig,
) -> SimulationResult {
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(games = sim.games, base_seed, "simulation started");

    let pb = if sim.show_progress {
        let pb = ProgressBar::new(sim.games as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message("battling");
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let summaries: Vec<GameSummary> = (0..sim.games)
        .into_par_iter()
        .map(|i| {
            let seed = base_seed.wrapping_add(i as u64);
            let summary = simulate_game(engine, config, seed, sim.max_rounds);
            pb.inc(1);
            summary
        })
        .collect();
    pb.finish_with_message("done");

    summarize(&summaries, base_seed, start.elapsed())
}

fn summarize(summaries: &[GameSummary], base_seed: u64, duration: Duration) -> SimulationResult {
    let mut player_wins = 0;
    let mut bot_wins = 0;
    let mut unfinished = 0;
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut total_redeals = 0;
    let mut distribution = BTreeMap::new();

    for summary in summaries {
        total_rounds += summary.rounds;
        total_redeals += summary.redeals;

        if !summary.finished {
            unfinished += 1;
            continue;
        }

        match summary.victor {
            Some(Side::Player) => player_wins += 1,
            Some(Side::Bot) => bot_wins += 1,
            None => {}
        }
        min_rounds = min_rounds.min(summary.rounds);
        max_rounds = max_rounds.max(summary.rounds);
        *distribution.entry(summary.rounds).or_insert(0) += 1;
    }

    let finished = summaries.len() - unfinished;

    SimulationResult {
        games: summaries.len(),
        base_seed,
        player_wins,
        bot_wins,
        unfinished,
        total_rounds,
        average_rounds: if finished == 0 {
            0.0
        } else {
            distribution
                .iter()
                .map(|(rounds, count)| rounds * count)
                .sum::<usize>() as f64
                / finished as f64
        },
        min_rounds: if finished == 0 { 0 } else { min_rounds },
        max_rounds,
        total_redeals,
        distribution,
        duration,
    }
}
