//! Battle session
//!
//! Owns everything that changes between rounds: hit points, both hands, the
//! display log and the random source. Presentation layers drive a battle by
//! calling [`Battle::submit`] and rendering what comes back.

use super::config::GameConfig;
use crate::core::{Hand, normalize_word};
use crate::engine::{
    BattleState, RejectReason, RoundOutcome, RoundResolver, RoundResult, Side, Winner, WordEngine,
};
use rand::rngs::StdRng;
use std::collections::VecDeque;
use rand::{Rng, SeedableRng};

/// Where a battle is in the round cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    AwaitingPlayerInput,
    Validating,
    /// Last word was refused; input is accepted again
    Rejected,
    BotSelecting,
    Resolving,
    /// Last round resolved; input is accepted again
    Resolved,
    GameOver,
}

impl RoundPhase {
    /// True in the phases where a new word may be submitted
    #[must_use]
    pub const fn accepts_input(self) -> bool {
        matches!(
            self,
            Self::AwaitingPlayerInput | Self::Rejected | Self::Resolved
        )
    }
}

/// Category of a log line, used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Player,
    Bot,
    Rejected,
    Outcome,
    Victory,
}

/// One line of the battle log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub text: String,
    pub kind: LogKind,
}

/// What a call to [`Battle::submit`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnReport {
    /// Word refused; no turn consumed
    Rejected { word: String, reason: RejectReason },
    /// Round played; hands already refreshed
    Resolved(RoundOutcome),
    /// Bot could not spell anything and was dealt a new hand; the player
    /// keeps their hand and plays again
    BotRedealt,
    /// Battle already finished; nothing happened
    GameOver { victor: Option<Side> },
}

/// A running player-vs-bot battle
pub struct Battle<'a> {
    resolver: RoundResolver<'a>,
    config: GameConfig,
    seed: u64,
    rng: StdRng,
    state: BattleState,
    player_hand: Hand,
    bot_hand: Hand,
    log: VecDeque<LogEntry>,
    phase: RoundPhase,
    rounds: usize,
    last_outcome: Option<RoundOutcome>,
}

impl<'a> Battle<'a> {
    /// Start a battle with freshly dealt hands
    ///
    /// Uses `config.seed` if set, otherwise draws a seed; either way the seed
    /// is available from [`Battle::seed`] to replay the game.
    #[must_use]
    pub fn new(config: GameConfig, engine: WordEngine<'a>) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        let player_hand = Hand::generate(engine.table(), &mut rng);
        let bot_hand = Hand::generate(engine.table(), &mut rng);

        Self::start(config, engine, seed, rng, player_hand, bot_hand)
    }

    /// Start a battle with explicit hands
    #[must_use]
    pub fn with_hands(
        config: GameConfig,
        engine: WordEngine<'a>,
        player_hand: Hand,
        bot_hand: Hand,
    ) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let rng = StdRng::seed_from_u64(seed);

        Self::start(config, engine, seed, rng, player_hand, bot_hand)
    }

    fn start(
        config: GameConfig,
        engine: WordEngine<'a>,
        seed: u64,
        rng: StdRng,
        player_hand: Hand,
        bot_hand: Hand,
    ) -> Self {
        tracing::info!(seed, hp = config.initial_hp, "battle started");

        let mut battle = Self {
            resolver: RoundResolver::new(engine, config.tie_rule),
            config,
            seed,
            rng,
            state: BattleState::new(config.initial_hp),
            player_hand,
            bot_hand,
            log: VecDeque::new(),
            phase: RoundPhase::AwaitingPlayerInput,
            rounds: 0,
            last_outcome: None,
        };
        battle.push_log(LogKind::Info, "The battle begins!".to_string());
        battle
    }

    /// Start over with full hit points and new hands
    ///
    /// The random source carries on, so a seeded session stays reproducible
    /// across resets.
    pub fn reset(&mut self) {
        let table = self.resolver.engine().table();
        self.player_hand = Hand::generate(table, &mut self.rng);
        self.bot_hand = Hand::generate(table, &mut self.rng);
        self.state = BattleState::new(self.config.initial_hp);
        self.log.clear();
        self.rounds = 0;
        self.last_outcome = None;
        self.phase = RoundPhase::AwaitingPlayerInput;

        tracing::info!(seed = self.seed, "battle reset");
        self.push_log(LogKind::Info, "A new battle begins!".to_string());
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn engine(&self) -> WordEngine<'a> {
        self.resolver.engine()
    }

    #[must_use]
    pub const fn state(&self) -> BattleState {
        self.state
    }

    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    #[must_use]
    pub const fn bot_hand(&self) -> &Hand {
        &self.bot_hand
    }

    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Number of resolved rounds
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Log lines, newest first
    #[must_use]
    pub const fn log(&self) -> &VecDeque<LogEntry> {
        &self.log
    }

    #[must_use]
    pub const fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.last_outcome.as_ref()
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub const fn victor(&self) -> Option<Side> {
        self.state.victor()
    }

    /// Power of a word being typed, before it is submitted
    #[must_use]
    pub fn preview_power(&self, word: &str) -> u32 {
        self.resolver.engine().calculate_power(word)
    }

    /// Play the player's word against the bot
    ///
    /// The word must be well formed, spelled from the player's hand and in
    /// the dictionary; otherwise it is rejected and nothing changes. When the
    /// bot's hand spells nothing, the bot is dealt a new hand, no hit points
    /// change and the player plays again.
    pub fn submit(&mut self, input: &str) -> TurnReport {
        if self.state.is_over() {
            return TurnReport::GameOver {
                victor: self.state.victor(),
            };
        }

        self.transition(RoundPhase::Validating);
        let word = match normalize_word(input) {
            Ok(word) => word,
            Err(err) => {
                let word = input.trim().to_lowercase();
                return self.reject(word, RejectReason::Malformed(err));
            }
        };

        let missing = self.player_hand.missing_letters(&word);
        if !missing.is_empty() {
            return self.reject(word, RejectReason::LettersUnavailable { missing });
        }

        self.transition(RoundPhase::BotSelecting);
        let result = self.resolver.resolve_round(
            &word,
            self.bot_hand.letters(),
            self.state,
            &mut self.rng,
        );

        match result {
            RoundResult::Rejected { word, reason } => self.reject(word, reason),
            RoundResult::NoPlayableWord => self.redeal_bot(),
            RoundResult::Resolved(outcome) => self.apply(outcome),
        }
    }

    /// A uniformly random word from the player's hand, if it spells any
    ///
    /// Same policy the bot uses; drives automated play.
    pub fn auto_word(&mut self) -> Option<String> {
        self.resolver
            .choose_bot_word(self.player_hand.letters(), &mut self.rng)
    }

    /// Swap the player's hand for a new one without playing a round
    ///
    /// Only a hand that spells no dictionary word can be swapped. Returns
    /// `false` when the hand is still playable or the battle is over.
    pub fn redeal_player_hand(&mut self) -> bool {
        if self.state.is_over() {
            return false;
        }
        if !self
            .resolver
            .engine()
            .enumerate_valid_words(self.player_hand.letters())
            .is_empty()
        {
            tracing::debug!(hand = %self.player_hand, "redeal refused, hand is playable");
            self.push_log(
                LogKind::Rejected,
                "❌ Your hand still spells a word, no redeal".to_string(),
            );
            return false;
        }

        self.player_hand = Hand::generate(self.resolver.engine().table(), &mut self.rng);
        tracing::debug!(hand = %self.player_hand, "player redealt");
        self.push_log(LogKind::Info, "🔄 Player draws a new hand".to_string());
        true
    }

    fn reject(&mut self, word: String, reason: RejectReason) -> TurnReport {
        tracing::debug!(%word, %reason, "submission rejected");
        self.push_log(
            LogKind::Rejected,
            format!("❌ '{}' is not playable: {reason}", word.to_uppercase()),
        );
        self.transition(RoundPhase::Rejected);
        TurnReport::Rejected { word, reason }
    }

    fn redeal_bot(&mut self) -> TurnReport {
        self.bot_hand = Hand::generate(self.resolver.engine().table(), &mut self.rng);
        tracing::debug!(hand = %self.bot_hand, "bot redealt");
        self.push_log(
            LogKind::Bot,
            "🤖 Bot has no playable word and draws a new hand".to_string(),
        );
        self.transition(RoundPhase::AwaitingPlayerInput);
        TurnReport::BotRedealt
    }

    fn apply(&mut self, outcome: RoundOutcome) -> TurnReport {
        self.transition(RoundPhase::Resolving);

        let table = self.resolver.engine().table();
        let policy = self.config.replacement;
        self.player_hand = self
            .player_hand
            .replace(&outcome.player_word, policy, table, &mut self.rng);
        self.bot_hand = self
            .bot_hand
            .replace(&outcome.bot_word, policy, table, &mut self.rng);

        self.state = outcome.battle;
        self.rounds += 1;

        self.push_log(
            LogKind::Player,
            format!(
                "🧑‍🚀 Player used '{}' (-{} HP)",
                outcome.player_word.to_uppercase(),
                outcome.player_damage
            ),
        );
        self.push_log(
            LogKind::Bot,
            format!(
                "🤖 Bot used '{}' (-{} HP)",
                outcome.bot_word.to_uppercase(),
                outcome.bot_damage
            ),
        );
        let summary = match (outcome.winner, outcome.loser()) {
            (Winner::Draw, _) => "🤝 Draw! Nobody takes damage".to_string(),
            (winner, Some(loser)) => {
                format!("⚔️ {winner} wins the round! {loser} loses {} HP", outcome.hp_delta)
            }
            (winner, None) => format!("⚔️ {winner} takes the tie, no damage dealt"),
        };
        self.push_log(LogKind::Outcome, summary);

        if self.state.is_over() {
            self.transition(RoundPhase::GameOver);
            let text = match self.state.victor() {
                Some(victor) => format!("🏆 {victor} is victorious!"),
                None => "💀 Both sides have fallen".to_string(),
            };
            tracing::info!(rounds = self.rounds, victor = ?self.state.victor(), "battle over");
            self.push_log(LogKind::Victory, text);
        } else {
            self.transition(RoundPhase::Resolved);
        }

        self.last_outcome = Some(outcome.clone());
        TurnReport::Resolved(outcome)
    }

    fn transition(&mut self, next: RoundPhase) {
        tracing::trace!(from = ?self.phase, to = ?next, "phase change");
        self.phase = next;
    }

    fn push_log(&mut self, kind: LogKind, text: String) {
        self.log.push_front(LogEntry { text, kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PowerTable, ReplacementPolicy};
    use crate::dictionary::Dictionary;

    fn scenario_dictionary() -> Dictionary {
        Dictionary::load(["cat", "dog", "do", "quiz"]).unwrap()
    }

    fn player_hand() -> Hand {
        Hand::from_letters(['c', 'a', 't', 'd', 'o', 'g', 'x'])
    }

    fn bot_hand() -> Hand {
        Hand::from_letters(['d', 'o', 'g', 'x', 'x', 'x', 'x'])
    }

    #[test]
    fn new_battle_deals_two_hands() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let battle = Battle::new(
            GameConfig::default().with_seed(1),
            WordEngine::new(&dict, &table),
        );

        assert_eq!(battle.state(), BattleState::new(50));
        assert_eq!(battle.seed(), 1);
        assert_eq!(battle.phase(), RoundPhase::AwaitingPlayerInput);
        assert_eq!(battle.rounds(), 0);
        assert_eq!(battle.log().len(), 1);
    }

    #[test]
    fn seeded_battles_deal_identical_hands() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let engine = WordEngine::new(&dict, &table);

        let a = Battle::new(GameConfig::default().with_seed(5), engine);
        let b = Battle::new(GameConfig::default().with_seed(5), engine);

        assert_eq!(a.player_hand(), b.player_hand());
        assert_eq!(a.bot_hand(), b.bot_hand());
    }

    #[test]
    fn unknown_word_is_rejected_without_changes() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let mut battle = Battle::with_hands(
            GameConfig::default().with_seed(3),
            WordEngine::new(&dict, &table),
            player_hand(),
            bot_hand(),
        );

        let report = battle.submit("act");

        assert_eq!(
            report,
            TurnReport::Rejected {
                word: "act".to_string(),
                reason: RejectReason::NotInDictionary,
            }
        );
        assert_eq!(battle.state(), BattleState::new(50));
        assert_eq!(battle.player_hand(), &player_hand());
        assert_eq!(battle.bot_hand(), &bot_hand());
        assert_eq!(battle.phase(), RoundPhase::Rejected);
        assert_eq!(battle.rounds(), 0);
        assert_eq!(battle.log().front().unwrap().kind, LogKind::Rejected);
    }

    #[test]
    fn word_outside_hand_is_rejected() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let mut battle = Battle::with_hands(
            GameConfig::default().with_seed(3),
            WordEngine::new(&dict, &table),
            player_hand(),
            bot_hand(),
        );

        let report = battle.submit("quiz");

        assert_eq!(
            report,
            TurnReport::Rejected {
                word: "quiz".to_string(),
                reason: RejectReason::LettersUnavailable {
                    missing: vec!['q', 'u', 'i', 'z']
                },
            }
        );
        assert_eq!(battle.state(), BattleState::new(50));
    }

    #[test]
    fn empty_submission_is_rejected() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let mut battle = Battle::with_hands(
            GameConfig::default().with_seed(3),
            WordEngine::new(&dict, &table),
            player_hand(),
            bot_hand(),
        );

        assert!(matches!(
            battle.submit("   "),
            TurnReport::Rejected {
                reason: RejectReason::Malformed(_),
                ..
            }
        ));
        assert!(battle.phase().accepts_input());
    }

    #[test]
    fn resolved_round_updates_state_and_hands() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let mut battle = Battle::with_hands(
            GameConfig::default().with_seed(11),
            WordEngine::new(&dict, &table),
            player_hand(),
            bot_hand(),
        );

        let TurnReport::Resolved(outcome) = battle.submit("CAT") else {
            panic!("round should resolve");
        };

        assert_eq!(outcome.player_word, "cat");
        assert_eq!(battle.state(), outcome.battle);
        assert_eq!(battle.rounds(), 1);
        assert_eq!(battle.phase(), RoundPhase::Resolved);
        assert_eq!(battle.last_outcome(), Some(&outcome));

        // Letters not in "cat" stay where they were
        assert_eq!(&battle.player_hand().letters()[3..], &['d', 'o', 'g', 'x']);
        // The x's were never played by the bot
        assert_eq!(&battle.bot_hand().letters()[3..], &['x', 'x', 'x', 'x']);

        match outcome.bot_word.as_str() {
            "do" => assert_eq!(battle.state().bot_hp(), 48),
            "dog" => assert_eq!(battle.state().bot_hp(), 50),
            other => panic!("unexpected bot word '{other}'"),
        }

        let kinds: Vec<LogKind> = battle.log().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![LogKind::Outcome, LogKind::Bot, LogKind::Player, LogKind::Info]
        );
        assert_eq!(battle.log()[2].text, "🧑‍🚀 Player used 'CAT' (-5 HP)");
    }

    #[test]
    fn position_policy_keeps_unplayed_duplicates() {
        let dict = Dictionary::load(["do"]).unwrap();
        let table = PowerTable::STANDARD;
        let mut config = GameConfig::default().with_seed(2);
        config.replacement = ReplacementPolicy::ByPosition;

        let mut battle = Battle::with_hands(
            config,
            WordEngine::new(&dict, &table),
            Hand::from_letters(['d', 'o', 'o', 'x', 'x', 'x', 'x']),
            bot_hand(),
        );

        assert!(matches!(battle.submit("do"), TurnReport::Resolved(_)));
        assert_eq!(battle.player_hand().letters()[2], 'o');
    }

    #[test]
    fn bot_without_words_is_redealt() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let stuck = Hand::from_letters(['q'; 7]);
        let mut battle = Battle::with_hands(
            GameConfig::default().with_seed(4),
            WordEngine::new(&dict, &table),
            player_hand(),
            stuck,
        );

        assert_eq!(battle.submit("cat"), TurnReport::BotRedealt);
        assert_eq!(battle.state(), BattleState::new(50));
        assert_eq!(battle.player_hand(), &player_hand());
        assert_ne!(battle.bot_hand(), &stuck);
        assert_eq!(battle.rounds(), 0);
        assert_eq!(battle.phase(), RoundPhase::AwaitingPlayerInput);
    }

    #[test]
    fn lethal_round_ends_battle() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let mut battle = Battle::with_hands(
            GameConfig::new(5).with_seed(8),
            WordEngine::new(&dict, &table),
            Hand::from_letters(['q', 'u', 'i', 'z', 'x', 'x', 'x']),
            Hand::from_letters(['d', 'o', 'x', 'x', 'x', 'x', 'x']),
        );

        let TurnReport::Resolved(outcome) = battle.submit("quiz") else {
            panic!("round should resolve");
        };
        assert_eq!(outcome.hp_delta, 19);
        assert_eq!(battle.state().bot_hp(), 0);
        assert!(battle.is_over());
        assert_eq!(battle.victor(), Some(Side::Player));
        assert_eq!(battle.phase(), RoundPhase::GameOver);
        assert_eq!(battle.log().front().unwrap().kind, LogKind::Victory);

        assert_eq!(
            battle.submit("do"),
            TurnReport::GameOver {
                victor: Some(Side::Player)
            }
        );
        assert!(!battle.redeal_player_hand());
    }

    #[test]
    fn reset_restores_full_health() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let mut battle = Battle::with_hands(
            GameConfig::new(5).with_seed(8),
            WordEngine::new(&dict, &table),
            Hand::from_letters(['q', 'u', 'i', 'z', 'x', 'x', 'x']),
            Hand::from_letters(['d', 'o', 'x', 'x', 'x', 'x', 'x']),
        );
        let _ = battle.submit("quiz");

        battle.reset();

        assert_eq!(battle.state(), BattleState::new(5));
        assert_eq!(battle.rounds(), 0);
        assert_eq!(battle.log().len(), 1);
        assert!(battle.last_outcome().is_none());
        assert_eq!(battle.phase(), RoundPhase::AwaitingPlayerInput);
    }

    #[test]
    fn same_seed_same_battle() {
        let dict = Dictionary::embedded().unwrap();
        let table = PowerTable::STANDARD;
        let engine = WordEngine::new(&dict, &table);

        let play = |seed| {
            let mut battle = Battle::new(GameConfig::default().with_seed(seed), engine);
            let mut reports = Vec::new();
            for _ in 0..10 {
                match battle.auto_word() {
                    Some(word) => reports.push(battle.submit(&word)),
                    None => {
                        battle.redeal_player_hand();
                    }
                }
            }
            (reports, battle.state())
        };

        assert_eq!(play(21), play(21));
    }

    #[test]
    fn auto_word_is_spelled_from_hand() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let mut battle = Battle::with_hands(
            GameConfig::default().with_seed(6),
            WordEngine::new(&dict, &table),
            player_hand(),
            bot_hand(),
        );

        let word = battle.auto_word().unwrap();
        assert!(["cat", "dog", "do"].contains(&word.as_str()));
        assert!(battle.player_hand().can_form(&word));
    }

    #[test]
    fn redeal_player_hand_logs() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let mut battle = Battle::with_hands(
            GameConfig::default().with_seed(6),
            WordEngine::new(&dict, &table),
            Hand::from_letters(['q'; 7]),
            bot_hand(),
        );

        assert!(battle.redeal_player_hand());
        assert_ne!(*battle.player_hand(), Hand::from_letters(['q'; 7]));
        assert_eq!(battle.log().front().unwrap().kind, LogKind::Info);
        assert_eq!(battle.state(), BattleState::new(50));
    }

    #[test]
    fn redeal_refused_while_hand_spells_a_word() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let mut battle = Battle::with_hands(
            GameConfig::default().with_seed(6),
            WordEngine::new(&dict, &table),
            player_hand(),
            bot_hand(),
        );

        for _ in 0..50 {
            assert!(!battle.redeal_player_hand());
        }

        assert_eq!(*battle.player_hand(), player_hand());
        assert_eq!(*battle.bot_hand(), bot_hand());
        assert_eq!(battle.state(), BattleState::new(50));
        assert_eq!(battle.rounds(), 0);
        assert_eq!(battle.log().front().unwrap().kind, LogKind::Rejected);
    }

    #[test]
    fn log_stays_newest_first() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let mut battle = Battle::with_hands(
            GameConfig::default(),
            WordEngine::new(&dict, &table),
            player_hand(),
            bot_hand(),
        );

        for n in 0..500 {
            battle.submit(&format!("nope{n}"));
        }

        assert_eq!(battle.log().len(), 501);
        assert!(battle.log().front().unwrap().text.contains("NOPE499"));
        assert_eq!(battle.log().back().unwrap().text, "The battle begins!");
    }

    #[test]
    fn preview_power_scores_partial_input() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let battle = Battle::new(GameConfig::default(), WordEngine::new(&dict, &table));

        assert_eq!(battle.preview_power(""), 0);
        assert_eq!(battle.preview_power("qu"), 11);
    }
}
