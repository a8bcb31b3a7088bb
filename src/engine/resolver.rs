//! Round resolution
//!
//! Validates the player's word, picks the bot's word, compares powers and
//! applies the difference to the weaker side.

use super::state::{BattleState, Side};
use super::words::WordEngine;
use crate::core::{WordError, normalize_word};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// What happens when both words have the same power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieRule {
    /// Nobody wins, nobody takes damage
    #[default]
    Draw,
    /// The bot is declared winner (damage is still zero)
    BotWins,
    /// The player is declared winner (damage is still zero)
    PlayerWins,
}

impl TieRule {
    /// Parse a rule name: "draw", "bot" or "player"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "draw" => Some(Self::Draw),
            "bot" | "bot-wins" => Some(Self::BotWins),
            "player" | "player-wins" => Some(Self::PlayerWins),
            _ => None,
        }
    }
}

/// Result of comparing two word powers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player,
    Bot,
    Draw,
}

impl Winner {
    /// The winning side, if any
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Player => Some(Side::Player),
            Self::Bot => Some(Side::Bot),
            Self::Draw => None,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "Player"),
            Self::Bot => write!(f, "Bot"),
            Self::Draw => write!(f, "Draw"),
        }
    }
}

/// Everything that happened in a resolved round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub player_word: String,
    pub bot_word: String,
    pub player_damage: u32,
    pub bot_damage: u32,
    pub winner: Winner,
    /// Hit points taken from the loser (zero on ties)
    pub hp_delta: u32,
    /// Hit points after the round
    pub battle: BattleState,
}

impl RoundOutcome {
    /// The side that lost hit points, if any
    #[must_use]
    pub fn loser(&self) -> Option<Side> {
        if self.hp_delta == 0 {
            return None;
        }
        self.winner.side().map(Side::opponent)
    }
}

/// Why a submitted word did not start a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Empty, too long, or not made of letters
    Malformed(WordError),
    /// Spelled with letters the hand does not hold
    LettersUnavailable { missing: Vec<char> },
    /// Well-formed but not a dictionary word
    NotInDictionary,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "{err}"),
            Self::LettersUnavailable { missing } => {
                let letters: String = missing.iter().map(char::to_ascii_uppercase).collect();
                write!(f, "missing letters: {letters}")
            }
            Self::NotInDictionary => write!(f, "not a valid word"),
        }
    }
}

/// Result of attempting a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundResult {
    /// Both sides played; hit points may have changed
    Resolved(RoundOutcome),
    /// The player's word was refused; nothing changed
    Rejected { word: String, reason: RejectReason },
    /// The bot's hand spells no dictionary word; nothing changed
    NoPlayableWord,
}

/// Stateless round resolver
///
/// Holds only borrowed configuration. Every call is a pure function of its
/// arguments and the supplied random source.
#[derive(Debug, Clone, Copy)]
pub struct RoundResolver<'a> {
    engine: WordEngine<'a>,
    tie_rule: TieRule,
}

impl<'a> RoundResolver<'a> {
    #[must_use]
    pub const fn new(engine: WordEngine<'a>, tie_rule: TieRule) -> Self {
        Self { engine, tie_rule }
    }

    #[must_use]
    pub const fn engine(&self) -> WordEngine<'a> {
        self.engine
    }

    /// Normalize and dictionary-check a player word
    ///
    /// # Errors
    /// Returns the `RejectReason` if the word is malformed or unknown.
    pub fn validate(&self, player_word: &str) -> Result<String, RejectReason> {
        let word = normalize_word(player_word).map_err(RejectReason::Malformed)?;
        if self.engine.is_valid_word(&word) {
            Ok(word)
        } else {
            Err(RejectReason::NotInDictionary)
        }
    }

    /// Pick the bot's word uniformly among everything its hand can spell
    ///
    /// Returns `None` if the hand spells nothing.
    pub fn choose_bot_word<R: Rng + ?Sized>(
        &self,
        bot_hand: &[char],
        rng: &mut R,
    ) -> Option<String> {
        // Sorted so the same seed picks the same word regardless of set order
        let mut candidates: Vec<String> = self
            .engine
            .enumerate_valid_words(bot_hand)
            .into_iter()
            .collect();
        candidates.sort_unstable();

        let choice = candidates.choose(rng).cloned();
        tracing::debug!(
            candidates = candidates.len(),
            choice = choice.as_deref().unwrap_or("-"),
            "bot selected word"
        );
        choice
    }

    /// Compare two already-chosen words and apply the damage
    ///
    /// # Examples
    /// ```
    /// use word_slayer::core::PowerTable;
    /// use word_slayer::dictionary::Dictionary;
    /// use word_slayer::engine::{BattleState, RoundResolver, TieRule, Winner, WordEngine};
    ///
    /// let dict = Dictionary::load(["cat", "do"]).unwrap();
    /// let table = PowerTable::STANDARD;
    /// let resolver = RoundResolver::new(WordEngine::new(&dict, &table), TieRule::Draw);
    ///
    /// let outcome = resolver.score("cat", "do", BattleState::new(50));
    /// assert_eq!(outcome.winner, Winner::Player);
    /// assert_eq!(outcome.hp_delta, 2);
    /// assert_eq!(outcome.battle.bot_hp(), 48);
    /// ```
    #[must_use]
    pub fn score(&self, player_word: &str, bot_word: &str, state: BattleState) -> RoundOutcome {
        let player_damage = self.engine.calculate_power(player_word);
        let bot_damage = self.engine.calculate_power(bot_word);
        let hp_delta = player_damage.abs_diff(bot_damage);

        let winner = match player_damage.cmp(&bot_damage) {
            std::cmp::Ordering::Greater => Winner::Player,
            std::cmp::Ordering::Less => Winner::Bot,
            std::cmp::Ordering::Equal => match self.tie_rule {
                TieRule::Draw => Winner::Draw,
                TieRule::BotWins => Winner::Bot,
                TieRule::PlayerWins => Winner::Player,
            },
        };

        let battle = match winner.side() {
            Some(side) => state.damage(side.opponent(), hp_delta),
            None => state,
        };

        RoundOutcome {
            player_word: player_word.to_string(),
            bot_word: bot_word.to_string(),
            player_damage,
            bot_damage,
            winner,
            hp_delta,
            battle,
        }
    }

    /// Play one round
    ///
    /// 1. Reject the player's word unless it is a dictionary word
    /// 2. Pick the bot's word; report `NoPlayableWord` if there is none
    /// 3. Compare powers and damage the weaker side by the difference
    ///
    /// Neither hand is modified; refreshing used letters is the caller's job.
    pub fn resolve_round<R: Rng + ?Sized>(
        &self,
        player_word: &str,
        bot_hand: &[char],
        state: BattleState,
        rng: &mut R,
    ) -> RoundResult {
        let word = match self.validate(player_word) {
            Ok(word) => word,
            Err(reason) => {
                tracing::debug!(word = player_word, %reason, "player word rejected");
                return RoundResult::Rejected {
                    word: player_word.trim().to_lowercase(),
                    reason,
                };
            }
        };

        let Some(bot_word) = self.choose_bot_word(bot_hand, rng) else {
            tracing::debug!(hand = ?bot_hand, "bot has no playable word");
            return RoundResult::NoPlayableWord;
        };

        let outcome = self.score(&word, &bot_word, state);
        tracing::debug!(
            player_word = %outcome.player_word,
            bot_word = %outcome.bot_word,
            player_damage = outcome.player_damage,
            bot_damage = outcome.bot_damage,
            winner = %outcome.winner,
            hp_delta = outcome.hp_delta,
            "round resolved"
        );
        RoundResult::Resolved(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PowerTable;
    use crate::dictionary::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BOT_HAND: [char; 7] = ['d', 'o', 'g', 'x', 'x', 'x', 'x'];

    fn scenario_dictionary() -> Dictionary {
        Dictionary::load(["cat", "dog", "do"]).unwrap()
    }

    #[test]
    fn resolves_reference_scenario() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let resolver = RoundResolver::new(WordEngine::new(&dict, &table), TieRule::Draw);

        let mut seen_do = false;
        let mut seen_dog = false;

        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let RoundResult::Resolved(outcome) =
                resolver.resolve_round("cat", &BOT_HAND, BattleState::new(50), &mut rng)
            else {
                panic!("round should resolve");
            };

            assert_eq!(outcome.player_damage, 5);
            match outcome.bot_word.as_str() {
                "do" => {
                    seen_do = true;
                    assert_eq!(outcome.bot_damage, 3);
                    assert_eq!(outcome.winner, Winner::Player);
                    assert_eq!(outcome.hp_delta, 2);
                    assert_eq!(outcome.battle.bot_hp(), 48);
                    assert_eq!(outcome.battle.player_hp(), 50);
                    assert_eq!(outcome.loser(), Some(Side::Bot));
                }
                "dog" => {
                    seen_dog = true;
                    assert_eq!(outcome.bot_damage, 5);
                    assert_eq!(outcome.winner, Winner::Draw);
                    assert_eq!(outcome.hp_delta, 0);
                    assert_eq!(outcome.battle, BattleState::new(50));
                    assert_eq!(outcome.loser(), None);
                }
                other => panic!("bot played unexpected word '{other}'"),
            }
        }

        assert!(seen_do && seen_dog, "bot choice should vary with the seed");
    }

    #[test]
    fn rejects_unknown_player_word() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let resolver = RoundResolver::new(WordEngine::new(&dict, &table), TieRule::Draw);

        let result = resolver.resolve_round(
            "tac",
            &BOT_HAND,
            BattleState::new(50),
            &mut StdRng::seed_from_u64(0),
        );

        assert_eq!(
            result,
            RoundResult::Rejected {
                word: "tac".to_string(),
                reason: RejectReason::NotInDictionary,
            }
        );
    }

    #[test]
    fn rejects_malformed_player_word() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let resolver = RoundResolver::new(WordEngine::new(&dict, &table), TieRule::Draw);
        let mut rng = StdRng::seed_from_u64(0);

        let result = resolver.resolve_round("", &BOT_HAND, BattleState::new(50), &mut rng);
        assert!(matches!(
            result,
            RoundResult::Rejected {
                reason: RejectReason::Malformed(WordError::Empty),
                ..
            }
        ));

        let result = resolver.resolve_round("c@t", &BOT_HAND, BattleState::new(50), &mut rng);
        assert!(matches!(
            result,
            RoundResult::Rejected {
                reason: RejectReason::Malformed(WordError::InvalidCharacters),
                ..
            }
        ));
    }

    #[test]
    fn accepts_uppercase_player_word() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let resolver = RoundResolver::new(WordEngine::new(&dict, &table), TieRule::Draw);

        let result = resolver.resolve_round(
            "CAT",
            &BOT_HAND,
            BattleState::new(50),
            &mut StdRng::seed_from_u64(1),
        );

        let RoundResult::Resolved(outcome) = result else {
            panic!("uppercase word should resolve");
        };
        assert_eq!(outcome.player_word, "cat");
    }

    #[test]
    fn bot_without_words_reports_no_playable_word() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let resolver = RoundResolver::new(WordEngine::new(&dict, &table), TieRule::Draw);

        let result = resolver.resolve_round(
            "cat",
            &['q', 'z', 'x', 'j', 'v', 'k', 'w'],
            BattleState::new(50),
            &mut StdRng::seed_from_u64(0),
        );

        assert_eq!(result, RoundResult::NoPlayableWord);
    }

    #[test]
    fn tie_rules() {
        let dict = scenario_dictionary();
        let table = PowerTable::STANDARD;
        let engine = WordEngine::new(&dict, &table);
        let state = BattleState::new(50);

        let draw = RoundResolver::new(engine, TieRule::Draw).score("cat", "dog", state);
        assert_eq!(draw.winner, Winner::Draw);

        let bot = RoundResolver::new(engine, TieRule::BotWins).score("cat", "dog", state);
        assert_eq!(bot.winner, Winner::Bot);
        assert_eq!(bot.hp_delta, 0);
        assert_eq!(bot.battle, state);

        let player = RoundResolver::new(engine, TieRule::PlayerWins).score("cat", "dog", state);
        assert_eq!(player.winner, Winner::Player);
        assert_eq!(player.battle, state);
    }

    #[test]
    fn bot_win_damages_player() {
        let dict = Dictionary::load(["at", "quiz"]).unwrap();
        let table = PowerTable::STANDARD;
        let resolver = RoundResolver::new(WordEngine::new(&dict, &table), TieRule::Draw);

        let outcome = resolver.score("at", "quiz", BattleState::new(50));
        assert_eq!(outcome.winner, Winner::Bot);
        assert_eq!(outcome.hp_delta, 20);
        assert_eq!(outcome.battle.player_hp(), 30);
        assert_eq!(outcome.loser(), Some(Side::Player));
    }

    #[test]
    fn damage_beyond_remaining_hp_clamps_to_zero() {
        let dict = Dictionary::load(["at", "quiz"]).unwrap();
        let table = PowerTable::STANDARD;
        let resolver = RoundResolver::new(WordEngine::new(&dict, &table), TieRule::Draw);

        let outcome = resolver.score("quiz", "at", BattleState::with_hp(50, 4, 50));
        assert_eq!(outcome.hp_delta, 20);
        assert_eq!(outcome.battle.bot_hp(), 0);
        assert!(outcome.battle.is_over());
    }

    #[test]
    fn same_seed_same_outcome() {
        let dict = Dictionary::embedded().unwrap();
        let table = PowerTable::STANDARD;
        let resolver = RoundResolver::new(WordEngine::new(&dict, &table), TieRule::Draw);
        let hand = ['s', 't', 'a', 'r', 'e', 'l', 'o'];

        let state = BattleState::new(50);
        let first = resolver.resolve_round("star", &hand, state, &mut StdRng::seed_from_u64(99));
        let second = resolver.resolve_round("star", &hand, state, &mut StdRng::seed_from_u64(99));

        assert_eq!(first, second);
        assert!(matches!(first, RoundResult::Resolved(_)));
    }

    #[test]
    fn tie_rule_from_name() {
        assert_eq!(TieRule::from_name("draw"), Some(TieRule::Draw));
        assert_eq!(TieRule::from_name("bot"), Some(TieRule::BotWins));
        assert_eq!(TieRule::from_name("player"), Some(TieRule::PlayerWins));
        assert_eq!(TieRule::from_name("coin"), None);
    }

    #[test]
    fn reject_reason_messages() {
        assert_eq!(RejectReason::NotInDictionary.to_string(), "not a valid word");
        assert_eq!(
            RejectReason::LettersUnavailable {
                missing: vec!['q', 'z']
            }
            .to_string(),
            "missing letters: QZ"
        );
        assert_eq!(
            RejectReason::Malformed(WordError::Empty).to_string(),
            "word is empty"
        );
    }
}
