//! Game configuration

use crate::core::ReplacementPolicy;
use crate::engine::{BattleState, TieRule};

/// Settings for one battle
///
/// `Default` reproduces the reference game: 50 HP each, value-based letter
/// replacement, random seed. Ties are draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub initial_hp: u32,
    /// Fixed seed for reproducible games; `None` draws one from the OS
    pub seed: Option<u64>,
    pub tie_rule: TieRule,
    pub replacement: ReplacementPolicy,
}

impl GameConfig {
    #[must_use]
    pub const fn new(initial_hp: u32) -> Self {
        Self {
            initial_hp,
            seed: None,
            tie_rule: TieRule::Draw,
            replacement: ReplacementPolicy::ByValue,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BattleState::DEFAULT_HP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_game() {
        let config = GameConfig::default();
        assert_eq!(config.initial_hp, 50);
        assert_eq!(config.seed, None);
        assert_eq!(config.tie_rule, TieRule::Draw);
        assert_eq!(config.replacement, ReplacementPolicy::ByValue);
    }

    #[test]
    fn with_seed_sets_seed() {
        let config = GameConfig::new(20).with_seed(7);
        assert_eq!(config.initial_hp, 20);
        assert_eq!(config.seed, Some(7));
    }
}
