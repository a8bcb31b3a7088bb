//! Hit points carried across rounds

use std::fmt;

/// One of the two combatants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Bot,
}

impl Side {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Bot,
            Self::Bot => Self::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "Player"),
            Self::Bot => write!(f, "Bot"),
        }
    }
}

/// Hit points of both sides
///
/// Both values stay within `[0, initial_hp]`; damage saturates at zero. The
/// battle is over once either side reaches zero, but nothing here refuses
/// further damage: callers decide when to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleState {
    player_hp: u32,
    bot_hp: u32,
    initial_hp: u32,
}

impl BattleState {
    /// Starting hit points of the reference game
    pub const DEFAULT_HP: u32 = 50;

    /// Both sides at full health
    #[must_use]
    pub const fn new(initial_hp: u32) -> Self {
        Self {
            player_hp: initial_hp,
            bot_hp: initial_hp,
            initial_hp,
        }
    }

    /// Arbitrary hit points, clamped to `initial_hp`
    #[must_use]
    pub fn with_hp(player_hp: u32, bot_hp: u32, initial_hp: u32) -> Self {
        Self {
            player_hp: player_hp.min(initial_hp),
            bot_hp: bot_hp.min(initial_hp),
            initial_hp,
        }
    }

    #[inline]
    #[must_use]
    pub const fn player_hp(&self) -> u32 {
        self.player_hp
    }

    #[inline]
    #[must_use]
    pub const fn bot_hp(&self) -> u32 {
        self.bot_hp
    }

    #[inline]
    #[must_use]
    pub const fn initial_hp(&self) -> u32 {
        self.initial_hp
    }

    /// Remove `amount` hit points from `side`, stopping at zero
    ///
    /// # Examples
    /// ```
    /// use word_slayer::engine::{BattleState, Side};
    ///
    /// let state = BattleState::new(10).damage(Side::Bot, 25);
    /// assert_eq!(state.bot_hp(), 0);
    /// assert_eq!(state.player_hp(), 10);
    /// ```
    #[must_use]
    pub const fn damage(self, side: Side, amount: u32) -> Self {
        let mut next = self;
        match side {
            Side::Player => next.player_hp = self.player_hp.saturating_sub(amount),
            Side::Bot => next.bot_hp = self.bot_hp.saturating_sub(amount),
        }
        next
    }

    /// True once either side has no hit points left
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.player_hp == 0 || self.bot_hp == 0
    }

    /// The surviving side once the battle is over
    ///
    /// If both sides are at zero (only possible with a zero-HP start) there
    /// is no victor.
    #[must_use]
    pub const fn victor(&self) -> Option<Side> {
        match (self.player_hp, self.bot_hp) {
            (0, 0) => None,
            (_, 0) => Some(Side::Player),
            (0, _) => Some(Side::Bot),
            _ => None,
        }
    }
}

impl Default for BattleState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HP)
    }
}
