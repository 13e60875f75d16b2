//! Core type definitions for the Chopsticks game

/// Fingers on one hand: 0 (dead) through 4
pub type Hand = u8;
pub const MAX_FINGERS: Hand = 4;
/// A hand reaching this many fingers during an attack rolls over to dead
pub const HAND_LIMIT: Hand = 5;
pub const NUM_HANDS: usize = 2;

/// Player ids: PLAYER_ZERO=0, PLAYER_ONE=1
pub type Turn = usize;
pub const PLAYER_ZERO: Turn = 0;
pub const PLAYER_ONE: Turn = 1;
pub const NUM_PLAYERS: usize = 2;

/// Get the other player id
#[inline]
pub fn other(turn: Turn) -> Turn {
    1 - turn
}

/// Get player name
pub fn player_name(turn: Turn) -> &'static str {
    const NAMES: [&str; 2] = ["Player 0", "Player 1"];
    NAMES[turn]
}

/// Classification of a position for the player to move.
///
/// `ForcedWin` and `ForcedLoss` are the only values ever stored as a final
/// answer. `InProgress` marks a position whose evaluation is still on the
/// call stack. `Indeterminate` is reserved for searches that terminate
/// without proving either forced outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    ForcedWin,
    ForcedLoss,
    Indeterminate,
}

impl Outcome {
    /// Get the display name
    pub fn name(self) -> &'static str {
        match self {
            Outcome::InProgress => "processing",
            Outcome::ForcedWin => "guaranteed win",
            Outcome::ForcedLoss => "possible loss",
            Outcome::Indeterminate => "draw",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
