//! Game position: both players' hands plus whose turn it is
//!
//! A position is a pure value. Equality and hashing are structural over the
//! two normalized hand pairs and the turn indicator; the two player ids are
//! distinct roles, never interchangeable.

use super::player::Player;
use super::types::*;

/// One game position
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    players: [Player; NUM_PLAYERS],
    turn: Turn,
}

impl Position {
    /// Create a position from both players and the player to move
    #[inline]
    pub fn new(player0: Player, player1: Player, turn: Turn) -> Self {
        Position {
            players: [player0, player1],
            turn,
        }
    }

    /// Create a position from four raw hand values
    /// (player-0 hand A, player-0 hand B, player-1 hand A, player-1 hand B)
    #[inline]
    pub fn from_hands(hands: [Hand; 4], turn: Turn) -> Self {
        Position::new(
            Player::new(hands[0], hands[1]),
            Player::new(hands[2], hands[3]),
            turn,
        )
    }

    /// Get a player's hands by id
    #[inline]
    pub fn player(&self, id: Turn) -> Player {
        self.players[id]
    }

    /// Get the player id that moves next
    #[inline]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Get the hands of the player to move
    #[inline]
    pub fn to_move(&self) -> Player {
        self.players[self.turn]
    }

    /// Get the hands of the player waiting
    #[inline]
    pub fn opponent(&self) -> Player {
        self.players[other(self.turn)]
    }
}

impl std::fmt::Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "P0{:?} P1{:?} turn {}",
            self.players[PLAYER_ZERO], self.players[PLAYER_ONE], self.turn
        )
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Player 0: {}", self.players[PLAYER_ZERO])?;
        writeln!(f, "Player 1: {}", self.players[PLAYER_ONE])?;
        write!(f, "To move: {}", player_name(self.turn))
    }
}
