//! Chopsticks Forced-Outcome Solver
//!
//! Exhaustive solver for the two-player finger-counting game "Chopsticks":
//! given a start position, decides whether the player to move can force a
//! win or is guaranteed to lose, and can extract one winning move.
//!
//! The algorithm uses:
//! - Depth-first search over the reachable position graph
//! - A per-query outcome table keyed by hand-order-normalized positions
//! - An in-progress sentinel inserted before expansion, so revisits on the
//!   current path terminate instead of recursing forever
//!
//! # Example
//!
//! ```
//! use chopsticks_solver::{Outcome, Player, Position, Solver, Table, PLAYER_ZERO};
//!
//! let start = Position::new(Player::new(1, 1), Player::new(1, 1), PLAYER_ZERO);
//! let solver = Solver::new(start);
//!
//! let mut table = Table::new();
//! assert_eq!(solver.solve_with_table(&mut table), Outcome::ForcedLoss);
//! assert!(solver.winning_move(&mut table).is_none());
//! ```

mod moves;
mod player;
mod position;
mod search;
pub mod types;

pub use moves::successors;
pub use player::Player;
pub use position::Position;
pub use search::{classify, find_winning_move, get_node_count, set_show_perf, Solver, Table};
pub use types::{other, player_name, Hand, Outcome, Turn};
pub use types::{HAND_LIMIT, MAX_FINGERS, NUM_HANDS, NUM_PLAYERS, PLAYER_ONE, PLAYER_ZERO};
