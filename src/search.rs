//! Memoized outcome classification
//!
//! Depth-first search over the reachable position graph. A per-query table
//! maps each visited position to its outcome; the in-progress sentinel is
//! inserted before a position's successors are explored, so a revisit on the
//! current path returns immediately instead of recursing forever.
//!
//! The termination rule is one-sided: player 0's forced win is the quantity
//! being proven. On player 0's turn any winning successor settles the
//! position as a win; on player 1's turn any settled non-winning successor
//! settles it as a loss. An exhausted scan defaults to loss on player 0's
//! turn and win on player 1's.

use super::moves::successors;
use super::position::Position;
use super::types::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

pub(crate) static NODE_COUNT: AtomicU64 = AtomicU64::new(0);
pub(crate) static SHOW_PERF: AtomicBool = AtomicBool::new(false);

/// Get the number of positions expanded by the last solve (for profiling)
pub fn get_node_count() -> u64 {
    NODE_COUNT.load(Ordering::Relaxed)
}

/// Set show-perf mode (outputs a [PERF] line to stderr after each solve)
pub fn set_show_perf(enabled: bool) {
    SHOW_PERF.store(enabled, Ordering::Relaxed);
}

/// Outcome table for one top-level query
///
/// Entries are inserted with `Outcome::InProgress` when a position is first
/// visited and overwritten with the final value once classification
/// completes. The table is created empty per query and discarded afterward.
#[derive(Default)]
pub struct Table {
    entries: HashMap<Position, Outcome>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Table {
            entries: HashMap::new(),
        }
    }

    /// Get the stored outcome for a position, if it has been visited
    #[inline]
    pub fn get(&self, position: &Position) -> Option<Outcome> {
        self.entries.get(position).copied()
    }

    /// Get the number of visited positions
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no position has been visited
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    fn set(&mut self, position: Position, outcome: Outcome) {
        self.entries.insert(position, outcome);
    }
}

/// Classify a position, memoizing every visited position in `table`.
///
/// Top-level callers always receive a final value; `Outcome::InProgress`
/// only surfaces to recursive calls that revisit a position still on the
/// evaluation path.
pub fn classify(position: Position, table: &mut Table) -> Outcome {
    if let Some(outcome) = table.get(&position) {
        return outcome;
    }
    table.set(position, Outcome::InProgress);
    NODE_COUNT.fetch_add(1, Ordering::Relaxed);

    // A dead player settles the position no matter whose turn it is
    if position.player(PLAYER_ZERO).is_dead() {
        table.set(position, Outcome::ForcedLoss);
        return Outcome::ForcedLoss;
    }
    if position.player(PLAYER_ONE).is_dead() {
        table.set(position, Outcome::ForcedWin);
        return Outcome::ForcedWin;
    }

    let turn = position.turn();
    for next in successors(position) {
        let outcome = classify(next, table);
        if outcome == Outcome::InProgress {
            continue; // still open on the current path
        }
        if turn == PLAYER_ZERO && outcome == Outcome::ForcedWin {
            table.set(position, Outcome::ForcedWin);
            return Outcome::ForcedWin;
        }
        if turn == PLAYER_ONE && outcome != Outcome::ForcedWin {
            table.set(position, Outcome::ForcedLoss);
            return Outcome::ForcedLoss;
        }
    }

    let outcome = if turn == PLAYER_ZERO {
        Outcome::ForcedLoss
    } else {
        Outcome::ForcedWin
    };
    table.set(position, outcome);
    outcome
}

/// Find the first successor that classifies as a forced win, reusing and
/// populating `table`. Returns None when no such move exists.
pub fn find_winning_move(position: Position, table: &mut Table) -> Option<Position> {
    successors(position)
        .into_iter()
        .find(|&next| classify(next, table) == Outcome::ForcedWin)
}

/// Whole-game solver for one start position
pub struct Solver {
    start: Position,
}

impl Solver {
    /// Create a new solver
    pub fn new(start: Position) -> Self {
        Solver { start }
    }

    /// Solve with a fresh table
    pub fn solve(&self) -> Outcome {
        let mut table = Table::new();
        self.solve_with_table(&mut table)
    }

    /// Solve with an external table (allows a follow-up winning-move query
    /// against the same table)
    pub fn solve_with_table(&self, table: &mut Table) -> Outcome {
        NODE_COUNT.store(0, Ordering::Relaxed);
        let start_time = std::time::Instant::now();
        let outcome = classify(self.start, table);
        if SHOW_PERF.load(Ordering::Relaxed) {
            let elapsed = start_time.elapsed();
            let expanded = NODE_COUNT.load(Ordering::Relaxed);
            let ns_per_position = if expanded > 0 {
                elapsed.as_nanos() as f64 / expanded as f64
            } else {
                0.0
            };
            eprintln!(
                "[PERF] positions={}, time={:.3}s, ns/position={:.1}",
                expanded,
                elapsed.as_secs_f64(),
                ns_per_position
            );
        }
        outcome
    }

    /// Classify the start position, then extract one winning move
    pub fn winning_move(&self, table: &mut Table) -> Option<Position> {
        classify(self.start, table);
        find_winning_move(self.start, table)
    }
}
