//! Legal move generation
//!
//! Two move classes exist: attacks (one live hand strikes one live opposing
//! hand, the target rolling over to dead at five or more fingers) and splits
//! (the mover redistributes their total across both hands). Successors are
//! generated attacks first, then splits by ascending low hand, so the order
//! is reproducible.

use super::player::Player;
use super::position::Position;
use super::types::*;

/// Rebuild a position from the mover's and opponent's hands, turn flipped
#[inline]
fn next_position(turn: Turn, mover: Player, opponent: Player) -> Position {
    if turn == PLAYER_ZERO {
        Position::new(mover, opponent, PLAYER_ONE)
    } else {
        Position::new(opponent, mover, PLAYER_ZERO)
    }
}

/// Generate every position reachable in one move by the player to move.
///
/// Dead hands never attack and are never attacked. Equal-valued hands on
/// either side would produce identical strikes, so only one is kept. A split
/// reproducing the current pair is not a move. A player with both hands dead
/// has no moves at all; callers treat that case as terminal before asking.
pub fn successors(position: Position) -> Vec<Position> {
    let turn = position.turn();
    let mover = position.to_move();
    let opponent = position.opponent();
    let mut next_positions = Vec::new();

    // Attacks: each live hand can strike either live opposing hand
    for i in 0..NUM_HANDS {
        let strength = mover.hand(i);
        if strength == 0 {
            continue;
        }
        if i > 0 && strength == mover.hand(0) {
            continue; // same strike as the first hand
        }
        for j in 0..NUM_HANDS {
            let target = opponent.hand(j);
            if target == 0 {
                continue;
            }
            if j > 0 && target == opponent.hand(0) {
                continue; // same target value as the first hand
            }
            let mut struck = target + strength;
            if struck >= HAND_LIMIT {
                struck = 0;
            }
            let new_opponent = Player::new(opponent.hand(1 - j), struck);
            next_positions.push(next_position(turn, mover, new_opponent));
        }
    }

    // Splits: redistribute the mover's total into a different pair.
    // The lower bound keeps both resulting hands at four or less; the upper
    // bound visits each unordered pair once.
    let total = mover.total();
    for low in total.saturating_sub(MAX_FINGERS)..=total / 2 {
        let split = Player::new(low, total - low);
        if split == mover {
            continue;
        }
        next_positions.push(next_position(turn, split, opponent));
    }

    next_positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn successor_set(hands: [Hand; 4], turn: Turn) -> Vec<Position> {
        successors(Position::from_hands(hands, turn))
    }

    #[test]
    fn test_start_position_moves() {
        // Four attacks collapse to one distinct strike, plus the (2, 0) split
        let moves = successor_set([1, 1, 1, 1], PLAYER_ZERO);
        assert_eq!(
            moves,
            vec![
                Position::from_hands([1, 1, 2, 1], PLAYER_ONE),
                Position::from_hands([2, 0, 1, 1], PLAYER_ONE),
            ]
        );
    }

    #[test]
    fn test_attacks_roll_over_to_dead() {
        // (4, 0) attacking (2, 1): both strikes reach five and kill the target
        let moves = successor_set([4, 0, 2, 1], PLAYER_ZERO);
        assert_eq!(
            moves,
            vec![
                Position::from_hands([4, 0, 1, 0], PLAYER_ONE),
                Position::from_hands([4, 0, 2, 0], PLAYER_ONE),
                Position::from_hands([3, 1, 2, 1], PLAYER_ONE),
                Position::from_hands([2, 2, 2, 1], PLAYER_ONE),
            ]
        );
    }

    #[test]
    fn test_player_one_moves_mirror_roles() {
        // Player 1 holding (3, 2) attacks player 0's lone live hand
        let moves = successor_set([1, 0, 3, 2], PLAYER_ONE);
        assert_eq!(
            moves,
            vec![
                Position::from_hands([4, 0, 3, 2], PLAYER_ZERO),
                Position::from_hands([3, 0, 3, 2], PLAYER_ZERO),
                Position::from_hands([1, 0, 4, 1], PLAYER_ZERO),
            ]
        );
    }

    #[test]
    fn test_split_rejects_current_pair() {
        // (2, 1) can only split to (3, 0); (2, 1) itself is a no-op
        let moves = successor_set([2, 1, 3, 1], PLAYER_ZERO);
        let splits: Vec<_> = moves
            .iter()
            .filter(|p| p.player(PLAYER_ONE) == Player::new(3, 1))
            .collect();
        assert_eq!(splits.len(), 1);
        assert_eq!(splits[0].player(PLAYER_ZERO), Player::new(3, 0));
    }

    #[test]
    fn test_split_bounds_cap_hands_at_four() {
        // Total 6 splits only to (4, 2); (3, 3) is the current pair, (5, 1)
        // and (6, 0) would push a hand past four
        let moves = successor_set([3, 3, 2, 2], PLAYER_ZERO);
        assert_eq!(
            moves,
            vec![
                Position::from_hands([3, 3, 2, 0], PLAYER_ONE),
                Position::from_hands([4, 2, 2, 2], PLAYER_ONE),
            ]
        );
    }

    #[test]
    fn test_dead_mover_has_no_moves() {
        assert!(successor_set([0, 0, 3, 3], PLAYER_ZERO).is_empty());
        assert!(successor_set([3, 3, 0, 0], PLAYER_ONE).is_empty());
    }

    #[test]
    fn test_every_successor_is_legal() {
        for a in 0..=MAX_FINGERS {
            for b in 0..=a {
                for c in 0..=MAX_FINGERS {
                    for d in 0..=c {
                        for turn in [PLAYER_ZERO, PLAYER_ONE] {
                            let position = Position::from_hands([a, b, c, d], turn);
                            for next in successors(position) {
                                assert_eq!(next.turn(), other(turn));
                                for id in [PLAYER_ZERO, PLAYER_ONE] {
                                    assert!(next.player(id).hand(0) <= MAX_FINGERS);
                                }
                                // every move changes some pair of hands
                                assert!(
                                    next.player(PLAYER_ZERO) != position.player(PLAYER_ZERO)
                                        || next.player(PLAYER_ONE) != position.player(PLAYER_ONE)
                                );
                                // the waiting player's hands are untouched by splits,
                                // and the mover's hands are untouched by attacks
                                assert!(
                                    next.player(turn) == position.player(turn)
                                        || next.player(other(turn)) == position.player(other(turn))
                                );
                            }
                        }
                    }
                }
            }
        }
    }
}
