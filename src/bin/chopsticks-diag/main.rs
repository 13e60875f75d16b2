//! chopsticks-diag - classify the whole reachable state space
//!
//! Runs a fresh query for every distinct position (normalized hand pairs
//! 0-4 for both players, either player to move) and prints the win/loss
//! tally. Useful for eyeballing solver behavior across the full game.
//!
//! Usage: chopsticks-diag [-d] [-V]
//!   -d  dump every position with its outcome
//!   -V  show total expanded positions and timing

use chopsticks_solver::{get_node_count, Outcome, Position, Solver, MAX_FINGERS};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut dump = false;
    let mut show_stats = false;
    let mut i = 1;
    while i < args.len() {
        if args[i] == "-d" {
            dump = true;
        } else if args[i] == "-V" {
            show_stats = true;
        } else {
            eprintln!("Usage: chopsticks-diag [-d] [-V]");
            std::process::exit(1);
        }
        i += 1;
    }

    let start_time = Instant::now();
    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut expanded = 0u64;

    for a in 0..=MAX_FINGERS {
        for b in 0..=a {
            for c in 0..=MAX_FINGERS {
                for d in 0..=c {
                    for turn in [0, 1] {
                        let position = Position::from_hands([a, b, c, d], turn);
                        let outcome = Solver::new(position).solve();
                        expanded += get_node_count();
                        match outcome {
                            Outcome::ForcedWin => wins += 1,
                            Outcome::ForcedLoss => losses += 1,
                            _ => {}
                        }
                        if dump {
                            println!("{:?}: {}", position, outcome);
                        }
                    }
                }
            }
        }
    }

    println!("positions: {}", wins + losses);
    println!("guaranteed win: {}", wins);
    println!("possible loss: {}", losses);

    if show_stats {
        let elapsed = start_time.elapsed();
        eprintln!(
            "[PERF] queries={}, expanded={}, time={:.3}s",
            wins + losses,
            expanded,
            elapsed.as_secs_f64()
        );
    }
}
