//! chopsticks-solver - forced-outcome query for one start position
//!
//! Classifies a Chopsticks position for the player to move and prints the
//! outcome name ("guaranteed win" / "possible loss"). With --move, also
//! prints one winning successor position, or "no winning move found".
//!
//! Usage: chopsticks-solver [HAND HAND HAND HAND] [--turn <0|1>] [--move]

use chopsticks_solver::{set_show_perf, Player, Position, Solver, Table};
use clap::Parser;

#[derive(Parser)]
#[command(name = "chopsticks-solver")]
#[command(about = "Forced win/loss search for the finger game Chopsticks")]
#[command(version)]
struct Args {
    /// Hand values: player-0 hand A, player-0 hand B, player-1 hand A,
    /// player-1 hand B (each 0-4)
    #[arg(value_name = "HAND", num_args = 4, default_values_t = [1u8, 1, 1, 1])]
    hands: Vec<u8>,

    /// Player to move first
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u64).range(0..=1))]
    turn: u64,

    /// Also print a winning move when one exists
    #[arg(short = 'm', long = "move")]
    show_move: bool,

    /// Show search statistics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        set_show_perf(true);
    }

    let player0 = match Player::checked(args.hands[0], args.hands[1]) {
        Some(p) => p,
        None => {
            eprintln!("Error: hand values must be between 0 and 4");
            std::process::exit(1);
        }
    };
    let player1 = match Player::checked(args.hands[2], args.hands[3]) {
        Some(p) => p,
        None => {
            eprintln!("Error: hand values must be between 0 and 4");
            std::process::exit(1);
        }
    };

    let start = Position::new(player0, player1, args.turn as usize);
    let solver = Solver::new(start);

    let mut table = Table::new();
    let outcome = solver.solve_with_table(&mut table);
    println!("{}", outcome);

    if args.show_move {
        match solver.winning_move(&mut table) {
            Some(next) => println!("{}", next),
            None => println!("no winning move found"),
        }
    }
}
