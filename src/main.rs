//! Gomoku terminal driver
//!
//! Plays a human (Black) against the engine (White) on stdin/stdout:
//! read a coordinate, apply it, let the engine reply, re-render, repeat
//! until the game ends.

use std::io::{self, BufRead, Write};

use clap::Parser;

use gomoku::{CandidatePolicy, Engine, EngineConfig, Game, GameError, Pos, Stone};

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Play Gomoku against the minimax engine")]
struct Args {
    /// Board size (5 to 20)
    #[arg(long, default_value_t = 15)]
    size: usize,

    /// Search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Inclusion probability for distance-2 candidate cells (1.0 = all)
    #[arg(long, default_value_t = 1.0)]
    distance_two_probability: f64,

    /// Seed for the candidate sampler (only used below probability 1.0)
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<(), GameError> {
    env_logger::init();
    let args = Args::parse();

    let mut game = Game::new(args.size)?;
    let mut engine = Engine::with_config(EngineConfig {
        max_depth: args.depth,
        candidate_policy: CandidatePolicy {
            distance_two_probability: args.distance_two_probability,
        },
        seed: args.seed,
    });

    println!("Gomoku {0}x{0}, search depth {1}", args.size, args.depth);
    println!("You are X (Black). Enter moves as: row col\n");
    print_board(&game);

    let stdin = io::stdin();
    while !game.is_over() {
        // Human turn
        let pos = loop {
            print!("your move> ");
            let _ = io::stdout().flush();
            let mut input = String::new();
            if stdin.lock().read_line(&mut input).unwrap_or(0) == 0 {
                println!("\ninput closed, goodbye");
                return Ok(());
            }
            match parse_move(&input) {
                Some(pos) if game.is_empty(pos) => break pos,
                Some(_) => println!("that cell is occupied or off the board"),
                None => println!("expected two numbers, e.g. `7 7`"),
            }
        };
        game.play(pos);
        print_board(&game);
        if game.is_over() {
            break;
        }

        // Engine turn
        let result = engine.find_best_move_with_stats(&game)?;
        game.play(result.best_move);
        println!(
            "engine plays ({}, {})  [score {}, {} nodes]",
            result.best_move.row, result.best_move.col, result.score, result.nodes
        );
        print_board(&game);
    }

    match game.winner() {
        Some(Stone::Black) => println!("you win!"),
        Some(Stone::White) => println!("the engine wins."),
        _ => println!("draw."),
    }
    Ok(())
}

fn parse_move(input: &str) -> Option<Pos> {
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    Some(Pos::new(row, col))
}

fn print_board(game: &Game) {
    let grid = game.snapshot();
    let size = grid.size();

    print!("   ");
    for c in 0..size {
        print!("{c:2}");
    }
    println!();

    for r in 0..size {
        print!("{r:2} ");
        for c in 0..size {
            let ch = match grid.get(Pos::new(r, c)) {
                Stone::Black => " X",
                Stone::White => " O",
                Stone::Empty => " .",
            };
            print!("{ch}");
        }
        println!();
    }
    println!();
}
