//! Terminal front-end for the connect-five game
//!
//! Renders the grid as text, reads `row col` moves from stdin, and drives
//! the turn cycle. All game logic lives in the library; this binary is only
//! the presentation collaborator.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use caro::{Engine, Game, GameOutcome, Phase, Pos, Seat, Stone, BOARD_SIZE};

#[derive(Debug, Parser)]
#[command(name = "caro", about = "Connect-five against a heuristic bot")]
struct Args {
    /// Let the bot make the opening move
    #[arg(long)]
    bot_first: bool,

    /// Seed for the engine's candidate down-sampling (reproducible games)
    #[arg(long)]
    seed: Option<u64>,

    /// Artificial "thinking" delay before the bot replies, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let starter = if args.bot_first { Seat::Bot } else { Seat::Human };
    let engine = match args.seed {
        Some(seed) => Engine::with_seed(seed),
        None => Engine::new(),
    };
    let mut game = Game::with_engine(starter, engine);

    println!("Connect five on a {0}x{0} board. You are X, the bot is O.", BOARD_SIZE);
    println!("Enter moves as `row col` (0-indexed), or `q` to quit.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match game.phase() {
            Phase::HumanTurn => {
                print_board(&game);
                print!("your move> ");
                io::stdout().flush()?;

                let Some(line) = lines.next() else { break };
                let line = line?;
                let input = line.trim();
                if input.eq_ignore_ascii_case("q") {
                    break;
                }

                let Some((row, col)) = parse_move(input) else {
                    println!("expected `row col`, e.g. `7 7`");
                    continue;
                };

                if let Err(err) = game.apply_human_move(row, col) {
                    println!("rejected: {err}");
                }
            }
            Phase::BotTurn => {
                if args.delay_ms > 0 {
                    thread::sleep(Duration::from_millis(args.delay_ms));
                }
                match game.apply_bot_move() {
                    Ok(outcome) => {
                        if let Some(pos) = outcome.placed {
                            println!("bot plays ({}, {})", pos.row, pos.col);
                        }
                    }
                    Err(err) => {
                        println!("bot error: {err}");
                        break;
                    }
                }
            }
            Phase::Over(outcome) => {
                print_board(&game);
                match outcome {
                    GameOutcome::Win { seat: Seat::Human, line } => {
                        println!("You win! Line: {}", format_line(&line));
                    }
                    GameOutcome::Win { seat: Seat::Bot, line } => {
                        println!("The bot wins. Line: {}", format_line(&line));
                    }
                    GameOutcome::Draw => println!("Draw: the board is full."),
                }

                print!("play again? [y/N] ");
                io::stdout().flush()?;
                let Some(line) = lines.next() else { break };
                if line?.trim().eq_ignore_ascii_case("y") {
                    game.reset();
                    let starter = match game.starter() {
                        Seat::Human => "you",
                        Seat::Bot => "the bot",
                    };
                    println!("new game; {starter} start(s).\n");
                } else {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn parse_move(input: &str) -> Option<(i32, i32)> {
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn format_line(line: &[Pos; 5]) -> String {
    line.iter()
        .map(|p| format!("({}, {})", p.row, p.col))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_board(game: &Game) {
    let board = game.board();

    print!("   ");
    for c in 0..BOARD_SIZE {
        print!("{:2}", c);
    }
    println!();

    for r in 0..BOARD_SIZE {
        print!("{:2} ", r);
        for c in 0..BOARD_SIZE {
            let pos = Pos::new(r as u8, c as u8);
            let ch = match board.get(pos) {
                Stone::Black => " X",
                Stone::White => " O",
                Stone::Empty => " .",
            };
            print!("{}", ch);
        }
        println!();
    }
}
