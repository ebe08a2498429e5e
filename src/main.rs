//! Reachability driver.
//!
//! Usage:
//! `cargo run --release`
//! `cargo run --release -- --goal goal.txt --first white`
//!
//! Without `--goal` the flat-rose opening shape is used. A goal file holds
//! eight rows of `.`/`x`/`o`, one per line; surrounding whitespace on each
//! line and blank lines are ignored. Set `RUST_LOG=info` for progress lines,
//! `RUST_LOG=debug` to add board snapshots.

use std::process::ExitCode;

use log::info;

use flip_reach::search::reachability::{ReachabilitySearch, SearchConfig};
use flip_reach::utils::algebraic::format_path;
use flip_reach::utils::board_literal::FLAT_ROSE_GOAL;
use flip_reach::utils::render_board_state::render_board_state;
use flip_reach::{BoardError, BoardState, Player};

fn parse_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_player(text: &str) -> Option<Player> {
    match text.to_ascii_lowercase().as_str() {
        "black" | "x" => Some(Player::Black),
        "white" | "o" => Some(Player::White),
        _ => None,
    }
}

fn load_goal(path: Option<&str>) -> Result<BoardState, String> {
    let Some(path) = path else {
        return BoardState::from_literal(&FLAT_ROSE_GOAL).map_err(|e| e.to_string());
    };

    let text = std::fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?;
    BoardState::from_text(&text).map_err(|e: BoardError| format!("{path}: {e}"))
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let first = match parse_arg(&args, "--first").map(parse_player) {
        None => Player::Black,
        Some(Some(player)) => player,
        Some(None) => {
            eprintln!("Error: --first expects black or white");
            return ExitCode::FAILURE;
        }
    };
    let progress_interval = parse_arg(&args, "--progress")
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(SearchConfig::default().progress_interval);

    let mut board = BoardState::new_game();
    println!("{}\n", render_board_state(&board));

    let goal = match load_goal(parse_arg(&args, "--goal")) {
        Ok(goal) => goal,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("{}\n", render_board_state(&goal));

    let config = SearchConfig {
        progress_interval,
        ..SearchConfig::default()
    };
    let mut search = ReachabilitySearch::new(&goal, config);

    match search.run(&mut board, first) {
        Ok(outcome) => {
            info!("search stats: {}", outcome.stats.report());
            if outcome.reachable {
                if !outcome.path.is_empty() {
                    println!("{}", format_path(&outcome.path));
                }
                println!("reachable");
            } else {
                println!("not reachable");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
