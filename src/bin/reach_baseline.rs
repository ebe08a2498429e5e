//! Baseline performance runner over random playout goals.
//!
//! Usage:
//! `cargo run --release --bin reach_baseline`
//! `cargo run --release --bin reach_baseline -- --plies 14 --games 20 --seed 7`

use rand::rngs::StdRng;
use rand::SeedableRng;

use flip_reach::search::reachability::{ReachabilitySearch, SearchConfig};
use flip_reach::utils::random_playout::random_playout;
use flip_reach::{BoardState, Player};

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return v;
            }
        }
    }
    default
}

fn main() -> Result<(), String> {
    env_logger::init();

    let plies = parse_arg_u64("--plies", 10) as usize;
    let games = parse_arg_u64("--games", 10).max(1);
    let seed = parse_arg_u64("--seed", 0);

    let start = BoardState::new_game();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut total_nodes = 0u64;
    let mut total_ms = 0i64;

    for game in 0..games {
        let first = if game % 2 == 0 { Player::Black } else { Player::White };
        let playout = random_playout(&start, first, plies, &mut rng);

        let mut now = start.snapshot();
        let mut search = ReachabilitySearch::new(
            &playout.goal,
            SearchConfig {
                progress_interval: 0,
                ..SearchConfig::default()
            },
        );
        let outcome = search.run(&mut now, first).map_err(|e| e.to_string())?;

        if !outcome.reachable {
            return Err(format!("game {game}: playout goal reported unreachable"));
        }

        println!(
            "game {game}: plies={} path_len={} {}",
            playout.moves.len(),
            outcome.path.len(),
            outcome.stats.report()
        );
        total_nodes += outcome.stats.nodes;
        total_ms += outcome.stats.elapsed_ms;
    }

    println!("total: games={games} nodes={total_nodes} elapsed_ms={total_ms}");
    Ok(())
}
