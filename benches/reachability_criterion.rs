use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use flip_reach::search::reachability::{ReachabilitySearch, SearchConfig};
use flip_reach::utils::random_playout::random_playout;
use flip_reach::{BoardState, Player};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    seed: u64,
    first: Player,
    plies: usize,
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "black_6",
        seed: 1,
        first: Player::Black,
        plies: 6,
    },
    BenchCase {
        name: "white_8",
        seed: 2,
        first: Player::White,
        plies: 8,
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "black_6",
        seed: 1,
        first: Player::Black,
        plies: 6,
    },
    BenchCase {
        name: "white_8",
        seed: 2,
        first: Player::White,
        plies: 8,
    },
    BenchCase {
        name: "black_10",
        seed: 3,
        first: Player::Black,
        plies: 10,
    },
    BenchCase {
        name: "white_12",
        seed: 4,
        first: Player::White,
        plies: 12,
    },
];

fn suite_name() -> &'static str {
    match std::env::var("FLIP_REACH_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn quiet() -> SearchConfig {
    SearchConfig {
        progress_interval: 0,
        ..SearchConfig::default()
    }
}

fn bench_reachability(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("reachability_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    let start = BoardState::new_game();

    for case in selected_cases() {
        let playout = random_playout(
            &start,
            case.first,
            case.plies,
            &mut StdRng::seed_from_u64(case.seed),
        );

        // Correctness guard before benchmarking.
        let mut now = start.snapshot();
        let warmup = ReachabilitySearch::new(&playout.goal, quiet())
            .run(&mut now, case.first)
            .expect("search should run");
        assert!(warmup.reachable, "playout goal for {} must be reachable", case.name);

        group.throughput(Throughput::Elements(warmup.stats.nodes));
        group.bench_with_input(
            BenchmarkId::from_parameter(case.name),
            &playout.goal,
            |b, goal| {
                b.iter(|| {
                    let mut now = start.snapshot();
                    let outcome = ReachabilitySearch::new(black_box(goal), quiet())
                        .run(&mut now, black_box(case.first))
                        .expect("search benchmark run should succeed");
                    assert!(outcome.reachable);
                    black_box(outcome.stats.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(reachability_benches, bench_reachability);
criterion_main!(reachability_benches);
