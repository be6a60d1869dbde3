use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use plum_draughts::game_state::game_state::GameState;
use plum_draughts::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_draughts::search::board_scoring::MaterialScorer;
use plum_draughts::search::negamax::{search_best_move, SearchConfig};

fn selected_depths() -> &'static [u8] {
    match std::env::var("PLUM_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => &[3, 5, 7],
        _ => &[3, 5],
    }
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("choose_best_move_startpos");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    let game = GameState::new_game();
    for &depth in selected_depths() {
        let run = |pruning| {
            search_best_move(
                &game,
                &LegalMoveGenerator,
                &MaterialScorer,
                SearchConfig {
                    max_depth: depth,
                    pruning,
                },
            )
            .expect("search should run")
        };

        // Both modes must agree before either is timed.
        let pruned = run(true);
        let full = run(false);
        assert_eq!(pruned.best_move, full.best_move, "best move mismatch at depth {depth}");
        assert!(pruned.nodes <= full.nodes);

        for pruning in [true, false] {
            let label = if pruning { "pruned" } else { "full" };
            group.bench_with_input(BenchmarkId::new(label, depth), &pruning, |b, &pruning| {
                b.iter(|| black_box(run(black_box(pruning)).nodes));
            });
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
