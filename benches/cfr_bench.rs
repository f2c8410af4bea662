//! Benchmarks for the CFR trainer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rps_cfr::cfr::{CumulativeRegret, Strategy, Trainer, TrainerConfig};
use rps_cfr::games::rps::RockPaperScissors;

fn rps_iteration_benchmark(c: &mut Criterion) {
    let config = TrainerConfig::default().with_seed(42);
    let mut trainer = Trainer::new(RockPaperScissors, config);

    c.bench_function("rps_single_iteration", |b| {
        b.iter(|| {
            // Histories grow by one entry per iteration.
            if trainer.iteration() >= 100_000 {
                trainer.reset();
            }
            trainer.run_iteration();
            black_box(trainer.iteration())
        })
    });
}

fn rps_10000_iterations_benchmark(c: &mut Criterion) {
    c.bench_function("rps_10000_iterations", |b| {
        b.iter(|| {
            let config = TrainerConfig::default().with_seed(42);
            let mut trainer = Trainer::new(RockPaperScissors, config);
            trainer.train(black_box(10_000))
        })
    });
}

fn regret_matching_benchmark(c: &mut Criterion) {
    let regrets = CumulativeRegret::from_values([12.0, -3.0, 7.5]);
    c.bench_function("regret_matching", |b| {
        b.iter(|| Strategy::from_regrets(black_box(&regrets)))
    });
}

criterion_group!(
    benches,
    rps_iteration_benchmark,
    rps_10000_iterations_benchmark,
    regret_matching_benchmark
);
criterion_main!(benches);
