//! Criterion benchmarks for u-loadplan.
//!
//! Uses a synthetic backlog with a mix of on-time and late items.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_loadplan::fitness::{evaluate, ScoringPolicy};
use u_loadplan::ga::{GaConfig, GaRunner};
use u_loadplan::model::{FleetSpec, Item};
use u_loadplan::planner::LoadPlanner;

fn backlog(n: u64) -> Vec<Item> {
    (0..n)
        .map(|i| {
            let weight = 10.0 + (i * 37 % 90) as f64;
            let volume = 10.0 + (i * 53 % 120) as f64;
            let profit = 20.0 + (i * 71 % 180) as f64;
            let deadline = (i as i64 * 13 % 11) - 5;
            Item::new(i, weight, volume, profit, deadline)
        })
        .collect()
}

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");
    let fleet = FleetSpec::default();

    for &n in &[100u64, 500, 2000] {
        let items = backlog(n);
        for policy in [ScoringPolicy::Triage, ScoringPolicy::ProfitSum] {
            group.bench_with_input(
                BenchmarkId::new(format!("{policy:?}"), n),
                &items,
                |b, items| b.iter(|| evaluate(black_box(items), &fleet, policy)),
            );
        }
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_loadplan");
    group.sample_size(10);

    for (n, pop, gen) in [(100u64, 50usize, 30usize), (500, 100, 20)] {
        let planner = LoadPlanner::new(backlog(n), FleetSpec::default()).expect("valid instance");
        let config = GaConfig {
            population_size: pop,
            max_generations: gen,
            patience: 0,
            seed: Some(42),
            ..GaConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gen), n),
            &(planner, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_ga);
criterion_main!(benches);
