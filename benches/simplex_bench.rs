//! Criterion benchmarks for the tableau simplex solver.
//!
//! Uses randomly generated feasible, bounded problems (positive `<=` rows
//! for the primal method, positive `>=` rows with positive costs for the
//! dual method) up to the 10×10 size the solver is meant for.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_simplex::problem::{Constraint, Problem};
use u_simplex::render::render_result;
use u_simplex::{solve_dual, solve_primal};

fn packing(n: usize, m: usize, seed: u64) -> Problem {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut problem = Problem::maximize((0..n).map(|_| rng.random_range(1.0..10.0)).collect());
    for _ in 0..m {
        let row = (0..n).map(|_| rng.random_range(0.5..5.0)).collect();
        problem.add_constraint(Constraint::at_most(row, rng.random_range(10.0..100.0)));
    }
    problem
}

fn covering(n: usize, m: usize, seed: u64) -> Problem {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut problem = Problem::minimize((0..n).map(|_| rng.random_range(1.0..10.0)).collect());
    for _ in 0..m {
        let row = (0..n).map(|_| rng.random_range(0.5..5.0)).collect();
        problem.add_constraint(Constraint::at_least(row, rng.random_range(10.0..100.0)));
    }
    problem
}

fn bench_primal(c: &mut Criterion) {
    let mut group = c.benchmark_group("primal_packing");
    for &size in &[2, 5, 10] {
        let problem = packing(size, size, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &problem, |b, p| {
            b.iter(|| black_box(solve_primal(black_box(p))))
        });
    }
    group.finish();
}

fn bench_dual(c: &mut Criterion) {
    let mut group = c.benchmark_group("dual_covering");
    for &size in &[2, 5, 10] {
        let problem = covering(size, size, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &problem, |b, p| {
            b.iter(|| black_box(solve_dual(black_box(p))))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let result = solve_primal(&packing(10, 10, 7));
    c.bench_function("render_10x10_trace", |b| {
        b.iter(|| black_box(render_result(black_box(&result))))
    });
}

criterion_group!(benches, bench_primal, bench_dual, bench_render);
criterion_main!(benches);
