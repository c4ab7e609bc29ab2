use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pathwise_benchmarks::{grid_heuristic, grid_problem};
use pathwise_harness::scenarios::facility;
use pathwise_search::search::{a_star, breadth_first, depth_first, uniform_cost};

fn bench_facility(c: &mut Criterion) {
    let mut group = c.benchmark_group("facility_alert_response");
    let problem = facility::alert_response().unwrap();
    let heuristic = facility::heuristic_to_server_room();

    group.bench_function("dfs", |b| {
        b.iter(|| black_box(depth_first(&problem, None).unwrap()));
    });
    group.bench_function("bfs", |b| {
        b.iter(|| black_box(breadth_first(&problem, None).unwrap()));
    });
    group.bench_function("ucs", |b| {
        b.iter(|| black_box(uniform_cost(&problem, None).unwrap()));
    });
    group.bench_function("a_star", |b| {
        b.iter(|| black_box(a_star(&problem, &heuristic, None).unwrap()));
    });
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_corner_to_corner");
    for &n in &[8u32, 16, 32] {
        let problem = grid_problem(n);
        let heuristic = grid_heuristic(n);

        group.bench_with_input(BenchmarkId::new("ucs", n), &problem, |b, problem| {
            b.iter(|| black_box(uniform_cost(problem, None).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("a_star", n), &problem, |b, problem| {
            b.iter(|| black_box(a_star(problem, &heuristic, None).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("bfs", n), &problem, |b, problem| {
            b.iter(|| black_box(breadth_first(problem, None).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_facility, bench_grid);
criterion_main!(benches);
