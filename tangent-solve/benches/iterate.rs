use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tangent_solve::{
    Difference,
    newton::{self, Config},
};

criterion_main!(benches);
criterion_group!(benches, walkthrough, tolerance);

fn curve(x: f64) -> f64 {
    1.0 - x * x + x.exp2()
}

pub fn walkthrough(c: &mut Criterion) {
    let mut group = c.benchmark_group("walkthrough");
    for difference in [Difference::Forward, Difference::Central] {
        let config = Config {
            difference,
            ..Config::default()
        };
        group.bench_function(BenchmarkId::from_parameter(format!("{difference:?}")), |b| {
            b.iter(|| black_box(newton::iterate(&curve, black_box(0.9), &config)));
        });
    }
    group.finish();
}

pub fn tolerance(c: &mut Criterion) {
    let mut group = c.benchmark_group("tolerance");
    for tolerance in [1e-3, 1e-6, 1e-9, 1e-12] {
        let config = Config {
            tolerance,
            ..Config::default()
        };
        group.bench_function(BenchmarkId::from_parameter(tolerance), |b| {
            b.iter(|| black_box(newton::iterate(&|x: f64| x * x - 2.0, black_box(1.0), &config)));
        });
    }
    group.finish();
}
