use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rhull::io::uniform_points;
use rhull::Algorithm;

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0);
  let mut group = c.benchmark_group("convex_hull");
  for &n in &[100, 1_000, 10_000] {
    let pts = uniform_points(n, 0.0..1000.0, 0.0..1000.0, &mut rng);
    for algo in Algorithm::ALL {
      group.bench_with_input(BenchmarkId::new(algo.name(), n), &pts, |b, pts| {
        b.iter(|| algo.convex_hull(black_box(pts)))
      });
    }
  }
  group.finish();

  // Cost of materialising every intermediate step.
  let pts = uniform_points(1_000, 0.0..1000.0, 0.0..1000.0, &mut rng);
  for algo in Algorithm::ALL {
    c.bench_function(&format!("{}-steps(1e3)", algo), |b| {
      b.iter(|| algo.steps(black_box(&pts)).map(|steps| steps.count()))
    });
  }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
