use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use randex::{resolve, select_many_with_rng, select_one_with_rng, Candidate, SelectionStrategy};

fn pool(size: usize) -> Vec<Candidate> {
    (0..size)
        .map(|i| {
            let c = Candidate::new(format!("item-{i}"), 1.0 + (i % 7) as f64);
            if i % 10 == 0 {
                c.with_pickup(2.5)
            } else {
                c
            }
        })
        .collect()
}

fn bench_select_one(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_one");
    let sizes = [10, 100, 1000];

    for &size in &sizes {
        let candidates = pool(size);
        for s in SelectionStrategy::ALL {
            group.bench_function(format!("{s}_n{size}"), |b| {
                let mut rng = ChaCha8Rng::seed_from_u64(7);
                b.iter(|| {
                    black_box(select_one_with_rng(black_box(&candidates), s, &mut rng).ok());
                })
            });
        }
    }
    group.finish();
}

fn bench_select_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_many");
    let candidates = pool(100);
    let counts = [10, 100];

    for &count in &counts {
        group.bench_function(format!("weighted_n100_x{count}"), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| {
                black_box(
                    select_many_with_rng(
                        black_box(&candidates),
                        SelectionStrategy::Weighted,
                        count,
                        &mut rng,
                    )
                    .ok(),
                );
            })
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for &size in &[100, 10_000] {
        let candidates = pool(size);
        group.bench_function(format!("n{size}"), |b| {
            b.iter(|| black_box(resolve(black_box(&candidates))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_select_one, bench_select_many, bench_resolve);
criterion_main!(benches);
