use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_shuffle(c: &mut Criterion) {
    let pool: Vec<String> = (0..1000).map(|i| format!("participant-{}", i)).collect();
    c.bench_function("shuffle_1000", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| {
            let mut items = pool.clone();
            raffler_lib::draw::shuffle(&mut rng, &mut items);
        })
    });
}

fn bench_draw_winners(c: &mut Criterion) {
    let pool: Vec<String> = (0..1000).map(|i| format!("participant-{}", i)).collect();
    c.bench_function("draw_10_of_1000", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| {
            let _ = raffler_lib::draw::draw_winners(&mut rng, pool.clone(), 10);
        })
    });
}

criterion_group!(benches, bench_shuffle, bench_draw_winners);
criterion_main!(benches);
