use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use culebrita_core::{GameConfig, GameEngine};

fn tick_throughput(c: &mut Criterion) {
    let config = GameConfig::new((200, 200), 3).unwrap();

    c.bench_function("straight_run", |b| {
        b.iter(|| {
            let mut engine = GameEngine::new(config, 42);
            engine.start();
            while black_box(engine.tick()).has_update() {}
            engine.score()
        })
    });
}

criterion_group!(benches, tick_throughput);
criterion_main!(benches);
