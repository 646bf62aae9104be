use criterion::{black_box, criterion_group, criterion_main, Criterion};

use daybreak::atmosphere::{AtmosphereState, OrbitConfig};
use daybreak::atmosphere::light::brightness;
use daybreak::core::clock::MILLISEC_PER_DAY;

fn bench_state_compute(c: &mut Criterion) {
    let orbit = OrbitConfig::default();

    c.bench_function("atmosphere_state_compute", |b| {
        let mut t = 0u64;
        b.iter(|| {
            t = (t + 16) % MILLISEC_PER_DAY;
            AtmosphereState::compute(black_box(t), MILLISEC_PER_DAY, 0, black_box(&orbit))
        });
    });
}

fn bench_state_compute_full_day(c: &mut Criterion) {
    let orbit = OrbitConfig::default();
    let step = MILLISEC_PER_DAY / 1440; // one in-game minute

    c.bench_function("atmosphere_state_full_day", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            let mut t = 0u64;
            while t < MILLISEC_PER_DAY {
                let state = AtmosphereState::compute(black_box(t), MILLISEC_PER_DAY, 0, &orbit);
                acc += state.day_alpha;
                t += step;
            }
            acc
        });
    });
}

fn bench_brightness_curve(c: &mut Criterion) {
    c.bench_function("brightness_sigmoid", |b| {
        let mut alpha = 0.0f32;
        b.iter(|| {
            alpha = (alpha + 0.001) % 1.0;
            brightness(black_box(alpha))
        });
    });
}

criterion_group!(
    benches,
    bench_state_compute,
    bench_state_compute_full_day,
    bench_brightness_curve
);
criterion_main!(benches);
