use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use exosim::exosim::Exosim;
use exosim::physical_system::PhysicalSystem;

/// Uniform random orbital phase in [0°, 360°)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * 360.0
}

fn bench_orbit_doppler(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xE505);
    let sim = Exosim::default();
    let system = PhysicalSystem::default();
    let samples = 1_000usize;

    c.bench_function("orbit_doppler/reference_configuration", |b| {
        b.iter_batched(
            || (0..samples).map(|_| rand_angle(&mut rng)).collect::<Vec<_>>(),
            |angles| {
                for angle in angles {
                    let result = sim.compute_orbit_doppler(&system, angle).unwrap();
                    black_box(result.doppler.shifted_wavelength);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_orbit_doppler);
criterion_main!(benches);
