use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::simulation::entities::Galaxy;
use crate::simulation::generator::{create_random_galaxy, GalaxyOptions};
use crate::simulation::integrator::update_galaxies;
use crate::simulation::params::Parameters;

/// Build a deterministic two-galaxy system with `n` stars per galaxy
fn make_galaxies(n: u32) -> Vec<Galaxy> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let opts = GalaxyOptions {
        min_star_count: n,
        ..GalaxyOptions::default()
    };
    vec![
        create_random_galaxy(&opts, &mut rng),
        create_random_galaxy(&opts, &mut rng),
    ]
}

pub fn bench_update() {
    // Stars per galaxy to test
    let ns = [200, 400, 800, 1600, 3200, 6400, 12800];
    let steps = 10; // integrator steps per size (tune as needed)

    let params = Parameters::default();

    for n in ns {
        let mut galaxies = make_galaxies(n);

        // Warm up
        update_galaxies(&mut galaxies, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            update_galaxies(&mut galaxies, &params);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:6} stars/galaxy, step = {per_step:8.6} s");
    }
}

/// Benchmark `update_galaxies` over a finer sweep of star counts
/// Paste output directly into a spreadsheet to graph
pub fn bench_update_curve() {
    println!("N,step_ms");

    for n in (200..=12800).step_by(200) {
        // Small n: average over a few steps to smooth noise
        // Large n: fewer steps to bound runtime
        let steps = if n <= 2000 { 5 } else { 2 };

        let mut galaxies = make_galaxies(n);
        let params = Parameters::default();

        // Warm-up one step
        update_galaxies(&mut galaxies, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            update_galaxies(&mut galaxies, &params);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
}
