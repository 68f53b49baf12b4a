//! Procedural initial conditions: one spiral-disk galaxy per call
//!
//! [`create_random_galaxy`] builds a galaxy with a plausible disk of tracer
//! stars on near-circular orbits. All entropy comes through the caller's
//! `Rng`, so a seeded generator reproduces the same galaxy exactly.
//!
//! Distribution notes (all intentional, matched to the tuned visuals):
//! - the bulk velocity and position offset are cube-uniform samples
//! - the orientation is three uniform Euler angles in `[0, pi]`, not a
//!   uniform sample over all 3D orientations
//! - the star radius is uniform in radius, not in disk area, so density
//!   rises toward the rim relative to a uniform-area disk
//! - the vertical profile decays exponentially with radius, thick at the
//!   bulge and thin at the rim

use std::f64::consts::{PI, TAU};

use rand::Rng;
use serde::Deserialize;

use crate::math::rotation::Mat3;
use crate::math::vector::Vec3;
use crate::simulation::entities::{Galaxy, Star};
use crate::simulation::params::GRAVITY;

/// Options for [`create_random_galaxy`]; every field has a default
///
/// When a `max_*` bound is unset the corresponding `min_*` value is used
/// exactly
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GalaxyOptions {
    pub min_star_count: u32,
    pub max_star_count: Option<u32>,
    pub min_galaxy_radius: f64,
    pub max_galaxy_radius: Option<f64>,
    /// Bound on each component of the bulk velocity draw
    pub max_initial_speed: f64,
    /// How far back along its own velocity the galaxy starts
    pub rewind_time_steps: f64,
    /// Perturbation keeping galaxies off a perfect head-on course
    pub initial_collision_avoidance_offset: f64,
}

impl Default for GalaxyOptions {
    fn default() -> Self {
        Self {
            min_star_count: 1500,
            max_star_count: None,
            min_galaxy_radius: 1.0,
            max_galaxy_radius: None,
            max_initial_speed: 4.0,
            rewind_time_steps: 3.0,
            initial_collision_avoidance_offset: 1.5,
        }
    }
}

/// Build one fully populated galaxy
///
/// The galaxy mass is set to the star count; nothing else ever writes it.
/// Orbital speeds assume the default `GRAVITY`
pub fn create_random_galaxy<R: Rng + ?Sized>(opts: &GalaxyOptions, rng: &mut R) -> Galaxy {
    let velocity = Vec3::random_centered(rng, opts.max_initial_speed);

    // Rewind the galaxy backward along its own velocity so it starts
    // off-center and approaching, then nudge it off a head-on course
    let position = velocity * (-opts.rewind_time_steps)
        + Vec3::random_centered(rng, opts.initial_collision_avoidance_offset);

    let orientation = Vec3::random(rng, PI);

    // Star count is drawn as a float and truncated, so a `max` bound is
    // effectively exclusive unless hit exactly
    let star_count = match opts.max_star_count {
        Some(max) => rng.gen_range(opts.min_star_count as f64..=max as f64) as usize,
        None => opts.min_star_count as usize,
    };

    let radius = match opts.max_galaxy_radius {
        Some(max) => rng.gen_range(opts.min_galaxy_radius..=max),
        None => opts.min_galaxy_radius,
    };

    let mut galaxy = Galaxy::new(position, velocity, orientation, star_count as f64);

    // One rotation for the whole disk
    let rotation = Mat3::from_euler(orientation.x, orientation.y, orientation.z);

    galaxy.stars.reserve(star_count);
    for _ in 0..star_count {
        let star = random_star(&galaxy, radius, &rotation, rng);
        galaxy.stars.push(star);
    }

    galaxy
}

/// Sample one star in the galaxy's local disk frame and carry it to world
/// space
fn random_star<R: Rng + ?Sized>(
    galaxy: &Galaxy,
    radius: f64,
    rotation: &Mat3,
    rng: &mut R,
) -> Star {
    let angle = rng.gen_range(0.0..TAU);
    let r = rng.gen_range(0.0..=radius);

    // Exponential vertical decay: thick near the core, thin at the rim
    let mut height = (rng.gen::<f64>() * (-2.0 * r / radius).exp()) / 5.0 * radius;
    if rng.gen::<f64>() < 0.5 {
        height = -height;
    }

    // Circular-orbit speed for the star's 3D distance from the core.
    // The vertical offset's dynamical effect is ignored, and a star drawn
    // exactly at the core divides by zero and propagates non-finite values
    let dist3d = (r * r + height * height).sqrt();
    let orbital_speed = (galaxy.mass * GRAVITY / dist3d).sqrt();

    let local_position = Vec3::new(r * angle.cos(), r * angle.sin(), height);
    // Perpendicular to the radius vector in the disk plane; counter-clockwise
    let local_velocity = Vec3::new(-orbital_speed * angle.sin(), orbital_speed * angle.cos(), 0.0);

    let position = rotation.transform(local_position) + galaxy.position;
    let velocity = rotation.transform(local_velocity) + galaxy.velocity;

    Star::new(position, velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn exact_star_count_when_bounds_coincide() {
        let opts = GalaxyOptions {
            min_star_count: 250,
            max_star_count: Some(250),
            ..GalaxyOptions::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let galaxy = create_random_galaxy(&opts, &mut rng);
        assert_eq!(galaxy.stars.len(), 250);
    }

    #[test]
    fn unset_max_uses_min_exactly() {
        let opts = GalaxyOptions {
            min_star_count: 64,
            ..GalaxyOptions::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let galaxy = create_random_galaxy(&opts, &mut rng);
        assert_eq!(galaxy.stars.len(), 64);
    }

    #[test]
    fn mass_equals_star_count() {
        let opts = GalaxyOptions {
            min_star_count: 100,
            max_star_count: Some(400),
            ..GalaxyOptions::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let galaxy = create_random_galaxy(&opts, &mut rng);
        assert_eq!(galaxy.mass, galaxy.stars.len() as f64);
    }

    #[test]
    fn same_seed_reproduces_the_galaxy() {
        let opts = GalaxyOptions::default();
        let a = create_random_galaxy(&opts, &mut ChaCha8Rng::seed_from_u64(77));
        let b = create_random_galaxy(&opts, &mut ChaCha8Rng::seed_from_u64(77));

        assert_eq!(a.stars.len(), b.stars.len());
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.orientation, b.orientation);
        for (sa, sb) in a.stars.iter().zip(b.stars.iter()) {
            assert_eq!(sa.position, sb.position);
            assert_eq!(sa.velocity, sb.velocity);
        }
    }

    #[test]
    fn orientation_angles_stay_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            let galaxy = create_random_galaxy(
                &GalaxyOptions {
                    min_star_count: 1,
                    ..GalaxyOptions::default()
                },
                &mut rng,
            );
            for c in [galaxy.orientation.x, galaxy.orientation.y, galaxy.orientation.z] {
                assert!((0.0..PI).contains(&c), "angle out of range: {c}");
            }
        }
    }

    #[test]
    fn stars_are_massless_tracers() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let galaxy = create_random_galaxy(
            &GalaxyOptions {
                min_star_count: 50,
                ..GalaxyOptions::default()
            },
            &mut rng,
        );
        assert!(galaxy.stars.iter().all(|s| s.mass == 0.0));
    }
}
