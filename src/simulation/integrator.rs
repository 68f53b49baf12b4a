//! Fixed-step symplectic integrator for the galaxy system
//!
//! One call to [`update_galaxies`] advances every star and every galaxy by
//! exactly one step of size `params.dt`, in place. The step is three strictly
//! ordered phases, each its own function so the phase boundary stays visible:
//!
//! 1. [`advance_stars`] — kick then drift every star against the
//!    start-of-step galaxy wells
//! 2. [`advance_galaxy_velocities`] — kick every galaxy against the other
//!    galaxies' start-of-step wells
//! 3. [`advance_galaxy_positions`] — drift every galaxy with its updated
//!    velocity
//!
//! Velocity is updated before position in each pass (semi-implicit Euler).
//! The phase ordering is what keeps the scheme symplectic; do not fuse or
//! reorder the passes.

use crate::simulation::entities::Galaxy;
use crate::simulation::forces::{CentralGravity, Well};
use crate::simulation::params::Parameters;

/// Advance the whole system by one fixed time step
///
/// Mutates `galaxies` in place and returns nothing; barring non-finite
/// inputs (which propagate), the step always succeeds. No state persists
/// between calls
pub fn update_galaxies(galaxies: &mut [Galaxy], params: &Parameters) {
    if galaxies.is_empty() {
        return;
    }

    // Every phase reads source positions captured here, at the start of
    // the step
    let wells = Well::snapshot(galaxies);
    let gravity = CentralGravity { g: params.g };

    advance_stars(galaxies, &wells, &gravity, params.dt);
    advance_galaxy_velocities(galaxies, &wells, &gravity, params.dt);
    advance_galaxy_positions(galaxies, params.dt);
}

/// One step with the default `dt` and `G`
pub fn update_galaxies_default(galaxies: &mut [Galaxy]) {
    update_galaxies(galaxies, &Parameters::default());
}

/// Phase 1: kick and drift every star in every galaxy
///
/// Each star sums the pull of ALL galaxy cores, its own parent included,
/// then updates velocity first and position from the updated velocity
pub fn advance_stars(galaxies: &mut [Galaxy], wells: &[Well], gravity: &CentralGravity, dt: f64) {
    for galaxy in galaxies.iter_mut() {
        for star in galaxy.stars.iter_mut() {
            let a = gravity.accel_on_star(wells, star.position);
            star.velocity += a * dt;
            star.position += star.velocity * dt;
        }
    }
}

/// Phase 2: kick every galaxy against the other galaxies
///
/// Positions are not touched here; all galaxies still see start-of-step
/// source positions through `wells`
pub fn advance_galaxy_velocities(
    galaxies: &mut [Galaxy],
    wells: &[Well],
    gravity: &CentralGravity,
    dt: f64,
) {
    for (i, galaxy) in galaxies.iter_mut().enumerate() {
        let a = gravity.accel_on_galaxy(wells, i);
        galaxy.velocity += a * dt;
    }
}

/// Phase 3: drift every galaxy with its post-kick velocity
/// Runs only after ALL galaxy velocities have been recomputed
pub fn advance_galaxy_positions(galaxies: &mut [Galaxy], dt: f64) {
    for galaxy in galaxies.iter_mut() {
        galaxy.position += galaxy.velocity * dt;
    }
}
