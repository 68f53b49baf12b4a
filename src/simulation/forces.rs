//! Gravitational acceleration from the galaxy central masses
//!
//! Only the galaxy cores act as sources: stars are tracers and never attract
//! anything, so the per-step cost stays at
//! O(totalStars x galaxyCount + galaxyCount^2).
//!
//! Both sums read `Well` snapshots taken at the start of the step, so every
//! body in a phase sees the same source positions regardless of update order.

use crate::math::vector::Vec3;
use crate::simulation::entities::Galaxy;

/// Start-of-step snapshot of one galaxy's central mass
#[derive(Debug, Clone, Copy)]
pub struct Well {
    pub mass: f64,
    pub position: Vec3,
}

impl Well {
    /// Capture the wells of every galaxy in sequence order
    pub fn snapshot(galaxies: &[Galaxy]) -> Vec<Well> {
        galaxies
            .iter()
            .map(|g| Well {
                mass: g.mass,
                position: g.position,
            })
            .collect()
    }
}

/// Newtonian gravity from point-mass galaxy cores
#[derive(Debug, Clone, Copy)]
pub struct CentralGravity {
    pub g: f64, // gravitational constant
}

impl CentralGravity {
    /// Acceleration at `target` due to a point mass at `source`
    ///
    /// Coincident positions contribute exactly zero instead of raising or
    /// producing NaN: the pair is skipped
    pub fn point_mass_accel(&self, mass: f64, source: Vec3, target: Vec3) -> Vec3 {
        // r points from the accelerated body toward the source, so the
        // contribution is attractive along +r
        let r = source - target;
        let r2 = r.dot(&r);
        if r2 == 0.0 {
            return Vec3::zero();
        }

        // 1 / |r| and 1 / |r|^3; a = G * M * r / |r|^3
        let inv_r = r2.sqrt().recip();
        let inv_r3 = inv_r * inv_r * inv_r;
        let coef = self.g * mass * inv_r3;

        coef * r
    }

    /// Total acceleration on a star at `position`
    /// Every galaxy contributes, the star's own parent included
    pub fn accel_on_star(&self, wells: &[Well], position: Vec3) -> Vec3 {
        let mut a = Vec3::zero();
        for well in wells {
            a += self.point_mass_accel(well.mass, well.position, position);
        }
        a
    }

    /// Total acceleration on the galaxy at `index`
    /// A galaxy does not act on its own central mass
    pub fn accel_on_galaxy(&self, wells: &[Well], index: usize) -> Vec3 {
        let mut a = Vec3::zero();
        for (j, well) in wells.iter().enumerate() {
            if j == index {
                continue;
            }
            a += self.point_mass_accel(well.mass, well.position, wells[index].position);
        }
        a
    }
}
