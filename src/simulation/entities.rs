//! Core entity types for the galaxy simulation
//!
//! Defines the two bodies the integrator advances:
//! - `Star` — a massless tracer orbiting the galaxy cores
//! - `Galaxy` — a central mass that owns an ordered collection of stars
//!
//! Entities are plain mutable containers; all physics lives in the
//! integrator, and display metadata lives in the [`crate::attributes`]
//! side-channel rather than on these structs.

use crate::math::vector::Vec3;

#[derive(Debug, Clone)]
pub struct Star {
    pub position: Vec3, // world-space position
    pub velocity: Vec3, // world-space velocity
    pub mass: f64,      // 0 = tracer, exerts no gravity
}

impl Star {
    /// A tracer star: responds to gravity, exerts none
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            mass: 0.0,
        }
    }

    pub fn with_mass(position: Vec3, velocity: Vec3, mass: f64) -> Self {
        Self {
            position,
            velocity,
            mass,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Galaxy {
    pub position: Vec3,    // position of the central mass
    pub velocity: Vec3,    // bulk velocity
    pub orientation: Vec3, // disk orientation as three Euler angles
    pub mass: f64,         // central point mass
    pub stars: Vec<Star>,  // exclusively owned; stars hold no back-reference
}

impl Galaxy {
    pub fn new(position: Vec3, velocity: Vec3, orientation: Vec3, mass: f64) -> Self {
        Self {
            position,
            velocity,
            orientation,
            mass,
            stars: Vec::new(),
        }
    }
}
