//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`GalaxyConfig`] / [`StarConfig`] – explicit initial states
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! Generated galaxies reuse [`GalaxyOptions`] directly as their schema.
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! parameters:
//!   dt: 0.005          # fixed integration step
//!   g: 0.001           # gravitational constant
//!   seed: 42           # deterministic seed for the generator
//!   steps: 1000        # headless run length
//!
//! random_galaxies:
//!   - min_star_count: 1500
//!     max_star_count: 2500
//!     min_galaxy_radius: 1.0
//!     max_galaxy_radius: 1.6
//!   - min_star_count: 1500
//!
//! galaxies:
//!   - position: [ -1.0, 0.0, 0.0 ]
//!     velocity: [  0.0, 0.0, 0.0 ]
//!     orientation: [ 0.0, 0.0, 0.0 ]
//!     mass: 100.0
//!     stars:
//!       - position: [ -1.5, 0.0, 0.0 ]
//!         velocity: [  0.0, 0.3, 0.0 ]
//! ```
//!
//! Component lists are free-length sequences in YAML; converting to runtime
//! entities checks for exactly 3 components and raises [`SimError`] on a
//! mismatch or a missing field.

use serde::Deserialize;

use crate::error::{SimError, SimResult};
use crate::math::vector::Vec3;
use crate::simulation::entities::{Galaxy, Star};
use crate::simulation::generator::GalaxyOptions;
use crate::simulation::params::{GRAVITY, TIME_STEP};

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub dt: f64,    // step size
    pub g: f64,     // gravitational constant
    pub seed: u64,  // deterministic seed to make runs reproducible
    pub steps: u64, // headless run length
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: TIME_STEP,
            g: GRAVITY,
            seed: 42,
            steps: 1000,
        }
    }
}

/// Configuration for a single explicit star
#[derive(Deserialize, Debug)]
pub struct StarConfig {
    pub position: Option<Vec<f64>>, // required, checked at conversion
    pub velocity: Option<Vec<f64>>, // required, checked at conversion
    #[serde(default)]
    pub mass: f64, // 0 = tracer
}

impl StarConfig {
    pub fn to_star(&self) -> SimResult<Star> {
        let position = required(&self.position, "position")?;
        let velocity = required(&self.velocity, "velocity")?;
        Ok(Star::with_mass(position, velocity, self.mass))
    }
}

/// Configuration for a single explicit galaxy
#[derive(Deserialize, Debug)]
pub struct GalaxyConfig {
    pub position: Option<Vec<f64>>,    // required, checked at conversion
    pub velocity: Option<Vec<f64>>,    // required, checked at conversion
    pub orientation: Option<Vec<f64>>, // required, checked at conversion
    pub mass: f64,
    #[serde(default)]
    pub stars: Vec<StarConfig>,
}

impl GalaxyConfig {
    pub fn to_galaxy(&self) -> SimResult<Galaxy> {
        let position = required(&self.position, "position")?;
        let velocity = required(&self.velocity, "velocity")?;
        let orientation = required(&self.orientation, "orientation")?;

        let mut galaxy = Galaxy::new(position, velocity, orientation, self.mass);
        for star_cfg in &self.stars {
            galaxy.stars.push(star_cfg.to_star()?);
        }
        Ok(galaxy)
    }
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    /// Galaxies drawn by the procedural generator
    pub random_galaxies: Vec<GalaxyOptions>,
    /// Explicit galaxies with fixed initial state
    pub galaxies: Vec<GalaxyConfig>,
}

fn required(field: &Option<Vec<f64>>, what: &'static str) -> SimResult<Vec3> {
    let components = field
        .as_ref()
        .ok_or(SimError::MissingField { what })?;
    Vec3::try_from_slice(components)
}
