//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! numerical parameters plus the galaxy collection, with generated galaxies
//! drawn from a ChaCha stream seeded by `parameters.seed` so a scenario file
//! always produces the same initial conditions.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::configuration::config::ScenarioConfig;
use crate::error::SimResult;
use crate::simulation::entities::Galaxy;
use crate::simulation::generator::create_random_galaxy;
use crate::simulation::integrator::update_galaxies;
use crate::simulation::params::Parameters;

/// A fully-initialized simulation: parameters plus the galaxy collection
///
/// The collection is owned here and mutated in place by [`Scenario::step`];
/// callers read star positions between steps
#[derive(Debug)]
pub struct Scenario {
    pub parameters: Parameters,
    pub galaxies: Vec<Galaxy>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        let parameters = Parameters {
            dt: cfg.parameters.dt,
            g: cfg.parameters.g,
            seed: cfg.parameters.seed,
            steps: cfg.parameters.steps,
        };

        let mut rng = ChaCha8Rng::seed_from_u64(parameters.seed);
        let mut galaxies = Vec::with_capacity(cfg.random_galaxies.len() + cfg.galaxies.len());

        for opts in &cfg.random_galaxies {
            let galaxy = create_random_galaxy(opts, &mut rng);
            log::info!(
                "generated galaxy {} with {} stars at {:?}",
                galaxies.len(),
                galaxy.stars.len(),
                galaxy.position
            );
            galaxies.push(galaxy);
        }

        // Explicit galaxies: component lists are validated here and any
        // missing field or wrong arity surfaces to the caller
        for galaxy_cfg in &cfg.galaxies {
            galaxies.push(galaxy_cfg.to_galaxy()?);
        }

        Ok(Self {
            parameters,
            galaxies,
        })
    }

    /// Advance the system by one fixed step
    pub fn step(&mut self) {
        update_galaxies(&mut self.galaxies, &self.parameters);
    }

    /// Run `parameters.steps` ticks
    pub fn run_to_completion(&mut self) {
        for _ in 0..self.parameters.steps {
            self.step();
        }
        log::info!("ran {} steps", self.parameters.steps);
    }

    /// Total stars across all galaxies
    pub fn star_count(&self) -> usize {
        self.galaxies.iter().map(|g| g.stars.len()).sum()
    }
}
