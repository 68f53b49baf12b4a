pub mod math;
pub mod simulation;
pub mod configuration;
pub mod attributes;
pub mod benchmark;
pub mod error;

pub use math::vector::Vec3;
pub use math::rotation::Mat3;

pub use simulation::entities::{Galaxy, Star};
pub use simulation::params::{Parameters, GRAVITY, TIME_STEP};
pub use simulation::forces::{CentralGravity, Well};
pub use simulation::integrator::{update_galaxies, update_galaxies_default};
pub use simulation::generator::{create_random_galaxy, GalaxyOptions};
pub use simulation::iter::{all_stars, all_stars_mut, for_each_star};
pub use simulation::scenario::Scenario;

pub use configuration::config::{GalaxyConfig, ParametersConfig, ScenarioConfig, StarConfig};
pub use attributes::{AttributeStore, EntityKey};
pub use error::{SimError, SimResult};

pub use benchmark::benchmark::{bench_update, bench_update_curve};
