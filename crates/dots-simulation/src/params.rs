//! Simulation parameters

use dots_physics::{ForceLawKind, DAMPING, MAX_ACCELERATION};

use crate::seeding::SeedStrategy;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    /// Drag coefficient, damping acceleration is `-velocity * damping`
    pub damping: f64,
    /// Acceleration magnitude cap applied per particle after its row of pairs
    pub max_acceleration: f64,
    pub force_law: ForceLawKind,
    pub seeding: SeedStrategy,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            max_acceleration: MAX_ACCELERATION,
            force_law: ForceLawKind::LennardJones,
            seeding: SeedStrategy::Grid,
        }
    }
}
