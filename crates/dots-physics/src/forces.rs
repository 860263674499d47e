//! Pairwise force laws
//!
//! A force law maps the separation `r` of two particles to a radial scalar magnitude.
//! Positive values pull a particle toward its partner, negative values push it away.

use crate::constants::{GRAVITY_STRENGTH, LJ_DEPTH, LJ_DISTANCE};

/// Radial interaction between two unit-mass particles
pub trait ForceLaw {
    fn magnitude(&self, r: f64) -> f64;
}

/// `x^n` by repeated squaring
pub fn pown(x: f64, n: u32) -> f64 {
    let mut result = 1.0;
    let mut base = x;
    let mut exp = n;
    while exp > 0 {
        if exp & 1 == 1 {
            result *= base;
        }
        base *= base;
        exp >>= 1;
    }
    result
}

/// Gradient of a Lennard-Jones style potential: `-D * ((a/r)^5 - (a/r)^3)`
///
/// Repulsive below `a`, weakly attractive beyond it, zero at `r == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LennardJones {
    pub depth: f64,
    pub distance: f64,
}

impl Default for LennardJones {
    fn default() -> Self {
        Self {
            depth: LJ_DEPTH,
            distance: LJ_DISTANCE,
        }
    }
}

impl ForceLaw for LennardJones {
    fn magnitude(&self, r: f64) -> f64 {
        if r == 0.0 {
            return 0.0;
        }
        let ratio = self.distance / r;
        -self.depth * (pown(ratio, 5) - pown(ratio, 3))
    }
}

/// Attractive `G / r^2`, zero at `r == 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseSquare {
    pub strength: f64,
}

impl Default for InverseSquare {
    fn default() -> Self {
        Self {
            strength: GRAVITY_STRENGTH,
        }
    }
}

impl ForceLaw for InverseSquare {
    fn magnitude(&self, r: f64) -> f64 {
        if r == 0.0 {
            return 0.0;
        }
        self.strength / pown(r, 2)
    }
}

/// Selectable force law with its default parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceLawKind {
    #[default]
    LennardJones,
    InverseSquare,
}

impl ForceLawKind {
    pub fn build(self) -> Box<dyn ForceLaw + Send + Sync> {
        match self {
            ForceLawKind::LennardJones => Box::new(LennardJones::default()),
            ForceLawKind::InverseSquare => Box::new(InverseSquare::default()),
        }
    }
}
