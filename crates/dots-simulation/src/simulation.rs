//! CPU particle system manager
//!
//! State lives in two equally sized buffers. Each [`ParticleSystem::step`] swaps them, reads
//! exclusively from `previous` and overwrites `current`, so no particle ever observes a
//! partially updated neighbour.

use dots_physics::{ForceLaw, Particle, ToroidalDomain, Vector2D};

use crate::params::SimulationParams;
use crate::projection::Marker;
use crate::seeding::SeedStrategy;

/// The dots: a fixed set of unit-mass particles on the unit torus
pub struct ParticleSystem {
    domain: ToroidalDomain,
    force_law: Box<dyn ForceLaw + Send + Sync>,
    params: SimulationParams,

    // Generations
    current: Vec<Particle>,
    previous: Vec<Particle>,

    width: u16,
    height: u16,

    tick: u64,
    elapsed: f64,
}

impl ParticleSystem {
    /// A system of `n` grid-seeded particles with default parameters
    pub fn new(width: u16, height: u16, n: u16) -> Self {
        Self::with_params(width, height, n, SimulationParams::default())
    }

    pub fn with_params(width: u16, height: u16, n: u16, params: SimulationParams) -> Self {
        let mut system = Self::from_particles(width, height, Vec::new(), params);
        if n > 0 {
            system.reseed(usize::from(n), params.seeding);
        }
        system
    }

    /// Adopt an explicit layout. `previous` starts as a copy of `particles`.
    pub fn from_particles(
        width: u16,
        height: u16,
        particles: Vec<Particle>,
        params: SimulationParams,
    ) -> Self {
        Self {
            domain: ToroidalDomain::unit(),
            force_law: params.force_law.build(),
            params,
            previous: particles.clone(),
            current: particles,
            width,
            height,
            tick: 0,
            elapsed: 0.0,
        }
    }

    /// Swap in a custom force law, replacing the one chosen by the parameters
    pub fn with_force_law<F>(mut self, force_law: F) -> Self
    where
        F: ForceLaw + Send + Sync + 'static,
    {
        self.force_law = Box::new(force_law);
        self
    }

    /// Replace every particle with a fresh layout of `n` particles at rest
    pub fn reseed(&mut self, n: usize, strategy: SeedStrategy) {
        self.current = strategy.generate(n);
        self.previous = self.current.clone();
        self.params.seeding = strategy;
        self.tick = 0;
        self.elapsed = 0.0;
        log::debug!("Seeded {} particles ({:?})", n, strategy);
    }

    /// Advance the system by `time_step` seconds
    pub fn step(&mut self, time_step: f64) {
        std::mem::swap(&mut self.current, &mut self.previous);

        self.integrate(time_step);
        self.accumulate_pairwise();

        self.tick += 1;
        self.elapsed += time_step;
    }

    /// Semi-implicit Euler from `previous` into `current`, seeding each acceleration with drag
    fn integrate(&mut self, time_step: f64) {
        let domain = &self.domain;
        let damping = self.params.damping;

        for (cur, prev) in self.current.iter_mut().zip(&self.previous) {
            cur.position = domain.wrap(prev.position + prev.velocity * time_step);
            cur.velocity = prev.velocity + prev.acceleration * time_step;
            cur.acceleration = if prev.velocity.length() == 0.0 {
                Vector2D::ZERO
            } else {
                -prev.velocity * damping
            };
        }
    }

    /// All unordered pairs `i < j` over `previous` positions.
    ///
    /// Particle `i` is clamped as soon as its row finishes. Everything `i` receives comes
    /// from its own row or from earlier rows, so the per-row clamp sees the final sum.
    fn accumulate_pairwise(&mut self) {
        let n = self.previous.len();
        let max_acceleration = self.params.max_acceleration;

        for i in 0..n {
            let pi = self.previous[i].position;
            for j in (i + 1)..n {
                let pj = self.previous[j].position;
                let delta = self.pair_acceleration(pi, pj);
                self.current[i].acceleration += delta;
                self.current[j].acceleration -= delta;
            }

            let acceleration = &mut self.current[i].acceleration;
            if acceleration.length() > max_acceleration {
                *acceleration = acceleration.normal() * max_acceleration;
            }
        }
    }

    /// Acceleration that the particle at `pj` imposes on the particle at `pi`.
    /// The partner receives the exact negation.
    pub fn pair_acceleration(&self, pi: Vector2D, pj: Vector2D) -> Vector2D {
        let r = self.domain.distance(pj, pi);
        let f = self.force_law.magnitude(r);
        let direction = if r > 0.0 {
            (pj - pi) / r
        } else {
            Vector2D::ZERO
        };
        direction * f
    }

    /// Pixel markers for the renderer, one per particle
    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        self.current
            .iter()
            .map(move |p| Marker::project(p.position, self.width, self.height))
    }

    pub fn particles(&self) -> &[Particle] {
        &self.current
    }

    /// State as of the start of the last step
    pub fn previous(&self) -> &[Particle] {
        &self.previous
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn domain(&self) -> &ToroidalDomain {
        &self.domain
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of completed steps
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Simulated seconds, the sum of every time step so far
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.current.iter().map(Particle::kinetic_energy).sum()
    }
}
