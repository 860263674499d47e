//! Command line options

use clap::{Parser, ValueEnum};
use dots_physics::ForceLawKind;
use dots_simulation::{SeedStrategy, SimulationParams};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nwgpu ",
    env!("DOTS_WGPU_VERSION"),
    "\nwinit ",
    env!("DOTS_WINIT_VERSION"),
);

#[derive(Parser, Debug)]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Point masses on a wraparound plane"
)]
pub struct Args {
    /// Number of particles
    #[arg(short = 'n', long, default_value_t = 400)]
    pub particles: u16,

    /// Window width in pixels
    #[arg(long, default_value_t = 512, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Window height in pixels
    #[arg(long, default_value_t = 512, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,

    #[arg(long, value_enum, default_value_t = ForceLawArg::LennardJones)]
    pub force_law: ForceLawArg,

    #[arg(long, value_enum, default_value_t = SeedingArg::Grid)]
    pub seeding: SeedingArg,

    /// Seed for `--seeding uniform`
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Fixed time step in seconds instead of the measured frame time
    #[arg(long, value_parser = parse_time_step)]
    pub time_step: Option<f64>,

    /// Run this many steps without opening a window
    #[arg(long, value_name = "TICKS")]
    pub headless: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ForceLawArg {
    LennardJones,
    InverseSquare,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeedingArg {
    Grid,
    Uniform,
}

impl Args {
    pub fn params(&self) -> SimulationParams {
        let force_law = match self.force_law {
            ForceLawArg::LennardJones => ForceLawKind::LennardJones,
            ForceLawArg::InverseSquare => ForceLawKind::InverseSquare,
        };
        let seeding = match self.seeding {
            SeedingArg::Grid => SeedStrategy::Grid,
            SeedingArg::Uniform => SeedStrategy::UniformRandom { seed: self.seed },
        };
        SimulationParams {
            force_law,
            seeding,
            ..SimulationParams::default()
        }
    }
}

fn parse_time_step(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("time step must be a positive number, got {value}"))
    }
}
