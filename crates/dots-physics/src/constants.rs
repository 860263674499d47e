//! Default constants for the dots simulation
//!
//! All lengths are in domain units, the domain itself being `[0,1] x [0,1]`.

/// Depth `D` of the Lennard-Jones style interaction
pub const LJ_DEPTH: f64 = 1.0;

/// Characteristic distance `a` of the Lennard-Jones style interaction
pub const LJ_DISTANCE: f64 = 0.01;

/// Strength of the inverse-square ("gravity") alternative
pub const GRAVITY_STRENGTH: f64 = 1.0e-5;

/// Linear drag coefficient: damping acceleration is `-velocity * DAMPING`
pub const DAMPING: f64 = 0.1;

/// Upper bound on a particle's acceleration magnitude after the pairwise pass
pub const MAX_ACCELERATION: f64 = 0.01;

/// Grid seeding: particles per column
pub const GRID_COLUMNS: usize = 20;

/// Grid seeding: extent covered by one full column
pub const GRID_SPAN: f64 = 0.8;

/// Grid seeding: offset of the first row/column from the domain edge
pub const GRID_MARGIN: f64 = 0.1;

/// Marker size as a fraction of the viewport
pub const MARKER_FRACTION: f64 = 0.01;
