//! Base noise families.
//!
//! Each sampler here reads only the lattice math from `fastnoise_utils` and
//! its own parameter snapshot:
//!
//! - [`ValueNoise`] - interpolated lattice values
//! - [`PerlinNoise`] - interpolated lattice gradients
//! - [`SimplexNoise`] - classic skewed simplex
//! - [`OpenSimplex2Noise`] / [`OpenSimplex2SNoise`] - rotated OpenSimplex2 lattices
//! - [`CellularNoise`] - Voronoi with selectable metric and output
//! - [`CubicNoise`] - Catmull-Rom interpolated lattice values
//! - [`WhiteNoise`] - uncorrelated hash of the coordinate bits

mod cellular_noise;
mod cubic_noise;
pub mod open_simplex2_noise;
mod open_simplex2s_noise;
mod perlin_noise;
mod simplex_noise;
mod value_noise;
mod white_noise;

pub use cellular_noise::{CellularNoise, CellularReturn, DistanceMetric};
pub use cubic_noise::CubicNoise;
pub use open_simplex2_noise::OpenSimplex2Noise;
pub use open_simplex2s_noise::OpenSimplex2SNoise;
pub use perlin_noise::PerlinNoise;
pub use simplex_noise::SimplexNoise;
pub use value_noise::ValueNoise;
pub use white_noise::WhiteNoise;
