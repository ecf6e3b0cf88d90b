//! Generators that wrap other generators.
//!
//! Every decorator owns its children outright, so a built graph is a tree and
//! can be cloned or shared across threads without further bookkeeping.

mod fractal_noise;
mod multi_noise;
mod scaled_noise;
mod warped_noise;
mod wrapped_noise;

pub use fractal_noise::{FractalCurve, FractalNoise};
pub use multi_noise::{MultiNoise, MultiReducer};
pub use scaled_noise::ScaledNoise;
pub use warped_noise::{WarpKernel, WarpedNoise};
pub use wrapped_noise::{NoiseWrapper, WrappedNoise};
