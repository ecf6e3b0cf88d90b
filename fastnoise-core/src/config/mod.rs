//! Generator configuration.
//!
//! Configuration happens in two phases. A [`NoiseBuilder`] records only what
//! the caller set; [`NoiseBuilder::resolve`] fills in every default and the
//! implied sub-kinds, producing a plain [`NoiseConfig`] that knows how to
//! assemble the generator graph.

mod builder;
mod resolved;
mod types;

pub use builder::NoiseBuilder;
pub use resolved::{NoiseConfig, NoiseProvider};
pub use types::{
    DistanceType, FractalType, InterpolationType, MultiType, NoiseType, ReturnType, WarpType,
};
