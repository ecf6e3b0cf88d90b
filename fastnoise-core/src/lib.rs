//! Composable procedural noise.
//!
//! A generator graph is described with a [`NoiseBuilder`], resolved into a
//! [`config::NoiseConfig`] and built into an immutable [`FastNoise`] tree:
//!
//! ```
//! use fastnoise_core::FastNoise;
//! use fastnoise_core::config::{FractalType, NoiseType, WarpType};
//!
//! let terrain = FastNoise::builder()
//!     .noise_type(NoiseType::OpenSimplex2)
//!     .fractal(FractalType::RigidMulti)
//!     .octaves(5)
//!     .warp(WarpType::BasicGrid)
//!     .range(0.0, 128.0)
//!     .build();
//!
//! let height = terrain.get_noise_scaled_2d(100.0, -40.0);
//! assert!(height.is_finite());
//! ```
//!
//! Built generators are `Send + Sync` and sampling never mutates them, so one
//! instance can be shared by every worker thread.

pub mod composite;
pub mod config;
pub mod function;
pub mod generator;
pub mod noise;

pub use config::{NoiseBuilder, NoiseConfig, NoiseProvider};
pub use function::{
    DistanceFunction, FractalFunction, MultiFunction, NoiseFunction, ReturnFunction,
    ScaleFunction,
};
pub use generator::{DescribeNoise, FastNoise, NoiseSampler, NoiseSettings, Sampler};
