//! The built generator graph and its sampling facade.
//!
//! A [`FastNoise`] is one node of an owned tree. It pairs the shared
//! [`NoiseSettings`] (seed, frequency, offsets, output scale and threshold)
//! with a [`Sampler`] variant that holds the algorithm specific state.
//!
//! # Sampling layers
//!
//! - `sample_*d(seed, ..)`: the raw algorithm, already in lattice space. This
//!   is what decorators call on their children so a fractal can vary the seed
//!   per octave without touching shared state.
//! - `get_noise_*d(..)`: applies offsets and frequency, then samples with the
//!   node's own seed. Warped, multi, scaled and passthrough nodes override
//!   this step.
//! - `get_noise_scaled_*d(..)`: `get_noise * scale_amplitude + scale_offset`.
//! - `get_boolean_*d(..)`: threshold membership of `get_noise`.
//!
//! Raw sampling is dispatched through [`NoiseSampler`] with `enum_dispatch`;
//! the facade overrides are a plain `match` on the variant.

use enum_dispatch::enum_dispatch;

use crate::composite::{
    FractalNoise, MultiNoise, NoiseWrapper, ScaledNoise, WarpedNoise, WrappedNoise,
};
use crate::config::NoiseBuilder;
use crate::function::{AXIS_FILLER, NoiseFunction};
use crate::noise::{
    CellularNoise, CubicNoise, OpenSimplex2Noise, OpenSimplex2SNoise, PerlinNoise, SimplexNoise,
    ValueNoise, WhiteNoise, open_simplex2_noise,
};

/// Raw, seed-parameterized sampling in lattice space.
#[enum_dispatch]
pub trait NoiseSampler {
    /// Samples a 1D coordinate.
    fn sample_1d(&self, seed: i32, x: f32) -> f32;
    /// Samples a 2D coordinate.
    fn sample_2d(&self, seed: i32, x: f32, y: f32) -> f32;
    /// Samples a 3D coordinate.
    fn sample_3d(&self, seed: i32, x: f32, y: f32, z: f32) -> f32;
}

/// Writes the sampler specific fields back into a builder.
#[enum_dispatch]
pub trait DescribeNoise {
    /// Returns `builder` extended with everything needed to rebuild this sampler.
    fn describe(&self, builder: NoiseBuilder) -> NoiseBuilder;
}

/// Every kind of generator node.
#[enum_dispatch(NoiseSampler, DescribeNoise)]
#[derive(Debug, Clone)]
pub enum Sampler {
    /// Value lattice.
    Value(ValueNoise),
    /// Gradient lattice.
    Perlin(PerlinNoise),
    /// Classic simplex.
    Simplex(SimplexNoise),
    /// OpenSimplex2.
    OpenSimplex2(OpenSimplex2Noise),
    /// OpenSimplex2S.
    OpenSimplex2S(OpenSimplex2SNoise),
    /// Cellular.
    Cellular(CellularNoise),
    /// Cubic.
    Cubic(CubicNoise),
    /// White.
    White(WhiteNoise),
    /// Fractal decorator.
    Fractal(FractalNoise),
    /// Domain warp decorator.
    Warped(WarpedNoise),
    /// Multi generator reduction.
    Multi(MultiNoise),
    /// Output transform decorator.
    Scaled(ScaledNoise),
    /// User noise function.
    Wrapped(WrappedNoise),
}

/// Parameters shared by every node: seed, input transform and output policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseSettings {
    /// Seed passed to the raw sampler by the facade.
    pub seed: i32,
    /// X frequency.
    pub frequency_x: f32,
    /// Y frequency.
    pub frequency_y: f32,
    /// Z frequency.
    pub frequency_z: f32,
    /// X offset, added before frequency.
    pub offset_x: f32,
    /// Y offset, added before frequency.
    pub offset_y: f32,
    /// Z offset, added before frequency.
    pub offset_z: f32,
    /// Multiplier for scaled output.
    pub scale_amplitude: f32,
    /// Addend for scaled output.
    pub scale_offset: f32,
    /// Exclusive lower threshold.
    pub min_threshold: f32,
    /// Exclusive upper threshold.
    pub max_threshold: f32,
    /// Flips threshold membership.
    pub invert: bool,
}

impl NoiseSettings {
    /// Default seed.
    pub const DEFAULT_SEED: i32 = 1337;
    /// Default frequency on every axis.
    pub const DEFAULT_FREQUENCY: f32 = 0.01;

    /// Default settings with the given seed.
    #[must_use]
    pub fn with_seed(seed: i32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// `invert != (min < noise < max)`.
    #[inline]
    #[must_use]
    pub fn is_in_threshold(&self, noise: f32) -> bool {
        self.invert != (noise > self.min_threshold && noise < self.max_threshold)
    }

    /// Like [`Self::is_in_threshold`] with the interval widened by `margin` on
    /// both sides.
    #[inline]
    #[must_use]
    pub fn is_in_threshold_within(&self, noise: f32, margin: f32) -> bool {
        self.invert
            != (noise > self.min_threshold - margin && noise < self.max_threshold + margin)
    }
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            frequency_x: Self::DEFAULT_FREQUENCY,
            frequency_y: Self::DEFAULT_FREQUENCY,
            frequency_z: Self::DEFAULT_FREQUENCY,
            offset_x: 0.0,
            offset_y: 0.0,
            offset_z: 0.0,
            scale_amplitude: 1.0,
            scale_offset: 0.0,
            min_threshold: 0.0,
            max_threshold: 1.0,
            invert: false,
        }
    }
}

/// A built, immutable generator node.
#[derive(Debug, Clone)]
pub struct FastNoise {
    settings: NoiseSettings,
    sampler: Sampler,
}

impl FastNoise {
    /// Creates a node from its settings and sampler.
    pub fn new(settings: NoiseSettings, sampler: impl Into<Sampler>) -> Self {
        Self {
            settings,
            sampler: sampler.into(),
        }
    }

    /// Starts a new configuration with every field at its default.
    pub fn builder() -> NoiseBuilder {
        NoiseBuilder::new()
    }

    /// Starts a wrapper around a user noise function.
    #[must_use]
    pub fn wrapper(function: NoiseFunction) -> NoiseWrapper {
        NoiseWrapper::new(function)
    }

    /// A neutral generator that returns 0 everywhere.
    ///
    /// Used wherever a configuration names a reference it does not provide.
    #[must_use]
    pub fn dummy() -> Self {
        NoiseWrapper::default().generate_passthrough(NoiseSettings::DEFAULT_SEED)
    }

    /// The node's shared settings.
    #[must_use]
    pub fn settings(&self) -> &NoiseSettings {
        &self.settings
    }

    /// The node's algorithm.
    #[must_use]
    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    /// The seed used by the facade.
    #[must_use]
    pub fn seed(&self) -> i32 {
        self.settings.seed
    }

    /// Rebuilds a configuration that produces an equivalent generator.
    pub fn to_builder(&self) -> NoiseBuilder {
        self.sampler
            .describe(NoiseBuilder::from_settings(&self.settings))
    }

    /// Raw 1D sample in lattice space.
    #[inline]
    #[must_use]
    pub fn sample_1d(&self, seed: i32, x: f32) -> f32 {
        self.sampler.sample_1d(seed, x)
    }

    /// Raw 2D sample in lattice space.
    #[inline]
    #[must_use]
    pub fn sample_2d(&self, seed: i32, x: f32, y: f32) -> f32 {
        self.sampler.sample_2d(seed, x, y)
    }

    /// Raw 3D sample in lattice space.
    #[inline]
    #[must_use]
    pub fn sample_3d(&self, seed: i32, x: f32, y: f32, z: f32) -> f32 {
        self.sampler.sample_3d(seed, x, y, z)
    }

    #[inline]
    fn project_1d(&self, x: f32) -> f32 {
        let s = &self.settings;
        self.sample_1d(s.seed, (x + s.offset_x) * s.frequency_x)
    }

    #[inline]
    fn project_2d(&self, x: f32, y: f32) -> f32 {
        let s = &self.settings;
        self.sample_2d(
            s.seed,
            (x + s.offset_x) * s.frequency_x,
            (y + s.offset_y) * s.frequency_y,
        )
    }

    #[inline]
    fn project_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let s = &self.settings;
        self.sample_3d(
            s.seed,
            (x + s.offset_x) * s.frequency_x,
            (y + s.offset_y) * s.frequency_y,
            (z + s.offset_z) * s.frequency_z,
        )
    }

    /// Samples a 1D coordinate.
    #[must_use]
    pub fn get_noise_1d(&self, x: f32) -> f32 {
        match &self.sampler {
            Sampler::Multi(multi) => multi.noise_1d(x),
            Sampler::Scaled(scaled) => scaled.noise_1d(x),
            Sampler::Warped(_) => self.get_noise_2d(x, AXIS_FILLER),
            Sampler::Wrapped(wrapped) if wrapped.is_passthrough() => {
                wrapped.function().eval_1d(self.settings.seed, x)
            }
            _ => self.project_1d(x),
        }
    }

    /// Samples a 2D coordinate.
    #[must_use]
    pub fn get_noise_2d(&self, x: f32, y: f32) -> f32 {
        match &self.sampler {
            Sampler::Multi(multi) => multi.noise_2d(x, y),
            Sampler::Scaled(scaled) => scaled.noise_2d(x, y),
            Sampler::Warped(warped) => warped.noise_2d(&self.settings, x, y),
            Sampler::Wrapped(wrapped) if wrapped.is_passthrough() => {
                wrapped.function().eval_2d(self.settings.seed, x, y)
            }
            Sampler::OpenSimplex2(_) | Sampler::OpenSimplex2S(_) => {
                let (x, y) = open_simplex2_noise::skew_2d(x, y);
                self.project_2d(x, y)
            }
            _ => self.project_2d(x, y),
        }
    }

    /// Samples a 3D coordinate.
    #[must_use]
    pub fn get_noise_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        match &self.sampler {
            Sampler::Multi(multi) => multi.noise_3d(x, y, z),
            Sampler::Scaled(scaled) => scaled.noise_3d(x, y, z),
            Sampler::Warped(warped) => warped.noise_3d(&self.settings, x, y, z),
            Sampler::Wrapped(wrapped) if wrapped.is_passthrough() => {
                wrapped.function().eval_3d(self.settings.seed, x, y, z)
            }
            Sampler::OpenSimplex2(_) | Sampler::OpenSimplex2S(_) => {
                let (x, y, z) = open_simplex2_noise::rotate_3d(x, y, z);
                self.project_3d(x, y, z)
            }
            _ => self.project_3d(x, y, z),
        }
    }

    #[inline]
    fn rescale(&self, noise: f32) -> f32 {
        noise * self.settings.scale_amplitude + self.settings.scale_offset
    }

    /// Samples a 1D coordinate mapped into the configured output range.
    #[must_use]
    pub fn get_noise_scaled_1d(&self, x: f32) -> f32 {
        match &self.sampler {
            Sampler::Multi(multi) if multi.reduces_scaled_output() => multi.noise_scaled_1d(x),
            Sampler::Scaled(scaled) => scaled.noise_scaled_1d(x),
            _ => self.rescale(self.get_noise_1d(x)),
        }
    }

    /// Samples a 2D coordinate mapped into the configured output range.
    #[must_use]
    pub fn get_noise_scaled_2d(&self, x: f32, y: f32) -> f32 {
        match &self.sampler {
            Sampler::Multi(multi) if multi.reduces_scaled_output() => multi.noise_scaled_2d(x, y),
            Sampler::Scaled(scaled) => scaled.noise_scaled_2d(x, y),
            _ => self.rescale(self.get_noise_2d(x, y)),
        }
    }

    /// Samples a 3D coordinate mapped into the configured output range.
    #[must_use]
    pub fn get_noise_scaled_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        match &self.sampler {
            Sampler::Multi(multi) if multi.reduces_scaled_output() => {
                multi.noise_scaled_3d(x, y, z)
            }
            Sampler::Scaled(scaled) => scaled.noise_scaled_3d(x, y, z),
            _ => self.rescale(self.get_noise_3d(x, y, z)),
        }
    }

    /// Threshold membership of the noise at a 1D coordinate.
    #[must_use]
    pub fn get_boolean_1d(&self, x: f32) -> bool {
        self.is_in_threshold(self.get_noise_1d(x))
    }

    /// Threshold membership of the noise at a 2D coordinate.
    #[must_use]
    pub fn get_boolean_2d(&self, x: f32, y: f32) -> bool {
        self.is_in_threshold(self.get_noise_2d(x, y))
    }

    /// Threshold membership of the noise at a 3D coordinate.
    #[must_use]
    pub fn get_boolean_3d(&self, x: f32, y: f32, z: f32) -> bool {
        self.is_in_threshold(self.get_noise_3d(x, y, z))
    }

    /// Whether an already sampled value lies strictly inside the threshold.
    #[inline]
    #[must_use]
    pub fn is_in_threshold(&self, noise: f32) -> bool {
        self.settings.is_in_threshold(noise)
    }

    /// Whether a value lies inside the threshold widened by `margin`.
    #[inline]
    #[must_use]
    pub fn is_in_threshold_within(&self, noise: f32, margin: f32) -> bool {
        self.settings.is_in_threshold_within(noise, margin)
    }
}

impl Default for FastNoise {
    fn default() -> Self {
        Self::dummy()
    }
}
