//! Generators backed by a user noise function.

use crate::config::{NoiseBuilder, NoiseProvider};
use crate::function::NoiseFunction;
use crate::generator::{DescribeNoise, FastNoise, NoiseSampler, NoiseSettings};

/// Samples a [`NoiseFunction`].
///
/// A regular wrapped node goes through the usual offset and frequency
/// handling. A passthrough node hands facade coordinates to the function
/// untouched.
#[derive(Debug, Clone)]
pub struct WrappedNoise {
    function: NoiseFunction,
    passthrough: bool,
}

impl WrappedNoise {
    /// Wraps `function`.
    #[must_use]
    pub fn new(function: NoiseFunction, passthrough: bool) -> Self {
        Self {
            function,
            passthrough,
        }
    }

    /// The wrapped function.
    #[must_use]
    pub fn function(&self) -> &NoiseFunction {
        &self.function
    }

    /// Whether the facade skips offsets and frequency.
    #[must_use]
    pub fn is_passthrough(&self) -> bool {
        self.passthrough
    }
}

impl NoiseSampler for WrappedNoise {
    fn sample_1d(&self, seed: i32, x: f32) -> f32 {
        self.function.eval_1d(seed, x)
    }

    fn sample_2d(&self, seed: i32, x: f32, y: f32) -> f32 {
        self.function.eval_2d(seed, x, y)
    }

    fn sample_3d(&self, seed: i32, x: f32, y: f32, z: f32) -> f32 {
        self.function.eval_3d(seed, x, y, z)
    }
}

impl DescribeNoise for WrappedNoise {
    fn describe(&self, builder: NoiseBuilder) -> NoiseBuilder {
        let function = self.function.clone();
        let passthrough = self.passthrough;
        builder.provider(NoiseProvider::new(move |cfg| {
            FastNoise::new(cfg.settings(), WrappedNoise::new(function.clone(), passthrough))
        }))
    }
}

/// Entry point for turning a [`NoiseFunction`] into a generator.
#[derive(Debug, Clone, Default)]
pub struct NoiseWrapper {
    function: NoiseFunction,
}

impl NoiseWrapper {
    /// Wraps `function`.
    #[must_use]
    pub fn new(function: NoiseFunction) -> Self {
        Self { function }
    }

    /// Replaces the wrapped function.
    #[must_use]
    pub fn wrap_function(mut self, function: NoiseFunction) -> Self {
        self.function = function;
        self
    }

    /// The wrapped function.
    #[must_use]
    pub fn function(&self) -> &NoiseFunction {
        &self.function
    }

    /// A builder whose `build()` produces a wrapped node using the built
    /// config's seed, frequency, offsets, scale and thresholds.
    pub fn create_builder(&self) -> NoiseBuilder {
        let function = self.function.clone();
        NoiseBuilder::new().provider(NoiseProvider::new(move |cfg| {
            FastNoise::new(cfg.settings(), WrappedNoise::new(function.clone(), false))
        }))
    }

    /// A node that calls the function directly with `seed`, ignoring
    /// frequency and offsets.
    #[must_use]
    pub fn generate_passthrough(&self, seed: i32) -> FastNoise {
        FastNoise::new(
            NoiseSettings::with_seed(seed),
            WrappedNoise::new(self.function.clone(), true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_passthrough_ignores_frequency() {
        let wrapper = NoiseWrapper::new(NoiseFunction::two_d(|seed, x, y| seed as f32 + x * y));
        let noise = wrapper.generate_passthrough(10);
        assert_eq!(noise.get_noise_2d(3.0, 4.0), 22.0);
        assert_eq!(noise.get_noise_1d(2.0), 10.0 + 2.0 * 1337.0);
    }

    #[test]
    fn test_created_builder_applies_frequency() {
        let wrapper = NoiseWrapper::new(NoiseFunction::one_d(|_, x| x));
        let noise = wrapper.create_builder().frequency(0.5).offset_x(2.0).build();
        assert!((noise.get_noise_1d(4.0) - 3.0).abs() < f32::EPSILON);
        assert!(!noise.get_boolean_1d(4.0));
    }

    #[test]
    fn test_passthrough_round_trips_through_builder() {
        let wrapper = NoiseWrapper::new(NoiseFunction::three_d(|s, x, y, z| s as f32 + x - y * z));
        let noise = wrapper.generate_passthrough(5);
        let rebuilt = noise.to_builder().build();
        for i in 0..10 {
            let p = i as f32 * 0.5;
            let expected = noise.get_noise_3d(p, 1.0, 2.0);
            assert!((rebuilt.get_noise_3d(p, 1.0, 2.0) - expected).abs() < f32::EPSILON);
        }
    }
}
