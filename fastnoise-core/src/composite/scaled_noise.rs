//! Output transform over a reference generator.

use crate::config::NoiseBuilder;
use crate::function::ScaleFunction;
use crate::generator::{DescribeNoise, FastNoise, NoiseSampler};

/// Passes every output of a reference through a scale function.
///
/// The node holding this sampler carries the reference's settings, so
/// thresholds and the facade behave as they would on the reference.
#[derive(Debug, Clone)]
pub struct ScaledNoise {
    reference: Box<FastNoise>,
    function: ScaleFunction,
}

impl ScaledNoise {
    /// Wraps `reference`.
    #[must_use]
    pub fn new(reference: FastNoise, function: ScaleFunction) -> Self {
        Self {
            reference: Box::new(reference),
            function,
        }
    }

    /// Wraps `reference` in a node that inherits its settings.
    #[must_use]
    pub fn wrap(reference: FastNoise, function: ScaleFunction) -> FastNoise {
        let settings = *reference.settings();
        FastNoise::new(settings, Self::new(reference, function))
    }

    /// The wrapped generator.
    #[must_use]
    pub fn reference(&self) -> &FastNoise {
        &self.reference
    }

    /// Scales the reference's 1D facade output.
    #[must_use]
    pub fn noise_1d(&self, x: f32) -> f32 {
        self.function.apply(self.reference.get_noise_1d(x))
    }

    /// Scales the reference's 2D facade output.
    #[must_use]
    pub fn noise_2d(&self, x: f32, y: f32) -> f32 {
        self.function.apply(self.reference.get_noise_2d(x, y))
    }

    /// Scales the reference's 3D facade output.
    #[must_use]
    pub fn noise_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        self.function.apply(self.reference.get_noise_3d(x, y, z))
    }

    /// Scales the reference's scaled 1D output.
    #[must_use]
    pub fn noise_scaled_1d(&self, x: f32) -> f32 {
        self.function.apply(self.reference.get_noise_scaled_1d(x))
    }

    /// Scales the reference's scaled 2D output.
    #[must_use]
    pub fn noise_scaled_2d(&self, x: f32, y: f32) -> f32 {
        self.function.apply(self.reference.get_noise_scaled_2d(x, y))
    }

    /// Scales the reference's scaled 3D output.
    #[must_use]
    pub fn noise_scaled_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        self.function.apply(self.reference.get_noise_scaled_3d(x, y, z))
    }
}

impl NoiseSampler for ScaledNoise {
    fn sample_1d(&self, seed: i32, x: f32) -> f32 {
        self.function.apply(self.reference.sample_1d(seed, x))
    }

    fn sample_2d(&self, seed: i32, x: f32, y: f32) -> f32 {
        self.function.apply(self.reference.sample_2d(seed, x, y))
    }

    fn sample_3d(&self, seed: i32, x: f32, y: f32, z: f32) -> f32 {
        self.function.apply(self.reference.sample_3d(seed, x, y, z))
    }
}

impl DescribeNoise for ScaledNoise {
    fn describe(&self, _builder: NoiseBuilder) -> NoiseBuilder {
        self.reference
            .to_builder()
            .scale_function(self.function.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NoiseType;

    #[test]
    fn test_scale_applies_to_every_layer() {
        let reference = FastNoise::builder()
            .noise_type(NoiseType::Perlin)
            .scale_amplitude(3.0)
            .build();
        let scaled = ScaledNoise::wrap(reference.clone(), ScaleFunction::new(|v| v * 2.0));

        let (x, y) = (13.5, -7.25);
        assert!((scaled.get_noise_2d(x, y) - reference.get_noise_2d(x, y) * 2.0).abs() < 1e-6);
        assert!(
            (scaled.get_noise_scaled_2d(x, y) - reference.get_noise_scaled_2d(x, y) * 2.0).abs()
                < 1e-6
        );
        assert!(
            (scaled.sample_2d(9, 0.3, 0.4) - reference.sample_2d(9, 0.3, 0.4) * 2.0).abs() < 1e-6
        );
    }

    #[test]
    fn test_scaled_node_inherits_reference_settings() {
        let reference = FastNoise::builder().seed(77).threshold(-0.5, 0.5).build();
        let scaled = ScaledNoise::wrap(reference.clone(), ScaleFunction::new(f32::abs));
        assert_eq!(scaled.settings(), reference.settings());
    }
}
