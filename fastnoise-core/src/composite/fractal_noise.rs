//! Fractal sums over a reference generator.

use fastnoise_utils::math::{fractal_bounding, ping_pong};

use crate::config::{FractalType, NoiseBuilder, NoiseType};
use crate::function::FractalFunction;
use crate::generator::{DescribeNoise, FastNoise, NoiseSampler};

/// Per-octave post-processing.
#[derive(Debug, Clone)]
pub enum FractalCurve {
    /// Fractional Brownian motion, the raw octave.
    Fbm,
    /// `|f| * 2 - 1`
    Billow,
    /// `1 - |f|`
    RigidMulti,
    /// `(ping_pong((f + 1) * strength) - 0.5) * 2`
    PingPong(f32),
    /// User curve.
    Function(FractalFunction),
}

impl FractalCurve {
    /// Applies the curve to one octave sample.
    #[inline]
    #[must_use]
    pub fn apply(&self, f: f32) -> f32 {
        match self {
            Self::Fbm => f,
            Self::Billow => f.abs() * 2.0 - 1.0,
            Self::RigidMulti => 1.0 - f.abs(),
            Self::PingPong(strength) => (ping_pong((f + 1.0) * strength) - 0.5) * 2.0,
            Self::Function(curve) => curve.apply(f),
        }
    }

    /// The selector matching this curve.
    #[must_use]
    pub fn kind(&self) -> FractalType {
        match self {
            Self::Fbm => FractalType::Fbm,
            Self::Billow => FractalType::Billow,
            Self::RigidMulti => FractalType::RigidMulti,
            Self::PingPong(_) => FractalType::PingPong,
            Self::Function(_) => FractalType::Function,
        }
    }
}

/// Sums several octaves of a reference, each at a higher frequency and lower
/// amplitude than the last.
#[derive(Debug, Clone)]
pub struct FractalNoise {
    reference: Box<FastNoise>,
    curve: FractalCurve,
    octaves: u32,
    gain: f32,
    lacunarity_x: f32,
    lacunarity_y: f32,
    lacunarity_z: f32,
    bounding: f32,
}

impl FractalNoise {
    /// Creates a fractal over `reference`.
    ///
    /// An octave count of zero is treated as one.
    #[must_use]
    pub fn new(
        reference: FastNoise,
        curve: FractalCurve,
        octaves: u32,
        gain: f32,
        lacunarity: [f32; 3],
    ) -> Self {
        let octaves = octaves.max(1);
        Self {
            reference: Box::new(reference),
            curve,
            octaves,
            gain,
            lacunarity_x: lacunarity[0],
            lacunarity_y: lacunarity[1],
            lacunarity_z: lacunarity[2],
            bounding: fractal_bounding(gain, octaves),
        }
    }

    /// The wrapped generator.
    #[must_use]
    pub fn reference(&self) -> &FastNoise {
        &self.reference
    }

    /// Number of octaves summed.
    #[must_use]
    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Normalization factor applied to the sum.
    #[must_use]
    pub fn bounding(&self) -> f32 {
        self.bounding
    }
}

impl NoiseSampler for FractalNoise {
    fn sample_1d(&self, seed: i32, mut x: f32) -> f32 {
        let mut seed = seed;
        let mut amp = 1.0;
        let mut sum = 0.0;
        for _ in 0..self.octaves {
            sum += self.curve.apply(self.reference.sample_1d(seed, x)) * amp;
            seed = seed.wrapping_add(1);
            x *= self.lacunarity_x;
            amp *= self.gain;
        }
        sum * self.bounding
    }

    fn sample_2d(&self, seed: i32, mut x: f32, mut y: f32) -> f32 {
        let mut seed = seed;
        let mut amp = 1.0;
        let mut sum = 0.0;
        for _ in 0..self.octaves {
            sum += self.curve.apply(self.reference.sample_2d(seed, x, y)) * amp;
            seed = seed.wrapping_add(1);
            x *= self.lacunarity_x;
            y *= self.lacunarity_y;
            amp *= self.gain;
        }
        sum * self.bounding
    }

    fn sample_3d(&self, seed: i32, mut x: f32, mut y: f32, mut z: f32) -> f32 {
        let mut seed = seed;
        let mut amp = 1.0;
        let mut sum = 0.0;
        for _ in 0..self.octaves {
            sum += self.curve.apply(self.reference.sample_3d(seed, x, y, z)) * amp;
            seed = seed.wrapping_add(1);
            x *= self.lacunarity_x;
            y *= self.lacunarity_y;
            z *= self.lacunarity_z;
            amp *= self.gain;
        }
        sum * self.bounding
    }
}

impl DescribeNoise for FractalNoise {
    fn describe(&self, builder: NoiseBuilder) -> NoiseBuilder {
        let builder = builder
            .noise_type(NoiseType::Fractal)
            .reference(self.reference.to_builder())
            .fractal(self.curve.kind())
            .octaves(self.octaves)
            .gain(self.gain)
            .lacunarity_x(self.lacunarity_x)
            .lacunarity_y(self.lacunarity_y)
            .lacunarity_z(self.lacunarity_z);
        match &self.curve {
            FractalCurve::PingPong(strength) => builder.ping_pong_strength(*strength),
            FractalCurve::Function(f) => builder.fractal_function(f.clone()),
            _ => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::NoiseSettings;
    use crate::noise::SimplexNoise;

    fn simplex() -> FastNoise {
        FastNoise::new(NoiseSettings::default(), SimplexNoise)
    }

    #[test]
    fn test_single_octave_is_the_reference() {
        for octaves in [0, 1] {
            let fractal = FractalNoise::new(simplex(), FractalCurve::Fbm, octaves, 0.5, [2.0; 3]);
            let expected = simplex().sample_2d(42, 1.3, 2.7);
            assert!((fractal.sample_2d(42, 1.3, 2.7) - expected).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_octaves_advance_seed_and_frequency() {
        let fractal = FractalNoise::new(simplex(), FractalCurve::Fbm, 2, 0.5, [2.0; 3]);
        let reference = simplex();
        let expected = (reference.sample_2d(5, 0.7, 0.2)
            + reference.sample_2d(6, 1.4, 0.4) * 0.5)
            * fractal_bounding(0.5, 2);
        assert!((fractal.sample_2d(5, 0.7, 0.2) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_curves() {
        assert!((FractalCurve::Billow.apply(-0.25) + 0.5).abs() < f32::EPSILON);
        assert!((FractalCurve::RigidMulti.apply(-0.25) - 0.75).abs() < f32::EPSILON);
        // (ping_pong(1.5 * 2) - 0.5) * 2 = (1 - 0.5) * 2
        assert!((FractalCurve::PingPong(2.0).apply(0.5) - 1.0).abs() < f32::EPSILON);
        let custom = FractalCurve::Function(FractalFunction::new(|f| f * 3.0));
        assert!((custom.apply(0.5) - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_fbm_stays_bounded() {
        let fractal = FractalNoise::new(simplex(), FractalCurve::Fbm, 5, 0.5, [2.0; 3]);
        for i in 0..1000 {
            let x = i as f32 * 0.137;
            assert!(fractal.sample_3d(1337, x, -x, x * 0.5).abs() <= 1.05);
        }
    }
}
