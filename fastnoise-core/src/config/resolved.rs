//! Fully resolved configuration and generator graph assembly.

use std::fmt;
use std::sync::Arc;

use crate::composite::{
    FractalCurve, FractalNoise, MultiNoise, MultiReducer, ScaledNoise, WarpKernel, WarpedNoise,
};
use crate::function::{
    DistanceFunction, FractalFunction, MultiFunction, ReturnFunction, ScaleFunction,
};
use crate::generator::{FastNoise, NoiseSettings};
use crate::noise::{
    CellularNoise, CellularReturn, CubicNoise, DistanceMetric, OpenSimplex2Noise,
    OpenSimplex2SNoise, PerlinNoise, SimplexNoise, ValueNoise, WhiteNoise,
};

use super::builder::NoiseBuilder;
use super::types::{
    DistanceType, FractalType, InterpolationType, MultiType, NoiseType, ReturnType, WarpType,
};

/// Replaces the standard build chain of a configuration.
#[derive(Clone)]
pub struct NoiseProvider(Arc<dyn Fn(&NoiseConfig) -> FastNoise + Send + Sync>);

impl NoiseProvider {
    /// Wraps a factory.
    pub fn new(f: impl Fn(&NoiseConfig) -> FastNoise + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Builds a generator from the resolved configuration.
    #[must_use]
    pub fn provide(&self, config: &NoiseConfig) -> FastNoise {
        (self.0)(config)
    }
}

impl fmt::Debug for NoiseProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NoiseProvider(..)")
    }
}

/// A configuration with every default applied.
///
/// Produced by [`NoiseBuilder::resolve`]. Nested lookup and reference
/// configurations stay unresolved until the graph is built.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub struct NoiseConfig {
    pub provider: Option<NoiseProvider>,
    pub noise_type: NoiseType,
    pub fractal: FractalType,
    pub warp: WarpType,
    pub distance: DistanceType,
    pub cellular_return: ReturnType,
    pub multi: MultiType,
    pub interpolation: InterpolationType,
    pub distance_function: Option<DistanceFunction>,
    pub return_function: Option<ReturnFunction>,
    pub multi_function: Option<MultiFunction>,
    pub fractal_function: Option<FractalFunction>,
    pub scale_function: Option<ScaleFunction>,
    pub noise_lookup: Option<NoiseBuilder>,
    pub references: Vec<NoiseBuilder>,
    pub seed: i32,
    pub frequency_x: f32,
    pub frequency_y: f32,
    pub frequency_z: f32,
    pub octaves: u32,
    pub lacunarity_x: f32,
    pub lacunarity_y: f32,
    pub lacunarity_z: f32,
    pub gain: f32,
    pub ping_pong_strength: f32,
    pub jitter_x: f32,
    pub jitter_y: f32,
    pub jitter_z: f32,
    pub warp_amplitude_x: f32,
    pub warp_amplitude_y: f32,
    pub warp_amplitude_z: f32,
    pub warp_frequency_x: f32,
    pub warp_frequency_y: f32,
    pub warp_frequency_z: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub offset_z: f32,
    pub invert: bool,
    pub scale_amplitude: f32,
    pub scale_offset: f32,
    pub min_threshold: f32,
    pub max_threshold: f32,
}

impl NoiseConfig {
    /// Default fractal octave count.
    pub const DEFAULT_OCTAVES: u32 = 3;
    /// Default amplitude multiplier between octaves.
    pub const DEFAULT_GAIN: f32 = 0.5;
    /// Default frequency multiplier between octaves.
    pub const DEFAULT_LACUNARITY: f32 = 2.0;
    /// Default ping-pong strength.
    pub const DEFAULT_PING_PONG_STRENGTH: f32 = 2.0;
    /// Default cellular jitter.
    pub const DEFAULT_JITTER: f32 = 1.0;
    /// Default warp displacement.
    pub const DEFAULT_WARP_AMPLITUDE: f32 = 5.0;
    /// Default warp field frequency.
    pub const DEFAULT_WARP_FREQUENCY: f32 = 0.075;

    /// The settings shared by every node built from this configuration.
    #[must_use]
    pub fn settings(&self) -> NoiseSettings {
        NoiseSettings {
            seed: self.seed,
            frequency_x: self.frequency_x,
            frequency_y: self.frequency_y,
            frequency_z: self.frequency_z,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            offset_z: self.offset_z,
            scale_amplitude: self.scale_amplitude,
            scale_offset: self.scale_offset,
            min_threshold: self.min_threshold,
            max_threshold: self.max_threshold,
            invert: self.invert,
        }
    }

    /// Builds the generator: the provider if one is set, otherwise the
    /// standard chain.
    #[must_use]
    pub fn build(&self) -> FastNoise {
        match &self.provider {
            Some(provider) => provider.provide(self),
            None => self.create_generator(),
        }
    }

    /// Builds the standard chain: the basic generator, then a fractal layer,
    /// then a warp layer, then the output transform.
    ///
    /// The fractal and warp layers are skipped when the basic generator
    /// already is that layer.
    #[must_use]
    pub fn create_generator(&self) -> FastNoise {
        let mut generator = self.basic_generator();

        if self.fractal != FractalType::None && self.noise_type != NoiseType::Fractal {
            log::debug!("adding {:?} fractal layer over {:?}", self.fractal, self.noise_type);
            generator = FastNoise::new(self.settings(), self.fractal_over(generator));
        }
        if self.warp != WarpType::None && self.noise_type != NoiseType::Warped {
            log::debug!("adding {:?} warp layer over {:?}", self.warp, self.noise_type);
            generator = FastNoise::new(self.settings(), self.warp_over(generator));
        }
        if let Some(function) = &self.scale_function {
            generator = ScaledNoise::wrap(generator, function.clone());
        }
        generator
    }

    /// Builds the node selected by `noise_type`, without any layers.
    #[must_use]
    pub fn basic_generator(&self) -> FastNoise {
        log::debug!("building {:?} generator with seed {}", self.noise_type, self.seed);
        let settings = self.settings();
        match self.noise_type {
            NoiseType::Value => FastNoise::new(settings, ValueNoise::new(self.interpolation)),
            NoiseType::Perlin => FastNoise::new(settings, PerlinNoise::new(self.interpolation)),
            NoiseType::Simplex => FastNoise::new(settings, SimplexNoise),
            NoiseType::OpenSimplex2 => FastNoise::new(settings, OpenSimplex2Noise),
            NoiseType::OpenSimplex2S => FastNoise::new(settings, OpenSimplex2SNoise),
            NoiseType::Cellular => FastNoise::new(settings, self.cellular()),
            NoiseType::White => FastNoise::new(settings, WhiteNoise),
            NoiseType::Cubic => FastNoise::new(settings, CubicNoise),
            NoiseType::Fractal => {
                FastNoise::new(settings, self.fractal_over(self.build_reference()))
            }
            NoiseType::Warped => {
                FastNoise::new(settings, self.warp_over(self.build_reference()))
            }
            NoiseType::Multi => FastNoise::new(
                settings,
                MultiNoise::new(self.build_references(), self.multi_reducer()),
            ),
        }
    }

    fn cellular(&self) -> CellularNoise {
        let distance = match self.distance {
            DistanceType::Euclidean => DistanceMetric::Euclidean,
            DistanceType::Manhattan => DistanceMetric::Manhattan,
            DistanceType::Natural => DistanceMetric::Natural,
            DistanceType::Function => DistanceMetric::Function(
                self.distance_function
                    .clone()
                    .unwrap_or_else(|| DistanceFunction::three_d(|_, _, _| 0.0)),
            ),
        };
        let output = match self.cellular_return {
            ReturnType::NoiseLookup => CellularReturn::NoiseLookup(Box::new(self.build_lookup())),
            ReturnType::Function => CellularReturn::Function(
                self.return_function
                    .clone()
                    .unwrap_or_else(|| ReturnFunction::three_d(|_, _, _, _, _, _| 0.0)),
            ),
            kind => CellularReturn::from_kind(kind),
        };
        CellularNoise::new(distance, output, self.jitter_x, self.jitter_y, self.jitter_z)
    }

    /// Wraps `reference` in the fractal layer. `FractalType::None` sums plain
    /// octaves.
    fn fractal_over(&self, reference: FastNoise) -> FractalNoise {
        let curve = match self.fractal {
            FractalType::None | FractalType::Fbm => FractalCurve::Fbm,
            FractalType::Billow => FractalCurve::Billow,
            FractalType::RigidMulti => FractalCurve::RigidMulti,
            FractalType::PingPong => FractalCurve::PingPong(self.ping_pong_strength),
            FractalType::Function => FractalCurve::Function(
                self.fractal_function
                    .clone()
                    .unwrap_or_else(|| FractalFunction::new(|_| 0.0)),
            ),
        };
        FractalNoise::new(
            reference,
            curve,
            self.octaves,
            self.gain,
            [self.lacunarity_x, self.lacunarity_y, self.lacunarity_z],
        )
    }

    /// Wraps `reference` in the warp layer. `WarpType::None` uses the basic
    /// grid.
    fn warp_over(&self, reference: FastNoise) -> WarpedNoise {
        let kernel = match self.warp {
            WarpType::None | WarpType::BasicGrid => WarpKernel::BasicGrid,
            WarpType::Simplex2 => WarpKernel::Simplex2,
            WarpType::Simplex2Reduced => WarpKernel::Simplex2Reduced,
            WarpType::NoiseLookup => WarpKernel::NoiseLookup(Box::new(self.build_lookup())),
        };
        WarpedNoise::new(
            reference,
            kernel,
            [self.warp_amplitude_x, self.warp_amplitude_y, self.warp_amplitude_z],
            [self.warp_frequency_x, self.warp_frequency_y, self.warp_frequency_z],
        )
    }

    fn multi_reducer(&self) -> MultiReducer {
        match self.multi {
            MultiType::Min => MultiReducer::Min,
            MultiType::Max => MultiReducer::Max,
            MultiType::Avg => MultiReducer::Avg,
            MultiType::Mul => MultiReducer::Mul,
            MultiType::Div => MultiReducer::Div,
            MultiType::Sum => MultiReducer::Sum,
            MultiType::Function => MultiReducer::Function(
                self.multi_function
                    .clone()
                    .unwrap_or_else(|| MultiFunction::three_d(|_, _, _, _| 0.0)),
            ),
        }
    }

    /// The lookup generator: `noise_lookup`, else the first reference, else
    /// the dummy.
    #[must_use]
    pub fn build_lookup(&self) -> FastNoise {
        match &self.noise_lookup {
            Some(lookup) => lookup.build(),
            None => self.build_reference(),
        }
    }

    /// The first reference, or the dummy when there is none.
    #[must_use]
    pub fn build_reference(&self) -> FastNoise {
        match self.references.first() {
            Some(reference) => reference.build(),
            None => {
                log::debug!("{:?} generator has no reference, using the dummy", self.noise_type);
                FastNoise::dummy()
            }
        }
    }

    /// Every reference, or a single dummy when there are none.
    #[must_use]
    pub fn build_references(&self) -> Vec<FastNoise> {
        if self.references.is_empty() {
            log::debug!("{:?} generator has no references, using the dummy", self.noise_type);
            return vec![FastNoise::dummy()];
        }
        self.references.iter().map(NoiseBuilder::build).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Sampler;

    #[test]
    fn test_fractal_and_warp_layers_wrap_basic_generator() {
        let noise = NoiseBuilder::new()
            .noise_type(NoiseType::Perlin)
            .fractal(FractalType::Billow)
            .warp(WarpType::Simplex2)
            .build();
        let Sampler::Warped(warped) = noise.sampler() else {
            panic!("expected warp on the outside, got {:?}", noise.sampler());
        };
        let Sampler::Fractal(fractal) = warped.reference().sampler() else {
            panic!("expected fractal inside the warp");
        };
        assert!(matches!(fractal.reference().sampler(), Sampler::Perlin(_)));
    }

    #[test]
    fn test_fractal_type_is_not_layered_twice() {
        let noise = NoiseBuilder::new()
            .noise_type(NoiseType::Fractal)
            .reference(NoiseBuilder::new().noise_type(NoiseType::Value))
            .build();
        let Sampler::Fractal(fractal) = noise.sampler() else {
            panic!("expected a fractal node");
        };
        assert!(matches!(fractal.reference().sampler(), Sampler::Value(_)));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_missing_reference_uses_dummy() {
        let noise = NoiseBuilder::new().noise_type(NoiseType::Warped).build();
        assert_eq!(noise.get_noise_2d(3.0, 4.0), 0.0);
        let noise = NoiseBuilder::new().noise_type(NoiseType::Multi).build();
        let Sampler::Multi(multi) = noise.sampler() else {
            panic!("expected a multi node");
        };
        assert_eq!(multi.references().len(), 1);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_provider_replaces_chain() {
        let noise = NoiseBuilder::new()
            .seed(7)
            .provider(NoiseProvider::new(|cfg| {
                NoiseBuilder::new()
                    .noise_type(NoiseType::White)
                    .seed(cfg.seed * 2)
                    .build()
            }))
            .build();
        assert_eq!(noise.seed(), 14);
        assert!(matches!(noise.sampler(), Sampler::White(_)));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_function_kinds_without_callbacks_return_zero() {
        let noise = NoiseBuilder::new()
            .noise_type(NoiseType::Cellular)
            .cellular_return(ReturnType::Function)
            .build();
        assert_eq!(noise.sample_2d(1, 0.3, 0.7), 0.0);

        let noise = NoiseBuilder::new()
            .noise_type(NoiseType::Value)
            .fractal(FractalType::Function)
            .build();
        assert_eq!(noise.get_noise_3d(5.0, 6.0, 7.0), 0.0);
    }

    #[test]
    fn test_scale_function_is_outermost() {
        let noise = NoiseBuilder::new()
            .noise_type(NoiseType::Simplex)
            .fractal(FractalType::Fbm)
            .scale_function(ScaleFunction::new(|v| v * 0.5))
            .build();
        let Sampler::Scaled(scaled) = noise.sampler() else {
            panic!("expected a scaled node");
        };
        assert!(matches!(scaled.reference().sampler(), Sampler::Fractal(_)));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_settings_snapshot() {
        let cfg = NoiseBuilder::new()
            .seed(3)
            .frequency_z(0.5)
            .offset_x(2.0)
            .invert(true)
            .resolve();
        let settings = cfg.settings();
        assert_eq!(settings.seed, 3);
        assert_eq!(settings.frequency_z, 0.5);
        assert_eq!(settings.frequency_x, 0.01);
        assert_eq!(settings.offset_x, 2.0);
        assert!(settings.invert);
    }
}
