//! Fluent, partially specified generator configuration.

use crate::function::{
    DistanceFunction, FractalFunction, MultiFunction, ReturnFunction, ScaleFunction,
};
use crate::generator::{FastNoise, NoiseSettings};

use super::resolved::{NoiseConfig, NoiseProvider};
use super::types::{
    DistanceType, FractalType, InterpolationType, MultiType, NoiseType, ReturnType, WarpType,
};

/// Generates a `field(value)` setter and a `get_field()` accessor for each
/// optional field. The accessor returns `None` while the field is unset.
macro_rules! setters {
    ($($(#[$doc:meta])* $name:ident, $get:ident: $ty:ty;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(mut self, $name: $ty) -> Self {
                self.$name = Some($name);
                self
            }

            #[doc = concat!("The value set by [`NoiseBuilder::", stringify!($name), "`], if any.")]
            #[must_use]
            pub fn $get(&self) -> Option<$ty> {
                self.$name
            }
        )*
    };
}

/// Generates setters that write the same value to all three axes.
macro_rules! axis_setters {
    ($($(#[$doc:meta])* $name:ident => $x:ident, $y:ident, $z:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(self, value: f32) -> Self {
                self.$x(value).$y(value).$z(value)
            }
        )*
    };
}

/// A generator configuration under construction.
///
/// Every field starts unset. Unset fields take their documented default in
/// [`NoiseBuilder::resolve`], and kinds implied by other fields are derived
/// there too, so setters can be called in any order.
///
/// ```
/// use fastnoise_core::config::{FractalType, NoiseType};
/// use fastnoise_core::FastNoise;
///
/// let noise = FastNoise::builder()
///     .noise_type(NoiseType::Perlin)
///     .fractal(FractalType::Billow)
///     .octaves(4)
///     .frequency(0.02)
///     .build();
/// let _ = noise.get_noise_2d(10.0, 20.0);
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct NoiseBuilder {
    pub(super) provider: Option<NoiseProvider>,
    pub(super) noise_type: Option<NoiseType>,
    pub(super) fractal: Option<FractalType>,
    pub(super) warp: Option<WarpType>,
    pub(super) distance: Option<DistanceType>,
    pub(super) cellular_return: Option<ReturnType>,
    pub(super) multi: Option<MultiType>,
    pub(super) interpolation: Option<InterpolationType>,
    pub(super) distance_function: Option<DistanceFunction>,
    pub(super) return_function: Option<ReturnFunction>,
    pub(super) multi_function: Option<MultiFunction>,
    pub(super) fractal_function: Option<FractalFunction>,
    pub(super) scale_function: Option<ScaleFunction>,
    pub(super) noise_lookup: Option<Box<NoiseBuilder>>,
    pub(super) references: Vec<NoiseBuilder>,
    pub(super) seed: Option<i32>,
    pub(super) frequency_x: Option<f32>,
    pub(super) frequency_y: Option<f32>,
    pub(super) frequency_z: Option<f32>,
    pub(super) octaves: Option<u32>,
    pub(super) lacunarity_x: Option<f32>,
    pub(super) lacunarity_y: Option<f32>,
    pub(super) lacunarity_z: Option<f32>,
    pub(super) gain: Option<f32>,
    pub(super) ping_pong_strength: Option<f32>,
    pub(super) jitter_x: Option<f32>,
    pub(super) jitter_y: Option<f32>,
    pub(super) jitter_z: Option<f32>,
    pub(super) warp_amplitude_x: Option<f32>,
    pub(super) warp_amplitude_y: Option<f32>,
    pub(super) warp_amplitude_z: Option<f32>,
    pub(super) warp_frequency_x: Option<f32>,
    pub(super) warp_frequency_y: Option<f32>,
    pub(super) warp_frequency_z: Option<f32>,
    pub(super) offset_x: Option<f32>,
    pub(super) offset_y: Option<f32>,
    pub(super) offset_z: Option<f32>,
    pub(super) invert: Option<bool>,
    pub(super) scale_amplitude: Option<f32>,
    pub(super) scale_offset: Option<f32>,
    pub(super) min_threshold: Option<f32>,
    pub(super) max_threshold: Option<f32>,
}

impl NoiseBuilder {
    /// An empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration carrying the shared settings of an existing node.
    pub fn from_settings(settings: &NoiseSettings) -> Self {
        Self {
            seed: Some(settings.seed),
            frequency_x: Some(settings.frequency_x),
            frequency_y: Some(settings.frequency_y),
            frequency_z: Some(settings.frequency_z),
            offset_x: Some(settings.offset_x),
            offset_y: Some(settings.offset_y),
            offset_z: Some(settings.offset_z),
            scale_amplitude: Some(settings.scale_amplitude),
            scale_offset: Some(settings.scale_offset),
            min_threshold: Some(settings.min_threshold),
            max_threshold: Some(settings.max_threshold),
            invert: Some(settings.invert),
            ..Self::default()
        }
    }

    setters! {
        /// Selects the noise family.
        ///
        /// `Fractal` implies [`FractalType::Fbm`] and `Warped` implies
        /// [`WarpType::BasicGrid`] unless those kinds are set explicitly.
        noise_type, get_noise_type: NoiseType;
        /// Adds a fractal layer, or selects the curve of a `Fractal` node.
        fractal, get_fractal: FractalType;
        /// Adds a domain warp, or selects the kernel of a `Warped` node.
        warp, get_warp: WarpType;
        /// Cellular distance metric.
        distance, get_distance: DistanceType;
        /// Cellular output policy.
        cellular_return, get_cellular_return: ReturnType;
        /// Multi reduction.
        multi, get_multi: MultiType;
        /// Interpolation for value and Perlin noise.
        interpolation, get_interpolation: InterpolationType;
        /// Seed.
        seed, get_seed: i32;
        /// X frequency.
        frequency_x, get_frequency_x: f32;
        /// Y frequency.
        frequency_y, get_frequency_y: f32;
        /// Z frequency.
        frequency_z, get_frequency_z: f32;
        /// Fractal octave count.
        octaves, get_octaves: u32;
        /// X frequency multiplier between octaves.
        lacunarity_x, get_lacunarity_x: f32;
        /// Y frequency multiplier between octaves.
        lacunarity_y, get_lacunarity_y: f32;
        /// Z frequency multiplier between octaves.
        lacunarity_z, get_lacunarity_z: f32;
        /// Amplitude multiplier between octaves.
        gain, get_gain: f32;
        /// Ping-pong fractal strength.
        ping_pong_strength, get_ping_pong_strength: f32;
        /// X cellular jitter.
        jitter_x, get_jitter_x: f32;
        /// Y cellular jitter.
        jitter_y, get_jitter_y: f32;
        /// Z cellular jitter.
        jitter_z, get_jitter_z: f32;
        /// X warp displacement.
        warp_amplitude_x, get_warp_amplitude_x: f32;
        /// Y warp displacement.
        warp_amplitude_y, get_warp_amplitude_y: f32;
        /// Z warp displacement.
        warp_amplitude_z, get_warp_amplitude_z: f32;
        /// X warp field frequency.
        warp_frequency_x, get_warp_frequency_x: f32;
        /// Y warp field frequency.
        warp_frequency_y, get_warp_frequency_y: f32;
        /// Z warp field frequency.
        warp_frequency_z, get_warp_frequency_z: f32;
        /// X input offset.
        offset_x, get_offset_x: f32;
        /// Y input offset.
        offset_y, get_offset_y: f32;
        /// Z input offset.
        offset_z, get_offset_z: f32;
        /// Flips threshold membership.
        invert, get_invert: bool;
        /// Multiplier for scaled output.
        scale_amplitude, get_scale_amplitude: f32;
        /// Addend for scaled output.
        scale_offset, get_scale_offset: f32;
        /// Exclusive lower threshold.
        min_threshold, get_min_threshold: f32;
        /// Exclusive upper threshold.
        max_threshold, get_max_threshold: f32;
    }

    axis_setters! {
        /// Sets the frequency on every axis.
        frequency => frequency_x, frequency_y, frequency_z;
        /// Sets the lacunarity on every axis.
        lacunarity => lacunarity_x, lacunarity_y, lacunarity_z;
        /// Sets the jitter on every axis.
        jitter => jitter_x, jitter_y, jitter_z;
        /// Sets the warp amplitude on every axis.
        warp_amplitude => warp_amplitude_x, warp_amplitude_y, warp_amplitude_z;
        /// Sets the warp frequency on every axis.
        warp_frequency => warp_frequency_x, warp_frequency_y, warp_frequency_z;
        /// Sets the offset on every axis.
        offsets => offset_x, offset_y, offset_z;
    }

    /// Replaces the standard build chain.
    pub fn provider(mut self, provider: NoiseProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Output transform applied last in the build chain.
    pub fn scale_function(mut self, function: ScaleFunction) -> Self {
        self.scale_function = Some(function);
        self
    }

    /// Custom cellular metric. Also selects [`DistanceType::Function`].
    pub fn distance_function(mut self, function: DistanceFunction) -> Self {
        self.distance_function = Some(function);
        self.distance(DistanceType::Function)
    }

    /// Custom cellular output. Also selects [`ReturnType::Function`].
    pub fn return_function(mut self, function: ReturnFunction) -> Self {
        self.return_function = Some(function);
        self.cellular_return(ReturnType::Function)
    }

    /// Custom multi reduction. Also selects [`MultiType::Function`].
    pub fn multi_function(mut self, function: MultiFunction) -> Self {
        self.multi_function = Some(function);
        self.multi(MultiType::Function)
    }

    /// Custom fractal curve. Also selects [`FractalType::Function`].
    pub fn fractal_function(mut self, function: FractalFunction) -> Self {
        self.fractal_function = Some(function);
        self.fractal(FractalType::Function)
    }

    /// Generator sampled by cellular `NoiseLookup` output and by the
    /// `NoiseLookup` warp.
    pub fn noise_lookup(mut self, lookup: NoiseBuilder) -> Self {
        self.noise_lookup = Some(Box::new(lookup));
        self
    }

    /// Replaces the references with a single one.
    pub fn reference(mut self, reference: NoiseBuilder) -> Self {
        self.references = vec![reference];
        self
    }

    /// Replaces the references.
    pub fn references(mut self, references: impl IntoIterator<Item = NoiseBuilder>) -> Self {
        self.references = references.into_iter().collect();
        self
    }

    /// Sets the vertical (Y) offset only.
    pub fn offset(self, offset: f32) -> Self {
        self.offset_y(offset)
    }

    /// Divides the current Y frequency by `stretch`.
    pub fn stretch(mut self, stretch: f32) -> Self {
        let frequency = self
            .frequency_y
            .unwrap_or(NoiseSettings::DEFAULT_FREQUENCY);
        self.frequency_y = Some(frequency / stretch);
        self
    }

    /// Maps scaled output from `[-1, 1]` onto `[min, max]`.
    pub fn range(self, min: f32, max: f32) -> Self {
        self.scale_amplitude((max - min) / 2.0)
            .scale_offset((min + max) / 2.0)
    }

    /// Sets the threshold interval.
    ///
    /// A degenerate interval (`min == max`) moves the lower bound to `-1`,
    /// selecting everything up to `max`.
    #[allow(clippy::float_cmp)]
    pub fn threshold(self, min: f32, max: f32) -> Self {
        let min = if min == max { -1.0 } else { min };
        self.min_threshold(min).max_threshold(max)
    }

    /// The custom build chain, if one was set.
    #[must_use]
    pub fn get_provider(&self) -> Option<&NoiseProvider> {
        self.provider.as_ref()
    }

    /// The output transform, if one was set.
    #[must_use]
    pub fn get_scale_function(&self) -> Option<&ScaleFunction> {
        self.scale_function.as_ref()
    }

    /// The custom cellular metric, if one was set.
    #[must_use]
    pub fn get_distance_function(&self) -> Option<&DistanceFunction> {
        self.distance_function.as_ref()
    }

    /// The custom cellular output, if one was set.
    #[must_use]
    pub fn get_return_function(&self) -> Option<&ReturnFunction> {
        self.return_function.as_ref()
    }

    /// The custom multi reduction, if one was set.
    #[must_use]
    pub fn get_multi_function(&self) -> Option<&MultiFunction> {
        self.multi_function.as_ref()
    }

    /// The custom fractal curve, if one was set.
    #[must_use]
    pub fn get_fractal_function(&self) -> Option<&FractalFunction> {
        self.fractal_function.as_ref()
    }

    /// The lookup configuration, if one was set.
    #[must_use]
    pub fn lookup(&self) -> Option<&NoiseBuilder> {
        self.noise_lookup.as_deref()
    }

    /// The reference configurations.
    #[must_use]
    pub fn reference_builders(&self) -> &[NoiseBuilder] {
        &self.references
    }

    /// Fills every unset field with its default.
    #[must_use]
    pub fn resolve(&self) -> NoiseConfig {
        let noise_type = self.noise_type.unwrap_or_default();
        let fractal = self.fractal.unwrap_or(match noise_type {
            NoiseType::Fractal => FractalType::Fbm,
            _ => FractalType::None,
        });
        let warp = self.warp.unwrap_or(match noise_type {
            NoiseType::Warped => WarpType::BasicGrid,
            _ => WarpType::None,
        });
        let frequency = NoiseSettings::DEFAULT_FREQUENCY;

        NoiseConfig {
            provider: self.provider.clone(),
            noise_type,
            fractal,
            warp,
            distance: self.distance.unwrap_or_default(),
            cellular_return: self.cellular_return.unwrap_or_default(),
            multi: self.multi.unwrap_or_default(),
            interpolation: self.interpolation.unwrap_or_default(),
            distance_function: self.distance_function.clone(),
            return_function: self.return_function.clone(),
            multi_function: self.multi_function.clone(),
            fractal_function: self.fractal_function.clone(),
            scale_function: self.scale_function.clone(),
            noise_lookup: self.noise_lookup.as_deref().cloned(),
            references: self.references.clone(),
            seed: self.seed.unwrap_or(NoiseSettings::DEFAULT_SEED),
            frequency_x: self.frequency_x.unwrap_or(frequency),
            frequency_y: self.frequency_y.unwrap_or(frequency),
            frequency_z: self.frequency_z.unwrap_or(frequency),
            octaves: self.octaves.unwrap_or(NoiseConfig::DEFAULT_OCTAVES),
            lacunarity_x: self.lacunarity_x.unwrap_or(NoiseConfig::DEFAULT_LACUNARITY),
            lacunarity_y: self.lacunarity_y.unwrap_or(NoiseConfig::DEFAULT_LACUNARITY),
            lacunarity_z: self.lacunarity_z.unwrap_or(NoiseConfig::DEFAULT_LACUNARITY),
            gain: self.gain.unwrap_or(NoiseConfig::DEFAULT_GAIN),
            ping_pong_strength: self
                .ping_pong_strength
                .unwrap_or(NoiseConfig::DEFAULT_PING_PONG_STRENGTH),
            jitter_x: self.jitter_x.unwrap_or(NoiseConfig::DEFAULT_JITTER),
            jitter_y: self.jitter_y.unwrap_or(NoiseConfig::DEFAULT_JITTER),
            jitter_z: self.jitter_z.unwrap_or(NoiseConfig::DEFAULT_JITTER),
            warp_amplitude_x: self
                .warp_amplitude_x
                .unwrap_or(NoiseConfig::DEFAULT_WARP_AMPLITUDE),
            warp_amplitude_y: self
                .warp_amplitude_y
                .unwrap_or(NoiseConfig::DEFAULT_WARP_AMPLITUDE),
            warp_amplitude_z: self
                .warp_amplitude_z
                .unwrap_or(NoiseConfig::DEFAULT_WARP_AMPLITUDE),
            warp_frequency_x: self
                .warp_frequency_x
                .unwrap_or(NoiseConfig::DEFAULT_WARP_FREQUENCY),
            warp_frequency_y: self
                .warp_frequency_y
                .unwrap_or(NoiseConfig::DEFAULT_WARP_FREQUENCY),
            warp_frequency_z: self
                .warp_frequency_z
                .unwrap_or(NoiseConfig::DEFAULT_WARP_FREQUENCY),
            offset_x: self.offset_x.unwrap_or(0.0),
            offset_y: self.offset_y.unwrap_or(0.0),
            offset_z: self.offset_z.unwrap_or(0.0),
            invert: self.invert.unwrap_or(false),
            scale_amplitude: self.scale_amplitude.unwrap_or(1.0),
            scale_offset: self.scale_offset.unwrap_or(0.0),
            min_threshold: self.min_threshold.unwrap_or(0.0),
            max_threshold: self.max_threshold.unwrap_or(1.0),
        }
    }

    /// Resolves the configuration and builds the generator.
    #[must_use]
    pub fn build(&self) -> FastNoise {
        self.resolve().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_types_imply_sub_kinds() {
        let cfg = NoiseBuilder::new().noise_type(NoiseType::Fractal).resolve();
        assert_eq!(cfg.fractal, FractalType::Fbm);
        let cfg = NoiseBuilder::new().noise_type(NoiseType::Warped).resolve();
        assert_eq!(cfg.warp, WarpType::BasicGrid);

        // Explicit kinds win regardless of order.
        let cfg = NoiseBuilder::new()
            .fractal(FractalType::Billow)
            .noise_type(NoiseType::Fractal)
            .resolve();
        assert_eq!(cfg.fractal, FractalType::Billow);

        let cfg = NoiseBuilder::new().noise_type(NoiseType::Perlin).resolve();
        assert_eq!(cfg.fractal, FractalType::None);
        assert_eq!(cfg.warp, WarpType::None);
    }

    #[test]
    fn test_callbacks_select_function_kinds() {
        let cfg = NoiseBuilder::new()
            .distance_function(DistanceFunction::two_d(|x, y| x.max(y)))
            .return_function(ReturnFunction::two_d(|_, _, d, _, _| d))
            .multi_function(MultiFunction::combiner(|v| v.iter().sum()))
            .fractal_function(FractalFunction::new(f32::abs))
            .resolve();
        assert_eq!(cfg.distance, DistanceType::Function);
        assert_eq!(cfg.cellular_return, ReturnType::Function);
        assert_eq!(cfg.multi, MultiType::Function);
        assert_eq!(cfg.fractal, FractalType::Function);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_defaults() {
        let cfg = NoiseBuilder::new().resolve();
        assert_eq!(cfg.noise_type, NoiseType::Simplex);
        assert_eq!(cfg.seed, 1337);
        assert_eq!(cfg.frequency_x, 0.01);
        assert_eq!(cfg.octaves, 3);
        assert_eq!(cfg.gain, 0.5);
        assert_eq!(cfg.lacunarity_y, 2.0);
        assert_eq!(cfg.ping_pong_strength, 2.0);
        assert_eq!(cfg.jitter_z, 1.0);
        assert_eq!(cfg.warp_amplitude_x, 5.0);
        assert_eq!(cfg.warp_frequency_y, 0.075);
        assert_eq!((cfg.min_threshold, cfg.max_threshold), (0.0, 1.0));
        assert_eq!((cfg.scale_amplitude, cfg.scale_offset), (1.0, 0.0));
        assert_eq!(cfg.multi, MultiType::Sum);
        assert_eq!(cfg.interpolation, InterpolationType::Quintic);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_convenience_setters() {
        let cfg = NoiseBuilder::new().range(-10.0, 30.0).resolve();
        assert_eq!(cfg.scale_amplitude, 20.0);
        assert_eq!(cfg.scale_offset, 10.0);

        let cfg = NoiseBuilder::new().frequency(0.1).stretch(4.0).resolve();
        assert_eq!(cfg.frequency_x, 0.1);
        assert_eq!(cfg.frequency_y, 0.025);

        let cfg = NoiseBuilder::new().stretch(2.0).resolve();
        assert_eq!(cfg.frequency_y, 0.005);

        let cfg = NoiseBuilder::new().offset(8.0).resolve();
        assert_eq!((cfg.offset_x, cfg.offset_y, cfg.offset_z), (0.0, 8.0, 0.0));

        let cfg = NoiseBuilder::new().threshold(0.25, 0.75).resolve();
        assert_eq!((cfg.min_threshold, cfg.max_threshold), (0.25, 0.75));
        let cfg = NoiseBuilder::new().threshold(0.5, 0.5).resolve();
        assert_eq!((cfg.min_threshold, cfg.max_threshold), (-1.0, 0.5));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_getters_report_what_was_set() {
        let builder = NoiseBuilder::new();
        assert_eq!(builder.get_seed(), None);
        assert_eq!(builder.get_noise_type(), None);
        assert_eq!(builder.get_max_threshold(), None);
        assert!(builder.get_scale_function().is_none());

        let builder = builder
            .seed(42)
            .noise_type(NoiseType::Cellular)
            .cellular_return(ReturnType::Distance2Sub)
            .octaves(6)
            .lacunarity(3.0)
            .warp_amplitude_y(12.5)
            .invert(true)
            .range(0.0, 64.0)
            .threshold(0.2, 0.4)
            .scale_function(ScaleFunction::new(|f| f * f))
            .fractal_function(FractalFunction::new(f32::abs));
        assert_eq!(builder.get_seed(), Some(42));
        assert_eq!(builder.get_noise_type(), Some(NoiseType::Cellular));
        assert_eq!(builder.get_cellular_return(), Some(ReturnType::Distance2Sub));
        assert_eq!(builder.get_octaves(), Some(6));
        assert_eq!(builder.get_lacunarity_x(), Some(3.0));
        assert_eq!(builder.get_lacunarity_z(), Some(3.0));
        assert_eq!(builder.get_warp_amplitude_x(), None);
        assert_eq!(builder.get_warp_amplitude_y(), Some(12.5));
        assert_eq!(builder.get_invert(), Some(true));
        assert_eq!(builder.get_scale_amplitude(), Some(32.0));
        assert_eq!(builder.get_scale_offset(), Some(32.0));
        assert_eq!(builder.get_min_threshold(), Some(0.2));
        assert_eq!(builder.get_max_threshold(), Some(0.4));
        assert_eq!(builder.get_fractal(), Some(FractalType::Function));
        assert!(builder.get_fractal_function().is_some());
        assert!(builder.get_distance_function().is_none());
        let scale = builder.get_scale_function().map(|f| f.apply(3.0));
        assert_eq!(scale, Some(9.0));
    }

    #[test]
    fn test_clone_is_deep() {
        let original = NoiseBuilder::new()
            .noise_type(NoiseType::Multi)
            .references([NoiseBuilder::new().seed(1), NoiseBuilder::new().seed(2)]);
        let mut copy = original.clone();
        copy.references[0] = NoiseBuilder::new().seed(99);
        assert_eq!(original.reference_builders()[0].resolve().seed, 1);
        assert_eq!(copy.reference_builders()[0].resolve().seed, 99);
    }
}
