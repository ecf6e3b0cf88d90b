//! User supplied callbacks.
//!
//! Each callback kind has one canonical signature plus explicit adapter
//! variants for callers that only care about fewer axes. When an adapter has
//! to invent a missing axis it uses [`AXIS_FILLER`].
//!
//! All callbacks are `Send + Sync` and reference counted, so cloning a config
//! or a generator never clones the closure itself.

use std::fmt;
use std::sync::Arc;

use crate::generator::FastNoise;

/// Coordinate substituted for an axis the caller did not provide.
pub const AXIS_FILLER: f32 = 1337.0;

/// Integer form of [`AXIS_FILLER`] for lattice callbacks.
pub const AXIS_FILLER_INT: i32 = 1337;

type Fn1<A> = Arc<dyn Fn(A) -> f32 + Send + Sync>;

/// A raw noise function `(seed, x, y, z) -> value`.
#[derive(Clone, Default)]
pub enum NoiseFunction {
    /// Always returns zero.
    #[default]
    Zero,
    /// Only looks at `x`.
    OneD(Arc<dyn Fn(i32, f32) -> f32 + Send + Sync>),
    /// Only looks at `x` and `y`. A 1D query samples `(x, 1337)`.
    TwoD(Arc<dyn Fn(i32, f32, f32) -> f32 + Send + Sync>),
    /// Canonical form. Lower dimensional queries fill with 1337.
    ThreeD(Arc<dyn Fn(i32, f32, f32, f32) -> f32 + Send + Sync>),
}

impl NoiseFunction {
    /// Wraps a 1D function.
    pub fn one_d(f: impl Fn(i32, f32) -> f32 + Send + Sync + 'static) -> Self {
        Self::OneD(Arc::new(f))
    }

    /// Wraps a 2D function.
    pub fn two_d(f: impl Fn(i32, f32, f32) -> f32 + Send + Sync + 'static) -> Self {
        Self::TwoD(Arc::new(f))
    }

    /// Wraps a 3D function.
    pub fn three_d(f: impl Fn(i32, f32, f32, f32) -> f32 + Send + Sync + 'static) -> Self {
        Self::ThreeD(Arc::new(f))
    }

    /// Evaluates at a 1D coordinate.
    #[must_use]
    pub fn eval_1d(&self, seed: i32, x: f32) -> f32 {
        match self {
            Self::Zero => 0.0,
            Self::OneD(f) => f(seed, x),
            Self::TwoD(f) => f(seed, x, AXIS_FILLER),
            Self::ThreeD(f) => f(seed, x, AXIS_FILLER, AXIS_FILLER),
        }
    }

    /// Evaluates at a 2D coordinate.
    #[must_use]
    pub fn eval_2d(&self, seed: i32, x: f32, y: f32) -> f32 {
        match self {
            Self::Zero => 0.0,
            Self::OneD(f) => f(seed, x),
            Self::TwoD(f) => f(seed, x, y),
            Self::ThreeD(f) => f(seed, x, y, AXIS_FILLER),
        }
    }

    /// Evaluates at a 3D coordinate.
    #[must_use]
    pub fn eval_3d(&self, seed: i32, x: f32, y: f32, z: f32) -> f32 {
        match self {
            Self::Zero => 0.0,
            Self::OneD(f) => f(seed, x),
            Self::TwoD(f) => f(seed, x, y),
            Self::ThreeD(f) => f(seed, x, y, z),
        }
    }
}

/// A custom cellular distance metric over feature point deltas.
#[derive(Clone)]
pub enum DistanceFunction {
    /// Planar metric. 3D queries pass `(dx, dz)`.
    TwoD(Arc<dyn Fn(f32, f32) -> f32 + Send + Sync>),
    /// Canonical form. 2D queries pass `(dx, dy, 1337)`.
    ThreeD(Arc<dyn Fn(f32, f32, f32) -> f32 + Send + Sync>),
}

impl DistanceFunction {
    /// Wraps a planar metric.
    pub fn two_d(f: impl Fn(f32, f32) -> f32 + Send + Sync + 'static) -> Self {
        Self::TwoD(Arc::new(f))
    }

    /// Wraps a volumetric metric.
    pub fn three_d(f: impl Fn(f32, f32, f32) -> f32 + Send + Sync + 'static) -> Self {
        Self::ThreeD(Arc::new(f))
    }

    /// Distance for a 2D delta.
    #[inline]
    #[must_use]
    pub fn eval_2d(&self, dx: f32, dy: f32) -> f32 {
        match self {
            Self::TwoD(f) => f(dx, dy),
            Self::ThreeD(f) => f(dx, dy, AXIS_FILLER),
        }
    }

    /// Distance for a 3D delta.
    #[inline]
    #[must_use]
    pub fn eval_3d(&self, dx: f32, dy: f32, dz: f32) -> f32 {
        match self {
            Self::TwoD(f) => f(dx, dz),
            Self::ThreeD(f) => f(dx, dy, dz),
        }
    }
}

/// A custom cellular output receiving the nearest cell and the three nearest
/// distances.
#[derive(Clone)]
pub enum ReturnFunction {
    /// Planar form `(x, y, d1, d2, d3)`. 3D queries pass `(x, z, ...)`.
    TwoD(Arc<dyn Fn(i32, i32, f32, f32, f32) -> f32 + Send + Sync>),
    /// Canonical form `(x, y, z, d1, d2, d3)`. 2D queries pass `z = 1337`.
    ThreeD(Arc<dyn Fn(i32, i32, i32, f32, f32, f32) -> f32 + Send + Sync>),
}

impl ReturnFunction {
    /// Wraps a planar return function.
    pub fn two_d(f: impl Fn(i32, i32, f32, f32, f32) -> f32 + Send + Sync + 'static) -> Self {
        Self::TwoD(Arc::new(f))
    }

    /// Wraps a volumetric return function.
    pub fn three_d(
        f: impl Fn(i32, i32, i32, f32, f32, f32) -> f32 + Send + Sync + 'static,
    ) -> Self {
        Self::ThreeD(Arc::new(f))
    }

    /// Output for a 2D cell.
    #[must_use]
    pub fn eval_2d(&self, x: i32, y: i32, d1: f32, d2: f32, d3: f32) -> f32 {
        match self {
            Self::TwoD(f) => f(x, y, d1, d2, d3),
            Self::ThreeD(f) => f(x, y, AXIS_FILLER_INT, d1, d2, d3),
        }
    }

    /// Output for a 3D cell.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn eval_3d(&self, x: i32, y: i32, z: i32, d1: f32, d2: f32, d3: f32) -> f32 {
        match self {
            Self::TwoD(f) => f(x, z, d1, d2, d3),
            Self::ThreeD(f) => f(x, y, z, d1, d2, d3),
        }
    }
}

/// Per-octave curve for [`crate::config::FractalType::Function`].
#[derive(Clone)]
pub struct FractalFunction(Fn1<f32>);

impl FractalFunction {
    /// Wraps a curve.
    pub fn new(f: impl Fn(f32) -> f32 + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Applies the curve to one octave sample.
    #[inline]
    #[must_use]
    pub fn apply(&self, value: f32) -> f32 {
        (self.0)(value)
    }
}

/// Output transform applied by a scaled generator.
#[derive(Clone)]
pub struct ScaleFunction(Fn1<f32>);

impl ScaleFunction {
    /// Wraps a transform.
    pub fn new(f: impl Fn(f32) -> f32 + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Applies the transform.
    #[inline]
    #[must_use]
    pub fn apply(&self, value: f32) -> f32 {
        (self.0)(value)
    }
}

/// A custom multi-generator reduction.
#[derive(Clone)]
pub enum MultiFunction {
    /// Planar form. 3D queries drop `z`.
    TwoD(Arc<dyn Fn(f32, f32, &[FastNoise]) -> f32 + Send + Sync>),
    /// Canonical form. 2D queries pass `z = 1337`.
    ThreeD(Arc<dyn Fn(f32, f32, f32, &[FastNoise]) -> f32 + Send + Sync>),
    /// Receives the scaled output of every reference at the query point.
    Combiner(Arc<dyn Fn(&[f32]) -> f32 + Send + Sync>),
}

impl MultiFunction {
    /// Wraps a planar reduction.
    pub fn two_d(f: impl Fn(f32, f32, &[FastNoise]) -> f32 + Send + Sync + 'static) -> Self {
        Self::TwoD(Arc::new(f))
    }

    /// Wraps a volumetric reduction.
    pub fn three_d(
        f: impl Fn(f32, f32, f32, &[FastNoise]) -> f32 + Send + Sync + 'static,
    ) -> Self {
        Self::ThreeD(Arc::new(f))
    }

    /// Wraps a combiner over the scaled reference outputs.
    pub fn combiner(f: impl Fn(&[f32]) -> f32 + Send + Sync + 'static) -> Self {
        Self::Combiner(Arc::new(f))
    }

    /// Reduces at a 2D coordinate.
    #[must_use]
    pub fn eval_2d(&self, x: f32, y: f32, references: &[FastNoise]) -> f32 {
        match self {
            Self::TwoD(f) => f(x, y, references),
            Self::ThreeD(f) => f(x, y, AXIS_FILLER, references),
            Self::Combiner(f) => {
                let output: Vec<f32> = references
                    .iter()
                    .map(|r| r.get_noise_scaled_2d(x, y))
                    .collect();
                f(&output)
            }
        }
    }

    /// Reduces at a 3D coordinate.
    #[must_use]
    pub fn eval_3d(&self, x: f32, y: f32, z: f32, references: &[FastNoise]) -> f32 {
        match self {
            Self::TwoD(f) => f(x, y, references),
            Self::ThreeD(f) => f(x, y, z, references),
            Self::Combiner(f) => {
                let output: Vec<f32> = references
                    .iter()
                    .map(|r| r.get_noise_scaled_3d(x, y, z))
                    .collect();
                f(&output)
            }
        }
    }
}

macro_rules! opaque_debug {
    ($($ty:ident),* $(,)?) => {
        $(
            impl fmt::Debug for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(concat!(stringify!($ty), "(..)"))
                }
            }
        )*
    };
}

opaque_debug!(
    NoiseFunction,
    DistanceFunction,
    ReturnFunction,
    FractalFunction,
    ScaleFunction,
    MultiFunction,
);
