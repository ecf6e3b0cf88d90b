//! Reductions over several independently configured generators.
//!
//! A multi node has no lattice of its own: its raw samples are 0 and all of
//! its output comes from the references' facades, so every reference keeps
//! its own frequency, offsets and seed.

use crate::config::{MultiType, NoiseBuilder, NoiseType};
use crate::function::{AXIS_FILLER, MultiFunction};
use crate::generator::{DescribeNoise, FastNoise, NoiseSampler};

/// How the reference outputs are combined.
#[derive(Debug, Clone, Default)]
pub enum MultiReducer {
    /// Minimum, starting from 1.
    Min,
    /// Maximum, starting from -1.
    Max,
    /// Largest non-negative output divided by the reference count.
    Avg,
    /// Product, clamped to `[-1, 1]`.
    Mul,
    /// Quotient of the first output by the rest, clamped to `[-1, 1]`.
    /// Divisors that are exactly zero are skipped.
    Div,
    /// Sum, clamped to `[-1, 1]`.
    #[default]
    Sum,
    /// User reduction.
    Function(MultiFunction),
}

impl MultiReducer {
    /// The selector matching this reducer.
    #[must_use]
    pub fn kind(&self) -> MultiType {
        match self {
            Self::Min => MultiType::Min,
            Self::Max => MultiType::Max,
            Self::Avg => MultiType::Avg,
            Self::Mul => MultiType::Mul,
            Self::Div => MultiType::Div,
            Self::Sum => MultiType::Sum,
            Self::Function(_) => MultiType::Function,
        }
    }

    /// Folds already sampled reference outputs.
    ///
    /// `clamp` selects between the `get_noise` and `get_noise_scaled`
    /// behaviour of the arithmetic reducers.
    #[allow(clippy::float_cmp)]
    fn fold(&self, values: impl Iterator<Item = f32>, count: usize, clamp: bool) -> f32 {
        let limit = |v: f32| if clamp { v.clamp(-1.0, 1.0) } else { v };
        match self {
            Self::Min => values.fold(1.0, f32::min),
            Self::Max => values.fold(-1.0, f32::max),
            Self::Avg => values.fold(0.0, f32::max) / count as f32,
            Self::Mul => limit(values.reduce(|acc, v| acc * v).unwrap_or(0.0)),
            Self::Div => limit(
                values
                    .reduce(|acc, v| if v == 0.0 { acc } else { acc / v })
                    .unwrap_or(0.0),
            ),
            Self::Sum => limit(values.sum()),
            // Handled by the callers, which need the coordinates.
            Self::Function(_) => 0.0,
        }
    }
}

/// Combines the outputs of several generators.
#[derive(Debug, Clone)]
pub struct MultiNoise {
    references: Vec<FastNoise>,
    reducer: MultiReducer,
}

impl MultiNoise {
    /// Creates a reduction over `references`.
    ///
    /// An empty list is replaced by a single [`FastNoise::dummy`].
    #[must_use]
    pub fn new(references: Vec<FastNoise>, reducer: MultiReducer) -> Self {
        let references = if references.is_empty() {
            log::debug!("multi generator has no references, using the dummy");
            vec![FastNoise::dummy()]
        } else {
            references
        };
        Self {
            references,
            reducer,
        }
    }

    /// The combined generators.
    #[must_use]
    pub fn references(&self) -> &[FastNoise] {
        &self.references
    }

    /// The reduction.
    #[must_use]
    pub fn reducer(&self) -> &MultiReducer {
        &self.reducer
    }

    /// Whether `get_noise_scaled` reduces the references' scaled outputs
    /// instead of rescaling this node's `get_noise`.
    #[must_use]
    pub fn reduces_scaled_output(&self) -> bool {
        matches!(
            self.reducer,
            MultiReducer::Mul | MultiReducer::Div | MultiReducer::Sum
        )
    }

    fn reduce(&self, sample: impl Fn(&FastNoise) -> f32, clamp: bool) -> f32 {
        self.reducer
            .fold(self.references.iter().map(sample), self.references.len(), clamp)
    }

    /// Reduces the references' 1D facade outputs.
    #[must_use]
    pub fn noise_1d(&self, x: f32) -> f32 {
        match &self.reducer {
            MultiReducer::Function(f) => f.eval_2d(x, AXIS_FILLER, &self.references),
            _ => self.reduce(|r| r.get_noise_1d(x), true),
        }
    }

    /// Reduces the references' 2D facade outputs.
    #[must_use]
    pub fn noise_2d(&self, x: f32, y: f32) -> f32 {
        match &self.reducer {
            MultiReducer::Function(f) => f.eval_2d(x, y, &self.references),
            _ => self.reduce(|r| r.get_noise_2d(x, y), true),
        }
    }

    /// Reduces the references' 3D facade outputs.
    #[must_use]
    pub fn noise_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        match &self.reducer {
            MultiReducer::Function(f) => f.eval_3d(x, y, z, &self.references),
            _ => self.reduce(|r| r.get_noise_3d(x, y, z), true),
        }
    }

    /// Unclamped reduction of the references' scaled 1D outputs.
    #[must_use]
    pub fn noise_scaled_1d(&self, x: f32) -> f32 {
        self.reduce(|r| r.get_noise_scaled_1d(x), false)
    }

    /// Unclamped reduction of the references' scaled 2D outputs.
    #[must_use]
    pub fn noise_scaled_2d(&self, x: f32, y: f32) -> f32 {
        self.reduce(|r| r.get_noise_scaled_2d(x, y), false)
    }

    /// Unclamped reduction of the references' scaled 3D outputs.
    #[must_use]
    pub fn noise_scaled_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        self.reduce(|r| r.get_noise_scaled_3d(x, y, z), false)
    }
}

impl NoiseSampler for MultiNoise {
    fn sample_1d(&self, _seed: i32, _x: f32) -> f32 {
        0.0
    }

    fn sample_2d(&self, _seed: i32, _x: f32, _y: f32) -> f32 {
        0.0
    }

    fn sample_3d(&self, _seed: i32, _x: f32, _y: f32, _z: f32) -> f32 {
        0.0
    }
}

impl DescribeNoise for MultiNoise {
    fn describe(&self, builder: NoiseBuilder) -> NoiseBuilder {
        let builder = builder
            .noise_type(NoiseType::Multi)
            .multi(self.reducer.kind())
            .references(self.references.iter().map(FastNoise::to_builder));
        match &self.reducer {
            MultiReducer::Function(f) => builder.multi_function(f.clone()),
            _ => builder,
        }
    }
}
