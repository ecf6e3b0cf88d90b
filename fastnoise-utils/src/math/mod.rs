//! This module contains the math primitives shared by every noise family.
pub mod hash;
pub mod noise_math;
pub mod tables;
pub mod vector;

pub use hash::{
    gradient1, gradient2, gradient2_long, gradient3, hash1, hash2, hash3, value1, value2, value3,
};
pub use noise_math::{
    cast_float_to_int, cubic_lerp, fast_floor, fast_round, fractal_bounding, interp_hermite,
    interp_quintic, lerp, ping_pong,
};
pub use vector::{Vector2, Vector3};
