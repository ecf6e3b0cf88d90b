//! Shared math for the fastnoise samplers: lattice hashing, interpolation
//! curves and the fixed gradient and cell-vector tables.

pub mod math;
