//! Mathematical primitives consumed by the distribution formulas.

pub mod combinatorics;
