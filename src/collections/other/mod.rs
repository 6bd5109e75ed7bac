//! Branded collections whose state is scoped to a single algorithm call.

pub mod disjoint_set;

pub use disjoint_set::{ActiveDisjointSet, BrandedDisjointSet};
