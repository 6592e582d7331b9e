//! Bounded parameter search for shell configurations
//!
//! A derivative-free simplex minimizer plus a mass-targeting wrapper that
//! searches dense-shell parameters until the stack's total mass matches a
//! reference value.

pub mod nelder_mead;
pub mod optimizer;

#[cfg(test)]
mod optimizer_test;

pub use nelder_mead::{minimize, Minimum, Options};
pub use optimizer::{MassSearchOutcome, MassTargetOptimizer, ParameterBounds};
