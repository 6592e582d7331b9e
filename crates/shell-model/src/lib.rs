//! Layered-shell modeling of hollow planetary interiors
//!
//! This crate provides the structural model for a hollow planet: concentric
//! uniform-density shells around a central cavity, Newtonian gravity
//! evaluation over that structure, an optional compact central sun, a fixed
//! admissibility checklist, and a JSON export of complete configurations.

pub mod admissibility;
pub mod constants;
pub mod error;
pub mod export;
pub mod gravity;
pub mod growth;
pub mod model;
pub mod shell;
pub mod stack;
pub mod sun;

// Re-export key types at crate root
pub use admissibility::AdmissibilityReport;
pub use constants::PhysicalConstants;
pub use error::ModelError;
pub use export::ExportDocument;
pub use gravity::RadialGravity;
pub use growth::ProportionalGrowth;
pub use model::{
    hollow_earth_stack, standard_earth_stack, HollowEarthParams, HollowModel, ModelComparison,
};
pub use shell::{Material, Shell};
pub use stack::ShellStack;
pub use sun::CentralSun;

#[cfg(test)]
mod export_test;
#[cfg(test)]
mod gravity_test;
#[cfg(test)]
mod stack_test;
#[cfg(test)]
mod sun_test;
