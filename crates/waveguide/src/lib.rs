//! Seismic waveguide analysis of a hollow shell configuration
//!
//! Treats the cavity boundary as a refractive interface: body waves moving
//! from rock into cavity air meet an extreme velocity contrast, so total
//! internal reflection traps them in the shell the way a fiber core traps
//! light. The modules here compute critical angles, draw out the fiber
//! analogy quantitatively, and estimate the cavity's resonant mode spectrum.

pub mod fiber;
pub mod modes;
pub mod seismic;


pub use fiber::FiberOpticAnalogy;
pub use modes::{observed_phenomena, seismic_predictions, PhenomenonMatch, WaveguideModes, WaveguideReport};
pub use seismic::{Interface, SeismicVelocities};
