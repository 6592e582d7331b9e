use thiserror::Error;

/// Construction failures for shells, stacks, and preset configurations.
///
/// All variants are fatal at build time; there is no partially constructed
/// state. Gap/overlap between adjacent shells is deliberately a warning, not
/// an error (see [`crate::ShellStack::new`]).
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("outer radius {outer_km:.1} km must exceed inner radius {inner_km:.1} km")]
    InvertedRadii { outer_km: f64, inner_km: f64 },

    #[error("shell radii must be non-negative, got inner radius {inner_km:.1} km")]
    NegativeRadius { inner_km: f64 },

    #[error("shell density must be positive, got {density:.1} kg/m³")]
    NonPositiveDensity { density: f64 },

    #[error("a shell stack needs at least one shell")]
    EmptyStack,

    #[error("cavity radius {cavity_km:.1} km exceeds innermost shell boundary {inner_km:.1} km")]
    CavityExceedsInnermostShell { cavity_km: f64, inner_km: f64 },

    #[error("layer thicknesses leave no room for a cavity (radius {cavity_km:.1} km); reduce thicknesses")]
    CavityCollapsed { cavity_km: f64 },

    #[error("cavity radius {cavity_km:.1} km reaches the surface radius {surface_km:.1} km")]
    CavityExceedsSurface { cavity_km: f64, surface_km: f64 },

    #[error("unknown material type {0:?}")]
    UnknownMaterial(String),
}
