//! Quantitative comparison with a step-index optical fiber

use serde::{Deserialize, Serialize};

use crate::seismic::{Interface, SeismicVelocities};

/// Typical step-index fiber refractive indices.
pub const CORE_INDEX: f64 = 1.46;
pub const CLADDING_INDEX: f64 = 1.45;

/// Side-by-side figures for the fiber and the rock-to-air interface.
///
/// The confinement mechanism is the same in both systems; only the contrast
/// differs. A fiber works with a fraction of a percent of index difference,
/// while the crust-to-air velocity step is more than an order of magnitude,
/// which pushes the critical angle close to the normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiberOpticAnalogy {
    /// Fiber critical angle (degrees from the normal)
    pub fiber_critical_angle_deg: f64,
    /// Core-to-cladding index step (percent)
    pub fiber_index_difference_percent: f64,
    /// Crust-to-air critical angle (degrees from the normal)
    pub seismic_critical_angle_deg: f64,
    /// Air sound speed over crustal P-wave velocity
    pub seismic_velocity_ratio: f64,
    /// Crust-to-air velocity step (percent)
    pub seismic_velocity_difference_percent: f64,
    /// Seismic critical angle over fiber critical angle
    pub critical_angle_ratio: f64,
}

impl FiberOpticAnalogy {
    pub fn analyze(velocities: &SeismicVelocities) -> Self {
        let fiber_critical_angle_deg = (CLADDING_INDEX / CORE_INDEX).asin().to_degrees();
        let fiber_index_difference_percent =
            (CORE_INDEX - CLADDING_INDEX) / CLADDING_INDEX * 100.0;

        let seismic_critical_angle_deg = velocities.critical_angle_deg(Interface::CrustAir);
        let seismic_velocity_ratio = velocities.air / velocities.p_crust;
        let seismic_velocity_difference_percent =
            (velocities.p_crust - velocities.air) / velocities.air * 100.0;

        Self {
            fiber_critical_angle_deg,
            fiber_index_difference_percent,
            seismic_critical_angle_deg,
            seismic_velocity_ratio,
            seismic_velocity_difference_percent,
            critical_angle_ratio: seismic_critical_angle_deg / fiber_critical_angle_deg,
        }
    }
}
