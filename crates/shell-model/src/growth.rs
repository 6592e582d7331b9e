//! Proportional expansion over geological time
//!
//! The dense shell is treated as the expansion driver: as it thickens, every
//! radius scales by the same factor, and the central sun grows just enough
//! to hold the interior light intensity constant. Intensity at the cavity
//! surface scales with emitted power over distance squared; power scales
//! with sun volume, so the sun radius follows the two-thirds power of the
//! expansion factor.

use serde::{Deserialize, Serialize};
use units::Length;

/// Relative intensity drift tolerated before flagging the configuration.
const INTENSITY_TOLERANCE: f64 = 0.05;

/// Coordinated growth parameters for planet, cavity, and central sun.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProportionalGrowth {
    pub initial_surface_radius: Length,
    pub initial_cavity_radius: Length,
    pub initial_sun_radius: Length,
    /// Initial dense shell thickness; the growth driver
    pub initial_dense_shell_thickness: Length,
    /// Dense shell expansion rate (m/yr)
    pub core_expansion_rate: f64,
}

impl Default for ProportionalGrowth {
    fn default() -> Self {
        Self {
            initial_surface_radius: Length::from_km(6371.0),
            initial_cavity_radius: Length::from_km(4271.0),
            initial_sun_radius: Length::from_km(150.0),
            initial_dense_shell_thickness: Length::from_km(1800.0),
            core_expansion_rate: 0.001, // 1 mm/yr
        }
    }
}

/// System dimensions after a span of proportional growth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthSnapshot {
    pub years: f64,
    pub expansion_factor: f64,
    pub surface_radius: Length,
    pub cavity_radius: Length,
    pub sun_radius: Length,
    /// Interior light intensity relative to the initial configuration
    pub light_intensity_ratio: f64,
    /// Intensity within 5% of the initial value
    pub light_maintained: bool,
}

impl ProportionalGrowth {
    /// Project the system `years` into the future.
    pub fn expansion(&self, years: f64) -> GrowthSnapshot {
        let core_growth = self.core_expansion_rate * years;
        let expansion_factor = 1.0 + core_growth / self.initial_dense_shell_thickness.to_m();

        let surface_radius = self.initial_surface_radius * expansion_factor;
        let cavity_radius = self.initial_cavity_radius * expansion_factor;

        // Power must scale with distance squared; sun volume carries power,
        // so the radius follows factor^(2/3).
        let sun_size_factor = (expansion_factor * expansion_factor).powf(1.0 / 3.0);
        let sun_radius = self.initial_sun_radius * sun_size_factor;

        let original_distance = self.initial_cavity_radius - self.initial_sun_radius;
        let new_distance = cavity_radius - sun_radius;
        let light_intensity_ratio =
            (original_distance / new_distance).powi(2) * sun_size_factor.powi(3);

        GrowthSnapshot {
            years,
            expansion_factor,
            surface_radius,
            cavity_radius,
            sun_radius,
            light_intensity_ratio,
            light_maintained: (light_intensity_ratio - 1.0).abs() < INTENSITY_TOLERANCE,
        }
    }
}
