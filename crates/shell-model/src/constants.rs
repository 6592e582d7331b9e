use serde::{Deserialize, Serialize};
use units::{Length, Mass};

/// Physical constants used throughout the framework (CODATA 2018 values).
///
/// The set is passed explicitly into each component at construction instead
/// of living in process-wide statics, so every calculation stays a pure
/// function of its inputs and can be re-targeted at another reference planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Gravitational constant (m³/(kg·s²))
    pub gravitational_constant: f64,
    /// Reference planetary mass
    pub reference_mass: Mass,
    /// Reference planetary surface radius
    pub reference_radius: Length,
    /// Standard surface gravity (m/s²)
    pub standard_gravity: f64,
}

impl PhysicalConstants {
    /// Earth reference values.
    pub fn earth() -> Self {
        Self {
            gravitational_constant: 6.67430e-11,
            reference_mass: Mass::from_earth_masses(1.0),
            reference_radius: Length::from_earth_radii(1.0),
            standard_gravity: 9.80665,
        }
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::earth()
    }
}
