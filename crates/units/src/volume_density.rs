use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A physical volume density (mass per volume) quantity using f64 precision.
///
/// The `VolumeDensity` struct represents bulk density with kilograms per
/// cubic meter as the base unit, matching the SI convention used for
/// planetary interior layers.
///
/// Typical layer densities:
/// - Water: 1000 kg/m³
/// - Continental crust: ~2800 kg/m³
/// - Silicate mantle: ~4500 kg/m³
/// - Metallic core: ~11000 kg/m³
///
/// # Examples
///
/// ```rust
/// use units::VolumeDensity;
///
/// let crust = VolumeDensity::crust();
/// let dense_layer = VolumeDensity::from_kg_per_m3(8649.0);
///
/// assert!(dense_layer > crust);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct VolumeDensity(f64); // Base unit: kg/m³

impl VolumeDensity {
    /// Creates a new `VolumeDensity` from a value in kilograms per cubic meter.
    pub fn from_kg_per_m3(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `VolumeDensity` from a value in grams per cubic centimeter.
    ///
    /// 1 g/cm³ = 1000 kg/m³
    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value * 1000.0)
    }

    /// Returns the volume density in kilograms per cubic meter.
    pub fn to_kg_per_m3(&self) -> f64 {
        self.0
    }

    /// Converts the volume density to grams per cubic centimeter.
    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0 / 1000.0
    }

    /// Liquid water at surface conditions.
    pub fn water() -> Self {
        Self::from_kg_per_m3(1000.0)
    }

    /// Average continental crust.
    pub fn crust() -> Self {
        Self::from_kg_per_m3(2800.0)
    }

    /// Average silicate mantle.
    pub fn mantle() -> Self {
        Self::from_kg_per_m3(4500.0)
    }

    /// Metallic (iron-nickel) core material.
    pub fn metallic_core() -> Self {
        Self::from_kg_per_m3(11000.0)
    }
}

impl Add for VolumeDensity {
    type Output = VolumeDensity;

    fn add(self, rhs: VolumeDensity) -> VolumeDensity {
        VolumeDensity(self.0 + rhs.0)
    }
}

impl Sub for VolumeDensity {
    type Output = VolumeDensity;

    fn sub(self, rhs: VolumeDensity) -> VolumeDensity {
        VolumeDensity(self.0 - rhs.0)
    }
}

impl Mul<f64> for VolumeDensity {
    type Output = VolumeDensity;

    fn mul(self, rhs: f64) -> VolumeDensity {
        VolumeDensity(self.0 * rhs)
    }
}

impl Div<f64> for VolumeDensity {
    type Output = VolumeDensity;

    fn div(self, rhs: f64) -> VolumeDensity {
        VolumeDensity(self.0 / rhs)
    }
}

/// Allow f64 * VolumeDensity (commutative multiplication)
impl Mul<VolumeDensity> for f64 {
    type Output = VolumeDensity;

    fn mul(self, rhs: VolumeDensity) -> VolumeDensity {
        rhs * self
    }
}
