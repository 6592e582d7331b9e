//! Compact central sun
//!
//! A hollow shell produces essentially zero gravity inside its cavity, so a
//! habitable interior surface needs a separate central mass. The central sun
//! is modeled as an ultra-dense, cold point-like body sized to produce a
//! target acceleration at the cavity boundary. It is additive to the shell
//! field and never structurally part of the stack.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use units::{Length, Mass, VolumeDensity};

use crate::constants::PhysicalConstants;

/// Effective temperature of the cold sun (K), a very cool red-dwarf regime.
const SUN_TEMPERATURE_K: f64 = 2500.0;

/// Fraction of normal solar luminosity; dim perpetual twilight.
const SUN_LUMINOSITY_FRACTION: f64 = 0.001;

/// Estimated interior surface temperature from minimal radiative heating (K).
const ESTIMATED_SURFACE_TEMPERATURE_K: f64 = 288.0;

/// Clearance subtracted between the sun surface and the cavity surface.
const SAFETY_MARGIN: f64 = 200e3;

/// An optional point-like central mass at the stack center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CentralSun {
    /// Total mass
    pub mass: Mass,
    /// Physical radius
    pub radius: Length,
    /// Bulk density implied by mass and radius
    pub density: VolumeDensity,
    /// Effective temperature (K)
    pub temperature: f64,
    /// Fraction of normal solar luminosity
    pub luminosity_fraction: f64,
    /// Distance from the sun surface to the cavity surface
    pub distance_to_surface: Length,
    /// Estimated interior surface temperature (K)
    pub estimated_surface_temperature: f64,
}

impl CentralSun {
    /// Size a central sun so that it produces `target_gravity` m/s² at the
    /// cavity boundary: `m = g·r²/G`, with density following from the fixed
    /// radius.
    pub fn for_target_gravity(
        target_gravity: f64,
        cavity_radius: Length,
        sun_radius: Length,
        constants: &PhysicalConstants,
    ) -> Self {
        let required_mass_kg =
            target_gravity * cavity_radius.powi(2) / constants.gravitational_constant;
        let volume = (4.0 / 3.0) * PI * sun_radius.powi(3);

        Self {
            mass: Mass::from_kg(required_mass_kg),
            radius: sun_radius,
            density: VolumeDensity::from_kg_per_m3(required_mass_kg / volume),
            temperature: SUN_TEMPERATURE_K,
            luminosity_fraction: SUN_LUMINOSITY_FRACTION,
            distance_to_surface: cavity_radius - sun_radius - Length::from_m(SAFETY_MARGIN),
            estimated_surface_temperature: ESTIMATED_SURFACE_TEMPERATURE_K,
        }
    }

    /// Gravitational acceleration contributed at `radius`.
    ///
    /// Zero at or below the sun's own radius; `G·m/r²` outside it.
    pub fn gravity_at(&self, radius: Length, constants: &PhysicalConstants) -> f64 {
        let r = radius.to_m();
        if r <= self.radius.to_m() {
            return 0.0;
        }
        constants.gravitational_constant * self.mass.to_kg() / (r * r)
    }
}
