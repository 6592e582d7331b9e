//! Physical admissibility checklist
//!
//! A fixed set of independent pass/fail checks applied to a complete model.
//! The checklist is reporting only: it never blocks construction, it just
//! flags configurations that fall outside the plausible envelope.

use serde::{Deserialize, Serialize};

use crate::gravity::RadialGravity;
use crate::model::HollowModel;

/// Relative mass tolerance against the reference mass.
const MASS_TOLERANCE: f64 = 0.01;
/// Acceptable exterior surface gravity (m/s²).
const SURFACE_GRAVITY_RANGE: (f64, f64) = (9.5, 10.5);
/// Acceptable combined interior gravity (m/s²).
const INTERIOR_GRAVITY_RANGE: (f64, f64) = (8.0, 12.0);
/// Minimum viable cavity radius (m).
const MIN_CAVITY_RADIUS: f64 = 1000e3;
/// Plausible shell density range (kg/m³).
const DENSITY_RANGE: (f64, f64) = (1000.0, 20000.0);
/// Density above which a shell counts as "dense" (kg/m³).
const DENSE_SHELL_THRESHOLD: f64 = 8000.0;
/// Mass fraction the dominant dense shell must carry.
const DOMINANT_MASS_FRACTION: f64 = 0.7;
/// Acceptable interior/exterior gravity ratio.
const GRAVITY_BALANCE_RANGE: (f64, f64) = (0.8, 1.2);

/// Result of the admissibility checklist, one boolean per check.
///
/// Field names are part of the export document schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissibilityReport {
    /// Total mass within 1% of the reference mass
    pub mass_conservation: bool,
    /// Exterior surface gravity in [9.5, 10.5] m/s²
    pub earth_surface_gravity: bool,
    /// Combined interior gravity (shells + optional sun) in [8, 12] m/s²
    pub reasonable_interior_gravity: bool,
    /// Cavity strictly inside the reference surface radius
    pub cavity_inside_earth: bool,
    /// Cavity radius above the minimum viable threshold (1000 km)
    pub substantial_cavity: bool,
    /// Every shell density strictly positive
    pub positive_densities: bool,
    /// Every shell density within [1000, 20000] kg/m³
    pub realistic_densities: bool,
    /// No adjacent shells overlap in radius
    pub non_overlapping_shells: bool,
    /// Interior/exterior gravity ratio in [0.8, 1.2]
    pub gravity_balance: bool,
    /// The heaviest dense shell carries over 70% of total mass
    pub substantial_dense_shell: bool,
}

impl AdmissibilityReport {
    /// Run every check against a model. Pure; no check depends on another.
    pub fn assess(model: &HollowModel) -> Self {
        let constants = model.constants();
        let stack = model.stack();
        let gravity = RadialGravity::new(*constants);

        let total_mass = stack.total_mass();
        let surface_g = gravity.surface_gravity(stack);
        let interior_g = model.interior_gravity();

        let mass_error = (total_mass - constants.reference_mass).abs() / constants.reference_mass;

        let densities: Vec<f64> = stack
            .shells()
            .iter()
            .map(|s| s.density.to_kg_per_m3())
            .collect();

        let gravity_balance = if surface_g > 0.0 && interior_g > 0.0 {
            let ratio = interior_g / surface_g;
            (GRAVITY_BALANCE_RANGE.0..=GRAVITY_BALANCE_RANGE.1).contains(&ratio)
        } else {
            false
        };

        let substantial_dense_shell = stack
            .shells()
            .iter()
            .filter(|s| s.density.to_kg_per_m3() > DENSE_SHELL_THRESHOLD)
            .max_by(|a, b| a.mass().to_kg().total_cmp(&b.mass().to_kg()))
            .map(|dense| dense.mass() / total_mass > DOMINANT_MASS_FRACTION)
            .unwrap_or(false);

        Self {
            mass_conservation: mass_error < MASS_TOLERANCE,
            earth_surface_gravity: (SURFACE_GRAVITY_RANGE.0..=SURFACE_GRAVITY_RANGE.1)
                .contains(&surface_g),
            reasonable_interior_gravity: (INTERIOR_GRAVITY_RANGE.0..=INTERIOR_GRAVITY_RANGE.1)
                .contains(&interior_g),
            cavity_inside_earth: stack.cavity_radius().to_m() < constants.reference_radius.to_m(),
            substantial_cavity: stack.cavity_radius().to_m() > MIN_CAVITY_RADIUS,
            positive_densities: densities.iter().all(|&d| d > 0.0),
            realistic_densities: densities
                .iter()
                .all(|&d| (DENSITY_RANGE.0..=DENSITY_RANGE.1).contains(&d)),
            non_overlapping_shells: stack.is_non_overlapping(),
            gravity_balance,
            substantial_dense_shell,
        }
    }

    /// True when every check passes.
    pub fn passes_all(&self) -> bool {
        self.checks().iter().all(|(_, pass)| *pass)
    }

    /// Named check results, in checklist order.
    pub fn checks(&self) -> [(&'static str, bool); 10] {
        [
            ("mass_conservation", self.mass_conservation),
            ("earth_surface_gravity", self.earth_surface_gravity),
            (
                "reasonable_interior_gravity",
                self.reasonable_interior_gravity,
            ),
            ("cavity_inside_earth", self.cavity_inside_earth),
            ("substantial_cavity", self.substantial_cavity),
            ("positive_densities", self.positive_densities),
            ("realistic_densities", self.realistic_densities),
            ("non_overlapping_shells", self.non_overlapping_shells),
            ("gravity_balance", self.gravity_balance),
            ("substantial_dense_shell", self.substantial_dense_shell),
        ]
    }
}
