//! Complete model configurations and presets
//!
//! [`HollowModel`] pairs a shell stack with an optional central sun and the
//! constant set it was built against. The presets reproduce the two standard
//! configurations: the conventional solid-Earth layering, and the hollow
//! sandwich of crust / dense metallic shell / inner crust with a fixed
//! surface radius.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use units::{Length, Mass, VolumeDensity};

use crate::constants::PhysicalConstants;
use crate::error::ModelError;
use crate::gravity::RadialGravity;
use crate::shell::{Material, Shell};
use crate::stack::ShellStack;
use crate::sun::CentralSun;

/// Free parameters of the hollow sandwich structure.
///
/// The surface radius is fixed at the reference radius; only thicknesses and
/// the dense-shell density vary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HollowEarthParams {
    /// Outer crust thickness
    pub outer_crust_thickness: Length,
    /// Dense metallic shell thickness
    pub dense_shell_thickness: Length,
    /// Inner crust thickness
    pub inner_crust_thickness: Length,
    /// Dense metallic shell density
    pub dense_shell_density: VolumeDensity,
}

impl Default for HollowEarthParams {
    fn default() -> Self {
        Self {
            outer_crust_thickness: Length::from_km(100.0),
            dense_shell_thickness: Length::from_km(1800.0),
            inner_crust_thickness: Length::from_km(200.0),
            dense_shell_density: VolumeDensity::from_kg_per_m3(8649.0),
        }
    }
}

/// Conventional solid-Earth layering, for comparison against hollow models.
///
/// Crust (35 km), silicate mantle down to the core-mantle boundary, outer
/// core, and a slightly denser inner core. Cavity radius is zero.
pub fn standard_earth_stack(constants: &PhysicalConstants) -> Result<ShellStack, ModelError> {
    let surface = constants.reference_radius;
    let crust_base = surface - Length::from_km(35.0);
    let core_mantle_boundary = Length::from_m(2.89e6);
    let inner_core_boundary = Length::from_m(1.22e6);

    let shells = vec![
        Shell::new(
            surface,
            crust_base,
            VolumeDensity::crust(),
            "Continental Crust",
            Material::Crustal,
        )?,
        Shell::new(
            crust_base,
            core_mantle_boundary,
            VolumeDensity::mantle(),
            "Mantle",
            Material::Silicate,
        )?,
        Shell::new(
            core_mantle_boundary,
            inner_core_boundary,
            VolumeDensity::metallic_core(),
            "Outer Core",
            Material::Metallic,
        )?,
        Shell::new(
            inner_core_boundary,
            Length::zero(),
            VolumeDensity::metallic_core() * 1.1,
            "Inner Core",
            Material::Metallic,
        )?,
    ];

    ShellStack::new(shells, Length::zero())
}

/// Hollow sandwich structure with a fixed surface radius.
///
/// Radii are derived outside-in: surface, dense shell boundaries, cavity.
///
/// # Errors
/// Fails when the layer thicknesses leave no positive cavity radius, or when
/// the derived cavity would reach the surface.
pub fn hollow_earth_stack(
    params: &HollowEarthParams,
    constants: &PhysicalConstants,
) -> Result<ShellStack, ModelError> {
    let r_surface = constants.reference_radius;
    let r_dense_outer = r_surface - params.outer_crust_thickness;
    let r_dense_inner = r_dense_outer - params.dense_shell_thickness;
    let r_hollow = r_dense_inner - params.inner_crust_thickness;

    if r_hollow.to_m() <= 0.0 {
        return Err(ModelError::CavityCollapsed {
            cavity_km: r_hollow.to_km(),
        });
    }
    if r_hollow.to_m() >= r_surface.to_m() {
        return Err(ModelError::CavityExceedsSurface {
            cavity_km: r_hollow.to_km(),
            surface_km: r_surface.to_km(),
        });
    }

    let shells = vec![
        Shell::new(
            r_surface,
            r_dense_outer,
            VolumeDensity::crust(),
            "Outer Crust",
            Material::Crustal,
        )?,
        Shell::new(
            r_dense_outer,
            r_dense_inner,
            params.dense_shell_density,
            "Dense Metallic Shell",
            Material::Metallic,
        )?,
        Shell::new(
            r_dense_inner,
            r_hollow,
            VolumeDensity::crust(),
            "Inner Crust",
            Material::Crustal,
        )?,
    ];

    let stack = ShellStack::new(shells, r_hollow)?;

    let total_mass = stack.total_mass();
    let surface_gravity = constants.gravitational_constant * total_mass.to_kg()
        / constants.reference_radius.powi(2);
    info!(
        cavity_km = r_hollow.to_km(),
        total_mass_kg = total_mass.to_kg(),
        mass_ratio = total_mass / constants.reference_mass,
        surface_gravity,
        "built hollow configuration"
    );
    if total_mass.to_kg() > constants.reference_mass.to_kg() * 1.1 {
        warn!(
            total_mass_kg = total_mass.to_kg(),
            "total mass exceeds reference mass by more than 10%"
        );
    }
    if !(8.0..=12.0).contains(&surface_gravity) {
        warn!(surface_gravity, "surface gravity outside reasonable range");
    }

    Ok(stack)
}

/// A shell stack plus its optional central sun and the constants it was
/// built against. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HollowModel {
    stack: ShellStack,
    central_sun: Option<CentralSun>,
    constants: PhysicalConstants,
}

impl HollowModel {
    /// Wrap a stack into a sunless model.
    pub fn new(stack: ShellStack, constants: PhysicalConstants) -> Self {
        Self {
            stack,
            central_sun: None,
            constants,
        }
    }

    /// Attach a central sun sized for `target_interior_gravity` at the
    /// cavity boundary. The exterior field is unchanged; the sun only adds
    /// an interior term.
    pub fn with_central_sun(mut self, target_interior_gravity: f64, sun_radius: Length) -> Self {
        let sun = CentralSun::for_target_gravity(
            target_interior_gravity,
            self.stack.cavity_radius(),
            sun_radius,
            &self.constants,
        );
        info!(
            sun_mass_kg = sun.mass.to_kg(),
            sun_radius_km = sun.radius.to_km(),
            sun_density = sun.density.to_kg_per_m3(),
            "attached central sun"
        );
        self.central_sun = Some(sun);
        self
    }

    pub fn stack(&self) -> &ShellStack {
        &self.stack
    }

    pub fn central_sun(&self) -> Option<&CentralSun> {
        self.central_sun.as_ref()
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn cavity_radius(&self) -> Length {
        self.stack.cavity_radius()
    }

    /// Total shell mass (the central sun is reported separately).
    pub fn total_mass(&self) -> Mass {
        self.stack.total_mass()
    }

    /// Relative deviation of the total mass from the reference mass.
    pub fn mass_error(&self) -> f64 {
        (self.total_mass() - self.constants.reference_mass).abs() / self.constants.reference_mass
    }

    /// Surface gravity at the reference radius, `G·M/R²`.
    pub fn surface_gravity(&self) -> f64 {
        self.constants.gravitational_constant * self.total_mass().to_kg()
            / self.constants.reference_radius.powi(2)
    }

    /// Combined gravity at the cavity surface: the (near-zero) shell term
    /// plus the central sun term when one is present.
    pub fn interior_gravity(&self) -> f64 {
        let cavity = self.stack.cavity_radius();
        let gravity = RadialGravity::new(self.constants);
        let shell_term = gravity.at_radius(cavity, &self.stack);

        match &self.central_sun {
            Some(sun) => shell_term + sun.gravity_at(cavity, &self.constants),
            None => shell_term,
        }
    }
}

/// Side-by-side metrics for two configurations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelComparison {
    pub mass_ratio: f64,
    pub mass_error_a: f64,
    pub mass_error_b: f64,
    pub surface_gravity_a: f64,
    pub surface_gravity_b: f64,
    pub interior_gravity_a: f64,
    pub interior_gravity_b: f64,
    pub hollow_diameter_a: Length,
    pub hollow_diameter_b: Length,
    pub shell_count_a: usize,
    pub shell_count_b: usize,
}

impl ModelComparison {
    pub fn between(a: &HollowModel, b: &HollowModel) -> Self {
        Self {
            mass_ratio: a.total_mass() / b.total_mass(),
            mass_error_a: a.mass_error(),
            mass_error_b: b.mass_error(),
            surface_gravity_a: a.surface_gravity(),
            surface_gravity_b: b.surface_gravity(),
            interior_gravity_a: a.interior_gravity(),
            interior_gravity_b: b.interior_gravity(),
            hollow_diameter_a: a.cavity_radius() * 2.0,
            hollow_diameter_b: b.cavity_radius() * 2.0,
            shell_count_a: a.stack().shell_count(),
            shell_count_b: b.stack().shell_count(),
        }
    }
}
