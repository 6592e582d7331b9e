//! Uniform-density spherical shells
//!
//! A shell is the basic structural unit of the layered model: everything
//! between two radii at one density. Mass and volume are derived, never
//! stored, so a shell cannot drift out of self-consistency.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use units::{Length, Mass, VolumeDensity};

use crate::error::ModelError;

/// Material class of a shell layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    /// Crustal rock (granitic/basaltic)
    Crustal,
    /// Silicate mantle material
    Silicate,
    /// Iron-nickel metallic material
    Metallic,
    /// Unclassified material
    Unknown,
}

impl Material {
    /// Stable string form used in the export document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Crustal => "crustal",
            Material::Silicate => "silicate",
            Material::Metallic => "metallic",
            Material::Unknown => "unknown",
        }
    }

    /// Parse the export-document string form.
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        match s {
            "crustal" => Ok(Material::Crustal),
            "silicate" => Ok(Material::Silicate),
            "metallic" => Ok(Material::Metallic),
            "unknown" => Ok(Material::Unknown),
            other => Err(ModelError::UnknownMaterial(other.to_string())),
        }
    }
}

/// A spherical shell of constant density between two radii.
///
/// Invariant: `outer_radius > inner_radius >= 0` and `density > 0`, enforced
/// at construction. The innermost shell of a hollow configuration may have
/// `inner_radius == 0` only for solid models; otherwise its inner radius is
/// the cavity boundary.
///
/// # Example
/// ```
/// use shell_model::{Material, Shell};
/// use units::{Length, VolumeDensity};
///
/// let crust = Shell::new(
///     Length::from_km(6371.0),
///     Length::from_km(6271.0),
///     VolumeDensity::crust(),
///     "Outer Crust",
///     Material::Crustal,
/// )
/// .unwrap();
///
/// assert!(crust.mass().to_kg() > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shell {
    /// Outer boundary radius
    pub outer_radius: Length,
    /// Inner boundary radius
    pub inner_radius: Length,
    /// Uniform material density
    pub density: VolumeDensity,
    /// Descriptive layer name
    pub name: String,
    /// Material classification
    pub material: Material,
}

impl Shell {
    /// Create a validated shell.
    ///
    /// # Errors
    /// Fails when `outer_radius <= inner_radius`, a radius is negative, or
    /// the density is non-positive. There is no partially built shell.
    pub fn new(
        outer_radius: Length,
        inner_radius: Length,
        density: VolumeDensity,
        name: impl Into<String>,
        material: Material,
    ) -> Result<Self, ModelError> {
        if inner_radius.to_m() < 0.0 {
            return Err(ModelError::NegativeRadius {
                inner_km: inner_radius.to_km(),
            });
        }
        if outer_radius.to_m() <= inner_radius.to_m() {
            return Err(ModelError::InvertedRadii {
                outer_km: outer_radius.to_km(),
                inner_km: inner_radius.to_km(),
            });
        }
        if density.to_kg_per_m3() <= 0.0 {
            return Err(ModelError::NonPositiveDensity {
                density: density.to_kg_per_m3(),
            });
        }

        Ok(Self {
            outer_radius,
            inner_radius,
            density,
            name: name.into(),
            material,
        })
    }

    /// Radial thickness of the shell.
    pub fn thickness(&self) -> Length {
        self.outer_radius - self.inner_radius
    }

    /// Shell volume in m³: (4/3)·π·(r_out³ − r_in³).
    pub fn volume(&self) -> f64 {
        (4.0 / 3.0) * PI * (self.outer_radius.powi(3) - self.inner_radius.powi(3))
    }

    /// Shell mass, density times volume.
    pub fn mass(&self) -> Mass {
        Mass::from_kg(self.density.to_kg_per_m3() * self.volume())
    }

    /// Mid-shell radius, used for profile sampling.
    pub fn average_radius(&self) -> Length {
        (self.outer_radius + self.inner_radius) / 2.0
    }
}
