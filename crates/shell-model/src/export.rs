//! JSON export of complete configurations
//!
//! The export document is the framework's only persisted artifact. Field
//! names and nesting are fixed: external tooling reads these files, so the
//! schema must stay stable across versions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use units::{Length, VolumeDensity};

use crate::admissibility::AdmissibilityReport;
use crate::error::ModelError;
use crate::model::HollowModel;
use crate::shell::{Material, Shell};
use crate::stack::ShellStack;

/// Version stamp written into every export document.
pub const FRAMEWORK_VERSION: &str = "1.0.0";

/// Failures while writing or reading an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("export file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level export document: metadata, configuration, checklist results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub metadata: ExportMetadata,
    pub configuration: ExportConfiguration,
    pub validation: AdmissibilityReport,
}

/// Framework version and the reference constants the model was built with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub framework_version: String,
    pub creation_timestamp: String,
    /// Reference mass (kg)
    pub earth_mass: f64,
    /// Reference surface radius (m)
    pub earth_radius: f64,
}

/// The configuration itself: cavity, aggregates, optional sun, shells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfiguration {
    /// Cavity radius (m)
    pub central_hollow_radius: f64,
    /// Total shell mass (kg)
    pub total_mass: f64,
    /// Exterior surface gravity (m/s²)
    pub surface_gravity: f64,
    pub central_sun: Option<ExportCentralSun>,
    pub shells: Vec<ExportShell>,
}

/// Central sun record, all SI scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportCentralSun {
    /// Mass (kg)
    pub mass: f64,
    /// Radius (m)
    pub radius: f64,
    /// Bulk density (kg/m³)
    pub density: f64,
    /// Effective temperature (K)
    pub temperature: f64,
    pub luminosity_fraction: f64,
    /// Distance from sun surface to cavity surface (m)
    pub distance_to_surface: f64,
    /// Estimated interior surface temperature (K)
    pub estimated_surface_temperature: f64,
    /// Sun gravity at the cavity boundary (m/s²)
    pub gravity_contribution_interior: f64,
    /// Always zero; the sun never affects the exterior field
    pub gravity_contribution_surface: f64,
}

/// One shell record with its derived mass and volume included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportShell {
    /// Outer radius (m)
    pub outer_radius: f64,
    /// Inner radius (m)
    pub inner_radius: f64,
    /// Density (kg/m³)
    pub density: f64,
    pub name: String,
    pub material_type: String,
    /// Mass (kg)
    pub mass: f64,
    /// Volume (m³)
    pub volume: f64,
}

impl ExportDocument {
    /// Capture a model into its export form, timestamped now.
    pub fn from_model(model: &HollowModel) -> Self {
        let constants = model.constants();
        let cavity = model.cavity_radius();

        let shells = model
            .stack()
            .shells()
            .iter()
            .map(|shell| ExportShell {
                outer_radius: shell.outer_radius.to_m(),
                inner_radius: shell.inner_radius.to_m(),
                density: shell.density.to_kg_per_m3(),
                name: shell.name.clone(),
                material_type: shell.material.as_str().to_string(),
                mass: shell.mass().to_kg(),
                volume: shell.volume(),
            })
            .collect();

        let central_sun = model.central_sun().map(|sun| ExportCentralSun {
            mass: sun.mass.to_kg(),
            radius: sun.radius.to_m(),
            density: sun.density.to_kg_per_m3(),
            temperature: sun.temperature,
            luminosity_fraction: sun.luminosity_fraction,
            distance_to_surface: sun.distance_to_surface.to_m(),
            estimated_surface_temperature: sun.estimated_surface_temperature,
            gravity_contribution_interior: sun.gravity_at(cavity, constants),
            gravity_contribution_surface: 0.0,
        });

        Self {
            metadata: ExportMetadata {
                framework_version: FRAMEWORK_VERSION.to_string(),
                creation_timestamp: chrono::Utc::now().to_rfc3339(),
                earth_mass: constants.reference_mass.to_kg(),
                earth_radius: constants.reference_radius.to_m(),
            },
            configuration: ExportConfiguration {
                central_hollow_radius: cavity.to_m(),
                total_mass: model.total_mass().to_kg(),
                surface_gravity: model.surface_gravity(),
                central_sun,
                shells,
            },
            validation: AdmissibilityReport::assess(model),
        }
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the document to `path` as pretty-printed JSON.
    pub fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), "configuration exported");
        Ok(())
    }

    /// Read a document back from a file written by [`Self::write_to`].
    pub fn read_from(path: &Path) -> Result<Self, ExportError> {
        Ok(Self::from_json(&fs::read_to_string(path)?)?)
    }
}

impl ExportConfiguration {
    /// Rebuild the shell stack described by this document.
    ///
    /// Only the stored radii and densities are used; masses and volumes are
    /// re-derived, so a round trip reproduces them exactly.
    pub fn to_stack(&self) -> Result<ShellStack, ModelError> {
        let shells = self
            .shells
            .iter()
            .map(|s| {
                Shell::new(
                    Length::from_m(s.outer_radius),
                    Length::from_m(s.inner_radius),
                    VolumeDensity::from_kg_per_m3(s.density),
                    s.name.clone(),
                    Material::parse(&s.material_type)?,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        ShellStack::new(shells, Length::from_m(self.central_hollow_radius))
    }
}
