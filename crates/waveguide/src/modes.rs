//! Mode spectrum estimate and testable predictions

use serde::{Deserialize, Serialize};
use units::Length;

use crate::fiber::FiberOpticAnalogy;
use crate::seismic::SeismicVelocities;

/// Single-mode cutoff for the normalized frequency of a step-index guide.
const SINGLE_MODE_CUTOFF: f64 = 2.405;

/// Reference wavelength used to normalize the V-parameter (m).
const REFERENCE_WAVELENGTH: f64 = 1_000.0;

/// Estimated guided-mode spectrum of the cavity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveguideModes {
    pub cavity_radius: Length,
    pub shell_thickness: Length,
    /// Seismic equivalent of a fiber's numerical aperture
    pub numerical_aperture: f64,
    /// Normalized frequency at the reference wavelength
    pub v_parameter: f64,
    pub mode_count: u64,
    /// Lowest cavity resonance (Hz)
    pub fundamental_frequency_hz: f64,
    pub multimode: bool,
}

impl WaveguideModes {
    /// Estimate the mode spectrum for a cavity of `cavity_radius` wrapped in
    /// a shell of `shell_thickness`.
    pub fn calculate(
        velocities: &SeismicVelocities,
        cavity_radius: Length,
        shell_thickness: Length,
    ) -> Self {
        let vp = velocities.p_crust;
        let numerical_aperture = ((vp * vp - velocities.air * velocities.air) / (vp * vp)).sqrt();

        let v_parameter =
            2.0 * std::f64::consts::PI * cavity_radius.to_m() / REFERENCE_WAVELENGTH
                * numerical_aperture;
        let mode_count = if v_parameter > SINGLE_MODE_CUTOFF {
            (v_parameter * v_parameter / 2.0) as u64
        } else {
            1
        };

        let fundamental_frequency_hz = velocities.air / (2.0 * cavity_radius.to_m());

        Self {
            cavity_radius,
            shell_thickness,
            numerical_aperture,
            v_parameter,
            mode_count,
            fundamental_frequency_hz,
            multimode: mode_count > 1,
        }
    }
}

/// Observable consequences the waveguide picture implies.
pub fn seismic_predictions() -> [&'static str; 10] {
    [
        "Discrete resonance frequencies in the planet's seismic spectrum",
        "Standing wave patterns in global seismic data",
        "Enhanced seismic wave propagation at specific frequencies",
        "Seismic wave polarization effects at cavity interfaces",
        "Anomalous seismic velocity measurements near interfaces",
        "Frequency-dependent seismic shadow zones",
        "Long-duration seismic ringing from high Q-factors",
        "Modal dispersion in seismic wave packets",
        "Interference patterns in continent-spanning seismic waves",
        "A persistent background hum at the cavity resonance",
    ]
}

/// One observed phenomenon set against what the waveguide picture predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhenomenonMatch {
    pub name: &'static str,
    pub observed: &'static str,
    pub predicted: &'static str,
    pub assessment: &'static str,
}

/// Known seismic observations lined up with their waveguide reading.
pub fn observed_phenomena() -> [PhenomenonMatch; 4] {
    [
        PhenomenonMatch {
            name: "background_hum",
            observed: "Persistent 2.9-4.5 mHz oscillations",
            predicted: "Cavity resonance modes",
            assessment: "Frequency range consistent",
        },
        PhenomenonMatch {
            name: "seismic_shadows",
            observed: "Abrupt P-wave shadow between 103 and 142 degrees",
            predicted: "Total internal reflection zones",
            assessment: "Explains the sharp boundaries",
        },
        PhenomenonMatch {
            name: "wave_propagation",
            observed: "Anomalously efficient long-distance propagation",
            predicted: "Guided propagation modes",
            assessment: "Explains the efficiency",
        },
        PhenomenonMatch {
            name: "resonance_duration",
            observed: "Hours of ringing after large earthquakes",
            predicted: "High-Q cavity resonance",
            assessment: "Explains the persistence",
        },
    ]
}

/// Full analysis bundle in an export-friendly shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveguideReport {
    pub velocities: SeismicVelocities,
    pub critical_angles_deg: Vec<(&'static str, f64)>,
    pub fiber_analogy: FiberOpticAnalogy,
    pub modes: WaveguideModes,
    pub predictions: Vec<&'static str>,
    pub phenomena: Vec<PhenomenonMatch>,
}

impl WaveguideReport {
    pub fn generate(
        velocities: SeismicVelocities,
        cavity_radius: Length,
        shell_thickness: Length,
    ) -> Self {
        let critical_angles_deg = velocities
            .critical_angles()
            .iter()
            .map(|(interface, angle)| (interface.as_str(), *angle))
            .collect();

        Self {
            critical_angles_deg,
            fiber_analogy: FiberOpticAnalogy::analyze(&velocities),
            modes: WaveguideModes::calculate(&velocities, cavity_radius, shell_thickness),
            predictions: seismic_predictions().to_vec(),
            phenomena: observed_phenomena().to_vec(),
            velocities,
        }
    }
}
