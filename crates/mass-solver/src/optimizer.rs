//! Mass-targeting search over dense-shell parameters

use serde::{Deserialize, Serialize};
use shell_model::{ModelError, ShellStack};
use tracing::{error, warn};
use units::{Length, Mass, VolumeDensity};

use crate::nelder_mead::{minimize, Options};

/// Objective value reported for parameter sets the builder rejects.
pub const BUILDER_PENALTY: f64 = 1e6;

/// Box constraints on the searched parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterBounds {
    /// Dense shell density range (kg/m³)
    pub density: (f64, f64),
    /// Searched thickness range (m)
    pub thickness: (f64, f64),
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            density: (7_000.0, 20_000.0),
            thickness: (50e3, 500e3),
        }
    }
}

/// Result of a mass search. Always carries a usable stack: the optimized one
/// on convergence, the fallback otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassSearchOutcome {
    pub stack: ShellStack,
    /// Relative deviation of the carried stack's mass from the target
    pub mass_error: f64,
    /// Best density found by the search
    pub dense_shell_density: VolumeDensity,
    /// Best thickness found by the search
    pub shell_thickness: Length,
    pub iterations: usize,
    pub converged: bool,
}

/// Searches a density and a thickness so that the built stack's total mass
/// matches a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassTargetOptimizer {
    target_mass: Mass,
    bounds: ParameterBounds,
    initial_guess: [f64; 2],
    options: Options,
}

impl MassTargetOptimizer {
    pub fn new(target_mass: Mass) -> Self {
        Self {
            target_mass,
            bounds: ParameterBounds::default(),
            initial_guess: [11_000.0, 150e3],
            options: Options::default(),
        }
    }

    pub fn with_bounds(mut self, bounds: ParameterBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_initial_guess(mut self, density: VolumeDensity, thickness: Length) -> Self {
        self.initial_guess = [density.to_kg_per_m3(), thickness.to_m()];
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Run the search. `builder` turns a candidate density and thickness
    /// into a stack; candidates it rejects score [`BUILDER_PENALTY`] and the
    /// search moves on. Without convergence the `fallback` stack is kept.
    pub fn optimize<B>(&self, fallback: ShellStack, mut builder: B) -> MassSearchOutcome
    where
        B: FnMut(VolumeDensity, Length) -> Result<ShellStack, ModelError>,
    {
        let target_kg = self.target_mass.to_kg();
        let bounds = [self.bounds.density, self.bounds.thickness];

        let objective = |params: &[f64]| {
            let density = VolumeDensity::from_kg_per_m3(params[0]);
            let thickness = Length::from_m(params[1]);
            match builder(density, thickness) {
                Ok(stack) => (stack.total_mass().to_kg() - target_kg).abs() / target_kg,
                Err(err) => {
                    warn!(
                        density_kg_per_m3 = params[0],
                        thickness_m = params[1],
                        %err,
                        "candidate parameters rejected"
                    );
                    BUILDER_PENALTY
                }
            }
        };

        let minimum = minimize(objective, &self.initial_guess, &bounds, &self.options);
        let dense_shell_density = VolumeDensity::from_kg_per_m3(minimum.point[0]);
        let shell_thickness = Length::from_m(minimum.point[1]);

        if minimum.converged {
            match builder(dense_shell_density, shell_thickness) {
                Ok(stack) => {
                    return MassSearchOutcome {
                        stack,
                        mass_error: minimum.value,
                        dense_shell_density,
                        shell_thickness,
                        iterations: minimum.iterations,
                        converged: true,
                    };
                }
                Err(err) => {
                    error!(%err, "search settled on rejected parameters; keeping the starting configuration");
                }
            }
        } else {
            error!(
                iterations = minimum.iterations,
                best_error = minimum.value,
                "mass search did not converge; keeping the starting configuration"
            );
        }

        let mass_error = (fallback.total_mass().to_kg() - target_kg).abs() / target_kg;
        MassSearchOutcome {
            stack: fallback,
            mass_error,
            dense_shell_density,
            shell_thickness,
            iterations: minimum.iterations,
            converged: false,
        }
    }
}
