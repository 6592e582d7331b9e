//! Newtonian radial gravity over a shell stack
//!
//! By the shell theorem a uniform shell pulls like a point mass from outside
//! and not at all from inside, so acceleration at radius `r` only needs the
//! mass enclosed below `r`. A shell straddling the query radius contributes
//! the volume fraction of its mass inside `r`.

use serde::{Deserialize, Serialize};
use units::{Length, Mass};

use crate::constants::PhysicalConstants;
use crate::stack::ShellStack;

/// One point of a radial gravity profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravitySample {
    /// Distance from the planet center
    pub radius: Length,
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
}

/// Evaluates gravitational acceleration at arbitrary radii of a shell stack.
///
/// The evaluator only accounts for shells; an optional central sun is a
/// separate additive term combined by [`crate::HollowModel`].
///
/// # Example
/// ```
/// use shell_model::{standard_earth_stack, PhysicalConstants, RadialGravity};
/// use units::Length;
///
/// let constants = PhysicalConstants::earth();
/// let stack = standard_earth_stack(&constants).unwrap();
/// let gravity = RadialGravity::new(constants);
///
/// let g_surface = gravity.at_radius(Length::from_earth_radii(1.0), &stack);
/// assert!(g_surface > 9.0 && g_surface < 11.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RadialGravity {
    constants: PhysicalConstants,
}

impl RadialGravity {
    /// Create an evaluator bound to a constant set.
    pub fn new(constants: PhysicalConstants) -> Self {
        Self { constants }
    }

    /// Total shell mass at or below `radius`.
    ///
    /// Shells entirely below contribute fully; the shell straddling `radius`
    /// contributes `mass · (r³ − r_in³)/(r_out³ − r_in³)`; shells entirely
    /// above contribute nothing.
    pub fn enclosed_mass(&self, radius: Length, stack: &ShellStack) -> Mass {
        let r = radius.to_m();
        let mut enclosed = Mass::zero();

        for shell in stack.shells() {
            let r_out = shell.outer_radius.to_m();
            let r_in = shell.inner_radius.to_m();

            if r >= r_out {
                enclosed = enclosed + shell.mass();
            } else if r > r_in {
                let volume_fraction = (r.powi(3) - r_in.powi(3)) / (r_out.powi(3) - r_in.powi(3));
                enclosed = enclosed + shell.mass() * volume_fraction;
            }
            // r <= r_in: shell lies entirely above the query radius
        }

        enclosed
    }

    /// Gravitational acceleration in m/s² at `radius`.
    ///
    /// Returns zero at the center; the limit of `G·M(r)/r²` as `r → 0` is
    /// well defined but the quotient is not.
    pub fn at_radius(&self, radius: Length, stack: &ShellStack) -> f64 {
        let r = radius.to_m();
        if r <= 0.0 {
            return 0.0;
        }

        let enclosed = self.enclosed_mass(radius, stack);
        self.constants.gravitational_constant * enclosed.to_kg() / (r * r)
    }

    /// Acceleration at the reference surface radius.
    pub fn surface_gravity(&self, stack: &ShellStack) -> f64 {
        self.at_radius(self.constants.reference_radius, stack)
    }

    /// Evenly spaced gravity profile from the cavity boundary to the
    /// reference surface radius. `n_points` must be at least 2.
    pub fn profile(&self, stack: &ShellStack, n_points: usize) -> Vec<GravitySample> {
        let n = n_points.max(2);
        let start = stack.cavity_radius().to_m();
        let end = self.constants.reference_radius.to_m();
        let step = (end - start) / (n as f64 - 1.0);

        (0..n)
            .map(|i| {
                let radius = Length::from_m(start + step * i as f64);
                GravitySample {
                    radius,
                    gravity: self.at_radius(radius, stack),
                }
            })
            .collect()
    }
}
