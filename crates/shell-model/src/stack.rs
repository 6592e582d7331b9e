//! Ordered stacks of concentric shells
//!
//! A [`ShellStack`] owns the shells of one configuration, sorted by
//! descending outer radius, with the cavity radius marking the hollow core
//! boundary. Stacks are validated once at construction and immutable
//! afterwards; a gap or overlap between adjacent shells is tolerated with a
//! warning because hand-tuned configurations are often only approximately
//! contiguous.

use serde::{Deserialize, Serialize};
use tracing::warn;
use units::{Length, Mass};

use crate::error::ModelError;
use crate::shell::Shell;

/// An ordered, approximately contiguous sequence of shells around a hollow
/// (or solid, `cavity_radius == 0`) core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellStack {
    shells: Vec<Shell>,
    cavity_radius: Length,
}

impl ShellStack {
    /// Build a stack from shells in any order.
    ///
    /// Shells are sorted by descending outer radius. Adjacent shells whose
    /// boundaries do not meet exactly produce a warning, not an error.
    ///
    /// # Errors
    /// Fails on an empty shell list, or when the cavity radius exceeds the
    /// innermost shell's inner boundary.
    pub fn new(mut shells: Vec<Shell>, cavity_radius: Length) -> Result<Self, ModelError> {
        if shells.is_empty() {
            return Err(ModelError::EmptyStack);
        }

        shells.sort_by(|a, b| b.outer_radius.to_m().total_cmp(&a.outer_radius.to_m()));

        for pair in shells.windows(2) {
            let inner = pair[0].inner_radius.to_m();
            let next_outer = pair[1].outer_radius.to_m();
            if inner > next_outer {
                warn!(
                    upper = %pair[0].name,
                    lower = %pair[1].name,
                    gap_km = (inner - next_outer) / 1000.0,
                    "gap between adjacent shells"
                );
            } else if inner < next_outer {
                warn!(
                    upper = %pair[0].name,
                    lower = %pair[1].name,
                    overlap_km = (next_outer - inner) / 1000.0,
                    "overlap between adjacent shells"
                );
            }
        }

        let innermost_inner = shells[shells.len() - 1].inner_radius;
        if innermost_inner.to_m() < cavity_radius.to_m() {
            return Err(ModelError::CavityExceedsInnermostShell {
                cavity_km: cavity_radius.to_km(),
                inner_km: innermost_inner.to_km(),
            });
        }

        Ok(Self {
            shells,
            cavity_radius,
        })
    }

    /// Shells ordered by descending outer radius.
    pub fn shells(&self) -> &[Shell] {
        &self.shells
    }

    /// Radius of the hollow core boundary (zero for solid models).
    pub fn cavity_radius(&self) -> Length {
        self.cavity_radius
    }

    /// Outer radius of the outermost shell.
    pub fn surface_radius(&self) -> Length {
        self.shells[0].outer_radius
    }

    /// The innermost (smallest outer radius) shell.
    pub fn innermost(&self) -> &Shell {
        &self.shells[self.shells.len() - 1]
    }

    /// Number of shells in the stack.
    pub fn shell_count(&self) -> usize {
        self.shells.len()
    }

    /// Total mass, the sum of per-shell masses.
    pub fn total_mass(&self) -> Mass {
        self.shells.iter().map(Shell::mass).sum()
    }

    /// True when no adjacent pair of shells overlaps in radius.
    pub fn is_non_overlapping(&self) -> bool {
        self.shells
            .windows(2)
            .all(|pair| pair[0].inner_radius.to_m() >= pair[1].outer_radius.to_m())
    }
}
