//! Bounded Nelder-Mead simplex minimization
//!
//! Coordinates are normalized to the unit box internally so that parameters
//! with very different physical scales move by comparable simplex steps.
//! Candidate vertices are clamped to the box, so the objective is never
//! evaluated outside the given bounds.

use serde::{Deserialize, Serialize};

// Standard reflection, expansion, contraction, and shrink coefficients
const ALPHA: f64 = 1.0;
const GAMMA: f64 = 2.0;
const RHO: f64 = 0.5;
const SIGMA: f64 = 0.5;

/// Per-coordinate offset used to seed the initial simplex, in normalized
/// coordinates.
const INITIAL_STEP: f64 = 0.1;

/// Termination settings for [`minimize`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Options {
    pub max_iterations: usize,
    /// Simplex spread threshold in normalized coordinates
    pub x_tolerance: f64,
    /// Spread threshold on objective values across the simplex
    pub f_tolerance: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_iterations: 400,
            x_tolerance: 1e-6,
            f_tolerance: 1e-12,
        }
    }
}

/// Best point found by [`minimize`], in physical coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Minimum {
    pub point: Vec<f64>,
    pub value: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Minimize `objective` over the box given by `bounds`, starting at `start`.
///
/// The search always returns the best vertex seen; `converged` reports
/// whether either tolerance was met before the iteration cap.
pub fn minimize<F>(mut objective: F, start: &[f64], bounds: &[(f64, f64)], options: &Options) -> Minimum
where
    F: FnMut(&[f64]) -> f64,
{
    assert_eq!(start.len(), bounds.len());
    let n = start.len();

    let to_physical = |unit: &[f64]| -> Vec<f64> {
        unit.iter()
            .zip(bounds)
            .map(|(u, (lo, hi))| lo + u * (hi - lo))
            .collect()
    };

    // Clamps the vertex into the box, then scores it in physical coordinates.
    let mut eval = |unit: &mut Vec<f64>| -> f64 {
        for u in unit.iter_mut() {
            *u = u.clamp(0.0, 1.0);
        }
        objective(&to_physical(unit))
    };

    let mut start_unit: Vec<f64> = start
        .iter()
        .zip(bounds)
        .map(|(x, (lo, hi))| ((x - lo) / (hi - lo)).clamp(0.0, 1.0))
        .collect();

    let mut simplex: Vec<(Vec<f64>, f64)> = Vec::with_capacity(n + 1);
    let start_value = eval(&mut start_unit);
    simplex.push((start_unit.clone(), start_value));
    for i in 0..n {
        let mut vertex = start_unit.clone();
        vertex[i] = if vertex[i] + INITIAL_STEP <= 1.0 {
            vertex[i] + INITIAL_STEP
        } else {
            vertex[i] - INITIAL_STEP
        };
        let value = eval(&mut vertex);
        simplex.push((vertex, value));
    }

    let mut iterations = 0;
    let mut converged = false;

    while iterations < options.max_iterations {
        simplex.sort_by(|a, b| a.1.total_cmp(&b.1));

        let f_spread = simplex[n].1 - simplex[0].1;
        let x_spread = simplex[1..]
            .iter()
            .flat_map(|(vertex, _)| {
                vertex
                    .iter()
                    .zip(&simplex[0].0)
                    .map(|(a, b)| (a - b).abs())
            })
            .fold(0.0_f64, f64::max);
        if f_spread <= options.f_tolerance || x_spread <= options.x_tolerance {
            converged = true;
            break;
        }

        iterations += 1;

        // Centroid of every vertex except the worst
        let mut centroid = vec![0.0; n];
        for (vertex, _) in &simplex[..n] {
            for (c, v) in centroid.iter_mut().zip(vertex) {
                *c += v / n as f64;
            }
        }

        let worst = simplex[n].clone();
        let mut reflected: Vec<f64> = centroid
            .iter()
            .zip(&worst.0)
            .map(|(c, w)| c + ALPHA * (c - w))
            .collect();
        let f_reflected = eval(&mut reflected);

        if f_reflected < simplex[0].1 {
            let mut expanded: Vec<f64> = centroid
                .iter()
                .zip(&worst.0)
                .map(|(c, w)| c + GAMMA * (c - w))
                .collect();
            let f_expanded = eval(&mut expanded);
            simplex[n] = if f_expanded < f_reflected {
                (expanded, f_expanded)
            } else {
                (reflected, f_reflected)
            };
            continue;
        }

        if f_reflected < simplex[n - 1].1 {
            simplex[n] = (reflected, f_reflected);
            continue;
        }

        // Contract toward the better of the worst vertex and its reflection
        let (anchor, f_anchor) = if f_reflected < worst.1 {
            (&reflected, f_reflected)
        } else {
            (&worst.0, worst.1)
        };
        let mut contracted: Vec<f64> = centroid
            .iter()
            .zip(anchor)
            .map(|(c, a)| c + RHO * (a - c))
            .collect();
        let f_contracted = eval(&mut contracted);
        if f_contracted < f_anchor {
            simplex[n] = (contracted, f_contracted);
            continue;
        }

        // Shrink every vertex toward the best
        let best = simplex[0].0.clone();
        for (vertex, value) in simplex.iter_mut().skip(1) {
            for (v, b) in vertex.iter_mut().zip(&best) {
                *v = b + SIGMA * (*v - b);
            }
            *value = eval(vertex);
        }
    }

    simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
    let (best_unit, value) = &simplex[0];
    Minimum {
        point: to_physical(best_unit),
        value: *value,
        iterations,
        converged,
    }
}
