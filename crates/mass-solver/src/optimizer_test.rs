use shell_model::constants::PhysicalConstants;
use shell_model::error::ModelError;
use shell_model::shell::{Material, Shell};
use shell_model::stack::ShellStack;
use units::{Length, Mass, VolumeDensity};

fn single_shell(density: VolumeDensity, thickness: Length) -> Result<ShellStack, ModelError> {
    let constants = PhysicalConstants::earth();
    let outer = constants.reference_radius;
    let shell = Shell::new(outer, outer - thickness, density, "Test Shell".to_string(), Material::Metallic)?;
    let cavity = outer - thickness;
    ShellStack::new(vec![shell], cavity)
}

fn reference_stack() -> ShellStack {
    single_shell(VolumeDensity::from_kg_per_m3(10_000.0), Length::from_km(300.0)).unwrap()
}

#[test]
fn test_search_hits_an_achievable_target() {
    use crate::optimizer::MassTargetOptimizer;

    // Target is exactly the mass of a known parameter pair
    let target = reference_stack().total_mass();
    let optimizer = MassTargetOptimizer::new(target);

    let outcome = optimizer.optimize(reference_stack(), single_shell);

    assert!(outcome.converged, "stopped after {} iterations", outcome.iterations);
    assert!(outcome.mass_error < 1e-4, "mass error {}", outcome.mass_error);
    let achieved = outcome.stack.total_mass().to_kg();
    assert!((achieved - target.to_kg()).abs() / target.to_kg() < 1e-4);
}

#[test]
fn test_best_parameters_stay_inside_bounds() {
    use crate::optimizer::{MassTargetOptimizer, ParameterBounds};

    let target = reference_stack().total_mass();
    let bounds = ParameterBounds::default();
    let optimizer = MassTargetOptimizer::new(target).with_bounds(bounds);

    let outcome = optimizer.optimize(reference_stack(), single_shell);

    let density = outcome.dense_shell_density.to_kg_per_m3();
    let thickness = outcome.shell_thickness.to_m();
    assert!(density >= bounds.density.0 && density <= bounds.density.1);
    assert!(thickness >= bounds.thickness.0 && thickness <= bounds.thickness.1);
}

#[test]
fn test_rejected_candidates_are_penalized_not_fatal() {
    use crate::optimizer::MassTargetOptimizer;

    // The builder rejects a slice of the search box
    let picky = |density: VolumeDensity, thickness: Length| {
        if density.to_kg_per_m3() > 15_000.0 {
            return Err(ModelError::NonPositiveDensity {
                density: density.to_kg_per_m3(),
            });
        }
        single_shell(density, thickness)
    };

    let target = reference_stack().total_mass();
    let outcome = MassTargetOptimizer::new(target).optimize(reference_stack(), picky);

    assert!(outcome.converged);
    assert!(outcome.mass_error < 1e-4);
    assert!(outcome.dense_shell_density.to_kg_per_m3() <= 15_000.0);
}

#[test]
fn test_non_convergence_keeps_the_fallback_stack() {
    use crate::nelder_mead::Options;
    use crate::optimizer::MassTargetOptimizer;

    // Unreachable target: heavier than any stack the bounds allow
    let target = Mass::from_kg(1e30);
    let options = Options {
        max_iterations: 3,
        ..Options::default()
    };
    let fallback = reference_stack();
    let fallback_mass = fallback.total_mass().to_kg();

    let outcome = MassTargetOptimizer::new(target)
        .with_options(options)
        .optimize(fallback, single_shell);

    assert!(!outcome.converged);
    assert_eq!(outcome.stack.total_mass().to_kg(), fallback_mass);
    // The reported error describes the fallback, not the failed search
    assert!((outcome.mass_error - (1.0 - fallback_mass / 1e30)).abs() < 1e-12);
}
