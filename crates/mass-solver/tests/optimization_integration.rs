//! End-to-end mass search against the layered hollow configuration.

use mass_solver::{MassTargetOptimizer, ParameterBounds};
use shell_model::constants::PhysicalConstants;
use shell_model::gravity::RadialGravity;
use shell_model::model::{hollow_earth_stack, HollowEarthParams};
use units::{Length, Mass, VolumeDensity, EARTH_MASS_KG};

#[test]
fn test_dense_shell_search_recovers_reference_mass() {
    let constants = PhysicalConstants::earth();

    // Searches the dense shell density and the inner crust thickness
    let builder = |density: VolumeDensity, thickness: Length| {
        hollow_earth_stack(
            &HollowEarthParams {
                dense_shell_density: density,
                inner_crust_thickness: thickness,
                ..HollowEarthParams::default()
            },
            &constants,
        )
    };

    let fallback = hollow_earth_stack(&HollowEarthParams::default(), &constants).unwrap();
    let optimizer = MassTargetOptimizer::new(Mass::from_kg(EARTH_MASS_KG))
        .with_bounds(ParameterBounds::default());

    let outcome = optimizer.optimize(fallback, builder);

    assert!(outcome.converged, "stopped after {} iterations", outcome.iterations);
    assert!(outcome.mass_error < 0.01, "mass error {}", outcome.mass_error);

    // The optimized planet still pulls like the real one at the surface
    let gravity = RadialGravity::new(constants);
    let surface = gravity.surface_gravity(&outcome.stack);
    assert!(
        (9.5..=10.5).contains(&surface),
        "surface gravity {surface} m/s²"
    );

    // Parameters respect the search box
    let bounds = ParameterBounds::default();
    let density = outcome.dense_shell_density.to_kg_per_m3();
    let thickness = outcome.shell_thickness.to_m();
    assert!(density >= bounds.density.0 && density <= bounds.density.1);
    assert!(thickness >= bounds.thickness.0 && thickness <= bounds.thickness.1);
}
