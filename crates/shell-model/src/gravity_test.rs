use approx::assert_relative_eq;
use units::{Length, VolumeDensity};

use crate::constants::PhysicalConstants;
use crate::gravity::RadialGravity;
use crate::model::{hollow_earth_stack, standard_earth_stack, HollowEarthParams};
use crate::shell::{Material, Shell};
use crate::stack::ShellStack;

fn uniform_earth() -> ShellStack {
    let sphere = Shell::new(
        Length::from_m(6.371e6),
        Length::zero(),
        VolumeDensity::from_kg_per_m3(5510.0),
        "Uniform Earth",
        Material::Silicate,
    )
    .unwrap();
    ShellStack::new(vec![sphere], Length::zero()).unwrap()
}

#[test]
fn test_uniform_sphere_surface_gravity() {
    let constants = PhysicalConstants::earth();
    let gravity = RadialGravity::new(constants);
    let stack = uniform_earth();

    // Within 5% of 9.8 m/s²
    let g = gravity.at_radius(Length::from_m(6.371e6), &stack);
    assert_relative_eq!(g, 9.8, epsilon = 0.49);

    // Within 2% of Earth's mass
    let mass = gravity.enclosed_mass(Length::from_m(6.371e6), &stack);
    assert_relative_eq!(mass.to_earth_masses(), 1.0, epsilon = 0.02);
}

#[test]
fn test_gravity_zero_at_center() {
    let constants = PhysicalConstants::earth();
    let gravity = RadialGravity::new(constants);
    assert_eq!(gravity.at_radius(Length::zero(), &uniform_earth()), 0.0);
}

#[test]
fn test_uniform_sphere_gravity_monotone_to_surface() {
    let constants = PhysicalConstants::earth();
    let gravity = RadialGravity::new(constants);
    let stack = uniform_earth();

    let profile = gravity.profile(&stack, 200);
    for pair in profile.windows(2) {
        assert!(
            pair[1].gravity >= pair[0].gravity,
            "gravity decreased inside a uniform sphere at {} km",
            pair[1].radius.to_km()
        );
    }
}

#[test]
fn test_continuity_across_shell_boundary() {
    let constants = PhysicalConstants::earth();
    let gravity = RadialGravity::new(constants);
    let stack = standard_earth_stack(&constants).unwrap();

    // Core-mantle boundary of the standard model
    let boundary = Length::from_m(2.89e6);
    let just_below = Length::from_m(2.89e6 - 1.0);

    let g_at = gravity.at_radius(boundary, &stack);
    let g_below = gravity.at_radius(just_below, &stack);
    assert_relative_eq!(g_at, g_below, max_relative = 1e-5);
}

#[test]
fn test_straddling_shell_volume_fraction() {
    let constants = PhysicalConstants::earth();
    let gravity = RadialGravity::new(constants);

    let shell = Shell::new(
        Length::from_m(2.0),
        Length::from_m(1.0),
        VolumeDensity::water(),
        "unit shell",
        Material::Unknown,
    )
    .unwrap();
    let total = shell.mass();
    let stack = ShellStack::new(vec![shell], Length::from_m(1.0)).unwrap();

    // Halfway through the shell volume: (r³ - 1) / (8 - 1) at r = 1.5
    let enclosed = gravity.enclosed_mass(Length::from_m(1.5), &stack);
    let expected_fraction = (1.5_f64.powi(3) - 1.0) / 7.0;
    assert_relative_eq!(enclosed.to_kg(), total.to_kg() * expected_fraction);

    // Below the shell nothing is enclosed, above it everything is
    assert_eq!(gravity.enclosed_mass(Length::from_m(0.5), &stack).to_kg(), 0.0);
    assert_relative_eq!(
        gravity.enclosed_mass(Length::from_m(3.0), &stack).to_kg(),
        total.to_kg()
    );
}

#[test]
fn test_hollow_cavity_has_negligible_shell_gravity() {
    let constants = PhysicalConstants::earth();
    let gravity = RadialGravity::new(constants);
    let stack = hollow_earth_stack(&HollowEarthParams::default(), &constants).unwrap();

    let g_cavity = gravity.at_radius(stack.cavity_radius(), &stack);
    assert_eq!(g_cavity, 0.0);

    // The exterior field is unaffected by the hollow
    let g_surface = gravity.surface_gravity(&stack);
    assert!(g_surface > 9.5 && g_surface < 10.5);
}

#[test]
fn test_profile_spans_cavity_to_surface() {
    let constants = PhysicalConstants::earth();
    let gravity = RadialGravity::new(constants);
    let stack = hollow_earth_stack(&HollowEarthParams::default(), &constants).unwrap();

    let profile = gravity.profile(&stack, 100);
    assert_eq!(profile.len(), 100);
    assert_relative_eq!(
        profile[0].radius.to_m(),
        stack.cavity_radius().to_m(),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        profile[99].radius.to_m(),
        constants.reference_radius.to_m(),
        max_relative = 1e-12
    );
}
