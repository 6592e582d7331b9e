use std::f64::consts::PI;

use approx::assert_relative_eq;
use units::Length;

use crate::constants::PhysicalConstants;
use crate::sun::CentralSun;

#[test]
fn test_mass_sized_for_target_gravity() {
    let constants = PhysicalConstants::earth();
    let cavity = Length::from_km(4271.0);
    let sun = CentralSun::for_target_gravity(9.8, cavity, Length::from_km(150.0), &constants);

    let expected_mass = 9.8 * cavity.powi(2) / constants.gravitational_constant;
    assert_relative_eq!(sun.mass.to_kg(), expected_mass);

    // Producing the target gravity back at the cavity boundary
    assert_relative_eq!(sun.gravity_at(cavity, &constants), 9.8, max_relative = 1e-12);
}

#[test]
fn test_density_follows_from_fixed_radius() {
    let constants = PhysicalConstants::earth();
    let radius = Length::from_km(150.0);
    let sun = CentralSun::for_target_gravity(9.8, Length::from_km(4271.0), radius, &constants);

    let volume = (4.0 / 3.0) * PI * radius.powi(3);
    assert_relative_eq!(sun.density.to_kg_per_m3(), sun.mass.to_kg() / volume);

    // Ultra-dense by construction
    assert!(sun.density.to_kg_per_m3() > 1e8);
}

#[test]
fn test_no_gravity_inside_sun_body() {
    let constants = PhysicalConstants::earth();
    let sun =
        CentralSun::for_target_gravity(9.8, Length::from_km(4271.0), Length::from_km(150.0), &constants);

    assert_eq!(sun.gravity_at(Length::from_km(100.0), &constants), 0.0);
    assert_eq!(sun.gravity_at(Length::from_km(150.0), &constants), 0.0);
    assert!(sun.gravity_at(Length::from_km(151.0), &constants) > 0.0);
}

#[test]
fn test_clearance_to_cavity_surface() {
    let constants = PhysicalConstants::earth();
    let sun =
        CentralSun::for_target_gravity(9.8, Length::from_km(4271.0), Length::from_km(150.0), &constants);

    // Cavity radius minus sun radius minus the 200 km margin
    assert_relative_eq!(sun.distance_to_surface.to_km(), 3921.0);
}
