use approx::assert_relative_eq;
use units::{Length, Mass, VolumeDensity};

use crate::error::ModelError;
use crate::shell::{Material, Shell};
use crate::stack::ShellStack;

fn shell(outer_km: f64, inner_km: f64, density: f64, name: &str) -> Shell {
    Shell::new(
        Length::from_km(outer_km),
        Length::from_km(inner_km),
        VolumeDensity::from_kg_per_m3(density),
        name,
        Material::Unknown,
    )
    .unwrap()
}

#[test]
fn test_total_mass_is_sum_of_shells() {
    let shells = vec![
        shell(6371.0, 6271.0, 2800.0, "outer"),
        shell(6271.0, 4471.0, 8649.0, "dense"),
        shell(4471.0, 4271.0, 2800.0, "inner"),
    ];
    let expected: Mass = shells.iter().map(Shell::mass).sum();

    let stack = ShellStack::new(shells, Length::from_km(4271.0)).unwrap();
    assert_relative_eq!(stack.total_mass().to_kg(), expected.to_kg());
}

#[test]
fn test_shells_sorted_descending() {
    // Deliberately out of order
    let shells = vec![
        shell(4471.0, 4271.0, 2800.0, "inner"),
        shell(6371.0, 6271.0, 2800.0, "outer"),
        shell(6271.0, 4471.0, 8649.0, "dense"),
    ];

    let stack = ShellStack::new(shells, Length::from_km(4271.0)).unwrap();
    let names: Vec<&str> = stack.shells().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["outer", "dense", "inner"]);
    assert_relative_eq!(stack.surface_radius().to_km(), 6371.0);
    assert_eq!(stack.innermost().name, "inner");
}

#[test]
fn test_empty_stack_rejected() {
    let result = ShellStack::new(Vec::new(), Length::zero());
    assert!(matches!(result, Err(ModelError::EmptyStack)));
}

#[test]
fn test_cavity_exceeding_innermost_shell_rejected() {
    let shells = vec![shell(6371.0, 4271.0, 5000.0, "only")];
    let result = ShellStack::new(shells, Length::from_km(5000.0));
    assert!(matches!(
        result,
        Err(ModelError::CavityExceedsInnermostShell { .. })
    ));
}

#[test]
fn test_gap_is_tolerated() {
    // 100 km gap between the shells; warned, not rejected
    let shells = vec![
        shell(6371.0, 6000.0, 2800.0, "upper"),
        shell(5900.0, 4000.0, 8649.0, "lower"),
    ];
    let stack = ShellStack::new(shells, Length::from_km(4000.0)).unwrap();
    assert_eq!(stack.shell_count(), 2);
    assert!(stack.is_non_overlapping());
}

#[test]
fn test_overlap_is_tolerated_but_reported() {
    let shells = vec![
        shell(6371.0, 5900.0, 2800.0, "upper"),
        shell(6000.0, 4000.0, 8649.0, "lower"),
    ];
    let stack = ShellStack::new(shells, Length::from_km(4000.0)).unwrap();
    assert!(!stack.is_non_overlapping());
}

#[test]
fn test_solid_stack_has_zero_cavity() {
    let shells = vec![shell(6371.0, 0.0, 5510.0, "uniform")];
    let stack = ShellStack::new(shells, Length::zero()).unwrap();
    assert_relative_eq!(stack.cavity_radius().to_m(), 0.0);
}
