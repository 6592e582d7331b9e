use approx::assert_relative_eq;

use crate::volume_density::VolumeDensity;

#[test]
fn test_si_round_trip() {
    let d = VolumeDensity::from_kg_per_m3(5510.0);
    assert_relative_eq!(d.to_kg_per_m3(), 5510.0);
    assert_relative_eq!(d.to_grams_per_cm3(), 5.51);
}

#[test]
fn test_cgs_conversion() {
    let d = VolumeDensity::from_grams_per_cm3(2.8);
    assert_relative_eq!(d.to_kg_per_m3(), 2800.0);
}

#[test]
fn test_material_constants() {
    assert_relative_eq!(VolumeDensity::water().to_kg_per_m3(), 1000.0);
    assert_relative_eq!(VolumeDensity::crust().to_kg_per_m3(), 2800.0);
    assert_relative_eq!(VolumeDensity::mantle().to_kg_per_m3(), 4500.0);
    assert_relative_eq!(VolumeDensity::metallic_core().to_kg_per_m3(), 11000.0);

    assert!(VolumeDensity::metallic_core() > VolumeDensity::mantle());
}

#[test]
fn test_arithmetic() {
    let crust = VolumeDensity::crust();
    assert_relative_eq!((crust * 2.0).to_kg_per_m3(), 5600.0);
    assert_relative_eq!((2.0 * crust).to_kg_per_m3(), 5600.0);
}
