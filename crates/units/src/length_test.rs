use approx::assert_relative_eq;

use crate::length::{Length, EARTH_RADIUS_M};

#[test]
fn test_meter_round_trip() {
    let l = Length::from_m(6.371e6);
    assert_relative_eq!(l.to_m(), 6.371e6);
    assert_relative_eq!(l.to_km(), 6371.0);
}

#[test]
fn test_km_conversion() {
    let l = Length::from_km(100.0);
    assert_relative_eq!(l.to_m(), 100e3);
}

#[test]
fn test_earth_radii() {
    let surface = Length::from_earth_radii(1.0);
    assert_relative_eq!(surface.to_m(), EARTH_RADIUS_M);
    assert_relative_eq!(Length::from_m(EARTH_RADIUS_M).to_earth_radii(), 1.0);
}

#[test]
fn test_arithmetic() {
    let outer = Length::from_km(6371.0);
    let thickness = Length::from_km(100.0);
    let inner = outer - thickness;

    assert_relative_eq!(inner.to_km(), 6271.0);
    assert_relative_eq!((inner + thickness).to_km(), 6371.0);
    assert_relative_eq!((thickness * 2.0).to_km(), 200.0);
    assert_relative_eq!(outer / outer, 1.0);
}

#[test]
fn test_ordering() {
    assert!(Length::from_km(1.0) < Length::from_km(2.0));
    assert_eq!(Length::zero().to_m(), 0.0);
}
