use approx::assert_relative_eq;
use units::Length;

use crate::constants::PhysicalConstants;
use crate::export::{ExportDocument, FRAMEWORK_VERSION};
use crate::gravity::RadialGravity;
use crate::model::{hollow_earth_stack, HollowEarthParams, HollowModel};

fn exported_model() -> (HollowModel, ExportDocument) {
    let constants = PhysicalConstants::earth();
    let stack = hollow_earth_stack(&HollowEarthParams::default(), &constants).unwrap();
    let model = HollowModel::new(stack, constants).with_central_sun(9.8, Length::from_km(150.0));
    let doc = ExportDocument::from_model(&model);
    (model, doc)
}

#[test]
fn test_document_captures_configuration() {
    let (model, doc) = exported_model();

    assert_eq!(doc.metadata.framework_version, FRAMEWORK_VERSION);
    assert_relative_eq!(doc.metadata.earth_mass, 5.9722e24);
    assert_relative_eq!(doc.metadata.earth_radius, 6.371e6);

    assert_relative_eq!(
        doc.configuration.central_hollow_radius,
        model.cavity_radius().to_m()
    );
    assert_relative_eq!(doc.configuration.total_mass, model.total_mass().to_kg());
    assert_relative_eq!(doc.configuration.surface_gravity, model.surface_gravity());
    assert_eq!(doc.configuration.shells.len(), 3);

    let sun = doc.configuration.central_sun.as_ref().unwrap();
    assert_relative_eq!(sun.gravity_contribution_interior, 9.8, max_relative = 1e-12);
    assert_eq!(sun.gravity_contribution_surface, 0.0);
}

#[test]
fn test_json_round_trip_preserves_document() {
    let (_, doc) = exported_model();

    let json = doc.to_json().unwrap();
    let parsed = ExportDocument::from_json(&json).unwrap();

    assert_eq!(doc, parsed);
}

#[test]
fn test_file_round_trip_reproduces_physics() {
    let (model, doc) = exported_model();

    let path = std::env::temp_dir().join(format!(
        "hollow_export_{}_{}.json",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    doc.write_to(&path).unwrap();
    let restored = ExportDocument::read_from(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(doc, restored);

    // Rebuilding the stack reproduces mass and gravity exactly
    let stack = restored.configuration.to_stack().unwrap();
    assert_eq!(stack.total_mass().to_kg(), model.total_mass().to_kg());

    let constants = *model.constants();
    let gravity = RadialGravity::new(constants);
    assert_eq!(
        gravity.surface_gravity(&stack),
        gravity.surface_gravity(model.stack())
    );
    for (restored_shell, original_shell) in stack.shells().iter().zip(model.stack().shells()) {
        assert_eq!(restored_shell, original_shell);
    }
}

#[test]
fn test_schema_field_names_are_stable() {
    let (_, doc) = exported_model();
    let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();

    // External tooling reads these paths; renames are breaking changes
    assert!(value.pointer("/metadata/framework_version").is_some());
    assert!(value.pointer("/metadata/creation_timestamp").is_some());
    assert!(value.pointer("/configuration/central_hollow_radius").is_some());
    assert!(value.pointer("/configuration/central_sun/mass").is_some());
    assert!(value.pointer("/configuration/shells/0/outer_radius").is_some());
    assert!(value.pointer("/configuration/shells/0/material_type").is_some());
    assert!(value.pointer("/configuration/shells/0/volume").is_some());
    assert!(value.pointer("/validation/mass_conservation").is_some());
    assert!(value.pointer("/validation/substantial_dense_shell").is_some());
}
