//!
//! Demonstrate and export hollow shell gravity models.
//!
//! Usage: `hollow-earth [--quick] [--waveguide] [--export DIR]`

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use mass_solver::{MassSearchOutcome, MassTargetOptimizer};
use shell_model::{
    hollow_earth_stack, standard_earth_stack, AdmissibilityReport, ExportDocument,
    HollowEarthParams, HollowModel, ModelComparison, PhysicalConstants, ProportionalGrowth,
    RadialGravity, ShellStack,
};
use units::{Length, Mass, VolumeDensity, EARTH_MASS_KG};
use waveguide::{FiberOpticAnalogy, SeismicVelocities, WaveguideReport};

#[derive(Parser, Debug)]
#[command(name = "hollow-earth")]
#[command(about = "Shell-theorem gravity models with a central cavity")]
struct Args {
    /// Run the quick demonstration only
    #[arg(long)]
    quick: bool,

    /// Focus on the seismic waveguide analysis
    #[arg(long)]
    waveguide: bool,

    /// Export configurations and analysis to a directory
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() {
    init_logging();

    let args = Args::parse();
    let constants = PhysicalConstants::earth();

    if args.quick {
        quick_demo(&constants);
    } else if args.waveguide {
        waveguide_focus(&constants);
    } else if let Some(dir) = &args.export {
        if let Err(err) = export_results(dir, &constants) {
            error!("Export failed: {err}");
            process::exit(1);
        }
        quick_demo(&constants);
    } else {
        full_demo(&constants);
    }
}

/// Mass-conservation search over the dense shell density and the inner
/// crust thickness.
fn mass_optimized(constants: &PhysicalConstants) -> MassSearchOutcome {
    let fallback = match hollow_earth_stack(&HollowEarthParams::default(), constants) {
        Ok(stack) => stack,
        Err(err) => {
            error!("Default hollow configuration is invalid: {err}");
            process::exit(1);
        }
    };

    let builder = |density: VolumeDensity, thickness: Length| {
        hollow_earth_stack(
            &HollowEarthParams {
                dense_shell_density: density,
                inner_crust_thickness: thickness,
                ..HollowEarthParams::default()
            },
            constants,
        )
    };

    MassTargetOptimizer::new(Mass::from_kg(EARTH_MASS_KG)).optimize(fallback, builder)
}

/// Mass-optimized configuration with a central sun restoring interior
/// gravity.
fn gravity_balanced(constants: &PhysicalConstants) -> HollowModel {
    let outcome = mass_optimized(constants);
    HollowModel::new(outcome.stack, *constants).with_central_sun(9.8, Length::from_km(150.0))
}

fn shell_thickness(stack: &ShellStack) -> Length {
    stack.surface_radius() - stack.cavity_radius()
}

fn quick_demo(constants: &PhysicalConstants) {
    println!("\nQUICK DEMONSTRATION");
    println!("{}", "=".repeat(50));

    info!("Searching dense shell parameters for mass conservation");
    let outcome = mass_optimized(constants);
    let model = HollowModel::new(outcome.stack, *constants);

    println!("\nKey results:");
    println!("   Mass conservation error: {:.4}%", model.mass_error() * 100.0);
    println!(
        "   Hollow diameter: {:.0} km",
        model.cavity_radius().to_km() * 2.0
    );
    println!("   Surface gravity: {:.3} m/s²", model.surface_gravity());

    let analogy = FiberOpticAnalogy::analyze(&SeismicVelocities::default());
    println!("\nFiber optic analogy:");
    println!(
        "   Critical angle (fiber): {:.1}°",
        analogy.fiber_critical_angle_deg
    );
    println!(
        "   Critical angle (crust to air): {:.1}°",
        analogy.seismic_critical_angle_deg
    );
    println!("   Mechanism: total internal reflection in both systems");
}

fn waveguide_focus(constants: &PhysicalConstants) {
    println!("\nSEISMIC WAVEGUIDE ANALYSIS");
    println!("{}", "=".repeat(50));

    let stack = match hollow_earth_stack(&HollowEarthParams::default(), constants) {
        Ok(stack) => stack,
        Err(err) => {
            error!("Default hollow configuration is invalid: {err}");
            process::exit(1);
        }
    };

    let velocities = SeismicVelocities::default();
    let report = WaveguideReport::generate(velocities, stack.cavity_radius(), shell_thickness(&stack));

    println!("\nCritical angles (degrees from the normal):");
    for (interface, angle) in &report.critical_angles_deg {
        println!("   {interface}: {angle:.2}°");
    }

    println!("\nFiber comparison:");
    let analogy = &report.fiber_analogy;
    println!(
        "   Index step (fiber): {:.2}%   velocity step (crust to air): {:.0}%",
        analogy.fiber_index_difference_percent, analogy.seismic_velocity_difference_percent
    );
    println!(
        "   Critical angle ratio: {:.4}",
        analogy.critical_angle_ratio
    );

    println!("\nCavity mode estimate:");
    println!("   V-parameter: {:.0}", report.modes.v_parameter);
    println!("   Propagating modes: {}", report.modes.mode_count);
    println!(
        "   Fundamental resonance: {:.3} mHz",
        report.modes.fundamental_frequency_hz * 1e3
    );

    println!("\nTestable predictions:");
    for (i, prediction) in report.predictions.iter().enumerate() {
        println!("   {:2}. {prediction}", i + 1);
    }

    println!("\nPredictions against observations:");
    for phenomenon in &report.phenomena {
        println!("   {}:", phenomenon.name);
        println!("      Observed:  {}", phenomenon.observed);
        println!("      Predicted: {}", phenomenon.predicted);
        println!("      Match:     {}", phenomenon.assessment);
    }
}

fn export_results(dir: &Path, constants: &PhysicalConstants) -> Result<(), Box<dyn std::error::Error>> {
    println!("\nEXPORTING RESULTS to {}", dir.display());
    println!("{}", "=".repeat(50));

    fs::create_dir_all(dir)?;

    let standard = HollowModel::new(standard_earth_stack(constants)?, *constants);
    let basic = HollowModel::new(
        hollow_earth_stack(&HollowEarthParams::default(), constants)?,
        *constants,
    );
    let optimized = HollowModel::new(mass_optimized(constants).stack, *constants);
    let balanced = gravity_balanced(constants);

    let configurations = [
        ("standard_earth", &standard),
        ("basic_hollow", &basic),
        ("mass_optimized", &optimized),
        ("gravity_balanced", &balanced),
    ];

    for (name, model) in configurations {
        let path = dir.join(format!("{name}_configuration.json"));
        ExportDocument::from_model(model).write_to(&path)?;
        println!("   Exported {name} to {}", path.display());
    }

    let report = WaveguideReport::generate(
        SeismicVelocities::default(),
        balanced.cavity_radius(),
        shell_thickness(balanced.stack()),
    );
    let path = dir.join("waveguide_analysis.json");
    fs::write(&path, serde_json::to_string_pretty(&report)?)?;
    println!("   Exported waveguide analysis to {}", path.display());

    println!("\nExport complete.");
    Ok(())
}

fn full_demo(constants: &PhysicalConstants) {
    println!("\nFULL FRAMEWORK DEMONSTRATION");
    println!("{}", "=".repeat(70));

    println!("\n1. Standard solid reference");
    let standard = match standard_earth_stack(constants) {
        Ok(stack) => HollowModel::new(stack, *constants),
        Err(err) => {
            error!("Standard configuration is invalid: {err}");
            process::exit(1);
        }
    };
    println!("   Total mass: {:.3e} kg", standard.total_mass().to_kg());
    println!("   Surface gravity: {:.3} m/s²", standard.surface_gravity());

    println!("\n2. Basic hollow configuration, no central sun");
    let outcome = mass_optimized(constants);
    let hollow = HollowModel::new(outcome.stack.clone(), *constants);
    println!("   Total mass: {:.3e} kg", hollow.total_mass().to_kg());
    println!("   Mass conservation error: {:.4}%", hollow.mass_error() * 100.0);
    println!(
        "   Hollow diameter: {:.0} km",
        hollow.cavity_radius().to_km() * 2.0
    );
    println!(
        "   Interior gravity without a sun: {:.6} m/s²",
        hollow.interior_gravity()
    );

    println!("\n3. Hollow configuration with a compact central sun");
    let balanced = hollow.clone().with_central_sun(9.8, Length::from_km(150.0));
    println!("   Interior gravity: {:.3} m/s²", balanced.interior_gravity());
    println!("   Surface gravity: {:.3} m/s²", balanced.surface_gravity());
    if let Some(sun) = balanced.central_sun() {
        println!("   Sun mass: {:.3e} kg", sun.mass.to_kg());
        println!("   Sun density: {:.3e} kg/m³", sun.density.to_kg_per_m3());
        println!(
            "   Clearance to cavity surface: {:.0} km",
            sun.distance_to_surface.to_km()
        );
    }

    println!("\n4. Gravity profile through the shell");
    let gravity = RadialGravity::new(*constants);
    for sample in gravity.profile(balanced.stack(), 6) {
        println!(
            "   r = {:7.0} km   g = {:6.3} m/s²",
            sample.radius.to_km(),
            sample.gravity
        );
    }

    println!("\n5. Admissibility checklist");
    let report = AdmissibilityReport::assess(&balanced);
    for (name, passed) in report.checks() {
        println!("   [{}] {}", if passed { "pass" } else { "FAIL" }, name);
    }
    println!(
        "   Overall: {}",
        if report.passes_all() { "admissible" } else { "not admissible" }
    );

    println!("\n6. Comparison with the solid reference");
    let comparison = ModelComparison::between(&standard, &balanced);
    println!(
        "   Shells: {} vs {}",
        comparison.shell_count_a, comparison.shell_count_b
    );
    println!("   Mass ratio: {:.3}", comparison.mass_ratio);
    println!(
        "   Hollow diameter: {:.0} km vs {:.0} km",
        comparison.hollow_diameter_a.to_km(),
        comparison.hollow_diameter_b.to_km()
    );

    println!("\n7. Proportional growth projection");
    let growth = ProportionalGrowth::default();
    for years in [1e7, 1e8, 1e9] {
        let snapshot = growth.expansion(years);
        println!(
            "   {:>5.0} Myr: surface {:.0} km, cavity {:.0} km, light ratio {:.4} ({})",
            years / 1e6,
            snapshot.surface_radius.to_km(),
            snapshot.cavity_radius.to_km(),
            snapshot.light_intensity_ratio,
            if snapshot.light_maintained { "maintained" } else { "drifting" }
        );
    }

    println!("\n8. Waveguide summary");
    let report = WaveguideReport::generate(
        SeismicVelocities::default(),
        balanced.cavity_radius(),
        shell_thickness(balanced.stack()),
    );
    println!(
        "   Crust-to-air critical angle: {:.2}°",
        report.fiber_analogy.seismic_critical_angle_deg
    );
    println!("   Propagating modes: {}", report.modes.mode_count);
    println!(
        "   Fundamental resonance: {:.3} mHz",
        report.modes.fundamental_frequency_hz * 1e3
    );
}
