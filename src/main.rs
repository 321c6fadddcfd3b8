// main.rs
//
// Minimal demonstration of each estimation entry point: single-object mass,
// active-object mass, selection aggregation, and bounding-box dimensions.
// Plays the role of the presentation layer: formats to two decimals and
// turns typed failures into advisory messages.

use meshweight::{
    Density, EstimateError, Material, Mesh, MeshObject, SceneObject, active_object_mass,
    object_mass, selection_mass,
};
use nalgebra::{Rotation3, Translation3, Vector3};

fn main() {
    tracing_subscriber::fmt().init();

    // A 10 cm gold cube, placed away from the origin (placement must not
    // change its mass).
    let placement = (Translation3::new(0.4, -0.2, 1.0).to_homogeneous())
        * Rotation3::from_axis_angle(&Vector3::z_axis(), 0.7).to_homogeneous();
    let cube = MeshObject::new("gold_cube", Mesh::cube(0.1), placement);

    match object_mass(&cube, &Density::Preset(Material::Gold)) {
        Ok(estimate) => println!(
            "Weight of {} ({}): {:.2} g",
            cube.name,
            Material::Gold.name(),
            estimate.mass_grams
        ),
        Err(error) => println!("{error}"),
    }

    match cube.dimensions() {
        Ok(dimensions) => {
            let mm = dimensions.to_millimeters();
            println!(
                "Width: {:.2} mm  Length: {:.2} mm  Height: {:.2} mm",
                mm.width, mm.length, mm.height
            );
        },
        Err(error) => println!("{error}"),
    }

    // A selection mixing meshes and a camera; the camera is skipped.
    let selection = vec![
        SceneObject::from(cube),
        SceneObject::from(MeshObject::untransformed(
            "silver_bar",
            Mesh::cuboid(0.25, 0.04, 0.02),
        )),
        SceneObject::Other {
            name: "camera".into(),
            kind: "CAMERA".into(),
        },
    ];

    // A host would hand over (preset code, custom value); code 0.0 means
    // "use the custom value".
    let density = Density::from_host(0.0, 10.49);
    match selection_mass(&selection, &density) {
        Ok(totals) => println!(
            "Total weight: {:.2} g ({} measured, {} skipped)",
            totals.total_grams, totals.measured, totals.skipped
        ),
        Err(error) => println!("{error}"),
    }

    // The advisory path: nothing selected.
    match selection_mass(&[], &density) {
        Ok(totals) => println!("Total weight: {:.2} g", totals.total_grams),
        Err(EstimateError::EmptySelection) => println!("Total weight: 0.00 g (no objects selected)"),
        Err(error) => println!("{error}"),
    }

    // The active-object path with nothing eligible.
    if let Err(error) = active_object_mass(None, &density) {
        println!("{error}");
    }
}
