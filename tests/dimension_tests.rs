use meshweight::{EstimateError, Mesh, MeshObject};
use nalgebra::{Matrix4, Point3, Rotation3, Translation3, Vector3};

#[test]
fn unit_cube_dimensions_under_identity() {
    let cube = MeshObject::untransformed("cube", Mesh::cube(1.0));
    let dims = cube.dimensions().unwrap();

    assert!((dims.width - 1.0).abs() < 1e-12);
    assert!((dims.length - 1.0).abs() < 1e-12);
    assert!((dims.height - 1.0).abs() < 1e-12);
}

#[test]
fn single_vertex_has_zero_extent() {
    let point = Mesh::new(vec![Point3::new(0.3, -1.2, 4.0)], Vec::new());
    let dims = MeshObject::untransformed("point", point).dimensions().unwrap();

    assert_eq!(dims.width, 0.0);
    assert_eq!(dims.length, 0.0);
    assert_eq!(dims.height, 0.0);
}

#[test]
fn empty_vertex_set_is_an_error() {
    let empty = MeshObject::untransformed("empty", Mesh::new(Vec::new(), Vec::new()));
    assert_eq!(empty.dimensions(), Err(EstimateError::NoVertices));
}

#[test]
fn translation_preserves_dimensions() {
    let bar = Mesh::cuboid(0.2, 0.1, 0.3);
    let moved = MeshObject::new(
        "bar",
        bar,
        Translation3::new(10.0, -2.0, 0.5).to_homogeneous(),
    );
    let dims = moved.dimensions().unwrap();

    assert!((dims.width - 0.2).abs() < 1e-12);
    assert!((dims.length - 0.1).abs() < 1e-12);
    assert!((dims.height - 0.3).abs() < 1e-12);
}

#[test]
fn quarter_turn_swaps_width_and_length() {
    let bar = Mesh::cuboid(0.2, 0.1, 0.3);
    let turned = MeshObject::new(
        "bar",
        bar,
        Rotation3::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_2)
            .to_homogeneous(),
    );
    let dims = turned.dimensions().unwrap();

    assert!((dims.width - 0.1).abs() < 1e-9);
    assert!((dims.length - 0.2).abs() < 1e-9);
    assert!((dims.height - 0.3).abs() < 1e-9);
}

#[test]
fn scaling_scales_dimensions() {
    let cube = MeshObject::new("cube", Mesh::cube(1.0), Matrix4::new_scaling(2.5));
    let dims = cube.dimensions().unwrap();

    assert!((dims.width - 2.5).abs() < 1e-12);
    assert!((dims.length - 2.5).abs() < 1e-12);
    assert!((dims.height - 2.5).abs() < 1e-12);
}

#[test]
fn millimeter_conversion_is_explicit_and_scaled() {
    // World units are meters; millimeters only exist through the explicit
    // conversion, never by relabeling raw figures.
    let cube = MeshObject::untransformed("cube", Mesh::cube(0.1));
    let mm = cube.dimensions().unwrap().to_millimeters();

    assert!((mm.width - 100.0).abs() < 1e-9);
    assert!((mm.length - 100.0).abs() < 1e-9);
    assert!((mm.height - 100.0).abs() < 1e-9);
}
