use meshweight::Mesh;
use meshweight::float_types::{Real, tolerance};
use nalgebra::{Matrix4, Point3, Rotation3, Translation3, Vector3};

#[test]
fn unit_cube_volume_is_one() {
    let cube = Mesh::cube(1.0);
    assert!(
        (cube.signed_volume() - 1.0).abs() < tolerance(),
        "unit cube should enclose exactly one cubic unit, got {}",
        cube.signed_volume()
    );
}

#[test]
fn volume_is_rigid_invariant() {
    // Volume depends only on shape, not placement: translate far from the
    // origin (moving the tetrahedron reference point relative to the mesh)
    // and rotate arbitrarily.
    let cube = Mesh::cube(1.0);
    let placement = Translation3::new(17.0, -4.5, 230.0).to_homogeneous()
        * Rotation3::from_axis_angle(&Vector3::y_axis(), 1.234).to_homogeneous()
        * Rotation3::from_axis_angle(&Vector3::x_axis(), -0.41).to_homogeneous();

    let moved = cube.transform(&placement);
    assert!(
        (moved.signed_volume() - 1.0).abs() < 1e-9,
        "rigid motion changed the volume: {}",
        moved.signed_volume()
    );
}

#[test]
fn uniform_scale_cubes_the_volume() {
    let mesh = Mesh::cuboid(1.0, 2.0, 0.5);
    let base = mesh.signed_volume();

    for s in [0.5 as Real, 2.0, 3.0, 10.0] {
        let scaled = mesh.transform(&Matrix4::new_scaling(s));
        let expected = base * s * s * s;
        assert!(
            (scaled.signed_volume() - expected).abs() < 1e-6 * expected.abs().max(1.0),
            "scale {} gave volume {}, expected {}",
            s,
            scaled.signed_volume(),
            expected
        );
    }
}

#[test]
fn inverted_winding_negates_volume() {
    // An inside-out surface must pass through as a negative value, not be
    // clamped or folded to its magnitude.
    let mut cube = Mesh::cube(1.0);
    for face in &mut cube.faces {
        face.reverse();
    }
    assert!(
        (cube.signed_volume() + 1.0).abs() < tolerance(),
        "inverted cube should report -1, got {}",
        cube.signed_volume()
    );
}

#[test]
fn open_surface_passes_through_unmodified() {
    // Remove the top face: for a corner-at-origin unit cube the remaining
    // five faces sum to 2/3 against the origin reference. The point is that
    // the degenerate figure is reported as-is.
    let mut cube = Mesh::cube(1.0);
    cube.faces.remove(1);

    let volume = cube.signed_volume();
    assert!((volume - 2.0 / 3.0).abs() < 1e-9, "open box gave {}", volume);
    assert!((volume - 1.0).abs() > 0.1);
}

#[test]
fn degenerate_faces_contribute_nothing() {
    let mut cube = Mesh::cube(1.0);
    cube.faces.push(vec![0, 1]); // too short to triangulate
    cube.faces.push(vec![0, 1, 99]); // stale index from a host edit

    assert!(
        (cube.signed_volume() - 1.0).abs() < tolerance(),
        "degenerate faces must not contribute or panic"
    );
}

#[test]
fn empty_mesh_has_zero_volume() {
    let empty = Mesh::new(Vec::new(), Vec::new());
    assert_eq!(empty.signed_volume(), 0.0);
}

#[test]
fn transform_does_not_mutate_source() {
    let cube = Mesh::cube(1.0);
    let before = cube.vertices.clone();
    let _ = cube.transform(&Translation3::new(5.0, 5.0, 5.0).to_homogeneous());
    assert_eq!(cube.vertices, before);
    assert_eq!(
        cube.vertices[0],
        Point3::new(0.0, 0.0, 0.0),
        "source snapshot must stay untouched"
    );
}
