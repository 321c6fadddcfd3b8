//! Fixture shapes for demos and tests.
//!
//! The estimation core never creates host geometry; these constructors exist
//! so the demo binary and the test suite have known-closed meshes to measure.

use crate::float_types::Real;
use crate::mesh::Mesh;
use nalgebra::Point3;

impl Mesh {
    /// Axis-aligned cuboid with one corner at the origin: 8 vertices,
    /// 6 quad faces wound counterclockwise from outside.
    pub fn cuboid(width: Real, length: Real, height: Real) -> Mesh {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),       // 0: origin
            Point3::new(width, 0.0, 0.0),     // 1: +X
            Point3::new(width, length, 0.0),  // 2: +X+Y
            Point3::new(0.0, length, 0.0),    // 3: +Y
            Point3::new(0.0, 0.0, height),    // 4: +Z
            Point3::new(width, 0.0, height),  // 5: +X+Z
            Point3::new(width, length, height), // 6: +X+Y+Z
            Point3::new(0.0, length, height), // 7: +Y+Z
        ];

        let faces = vec![
            vec![0, 3, 2, 1], // bottom
            vec![4, 5, 6, 7], // top
            vec![0, 1, 5, 4], // front
            vec![3, 7, 6, 2], // back
            vec![0, 4, 7, 3], // left
            vec![1, 2, 6, 5], // right
        ];

        Mesh::new(vertices, faces)
    }

    /// Cube with equal `side` extents.
    pub fn cube(side: Real) -> Mesh {
        Mesh::cuboid(side, side, side)
    }
}
