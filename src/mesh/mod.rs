//! `Mesh` snapshot type: vertex positions plus indexed polygonal faces.
//!
//! A `Mesh` is a read-only copy of host-owned geometry taken once per
//! invocation. Operations return new values; host-visible state is never
//! mutated.

use crate::float_types::{Real, parry3d::bounding_volume::Aabb};
use nalgebra::{Matrix4, Point3, partial_max, partial_min};
use std::sync::OnceLock;

pub mod shapes;

#[derive(Clone, Debug)]
pub struct Mesh {
    /// Vertex positions, in whatever frame the snapshot was taken in.
    pub vertices: Vec<Point3<Real>>,

    /// Polygonal faces as ordered vertex-index lists, wound counterclockwise
    /// when viewed from outside the surface.
    pub faces: Vec<Vec<usize>>,

    /// Lazily calculated AABB that spans `vertices`.
    pub bounding_box: OnceLock<Aabb>,
}

impl Mesh {
    /// Build a mesh from a vertex table and indexed faces.
    pub fn new(vertices: Vec<Point3<Real>>, faces: Vec<Vec<usize>>) -> Self {
        Mesh {
            vertices,
            faces,
            bounding_box: OnceLock::new(),
        }
    }

    /// Apply an arbitrary 3D transform (as a 4x4 matrix) to a copy of the mesh.
    pub fn transform(&self, mat: &Matrix4<Real>) -> Mesh {
        let mut mesh = self.clone();

        for pos in &mut mesh.vertices {
            let homog_pos = mat * pos.to_homogeneous();
            // w stays 1 for the affine placements hosts hand us
            if let Some(transformed) = Point3::from_homogeneous(homog_pos) {
                *pos = transformed;
            }
        }

        // invalidate the old cached bounding box
        mesh.bounding_box = OnceLock::new();

        mesh
    }

    /// Returns an [`Aabb`] indicating the 3D bounds of all `vertices`.
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            // Track overall min/max in x, y, z among all vertices
            let mut min_x = Real::MAX;
            let mut min_y = Real::MAX;
            let mut min_z = Real::MAX;
            let mut max_x = -Real::MAX;
            let mut max_y = -Real::MAX;
            let mut max_z = -Real::MAX;

            for v in &self.vertices {
                min_x = *partial_min(&min_x, &v.x).unwrap_or(&min_x);
                min_y = *partial_min(&min_y, &v.y).unwrap_or(&min_y);
                min_z = *partial_min(&min_z, &v.z).unwrap_or(&min_z);

                max_x = *partial_max(&max_x, &v.x).unwrap_or(&max_x);
                max_y = *partial_max(&max_y, &v.y).unwrap_or(&max_y);
                max_z = *partial_max(&max_z, &v.z).unwrap_or(&max_z);
            }

            // If still uninitialized (no vertices), return a trivial AABB at origin
            if min_x > max_x {
                return Aabb::new(Point3::origin(), Point3::origin());
            }

            let mins = Point3::new(min_x, min_y, min_z);
            let maxs = Point3::new(max_x, max_y, max_z);
            Aabb::new(mins, maxs)
        })
    }

    /// Fan-triangulate every face into vertex-index triples.
    ///
    /// Faces with fewer than three vertices, or with indices outside the
    /// vertex table, produce no triangles; the snapshot is trusted but a
    /// stale face list must not bring the caller down.
    pub fn triangulate(&self) -> Vec<[usize; 3]> {
        let mut triangles = Vec::new();
        for face in &self.faces {
            if face.len() < 3 || face.iter().any(|&idx| idx >= self.vertices.len()) {
                continue;
            }
            for window in 1..face.len() - 1 {
                triangles.push([face[0], face[window], face[window + 1]]);
            }
        }
        triangles
    }

    /// Signed volume enclosed by the mesh, in cubed linear units of the
    /// frame the vertices are expressed in.
    ///
    /// Each face triangle contributes the signed volume of the tetrahedron
    /// it spans with the origin (a scalar triple product over six). Summed
    /// over a closed, consistently outward-wound surface the contributions
    /// telescope to the enclosed volume, independent of the reference point.
    ///
    /// The closed-and-wound precondition is not checked. Open or
    /// inconsistently wound surfaces yield degenerate values, negative ones
    /// included, which are returned unmodified rather than clamped so that
    /// malformed input shows up as an implausible weight.
    pub fn signed_volume(&self) -> Real {
        let mut total_volume: Real = 0.0;

        for [i0, i1, i2] in self.triangulate() {
            let v0 = self.vertices[i0].coords;
            let v1 = self.vertices[i1].coords;
            let v2 = self.vertices[i2].coords;

            total_volume += v0.dot(&v1.cross(&v2)) / 6.0;
        }

        total_volume
    }
}
