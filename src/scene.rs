//! Selection members as the host hands them over.
//!
//! The host drives estimation with an explicit collection of objects; no
//! ambient "current selection" is read here. A [`MeshObject`] pairs a local
//! -space [`Mesh`] snapshot with the object's world placement; anything else
//! in a selection (cameras, lights, empties) travels as
//! [`SceneObject::Other`] and is skipped by the aggregation paths.

use crate::errors::EstimateError;
use crate::float_types::{M_TO_MM, Real};
use crate::mesh::Mesh;
use nalgebra::Matrix4;

/// A mesh object: named geometry snapshot plus its world transform.
#[derive(Clone, Debug)]
pub struct MeshObject {
    pub name: String,
    pub mesh: Mesh,
    pub world_transform: Matrix4<Real>,
}

impl MeshObject {
    pub fn new(name: impl Into<String>, mesh: Mesh, world_transform: Matrix4<Real>) -> Self {
        MeshObject {
            name: name.into(),
            mesh,
            world_transform,
        }
    }

    /// Convenience for objects already expressed in world space.
    pub fn untransformed(name: impl Into<String>, mesh: Mesh) -> Self {
        Self::new(name, mesh, Matrix4::identity())
    }

    /// The mesh with the world transform applied, exactly once.
    pub fn world_mesh(&self) -> Mesh {
        self.mesh.transform(&self.world_transform)
    }

    /// Signed enclosed volume in world space, in cubed world units
    /// (m³ for a metric host).
    pub fn world_volume(&self) -> Real {
        self.world_mesh().signed_volume()
    }

    /// Axis-aligned bounding-box dimensions in world space, `max − min`
    /// per axis, in world units.
    ///
    /// ## Errors
    /// [`EstimateError::NoVertices`] if the vertex set is empty; the
    /// min/max accumulators would otherwise stay at their sentinels.
    pub fn dimensions(&self) -> Result<Dimensions, EstimateError> {
        if self.mesh.vertices.is_empty() {
            return Err(EstimateError::NoVertices);
        }

        let extents = self.world_mesh().bounding_box().extents();
        Ok(Dimensions {
            width: extents.x,
            length: extents.y,
            height: extents.z,
        })
    }
}

/// Axis-aligned extents of an object, in world units (meters for a
/// metric host) unless converted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: Real,
    pub length: Real,
    pub height: Real,
}

impl Dimensions {
    /// Explicit meters-to-millimeters conversion for display.
    ///
    /// Dimensions are computed in world units and stay that way until the
    /// caller asks; a number is never labeled "mm" without this scale.
    pub fn to_millimeters(&self) -> Dimensions {
        Dimensions {
            width: self.width * M_TO_MM,
            length: self.length * M_TO_MM,
            height: self.height * M_TO_MM,
        }
    }
}

/// One member of a host selection.
#[derive(Clone, Debug)]
pub enum SceneObject {
    Mesh(MeshObject),
    /// A non-mesh member (camera, light, empty, …), carried so batch
    /// estimation can skip and count it.
    Other { name: String, kind: String },
}

impl SceneObject {
    pub fn name(&self) -> &str {
        match self {
            SceneObject::Mesh(object) => &object.name,
            SceneObject::Other { name, .. } => name,
        }
    }

    pub const fn as_mesh(&self) -> Option<&MeshObject> {
        match self {
            SceneObject::Mesh(object) => Some(object),
            SceneObject::Other { .. } => None,
        }
    }
}

impl From<MeshObject> for SceneObject {
    fn from(object: MeshObject) -> Self {
        SceneObject::Mesh(object)
    }
}
