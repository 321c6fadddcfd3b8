//! Estimation errors

use crate::float_types::Real;

/// All the possible failures an estimate can report.
///
/// Every failure is local and recoverable: the caller always gets a typed
/// classification it can surface as an advisory message, never a panic.
/// Degenerate geometry (open or inconsistently wound surfaces) is *not*
/// represented here; such meshes produce implausible volumes so that
/// malformed input stays visible to the user as an implausible weight.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    /// A batch estimate was requested over an empty selection.
    #[error("(EmptySelection) no objects selected")]
    EmptySelection,
    /// The active object is absent or is not a mesh.
    #[error("(NoEligibleObject) no active mesh object found")]
    NoEligibleObject,
    /// The mesh has no vertices, so min/max extents are undefined.
    #[error("(NoVertices) mesh has an empty vertex set")]
    NoVertices,
    /// A non-sentinel density that is zero, negative, or non-finite.
    #[error("(InvalidDensity) density must be a positive finite value, got {0} g/cm³")]
    InvalidDensity(Real),
}
