//! Mass and bounding-box estimation for closed polygonal meshes.
//!
//! Given a snapshot of a mesh object — vertex positions in object-local
//! space, polygonal faces as vertex-index lists, and a 4×4 world transform —
//! this crate computes the enclosed volume by signed-tetrahedron summation,
//! multiplies it by a material density (g/cm³) to obtain mass in grams, and
//! reports axis-aligned bounding-box dimensions. A selection of objects can
//! be aggregated in one call, with non-mesh members skipped.
//!
//! The crate is host-agnostic: it never reads ambient scene state, never
//! mutates its inputs, and returns plain unrounded numbers for a caller's
//! presentation layer to format.
//!
//! # Features
//! - **f64**: use f64 as Real (default)
//! - **f32**: use f32 as Real, this conflicts with f64
//!
//! # Preconditions
//! Volume is only physically meaningful for closed, consistently
//! outward-wound surfaces. The crate does not verify this; open or
//! inconsistently wound meshes yield degenerate (possibly negative) volumes
//! which are passed through unmodified.

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod density;
pub mod errors;
pub mod float_types;
pub mod mass;
pub mod mesh;
pub mod scene;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use density::{Density, Material};
pub use errors::EstimateError;
pub use mass::{MassEstimate, SelectionMass, active_object_mass, object_mass, selection_mass};
pub use mesh::Mesh;
pub use scene::{Dimensions, MeshObject, SceneObject};
