//! Mass estimation: volume × density, per object and over a selection.

use crate::density::Density;
use crate::errors::EstimateError;
use crate::float_types::{M3_TO_CM3, Real};
use crate::scene::{MeshObject, SceneObject};
use tracing::{debug, info, warn};

/// One object's estimate: the resolved density, the world-space volume it
/// was multiplied with, and the resulting mass. All figures unrounded;
/// formatting belongs to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassEstimate {
    /// Density used, g/cm³.
    pub density_g_cm3: Real,
    /// Enclosed volume, cm³. Signed: an open or inside-out mesh shows up
    /// here rather than being masked.
    pub volume_cm3: Real,
    /// `density_g_cm3 * volume_cm3`, grams.
    pub mass_grams: Real,
}

/// Estimate the mass of a single mesh object.
///
/// ## Errors
/// [`EstimateError::InvalidDensity`] if the density resolves to a
/// non-positive or non-finite value.
pub fn object_mass(
    object: &MeshObject,
    density: &Density,
) -> Result<MassEstimate, EstimateError> {
    let density_g_cm3 = density.resolve()?;
    let volume_cm3 = object.world_volume() * M3_TO_CM3;
    let mass_grams = density_g_cm3 * volume_cm3;

    info!(
        object = %object.name,
        density_g_cm3,
        volume_cm3,
        mass_grams,
        "estimated object mass"
    );

    Ok(MassEstimate {
        density_g_cm3,
        volume_cm3,
        mass_grams,
    })
}

/// Estimate the mass of the host's active object, if it is a mesh.
///
/// ## Errors
/// [`EstimateError::NoEligibleObject`] when no object is active or the
/// active object is not a mesh. This is a defined failure the caller can
/// surface; it never yields an undefined mass.
pub fn active_object_mass(
    active: Option<&SceneObject>,
    density: &Density,
) -> Result<MassEstimate, EstimateError> {
    match active.and_then(SceneObject::as_mesh) {
        Some(object) => object_mass(object, density),
        None => {
            warn!("no active mesh object found");
            Err(EstimateError::NoEligibleObject)
        },
    }
}

/// Aggregate over a selection: per-member masses summed, non-mesh members
/// counted but never erroring.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionMass {
    /// Sum of member masses, grams.
    pub total_grams: Real,
    /// Mesh members that contributed.
    pub measured: usize,
    /// Non-mesh members skipped.
    pub skipped: usize,
}

/// Estimate the total mass of a selection of objects.
///
/// Non-mesh members are skipped (logged at debug level) and counted in
/// [`SelectionMass::skipped`].
///
/// ## Errors
/// - [`EstimateError::InvalidDensity`] before any object is visited.
/// - [`EstimateError::EmptySelection`] for a zero-length selection; the
///   total is zero by definition and the caller surfaces the advisory.
pub fn selection_mass(
    selection: &[SceneObject],
    density: &Density,
) -> Result<SelectionMass, EstimateError> {
    // Validate once, before iterating
    density.resolve()?;

    if selection.is_empty() {
        warn!("no objects selected");
        return Err(EstimateError::EmptySelection);
    }

    let mut totals = SelectionMass::default();
    for member in selection {
        match member.as_mesh() {
            Some(object) => {
                let estimate = object_mass(object, density)?;
                totals.total_grams += estimate.mass_grams;
                totals.measured += 1;
            },
            None => {
                debug!(object = %member.name(), "skipping non-mesh selection member");
                totals.skipped += 1;
            },
        }
    }

    Ok(totals)
}
