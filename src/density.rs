//! Material presets and density resolution.
//!
//! Densities are grams per cubic centimeter. Hosts typically present a
//! closed list of named materials with a "custom" escape hatch; the sentinel
//! value `0.0` in that convention means "use the accompanying custom value"
//! and must never reach a mass computation. [`Density`] makes that
//! resolution explicit and infallible to misuse: a sentinel maps to
//! [`Density::Custom`] at the boundary, and [`Density::resolve`] rejects any
//! non-positive figure before it can multiply anything.

use crate::errors::EstimateError;
use crate::float_types::Real;

/// Named material presets with well-known densities in g/cm³.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    /// Pure (24k) gold
    Gold,
    /// 22k gold alloy
    Gold22k,
    /// 18k gold alloy
    Gold18k,
    Mercury,
    Silver,
    Copper,
    Iron,
    Aluminium,
    /// Jewellery casting resin
    CastingResin,
    Polycarbonate,
    Polystyrene,
    /// Low-density polyethylene
    Polyethylene,
    Polypropylene,
    ParaffinWax,
    Beeswax,
    CarnaubaWax,
    /// Water at 20 °C
    Water,
}

impl Material {
    /// Every preset, in display order.
    pub const ALL: &[Material] = &[
        Material::Gold,
        Material::Gold22k,
        Material::Gold18k,
        Material::Mercury,
        Material::Silver,
        Material::Copper,
        Material::Iron,
        Material::Aluminium,
        Material::CastingResin,
        Material::Polycarbonate,
        Material::Polystyrene,
        Material::Polyethylene,
        Material::Polypropylene,
        Material::ParaffinWax,
        Material::Beeswax,
        Material::CarnaubaWax,
        Material::Water,
    ];

    /// Density in grams per cubic centimeter.
    pub const fn density(&self) -> Real {
        match self {
            Material::Gold => 19.32,
            Material::Gold22k => 17.80,
            Material::Gold18k => 15.42,
            Material::Mercury => 13.5336,
            Material::Silver => 10.49,
            Material::Copper => 8.96,
            Material::Iron => 7.874,
            Material::Aluminium => 2.7,
            Material::CastingResin => 1.05,
            Material::Polycarbonate => 1.20,
            Material::Polystyrene => 1.04,
            Material::Polyethylene => 0.91,
            Material::Polypropylene => 0.90,
            Material::ParaffinWax => 0.90,
            Material::Beeswax => 0.958,
            Material::CarnaubaWax => 0.97,
            Material::Water => 0.99822,
        }
    }

    /// Human-readable name for display lists.
    pub const fn name(&self) -> &'static str {
        match self {
            Material::Gold => "Gold (24k)",
            Material::Gold22k => "Gold (22k)",
            Material::Gold18k => "Gold (18k)",
            Material::Mercury => "Mercury",
            Material::Silver => "Silver",
            Material::Copper => "Copper",
            Material::Iron => "Iron",
            Material::Aluminium => "Aluminium",
            Material::CastingResin => "Casting Resin",
            Material::Polycarbonate => "Polycarbonate (PC)",
            Material::Polystyrene => "Polystyrene (PS)",
            Material::Polyethylene => "Polyethylene (LDPE)",
            Material::Polypropylene => "Polypropylene (PP)",
            Material::ParaffinWax => "Paraffin Wax",
            Material::Beeswax => "Bees Wax",
            Material::CarnaubaWax => "Carnauba Wax",
            Material::Water => "Water",
        }
    }
}

/// A chosen density: a named preset or an arbitrary user-entered value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Density {
    Preset(Material),
    Custom(Real),
}

impl Density {
    /// Map a host's (preset code, custom value) pair into a `Density`.
    ///
    /// Hosts that encode the material list as plain numbers use `0.0` as the
    /// "custom" sentinel; that sentinel is resolved here, never multiplied.
    pub fn from_host(code: Real, custom: Real) -> Density {
        if code == 0.0 {
            Density::Custom(custom)
        } else {
            match Material::ALL.iter().copied().find(|m| m.density() == code) {
                Some(material) => Density::Preset(material),
                None => Density::Custom(code),
            }
        }
    }

    /// The plain g/cm³ figure, validated.
    ///
    /// Preset densities are positive by construction; custom values are
    /// rejected unless finite and strictly positive.
    pub fn resolve(&self) -> Result<Real, EstimateError> {
        match *self {
            Density::Preset(material) => Ok(material.density()),
            Density::Custom(value) => {
                if value.is_finite() && value > 0.0 {
                    Ok(value)
                } else {
                    Err(EstimateError::InvalidDensity(value))
                }
            },
        }
    }
}

impl From<Material> for Density {
    fn from(material: Material) -> Self {
        Density::Preset(material)
    }
}
