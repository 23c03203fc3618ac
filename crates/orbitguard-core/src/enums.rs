//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Impactor material class, keyed by bulk density.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    /// Cometary ice (1000 kg/m³).
    Ice,
    /// Porous rock / rubble pile (1500 kg/m³).
    PorousRock,
    /// Dense rock (3000 kg/m³).
    #[default]
    DenseRock,
    /// Iron-nickel (8000 kg/m³).
    Iron,
    /// Any density outside the catalog.
    Other,
}

/// Catalog densities and their material classes (kg/m³).
const MATERIAL_CATALOG: [(f64, Material); 4] = [
    (1000.0, Material::Ice),
    (1500.0, Material::PorousRock),
    (3000.0, Material::DenseRock),
    (8000.0, Material::Iron),
];

impl Material {
    /// Classify a bulk density. Densities matching no catalog entry map to
    /// `Other`, which carries the default ablation strength.
    pub fn from_density(density_kg_m3: f64) -> Self {
        MATERIAL_CATALOG
            .iter()
            .find(|(d, _)| *d == density_kg_m3)
            .map(|(_, m)| *m)
            .unwrap_or(Material::Other)
    }

    /// Ablation strength in Pa — the dynamic pressure at which the body
    /// begins to fragment.
    pub fn ablation_strength_pa(self) -> f64 {
        match self {
            Material::Ice => STRENGTH_ICE_PA,
            Material::PorousRock => STRENGTH_POROUS_ROCK_PA,
            Material::DenseRock => STRENGTH_DENSE_ROCK_PA,
            Material::Iron => STRENGTH_IRON_PA,
            Material::Other => STRENGTH_DEFAULT_PA,
        }
    }
}

/// Deflection method identifier.
///
/// Catalog records arrive from the content layer as plain ids; anything
/// unrecognized deserializes to `Other` and takes the default risk
/// multiplier rather than failing the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodId {
    /// Kinetic impactor (DART-style).
    #[default]
    Kinetic,
    /// Gravity tractor.
    Gravity,
    /// Nuclear standoff detonation.
    Nuclear,
    /// Ion beam shepherd.
    Ion,
    /// Unrecognized method id.
    #[serde(other)]
    Other,
}

impl MethodId {
    /// Catalog id string, matching the serde wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            MethodId::Kinetic => "kinetic",
            MethodId::Gravity => "gravity",
            MethodId::Nuclear => "nuclear",
            MethodId::Ion => "ion",
            MethodId::Other => "other",
        }
    }

    /// Method-specific risk multiplier applied to the success probability.
    pub fn risk_multiplier(self) -> f64 {
        match self {
            MethodId::Kinetic => RISK_KINETIC,
            MethodId::Gravity => RISK_GRAVITY,
            MethodId::Nuclear => RISK_NUCLEAR,
            MethodId::Ion => RISK_ION,
            MethodId::Other => RISK_DEFAULT,
        }
    }
}
