//! Impact assessment — composes the entry and crater models into a full
//! surface-impact result.

use orbitguard_core::constants::*;
use orbitguard_core::types::{ImpactResult, ImpactorSpec};

use crate::crater;
use crate::entry;

/// Assess a full impact: mass and energy from raw parameters, atmospheric
/// survival, crater geometry against a competent-rock target.
pub fn assess(
    diameter_km: f64,
    velocity_km_s: f64,
    angle_deg: f64,
    density_kg_m3: f64,
) -> ImpactResult {
    let spec = ImpactorSpec {
        diameter_km,
        velocity_km_s,
        density_kg_m3,
        entry_angle_deg: angle_deg,
    };

    let diameter_m = spec.diameter_m();
    let velocity_m_s = spec.velocity_m_s();
    let angle_rad = spec.entry_angle_rad();
    let mass_kg = spec.mass_kg();

    let outcome = entry::enter(diameter_m, velocity_m_s, density_kg_m3, angle_rad);

    // Impact energy is recomputed from the surface velocity: whatever the
    // atmosphere stripped off never reaches the ground.
    let surface_v = outcome.surface_velocity_m_s;
    let impact_energy_j = 0.5 * mass_kg * surface_v * surface_v;
    let energy_megatons = impact_energy_j / JOULES_PER_MEGATON;

    let crater = crater::final_crater(
        surface_v,
        diameter_m,
        density_kg_m3,
        TARGET_DENSITY_KG_M3,
        angle_rad,
    );

    ImpactResult {
        crater_diameter_m: crater.diameter_m,
        crater_depth_m: crater.depth_m,
        energy_megatons,
        surface_velocity_km_s: surface_v / 1000.0,
        velocity_mph: velocity_km_s * KM_S_TO_MPH,
        mass_kg,
        survived_atmosphere: outcome.survived,
    }
}
