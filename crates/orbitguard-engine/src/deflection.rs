//! Deflection mission simulation — momentum transfer, success probability,
//! and the single stochastic roll in the whole engine.
//!
//! The roll is written against `&mut impl Rng` so tests can substitute a
//! fixed generator and exercise both branches deterministically.

use rand::Rng;

use orbitguard_core::constants::*;
use orbitguard_core::types::{
    DeflectionDetails, DeflectionMethod, DeflectionOutcome, Scenario,
};

use crate::impact;

/// Entry angle assumed for a post-failure impact: the mission model does
/// not track actual impact geometry.
pub const FAILURE_IMPACT_ANGLE_DEG: f64 = 45.0;

/// Attempt to deflect the scenario asteroid with the given method.
///
/// Success requires both a favorable roll against the composed probability
/// and a physically sufficient deflection distance — a lucky roll cannot
/// override an asteroid that was barely nudged.
pub fn attempt(
    scenario: &Scenario,
    method: &DeflectionMethod,
    time_remaining_days: f64,
    rng: &mut impl Rng,
) -> DeflectionOutcome {
    let asteroid = &scenario.asteroid;
    let diameter_m = asteroid.diameter_m();
    let mass_kg = asteroid.mass_kg();

    // Impulse delivered by the spacecraft, scaled by method efficiency.
    let momentum_transfer =
        SPACECRAFT_MASS_KG * SPACECRAFT_RELATIVE_VELOCITY_M_S * method.momentum_efficiency;
    let delta_v_m_s = momentum_transfer / mass_kg;

    // Miss distance accumulated by impact epoch.
    let deflection_distance_km =
        delta_v_m_s * time_remaining_days * SECONDS_PER_DAY / 1000.0;
    let geometric_success = deflection_distance_km > EARTH_RADIUS_KM;

    let time_factor = (time_remaining_days / FULL_CONFIDENCE_LEAD_DAYS).min(1.0);
    let size_factor = (1.0 - diameter_m / SIZE_FACTOR_SCALE_M).max(MIN_SIZE_FACTOR);
    // Product of 0.7 × [0,1] × [0.3,1] × [0.65,0.95]: bounded by 0.665,
    // so no re-clamp is needed.
    let probability =
        BASE_SUCCESS_PROBABILITY * time_factor * size_factor * method.id.risk_multiplier();

    let roll: f64 = rng.gen();
    let succeeded = roll < probability && geometric_success;

    let details = DeflectionDetails {
        delta_v_m_s,
        probability,
        time_factor,
        size_factor,
    };

    if succeeded {
        DeflectionOutcome::Deflected {
            deflection_distance_km,
            details,
        }
    } else {
        DeflectionOutcome::Failed {
            deflection_distance_km,
            details,
            impact: impact::assess(
                asteroid.diameter_km,
                asteroid.velocity_km_s,
                FAILURE_IMPACT_ANGLE_DEG,
                asteroid.density_kg_m3,
            ),
        }
    }
}
