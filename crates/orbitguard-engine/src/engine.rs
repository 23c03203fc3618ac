//! Mission engine — the facade the embedding layer talks to.
//!
//! `MissionEngine` owns the seeded RNG and exposes the two external
//! operations: direct impact simulation and deflection mission launch.
//! All input validation and mission preconditions are enforced here,
//! before any physics runs.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use orbitguard_core::constants::*;
use orbitguard_core::error::EngineError;
use orbitguard_core::types::{
    affected_population, estimated_casualties, DeflectionMethod, DeflectionOutcome, ImpactData,
    ImpactParameters, ImpactReport, MissionReport, Scenario,
};

use crate::deflection;
use crate::impact;
use crate::scoring;
use crate::summary;

/// Configuration for a new engine.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed = same sequence of mission rolls.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The impact/deflection engine. The RNG behind the single stochastic
/// draw is the only state; everything else is closed-form per call.
pub struct MissionEngine {
    rng: ChaCha8Rng,
}

impl MissionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        }
    }

    /// Simulate a direct impact with the given parameters.
    ///
    /// Inputs are range-checked before any computation; a violation is a
    /// rejected request, never a computed result.
    pub fn simulate_impact(
        &self,
        params: &ImpactParameters,
    ) -> Result<ImpactReport, EngineError> {
        validate_impact_parameters(params)?;

        let result = impact::assess(
            params.diameter_km,
            params.velocity_km_s,
            params.angle_deg,
            params.density_kg_m3,
        );

        let vaporized_population = affected_population(
            result.crater_diameter_m,
            params.population_density_per_km2,
        );
        let summary_text = summary::summarize(
            &result,
            params.angle_deg,
            params.diameter_km,
            params.velocity_km_s,
        );

        Ok(ImpactReport {
            crater_d_m: round_dp(result.crater_diameter_m, 2),
            crater_depth_m: round_dp(result.crater_depth_m, 2),
            velocity_mph: round_dp(result.velocity_mph, 2),
            energy_mt: round_dp(result.energy_megatons, 6),
            vaporized_population,
            summary_text,
        })
    }

    /// Launch a deflection mission against a scenario asteroid.
    ///
    /// Preconditions (budget covers the method cost; launch plus mission
    /// duration fits in the discovery lead time) are checked before the
    /// attempt. The impact coordinates are carried through untouched on
    /// failure so the frontend can place the result.
    pub fn launch_deflection(
        &mut self,
        scenario: &Scenario,
        method: &DeflectionMethod,
        impact_lat: f64,
        impact_lon: f64,
    ) -> Result<MissionReport, EngineError> {
        if scenario.budget <= 0.0 {
            return Err(EngineError::NonPositiveBudget);
        }
        if scenario.discovery_days <= 0.0 {
            return Err(EngineError::NonPositiveDiscoveryDays);
        }
        if method.cost > scenario.budget {
            return Err(EngineError::InsufficientBudget {
                cost: method.cost,
                budget: scenario.budget,
            });
        }

        let time_remaining_days = scenario.discovery_days - method.total_lead_days();
        if time_remaining_days < 0.0 {
            return Err(EngineError::InsufficientTime {
                needed_days: method.total_lead_days(),
                available_days: scenario.discovery_days,
            });
        }

        match deflection::attempt(scenario, method, time_remaining_days, &mut self.rng) {
            DeflectionOutcome::Deflected {
                deflection_distance_km,
                details,
            } => {
                let score = scoring::score(scenario, method, time_remaining_days)?;
                Ok(MissionReport::Deflected {
                    success: true,
                    deflection_distance_km: round_dp(deflection_distance_km, 2),
                    message: format!(
                        "Asteroid deflected by {deflection_distance_km:.0} km. Earth is safe!"
                    ),
                    details,
                    score,
                })
            }
            DeflectionOutcome::Failed {
                details, impact, ..
            } => Ok(MissionReport::Failed {
                success: false,
                impact_data: ImpactData {
                    crater_d_m: impact.crater_diameter_m,
                    energy_mt: impact.energy_megatons,
                    casualties: estimated_casualties(impact.crater_diameter_m),
                },
                message: "Deflection failed. Impact occurred.".to_string(),
                details,
                lat: impact_lat,
                lon: impact_lon,
            }),
        }
    }
}

/// Range-check the direct-simulation inputs.
fn validate_impact_parameters(params: &ImpactParameters) -> Result<(), EngineError> {
    check_range(
        "diameter_km",
        params.diameter_km,
        MIN_DIAMETER_KM,
        MAX_DIAMETER_KM,
    )?;
    check_range(
        "velocity_km_s",
        params.velocity_km_s,
        MIN_VELOCITY_KM_S,
        MAX_VELOCITY_KM_S,
    )?;
    check_range("angle_deg", params.angle_deg, MIN_ANGLE_DEG, MAX_ANGLE_DEG)?;
    Ok(())
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), EngineError> {
    if !(min..=max).contains(&value) {
        return Err(EngineError::OutOfRange { name, min, max });
    }
    Ok(())
}

/// Round to `dp` decimal places for response records.
fn round_dp(value: f64, dp: u32) -> f64 {
    let factor = 10f64.powi(dp as i32);
    (value * factor).round() / factor
}
