//! Mission scoring from budget and time efficiency.

use orbitguard_core::constants::BASE_SCORE;
use orbitguard_core::error::EngineError;
use orbitguard_core::types::{DeflectionMethod, Scenario};

/// Score a successful mission.
///
/// Both efficiencies are ratios, so a zero budget or zero discovery time is
/// rejected here rather than allowed to divide.
pub fn score(
    scenario: &Scenario,
    method: &DeflectionMethod,
    time_remaining_days: f64,
) -> Result<i64, EngineError> {
    if scenario.budget <= 0.0 {
        return Err(EngineError::NonPositiveBudget);
    }
    if scenario.discovery_days <= 0.0 {
        return Err(EngineError::NonPositiveDiscoveryDays);
    }

    let budget_efficiency = (scenario.budget - method.cost) / scenario.budget;
    let time_efficiency = time_remaining_days / scenario.discovery_days;
    let score = BASE_SCORE * (1.0 + budget_efficiency) * (1.0 + time_efficiency);

    Ok(score.floor() as i64)
}
