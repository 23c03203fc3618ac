//! Value records exchanged between the engine and the embedding layer.
//!
//! Everything here is an immutable serde value produced fresh per call.
//! Scenario and method records come from the external content catalog;
//! the engine consumes them as plain data and never stores them.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{Material, MethodId};
use crate::error::EngineError;

/// Physical description of an incoming impactor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactorSpec {
    /// Diameter in kilometers.
    pub diameter_km: f64,
    /// Entry velocity in km/s.
    pub velocity_km_s: f64,
    /// Bulk density in kg/m³.
    pub density_kg_m3: f64,
    /// Entry angle from horizontal in degrees (0–90).
    pub entry_angle_deg: f64,
}

impl ImpactorSpec {
    pub fn diameter_m(&self) -> f64 {
        self.diameter_km * 1000.0
    }

    pub fn velocity_m_s(&self) -> f64 {
        self.velocity_km_s * 1000.0
    }

    pub fn entry_angle_rad(&self) -> f64 {
        self.entry_angle_deg.to_radians()
    }

    /// Mass from spherical volume times bulk density (kg).
    pub fn mass_kg(&self) -> f64 {
        let radius_m = self.diameter_m() / 2.0;
        let volume_m3 = (4.0 / 3.0) * PI * radius_m.powi(3);
        self.density_kg_m3 * volume_m3
    }

    /// Material class inferred from bulk density.
    pub fn material(&self) -> Material {
        Material::from_density(self.density_kg_m3)
    }
}

/// A game scenario: an impactor plus the mission envelope around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Catalog id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The incoming asteroid.
    pub asteroid: ImpactorSpec,
    /// Days between discovery and predicted impact.
    pub discovery_days: f64,
    /// Mission budget in currency units.
    pub budget: f64,
}

/// A deflection method from the content catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionMethod {
    pub id: MethodId,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Fraction of relative momentum transferred to the asteroid (0–1).
    pub momentum_efficiency: f64,
    /// Mission cost in currency units.
    pub cost: f64,
    /// Days from commit to launch.
    pub launch_time_days: f64,
    /// Days from launch to rendezvous.
    pub mission_duration_days: f64,
}

impl DeflectionMethod {
    /// Total days consumed before the method starts pushing the asteroid.
    pub fn total_lead_days(&self) -> f64 {
        self.launch_time_days + self.mission_duration_days
    }
}

/// Look up a scenario record by catalog id.
pub fn find_scenario<'a>(catalog: &'a [Scenario], id: &str) -> Result<&'a Scenario, EngineError> {
    catalog
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| EngineError::UnknownScenario(id.to_string()))
}

/// Look up a deflection method record by catalog id.
pub fn find_method(
    catalog: &[DeflectionMethod],
    id: MethodId,
) -> Result<&DeflectionMethod, EngineError> {
    catalog
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| EngineError::UnknownMethod(id.as_str().to_string()))
}

/// Result of a full impact assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub crater_diameter_m: f64,
    pub crater_depth_m: f64,
    pub energy_megatons: f64,
    pub surface_velocity_km_s: f64,
    /// Entry velocity expressed in mph for display.
    pub velocity_mph: f64,
    pub mass_kg: f64,
    /// False means the object disintegrated in an airburst.
    pub survived_atmosphere: bool,
}

/// Breakdown of the deflection probability model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionDetails {
    /// Velocity change imparted to the asteroid (m/s).
    pub delta_v_m_s: f64,
    /// Final success probability after all factors.
    pub probability: f64,
    /// Lead-time factor, saturating at 1.
    pub time_factor: f64,
    /// Size factor, floored at 0.3 for very large bodies.
    pub size_factor: f64,
}

/// Outcome of one deflection attempt. A failed attempt always carries the
/// resulting impact; a successful one never does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeflectionOutcome {
    /// The asteroid was pushed clear of Earth.
    Deflected {
        /// Accumulated miss distance at the predicted impact epoch (km).
        deflection_distance_km: f64,
        details: DeflectionDetails,
    },
    /// The push was insufficient, or the mission rolled a failure.
    Failed {
        deflection_distance_km: f64,
        details: DeflectionDetails,
        impact: ImpactResult,
    },
}

impl DeflectionOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, DeflectionOutcome::Deflected { .. })
    }

    pub fn deflection_distance_km(&self) -> f64 {
        match self {
            DeflectionOutcome::Deflected {
                deflection_distance_km,
                ..
            }
            | DeflectionOutcome::Failed {
                deflection_distance_km,
                ..
            } => *deflection_distance_km,
        }
    }

    pub fn details(&self) -> &DeflectionDetails {
        match self {
            DeflectionOutcome::Deflected { details, .. }
            | DeflectionOutcome::Failed { details, .. } => details,
        }
    }

    /// The impact produced by a failed attempt.
    pub fn impact(&self) -> Option<&ImpactResult> {
        match self {
            DeflectionOutcome::Deflected { .. } => None,
            DeflectionOutcome::Failed { impact, .. } => Some(impact),
        }
    }
}

/// Validated input set for a direct impact simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    pub diameter_km: f64,
    pub velocity_km_s: f64,
    pub angle_deg: f64,
    pub population_density_per_km2: f64,
    pub density_kg_m3: f64,
}

impl Default for ImpactParameters {
    fn default() -> Self {
        Self {
            diameter_km: 1.0,
            velocity_km_s: 20.0,
            angle_deg: 45.0,
            population_density_per_km2: 100.0,
            density_kg_m3: 3000.0,
        }
    }
}

/// Response record for a direct impact simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    pub crater_d_m: f64,
    pub crater_depth_m: f64,
    pub velocity_mph: f64,
    pub energy_mt: f64,
    pub vaporized_population: u64,
    pub summary_text: String,
}

/// Condensed impact figures attached to a failed mission report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactData {
    pub crater_d_m: f64,
    pub energy_mt: f64,
    pub casualties: u64,
}

/// Response record for a deflection mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MissionReport {
    /// The asteroid was pushed clear of Earth.
    Deflected {
        success: bool,
        deflection_distance_km: f64,
        message: String,
        details: DeflectionDetails,
        score: i64,
    },
    /// The mission failed and the impact went ahead.
    Failed {
        success: bool,
        impact_data: ImpactData,
        message: String,
        details: DeflectionDetails,
        lat: f64,
        lon: f64,
    },
}

impl MissionReport {
    pub fn succeeded(&self) -> bool {
        matches!(self, MissionReport::Deflected { .. })
    }
}

/// Crater area in km² from a final crater diameter in meters.
pub fn crater_area_km2(crater_diameter_m: f64) -> f64 {
    let radius_km = crater_diameter_m / 2000.0;
    PI * radius_km * radius_km
}

/// Population inside the crater footprint, truncated to whole persons.
pub fn affected_population(crater_diameter_m: f64, density_per_km2: f64) -> u64 {
    (crater_area_km2(crater_diameter_m) * density_per_km2).floor() as u64
}

/// Casualty estimate for the mission-failure path, at the fixed
/// [`CASUALTIES_PER_KM2`] rate.
pub fn estimated_casualties(crater_diameter_m: f64) -> u64 {
    affected_population(crater_diameter_m, CASUALTIES_PER_KM2)
}
