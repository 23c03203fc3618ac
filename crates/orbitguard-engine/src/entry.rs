//! Atmospheric entry model — pancake fragmentation after Collins et al. (2005).
//!
//! Determines whether an impactor survives to the surface and how much of
//! its entry velocity it keeps. The body flattens and sheds velocity once
//! dynamic pressure exceeds its material strength; bodies that never reach
//! that pressure (or are too massive to care) punch through essentially
//! unimpeded.

use std::f64::consts::PI;

use orbitguard_core::constants::*;
use orbitguard_core::enums::Material;

/// Result of atmospheric passage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryOutcome {
    /// Velocity at the surface (m/s).
    pub surface_velocity_m_s: f64,
    /// False means the body disintegrated in an airburst.
    pub survived: bool,
}

/// Run the entry model for one impactor.
///
/// `angle_rad` is measured from horizontal; it is floored at
/// [`MIN_ENTRY_ANGLE_RAD`] inside the sine so a grazing entry cannot blow
/// up the path length.
pub fn enter(
    diameter_m: f64,
    velocity_m_s: f64,
    density_kg_m3: f64,
    angle_rad: f64,
) -> EntryOutcome {
    let strength_pa = Material::from_density(density_kg_m3).ablation_strength_pa();

    let radius_m = diameter_m / 2.0;
    let volume_m3 = (4.0 / 3.0) * PI * radius_m.powi(3);
    let mass_kg = density_kg_m3 * volume_m3;
    let area_m2 = PI * radius_m * radius_m;

    // Altitude at which dynamic pressure ρ₀·exp(-h/H)·v² first reaches the
    // material strength, solved analytically.
    let crush_altitude_m =
        -SCALE_HEIGHT_M * (strength_pa / (SURFACE_AIR_DENSITY * velocity_m_s * velocity_m_s)).ln();

    // Never weak enough to fragment, or too massive for drag to matter.
    if crush_altitude_m < 0.0 || mass_kg > INTACT_MASS_THRESHOLD_KG {
        return EntryOutcome {
            surface_velocity_m_s: velocity_m_s * INTACT_VELOCITY_RETENTION,
            survived: true,
        };
    }

    // Pancake deceleration along the post-breakup path.
    let path_length_m = crush_altitude_m / angle_rad.max(MIN_ENTRY_ANGLE_RAD).sin();
    let avg_air_density =
        SURFACE_AIR_DENSITY * (-crush_altitude_m / (2.0 * SCALE_HEIGHT_M)).exp();
    let beta = DRAG_COEFFICIENT * avg_air_density * area_m2 / mass_kg;
    let velocity_loss = beta * path_length_m;
    let impact_velocity = (velocity_m_s * velocity_m_s - 2.0 * velocity_loss)
        .max(0.0)
        .sqrt();

    if diameter_m < AIRBURST_DIAMETER_M {
        // Airburst: no coherent body reaches the ground.
        EntryOutcome {
            surface_velocity_m_s: impact_velocity * AIRBURST_VELOCITY_RETENTION,
            survived: false,
        }
    } else if diameter_m < FRAGMENT_DIAMETER_M {
        // Heavily fragmented but some material lands.
        EntryOutcome {
            surface_velocity_m_s: impact_velocity * FRAGMENT_VELOCITY_RETENTION,
            survived: true,
        }
    } else {
        // Large bodies keep at least 85% of their entry velocity.
        EntryOutcome {
            surface_velocity_m_s: impact_velocity
                .max(velocity_m_s * LARGE_BODY_MIN_VELOCITY_RETENTION),
            survived: true,
        }
    }
}
