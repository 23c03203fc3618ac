//! Crater scaling laws — strength and gravity regimes with a simple→complex
//! correction.
//!
//! Small impactors (<100 m) excavate against target material strength;
//! larger ones against gravity, via pi-group scaling with the Holsapple &
//! Housen (2007) coefficients. The two regimes are intentionally
//! discontinuous at the 100 m boundary: that is the accepted shape of the
//! underlying scaling laws, not something to smooth over. The boundary
//! itself belongs to the gravity regime.

use std::f64::consts::PI;

use orbitguard_core::constants::*;

/// Final crater geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CraterDimensions {
    pub diameter_m: f64,
    pub depth_m: f64,
}

/// Compute the final crater for a surface impact.
///
/// `angle_rad` is floored at [`MIN_IMPACT_ANGLE_RAD`] before the angle
/// correction. The angle factor is applied to the regime result first and
/// the rim-uplift factor after, matching the documented formulation.
pub fn final_crater(
    velocity_m_s: f64,
    diameter_m: f64,
    impactor_density: f64,
    target_density: f64,
    angle_rad: f64,
) -> CraterDimensions {
    let angle_rad = angle_rad.max(MIN_IMPACT_ANGLE_RAD);
    let angle_factor = angle_rad.sin().powf(1.0 / 3.0);

    let transient_diameter_m = if diameter_m < REGIME_TRANSITION_DIAMETER_M {
        strength_regime_diameter(velocity_m_s, diameter_m, impactor_density, target_density)
    } else {
        gravity_regime_diameter(velocity_m_s, diameter_m, impactor_density, target_density)
    };

    let mut crater_diameter_m = transient_diameter_m * angle_factor;

    // Simple→complex transition: rim collapse and uplift widen the crater.
    if crater_diameter_m > COMPLEX_CRATER_TRANSITION_M {
        crater_diameter_m *= RIM_UPLIFT_FACTOR;
    }

    CraterDimensions {
        diameter_m: crater_diameter_m,
        depth_m: depth_for_diameter(crater_diameter_m),
    }
}

/// Strength regime: crater volume from target strength, converted to an
/// equivalent hemispherical diameter.
fn strength_regime_diameter(
    velocity_m_s: f64,
    diameter_m: f64,
    impactor_density: f64,
    target_density: f64,
) -> f64 {
    let crater_volume_m3 = STRENGTH_VOLUME_COEFF
        * (impactor_density / target_density)
        * (velocity_m_s * velocity_m_s / TARGET_STRENGTH_PA)
        * diameter_m.powi(3);
    2.0 * ((3.0 * crater_volume_m3) / (2.0 * PI)).powf(1.0 / 3.0)
}

/// Gravity regime: pi-group scaling of the transient diameter.
fn gravity_regime_diameter(
    velocity_m_s: f64,
    diameter_m: f64,
    impactor_density: f64,
    target_density: f64,
) -> f64 {
    let pi_2 = SURFACE_GRAVITY * diameter_m / (velocity_m_s * velocity_m_s);
    let pi_3 = impactor_density / target_density;
    diameter_m * PI_SCALING_K1 * pi_2.powf(-PI_SCALING_MU) * pi_3.powf(PI_SCALING_NU)
}

/// Depth-diameter relationship: simple bowls are deep relative to their
/// width; complex craters progressively shallower.
pub fn depth_for_diameter(crater_diameter_m: f64) -> f64 {
    if crater_diameter_m < COMPLEX_CRATER_TRANSITION_M {
        crater_diameter_m * DEPTH_RATIO_SIMPLE
    } else if crater_diameter_m < LARGE_COMPLEX_TRANSITION_M {
        crater_diameter_m * DEPTH_RATIO_COMPLEX
    } else {
        crater_diameter_m * DEPTH_RATIO_LARGE_COMPLEX
    }
}
