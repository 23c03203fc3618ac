//! Human-readable impact summaries, bucketed by energy magnitude.

use orbitguard_core::types::ImpactResult;

/// Compose a one-paragraph description of an assessment result.
///
/// An airburst gets its own sentence with no crater description; everything
/// else names size, speed, angle, a qualitative energy comparison, and the
/// crater geometry.
pub fn summarize(
    result: &ImpactResult,
    angle_deg: f64,
    diameter_km: f64,
    velocity_km_s: f64,
) -> String {
    let energy = result.energy_megatons;

    if !result.survived_atmosphere {
        return format!(
            "The {diameter_km:.3} km asteroid disintegrated during atmospheric entry. \
             The airburst released approximately {energy:.3} MT of energy."
        );
    }

    let energy_desc = if energy < 0.001 {
        "equivalent to a small conventional explosive".to_string()
    } else if energy < 0.015 {
        "comparable to the Hiroshima bomb".to_string()
    } else if energy < 1.0 {
        format!("{energy:.3} MT, similar to a large thermonuclear weapon")
    } else if energy < 50.0 {
        format!("{energy:.1} MT, comparable to the largest nuclear tests")
    } else if energy < 10_000.0 {
        format!("{} MT, causing regional devastation", group_thousands(energy))
    } else {
        format!("{} MT, a mass extinction event", group_thousands(energy))
    };

    let crater_km = result.crater_diameter_m / 1000.0;
    format!(
        "A {diameter_km:.3} km asteroid traveling at {velocity_km_s:.1} km/s \
         struck at {angle_deg:.0}°, releasing {energy_desc}. \
         The impact crater is {crater_km:.2} km wide and {:.0} m deep.",
        result.crater_depth_m
    )
}

/// Round to a whole number and insert thousands separators.
fn group_thousands(value: f64) -> String {
    let digits = (value.round() as i64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
