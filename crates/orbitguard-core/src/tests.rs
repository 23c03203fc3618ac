#[cfg(test)]
mod tests {
    use crate::constants::*;
    use crate::enums::{Material, MethodId};
    use crate::error::EngineError;
    use crate::types::{
        affected_population, crater_area_km2, find_method, find_scenario, DeflectionMethod,
        ImpactorSpec, MissionReport, Scenario,
    };

    /// Verify material and method enums round-trip through serde_json.
    #[test]
    fn test_material_serde() {
        let variants = vec![
            Material::Ice,
            Material::PorousRock,
            Material::DenseRock,
            Material::Iron,
            Material::Other,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: Material = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_method_id_serde() {
        let variants = vec![
            MethodId::Kinetic,
            MethodId::Gravity,
            MethodId::Nuclear,
            MethodId::Ion,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: MethodId = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_method_id_lowercase_wire_format() {
        assert_eq!(serde_json::to_string(&MethodId::Kinetic).unwrap(), "\"kinetic\"");
        assert_eq!(serde_json::to_string(&MethodId::Ion).unwrap(), "\"ion\"");
    }

    /// Unrecognized catalog ids deserialize to `Other` instead of failing.
    #[test]
    fn test_unknown_method_id_falls_back() {
        let parsed: MethodId = serde_json::from_str("\"solar_sail\"").unwrap();
        assert_eq!(parsed, MethodId::Other);
        assert_eq!(parsed.risk_multiplier(), RISK_DEFAULT);
    }

    #[test]
    fn test_material_from_density_catalog() {
        assert_eq!(Material::from_density(1000.0), Material::Ice);
        assert_eq!(Material::from_density(1500.0), Material::PorousRock);
        assert_eq!(Material::from_density(3000.0), Material::DenseRock);
        assert_eq!(Material::from_density(8000.0), Material::Iron);
    }

    /// Unmapped densities take the intentional default path.
    #[test]
    fn test_material_from_density_default() {
        assert_eq!(Material::from_density(2000.0), Material::Other);
        assert_eq!(Material::from_density(0.0), Material::Other);
        assert_eq!(
            Material::from_density(2999.9).ablation_strength_pa(),
            STRENGTH_DEFAULT_PA
        );
    }

    #[test]
    fn test_ablation_strengths_ordered_by_competence() {
        assert!(STRENGTH_ICE_PA < STRENGTH_POROUS_ROCK_PA);
        assert!(STRENGTH_POROUS_ROCK_PA < STRENGTH_DENSE_ROCK_PA);
        assert!(STRENGTH_DENSE_ROCK_PA < STRENGTH_IRON_PA);
    }

    /// All depth/diameter ratios are below 1, so depth < diameter always.
    #[test]
    fn test_depth_ratios_below_unity() {
        assert!(DEPTH_RATIO_SIMPLE < 1.0);
        assert!(DEPTH_RATIO_COMPLEX < DEPTH_RATIO_SIMPLE);
        assert!(DEPTH_RATIO_LARGE_COMPLEX < DEPTH_RATIO_COMPLEX);
    }

    #[test]
    fn test_impactor_mass_sphere() {
        // 1 km dense rock sphere: 3000 * (4/3)π(500)³ ≈ 1.5708e12 kg
        let spec = ImpactorSpec {
            diameter_km: 1.0,
            velocity_km_s: 20.0,
            density_kg_m3: 3000.0,
            entry_angle_deg: 45.0,
        };
        let volume = (4.0 / 3.0) * std::f64::consts::PI * 500.0_f64.powi(3);
        assert_eq!(spec.mass_kg(), 3000.0 * volume);
        assert_eq!(spec.material(), Material::DenseRock);
    }

    #[test]
    fn test_scenario_serde_roundtrip() {
        let scenario = Scenario {
            id: "apophis-2036".into(),
            name: "Apophis Close Approach".into(),
            asteroid: ImpactorSpec {
                diameter_km: 0.37,
                velocity_km_s: 12.6,
                density_kg_m3: 3000.0,
                entry_angle_deg: 45.0,
            },
            discovery_days: 400.0,
            budget: 2_000_000.0,
        };
        let json = serde_json::to_string(&scenario).unwrap();
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(scenario, back);
    }

    #[test]
    fn test_method_serde_roundtrip() {
        let method = DeflectionMethod {
            id: MethodId::Nuclear,
            name: "Nuclear Standoff".into(),
            description: "Standoff detonation ablates the surface".into(),
            momentum_efficiency: 0.5,
            cost: 1_500_000.0,
            launch_time_days: 90.0,
            mission_duration_days: 120.0,
        };
        let json = serde_json::to_string(&method).unwrap();
        let back: DeflectionMethod = serde_json::from_str(&json).unwrap();
        assert_eq!(method, back);
        assert_eq!(back.total_lead_days(), 210.0);
    }

    /// Mission reports serialize to the two distinct wire shapes the
    /// frontend expects, keyed by the `success` flag.
    #[test]
    fn test_mission_report_wire_shapes() {
        let success = MissionReport::Deflected {
            success: true,
            deflection_distance_km: 8123.45,
            message: "Asteroid deflected by 8123 km. Earth is safe!".into(),
            details: crate::types::DeflectionDetails {
                delta_v_m_s: 0.5,
                probability: 0.6,
                time_factor: 1.0,
                size_factor: 0.98,
            },
            score: 2250,
        };
        let value: serde_json::Value = serde_json::to_value(&success).unwrap();
        assert_eq!(value["success"], true);
        assert!(value.get("score").is_some());
        assert!(value.get("impact_data").is_none());

        let failure = MissionReport::Failed {
            success: false,
            impact_data: crate::types::ImpactData {
                crater_d_m: 12_000.0,
                energy_mt: 85_000.0,
                casualties: 113_097_335,
            },
            message: "Deflection failed. Impact occurred.".into(),
            details: crate::types::DeflectionDetails {
                delta_v_m_s: 1e-5,
                probability: 0.2,
                time_factor: 0.5,
                size_factor: 0.3,
            },
            lat: 35.0,
            lon: 139.0,
        };
        let value: serde_json::Value = serde_json::to_value(&failure).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("impact_data").is_some());
        assert!(value.get("score").is_none());
    }

    #[test]
    fn test_crater_area_and_population() {
        // 2 km crater → radius 1 km → area π km²
        let area = crater_area_km2(2000.0);
        assert!((area - std::f64::consts::PI).abs() < 1e-12);
        // Truncation, not rounding: π * 100 ≈ 314.159 → 314 persons
        assert_eq!(affected_population(2000.0, 100.0), 314);
    }

    #[test]
    fn test_catalog_lookup_by_id() {
        let scenarios = vec![Scenario {
            id: "apophis-2036".into(),
            name: "Apophis Close Approach".into(),
            asteroid: ImpactorSpec {
                diameter_km: 0.37,
                velocity_km_s: 12.6,
                density_kg_m3: 3000.0,
                entry_angle_deg: 45.0,
            },
            discovery_days: 400.0,
            budget: 2_000_000.0,
        }];
        assert_eq!(
            find_scenario(&scenarios, "apophis-2036").unwrap().name,
            "Apophis Close Approach"
        );
        assert_eq!(
            find_scenario(&scenarios, "bennu-2135"),
            Err(EngineError::UnknownScenario("bennu-2135".into()))
        );

        let methods = vec![DeflectionMethod {
            id: MethodId::Kinetic,
            name: "Kinetic Impactor".into(),
            description: "High-velocity spacecraft collision".into(),
            momentum_efficiency: 0.9,
            cost: 500_000.0,
            launch_time_days: 30.0,
            mission_duration_days: 5.0,
        }];
        assert!(find_method(&methods, MethodId::Kinetic).is_ok());
        assert_eq!(
            find_method(&methods, MethodId::Ion),
            Err(EngineError::UnknownMethod("ion".into()))
        );
    }

    #[test]
    fn test_method_id_wire_names() {
        assert_eq!(MethodId::Kinetic.as_str(), "kinetic");
        assert_eq!(MethodId::Gravity.as_str(), "gravity");
        assert_eq!(MethodId::Nuclear.as_str(), "nuclear");
        assert_eq!(MethodId::Ion.as_str(), "ion");
        assert_eq!(MethodId::Other.as_str(), "other");
    }

    #[test]
    fn test_error_messages_name_the_constraint() {
        let err = EngineError::InsufficientBudget {
            cost: 1_500_000.0,
            budget: 1_000_000.0,
        };
        assert!(err.to_string().contains("insufficient budget"));

        let err = EngineError::OutOfRange {
            name: "velocity_km_s",
            min: 11.0,
            max: 72.0,
        };
        assert!(err.to_string().contains("velocity_km_s"));
    }
}
