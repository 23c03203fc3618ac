//! Physics constants and tuning parameters.
//!
//! Empirical values follow the Collins, Melosh & Marcus (2005) impact
//! effects model and Holsapple & Housen (2007) crater scaling, simplified
//! to closed form.

// --- Atmosphere ---

/// Atmospheric scale height (m).
pub const SCALE_HEIGHT_M: f64 = 8000.0;

/// Air density at the surface (kg/m³).
pub const SURFACE_AIR_DENSITY: f64 = 1.225;

/// Drag coefficient for a fragmenting bolide.
pub const DRAG_COEFFICIENT: f64 = 2.0;

// --- Ablation strengths (Pa) ---

/// Cometary ice.
pub const STRENGTH_ICE_PA: f64 = 1e5;

/// Porous rock / rubble pile.
pub const STRENGTH_POROUS_ROCK_PA: f64 = 5e5;

/// Dense rock.
pub const STRENGTH_DENSE_ROCK_PA: f64 = 5e6;

/// Iron-nickel.
pub const STRENGTH_IRON_PA: f64 = 5e7;

/// Fallback for densities outside the material catalog.
pub const STRENGTH_DEFAULT_PA: f64 = 2e6;

// --- Entry behavior ---

/// Above this mass the atmosphere is effectively transparent (kg).
pub const INTACT_MASS_THRESHOLD_KG: f64 = 1e9;

/// Floor on the entry angle before taking its sine, to keep the
/// atmospheric path length finite at grazing incidence (rad).
pub const MIN_ENTRY_ANGLE_RAD: f64 = 0.1;

/// Velocity retained by objects too strong or massive to fragment.
pub const INTACT_VELOCITY_RETENTION: f64 = 0.99;

/// Below this diameter the object airbursts with no surface crater (m).
pub const AIRBURST_DIAMETER_M: f64 = 10.0;

/// Below this diameter the object fragments but some material lands (m).
pub const FRAGMENT_DIAMETER_M: f64 = 50.0;

/// Velocity retained through an airburst.
pub const AIRBURST_VELOCITY_RETENTION: f64 = 0.5;

/// Velocity retained by a fragmented but surviving object.
pub const FRAGMENT_VELOCITY_RETENTION: f64 = 0.7;

/// Minimum velocity fraction for large survivors (≥50 m).
pub const LARGE_BODY_MIN_VELOCITY_RETENTION: f64 = 0.85;

// --- Crater scaling ---

/// Surface gravity (m/s²).
pub const SURFACE_GRAVITY: f64 = 9.81;

/// Target bulk density: competent rock (kg/m³).
pub const TARGET_DENSITY_KG_M3: f64 = 2500.0;

/// Target strength for competent rock in the strength regime (Pa).
pub const TARGET_STRENGTH_PA: f64 = 1.8e7;

/// Volume coefficient for strength-regime scaling.
pub const STRENGTH_VOLUME_COEFF: f64 = 0.2;

/// Impactor diameter at the strength→gravity regime transition (m).
pub const REGIME_TRANSITION_DIAMETER_M: f64 = 100.0;

/// Pi-group scaling coefficient K1 (Holsapple & Housen 2007).
pub const PI_SCALING_K1: f64 = 0.8;

/// Pi-group scaling exponent μ.
pub const PI_SCALING_MU: f64 = 0.41;

/// Pi-group scaling exponent ν.
pub const PI_SCALING_NU: f64 = 0.39;

/// Floor on the impact angle before the angle correction (rad).
pub const MIN_IMPACT_ANGLE_RAD: f64 = 0.01;

/// Final diameter at the simple→complex crater transition (m).
pub const COMPLEX_CRATER_TRANSITION_M: f64 = 3000.0;

/// Rim uplift factor applied above the complex transition.
pub const RIM_UPLIFT_FACTOR: f64 = 1.25;

/// Final diameter above which a crater counts as large complex (m).
pub const LARGE_COMPLEX_TRANSITION_M: f64 = 20_000.0;

/// Depth/diameter ratio for simple bowl craters.
pub const DEPTH_RATIO_SIMPLE: f64 = 0.2;

/// Depth/diameter ratio for transitional complex craters.
pub const DEPTH_RATIO_COMPLEX: f64 = 0.12;

/// Depth/diameter ratio for large complex craters.
pub const DEPTH_RATIO_LARGE_COMPLEX: f64 = 0.08;

// --- Energy & unit conversion ---

/// Joules per megaton of TNT equivalent.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// km/s to miles per hour.
pub const KM_S_TO_MPH: f64 = 621.371;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// --- Deflection mission model ---

/// Deflection spacecraft mass (kg) — DART-class impactor.
pub const SPACECRAFT_MASS_KG: f64 = 1000.0;

/// Spacecraft closing velocity relative to the asteroid (m/s).
pub const SPACECRAFT_RELATIVE_VELOCITY_M_S: f64 = 10_000.0;

/// Mean Earth radius (km) — the miss distance a deflection must exceed.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Base mission success probability before time/size/method factors.
pub const BASE_SUCCESS_PROBABILITY: f64 = 0.7;

/// Days of remaining lead time at which the time factor saturates.
pub const FULL_CONFIDENCE_LEAD_DAYS: f64 = 30.0;

/// Floor on the size factor for very large asteroids.
pub const MIN_SIZE_FACTOR: f64 = 0.3;

/// Impactor diameter (m) at which the size factor would reach zero
/// without the floor.
pub const SIZE_FACTOR_SCALE_M: f64 = 1000.0;

// --- Method risk multipliers ---

/// Kinetic impactor: flight-proven, single shot.
pub const RISK_KINETIC: f64 = 0.85;

/// Gravity tractor: slow but very reliable.
pub const RISK_GRAVITY: f64 = 0.95;

/// Nuclear standoff: highest yield, highest failure risk.
pub const RISK_NUCLEAR: f64 = 0.65;

/// Ion beam shepherd.
pub const RISK_ION: f64 = 0.90;

/// Fallback multiplier for methods outside the catalog.
pub const RISK_DEFAULT: f64 = 0.7;

// --- Casualty model ---

/// Casualty estimate per km² of crater area when no population density
/// is supplied (mission failure path).
pub const CASUALTIES_PER_KM2: f64 = 1000.0;

// --- Scoring ---

/// Base mission score before efficiency multipliers.
pub const BASE_SCORE: f64 = 1000.0;

// --- Input validation bounds ---

/// Minimum impactor diameter (km).
pub const MIN_DIAMETER_KM: f64 = 0.001;

/// Maximum impactor diameter (km).
pub const MAX_DIAMETER_KM: f64 = 1000.0;

/// Minimum entry velocity (km/s) — Earth escape velocity.
pub const MIN_VELOCITY_KM_S: f64 = 11.0;

/// Maximum entry velocity (km/s) — heliocentric escape at 1 AU.
pub const MAX_VELOCITY_KM_S: f64 = 72.0;

/// Minimum entry angle from horizontal (degrees).
pub const MIN_ANGLE_DEG: f64 = 0.0;

/// Maximum entry angle from horizontal (degrees).
pub const MAX_ANGLE_DEG: f64 = 90.0;
