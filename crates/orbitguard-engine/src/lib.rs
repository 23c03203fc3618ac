//! Impact physics and deflection-outcome engine for ORBITGUARD.
//!
//! Owns no I/O and no persistent state: every operation is a closed-form
//! computation over plain value records, apart from the single stochastic
//! draw in the deflection simulator. Completely headless, enabling
//! deterministic testing via seeded RNGs.

pub mod crater;
pub mod deflection;
pub mod engine;
pub mod entry;
pub mod impact;
pub mod scoring;
pub mod summary;

pub use engine::{EngineConfig, MissionEngine};
pub use orbitguard_core as core;
