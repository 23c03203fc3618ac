//! Core types and definitions for the ORBITGUARD impact engine.
//!
//! This crate defines the vocabulary shared across the workspace:
//! value records, material/method enums, physics constants, and the
//! error taxonomy. It has no dependency on any runtime framework.

pub mod constants;
pub mod enums;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;
