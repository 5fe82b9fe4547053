//! # Capacity Reduction Factors
//!
//! Comparison capacity-reduction factors per failure mode, in the style of
//! codes that factor nominal capacity rather than material strength.
//!
//! | Failure mode | Factor |
//! |--------------|--------|
//! | Flexure      | 0.85   |
//! | Compression  | 0.70   |
//! | Shear        | 0.75   |
//! | Tension      | 0.90   |
//!
//! These values are reference-only. Nothing in this crate gates a capacity
//! check on them.

use serde::{Deserialize, Serialize};

/// Factor returned for an unrecognised failure mode tag
pub const DEFAULT_CAPACITY_FACTOR: f64 = 0.85;

/// Failure mode a capacity factor applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    Flexure,
    Compression,
    Shear,
    Tension,
}

impl FailureMode {
    /// All failure modes for UI selection
    pub const ALL: [FailureMode; 4] = [
        FailureMode::Flexure,
        FailureMode::Compression,
        FailureMode::Shear,
        FailureMode::Tension,
    ];

    /// Capacity reduction factor φ
    pub fn factor(&self) -> f64 {
        match self {
            FailureMode::Flexure => 0.85,
            FailureMode::Compression => 0.70,
            FailureMode::Shear => 0.75,
            FailureMode::Tension => 0.90,
        }
    }

    /// Parse a failure mode tag, case-insensitively
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "flexure" => Some(FailureMode::Flexure),
            "compression" => Some(FailureMode::Compression),
            "shear" => Some(FailureMode::Shear),
            "tension" => Some(FailureMode::Tension),
            _ => None,
        }
    }

    /// Lowercase tag
    pub fn tag(&self) -> &'static str {
        match self {
            FailureMode::Flexure => "flexure",
            FailureMode::Compression => "compression",
            FailureMode::Shear => "shear",
            FailureMode::Tension => "tension",
        }
    }
}

impl std::fmt::Display for FailureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Static lookup of capacity factors by failure mode tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapacityFactorTable;

impl CapacityFactorTable {
    /// Factor for a failure mode tag; unknown tags get [`DEFAULT_CAPACITY_FACTOR`].
    pub fn factor_for(&self, failure_mode: &str) -> f64 {
        FailureMode::from_tag(failure_mode)
            .map(|mode| mode.factor())
            .unwrap_or(DEFAULT_CAPACITY_FACTOR)
    }
}
