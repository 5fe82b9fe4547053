//! # Code Settings
//!
//! Explicit configuration handed to a design code at construction. There is
//! no process-wide default state; two codes built from different settings
//! never influence each other.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "hardening_ratio": 0.08,
//!   "default_units": "N-mm",
//!   "concrete_colour": "lightgrey",
//!   "steel_colour": "grey"
//! }
//! ```
//!
//! Missing keys fall back to [`CodeSettings::default`].

use serde::{Deserialize, Serialize};

use crate::errors::{CodeError, CodeResult};
use crate::units::UnitSystem;

/// Default steel hardening ratio, fu = 1.08 fy
pub const DEFAULT_HARDENING_RATIO: f64 = 0.08;

/// Settings shared by the material factories and section design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeSettings {
    /// Steel hardening ratio h, with fu = fy (1 + h)
    pub hardening_ratio: f64,

    /// Unit system applied to sections that declare none
    pub default_units: UnitSystem,

    /// Colour used when a caller does not name one
    pub concrete_colour: String,

    /// Colour used when a caller does not name one
    pub steel_colour: String,
}

impl Default for CodeSettings {
    fn default() -> Self {
        CodeSettings {
            hardening_ratio: DEFAULT_HARDENING_RATIO,
            default_units: UnitSystem::NewtonMillimetre,
            concrete_colour: "lightgrey".to_string(),
            steel_colour: "grey".to_string(),
        }
    }
}

impl CodeSettings {
    /// Set the hardening ratio (builder pattern)
    pub fn with_hardening_ratio(mut self, hardening_ratio: f64) -> Self {
        self.hardening_ratio = hardening_ratio;
        self
    }

    /// Set the default unit system (builder pattern)
    pub fn with_default_units(mut self, units: UnitSystem) -> Self {
        self.default_units = units;
        self
    }

    /// Validate settings.
    pub fn validate(&self) -> CodeResult<()> {
        if !self.hardening_ratio.is_finite() || self.hardening_ratio < 0.0 {
            return Err(CodeError::invalid_input(
                "hardening_ratio",
                self.hardening_ratio.to_string(),
                "Hardening ratio must be a finite, non-negative number",
            ));
        }
        if !self.default_units.is_explicit() {
            return Err(CodeError::invalid_input(
                "default_units",
                self.default_units.to_string(),
                "Default unit system must be explicit",
            ));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON.
    pub fn from_json(json: &str) -> CodeResult<Self> {
        let settings: CodeSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> CodeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
