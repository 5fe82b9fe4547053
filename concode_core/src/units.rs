//! # Unit Types
//!
//! Lightweight wrappers for the stress units used by the code formulas,
//! plus the unit-system indicator carried by a section.
//!
//! ## Conventions
//!
//! Material laws are always expressed in MPa (N/mm²) and dimensionless
//! strain. Sections may carry forces and areas in another consistent system;
//! [`UnitSystem::stress_scale`] converts an MPa stress into that system.
//!
//! ## Example
//!
//! ```rust
//! use concode_core::units::{Gpa, Mpa, UnitSystem};
//!
//! let e: Mpa = Gpa(25.0).into();
//! assert_eq!(e.0, 25_000.0);
//!
//! // 1 MPa = 1000 kN/m²
//! assert_eq!(UnitSystem::KilonewtonMetre.stress_scale(), 1000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Mul;

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

/// Stress in gigapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gpa(pub f64);

impl From<Gpa> for Mpa {
    fn from(gpa: Gpa) -> Self {
        Mpa(gpa.0 * 1000.0)
    }
}

impl Mpa {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Mul<f64> for Mpa {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Mpa(self.0 * rhs)
    }
}

// ============================================================================
// Unit Systems
// ============================================================================

/// Consistent unit system declared by a section.
///
/// `Generic` means the section never declared one; section design replaces
/// it with the configured default before any capacity is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    /// No explicit unit system
    #[default]
    Generic,
    /// N, mm, MPa
    #[serde(rename = "N-mm")]
    NewtonMillimetre,
    /// kN, m, kPa
    #[serde(rename = "kN-m")]
    KilonewtonMetre,
}

impl UnitSystem {
    /// Factor converting an MPa stress into this system's stress unit.
    ///
    /// `Generic` is treated as N-mm.
    pub fn stress_scale(&self) -> f64 {
        match self {
            UnitSystem::Generic | UnitSystem::NewtonMillimetre => 1.0,
            UnitSystem::KilonewtonMetre => 1000.0,
        }
    }

    /// Force unit implied by the system
    pub fn force_unit(&self) -> &'static str {
        match self {
            UnitSystem::Generic | UnitSystem::NewtonMillimetre => "N",
            UnitSystem::KilonewtonMetre => "kN",
        }
    }

    /// Whether the section declared an explicit system
    pub fn is_explicit(&self) -> bool {
        !matches!(self, UnitSystem::Generic)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitSystem::Generic => "Generic",
            UnitSystem::NewtonMillimetre => "N-mm",
            UnitSystem::KilonewtonMetre => "kN-m",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
