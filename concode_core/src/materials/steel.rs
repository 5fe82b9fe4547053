//! Reinforcing Steel
//!
//! Elastic-plastic-with-hardening stress-strain law for reinforcing bars and
//! the ductility classes that fix each bar's fracture strain.
//!
//! ```text
//!   σ
//!   │          fu ●          σ(−ε) = −σ(ε)
//!   │       ____/
//!   │  fy ●/
//!   │    /
//!   │   /  E
//!   └──┼──────────┼──── ε
//!     ε_y       ε_su
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::codes::{DesignCode, HkCop2013};
use crate::errors::{CodeError, CodeResult};
use crate::rules;
use crate::settings::CodeSettings;

use super::StressStrainProfile;

/// Reinforcement ductility class, keyed on minimum ultimate strain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DuctilityClass {
    /// ε_su ≥ 0.025
    A,
    /// ε_su ≥ 0.05
    B,
    /// ε_su ≥ 0.075
    C,
}

impl DuctilityClass {
    /// All ductility classes for UI selection
    pub const ALL: [DuctilityClass; 3] = [DuctilityClass::A, DuctilityClass::B, DuctilityClass::C];

    /// Minimum ultimate (fracture) strain for the class
    pub fn ultimate_strain(&self) -> f64 {
        match self {
            DuctilityClass::A => rules::CLASS_A_ULTIMATE_STRAIN,
            DuctilityClass::B => rules::CLASS_B_ULTIMATE_STRAIN,
            DuctilityClass::C => rules::CLASS_C_ULTIMATE_STRAIN,
        }
    }

    /// Single-letter code
    pub fn code(&self) -> &'static str {
        match self {
            DuctilityClass::A => "A",
            DuctilityClass::B => "B",
            DuctilityClass::C => "C",
        }
    }
}

impl FromStr for DuctilityClass {
    type Err = CodeError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> CodeResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(DuctilityClass::A),
            "B" => Ok(DuctilityClass::B),
            "C" => Ok(DuctilityClass::C),
            _ => Err(CodeError::invalid_ductility_class(s)),
        }
    }
}

impl std::fmt::Display for DuctilityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Bilinear steel law with linear strain hardening up to fracture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SteelProfile {
    /// Yield strength fy (MPa)
    pub yield_strength: f64,
    /// Elastic modulus E (MPa)
    pub elastic_modulus: f64,
    /// Fracture strain ε_su
    pub fracture_strain: f64,
    /// Hardening ratio h, with fu = fy (1 + h)
    pub hardening_ratio: f64,
}

impl SteelProfile {
    /// Yield strain ε_y = fy / E
    pub fn yield_strain(&self) -> f64 {
        self.yield_strength / self.elastic_modulus
    }

    /// Ultimate strength fu = fy (1 + h) (MPa)
    pub fn ultimate_strength(&self) -> f64 {
        self.yield_strength * (1.0 + self.hardening_ratio)
    }
}

impl StressStrainProfile for SteelProfile {
    fn stress(&self, strain: f64) -> CodeResult<f64> {
        let magnitude = strain.abs();
        if !(magnitude <= self.fracture_strain) {
            return Err(CodeError::strain_out_of_range(
                strain,
                -self.fracture_strain,
                self.fracture_strain,
            ));
        }

        let eps_y = self.yield_strain();
        if magnitude <= eps_y {
            return Ok(self.elastic_modulus * strain);
        }

        // Weighted form returns fy at t = 0 and fu at t = 1 without rounding drift
        let t = (magnitude - eps_y) / (self.fracture_strain - eps_y);
        let stress = self.yield_strength * (1.0 - t) + self.ultimate_strength() * t;
        Ok(stress.copysign(strain))
    }

    fn elastic_modulus(&self) -> f64 {
        self.elastic_modulus
    }

    fn ultimate_strain(&self) -> f64 {
        self.fracture_strain
    }

    fn strain_limits(&self) -> (f64, f64) {
        (-self.fracture_strain, self.fracture_strain)
    }
}

/// Reinforcing bar material handed to section analysis.
///
/// Deserializing reads the yield strength, class, hardening ratio and colour,
/// then rebuilds the bar through the factory. The fracture strain always
/// follows the class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SteelBarRecord")]
pub struct SteelBar {
    /// Grade name (e.g., "500 MPa Steel")
    pub name: String,
    /// Density (kg/mm³)
    pub density: f64,
    /// Display colour, no effect on analysis
    pub colour: String,
    /// Ductility class the fracture strain was taken from
    pub ductility_class: DuctilityClass,
    /// Stress-strain law
    pub profile: SteelProfile,
}

impl SteelBar {
    /// Yield strength fy (MPa)
    pub fn yield_strength(&self) -> f64 {
        self.profile.yield_strength
    }

    /// Yield strain ε_y
    pub fn yield_strain(&self) -> f64 {
        self.profile.yield_strain()
    }

    /// Ultimate strength fu (MPa)
    pub fn ultimate_strength(&self) -> f64 {
        self.profile.ultimate_strength()
    }

    /// Fracture strain ε_su
    pub fn ultimate_strain(&self) -> f64 {
        self.profile.fracture_strain
    }

    /// Stress at a given strain (MPa)
    pub fn stress(&self, strain: f64) -> CodeResult<f64> {
        self.profile.stress(strain)
    }

    /// Get display name
    pub fn display_name(&self) -> String {
        format!("{} (Class {})", self.name, self.ductility_class)
    }
}

#[derive(Deserialize)]
struct SteelBarRecord {
    colour: String,
    ductility_class: DuctilityClass,
    profile: SteelProfileRecord,
}

#[derive(Deserialize)]
struct SteelProfileRecord {
    yield_strength: f64,
    hardening_ratio: f64,
}

impl TryFrom<SteelBarRecord> for SteelBar {
    type Error = CodeError;

    fn try_from(record: SteelBarRecord) -> CodeResult<Self> {
        let settings = CodeSettings::default().with_hardening_ratio(record.profile.hardening_ratio);
        HkCop2013::new(settings)?.create_steel_material(
            record.profile.yield_strength,
            record.ductility_class.code(),
            &record.colour,
        )
    }
}
