//! # HK CoP 2013 Rule Set
//!
//! Constants and clause formulas from the Hong Kong Code of Practice for
//! Structural Use of Concrete 2013. Everything here is a pure function of
//! its arguments so derived properties can never drift between calls.
//!
//! ## Formula Summary
//!
//! ```text
//! E_c   = (3.46 √fcu + 3.21) GPa
//! f_ct  = 0.6 √fcu                         MPa
//! alpha = 0.67                             fcu ≤ 60
//!       = max(0.50, 0.67 − (fcu − 60)/400) fcu > 60
//! gamma = 0.45                             fcu ≤ 60
//!       = max(0.35, 0.45 − (fcu − 60)/800) fcu > 60
//! ```
//!
//! | Quantity           | Bounds / value       |
//! |--------------------|----------------------|
//! | fcu                | 25 – 80 MPa          |
//! | fy                 | 250 – 500 MPa        |
//! | E_s                | 200 000 MPa          |
//! | ε_cu               | 0.0035               |
//! | ε_su (A / B / C)   | 0.025 / 0.05 / 0.075 |

use crate::units::{Gpa, Mpa};

/// Lowest characteristic cube strength accepted (MPa)
pub const FCU_MIN: f64 = 25.0;
/// Highest characteristic cube strength accepted (MPa)
pub const FCU_MAX: f64 = 80.0;

/// Lowest reinforcement yield strength accepted (MPa)
pub const FY_MIN: f64 = 250.0;
/// Highest reinforcement yield strength accepted (MPa)
pub const FY_MAX: f64 = 500.0;

/// Concrete density (kg/mm³)
pub const CONCRETE_DENSITY: f64 = 2.4e-6;
/// Steel density (kg/mm³)
pub const STEEL_DENSITY: f64 = 7.85e-6;

/// Reinforcement elastic modulus (MPa)
pub const STEEL_ELASTIC_MODULUS: f64 = 200_000.0;

/// Ultimate concrete compressive strain
pub const CONCRETE_ULTIMATE_STRAIN: f64 = 0.0035;

/// Service compressive capacity as a fraction of fcu
pub const SERVICE_STRENGTH_FACTOR: f64 = 0.67;

/// Stress-block magnitude factor for fcu ≤ 60
pub const ALPHA_MAX: f64 = 0.67;
/// Floor on the stress-block magnitude factor
pub const ALPHA_MIN: f64 = 0.50;
/// Stress-block depth factor for fcu ≤ 60
pub const GAMMA_MAX: f64 = 0.45;
/// Floor on the stress-block depth factor
pub const GAMMA_MIN: f64 = 0.35;

/// fcu above which the stress-block factors start to reduce (MPa)
pub const HIGH_STRENGTH_THRESHOLD: f64 = 60.0;

/// Minimum ultimate strain for Class A reinforcement
pub const CLASS_A_ULTIMATE_STRAIN: f64 = 0.025;
/// Minimum ultimate strain for Class B reinforcement
pub const CLASS_B_ULTIMATE_STRAIN: f64 = 0.05;
/// Minimum ultimate strain for Class C reinforcement
pub const CLASS_C_ULTIMATE_STRAIN: f64 = 0.075;

/// Short-term concrete elastic modulus.
pub fn elastic_modulus(fcu: f64) -> Mpa {
    Gpa(3.46 * fcu.sqrt() + 3.21).into()
}

/// Flexural tensile strength.
pub fn flexural_tensile_strength(fcu: f64) -> Mpa {
    Mpa(fcu.sqrt()) * 0.6
}

/// Rectangular stress-block magnitude factor.
pub fn alpha(fcu: f64) -> f64 {
    if fcu <= HIGH_STRENGTH_THRESHOLD {
        ALPHA_MAX
    } else {
        (ALPHA_MAX - (fcu - HIGH_STRENGTH_THRESHOLD) / 400.0).max(ALPHA_MIN)
    }
}

/// Rectangular stress-block depth factor.
pub fn gamma(fcu: f64) -> f64 {
    if fcu <= HIGH_STRENGTH_THRESHOLD {
        GAMMA_MAX
    } else {
        (GAMMA_MAX - (fcu - HIGH_STRENGTH_THRESHOLD) / 800.0).max(GAMMA_MIN)
    }
}

/// Service-state compressive capacity.
pub fn service_compressive_strength(fcu: f64) -> Mpa {
    Mpa(fcu) * SERVICE_STRENGTH_FACTOR
}
