//! HK CoP 2013
//!
//! Material factories and classification under the Hong Kong Code of
//! Practice for Structural Use of Concrete 2013. Formulas and bounds live in
//! [`rules`](crate::rules).
//!
//! ## Example
//!
//! ```rust
//! use concode_core::codes::{DesignCode, HkCop2013};
//!
//! let code = HkCop2013::default();
//! let concrete = code.create_concrete_material(70.0, "lightgrey").unwrap();
//! assert!((concrete.alpha() - 0.645).abs() < 1e-12);
//! assert!((concrete.gamma() - 0.4375).abs() < 1e-12);
//!
//! assert!(code.create_concrete_material(85.0, "lightgrey").is_err());
//! ```

use tracing::debug;

use crate::capacity::CapacityFactorTable;
use crate::classification;
use crate::errors::{CodeError, CodeResult};
use crate::geometry::LumpedBar;
use crate::materials::{
    Concrete, ConcreteServiceProfile, ConcreteUltimateProfile, DuctilityClass, SteelBar, SteelProfile,
};
use crate::rules;
use crate::settings::CodeSettings;

use super::DesignCode;

/// Hong Kong Code of Practice for Structural Use of Concrete 2013
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HkCop2013 {
    settings: CodeSettings,
    capacity_factors: CapacityFactorTable,
}

impl HkCop2013 {
    /// Build the code from validated settings.
    pub fn new(settings: CodeSettings) -> CodeResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            capacity_factors: CapacityFactorTable,
        })
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> CodeResult<()> {
    // NaN fails the range check too
    if !(min..=max).contains(&value) {
        return Err(CodeError::out_of_range_strength(field, value, min, max));
    }
    Ok(())
}

impl DesignCode for HkCop2013 {
    fn name(&self) -> &'static str {
        "HK CoP 2013"
    }

    fn settings(&self) -> &CodeSettings {
        &self.settings
    }

    fn create_concrete_material(&self, fcu: f64, colour: &str) -> CodeResult<Concrete> {
        check_range("fcu", fcu, rules::FCU_MIN, rules::FCU_MAX)?;

        let elastic_modulus = rules::elastic_modulus(fcu).value();
        let concrete = Concrete {
            name: format!("{} MPa Concrete", fcu),
            density: rules::CONCRETE_DENSITY,
            colour: colour.to_string(),
            fcu,
            elastic_modulus,
            flexural_tensile_strength: rules::flexural_tensile_strength(fcu).value(),
            service_profile: ConcreteServiceProfile {
                elastic_modulus,
                compressive_strength: rules::service_compressive_strength(fcu).value(),
                ultimate_strain: rules::CONCRETE_ULTIMATE_STRAIN,
            },
            ultimate_profile: ConcreteUltimateProfile {
                compressive_strength: fcu,
                alpha: rules::alpha(fcu),
                gamma: rules::gamma(fcu),
                ultimate_strain: rules::CONCRETE_ULTIMATE_STRAIN,
                elastic_modulus,
            },
        };

        debug!(
            fcu,
            elastic_modulus,
            alpha = concrete.alpha(),
            gamma = concrete.gamma(),
            "derived concrete material"
        );
        Ok(concrete)
    }

    fn create_steel_material(&self, fy: f64, ductility_class: &str, colour: &str) -> CodeResult<SteelBar> {
        check_range("fy", fy, rules::FY_MIN, rules::FY_MAX)?;
        let ductility_class: DuctilityClass = ductility_class.parse()?;

        let steel = SteelBar {
            name: format!("{} MPa Steel", fy),
            density: rules::STEEL_DENSITY,
            colour: colour.to_string(),
            ductility_class,
            profile: SteelProfile {
                yield_strength: fy,
                elastic_modulus: rules::STEEL_ELASTIC_MODULUS,
                fracture_strain: ductility_class.ultimate_strain(),
                hardening_ratio: self.settings.hardening_ratio,
            },
        };

        debug!(
            fy,
            class = %ductility_class,
            fracture_strain = steel.ultimate_strain(),
            "derived steel material"
        );
        Ok(steel)
    }

    fn classify(&self, reinforcement: &[LumpedBar]) -> DuctilityClass {
        classification::classify(reinforcement)
    }

    fn capacity_factor(&self, failure_mode: &str) -> f64 {
        self.capacity_factors.factor_for(failure_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::StressStrainProfile;
    use approx::assert_relative_eq;

    #[test]
    fn test_concrete_derived_properties() {
        let code = HkCop2013::default();
        let c = code.create_concrete_material(40.0, "lightgrey").unwrap();

        assert_eq!(c.name, "40 MPa Concrete");
        assert_eq!(c.density, 2.4e-6);
        assert_relative_eq!(c.elastic_modulus, 25_084.9, max_relative = 1e-3);
        assert_relative_eq!(c.flexural_tensile_strength, 3.7947, epsilon = 1e-4);
        assert_eq!(c.alpha(), 0.67);
        assert_eq!(c.gamma(), 0.45);

        assert_relative_eq!(c.service_profile.compressive_strength, 26.8, epsilon = 1e-12);
        assert_eq!(c.service_profile.elastic_modulus, c.elastic_modulus);
        assert_eq!(c.service_profile.ultimate_strain, 0.0035);
        assert_eq!(c.service_profile.stress(-0.001).unwrap(), 0.0);
        assert_eq!(c.ultimate_profile.ultimate_strain, 0.0035);
    }

    #[test]
    fn test_high_strength_stress_block() {
        let code = HkCop2013::default();
        let c = code.create_concrete_material(70.0, "lightgrey").unwrap();
        assert_relative_eq!(c.alpha(), 0.645, epsilon = 1e-12);
        assert_relative_eq!(c.gamma(), 0.4375, epsilon = 1e-12);
    }

    #[test]
    fn test_concrete_bounds() {
        let code = HkCop2013::default();
        assert!(code.create_concrete_material(25.0, "x").is_ok());
        assert!(code.create_concrete_material(80.0, "x").is_ok());

        for fcu in [20.0, 85.0, f64::NAN] {
            let err = code.create_concrete_material(fcu, "x").unwrap_err();
            assert_eq!(err.error_code(), "OUT_OF_RANGE_STRENGTH");
        }
    }

    #[test]
    fn test_concrete_is_pure() {
        let code = HkCop2013::default();
        let first = code.create_concrete_material(40.0, "lightgrey").unwrap();
        let second = code.create_concrete_material(40.0, "lightgrey").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_steel_derived_properties() {
        let code = HkCop2013::default();
        let s = code.create_steel_material(500.0, "b", "grey").unwrap();

        assert_eq!(s.name, "500 MPa Steel");
        assert_eq!(s.density, 7.85e-6);
        assert_eq!(s.ductility_class, DuctilityClass::B);
        assert_eq!(s.profile.elastic_modulus, 200_000.0);
        assert_eq!(s.ultimate_strain(), 0.05);
        assert_relative_eq!(s.yield_strain(), 0.0025, epsilon = 1e-15);
        assert_relative_eq!(s.ultimate_strength(), 540.0, epsilon = 1e-9);
    }

    #[test]
    fn test_steel_fracture_strain_by_class() {
        let code = HkCop2013::default();
        for (class, strain) in [("A", 0.025), ("B", 0.05), ("C", 0.075)] {
            let s = code.create_steel_material(460.0, class, "grey").unwrap();
            assert_eq!(s.ultimate_strain(), strain);
        }
    }

    #[test]
    fn test_steel_bounds_and_class() {
        let code = HkCop2013::default();
        assert!(code.create_steel_material(250.0, "A", "grey").is_ok());
        assert!(code.create_steel_material(500.0, "C", "grey").is_ok());

        for fy in [200.0, 550.0] {
            let err = code.create_steel_material(fy, "B", "grey").unwrap_err();
            assert_eq!(err.error_code(), "OUT_OF_RANGE_STRENGTH");
        }

        let err = code.create_steel_material(500.0, "D", "grey").unwrap_err();
        assert_eq!(err, CodeError::invalid_ductility_class("D"));
    }

    #[test]
    fn test_strength_checked_before_class() {
        let code = HkCop2013::default();
        let err = code.create_steel_material(600.0, "D", "grey").unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE_STRENGTH");
    }

    #[test]
    fn test_configured_hardening_ratio() {
        let settings = CodeSettings::default().with_hardening_ratio(0.15);
        let code = HkCop2013::new(settings).unwrap();
        let s = code.create_steel_material(400.0, "C", "grey").unwrap();
        assert_eq!(s.stress(0.075).unwrap(), 400.0 * (1.0 + 0.15));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = CodeSettings::default().with_hardening_ratio(f64::NAN);
        assert!(HkCop2013::new(settings).is_err());
    }

    #[test]
    fn test_capacity_factor() {
        let code = HkCop2013::default();
        assert_eq!(code.capacity_factor("compression"), 0.70);
        assert_eq!(code.capacity_factor("unknown"), 0.85);
    }

    #[test]
    fn test_code_name() {
        assert_eq!(HkCop2013::default().name(), "HK CoP 2013");
    }
}
