//! Concrete
//!
//! Service and ultimate stress-strain laws for concrete. Compressive strain
//! is positive; concrete carries no tension in either law.

use serde::{Deserialize, Serialize};

use crate::codes::{DesignCode, HkCop2013};
use crate::errors::{CodeError, CodeResult};

use super::StressStrainProfile;

/// Linear no-tension law used for serviceability checks.
///
/// Stress rises at E up to the compressive strength and holds there until
/// the ultimate strain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConcreteServiceProfile {
    /// Elastic modulus (MPa)
    pub elastic_modulus: f64,
    /// Compressive strength, 0.67 fcu (MPa)
    pub compressive_strength: f64,
    /// Ultimate compressive strain
    pub ultimate_strain: f64,
}

impl StressStrainProfile for ConcreteServiceProfile {
    fn stress(&self, strain: f64) -> CodeResult<f64> {
        if !(strain <= self.ultimate_strain) {
            return Err(CodeError::strain_out_of_range(strain, f64::NEG_INFINITY, self.ultimate_strain));
        }
        if strain <= 0.0 {
            return Ok(0.0);
        }
        Ok((self.elastic_modulus * strain).min(self.compressive_strength))
    }

    fn elastic_modulus(&self) -> f64 {
        self.elastic_modulus
    }

    fn ultimate_strain(&self) -> f64 {
        self.ultimate_strain
    }

    fn strain_limits(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, self.ultimate_strain)
    }
}

/// Equivalent rectangular stress block used at ultimate limit state.
///
/// `gamma` is the block depth as a fraction of the neutral-axis depth. It is
/// carried for the section integrator and never scales stress here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConcreteUltimateProfile {
    /// Characteristic cube strength fcu (MPa)
    pub compressive_strength: f64,
    /// Stress-block magnitude factor
    pub alpha: f64,
    /// Stress-block depth factor
    pub gamma: f64,
    /// Ultimate compressive strain
    pub ultimate_strain: f64,
    /// Elastic modulus (MPa), reported for consumers needing an initial stiffness
    pub elastic_modulus: f64,
}

impl ConcreteUltimateProfile {
    /// Constant block stress alpha × fcu (MPa)
    pub fn block_stress(&self) -> f64 {
        self.alpha * self.compressive_strength
    }
}

impl StressStrainProfile for ConcreteUltimateProfile {
    fn stress(&self, strain: f64) -> CodeResult<f64> {
        if !(strain <= self.ultimate_strain) {
            return Err(CodeError::strain_out_of_range(strain, f64::NEG_INFINITY, self.ultimate_strain));
        }
        if strain <= 0.0 {
            return Ok(0.0);
        }
        Ok(self.block_stress())
    }

    fn elastic_modulus(&self) -> f64 {
        self.elastic_modulus
    }

    fn ultimate_strain(&self) -> f64 {
        self.ultimate_strain
    }

    fn strain_limits(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, self.ultimate_strain)
    }
}

/// Concrete material handed to section analysis.
///
/// Deserializing reads only `fcu` and `colour` and rebuilds everything else,
/// so JSON input is held to the same bounds as the factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConcreteRecord")]
pub struct Concrete {
    /// Grade name (e.g., "40 MPa Concrete")
    pub name: String,
    /// Density (kg/mm³)
    pub density: f64,
    /// Display colour, no effect on analysis
    pub colour: String,
    /// Characteristic cube strength fcu (MPa)
    pub fcu: f64,
    /// Short-term elastic modulus (MPa)
    pub elastic_modulus: f64,
    /// Flexural tensile strength (MPa)
    pub flexural_tensile_strength: f64,
    /// Serviceability law
    pub service_profile: ConcreteServiceProfile,
    /// Ultimate limit state law
    pub ultimate_profile: ConcreteUltimateProfile,
}

impl Concrete {
    /// Stress-block magnitude factor
    pub fn alpha(&self) -> f64 {
        self.ultimate_profile.alpha
    }

    /// Stress-block depth factor
    pub fn gamma(&self) -> f64 {
        self.ultimate_profile.gamma
    }

    /// Get display name
    pub fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Deserialize)]
struct ConcreteRecord {
    fcu: f64,
    colour: String,
}

impl TryFrom<ConcreteRecord> for Concrete {
    type Error = CodeError;

    fn try_from(record: ConcreteRecord) -> CodeResult<Self> {
        HkCop2013::default().create_concrete_material(record.fcu, &record.colour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn service() -> ConcreteServiceProfile {
        ConcreteServiceProfile {
            elastic_modulus: 25_000.0,
            compressive_strength: 26.8,
            ultimate_strain: 0.0035,
        }
    }

    fn ultimate() -> ConcreteUltimateProfile {
        ConcreteUltimateProfile {
            compressive_strength: 70.0,
            alpha: 0.645,
            gamma: 0.4375,
            ultimate_strain: 0.0035,
            elastic_modulus: 32_158.0,
        }
    }

    #[test]
    fn test_service_linear_branch() {
        let p = service();
        assert_relative_eq!(p.stress(0.0004).unwrap(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_service_caps_at_strength() {
        let p = service();
        assert_eq!(p.stress(0.002).unwrap(), 26.8);
        assert_eq!(p.stress(0.0035).unwrap(), 26.8);
    }

    #[test]
    fn test_service_no_tension() {
        let p = service();
        assert_eq!(p.stress(0.0).unwrap(), 0.0);
        assert_eq!(p.stress(-0.001).unwrap(), 0.0);
        assert_eq!(p.stress(-1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_ultimate_block_is_constant() {
        let p = ultimate();
        let expected = 0.645 * 70.0;
        assert_eq!(p.stress(1e-6).unwrap(), expected);
        assert_eq!(p.stress(0.002).unwrap(), expected);
        assert_eq!(p.stress(0.0035).unwrap(), expected);
    }

    #[test]
    fn test_ultimate_gamma_does_not_scale_stress() {
        let mut p = ultimate();
        let before = p.stress(0.003).unwrap();
        p.gamma = 0.35;
        assert_eq!(p.stress(0.003).unwrap(), before);
    }

    #[test]
    fn test_ultimate_zero_in_tension() {
        let p = ultimate();
        assert_eq!(p.stress(0.0).unwrap(), 0.0);
        assert_eq!(p.stress(-0.01).unwrap(), 0.0);
    }

    #[test]
    fn test_deserialize_rebuilds_derived_properties() {
        let original = HkCop2013::default().create_concrete_material(40.0, "lightgrey").unwrap();
        let mut json = serde_json::to_value(&original).unwrap();
        json["elastic_modulus"] = json!(1.0);
        json["service_profile"]["compressive_strength"] = json!(99.0);
        json["service_profile"]["tensile_strength"] = json!(3.0);

        let parsed: Concrete = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, original);
        assert_eq!(parsed.service_profile.stress(-0.001).unwrap(), 0.0);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_fcu() {
        let original = HkCop2013::default().create_concrete_material(40.0, "lightgrey").unwrap();
        for fcu in [200.0, 20.0] {
            let mut json = serde_json::to_value(&original).unwrap();
            json["fcu"] = json!(fcu);
            let err = serde_json::from_value::<Concrete>(json).unwrap_err();
            assert!(err.to_string().contains("'fcu'"), "{err}");
        }
    }

    #[test]
    fn test_deserialize_requires_fcu() {
        let json = r#"{"name":"40 MPa Concrete","colour":"lightgrey"}"#;
        assert!(serde_json::from_str::<Concrete>(json).is_err());
    }

    #[test]
    fn test_beyond_ultimate_strain_fails() {
        assert_eq!(service().stress(0.004).unwrap_err().error_code(), "STRAIN_OUT_OF_RANGE");
        assert_eq!(ultimate().stress(0.0036).unwrap_err().error_code(), "STRAIN_OUT_OF_RANGE");
        assert!(ultimate().stress(f64::NAN).is_err());
    }
}
