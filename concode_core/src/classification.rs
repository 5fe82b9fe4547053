//! # Section Ductility Classification
//!
//! A section is Class B unless any bar's ultimate strain falls below the
//! Class B threshold, in which case the whole section is Class A. Sections
//! where every bar meets Class C are still reported as Class B.

use tracing::debug;

use crate::geometry::ReinforcementElement;
use crate::materials::DuctilityClass;
use crate::rules;

/// Classify a section from its reinforcement.
///
/// Stops at the first bar below the Class B threshold. An empty collection
/// classifies as Class B.
pub fn classify<'a, E, I>(reinforcement: I) -> DuctilityClass
where
    E: ReinforcementElement + 'a,
    I: IntoIterator<Item = &'a E>,
{
    for (index, element) in reinforcement.into_iter().enumerate() {
        let strain = element.ultimate_strain().abs();
        if strain < rules::CLASS_B_ULTIMATE_STRAIN {
            debug!(index, strain, "bar below Class B ultimate strain, section is Class A");
            return DuctilityClass::A;
        }
    }
    DuctilityClass::B
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bar(f64);

    impl ReinforcementElement for Bar {
        fn ultimate_strain(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_all_class_b_or_better() {
        let bars = [Bar(0.05), Bar(0.075), Bar(0.06)];
        assert_eq!(classify(&bars), DuctilityClass::B);
    }

    #[test]
    fn test_single_class_a_bar_downgrades() {
        let bars = [Bar(0.05), Bar(0.025), Bar(0.075)];
        assert_eq!(classify(&bars), DuctilityClass::A);
    }

    #[test]
    fn test_all_class_c_still_b() {
        let bars = [Bar(0.075), Bar(0.075)];
        assert_eq!(classify(&bars), DuctilityClass::B);
    }

    #[test]
    fn test_sign_of_strain_ignored() {
        assert_eq!(classify(&[Bar(-0.05)]), DuctilityClass::B);
        assert_eq!(classify(&[Bar(-0.025)]), DuctilityClass::A);
    }

    #[test]
    fn test_empty_is_class_b() {
        let bars: Vec<Bar> = Vec::new();
        assert_eq!(classify(&bars), DuctilityClass::B);
    }

    #[test]
    fn test_just_below_threshold() {
        assert_eq!(classify(&[Bar(0.0499999)]), DuctilityClass::A);
    }
}
