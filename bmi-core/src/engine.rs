//! The BMI calculation itself
//!
//! Pure and stateless: raw text plus unit selectors in, value plus
//! category out. Errors never panic and have no separate channel; the
//! sentinel result (BMI 0.0, category Invalid) is the error signal.

use serde::{Deserialize, Serialize};

use crate::{BmiCategory, HeightUnit, WeightUnit};

/// One calculation request, constructed fresh per invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    pub weight_text: String,
    pub height_text: String,
    pub weight_unit: WeightUnit,
    pub height_unit: HeightUnit,
}

impl BmiInput {
    pub fn new(
        weight_text: impl Into<String>,
        height_text: impl Into<String>,
        weight_unit: WeightUnit,
        height_unit: HeightUnit,
    ) -> Self {
        BmiInput {
            weight_text: weight_text.into(),
            height_text: height_text.into(),
            weight_unit,
            height_unit,
        }
    }
}

/// Outcome of one calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    /// The sentinel result signaling unusable input
    pub fn invalid() -> Self {
        BmiResult {
            bmi: 0.0,
            category: BmiCategory::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.category != BmiCategory::Invalid
    }
}

/// Parse a decimal number, rejecting non-finite values
///
/// `f64::from_str` accepts "inf" and "NaN"; those are not usable
/// measurements, so they count as parse failures.
fn parse_finite(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Compute BMI and category from raw input.
///
/// Unparseable weight or height text, or a converted height that is not
/// strictly positive, yields [`BmiResult::invalid`]. A valid result is
/// always `weight_kg / (height_m * height_m)`.
pub fn calculate(input: &BmiInput) -> BmiResult {
    let (Some(weight), Some(height)) = (
        parse_finite(&input.weight_text),
        parse_finite(&input.height_text),
    ) else {
        return BmiResult::invalid();
    };

    let weight_kg = input.weight_unit.to_kilograms(weight);
    let height_m = input.height_unit.to_meters(height);

    if height_m <= 0.0 {
        return BmiResult::invalid();
    }

    let bmi = weight_kg / (height_m * height_m);
    let category = BmiCategory::classify(bmi);

    tracing::debug!(weight_kg, height_m, bmi, %category, "bmi computed");

    BmiResult { bmi, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn calc(w: &str, h: &str, wu: WeightUnit, hu: HeightUnit) -> BmiResult {
        calculate(&BmiInput::new(w, h, wu, hu))
    }

    #[test]
    fn test_metric_normal_weight() {
        let result = calc("70", "1.75", WeightUnit::Kilogram, HeightUnit::Meter);
        assert!((result.bmi - 22.857142857142858).abs() < 1e-3);
        assert_eq!(result.category, BmiCategory::NormalWeight);
    }

    #[test]
    fn test_imperial_normal_weight() {
        // 154 lb ≈ 69.853 kg, 70 in = 1.778 m
        let result = calc("154", "70", WeightUnit::Pound, HeightUnit::Inch);
        assert!((result.bmi - 22.10).abs() < 0.01, "got {}", result.bmi);
        assert_eq!(result.category, BmiCategory::NormalWeight);
    }

    #[test]
    fn test_centimeters_underweight() {
        let result = calc("45", "170", WeightUnit::Kilogram, HeightUnit::Centimeter);
        assert!((result.bmi - 15.57).abs() < 0.01, "got {}", result.bmi);
        assert_eq!(result.category, BmiCategory::Underweight);
    }

    #[test]
    fn test_unparseable_weight_is_sentinel() {
        let result = calc("seventy", "1.75", WeightUnit::Kilogram, HeightUnit::Meter);
        assert_eq!(result, BmiResult::invalid());
    }

    #[test]
    fn test_unparseable_height_is_sentinel() {
        let result = calc("70", "", WeightUnit::Kilogram, HeightUnit::Meter);
        assert_eq!(result, BmiResult::invalid());
        assert!(!result.is_valid());
    }

    #[test]
    fn test_non_finite_text_is_sentinel() {
        assert_eq!(
            calc("inf", "1.75", WeightUnit::Kilogram, HeightUnit::Meter),
            BmiResult::invalid()
        );
        assert_eq!(
            calc("70", "NaN", WeightUnit::Kilogram, HeightUnit::Meter),
            BmiResult::invalid()
        );
    }

    #[test]
    fn test_zero_height_is_sentinel() {
        let result = calc("70", "0", WeightUnit::Kilogram, HeightUnit::Meter);
        assert_eq!(result, BmiResult::invalid());
    }

    #[test]
    fn test_negative_height_is_sentinel() {
        for unit in HeightUnit::ALL {
            let result = calc("70", "-1.75", WeightUnit::Kilogram, unit);
            assert_eq!(result, BmiResult::invalid());
        }
    }

    #[test]
    fn test_positive_inputs_always_valid() {
        for weight_unit in WeightUnit::ALL {
            for height_unit in HeightUnit::ALL {
                let result = calc("80", "1.8", weight_unit, height_unit);
                assert!(result.is_valid(), "{:?}/{:?}", weight_unit, height_unit);
                assert!(result.bmi > 0.0);
            }
        }
    }

    #[test]
    fn test_pound_matches_kilogram_equivalent() {
        let lb = calc("150", "1", WeightUnit::Pound, HeightUnit::Meter);
        let kg = calc(
            &format!("{}", 150.0 * 0.453592),
            "1",
            WeightUnit::Kilogram,
            HeightUnit::Meter,
        );
        assert!((lb.bmi - kg.bmi).abs() < EPS);
        assert_eq!(lb.category, kg.category);
    }

    #[test]
    fn test_lower_boundary_is_inclusive() {
        // 18.5 kg over 1 m² sits exactly on the boundary
        let result = calc("18.5", "1", WeightUnit::Kilogram, HeightUnit::Meter);
        assert_eq!(result.category, BmiCategory::NormalWeight);

        let below = calc("18.49", "1", WeightUnit::Kilogram, HeightUnit::Meter);
        assert_eq!(below.category, BmiCategory::Underweight);
    }

    #[test]
    fn test_idempotent() {
        let input = BmiInput::new("70", "1.75", WeightUnit::Kilogram, HeightUnit::Meter);
        let a = calculate(&input);
        let b = calculate(&input);
        assert_eq!(a, b);
    }

    #[test]
    fn test_negative_weight_classifies_as_underweight() {
        // Only height is guarded; a negative weight yields a negative BMI
        let result = calc("-70", "1.75", WeightUnit::Kilogram, HeightUnit::Meter);
        assert!(result.bmi < 0.0);
        assert_eq!(result.category, BmiCategory::Underweight);
    }
}
