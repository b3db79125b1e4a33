//! BMI classification buckets and their display colors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification bucket a BMI value falls into
///
/// `Invalid` is the sentinel for unusable input; `classify` never produces
/// it, only the engine's input guards do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
    Invalid,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 5] = [
        BmiCategory::Underweight,
        BmiCategory::NormalWeight,
        BmiCategory::Overweight,
        BmiCategory::Obese,
        BmiCategory::Invalid,
    ];

    /// Classify a BMI value.
    ///
    /// The partition is half-open and evaluated in order, so the
    /// boundaries 18.5, 25 and 30 each belong to the upper bucket.
    pub fn classify(bmi: f64) -> BmiCategory {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
            BmiCategory::Invalid => "Invalid",
        }
    }

    /// Display color for this category
    pub fn color(&self) -> CategoryColor {
        match self {
            BmiCategory::Underweight => CategoryColor::Blue,
            BmiCategory::NormalWeight => CategoryColor::Green,
            BmiCategory::Overweight => CategoryColor::Orange,
            BmiCategory::Obese => CategoryColor::Red,
            BmiCategory::Invalid => CategoryColor::Gray,
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Color associated with a category, for gauge and label rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    Blue,
    Green,
    Orange,
    Red,
    Gray,
}

impl fmt::Display for CategoryColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CategoryColor::Blue => "blue",
            CategoryColor::Green => "green",
            CategoryColor::Orange => "orange",
            CategoryColor::Red => "red",
            CategoryColor::Gray => "gray",
        };
        write!(f, "{}", name)
    }
}
