//! Body mass index calculator

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    fn from_value(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "Underweight"),
            BmiCategory::Normal => write!(f, "Normal weight"),
            BmiCategory::Overweight => write!(f, "Overweight"),
            BmiCategory::Obese => write!(f, "Obese"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bmi {
    /// Rounded to one decimal place
    pub value: f64,
    pub category: BmiCategory,
}

/// BMI from weight in kilograms and height in centimetres.
/// Returns `None` unless both are positive and finite.
pub fn calculate(weight_kg: f64, height_cm: f64) -> Option<Bmi> {
    if !(weight_kg.is_finite() && height_cm.is_finite()) || weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);

    // category comes from the unrounded value so 24.96 stays Normal
    Some(Bmi {
        value: (bmi * 10.0).round() / 10.0,
        category: BmiCategory::from_value(bmi),
    })
}

/// Same as [`calculate`] but from raw form text
pub fn calculate_from_input(weight: &str, height: &str) -> Option<Bmi> {
    let weight = weight.trim().parse::<f64>().ok()?;
    let height = height.trim().parse::<f64>().ok()?;
    calculate(weight, height)
}
