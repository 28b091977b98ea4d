use std::fmt;

use serde::{Deserialize, Serialize};

/// A macro-nutrient quantity: energy plus the three macros.
///
/// Purely arithmetic value type. Subtraction may produce negative
/// components; deltas are meaningful, so nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroVector {
    #[serde(rename = "Calories")]
    pub calories: f64,

    #[serde(rename = "Protein")]
    pub protein: f64,

    #[serde(rename = "Carbs")]
    pub carbs: f64,

    #[serde(rename = "Fat")]
    pub fat: f64,
}

impl MacroVector {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// The zero vector, the identity for `add`.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Component-wise sum, returning a new vector.
    pub fn add(&self, other: &MacroVector) -> MacroVector {
        MacroVector::new(
            self.calories + other.calories,
            self.protein + other.protein,
            self.carbs + other.carbs,
            self.fat + other.fat,
        )
    }

    /// Component-wise difference, returning a new vector.
    pub fn subtract(&self, other: &MacroVector) -> MacroVector {
        MacroVector::new(
            self.calories - other.calories,
            self.protein - other.protein,
            self.carbs - other.carbs,
            self.fat - other.fat,
        )
    }

    /// Scale every component by `factor`, returning a new vector.
    pub fn scale(&self, factor: f64) -> MacroVector {
        MacroVector::new(
            self.calories * factor,
            self.protein * factor,
            self.carbs * factor,
            self.fat * factor,
        )
    }
}

impl fmt::Display for MacroVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0} kcal | P {:.0}g | C {:.0}g | F {:.0}g",
            self.calories, self.protein, self.carbs, self.fat
        )
    }
}
