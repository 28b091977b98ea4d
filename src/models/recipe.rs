use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::MacroVector;

/// The meal period a recipe is tagged for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    Morning,
    Midday,
    Evening,
}

impl MealSlot {
    /// All slots in the order a day is planned.
    pub const ALL: [MealSlot; 3] = [MealSlot::Morning, MealSlot::Midday, MealSlot::Evening];

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Morning => "Breakfast",
            MealSlot::Midday => "Lunch",
            MealSlot::Evening => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One ingredient line of a recipe, quantified per base serving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Unit")]
    pub unit: String,

    #[serde(rename = "Quantity")]
    pub quantity: f64,
}

impl Ingredient {
    pub fn new(name: &str, unit: &str, quantity: f64) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            quantity,
        }
    }

    /// A copy with the quantity multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Ingredient {
        Ingredient {
            name: self.name.clone(),
            unit: self.unit.clone(),
            quantity: self.quantity * factor,
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.1} {}", self.name, self.quantity, self.unit)
    }
}

/// A recipe with macros and ingredients declared per `base_servings`.
///
/// Shared read-only across every optimizer invocation; all scaling
/// produces new values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Slot")]
    pub slot: MealSlot,

    #[serde(flatten)]
    pub macros: MacroVector,

    /// Serving count the declared macros and quantities refer to. Must be > 0.
    #[serde(rename = "BaseServings", default = "default_base_servings")]
    pub base_servings: f64,

    #[serde(rename = "Ingredients", default)]
    pub ingredients: Vec<Ingredient>,
}

fn default_base_servings() -> f64 {
    1.0
}

impl Recipe {
    pub fn new(
        name: &str,
        slot: MealSlot,
        macros: MacroVector,
        ingredients: Vec<Ingredient>,
    ) -> Self {
        Self {
            name: name.to_string(),
            slot,
            macros,
            base_servings: 1.0,
            ingredients,
        }
    }

    /// Macros scaled to `servings`, relative to the base serving count.
    pub fn macros_for(&self, servings: f64) -> MacroVector {
        self.macros.scale(servings / self.base_servings)
    }

    /// Ingredients scaled to `servings`, in declaration order.
    pub fn ingredients_for(&self, servings: f64) -> Vec<Ingredient> {
        let factor = servings / self.base_servings;
        self.ingredients.iter().map(|i| i.scaled(factor)).collect()
    }

    /// Case-insensitive name equality. Identity for the repeat penalty,
    /// never for slot filtering.
    pub fn matches_name(&self, other: &Recipe) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }

    /// Whether any keyword appears in the recipe name or an ingredient name.
    pub fn contains_any(&self, keywords: &[String]) -> bool {
        keywords.iter().any(|k| {
            let k = k.to_lowercase();
            !k.is_empty()
                && (self.name.to_lowercase().contains(&k)
                    || self
                        .ingredients
                        .iter()
                        .any(|i| i.name.to_lowercase().contains(&k)))
        })
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.slot, self.macros)
    }
}
