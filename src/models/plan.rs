use std::fmt;

use crate::models::{Ingredient, MacroVector, MealSlot, Recipe};

/// A recipe chosen for one slot, with its serving multiplier.
///
/// Macros and ingredients are derived on demand, never stored.
#[derive(Debug, Clone)]
pub struct Selection {
    pub recipe: Recipe,
    pub servings: f64,
}

impl Selection {
    pub fn new(recipe: Recipe, servings: f64) -> Self {
        Self { recipe, servings }
    }

    pub fn macros(&self) -> MacroVector {
        self.recipe.macros_for(self.servings)
    }

    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.recipe.ingredients_for(self.servings)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (x{:.1})", self.recipe.name, self.servings)
    }
}

/// One planned day: a selection for each of the three slots.
#[derive(Debug, Clone)]
pub struct DayPlan {
    /// 1-based position in the plan.
    pub day: u32,
    pub morning: Selection,
    pub midday: Selection,
    pub evening: Selection,
}

impl DayPlan {
    pub fn new(day: u32, morning: Selection, midday: Selection, evening: Selection) -> Self {
        Self {
            day,
            morning,
            midday,
            evening,
        }
    }

    pub fn selection(&self, slot: MealSlot) -> &Selection {
        match slot {
            MealSlot::Morning => &self.morning,
            MealSlot::Midday => &self.midday,
            MealSlot::Evening => &self.evening,
        }
    }

    pub fn selections(&self) -> [&Selection; 3] {
        [&self.morning, &self.midday, &self.evening]
    }

    /// Sum of the three selections' macros.
    pub fn daily_macros(&self) -> MacroVector {
        self.selections()
            .iter()
            .fold(MacroVector::zero(), |acc, s| acc.add(&s.macros()))
    }

    /// Every scaled ingredient for the day, slot order then declaration order.
    pub fn all_ingredients(&self) -> Vec<Ingredient> {
        self.selections()
            .iter()
            .flat_map(|s| s.ingredients())
            .collect()
    }
}
