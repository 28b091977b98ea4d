//! Profile persistence. The plan itself is stored as (recipe name,
//! servings) pairs and re-resolved against the catalog on load, so the
//! stored file never duplicates catalog data.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::{PlanError, Result};
use crate::models::{DayPlan, MacroVector, Recipe, Selection};

/// One stored meal: the recipe's display name and chosen servings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedMeal {
    #[serde(rename = "Recipe")]
    pub recipe: String,

    #[serde(rename = "Servings")]
    pub servings: f64,
}

/// One stored day: a meal per slot, in Morning/Midday/Evening order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPlanDay {
    #[serde(rename = "Day")]
    pub day: u32,

    #[serde(rename = "Morning")]
    pub morning: SavedMeal,

    #[serde(rename = "Midday")]
    pub midday: SavedMeal,

    #[serde(rename = "Evening")]
    pub evening: SavedMeal,
}

/// The user's saved session: target, preferences, and the last plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "Target", default)]
    pub target: Option<MacroVector>,

    #[serde(rename = "Days", default)]
    pub days: Option<u32>,

    #[serde(rename = "Dislikes", default)]
    pub dislikes: Vec<String>,

    #[serde(rename = "LastPlan", default)]
    pub last_plan: Vec<SavedPlanDay>,
}

impl Profile {
    /// Record a plan for later reload.
    pub fn set_plan(&mut self, plan: &[DayPlan]) {
        fn meal(sel: &Selection) -> SavedMeal {
            SavedMeal {
                recipe: sel.recipe.name.clone(),
                servings: sel.servings,
            }
        }

        self.last_plan = plan
            .iter()
            .map(|day| SavedPlanDay {
                day: day.day,
                morning: meal(&day.morning),
                midday: meal(&day.midday),
                evening: meal(&day.evening),
            })
            .collect();
    }

    /// Rebuild the stored plan against `catalog`. Fails with
    /// `RecipeNotFound` when a stored name no longer resolves, rather
    /// than producing a day with a hole in it.
    pub fn resolve_plan(&self, catalog: &[Recipe]) -> Result<Vec<DayPlan>> {
        fn resolve(catalog: &[Recipe], meal: &SavedMeal) -> Result<Selection> {
            let recipe = catalog::find_by_name(catalog, &meal.recipe)
                .ok_or_else(|| PlanError::RecipeNotFound(meal.recipe.clone()))?;
            Ok(Selection::new(recipe.clone(), meal.servings))
        }

        self.last_plan
            .iter()
            .map(|day| {
                Ok(DayPlan::new(
                    day.day,
                    resolve(catalog, &day.morning)?,
                    resolve(catalog, &day.midday)?,
                    resolve(catalog, &day.evening)?,
                ))
            })
            .collect()
    }
}

/// Load a profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save a profile to a JSON file, pretty-printed.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &Profile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}
