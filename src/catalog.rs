//! The built-in recipe library, plus loading a user-authored catalog
//! from JSON. Recipes are constructed once and shared read-only.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{Ingredient, MacroVector, MealSlot, Recipe};

fn recipe(
    name: &str,
    slot: MealSlot,
    cal: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    ingredients: &[(&str, &str, f64)],
) -> Recipe {
    Recipe::new(
        name,
        slot,
        MacroVector::new(cal, protein, carbs, fat),
        ingredients
            .iter()
            .map(|(n, u, q)| Ingredient::new(n, u, *q))
            .collect(),
    )
}

/// The built-in library. Every slot has multiple recipes, so the
/// planner's non-empty-category precondition always holds for an
/// unfiltered catalog.
pub fn builtin() -> Vec<Recipe> {
    vec![
        // Breakfast
        recipe(
            "Oats with Milk & Banana",
            MealSlot::Morning,
            370.0,
            14.0,
            62.0,
            7.0,
            &[("oats", "g", 60.0), ("milk", "ml", 200.0), ("banana", "pc", 1.0)],
        ),
        recipe(
            "Greek Yogurt & Berries",
            MealSlot::Morning,
            250.0,
            17.0,
            30.0,
            6.0,
            &[
                ("greek yogurt", "g", 170.0),
                ("mixed berries", "g", 100.0),
                ("honey", "g", 10.0),
            ],
        ),
        recipe(
            "Protein Smoothie (Banana)",
            MealSlot::Morning,
            450.0,
            35.0,
            45.0,
            12.0,
            &[
                ("greek yogurt", "g", 150.0),
                ("milk", "ml", 250.0),
                ("banana", "pc", 1.0),
                ("peanut butter", "g", 20.0),
                ("protein powder", "g", 30.0),
            ],
        ),
        recipe(
            "Avocado Toast with Eggs",
            MealSlot::Morning,
            420.0,
            18.0,
            35.0,
            22.0,
            &[
                ("whole grain bread", "slices", 2.0),
                ("avocado", "pc", 1.0),
                ("eggs", "pc", 2.0),
                ("olive oil", "ml", 5.0),
            ],
        ),
        recipe(
            "Scrambled Eggs and Toast",
            MealSlot::Morning,
            380.0,
            24.0,
            28.0,
            18.0,
            &[
                ("eggs", "pc", 3.0),
                ("whole grain bread", "slices", 2.0),
                ("butter", "g", 10.0),
                ("milk", "ml", 30.0),
                ("cheese", "g", 20.0),
            ],
        ),
        // Lunch
        recipe(
            "Chicken & Rice Bowl",
            MealSlot::Midday,
            520.0,
            42.0,
            58.0,
            12.0,
            &[
                ("chicken breast", "g", 150.0),
                ("rice (cooked)", "g", 150.0),
                ("broccoli", "g", 100.0),
                ("olive oil", "ml", 10.0),
            ],
        ),
        recipe(
            "Tuna Pasta",
            MealSlot::Midday,
            600.0,
            35.0,
            70.0,
            16.0,
            &[
                ("pasta", "g", 120.0),
                ("tuna", "g", 120.0),
                ("olive oil", "ml", 10.0),
                ("tomato sauce", "g", 80.0),
            ],
        ),
        recipe(
            "Salmon Quinoa Salad",
            MealSlot::Midday,
            580.0,
            38.0,
            42.0,
            26.0,
            &[
                ("salmon fillet", "g", 150.0),
                ("mixed greens", "g", 100.0),
                ("quinoa (cooked)", "g", 100.0),
                ("olive oil", "ml", 15.0),
                ("lemon", "pc", 0.5),
            ],
        ),
        recipe(
            "Mediterranean Chicken Wrap",
            MealSlot::Midday,
            520.0,
            38.0,
            48.0,
            18.0,
            &[
                ("chicken breast", "g", 120.0),
                ("whole wheat tortilla", "pc", 1.0),
                ("hummus", "g", 40.0),
                ("vegetables", "g", 80.0),
                ("feta cheese", "g", 30.0),
            ],
        ),
        recipe(
            "Burrito Bowl",
            MealSlot::Midday,
            650.0,
            35.0,
            82.0,
            18.0,
            &[
                ("chicken breast", "g", 120.0),
                ("rice (cooked)", "g", 200.0),
                ("black beans", "g", 100.0),
                ("corn", "g", 50.0),
                ("salsa", "g", 50.0),
                ("avocado", "pc", 0.5),
                ("sour cream", "g", 20.0),
            ],
        ),
        // Dinner
        recipe(
            "Stir-Fry Tofu & Veg",
            MealSlot::Evening,
            450.0,
            24.0,
            40.0,
            18.0,
            &[
                ("tofu", "g", 150.0),
                ("mixed vegetables", "g", 200.0),
                ("soy sauce", "ml", 15.0),
                ("sesame oil", "ml", 10.0),
                ("rice (cooked)", "g", 100.0),
            ],
        ),
        recipe(
            "Beef & Sweet Potato",
            MealSlot::Evening,
            550.0,
            38.0,
            50.0,
            18.0,
            &[
                ("beef", "g", 150.0),
                ("sweet potato", "g", 250.0),
                ("spinach", "g", 80.0),
                ("olive oil", "ml", 10.0),
            ],
        ),
        recipe(
            "Turkey Chili",
            MealSlot::Evening,
            620.0,
            45.0,
            45.0,
            20.0,
            &[
                ("turkey mince", "g", 200.0),
                ("kidney beans", "g", 120.0),
                ("tomato sauce", "g", 200.0),
                ("onion", "g", 80.0),
                ("olive oil", "ml", 10.0),
            ],
        ),
        recipe(
            "Lentil Bolognese Pasta",
            MealSlot::Evening,
            640.0,
            28.0,
            100.0,
            14.0,
            &[
                ("pasta", "g", 120.0),
                ("lentils (cooked)", "g", 120.0),
                ("tomato sauce", "g", 150.0),
                ("olive oil", "ml", 10.0),
                ("onion", "g", 60.0),
            ],
        ),
        recipe(
            "Salmon with Quinoa",
            MealSlot::Evening,
            650.0,
            42.0,
            55.0,
            28.0,
            &[
                ("salmon fillet", "g", 180.0),
                ("quinoa (cooked)", "g", 150.0),
                ("asparagus", "g", 150.0),
                ("olive oil", "ml", 12.0),
                ("lemon", "pc", 0.5),
            ],
        ),
        recipe(
            "Chicken Thighs with Rice",
            MealSlot::Evening,
            600.0,
            40.0,
            60.0,
            22.0,
            &[
                ("chicken thighs", "g", 180.0),
                ("brown rice (cooked)", "g", 150.0),
                ("green beans", "g", 120.0),
                ("olive oil", "ml", 10.0),
            ],
        ),
    ]
}

/// Load a catalog from a JSON file, deduplicating by lowercase name.
/// The first occurrence wins, so catalog order stays stable for the
/// entries that survive.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;

    let mut seen: Vec<Recipe> = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        if !seen.iter().any(|r| r.matches_name(&recipe)) {
            seen.push(recipe);
        }
    }

    Ok(seen)
}

/// Find a recipe by name, case-insensitively.
pub fn find_by_name<'a>(catalog: &'a [Recipe], name: &str) -> Option<&'a Recipe> {
    catalog.iter().find(|r| r.name.eq_ignore_ascii_case(name))
}
