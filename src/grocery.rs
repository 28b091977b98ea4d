//! Consolidated grocery list: every selection's scaled ingredients
//! across the whole plan, summed by name and unit, grouped into store
//! sections for shopping.

use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::models::DayPlan;

/// Store section an ingredient belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreSection {
    Produce,
    Bakery,
    Meat,
    Dairy,
    Frozen,
    Pantry,
    Condiments,
}

impl StoreSection {
    /// Sections in typical store-layout order.
    pub const SHOPPING_ORDER: [StoreSection; 7] = [
        StoreSection::Produce,
        StoreSection::Bakery,
        StoreSection::Meat,
        StoreSection::Dairy,
        StoreSection::Frozen,
        StoreSection::Pantry,
        StoreSection::Condiments,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StoreSection::Produce => "Produce",
            StoreSection::Bakery => "Bakery",
            StoreSection::Meat => "Meat & Seafood",
            StoreSection::Dairy => "Dairy & Eggs",
            StoreSection::Frozen => "Frozen",
            StoreSection::Pantry => "Pantry & Dry Goods",
            StoreSection::Condiments => "Condiments & Sauces",
        }
    }
}

impl fmt::Display for StoreSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const PRODUCE: &[&str] = &[
    "banana",
    "mixed berries",
    "broccoli",
    "mixed vegetables",
    "sweet potato",
    "spinach",
    "avocado",
    "mixed greens",
    "onion",
    "lemon",
    "vegetables",
    "asparagus",
    "green beans",
    "tomato",
    "corn",
];

const MEAT: &[&str] = &[
    "chicken breast",
    "tuna",
    "tofu",
    "beef",
    "turkey mince",
    "salmon fillet",
    "chicken thighs",
    "chickpeas",
    "shrimp",
    "lentils (cooked)",
];

const DAIRY: &[&str] = &[
    "milk",
    "greek yogurt",
    "eggs",
    "butter",
    "cheese",
    "feta cheese",
    "cream cheese",
    "sour cream",
    "parmesan",
];

const BAKERY: &[&str] = &[
    "whole grain bread",
    "bread slices",
    "whole wheat tortilla",
    "bagel",
];

const CONDIMENTS: &[&str] = &[
    "olive oil",
    "tomato sauce",
    "soy sauce",
    "sesame oil",
    "hummus",
    "maple syrup",
    "teriyaki sauce",
    "salsa",
];

/// Map an ingredient name to its store section. Anything unrecognized
/// lands in the pantry.
pub fn categorize(ingredient_name: &str) -> StoreSection {
    let name = ingredient_name.to_lowercase();
    let name = name.trim();

    if PRODUCE.contains(&name) {
        StoreSection::Produce
    } else if MEAT.contains(&name) {
        StoreSection::Meat
    } else if DAIRY.contains(&name) {
        StoreSection::Dairy
    } else if BAKERY.contains(&name) {
        StoreSection::Bakery
    } else if CONDIMENTS.contains(&name) {
        StoreSection::Condiments
    } else {
        StoreSection::Pantry
    }
}

/// One consolidated grocery line.
#[derive(Debug, Clone)]
pub struct GroceryItem {
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub section: StoreSection,
}

impl GroceryItem {
    /// Quantity with the trailing .0 dropped for whole amounts.
    pub fn formatted_quantity(&self) -> String {
        if self.quantity == self.quantity.floor() {
            format!("{:.0} {}", self.quantity, self.unit)
        } else {
            format!("{:.1} {}", self.quantity, self.unit)
        }
    }
}

/// Flatten every selection's scaled ingredient list across all days,
/// summing quantities by lowercase name + unit. First-seen order is
/// preserved so the list is stable for a given plan.
pub fn consolidate(plan: &[DayPlan]) -> Vec<GroceryItem> {
    let mut items: Vec<GroceryItem> = Vec::new();

    for day in plan {
        for ingredient in day.all_ingredients() {
            let key_name = ingredient.name.to_lowercase();
            let existing = items
                .iter_mut()
                .find(|i| i.name.to_lowercase() == key_name && i.unit == ingredient.unit);

            match existing {
                Some(item) => item.quantity += ingredient.quantity,
                None => items.push(GroceryItem {
                    section: categorize(&ingredient.name),
                    name: ingredient.name,
                    unit: ingredient.unit,
                    quantity: ingredient.quantity,
                }),
            }
        }
    }

    items
}

/// Write the consolidated list to a CSV file, section by section in
/// shopping order.
pub fn write_csv(items: &[GroceryItem], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["section", "ingredient", "quantity", "unit"])?;

    for section in StoreSection::SHOPPING_ORDER {
        for item in items.iter().filter(|i| i.section == section) {
            wtr.write_record([
                section.label().to_string(),
                item.name.clone(),
                format!("{:.1}", item.quantity),
                item.unit.clone(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
