mod macros;
mod plan;
mod recipe;

pub use macros::MacroVector;
pub use plan::{DayPlan, Selection};
pub use recipe::{Ingredient, MealSlot, Recipe};
