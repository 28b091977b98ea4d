pub mod catalog;
pub mod cli;
pub mod error;
pub mod grocery;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PlanError, Result};
pub use models::{DayPlan, Ingredient, MacroVector, MealSlot, Recipe, Selection};
