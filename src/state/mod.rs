mod persistence;

pub use persistence::{Profile, SavedMeal, SavedPlanDay, load_profile, save_profile};
