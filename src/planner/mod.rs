pub mod builder;
pub mod constants;
pub mod optimizer;
pub mod targets;

pub use builder::build_plan;
pub use constants::*;
pub use optimizer::pick_best;
pub use targets::{ActivityLevel, Goal, Sex, calculate_bmr, calculate_tdee, generate_target};
