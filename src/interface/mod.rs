pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_day_count, prompt_dislikes, prompt_manual_target, prompt_target_inputs, prompt_yes_no,
};
pub use render::{display_grocery_list, display_plan, display_recipe_list};
