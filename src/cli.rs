use clap::{Parser, Subcommand};

/// Macro Meal Planner: fits recipes and serving sizes to daily macro targets.
#[derive(Parser, Debug)]
#[command(name = "macro_meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the profile JSON file.
    #[arg(short, long, default_value = "meal_profile.json")]
    pub file: String,

    /// Path to a catalog JSON file (defaults to the built-in library).
    #[arg(short, long)]
    pub catalog: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a meal plan against the daily macro target.
    Plan {
        /// Number of days to plan (prompted when omitted).
        #[arg(short, long)]
        days: Option<u32>,

        /// Write the grocery list to a CSV file.
        #[arg(long)]
        grocery_csv: Option<String>,
    },

    /// Calculate a daily macro target and save it to the profile.
    Target,

    /// List the recipe catalog.
    Recipes,

    /// Re-display the last saved plan.
    Last,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            days: None,
            grocery_csv: None,
        }
    }
}
