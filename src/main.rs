use std::path::Path;

use clap::Parser;

use macro_meal_planner::cli::{Cli, Command};
use macro_meal_planner::error::Result;
use macro_meal_planner::interface::{
    display_grocery_list, display_plan, display_recipe_list, prompt_day_count, prompt_dislikes,
    prompt_manual_target, prompt_target_inputs, prompt_yes_no,
};
use macro_meal_planner::models::{MacroVector, Recipe};
use macro_meal_planner::planner::{build_plan, calculate_bmr, calculate_tdee, generate_target};
use macro_meal_planner::state::{Profile, load_profile, save_profile};
use macro_meal_planner::{catalog, grocery};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let recipes = load_catalog(cli.catalog.as_deref())?;

    match command {
        Command::Plan { days, grocery_csv } => {
            cmd_plan(&cli.file, &recipes, days, grocery_csv.as_deref())
        }
        Command::Target => cmd_target(&cli.file),
        Command::Recipes => {
            display_recipe_list(&recipes);
            Ok(())
        }
        Command::Last => cmd_last(&cli.file, &recipes),
    }
}

fn load_catalog(path: Option<&str>) -> Result<Vec<Recipe>> {
    match path {
        Some(p) => catalog::load(p),
        None => Ok(catalog::builtin()),
    }
}

fn load_or_default_profile(file_path: &str) -> Profile {
    if Path::new(file_path).exists() {
        load_profile(file_path).unwrap_or_default()
    } else {
        Profile::default()
    }
}

/// Build a plan from the profile's target (or a freshly entered one),
/// show it with the grocery list, and offer to save the session.
fn cmd_plan(
    file_path: &str,
    recipes: &[Recipe],
    days: Option<u32>,
    grocery_csv: Option<&str>,
) -> Result<()> {
    let mut profile = load_or_default_profile(file_path);

    let target = match profile.target {
        Some(saved) => {
            println!("Saved daily target: {}", saved);
            if prompt_yes_no("Use the saved target?", true)? {
                saved
            } else {
                prompt_manual_target()?
            }
        }
        None => {
            println!("No saved target. Enter one, or run 'target' to calculate it.");
            prompt_manual_target()?
        }
    };

    let days = match days {
        Some(d) => d,
        None => prompt_day_count(profile.days.unwrap_or(3))?,
    };

    let dislikes = if prompt_yes_no("Exclude any ingredients or recipes?", false)? {
        prompt_dislikes(recipes)?
    } else {
        profile.dislikes.clone()
    };

    let filtered: Vec<Recipe> = recipes
        .iter()
        .filter(|r| !r.contains_any(&dislikes))
        .cloned()
        .collect();

    let plan = build_plan(days, &target, &filtered)?;

    display_plan(&plan, &target);

    let items = grocery::consolidate(&plan);
    display_grocery_list(&items);

    if let Some(csv_path) = grocery_csv {
        grocery::write_csv(&items, Path::new(csv_path))?;
        println!("Grocery list written to {}", csv_path);
    }

    if prompt_yes_no("Save this plan to the profile?", true)? {
        profile.target = Some(target);
        profile.days = Some(days);
        profile.dislikes = dislikes;
        profile.set_plan(&plan);
        save_profile(file_path, &profile)?;
        println!("Profile saved to {}", file_path);
    }

    Ok(())
}

/// Interactive macro target calculation, saved to the profile.
fn cmd_target(file_path: &str) -> Result<()> {
    let (age, weight, height, sex, activity, goal) = prompt_target_inputs()?;

    let bmr = calculate_bmr(age, weight, height, sex);
    let tdee = calculate_tdee(bmr, activity);
    let target = generate_target(tdee, goal);

    println!();
    println!("BMR  : {:.0} kcal", bmr);
    println!("TDEE : {:.0} kcal ({})", tdee, activity.description());
    println!("Daily target ({}): {}", goal.description(), target);

    if prompt_yes_no("Save this target to the profile?", true)? {
        let mut profile = load_or_default_profile(file_path);
        profile.target = Some(target);
        save_profile(file_path, &profile)?;
        println!("Profile saved to {}", file_path);
    }

    Ok(())
}

/// Re-display the saved plan by resolving stored names against the catalog.
fn cmd_last(file_path: &str, recipes: &[Recipe]) -> Result<()> {
    if !Path::new(file_path).exists() {
        println!("No profile found at {}", file_path);
        return Ok(());
    }

    let profile = load_profile(file_path)?;
    if profile.last_plan.is_empty() {
        println!("No saved plan in the profile. Run 'plan' first.");
        return Ok(());
    }

    let plan = profile.resolve_plan(recipes)?;
    let target = profile.target.unwrap_or(MacroVector::zero());
    display_plan(&plan, &target);
    display_grocery_list(&grocery::consolidate(&plan));

    Ok(())
}
