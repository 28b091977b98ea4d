use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{MacroVector, Recipe};
use crate::planner::targets::{ActivityLevel, Goal, Sex};

fn parse_f64(input: &str) -> Result<f64> {
    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for how many days to plan.
pub fn prompt_day_count(default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many days should the plan cover?")
        .default(default.to_string())
        .interact_text()?;

    let days: u32 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid day count".to_string()))?;

    if days < 1 {
        return Err(PlanError::InvalidDayCount(days as i64));
    }

    Ok(days)
}

/// Prompt for a daily macro target entered by hand.
pub fn prompt_manual_target() -> Result<MacroVector> {
    let calories: String = Input::new()
        .with_prompt("Daily calories (kcal)")
        .default("2200".to_string())
        .interact_text()?;
    let protein: String = Input::new()
        .with_prompt("Daily protein (g)")
        .default("120".to_string())
        .interact_text()?;
    let carbs: String = Input::new()
        .with_prompt("Daily carbs (g)")
        .default("250".to_string())
        .interact_text()?;
    let fat: String = Input::new()
        .with_prompt("Daily fat (g)")
        .default("70".to_string())
        .interact_text()?;

    Ok(MacroVector::new(
        parse_f64(&calories)?,
        parse_f64(&protein)?,
        parse_f64(&carbs)?,
        parse_f64(&fat)?,
    ))
}

/// Collect the inputs for the target calculator.
pub fn prompt_target_inputs() -> Result<(u32, f64, f64, Sex, ActivityLevel, Goal)> {
    let age: String = Input::new().with_prompt("Age (years)").interact_text()?;
    let age: u32 = age
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid age".to_string()))?;

    let weight: String = Input::new().with_prompt("Weight (kg)").interact_text()?;
    let height: String = Input::new().with_prompt("Height (cm)").interact_text()?;

    let sex = match Select::new()
        .with_prompt("Sex")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?
    {
        0 => Sex::Male,
        _ => Sex::Female,
    };

    let activity_options: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.description()).collect();
    let activity = ActivityLevel::ALL[Select::new()
        .with_prompt("Activity level")
        .items(&activity_options)
        .default(0)
        .interact()?];

    let goal_options: Vec<&str> = Goal::ALL.iter().map(|g| g.description()).collect();
    let goal = Goal::ALL[Select::new()
        .with_prompt("Goal")
        .items(&goal_options)
        .default(0)
        .interact()?];

    Ok((age, parse_f64(&weight)?, parse_f64(&height)?, sex, activity, goal))
}

/// Collect dislike keywords with fuzzy matching against catalog recipe
/// and ingredient names. Free text is accepted as-is when nothing in
/// the catalog is close; near-misses are confirmed or disambiguated.
pub fn prompt_dislikes(catalog: &[Recipe]) -> Result<Vec<String>> {
    let mut known: Vec<String> = Vec::new();
    for recipe in catalog {
        for ingredient in &recipe.ingredients {
            let name = ingredient.name.to_lowercase();
            if !known.contains(&name) {
                known.push(name);
            }
        }
    }

    let mut dislikes = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Ingredient or recipe to avoid (press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim().to_lowercase();
        if input.is_empty() {
            break;
        }

        if known.contains(&input) {
            println!("Avoiding: {}", input);
            dislikes.push(input);
            continue;
        }

        let mut candidates: Vec<(&String, f64)> = known
            .iter()
            .map(|name| (name, jaro_winkler(name, &input)))
            .filter(|(_, score)| *score > 0.7)
            .collect();
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("Avoiding: {}", input);
            dislikes.push(input);
            continue;
        }

        if candidates.len() == 1 {
            let name = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", name))
                .default(true)
                .interact()?;

            let chosen = if confirm { name.clone() } else { input };
            println!("Avoiding: {}", chosen);
            dislikes.push(chosen);
        } else {
            let options: Vec<String> = candidates.iter().take(5).map(|(n, _)| (*n).clone()).collect();
            let mut selection_options = options.clone();
            selection_options.push(format!("Keep '{}' as typed", input));

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            let chosen = if selection < options.len() {
                options[selection].clone()
            } else {
                input
            };
            println!("Avoiding: {}", chosen);
            dislikes.push(chosen);
        }
    }

    Ok(dislikes)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
