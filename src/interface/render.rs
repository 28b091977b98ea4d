use crate::grocery::{GroceryItem, StoreSection};
use crate::models::{DayPlan, MacroVector, MealSlot, Recipe};

const BAR_WIDTH: usize = 20;

/// A fill bar showing `value` against `target`, capped at 100%.
fn bar(value: f64, target: f64) -> String {
    if target <= 0.0 {
        return format!("[{}] 0%", "-".repeat(BAR_WIDTH));
    }
    let ratio = (value / target).min(1.0);
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        ratio * 100.0
    )
}

fn progress_lines(consumed: &MacroVector, target: &MacroVector) {
    println!("Calories {}", bar(consumed.calories, target.calories));
    println!("Protein  {}", bar(consumed.protein, target.protein));
    println!("Carbs    {}", bar(consumed.carbs, target.carbs));
    println!("Fat      {}", bar(consumed.fat, target.fat));
}

/// Render the plan day by day with consumed-vs-target macros, then the
/// average daily macros across the whole plan.
pub fn display_plan(plan: &[DayPlan], target: &MacroVector) {
    if plan.is_empty() {
        println!("No plan to display.");
        return;
    }

    println!();
    println!("==================================================");
    println!("                    MEAL PLAN");
    println!("==================================================");

    let mut total = MacroVector::zero();

    for day in plan {
        let daily = day.daily_macros();
        total = total.add(&daily);

        println!();
        println!("--------------- DAY {} ---------------", day.day);
        for slot in MealSlot::ALL {
            let sel = day.selection(slot);
            println!("{:<10}: {:<28} (x{:.1})", slot.label(), sel.recipe.name, sel.servings);
        }
        println!();
        println!("Consumed : {}", daily);
        println!("Target   : {}", target);
        println!();
        progress_lines(&daily, target);
    }

    let avg = total.scale(1.0 / plan.len() as f64);
    println!();
    println!("=== AVERAGE DAILY MACROS ===");
    println!("{}", avg);
    progress_lines(&avg, target);
    println!();
}

/// Render the consolidated grocery list grouped by store section.
pub fn display_grocery_list(items: &[GroceryItem]) {
    println!();
    println!("==================================================");
    println!("              CONSOLIDATED GROCERY");
    println!("==================================================");

    if items.is_empty() {
        println!("(No items)");
        return;
    }

    for section in StoreSection::SHOPPING_ORDER {
        let in_section: Vec<&GroceryItem> =
            items.iter().filter(|i| i.section == section).collect();
        if in_section.is_empty() {
            continue;
        }

        println!();
        println!("{}", section.label());
        println!("{}", "-".repeat(40));
        for item in in_section {
            println!("  {:<28} {}", item.name, item.formatted_quantity());
        }
    }
    println!();
}

/// Render the catalog grouped by slot.
pub fn display_recipe_list(catalog: &[Recipe]) {
    println!();
    for slot in MealSlot::ALL {
        let in_slot: Vec<&Recipe> = catalog.iter().filter(|r| r.slot == slot).collect();
        println!("=== {} ({} recipes) ===", slot.label(), in_slot.len());
        for recipe in in_slot {
            println!("  {} | {}", recipe.name, recipe.macros);
        }
        println!();
    }
}
