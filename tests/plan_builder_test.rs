use macro_meal_planner::catalog;
use macro_meal_planner::models::{MacroVector, MealSlot, Recipe};
use macro_meal_planner::planner::build_plan;
use macro_meal_planner::PlanError;

fn recipe(name: &str, slot: MealSlot, cal: f64, p: f64, c: f64, f: f64) -> Recipe {
    Recipe::new(name, slot, MacroVector::new(cal, p, c, f), Vec::new())
}

/// A catalog with one filler recipe for Midday and Evening, plus the
/// given Morning recipes, so only the Morning slot is under test.
fn morning_catalog(morning: Vec<Recipe>) -> Vec<Recipe> {
    let mut catalog = morning;
    catalog.push(recipe("Lunch Filler", MealSlot::Midday, 480.0, 32.0, 40.0, 12.0));
    catalog.push(recipe("Dinner Filler", MealSlot::Evening, 420.0, 28.0, 35.0, 10.5));
    catalog
}

#[test]
fn test_plan_has_requested_length_with_contiguous_days() {
    let target = MacroVector::new(2200.0, 120.0, 250.0, 70.0);
    let plan = build_plan(5, &target, &catalog::builtin()).unwrap();

    assert_eq!(plan.len(), 5);
    for (i, day) in plan.iter().enumerate() {
        assert_eq!(day.day, i as u32 + 1);
    }
}

#[test]
fn test_all_servings_stay_on_the_grid() {
    let target = MacroVector::new(2600.0, 150.0, 280.0, 85.0);
    let plan = build_plan(5, &target, &catalog::builtin()).unwrap();

    let grid = [1.0, 1.5, 2.0, 2.5, 3.0];
    for day in &plan {
        for slot in MealSlot::ALL {
            let servings = day.selection(slot).servings;
            assert!(
                grid.contains(&servings),
                "day {} {} servings {} off grid",
                day.day,
                slot,
                servings
            );
        }
    }
}

#[test]
fn test_identical_inputs_give_identical_plans() {
    let target = MacroVector::new(1900.0, 110.0, 200.0, 60.0);
    let catalog = catalog::builtin();

    let a = build_plan(4, &target, &catalog).unwrap();
    let b = build_plan(4, &target, &catalog).unwrap();

    for (da, db) in a.iter().zip(&b) {
        for slot in MealSlot::ALL {
            assert_eq!(da.selection(slot).recipe.name, db.selection(slot).recipe.name);
            assert_eq!(da.selection(slot).servings, db.selection(slot).servings);
        }
    }
}

#[test]
fn test_exact_match_picks_single_serving() {
    // Morning sub-target is 25% of the daily target: exactly this
    // recipe at 1.0x, so any other serving scores worse.
    let catalog = morning_catalog(vec![recipe(
        "Only Breakfast",
        MealSlot::Morning,
        300.0,
        20.0,
        30.0,
        10.0,
    )]);
    let target = MacroVector::new(1200.0, 80.0, 120.0, 40.0);

    let plan = build_plan(1, &target, &catalog).unwrap();
    assert_eq!(plan[0].morning.recipe.name, "Only Breakfast");
    assert_eq!(plan[0].morning.servings, 1.0);
}

#[test]
fn test_repeat_penalty_flips_a_close_second() {
    // "Exact" matches the Morning sub-target; "Near" is 100 kcal off,
    // within the 300-point penalty, so day 2 switches.
    let catalog = morning_catalog(vec![
        recipe("Exact", MealSlot::Morning, 300.0, 20.0, 30.0, 10.0),
        recipe("Near", MealSlot::Morning, 400.0, 20.0, 30.0, 10.0),
    ]);
    let target = MacroVector::new(1200.0, 80.0, 120.0, 40.0);

    let plan = build_plan(2, &target, &catalog).unwrap();
    assert_eq!(plan[0].morning.recipe.name, "Exact");
    assert_eq!(plan[1].morning.recipe.name, "Near");
}

#[test]
fn test_dominant_recipe_repeats_despite_penalty() {
    // The alternative is 400 kcal off, beyond the 300-point penalty,
    // so repeating "Exact" is still the cheapest choice on day 2.
    let catalog = morning_catalog(vec![
        recipe("Exact", MealSlot::Morning, 300.0, 20.0, 30.0, 10.0),
        recipe("Far", MealSlot::Morning, 700.0, 20.0, 30.0, 10.0),
    ]);
    let target = MacroVector::new(1200.0, 80.0, 120.0, 40.0);

    let plan = build_plan(2, &target, &catalog).unwrap();
    assert_eq!(plan[0].morning.recipe.name, "Exact");
    assert_eq!(plan[1].morning.recipe.name, "Exact");
}

#[test]
fn test_empty_evening_category_is_rejected() {
    let catalog = vec![
        recipe("Breakfast", MealSlot::Morning, 300.0, 20.0, 30.0, 10.0),
        recipe("Lunch", MealSlot::Midday, 500.0, 30.0, 50.0, 15.0),
    ];
    let target = MacroVector::new(2000.0, 120.0, 220.0, 65.0);

    let result = build_plan(3, &target, &catalog);
    assert!(matches!(result, Err(PlanError::EmptyCategory(MealSlot::Evening))));
}

#[test]
fn test_invalid_day_count_is_rejected() {
    let target = MacroVector::new(2000.0, 120.0, 220.0, 65.0);
    let result = build_plan(0, &target, &catalog::builtin());
    assert!(matches!(result, Err(PlanError::InvalidDayCount(0))));
}

#[test]
fn test_every_slot_populated_across_the_plan() {
    let target = MacroVector::new(2400.0, 140.0, 260.0, 75.0);
    let plan = build_plan(3, &target, &catalog::builtin()).unwrap();

    for day in &plan {
        for slot in MealSlot::ALL {
            let sel = day.selection(slot);
            assert_eq!(sel.recipe.slot, slot);
            assert!(sel.servings >= 1.0);
        }
    }
}
