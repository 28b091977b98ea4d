use crate::error::{PlanError, Result};
use crate::models::{MacroVector, MealSlot, Recipe, Selection};
use crate::planner::constants::*;

/// Weighted distance from a candidate's macros to the slot sub-target.
fn weighted_distance(candidate: &MacroVector, target: &MacroVector) -> f64 {
    W_KCAL * (candidate.calories - target.calories).abs()
        + W_PROT * (candidate.protein - target.protein).abs()
        + W_CARB * (candidate.carbs - target.carbs).abs()
        + W_FAT * (candidate.fat - target.fat).abs()
}

/// Pick the best (recipe, servings) pair for one slot.
///
/// Scans recipes of the matching slot in catalog order, servings in
/// ascending grid order, and keeps the strictly lowest score, so the
/// first-encountered pair wins every tie. The slot is scored against
/// its own sub-target in isolation; meals already chosen earlier in
/// the day do not feed into the score.
///
/// Fails with `EmptyCategory` when the catalog has no recipe for the
/// slot. That is a configuration error, not something to recover from
/// with a placeholder selection.
pub fn pick_best(
    slot: MealSlot,
    sub_target: &MacroVector,
    catalog: &[Recipe],
    prev_same_slot: Option<&Recipe>,
) -> Result<Selection> {
    let mut best: Option<(&Recipe, f64)> = None;
    let mut best_score = f64::INFINITY;

    for recipe in catalog.iter().filter(|r| r.slot == slot) {
        for servings in serving_grid() {
            let future = recipe.macros_for(servings);
            let mut score = weighted_distance(&future, sub_target);

            if prev_same_slot.is_some_and(|prev| recipe.matches_name(prev)) {
                score += REPEAT_PENALTY;
            }

            if score < best_score {
                best_score = score;
                best = Some((recipe, round_half(servings)));
            }
        }
    }

    best.map(|(recipe, servings)| Selection::new(recipe.clone(), servings))
        .ok_or(PlanError::EmptyCategory(slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn recipe(name: &str, slot: MealSlot, cal: f64, p: f64, c: f64, f: f64) -> Recipe {
        Recipe::new(name, slot, MacroVector::new(cal, p, c, f), Vec::new())
    }

    #[test]
    fn test_exact_match_scores_zero() {
        let catalog = vec![recipe("Toast", MealSlot::Morning, 300.0, 15.0, 40.0, 8.0)];
        let target = MacroVector::new(300.0, 15.0, 40.0, 8.0);

        let sel = pick_best(MealSlot::Morning, &target, &catalog, None).unwrap();
        assert_eq!(sel.recipe.name, "Toast");
        assert_float_absolute_eq!(sel.servings, 1.0);
    }

    #[test]
    fn test_scales_servings_toward_target() {
        // One recipe at 300 kcal per serving, target 600: 2.0x is exact.
        let catalog = vec![recipe("Bowl", MealSlot::Midday, 300.0, 10.0, 30.0, 5.0)];
        let target = MacroVector::new(600.0, 20.0, 60.0, 10.0);

        let sel = pick_best(MealSlot::Midday, &target, &catalog, None).unwrap();
        assert_float_absolute_eq!(sel.servings, 2.0);
    }

    #[test]
    fn test_servings_stay_on_grid() {
        let catalog = vec![recipe("Bowl", MealSlot::Evening, 333.0, 17.0, 29.0, 11.0)];
        let target = MacroVector::new(700.0, 40.0, 60.0, 20.0);

        let sel = pick_best(MealSlot::Evening, &target, &catalog, None).unwrap();
        assert!([1.0, 1.5, 2.0, 2.5, 3.0].contains(&sel.servings));
    }

    #[test]
    fn test_ignores_other_slots() {
        let catalog = vec![
            recipe("Dinner Dish", MealSlot::Evening, 300.0, 15.0, 40.0, 8.0),
            recipe("Breakfast Dish", MealSlot::Morning, 900.0, 1.0, 1.0, 1.0),
        ];
        let target = MacroVector::new(300.0, 15.0, 40.0, 8.0);

        let sel = pick_best(MealSlot::Morning, &target, &catalog, None).unwrap();
        assert_eq!(sel.recipe.name, "Breakfast Dish");
    }

    #[test]
    fn test_first_candidate_wins_ties() {
        // Identical macros: the earlier catalog entry must win.
        let catalog = vec![
            recipe("First", MealSlot::Morning, 300.0, 15.0, 40.0, 8.0),
            recipe("Second", MealSlot::Morning, 300.0, 15.0, 40.0, 8.0),
        ];
        let target = MacroVector::new(300.0, 15.0, 40.0, 8.0);

        let sel = pick_best(MealSlot::Morning, &target, &catalog, None).unwrap();
        assert_eq!(sel.recipe.name, "First");
    }

    #[test]
    fn test_repeat_penalty_flips_close_second() {
        // "Best" matches the target exactly; "Close" is off by 100 kcal
        // (score 100 < 300), so the penalty flips the choice.
        let best = recipe("Best", MealSlot::Evening, 500.0, 30.0, 50.0, 15.0);
        let close = recipe("Close", MealSlot::Evening, 600.0, 30.0, 50.0, 15.0);
        let catalog = vec![best.clone(), close];
        let target = MacroVector::new(500.0, 30.0, 50.0, 15.0);

        let sel = pick_best(MealSlot::Evening, &target, &catalog, Some(&best)).unwrap();
        assert_eq!(sel.recipe.name, "Close");
    }

    #[test]
    fn test_repeat_penalty_insufficient_for_dominant_item() {
        // The alternative is worse by 400 kcal (> 300), so the repeat
        // still wins despite the penalty.
        let best = recipe("Best", MealSlot::Evening, 500.0, 30.0, 50.0, 15.0);
        let far = recipe("Far", MealSlot::Evening, 900.0, 30.0, 50.0, 15.0);
        let catalog = vec![best.clone(), far];
        let target = MacroVector::new(500.0, 30.0, 50.0, 15.0);

        let sel = pick_best(MealSlot::Evening, &target, &catalog, Some(&best)).unwrap();
        assert_eq!(sel.recipe.name, "Best");
    }

    #[test]
    fn test_empty_slot_is_an_error() {
        let catalog = vec![recipe("Lunch Only", MealSlot::Midday, 500.0, 30.0, 50.0, 15.0)];
        let target = MacroVector::new(300.0, 15.0, 40.0, 8.0);

        let result = pick_best(MealSlot::Evening, &target, &catalog, None);
        assert!(matches!(result, Err(PlanError::EmptyCategory(MealSlot::Evening))));
    }
}
