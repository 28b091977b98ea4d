use crate::error::{PlanError, Result};
use crate::models::{DayPlan, MacroVector, MealSlot, Recipe, Selection};
use crate::planner::constants::slot_share;
use crate::planner::optimizer::pick_best;

/// Build a plan of `days` consecutive days against `daily_target`.
///
/// Each day resolves its three slots in Morning, Midday, Evening order,
/// each against that slot's fixed share of the daily target. Days run
/// strictly in sequence: day d's repeat penalty reads day d-1's
/// finalized selections.
///
/// Inputs are validated up front; a day count below 1 or a slot with no
/// catalog recipes rejects the whole request rather than returning a
/// partial plan.
pub fn build_plan(days: u32, daily_target: &MacroVector, catalog: &[Recipe]) -> Result<Vec<DayPlan>> {
    if days < 1 {
        return Err(PlanError::InvalidDayCount(days as i64));
    }
    for slot in MealSlot::ALL {
        if !catalog.iter().any(|r| r.slot == slot) {
            return Err(PlanError::EmptyCategory(slot));
        }
    }

    let mut plan: Vec<DayPlan> = Vec::with_capacity(days as usize);

    for d in 0..days {
        let prev = plan.last();
        let mut picks: Vec<Selection> = Vec::with_capacity(3);

        for slot in MealSlot::ALL {
            let sub_target = daily_target.scale(slot_share(slot));
            let prev_same_slot = prev.map(|day| &day.selection(slot).recipe);
            picks.push(pick_best(slot, &sub_target, catalog, prev_same_slot)?);
        }

        let evening = picks.pop().expect("three slots resolved");
        let midday = picks.pop().expect("three slots resolved");
        let morning = picks.pop().expect("three slots resolved");
        plan.push(DayPlan::new(d + 1, morning, midday, evening));
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn sample_target() -> MacroVector {
        MacroVector::new(2200.0, 120.0, 250.0, 70.0)
    }

    #[test]
    fn test_plan_length_and_day_numbering() {
        let catalog = catalog::builtin();
        let plan = build_plan(4, &sample_target(), &catalog).unwrap();

        assert_eq!(plan.len(), 4);
        for (i, day) in plan.iter().enumerate() {
            assert_eq!(day.day, i as u32 + 1);
        }
    }

    #[test]
    fn test_zero_days_rejected() {
        let catalog = catalog::builtin();
        let result = build_plan(0, &sample_target(), &catalog);
        assert!(matches!(result, Err(PlanError::InvalidDayCount(0))));
    }

    #[test]
    fn test_empty_slot_rejected_before_planning() {
        let catalog: Vec<Recipe> = catalog::builtin()
            .into_iter()
            .filter(|r| r.slot != MealSlot::Evening)
            .collect();

        let result = build_plan(2, &sample_target(), &catalog);
        assert!(matches!(result, Err(PlanError::EmptyCategory(MealSlot::Evening))));
    }

    #[test]
    fn test_determinism() {
        let catalog = catalog::builtin();
        let a = build_plan(5, &sample_target(), &catalog).unwrap();
        let b = build_plan(5, &sample_target(), &catalog).unwrap();

        for (da, db) in a.iter().zip(&b) {
            for slot in MealSlot::ALL {
                assert_eq!(
                    da.selection(slot).recipe.name,
                    db.selection(slot).recipe.name
                );
                assert_eq!(da.selection(slot).servings, db.selection(slot).servings);
            }
        }
    }

    #[test]
    fn test_slots_score_independently_of_each_other() {
        // The Morning pick must not depend on what Midday or Evening
        // recipes exist. Swap the non-Morning portion of the catalog
        // and assert Morning day 1 is unchanged.
        let full = catalog::builtin();
        let mut reduced: Vec<Recipe> = full
            .iter()
            .filter(|r| r.slot == MealSlot::Morning)
            .cloned()
            .collect();
        reduced.push(
            full.iter()
                .find(|r| r.slot == MealSlot::Midday)
                .cloned()
                .unwrap(),
        );
        reduced.push(
            full.iter()
                .find(|r| r.slot == MealSlot::Evening)
                .cloned()
                .unwrap(),
        );

        let a = build_plan(1, &sample_target(), &full).unwrap();
        let b = build_plan(1, &sample_target(), &reduced).unwrap();
        assert_eq!(a[0].morning.recipe.name, b[0].morning.recipe.name);
        assert_eq!(a[0].morning.servings, b[0].morning.servings);
    }
}
