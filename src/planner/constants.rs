use crate::models::MealSlot;

/// Serving multiplier grid bounds and step.
pub const MIN_SERVINGS: f64 = 1.0;
pub const MAX_SERVINGS: f64 = 3.0;
pub const SERVING_STEP: f64 = 0.5;

/// Score added when a candidate repeats yesterday's same-slot recipe.
/// Large relative to typical scores, so a repeat only wins when every
/// alternative is worse by more than this.
pub const REPEAT_PENALTY: f64 = 300.0;

/// Scoring weights per macro. Calories and protein dominate the objective.
pub const W_KCAL: f64 = 1.0;
pub const W_PROT: f64 = 0.9;
pub const W_CARB: f64 = 0.4;
pub const W_FAT: f64 = 0.3;

/// Share of the daily target assigned to each slot.
pub const MORNING_SHARE: f64 = 0.25;
pub const MIDDAY_SHARE: f64 = 0.40;
pub const EVENING_SHARE: f64 = 0.35;

/// The slot's fixed share of the daily target.
pub fn slot_share(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Morning => MORNING_SHARE,
        MealSlot::Midday => MIDDAY_SHARE,
        MealSlot::Evening => EVENING_SHARE,
    }
}

/// The serving multipliers the optimizer scans, in ascending order.
pub fn serving_grid() -> impl Iterator<Item = f64> {
    let steps = ((MAX_SERVINGS - MIN_SERVINGS) / SERVING_STEP).round() as usize;
    (0..=steps).map(|i| MIN_SERVINGS + i as f64 * SERVING_STEP)
}

/// Snap a serving multiplier to the nearest 0.5, removing grid drift.
pub fn round_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serving_grid_contents() {
        let grid: Vec<f64> = serving_grid().collect();
        assert_eq!(grid, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
    }

    #[test]
    fn test_round_half() {
        assert_eq!(round_half(1.4999999), 1.5);
        assert_eq!(round_half(2.5000001), 2.5);
        assert_eq!(round_half(1.0), 1.0);
        assert_eq!(round_half(2.74), 2.5);
        assert_eq!(round_half(2.76), 3.0);
    }

    #[test]
    fn test_slot_shares_sum_to_one() {
        let total: f64 = MealSlot::ALL.iter().map(|&s| slot_share(s)).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
