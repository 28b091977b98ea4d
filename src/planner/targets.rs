use crate::models::MacroVector;

/// Calories per gram of each macro (Atwater factors).
const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARB: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

/// Activity level, mapped to the standard TDEE multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little to no exercise)",
            ActivityLevel::LightlyActive => "Lightly active (1-3 days/week)",
            ActivityLevel::ModeratelyActive => "Moderately active (3-5 days/week)",
            ActivityLevel::VeryActive => "Very active (6-7 days/week)",
            ActivityLevel::ExtraActive => "Extra active (physical job + exercise)",
        }
    }
}

/// Fitness goal: calorie adjustment plus a macro percentage split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Maintain,
    Cut,
    Bulk,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Maintain, Goal::Cut, Goal::Bulk];

    pub fn calorie_factor(&self) -> f64 {
        match self {
            Goal::Maintain => 1.0,
            Goal::Cut => 0.85,
            Goal::Bulk => 1.1,
        }
    }

    /// (protein, carb, fat) share of target calories.
    fn macro_split(&self) -> (f64, f64, f64) {
        match self {
            Goal::Maintain => (0.30, 0.40, 0.30),
            Goal::Cut => (0.35, 0.35, 0.30),
            Goal::Bulk => (0.25, 0.45, 0.30),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Goal::Maintain => "Maintain weight",
            Goal::Cut => "Lose weight (15% deficit)",
            Goal::Bulk => "Gain muscle (10% surplus)",
        }
    }
}

/// Basal metabolic rate per Mifflin-St Jeor.
///
/// 10*kg + 6.25*cm - 5*age, then +5 for men and -161 for women.
pub fn calculate_bmr(age: u32, weight_kg: f64, height_cm: f64, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Total daily energy expenditure.
pub fn calculate_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// Daily macro target from TDEE and goal, with gram values derived
/// from the goal's percentage split. All values rounded to whole units.
pub fn generate_target(tdee: f64, goal: Goal) -> MacroVector {
    let calories = tdee * goal.calorie_factor();
    let (protein_pct, carb_pct, fat_pct) = goal.macro_split();

    MacroVector::new(
        calories.round(),
        (calories * protein_pct / KCAL_PER_G_PROTEIN).round(),
        (calories * carb_pct / KCAL_PER_G_CARB).round(),
        (calories * fat_pct / KCAL_PER_G_FAT).round(),
    )
}
