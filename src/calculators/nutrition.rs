//! Daily calorie and macronutrient targets.
//!
//! Energy expenditure follows the Mifflin-St Jeor equation scaled by an
//! activity multiplier; the calorie target is then offset by the chosen goal
//! and split into grams of protein, carbohydrate and fat.

use crate::format::js_round;
use serde::{Deserialize, Serialize};

const LB_TO_KG: f64 = 0.453592;
const IN_TO_CM: f64 = 2.54;
const CALORIES_PER_GRAM_PROTEIN: f64 = 4.0;
const CALORIES_PER_GRAM_CARBS: f64 = 4.0;
const CALORIES_PER_GRAM_FAT: f64 = 9.0;

labeled_enum! {
    pub enum Sex {
        Male => "male",
        Female => "female",
    }
}

labeled_enum! {
    pub enum UnitSystem {
        Metric => "metric",
        Imperial => "imperial",
    }
}

labeled_enum! {
    pub enum ActivityLevel {
        Sedentary => "sedentary",
        Light => "light",
        Moderate => "moderate",
        Active => "active",
        Extreme => "extreme",
    }
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::Extreme => 1.9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly Active",
            ActivityLevel::Moderate => "Moderately Active",
            ActivityLevel::Active => "Very Active",
            ActivityLevel::Extreme => "Extremely Active",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Exercise 1-3 days/week",
            ActivityLevel::Moderate => "Exercise 3-5 days/week",
            ActivityLevel::Active => "Exercise 6-7 days/week",
            ActivityLevel::Extreme => "Intense training twice/day",
        }
    }
}

labeled_enum! {
    pub enum CalorieGoal {
        LoseFast => "lose-fast",
        Lose => "lose",
        Maintain => "maintain",
        Gain => "gain",
        GainFast => "gain-fast",
    }
}

impl CalorieGoal {
    /// Daily calorie offset from maintenance.
    pub fn modifier(&self) -> f64 {
        match self {
            CalorieGoal::LoseFast => -500.0,
            CalorieGoal::Lose => -250.0,
            CalorieGoal::Maintain => 0.0,
            CalorieGoal::Gain => 250.0,
            CalorieGoal::GainFast => 500.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CalorieGoal::LoseFast => "Aggressive Cut",
            CalorieGoal::Lose => "Moderate Cut",
            CalorieGoal::Maintain => "Maintain",
            CalorieGoal::Gain => "Lean Bulk",
            CalorieGoal::GainFast => "Bulk",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CalorieGoal::LoseFast => "~1 lb/week loss",
            CalorieGoal::Lose => "~0.5 lb/week loss",
            CalorieGoal::Maintain => "Stay the same weight",
            CalorieGoal::Gain => "~0.5 lb/week gain",
            CalorieGoal::GainFast => "~1 lb/week gain",
        }
    }
}

labeled_enum! {
    pub enum MacroPreset {
        Balanced => "balanced",
        LowCarb => "low-carb",
        Keto => "keto",
        HighProtein => "high-protein",
        Zone => "zone",
        Mediterranean => "mediterranean",
        LowFat => "low-fat",
        Custom => "custom",
    }
}

impl MacroPreset {
    pub fn name(&self) -> &'static str {
        match self {
            MacroPreset::Balanced => "Balanced",
            MacroPreset::LowCarb => "Low Carb",
            MacroPreset::Keto => "Keto",
            MacroPreset::HighProtein => "High Protein",
            MacroPreset::Zone => "Zone Diet",
            MacroPreset::Mediterranean => "Mediterranean",
            MacroPreset::LowFat => "Low Fat",
            MacroPreset::Custom => "Custom",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MacroPreset::Balanced => "Traditional balanced nutrition",
            MacroPreset::LowCarb => "Reduced carbohydrates",
            MacroPreset::Keto => "Very low carb, high fat",
            MacroPreset::HighProtein => "For muscle building",
            MacroPreset::Zone => "40/30/30 ratio",
            MacroPreset::Mediterranean => "Heart-healthy balance",
            MacroPreset::LowFat => "Traditional weight loss",
            MacroPreset::Custom => "Set your own ratios",
        }
    }

    /// The fixed split of a preset. `Custom` reports its starting split.
    pub fn split(&self) -> MacroSplit {
        let (protein, carbs, fat) = match self {
            MacroPreset::Balanced => (25.0, 50.0, 25.0),
            MacroPreset::LowCarb => (30.0, 30.0, 40.0),
            MacroPreset::Keto => (20.0, 5.0, 75.0),
            MacroPreset::HighProtein => (40.0, 35.0, 25.0),
            MacroPreset::Zone => (30.0, 40.0, 30.0),
            MacroPreset::Mediterranean => (20.0, 45.0, 35.0),
            MacroPreset::LowFat => (25.0, 55.0, 20.0),
            MacroPreset::Custom => (30.0, 40.0, 30.0),
        };
        MacroSplit {
            protein,
            carbs,
            fat,
        }
    }
}

labeled_enum! {
    pub enum Macro {
        Protein => "protein",
        Carbs => "carbs",
        Fat => "fat",
    }
}

/// Percent of calories from each macronutrient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for MacroSplit {
    fn default() -> Self {
        MacroPreset::Custom.split()
    }
}

impl MacroSplit {
    pub fn get(&self, which: Macro) -> f64 {
        match which {
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }

    fn set(&mut self, which: Macro, value: f64) {
        match which {
            Macro::Protein => self.protein = value,
            Macro::Carbs => self.carbs = value,
            Macro::Fat => self.fat = value,
        }
    }

    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }

    /// Sets one macro and spreads the difference over the other two.
    ///
    /// Each of the other two moves by half the difference, held within
    /// 5..=80 percent. If that leaves the total more than half a point away
    /// from 100, the split is rescaled: protein and carbs are rounded and fat
    /// takes whatever remains.
    pub fn rebalance(&self, which: Macro, value: f64) -> MacroSplit {
        let diff = value - self.get(which);
        let mut next = *self;
        next.set(which, value);
        for other in Macro::ALL.iter().copied().filter(|m| *m != which) {
            next.set(other, (self.get(other) - diff / 2.0).clamp(5.0, 80.0));
        }

        let total = next.total();
        if (total - 100.0).abs() > 0.5 {
            let factor = 100.0 / total;
            next.protein = js_round(next.protein * factor);
            next.carbs = js_round(next.carbs * factor);
            next.fat = 100.0 - next.protein - next.carbs;
        }
        next
    }
}

/// Grams of each macronutrient per day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroGrams {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroGrams {
    pub fn from_calories(calories: f64, split: &MacroSplit) -> Self {
        Self {
            protein: js_round(calories * (split.protein / 100.0) / CALORIES_PER_GRAM_PROTEIN),
            carbs: js_round(calories * (split.carbs / 100.0) / CALORIES_PER_GRAM_CARBS),
            fat: js_round(calories * (split.fat / 100.0) / CALORIES_PER_GRAM_FAT),
        }
    }

    /// Calories the grams add back up to.
    pub fn calories(&self) -> f64 {
        self.protein * CALORIES_PER_GRAM_PROTEIN
            + self.carbs * CALORIES_PER_GRAM_CARBS
            + self.fat * CALORIES_PER_GRAM_FAT
    }

    /// The daily grams spread evenly over `meals` meals, each rounded to the
    /// nearest gram. Zero meals counts as one.
    pub fn per_meal(&self, meals: u32) -> Self {
        let meals = meals.max(1) as f64;
        Self {
            protein: js_round(self.protein / meals),
            carbs: js_round(self.carbs / meals),
            fat: js_round(self.fat / meals),
        }
    }
}

/// Basal metabolic rate in kcal/day.
pub fn bmr(weight_kg: f64, height_cm: f64, age: f64, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Total daily energy expenditure, rounded to whole calories.
pub fn tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    js_round(bmr * activity.multiplier())
}

pub fn target_calories(tdee: f64, goal: CalorieGoal) -> f64 {
    js_round(tdee + goal.modifier())
}

/// Everything the macro calculator asks for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroInputs {
    /// Kilograms, or pounds in imperial units.
    pub weight: f64,
    /// Centimetres, or inches in imperial units.
    pub height: f64,
    pub age: f64,
    pub sex: Sex,
    pub unit: UnitSystem,
    pub activity: ActivityLevel,
    pub goal: CalorieGoal,
    pub preset: MacroPreset,
    /// Used only when `preset` is `Custom`.
    pub custom: MacroSplit,
}

impl Default for MacroInputs {
    fn default() -> Self {
        Self {
            weight: 70.0,
            height: 170.0,
            age: 30.0,
            sex: Sex::Male,
            unit: UnitSystem::Metric,
            activity: ActivityLevel::Moderate,
            goal: CalorieGoal::Maintain,
            preset: MacroPreset::Balanced,
            custom: MacroSplit::default(),
        }
    }
}

impl MacroInputs {
    pub fn weight_kg(&self) -> f64 {
        match self.unit {
            UnitSystem::Metric => self.weight,
            UnitSystem::Imperial => self.weight * LB_TO_KG,
        }
    }

    pub fn height_cm(&self) -> f64 {
        match self.unit {
            UnitSystem::Metric => self.height,
            UnitSystem::Imperial => self.height * IN_TO_CM,
        }
    }

    pub fn split(&self) -> MacroSplit {
        match self.preset {
            MacroPreset::Custom => self.custom,
            preset => preset.split(),
        }
    }
}

/// Computed daily targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroPlan {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub split: MacroSplit,
    pub grams: MacroGrams,
}

impl MacroPlan {
    pub fn compute(inputs: &MacroInputs) -> Self {
        let weight_kg = inputs.weight_kg();
        let height_cm = inputs.height_cm();
        let bmr = bmr(weight_kg, height_cm, inputs.age, inputs.sex);
        let tdee = tdee(bmr, inputs.activity);
        let target_calories = target_calories(tdee, inputs.goal);
        let split = inputs.split();
        Self {
            weight_kg,
            height_cm,
            bmr,
            tdee,
            target_calories,
            split,
            grams: MacroGrams::from_calories(target_calories, &split),
        }
    }
}
