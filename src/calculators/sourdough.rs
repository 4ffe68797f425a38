//! Sourdough formula analysis in baker's percentages.
//!
//! The starter counts towards both flour and water: a starter at 100%
//! hydration is half flour and half water by weight.

use serde::{Deserialize, Serialize};

/// A hydration to aim for, with a short description of the loaf it makes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreadPreset {
    pub name: &'static str,
    pub hydration: f64,
    pub description: &'static str,
}

pub const BREAD_PRESETS: [BreadPreset; 5] = [
    BreadPreset {
        name: "Sandwich Loaf",
        hydration: 60.0,
        description: "Tight crumb, easy to slice",
    },
    BreadPreset {
        name: "Rustic Country",
        hydration: 70.0,
        description: "Good balance of texture",
    },
    BreadPreset {
        name: "Artisan Boule",
        hydration: 75.0,
        description: "Open crumb, chewy crust",
    },
    BreadPreset {
        name: "Ciabatta",
        hydration: 80.0,
        description: "Very open, irregular crumb",
    },
    BreadPreset {
        name: "Focaccia",
        hydration: 85.0,
        description: "Crispy, airy texture",
    },
];

labeled_enum! {
    pub enum HydrationLevel {
        VeryLow => "very-low",
        Low => "low",
        Medium => "medium",
        High => "high",
        VeryHigh => "very-high",
    }
}

impl HydrationLevel {
    pub fn classify(hydration: f64) -> Self {
        if hydration < 60.0 {
            HydrationLevel::VeryLow
        } else if hydration < 70.0 {
            HydrationLevel::Low
        } else if hydration < 75.0 {
            HydrationLevel::Medium
        } else if hydration < 80.0 {
            HydrationLevel::High
        } else {
            HydrationLevel::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HydrationLevel::VeryLow => "Very Low",
            HydrationLevel::Low => "Low",
            HydrationLevel::Medium => "Medium",
            HydrationLevel::High => "High",
            HydrationLevel::VeryHigh => "Very High",
        }
    }
}

/// Ingredient weights in grams. `starter_hydration` is a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoughFormula {
    pub flour: f64,
    pub water: f64,
    pub starter: f64,
    pub starter_hydration: f64,
    pub salt: f64,
}

impl Default for DoughFormula {
    fn default() -> Self {
        Self {
            flour: 500.0,
            water: 350.0,
            starter: 100.0,
            starter_hydration: 100.0,
            salt: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoughAnalysis {
    pub starter_flour: f64,
    pub starter_water: f64,
    pub total_flour: f64,
    pub total_water: f64,
    pub hydration: f64,
    pub starter_percent: f64,
    pub water_percent: f64,
    pub salt_percent: f64,
    pub total_weight: f64,
    pub level: HydrationLevel,
}

/// Weights after an adjustment, with the new dough total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjustedDough {
    pub flour: f64,
    pub water: f64,
    pub starter: f64,
    pub salt: f64,
    pub total_weight: f64,
}

/// `part` as a percentage of `whole`, or zero when there is no whole.
fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 { 0.0 } else { part / whole * 100.0 }
}

impl DoughFormula {
    pub fn starter_flour(&self) -> f64 {
        self.starter / (1.0 + self.starter_hydration / 100.0)
    }

    pub fn analyze(&self) -> DoughAnalysis {
        let starter_flour = self.starter_flour();
        let starter_water = self.starter - starter_flour;
        let total_flour = self.flour + starter_flour;
        let total_water = self.water + starter_water;
        let hydration = percent_of(total_water, total_flour);

        DoughAnalysis {
            starter_flour,
            starter_water,
            total_flour,
            total_water,
            hydration,
            starter_percent: percent_of(self.starter, total_flour),
            water_percent: percent_of(self.water, total_flour),
            salt_percent: percent_of(self.salt, total_flour),
            total_weight: self.flour + self.water + self.starter + self.salt,
            level: HydrationLevel::classify(hydration),
        }
    }

    /// Changes the added water so the whole dough reaches `target` percent
    /// hydration. Flour, starter and salt stay as they are.
    pub fn adjust_to_hydration(&self, target: f64) -> Option<AdjustedDough> {
        if target.is_nan() || target <= 0.0 {
            return None;
        }
        let analysis = self.analyze();
        let water = (analysis.total_flour * (target / 100.0) - analysis.starter_water).max(0.0);
        Some(AdjustedDough {
            flour: self.flour,
            water,
            starter: self.starter,
            salt: self.salt,
            total_weight: self.flour + water + self.starter + self.salt,
        })
    }

    /// Scales every ingredient so the dough weighs `target` grams.
    pub fn scale_to_weight(&self, target: f64) -> Option<AdjustedDough> {
        let total_weight = self.analyze().total_weight;
        if target.is_nan() || target <= 0.0 || total_weight == 0.0 {
            return None;
        }
        let scale = target / total_weight;
        Some(AdjustedDough {
            flour: self.flour * scale,
            water: self.water * scale,
            starter: self.starter * scale,
            salt: self.salt * scale,
            total_weight: target,
        })
    }
}
