//! Wine bottles for an event, split into red, white and sparkling.

use serde::{Deserialize, Serialize};

/// Standard 750 ml bottle pours five glasses.
pub const GLASSES_PER_BOTTLE: f64 = 5.0;

labeled_enum! {
    pub enum WineEventType {
        Dinner => "dinner",
        Reception => "reception",
        Cocktail => "cocktail",
    }
}

impl WineEventType {
    /// Glasses per guest per hour before the serving style is applied.
    pub fn glasses_per_hour(&self) -> f64 {
        match self {
            WineEventType::Dinner => 0.8,
            WineEventType::Reception => 1.2,
            WineEventType::Cocktail => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WineEventType::Dinner => "Dinner Party",
            WineEventType::Reception => "Reception",
            WineEventType::Cocktail => "Cocktail Party",
        }
    }
}

labeled_enum! {
    pub enum ServingStyle {
        WithMeal => "with-meal",
        CocktailHour => "cocktail-hour",
        AllEvening => "all-evening",
    }
}

impl ServingStyle {
    pub fn multiplier(&self) -> f64 {
        match self {
            ServingStyle::WithMeal => 0.85,
            ServingStyle::CocktailHour => 1.1,
            ServingStyle::AllEvening => 0.95,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServingStyle::WithMeal => "With Meal",
            ServingStyle::CocktailHour => "Cocktail Hour",
            ServingStyle::AllEvening => "All Evening",
        }
    }
}

labeled_enum! {
    pub enum WineKind {
        Red => "red",
        White => "white",
        Sparkling => "sparkling",
    }
}

/// Average bottle price in USD at each budget tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BottlePrice {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl WineKind {
    pub fn price(&self) -> BottlePrice {
        let (low, mid, high) = match self {
            WineKind::Red => (12.0, 25.0, 50.0),
            WineKind::White => (10.0, 22.0, 45.0),
            WineKind::Sparkling => (15.0, 30.0, 60.0),
        };
        BottlePrice { low, mid, high }
    }
}

/// Relative share of each wine, normally summing to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WineRatio {
    pub red: f64,
    pub white: f64,
    pub sparkling: f64,
}

impl Default for WineRatio {
    fn default() -> Self {
        Self {
            red: 40.0,
            white: 40.0,
            sparkling: 20.0,
        }
    }
}

impl WineRatio {
    pub fn get(&self, kind: WineKind) -> f64 {
        match kind {
            WineKind::Red => self.red,
            WineKind::White => self.white,
            WineKind::Sparkling => self.sparkling,
        }
    }

    fn set(&mut self, kind: WineKind, value: f64) {
        match kind {
            WineKind::Red => self.red = value,
            WineKind::White => self.white = value,
            WineKind::Sparkling => self.sparkling = value,
        }
    }

    pub fn total(&self) -> f64 {
        self.red + self.white + self.sparkling
    }

    /// Sets one share, held within 0..=100. If the shares then add up to more
    /// than 100, the excess is taken from the other two in proportion to
    /// their size, rounding each cut up and never going below zero.
    pub fn adjust(&self, kind: WineKind, value: f64) -> WineRatio {
        let mut next = *self;
        next.set(kind, value.clamp(0.0, 100.0));

        let total = next.total();
        if total > 100.0 {
            let excess = total - 100.0;
            let others = total - next.get(kind);
            for other in WineKind::ALL.iter().copied().filter(|k| *k != kind) {
                let share = next.get(other);
                let reduction = (share / others * excess).ceil();
                next.set(other, (share - reduction).max(0.0));
            }
        }
        next
    }
}

/// Everything the wine calculator asks for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WineInputs {
    pub guests: u32,
    pub hours: f64,
    pub event_type: WineEventType,
    pub serving_style: ServingStyle,
    pub ratio: WineRatio,
}

impl Default for WineInputs {
    fn default() -> Self {
        Self {
            guests: 20,
            hours: 4.0,
            event_type: WineEventType::Dinner,
            serving_style: ServingStyle::WithMeal,
            ratio: WineRatio::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WineBudget {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WinePlan {
    pub total_glasses: f64,
    pub glasses_per_person: f64,
    /// Sum of the per-kind bottles, which can exceed the bottles the glasses
    /// alone call for because each kind is rounded up.
    pub total_bottles: f64,
    pub red_bottles: f64,
    pub white_bottles: f64,
    pub sparkling_bottles: f64,
    pub budget: WineBudget,
}

impl WinePlan {
    pub fn bottles(&self, kind: WineKind) -> f64 {
        match kind {
            WineKind::Red => self.red_bottles,
            WineKind::White => self.white_bottles,
            WineKind::Sparkling => self.sparkling_bottles,
        }
    }
}

impl WineInputs {
    pub fn glasses_per_hour(&self) -> f64 {
        self.event_type.glasses_per_hour() * self.serving_style.multiplier()
    }

    /// Returns `None` for fewer than one guest or less than half an hour.
    pub fn calculate(&self) -> Option<WinePlan> {
        if self.guests < 1 || self.hours.is_nan() || self.hours < 0.5 {
            return None;
        }
        let guests = self.guests as f64;
        let total_glasses = (guests * self.hours * self.glasses_per_hour()).ceil();
        let bottles = (total_glasses / GLASSES_PER_BOTTLE).ceil();

        let ratio_total = self.ratio.total();
        let split = |kind: WineKind| {
            if ratio_total > 0.0 {
                (bottles * self.ratio.get(kind) / ratio_total).ceil()
            } else {
                0.0
            }
        };
        let red_bottles = split(WineKind::Red);
        let white_bottles = split(WineKind::White);
        let sparkling_bottles = split(WineKind::Sparkling);

        let cost = |tier: fn(&BottlePrice) -> f64| {
            red_bottles * tier(&WineKind::Red.price())
                + white_bottles * tier(&WineKind::White.price())
                + sparkling_bottles * tier(&WineKind::Sparkling.price())
        };

        Some(WinePlan {
            total_glasses,
            glasses_per_person: total_glasses / guests,
            total_bottles: red_bottles + white_bottles + sparkling_bottles,
            red_bottles,
            white_bottles,
            sparkling_bottles,
            budget: WineBudget {
                low: cost(|p| p.low),
                mid: cost(|p| p.mid),
                high: cost(|p| p.high),
            },
        })
    }
}
