//! Weekly meal prep planning: a 7 x 4 grid of meal slots and the batch
//! cooking it implies.

use crate::catalog::{Catalog, MealTemplate, MealType};
use crate::format::format_minutes;
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const MIN_SERVINGS_PER_MEAL: u32 = 1;
pub const MAX_SERVINGS_PER_MEAL: u32 = 8;

labeled_enum! {
    pub enum Day {
        Monday => "monday",
        Tuesday => "tuesday",
        Wednesday => "wednesday",
        Thursday => "thursday",
        Friday => "friday",
        Saturday => "saturday",
        Sunday => "sunday",
    }
}

impl Day {
    fn index(&self) -> usize {
        *self as usize
    }
}

fn slot_index(meal: MealType) -> usize {
    meal as usize
}

/// Meal template ids assigned to each day and meal slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    slots: [[Option<String>; 4]; 7],
}

/// One template's share of the week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrepItem<'a> {
    pub template: &'a MealTemplate,
    /// Slots it fills.
    pub count: u32,
    pub total_servings: u32,
    pub batches: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrepSummary<'a> {
    /// In the order the templates first appear, Monday breakfast first.
    pub items: Vec<PrepItem<'a>>,
    pub total_prep_minutes: u32,
    /// Every ingredient of every planned template, sorted and deduplicated.
    pub ingredients: Vec<String>,
    pub total_meals: u32,
}

impl PrepSummary<'_> {
    pub fn total_prep_time(&self) -> String {
        format_minutes(self.total_prep_minutes)
    }
}

impl WeekPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day: Day, meal: MealType) -> Option<&str> {
        self.slots[day.index()][slot_index(meal)].as_deref()
    }

    /// Puts a template in a slot, replacing whatever was there. A template
    /// for a different meal type is refused and `false` returned.
    pub fn assign(&mut self, day: Day, meal: MealType, template: &MealTemplate) -> bool {
        if template.meal_type != meal {
            warn!(
                template = %template.id,
                slot = %meal,
                "Template does not fit this meal slot"
            );
            return false;
        }
        self.slots[day.index()][slot_index(meal)] = Some(template.id.clone());
        true
    }

    pub fn remove(&mut self, day: Day, meal: MealType) -> Option<String> {
        self.slots[day.index()][slot_index(meal)].take()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Filled slots in day order, then breakfast, lunch, dinner, snack.
    pub fn assignments(&self) -> impl Iterator<Item = (Day, MealType, &str)> {
        Day::ALL.iter().flat_map(move |&day| {
            MealType::ALL.iter().filter_map(move |&meal| {
                self.get(day, meal).map(|id| (day, meal, id))
            })
        })
    }

    /// Batches, prep time and shopping list for the week, cooking
    /// `servings_per_meal` servings (1 to 8) for every filled slot.
    pub fn summary<'a>(&self, catalog: &'a Catalog, servings_per_meal: u32) -> PrepSummary<'a> {
        let servings = servings_per_meal.clamp(MIN_SERVINGS_PER_MEAL, MAX_SERVINGS_PER_MEAL);

        let mut order: Vec<&str> = Vec::new();
        let mut counts: AHashMap<&str, u32> = AHashMap::new();
        for (_, _, id) in self.assignments() {
            let count = counts.entry(id).or_insert(0);
            if *count == 0 {
                order.push(id);
            }
            *count += 1;
        }

        let items: Vec<PrepItem<'a>> = order
            .iter()
            .filter_map(|id| {
                let template = catalog.meal_template(id)?;
                let count = counts.get(id).copied().unwrap_or_default();
                let total_servings = count * servings;
                Some(PrepItem {
                    template,
                    count,
                    total_servings,
                    batches: total_servings.div_ceil(template.servings.max(1)),
                })
            })
            .collect();

        let total_prep_minutes = items
            .iter()
            .map(|item| item.template.prep_time_minutes * item.batches)
            .sum();
        let ingredients = items
            .iter()
            .flat_map(|item| item.template.ingredients.iter().cloned())
            .sorted()
            .dedup()
            .collect();

        PrepSummary {
            items,
            total_prep_minutes,
            ingredients,
            total_meals: counts.values().sum(),
        }
    }
}

/// Templates that can fill a slot of the given meal type.
pub fn templates_for(catalog: &Catalog, meal: MealType) -> impl Iterator<Item = &MealTemplate> {
    catalog
        .meal_templates()
        .iter()
        .filter(move |t| t.meal_type == meal)
}
