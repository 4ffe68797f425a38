//! Food quantities for a party, scaled by guest count and the kind of event.

use crate::format::{ceil_to, js_round};
use serde::{Deserialize, Serialize};

/// Children eat roughly this share of an adult portion.
const CHILD_PORTION: f64 = 0.6;
/// Ounces above which a quantity is also given in pounds.
const POUNDS_THRESHOLD_OZ: f64 = 32.0;
const COCKTAIL_APPETIZER_BOOST: f64 = 1.8;
const APPETIZER_ONLY_MAIN_SHARE: f64 = 0.3;

pub const MIN_GUESTS: u32 = 5;
pub const MAX_GUESTS: u32 = 200;
pub const MIN_DURATION_HOURS: f64 = 1.0;
pub const MAX_DURATION_HOURS: f64 = 8.0;

pub const BRAND_NAME: &str = "PairDish";
pub const BRAND_URL: &str = "https://pairdish.com";

labeled_enum! {
    pub enum EventType {
        Casual => "casual",
        Formal => "formal",
        Cocktail => "cocktail",
        Bbq => "bbq",
        Buffet => "buffet",
        Dinner => "dinner",
    }
}

impl EventType {
    pub fn multiplier(&self) -> f64 {
        match self {
            EventType::Casual => 1.0,
            EventType::Formal => 1.2,
            EventType::Cocktail => 0.8,
            EventType::Bbq => 1.3,
            EventType::Buffet => 1.15,
            EventType::Dinner => 1.1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Casual => "Casual Party",
            EventType::Formal => "Formal Dinner",
            EventType::Cocktail => "Cocktail Party",
            EventType::Bbq => "BBQ/Cookout",
            EventType::Buffet => "Buffet Style",
            EventType::Dinner => "Dinner Party",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EventType::Casual => "Relaxed gathering",
            EventType::Formal => "Sit-down meal",
            EventType::Cocktail => "Apps & drinks",
            EventType::Bbq => "Grilled foods",
            EventType::Buffet => "Self-serve spread",
            EventType::Dinner => "Plated courses",
        }
    }
}

labeled_enum! {
    pub enum MealTime {
        Lunch => "lunch",
        Dinner => "dinner",
        Appetizers => "appetizers",
    }
}

impl MealTime {
    pub fn multiplier(&self) -> f64 {
        match self {
            MealTime::Lunch => 0.85,
            MealTime::Dinner => 1.0,
            MealTime::Appetizers => 0.6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealTime::Lunch => "Lunch",
            MealTime::Dinner => "Dinner",
            MealTime::Appetizers => "Appetizers Only",
        }
    }
}

labeled_enum! {
    pub enum FoodCategoryId {
        Meat => "meat",
        Sides => "sides",
        Appetizers => "appetizers",
        Bread => "bread",
        Dessert => "dessert",
        Salad => "salad",
    }
}

/// Per-adult serving guide for one kind of food.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodCategory {
    pub id: FoodCategoryId,
    pub name: &'static str,
    pub icon: &'static str,
    pub per_person_oz: f64,
    /// Countable foods are planned in pieces rather than ounces.
    pub per_person_pieces: Option<f64>,
    pub unit: &'static str,
    pub suggestions: &'static [&'static str],
    pub tips: &'static str,
}

pub const FOOD_CATEGORIES: [FoodCategory; 6] = [
    FoodCategory {
        id: FoodCategoryId::Meat,
        name: "Main Protein",
        icon: "🍖",
        per_person_oz: 6.0,
        per_person_pieces: None,
        unit: "oz",
        suggestions: &["Chicken breast", "Steak", "Pork chops", "Fish fillet", "Lamb chops"],
        tips: "Plan for 6-8 oz per adult for boneless meats, 8-10 oz for bone-in cuts.",
    },
    FoodCategory {
        id: FoodCategoryId::Sides,
        name: "Side Dishes",
        icon: "🥗",
        per_person_oz: 4.0,
        per_person_pieces: None,
        unit: "oz",
        suggestions: &[
            "Roasted vegetables",
            "Mashed potatoes",
            "Rice pilaf",
            "Coleslaw",
            "Salad",
        ],
        tips: "Provide 2-3 side options. Guests typically take small portions of each.",
    },
    FoodCategory {
        id: FoodCategoryId::Appetizers,
        name: "Appetizers",
        icon: "🧀",
        per_person_oz: 2.0,
        per_person_pieces: Some(5.0),
        unit: "pieces",
        suggestions: &[
            "Cheese & crackers",
            "Veggie tray",
            "Bruschetta",
            "Meatballs",
            "Shrimp cocktail",
        ],
        tips: "For cocktail parties, increase to 8-10 pieces per person.",
    },
    FoodCategory {
        id: FoodCategoryId::Bread,
        name: "Bread/Rolls",
        icon: "🥖",
        per_person_oz: 2.0,
        per_person_pieces: Some(1.5),
        unit: "rolls",
        suggestions: &["Dinner rolls", "Baguette slices", "Cornbread", "Garlic bread"],
        tips: "1-2 rolls or 2-3 slices per person. Provide butter or dipping oil.",
    },
    FoodCategory {
        id: FoodCategoryId::Dessert,
        name: "Desserts",
        icon: "🍰",
        per_person_oz: 4.0,
        per_person_pieces: Some(1.0),
        unit: "serving",
        suggestions: &["Cake slices", "Pie wedges", "Cookies", "Brownies", "Fruit tart"],
        tips: "Plan 1 serving per person, plus 10% extra. Mini desserts: 2-3 per person.",
    },
    FoodCategory {
        id: FoodCategoryId::Salad,
        name: "Salad",
        icon: "🥬",
        per_person_oz: 3.0,
        per_person_pieces: None,
        unit: "oz",
        suggestions: &[
            "Garden salad",
            "Caesar salad",
            "Greek salad",
            "Pasta salad",
            "Fruit salad",
        ],
        tips: "About 1 cup (3 oz) per person. Dress salad just before serving.",
    },
];

/// Guests needing special options, by diet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DietaryCount {
    pub vegetarian: u32,
    pub vegan: u32,
    pub gluten_free: u32,
}

impl DietaryCount {
    pub fn any(&self) -> bool {
        self.vegetarian > 0 || self.vegan > 0 || self.gluten_free > 0
    }
}

/// Everything the party planner asks for. Missing fields in a shared payload
/// fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartyInputs {
    pub event_name: String,
    pub guest_count: u32,
    /// Included in `guest_count`.
    pub child_count: u32,
    pub event_type: EventType,
    pub meal_time: MealTime,
    pub duration: f64,
    pub heavy_eaters: u32,
    pub dietary: DietaryCount,
}

impl Default for PartyInputs {
    fn default() -> Self {
        Self {
            event_name: "My Party".to_string(),
            guest_count: 20,
            child_count: 0,
            event_type: EventType::Casual,
            meal_time: MealTime::Dinner,
            duration: 3.0,
            heavy_eaters: 0,
            dietary: DietaryCount::default(),
        }
    }
}

/// Computed amount of one food category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodQuantity {
    pub category: FoodCategory,
    /// Ounces before rounding up.
    pub raw_oz: f64,
    pub total_oz: f64,
    /// Set when the amount is large enough to buy by the pound.
    pub total_pounds: Option<f64>,
    /// Pieces before rounding up, for countable foods.
    pub raw_pieces: Option<f64>,
    pub total_pieces: Option<f64>,
    /// Serving guide per person, e.g. `"6 oz"` or `"1.5 rolls"`.
    pub per_person: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetEstimate {
    pub budget: f64,
    pub moderate: f64,
    pub premium: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartyPlan {
    pub multiplier: f64,
    pub adult_equivalent: f64,
    pub quantities: Vec<FoodQuantity>,
    pub budget: BudgetEstimate,
}

impl PartyInputs {
    /// Pulls every field into the range the planner accepts: 5 to 200
    /// guests, fewer children than guests, 1 to 8 hours, and no more heavy
    /// eaters or dietary guests than there are guests.
    pub fn clamped(&self) -> Self {
        let guest_count = self.guest_count.clamp(MIN_GUESTS, MAX_GUESTS);
        Self {
            event_name: self.event_name.clone(),
            guest_count,
            child_count: self.child_count.min(guest_count - 1),
            event_type: self.event_type,
            meal_time: self.meal_time,
            duration: if self.duration.is_nan() {
                Self::default().duration
            } else {
                self.duration.clamp(MIN_DURATION_HOURS, MAX_DURATION_HOURS)
            },
            heavy_eaters: self.heavy_eaters.min(guest_count),
            dietary: DietaryCount {
                vegetarian: self.dietary.vegetarian.min(guest_count),
                vegan: self.dietary.vegan.min(guest_count),
                gluten_free: self.dietary.gluten_free.min(guest_count),
            },
        }
    }

    /// Combined portion multiplier for event, meal, length and appetite.
    pub fn multiplier(&self) -> f64 {
        let mut multiplier = self.event_type.multiplier() * self.meal_time.multiplier();
        if self.duration > 3.0 {
            multiplier *= 1.0 + (self.duration - 3.0) * 0.05;
        }
        if self.heavy_eaters > 0 && self.guest_count > 0 {
            multiplier *= 1.0 + self.heavy_eaters as f64 / self.guest_count as f64 * 0.2;
        }
        multiplier
    }

    /// Guests counted in adult portions.
    pub fn adult_equivalent(&self) -> f64 {
        let children = self.child_count.min(self.guest_count);
        (self.guest_count - children) as f64 + children as f64 * CHILD_PORTION
    }

    pub fn quantity(&self, category: &FoodCategory) -> FoodQuantity {
        let multiplier = self.multiplier();
        let adult_eq = self.adult_equivalent();

        let mut raw_oz = adult_eq * category.per_person_oz * multiplier;
        let raw_pieces = category
            .per_person_pieces
            .map(|pieces| adult_eq * pieces * multiplier);
        let mut total_pieces = raw_pieces.map(f64::ceil);

        let total_pounds =
            (raw_oz >= POUNDS_THRESHOLD_OZ).then(|| ceil_to(raw_oz / 16.0, 1));

        if self.event_type == EventType::Cocktail && category.id == FoodCategoryId::Appetizers {
            total_pieces = total_pieces.map(|p| (p * COCKTAIL_APPETIZER_BOOST).ceil());
        }

        if self.meal_time == MealTime::Appetizers
            && matches!(category.id, FoodCategoryId::Meat | FoodCategoryId::Sides)
        {
            raw_oz *= APPETIZER_ONLY_MAIN_SHARE;
        }

        let per_person = match category.per_person_pieces {
            Some(pieces) => format!("{} {}", pieces, category.unit),
            None => format!("{} oz", category.per_person_oz),
        };

        FoodQuantity {
            category: *category,
            raw_oz,
            total_oz: raw_oz.ceil(),
            total_pounds,
            raw_pieces,
            total_pieces,
            per_person,
        }
    }

    pub fn budget(&self) -> BudgetEstimate {
        let guests = self.guest_count as f64;
        let multiplier = self.multiplier();
        BudgetEstimate {
            budget: js_round(guests * 8.0),
            moderate: js_round(guests * 15.0 * multiplier),
            premium: js_round(guests * 25.0 * multiplier),
        }
    }

    pub fn plan(&self) -> PartyPlan {
        PartyPlan {
            multiplier: self.multiplier(),
            adult_equivalent: self.adult_equivalent(),
            quantities: FOOD_CATEGORIES.iter().map(|c| self.quantity(c)).collect(),
            budget: self.budget(),
        }
    }

    /// Plain-text shopping list for printing or pasting into a message.
    pub fn shopping_list(&self) -> String {
        let plan = self.plan();
        let mut list = String::new();

        list.push_str("PARTY FOOD SHOPPING LIST\n");
        list.push_str("========================\n\n");
        list.push_str(&format!(
            "Event: {} ({})\n",
            self.event_name,
            self.event_type.label()
        ));
        list.push_str(&format!(
            "Guests: {} ({} adults, {} children)\n",
            self.guest_count,
            self.guest_count.saturating_sub(self.child_count),
            self.child_count
        ));
        list.push_str(&format!("Duration: {} hours\n\n", self.duration));

        list.push_str("QUANTITIES NEEDED:\n");
        list.push_str("------------------\n");
        for item in &plan.quantities {
            let c = &item.category;
            let amount = match (item.total_pounds, item.total_pieces) {
                (Some(pounds), _) if pounds > 0.0 => format!("{} lbs", pounds),
                (_, Some(pieces)) if pieces > 0.0 => format!("{} {}", pieces, c.unit),
                _ => format!("{} oz", item.total_oz),
            };
            list.push_str(&format!("{} {}: {}\n", c.icon, c.name, amount));
        }

        if self.dietary.any() {
            list.push_str("\nDIETARY NEEDS:\n");
            list.push_str("--------------\n");
            let needs = [
                ("Vegetarian", self.dietary.vegetarian),
                ("Vegan", self.dietary.vegan),
                ("Gluten-free", self.dietary.gluten_free),
            ];
            for (diet, guests) in needs.into_iter().filter(|(_, guests)| *guests > 0) {
                list.push_str(&format!("{} options for {} guests\n", diet, guests));
            }
        }

        list.push_str(&format!("\nESTIMATED BUDGET: ${}\n", plan.budget.moderate));
        list.push_str(&format!("\n---\nCalculated with {} | {}", BRAND_NAME, BRAND_URL));
        list
    }
}
