//! Plain, immutable record types for every catalog table.
//!
//! Field names match the keys of the embedded JSON tables. Categorical
//! attributes are enums so a typo in a table is a load error rather than a
//! record that silently never matches a filter.

use serde::{Deserialize, Serialize};

labeled_enum! {
    /// Broad ingredient family of a flavor profile.
    pub enum FlavorCategory {
        Protein => "protein",
        Vegetable => "vegetable",
        Fruit => "fruit",
        Dairy => "dairy",
        Grain => "grain",
        Herb => "herb",
        Spice => "spice",
        Sauce => "sauce",
        Beverage => "beverage",
        Nut => "nut",
        Legume => "legume",
    }
}

labeled_enum! {
    /// Basic taste an ingredient contributes.
    pub enum Aroma {
        Sweet => "sweet",
        Sour => "sour",
        Salty => "salty",
        Bitter => "bitter",
        Umami => "umami",
        Fatty => "fatty",
        Spicy => "spicy",
    }
}

labeled_enum! {
    pub enum FlavorIntensity {
        Mild => "mild",
        Medium => "medium",
        Bold => "bold",
    }
}

labeled_enum! {
    pub enum Season {
        Spring => "spring",
        Summer => "summer",
        Fall => "fall",
        Winter => "winter",
        YearRound => "year-round",
    }
}

/// An ingredient in the flavor pairing database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorProfile {
    pub id: String,
    pub name: String,
    pub category: FlavorCategory,
    pub subcategory: String,
    pub flavor_notes: Vec<String>,
    pub aromatic_profile: Vec<Aroma>,
    pub intensity: FlavorIntensity,
    /// Names of classic partners. Not every name has its own profile.
    pub best_pairings: Vec<String>,
    /// Names of surprising partners. Not every name has its own profile.
    pub unexpected_pairings: Vec<String>,
    pub cuisine_affinities: Vec<String>,
    pub seasonality: Season,
    pub cooking_methods: Vec<String>,
}

impl FlavorProfile {
    /// Stand-in profile for a pairing name with no entry of its own.
    pub fn placeholder(name: &str, category: FlavorCategory) -> Self {
        Self {
            id: name.to_lowercase().replace(char::is_whitespace, "-"),
            name: name.to_string(),
            category,
            subcategory: "general".to_string(),
            flavor_notes: Vec::new(),
            aromatic_profile: Vec::new(),
            intensity: FlavorIntensity::Medium,
            best_pairings: Vec::new(),
            unexpected_pairings: Vec::new(),
            cuisine_affinities: Vec::new(),
            seasonality: Season::YearRound,
            cooking_methods: Vec::new(),
        }
    }
}

labeled_enum! {
    pub enum CheeseCategory {
        Soft => "soft",
        SemiSoft => "semi-soft",
        SemiHard => "semi-hard",
        Hard => "hard",
        Blue => "blue",
        Fresh => "fresh",
    }
}

labeled_enum! {
    pub enum Milk {
        Cow => "cow",
        Goat => "goat",
        Sheep => "sheep",
        Mixed => "mixed",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheesePairings {
    pub wines: Vec<String>,
    pub fruits: Vec<String>,
    pub nuts: Vec<String>,
    pub condiments: Vec<String>,
    pub breads: Vec<String>,
    pub meats: Vec<String>,
    pub beverages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cheese {
    pub id: String,
    pub name: String,
    pub category: CheeseCategory,
    pub origin: String,
    pub milk: Milk,
    pub flavor: String,
    pub texture: String,
    /// 1 (delicate) to 5 (pungent).
    pub intensity: u8,
    pub description: String,
    pub pairings: CheesePairings,
}

labeled_enum! {
    pub enum CoffeeCategory {
        Roast => "roast",
        Origin => "origin",
        Preparation => "preparation",
    }
}

labeled_enum! {
    pub enum RoastLevel {
        Light => "light",
        Medium => "medium",
        MediumDark => "medium-dark",
        Dark => "dark",
    }
}

labeled_enum! {
    pub enum Acidity {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

labeled_enum! {
    pub enum Body {
        Light => "light",
        Medium => "medium",
        Full => "full",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeePairings {
    pub pastries: Vec<String>,
    pub cakes: Vec<String>,
    pub cookies: Vec<String>,
    pub chocolate: Vec<String>,
    pub fruits: Vec<String>,
    pub other: Vec<String>,
    pub avoid: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coffee {
    pub id: String,
    pub name: String,
    pub category: CoffeeCategory,
    pub roast_level: RoastLevel,
    pub flavor: Vec<String>,
    pub acidity: Acidity,
    pub body: Body,
    pub description: String,
    pub pairings: CoffeePairings,
    pub tips: String,
}

labeled_enum! {
    pub enum ChocolateKind {
        Dark => "dark",
        Milk => "milk",
        White => "white",
        Specialty => "specialty",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChocolatePairings {
    pub wines: Vec<String>,
    pub spirits: Vec<String>,
    pub fruits: Vec<String>,
    pub nuts: Vec<String>,
    pub cheeses: Vec<String>,
    pub spices: Vec<String>,
    pub beverages: Vec<String>,
    pub avoid: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chocolate {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChocolateKind,
    /// Free-form cocoa content, e.g. `"70%"` or `"30-40%"`.
    pub cocoa: String,
    pub flavor: String,
    pub intensity: u8,
    pub description: String,
    pub pairings: ChocolatePairings,
    pub tips: String,
}

labeled_enum! {
    pub enum HerbCategory {
        Herb => "herb",
        Spice => "spice",
        Blend => "blend",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HerbSpice {
    pub id: String,
    pub name: String,
    pub category: HerbCategory,
    pub flavor: String,
    pub intensity: u8,
    pub cuisines: Vec<String>,
    /// Display names of companions; only some are herbs in the matrix.
    pub best_with: Vec<String>,
    pub foods: Vec<String>,
    pub description: String,
}

labeled_enum! {
    pub enum GiCategory {
        Grains => "grains",
        Fruits => "fruits",
        Vegetables => "vegetables",
        Legumes => "legumes",
        Dairy => "dairy",
        Proteins => "proteins",
        Snacks => "snacks",
        Beverages => "beverages",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiCategoryInfo {
    pub id: GiCategory,
    pub name: String,
}

/// A food with its glycemic index and per-serving glycemic load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiFood {
    pub id: String,
    pub name: String,
    pub category: GiCategory,
    pub gi: u32,
    pub gl: u32,
    pub serving: String,
    /// Grams per serving.
    pub carbs: f64,
    /// Grams per serving.
    pub fiber: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A suggested lower-GI swap from one food to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiAlternative {
    pub from_id: String,
    pub to_id: String,
    pub gi_reduction: u32,
    pub tips: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlycemicTable {
    pub categories: Vec<GiCategoryInfo>,
    pub foods: Vec<GiFood>,
    pub alternatives: Vec<GiAlternative>,
}

labeled_enum! {
    pub enum DietaryTag {
        Vegan => "vegan",
        DairyFree => "dairy-free",
        GlutenFree => "gluten-free",
        NutFree => "nut-free",
        EggFree => "egg-free",
        LowSugar => "low-sugar",
        Keto => "keto",
    }
}

labeled_enum! {
    pub enum SubstituteCategory {
        Dairy => "dairy",
        Eggs => "eggs",
        Flour => "flour",
        Sugar => "sugar",
        Oil => "oil",
        Leavening => "leavening",
        Spices => "spices",
        Protein => "protein",
        Misc => "misc",
    }
}

labeled_enum! {
    pub enum CookingContext {
        Baking => "baking",
        Cooking => "cooking",
        Both => "both",
    }
}

labeled_enum! {
    /// How much a substitute changes the flavor or texture of a dish.
    pub enum Impact {
        None => "none",
        Slight => "slight",
        Noticeable => "noticeable",
        Significant => "significant",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietaryTagInfo {
    pub id: DietaryTag,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    pub id: String,
    pub name: String,
    pub ratio: String,
    pub notes: String,
    pub dietary_tags: Vec<DietaryTag>,
    pub flavor_impact: Impact,
    pub texture_impact: Impact,
    pub best_for: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub category: SubstituteCategory,
    pub common_uses: Vec<String>,
    pub context: CookingContext,
    pub substitutions: Vec<Substitution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionTable {
    pub dietary_tags: Vec<DietaryTagInfo>,
    pub ingredients: Vec<Ingredient>,
}

labeled_enum! {
    pub enum MealType {
        Breakfast => "breakfast",
        Lunch => "lunch",
        Dinner => "dinner",
        Snack => "snack",
    }
}

labeled_enum! {
    pub enum MealCategory {
        ProteinHeavy => "protein-heavy",
        CarbHeavy => "carb-heavy",
        Balanced => "balanced",
        Light => "light",
    }
}

/// A batch-cookable recipe for the weekly meal prep planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTemplate {
    pub id: String,
    pub name: String,
    pub meal_type: MealType,
    /// Servings one batch yields.
    pub servings: u32,
    pub prep_time_minutes: u32,
    pub can_batch_prep: bool,
    pub shelf_life_days: u32,
    pub freezable: bool,
    pub ingredients: Vec<String>,
    pub category: MealCategory,
    #[serde(default)]
    pub dietary: Vec<String>,
}
