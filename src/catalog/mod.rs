//! The canonical, read-only data every widget works from.
//!
//! All tables ship inside the binary as JSON and are parsed once by
//! [`Catalog::builtin`]. Construction always validates the tables: ids must be
//! unique within a table and every closed reference (glycemic swaps, food
//! categories, dietary tags, quiz scores) must point at something that exists.
//! Open-ended pairing names, which are allowed to mention ingredients the
//! catalog does not describe, are resolved once into [`PairingRef`]s.

pub mod artifact;
pub mod records;

pub use artifact::*;
pub use records::*;

use crate::error::CatalogError;
use crate::quiz::{CookingStyle, QuizBank, WinePersonality};
use ahash::{AHashMap, AHashSet};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

const FLAVOR_PROFILES: &str = include_str!("../../data/flavor_profiles.json");
const CHEESES: &str = include_str!("../../data/cheeses.json");
const COFFEES: &str = include_str!("../../data/coffees.json");
const CHOCOLATES: &str = include_str!("../../data/chocolates.json");
const HERBS_SPICES: &str = include_str!("../../data/herbs_spices.json");
const GLYCEMIC: &str = include_str!("../../data/glycemic.json");
const SUBSTITUTIONS: &str = include_str!("../../data/substitutions.json");
const MEAL_TEMPLATES: &str = include_str!("../../data/meal_templates.json");
const COOKING_STYLE_QUIZ: &str = include_str!("../../data/quiz/cooking_style.json");
const WINE_PERSONALITY_QUIZ: &str = include_str!("../../data/quiz/wine_personality.json");

/// Every table of the catalog, as plain data.
///
/// This is the shape callers fill in to build a custom catalog with
/// [`Catalog::from_tables`], and the payload of a [`CatalogSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogTables {
    pub flavors: Vec<FlavorProfile>,
    pub cheeses: Vec<Cheese>,
    pub coffees: Vec<Coffee>,
    pub chocolates: Vec<Chocolate>,
    pub herbs_spices: Vec<HerbSpice>,
    pub glycemic: GlycemicTable,
    pub substitutions: SubstitutionTable,
    pub meal_templates: Vec<MealTemplate>,
    pub cooking_style: QuizBank<CookingStyle>,
    pub wine_personality: QuizBank<WinePersonality>,
}

/// What a pairing name refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum PairingRef {
    /// Index of a record in the owning table.
    Listed(usize),
    /// A name the table has no record for.
    Unlisted(String),
}

impl PairingRef {
    pub fn listed(&self) -> Option<usize> {
        match self {
            PairingRef::Listed(index) => Some(*index),
            PairingRef::Unlisted(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Indexes {
    flavors: AHashMap<String, usize>,
    cheeses: AHashMap<String, usize>,
    coffees: AHashMap<String, usize>,
    chocolates: AHashMap<String, usize>,
    herbs_spices: AHashMap<String, usize>,
    gi_foods: AHashMap<String, usize>,
    ingredients: AHashMap<String, usize>,
    meal_templates: AHashMap<String, usize>,
}

#[derive(Debug, Clone)]
struct FlavorLinks {
    best: Vec<PairingRef>,
    unexpected: Vec<PairingRef>,
}

/// The validated, indexed catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: CatalogTables,
    indexes: Indexes,
    flavor_links: Vec<FlavorLinks>,
    herb_links: Vec<Vec<PairingRef>>,
}

fn parse_table<T: DeserializeOwned>(table: &str, json: &str) -> Result<T, CatalogError> {
    let parsed = serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError {
        table: table.to_string(),
        message: e.to_string(),
    })?;
    debug!(table, "Parsed catalog table");
    Ok(parsed)
}

/// Maps each id to its position, failing on the first repeated id.
fn index_ids<'a>(
    table: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<AHashMap<String, usize>, CatalogError> {
    let mut index = AHashMap::new();
    for (position, id) in ids.enumerate() {
        if index.insert(id.to_string(), position).is_some() {
            return Err(CatalogError::DuplicateId {
                table: table.to_string(),
                id: id.to_string(),
            });
        }
    }
    Ok(index)
}

impl CatalogTables {
    /// Parses the tables embedded in the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self {
            flavors: parse_table("flavor_profiles", FLAVOR_PROFILES)?,
            cheeses: parse_table("cheeses", CHEESES)?,
            coffees: parse_table("coffees", COFFEES)?,
            chocolates: parse_table("chocolates", CHOCOLATES)?,
            herbs_spices: parse_table("herbs_spices", HERBS_SPICES)?,
            glycemic: parse_table("glycemic", GLYCEMIC)?,
            substitutions: parse_table("substitutions", SUBSTITUTIONS)?,
            meal_templates: parse_table("meal_templates", MEAL_TEMPLATES)?,
            cooking_style: parse_table("cooking_style", COOKING_STYLE_QUIZ)?,
            wine_personality: parse_table("wine_personality", WINE_PERSONALITY_QUIZ)?,
        })
    }

    /// Parses a single JSON document holding every table under its field name.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        parse_table("catalog", json)
    }

    fn build_indexes(&self) -> Result<Indexes, CatalogError> {
        Ok(Indexes {
            flavors: index_ids("flavor_profiles", self.flavors.iter().map(|r| r.id.as_str()))?,
            cheeses: index_ids("cheeses", self.cheeses.iter().map(|r| r.id.as_str()))?,
            coffees: index_ids("coffees", self.coffees.iter().map(|r| r.id.as_str()))?,
            chocolates: index_ids("chocolates", self.chocolates.iter().map(|r| r.id.as_str()))?,
            herbs_spices: index_ids(
                "herbs_spices",
                self.herbs_spices.iter().map(|r| r.id.as_str()),
            )?,
            gi_foods: index_ids(
                "glycemic.foods",
                self.glycemic.foods.iter().map(|r| r.id.as_str()),
            )?,
            ingredients: index_ids(
                "substitutions.ingredients",
                self.substitutions.ingredients.iter().map(|r| r.id.as_str()),
            )?,
            meal_templates: index_ids(
                "meal_templates",
                self.meal_templates.iter().map(|r| r.id.as_str()),
            )?,
        })
    }

    /// Checks every uniqueness rule and closed reference across the tables.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let indexes = self.build_indexes()?;

        index_ids(
            "glycemic.categories",
            self.glycemic.categories.iter().map(|c| c.id.as_str()),
        )?;
        let gi_categories: AHashSet<GiCategory> =
            self.glycemic.categories.iter().map(|c| c.id).collect();
        for food in &self.glycemic.foods {
            if !gi_categories.contains(&food.category) {
                return Err(CatalogError::UnresolvedReference {
                    table: "glycemic.foods".to_string(),
                    source_id: food.id.clone(),
                    missing_id: food.category.to_string(),
                });
            }
        }
        for alt in &self.glycemic.alternatives {
            for target in [&alt.from_id, &alt.to_id] {
                if !indexes.gi_foods.contains_key(target) {
                    return Err(CatalogError::UnresolvedReference {
                        table: "glycemic.alternatives".to_string(),
                        source_id: format!("{}->{}", alt.from_id, alt.to_id),
                        missing_id: target.clone(),
                    });
                }
            }
        }

        index_ids(
            "substitutions.dietary_tags",
            self.substitutions.dietary_tags.iter().map(|t| t.id.as_str()),
        )?;
        let tags: AHashSet<DietaryTag> = self
            .substitutions
            .dietary_tags
            .iter()
            .map(|t| t.id)
            .collect();
        for ingredient in &self.substitutions.ingredients {
            index_ids(
                &format!("substitutions.{}", ingredient.id),
                ingredient.substitutions.iter().map(|s| s.id.as_str()),
            )?;
            for sub in &ingredient.substitutions {
                if let Some(tag) = sub.dietary_tags.iter().find(|t| !tags.contains(*t)) {
                    return Err(CatalogError::UnresolvedReference {
                        table: "substitutions".to_string(),
                        source_id: sub.id.clone(),
                        missing_id: tag.to_string(),
                    });
                }
            }
        }

        self.cooking_style.validate("cooking_style")?;
        self.wine_personality.validate("wine_personality")?;
        debug!("Catalog tables validated");
        Ok(())
    }
}

impl Catalog {
    /// Loads and validates the tables embedded in the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_tables(CatalogTables::builtin()?)
    }

    /// Validates caller-provided tables and builds the lookup indexes.
    pub fn from_tables(tables: CatalogTables) -> Result<Self, CatalogError> {
        tables.validate()?;
        let indexes = tables.build_indexes()?;

        let flavor_links = tables
            .flavors
            .iter()
            .map(|profile| FlavorLinks {
                best: profile
                    .best_pairings
                    .iter()
                    .map(|name| resolve_flavor_in(&tables.flavors, name, true))
                    .collect(),
                unexpected: profile
                    .unexpected_pairings
                    .iter()
                    .map(|name| resolve_flavor_in(&tables.flavors, name, false))
                    .collect(),
            })
            .collect();
        let herb_links = tables
            .herbs_spices
            .iter()
            .map(|herb| {
                herb.best_with
                    .iter()
                    .map(|name| resolve_herb_in(&tables.herbs_spices, name))
                    .collect()
            })
            .collect();

        debug!(
            flavors = tables.flavors.len(),
            cheeses = tables.cheeses.len(),
            coffees = tables.coffees.len(),
            chocolates = tables.chocolates.len(),
            herbs_spices = tables.herbs_spices.len(),
            gi_foods = tables.glycemic.foods.len(),
            ingredients = tables.substitutions.ingredients.len(),
            meal_templates = tables.meal_templates.len(),
            "Catalog ready"
        );

        Ok(Self {
            tables,
            indexes,
            flavor_links,
            herb_links,
        })
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        self.tables.validate()
    }

    pub fn tables(&self) -> &CatalogTables {
        &self.tables
    }

    pub fn into_tables(self) -> CatalogTables {
        self.tables
    }

    pub fn flavors(&self) -> &[FlavorProfile] {
        &self.tables.flavors
    }

    pub fn cheeses(&self) -> &[Cheese] {
        &self.tables.cheeses
    }

    pub fn coffees(&self) -> &[Coffee] {
        &self.tables.coffees
    }

    pub fn chocolates(&self) -> &[Chocolate] {
        &self.tables.chocolates
    }

    pub fn herbs_spices(&self) -> &[HerbSpice] {
        &self.tables.herbs_spices
    }

    pub fn glycemic(&self) -> &GlycemicTable {
        &self.tables.glycemic
    }

    pub fn substitutions(&self) -> &SubstitutionTable {
        &self.tables.substitutions
    }

    pub fn meal_templates(&self) -> &[MealTemplate] {
        &self.tables.meal_templates
    }

    pub fn cooking_style(&self) -> &QuizBank<CookingStyle> {
        &self.tables.cooking_style
    }

    pub fn wine_personality(&self) -> &QuizBank<WinePersonality> {
        &self.tables.wine_personality
    }

    pub fn flavor(&self, id: &str) -> Option<&FlavorProfile> {
        self.indexes.flavors.get(id).map(|&i| &self.tables.flavors[i])
    }

    pub fn flavor_index(&self, id: &str) -> Option<usize> {
        self.indexes.flavors.get(id).copied()
    }

    pub fn cheese(&self, id: &str) -> Option<&Cheese> {
        self.indexes.cheeses.get(id).map(|&i| &self.tables.cheeses[i])
    }

    pub fn coffee(&self, id: &str) -> Option<&Coffee> {
        self.indexes.coffees.get(id).map(|&i| &self.tables.coffees[i])
    }

    pub fn chocolate(&self, id: &str) -> Option<&Chocolate> {
        self.indexes
            .chocolates
            .get(id)
            .map(|&i| &self.tables.chocolates[i])
    }

    pub fn herb(&self, id: &str) -> Option<&HerbSpice> {
        self.indexes
            .herbs_spices
            .get(id)
            .map(|&i| &self.tables.herbs_spices[i])
    }

    pub fn herb_index(&self, id: &str) -> Option<usize> {
        self.indexes.herbs_spices.get(id).copied()
    }

    pub fn gi_food(&self, id: &str) -> Option<&GiFood> {
        self.indexes
            .gi_foods
            .get(id)
            .map(|&i| &self.tables.glycemic.foods[i])
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.indexes
            .ingredients
            .get(id)
            .map(|&i| &self.tables.substitutions.ingredients[i])
    }

    pub fn meal_template(&self, id: &str) -> Option<&MealTemplate> {
        self.indexes
            .meal_templates
            .get(id)
            .map(|&i| &self.tables.meal_templates[i])
    }

    /// Resolves a pairing name against the flavor profiles, matching the
    /// profile name case-insensitively or the lowercased name as an id.
    pub fn resolve_flavor(&self, name: &str) -> PairingRef {
        resolve_flavor_in(&self.tables.flavors, name, true)
    }

    /// Resolves a companion name against the herb and spice matrix by exact name.
    pub fn resolve_herb(&self, name: &str) -> PairingRef {
        resolve_herb_in(&self.tables.herbs_spices, name)
    }

    /// Resolved classic partners of the flavor profile at `index`, in
    /// declaration order.
    pub fn best_pairings(&self, index: usize) -> &[PairingRef] {
        self.flavor_links
            .get(index)
            .map(|l| l.best.as_slice())
            .unwrap_or_default()
    }

    /// Resolved surprising partners of the flavor profile at `index`. These
    /// match on profile name only.
    pub fn unexpected_pairings(&self, index: usize) -> &[PairingRef] {
        self.flavor_links
            .get(index)
            .map(|l| l.unexpected.as_slice())
            .unwrap_or_default()
    }

    /// Resolved companions of the herb or spice at `index`.
    pub fn herb_companions(&self, index: usize) -> &[PairingRef] {
        self.herb_links
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

fn resolve_flavor_in(flavors: &[FlavorProfile], name: &str, match_id: bool) -> PairingRef {
    let lowered = name.to_lowercase();
    match flavors
        .iter()
        .position(|p| p.name.to_lowercase() == lowered || (match_id && p.id == lowered))
    {
        Some(index) => PairingRef::Listed(index),
        None => {
            trace!(name, "Pairing name has no flavor profile");
            PairingRef::Unlisted(name.to_string())
        }
    }
}

fn resolve_herb_in(herbs: &[HerbSpice], name: &str) -> PairingRef {
    match herbs.iter().position(|h| h.name == name) {
        Some(index) => PairingRef::Listed(index),
        None => {
            trace!(name, "Companion is not in the herb matrix");
            PairingRef::Unlisted(name.to_string())
        }
    }
}
