//! Glycemic index guide.
//!
//! Glycemic index (GI) ranks how quickly a food raises blood sugar; glycemic
//! load (GL) weights that by the carbohydrate in one serving.

use super::{CategoryFilter, TextQuery};
use crate::catalog::{Catalog, GiAlternative, GiCategory, GiFood};
use serde::Serialize;

labeled_enum! {
    pub enum GlycemicLevel {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

labeled_enum! {
    pub enum SortKey {
        Name => "name",
        Gi => "gi",
        Gl => "gl",
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Gi
    }
}

/// GI of 55 or less is low, up to 69 medium.
pub fn gi_level(gi: u32) -> GlycemicLevel {
    if gi <= 55 {
        GlycemicLevel::Low
    } else if gi <= 69 {
        GlycemicLevel::Medium
    } else {
        GlycemicLevel::High
    }
}

/// GL of 10 or less is low, up to 19 medium.
pub fn gl_level(gl: u32) -> GlycemicLevel {
    if gl <= 10 {
        GlycemicLevel::Low
    } else if gl <= 19 {
        GlycemicLevel::Medium
    } else {
        GlycemicLevel::High
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GiFilter {
    pub category: CategoryFilter<GiCategory>,
    pub query: String,
    pub low_gi_only: bool,
    pub sort: SortKey,
}

/// Matching foods, sorted ascending by the chosen key. Foods that compare
/// equal keep their table order.
pub fn filter<'a>(catalog: &'a Catalog, options: &GiFilter) -> Vec<&'a GiFood> {
    let query = TextQuery::new(&options.query);
    let mut foods: Vec<&GiFood> = catalog
        .glycemic()
        .foods
        .iter()
        .filter(|f| options.category.matches(&f.category))
        .filter(|f| query.matches(&f.name) || query.matches(f.category.as_str()))
        .filter(|f| !options.low_gi_only || gi_level(f.gi) == GlycemicLevel::Low)
        .collect();

    match options.sort {
        SortKey::Name => foods.sort_by_cached_key(|f| f.name.to_lowercase()),
        SortKey::Gi => foods.sort_by_key(|f| f.gi),
        SortKey::Gl => foods.sort_by_key(|f| f.gl),
    }
    foods
}

/// A lower-GI swap together with the food it swaps to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Swap<'a> {
    pub alternative: &'a GiAlternative,
    pub to: &'a GiFood,
}

/// Suggested swaps away from the food `id`.
pub fn alternatives<'a>(catalog: &'a Catalog, id: &str) -> Vec<Swap<'a>> {
    catalog
        .glycemic()
        .alternatives
        .iter()
        .filter(|alt| alt.from_id == id)
        .filter_map(|alt| {
            catalog.gi_food(&alt.to_id).map(|to| Swap {
                alternative: alt,
                to,
            })
        })
        .collect()
}

/// Display name of a food category, falling back to its tag.
pub fn category_name(catalog: &Catalog, category: GiCategory) -> &str {
    catalog
        .glycemic()
        .categories
        .iter()
        .find(|c| c.id == category)
        .map(|c| c.name.as_str())
        .unwrap_or(category.as_str())
}
