//! Flavor pairing finder.
//!
//! Pairings of an ingredient come from its classic (`best_pairings`) and
//! surprising (`unexpected_pairings`) partner lists. Earlier entries are
//! stronger matches, so scores step down with list position.

use super::{CategoryFilter, TextQuery};
use crate::catalog::{Catalog, FlavorCategory, FlavorProfile, PairingRef};
use itertools::Itertools;
use serde::Serialize;

/// Maximum number of autocomplete suggestions.
pub const MAX_SUGGESTIONS: usize = 8;

const BEST_BASE_SCORE: u32 = 95;
const BEST_STEP: u32 = 3;
const UNEXPECTED_BASE_SCORE: u32 = 82;
const UNEXPECTED_STEP: u32 = 2;

/// The other side of a pairing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "profile", rename_all = "snake_case")]
pub enum PairedIngredient<'a> {
    /// A profile from the catalog.
    Listed(&'a FlavorProfile),
    /// A partner with no profile of its own; only name, id and category
    /// are meaningful.
    Placeholder(FlavorProfile),
}

impl PairedIngredient<'_> {
    pub fn profile(&self) -> &FlavorProfile {
        match self {
            PairedIngredient::Listed(profile) => *profile,
            PairedIngredient::Placeholder(profile) => profile,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, PairedIngredient::Placeholder(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairingResult<'a> {
    pub ingredient: PairedIngredient<'a>,
    pub score: u32,
    pub is_unexpected: bool,
    /// Flavor notes both ingredients have, for classic pairings with a profile.
    pub shared_notes: Vec<&'a str>,
}

/// Profiles whose name, flavor notes or category contain the query.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a FlavorProfile> {
    let query = TextQuery::new(query);
    catalog
        .flavors()
        .iter()
        .filter(|p| {
            query.matches(&p.name)
                || query.matches_any(p.flavor_notes.iter().map(String::as_str))
                || query.matches(p.category.as_str())
        })
        .collect()
}

/// Autocomplete list for the search box; empty until something is typed.
pub fn suggestions<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a FlavorProfile> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let mut results = search(catalog, query);
    results.truncate(MAX_SUGGESTIONS);
    results
}

/// Categories that have at least one profile, in first-seen order.
pub fn categories(catalog: &Catalog) -> Vec<FlavorCategory> {
    catalog.flavors().iter().map(|p| p.category).unique().collect()
}

pub fn by_category(catalog: &Catalog, category: FlavorCategory) -> Vec<&FlavorProfile> {
    catalog
        .flavors()
        .iter()
        .filter(|p| p.category == category)
        .collect()
}

fn paired<'a>(
    catalog: &'a Catalog,
    link: &PairingRef,
    fallback: FlavorCategory,
) -> PairedIngredient<'a> {
    match link {
        PairingRef::Listed(index) => PairedIngredient::Listed(&catalog.flavors()[*index]),
        PairingRef::Unlisted(name) => {
            PairedIngredient::Placeholder(FlavorProfile::placeholder(name, fallback))
        }
    }
}

/// Scored pairings of the ingredient `id`: classic partners first, then
/// surprising ones, optionally narrowed to one category.
///
/// Partners without a profile appear as placeholders, filed under herb for
/// classic pairings and spice for surprising ones. Returns an empty list for
/// an unknown id.
pub fn pairings_for<'a>(
    catalog: &'a Catalog,
    id: &str,
    category: CategoryFilter<FlavorCategory>,
) -> Vec<PairingResult<'a>> {
    let Some(index) = catalog.flavor_index(id) else {
        return Vec::new();
    };
    let selected = &catalog.flavors()[index];

    let best = catalog
        .best_pairings(index)
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let shared_notes = match link {
                PairingRef::Listed(other) => catalog.flavors()[*other]
                    .flavor_notes
                    .iter()
                    .filter(|note| selected.flavor_notes.contains(*note))
                    .map(String::as_str)
                    .collect(),
                PairingRef::Unlisted(_) => Vec::new(),
            };
            PairingResult {
                ingredient: paired(catalog, link, FlavorCategory::Herb),
                score: BEST_BASE_SCORE.saturating_sub(i as u32 * BEST_STEP),
                is_unexpected: false,
                shared_notes,
            }
        });

    let unexpected = catalog
        .unexpected_pairings(index)
        .iter()
        .enumerate()
        .map(|(i, link)| PairingResult {
            ingredient: paired(catalog, link, FlavorCategory::Spice),
            score: UNEXPECTED_BASE_SCORE.saturating_sub(i as u32 * UNEXPECTED_STEP),
            is_unexpected: true,
            shared_notes: Vec::new(),
        });

    best.chain(unexpected)
        .filter(|r| category.matches(&r.ingredient.profile().category))
        .collect()
}

/// How well two ingredients, given by id, go together on a 0-100 scale.
///
/// A partner named in the first ingredient's classic list scores 92, in its
/// surprising list 82. Otherwise shared basic tastes score `50 + 15` each,
/// then shared cuisines `40 + 10` each, and anything else 39. Unknown ids
/// score 0.
pub fn match_score(catalog: &Catalog, first: &str, second: &str) -> u32 {
    let (Some(a), Some(b)) = (catalog.flavor(first), catalog.flavor(second)) else {
        return 0;
    };
    let needle = second.to_lowercase();
    let named_in = |list: &[String]| list.iter().any(|p| p.to_lowercase().contains(&needle));

    if named_in(&a.best_pairings) {
        return 92;
    }
    if named_in(&a.unexpected_pairings) {
        return 82;
    }

    let shared_aromas = a
        .aromatic_profile
        .iter()
        .filter(|aroma| b.aromatic_profile.contains(*aroma))
        .count() as u32;
    if shared_aromas > 0 {
        return 50 + shared_aromas * 15;
    }

    let shared_cuisines = a
        .cuisine_affinities
        .iter()
        .filter(|c| b.cuisine_affinities.contains(*c))
        .count() as u32;
    if shared_cuisines > 0 {
        return 40 + shared_cuisines * 10;
    }

    39
}
