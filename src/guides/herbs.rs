//! Herb and spice matrix.

use super::{CategoryFilter, TextQuery};
use crate::catalog::{Catalog, HerbCategory, HerbSpice};

pub fn category_label(category: HerbCategory) -> &'static str {
    match category {
        HerbCategory::Herb => "Fresh Herbs",
        HerbCategory::Spice => "Spices",
        HerbCategory::Blend => "Blends",
    }
}

/// Entries in `category` whose name, flavor or any cuisine contain the query.
pub fn filter<'a>(
    catalog: &'a Catalog,
    category: CategoryFilter<HerbCategory>,
    query: &str,
) -> Vec<&'a HerbSpice> {
    let query = TextQuery::new(query);
    catalog
        .herbs_spices()
        .iter()
        .filter(|h| category.matches(&h.category))
        .filter(|h| {
            query.matches(&h.name)
                || query.matches(&h.flavor)
                || query.matches_any(h.cuisines.iter().map(String::as_str))
        })
        .collect()
}

/// Other matrix entries named as companions of `id`, in matrix order.
///
/// Companions that are not themselves in the matrix are left out; see
/// [`Catalog::herb_companions`] for the full resolved list.
pub fn pairing_suggestions<'a>(catalog: &'a Catalog, id: &str) -> Vec<&'a HerbSpice> {
    let Some(index) = catalog.herb_index(id) else {
        return Vec::new();
    };
    let mut listed: Vec<usize> = catalog
        .herb_companions(index)
        .iter()
        .filter_map(|link| link.listed())
        .filter(|&other| other != index)
        .collect();
    listed.sort_unstable();
    listed.dedup();
    listed
        .into_iter()
        .map(|i| &catalog.herbs_spices()[i])
        .collect()
}
