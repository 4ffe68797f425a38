use super::{CategoryFilter, PairingGroup, TextQuery, groups};
use crate::catalog::{Catalog, Cheese, CheeseCategory};

/// Display label of a cheese category, as used by the category tabs.
pub fn category_label(category: CheeseCategory) -> &'static str {
    match category {
        CheeseCategory::Soft => "Soft",
        CheeseCategory::SemiSoft => "Semi-Soft",
        CheeseCategory::SemiHard => "Semi-Hard",
        CheeseCategory::Hard => "Hard",
        CheeseCategory::Blue => "Blue",
        CheeseCategory::Fresh => "Fresh",
    }
}

/// Cheeses in `category` whose name, origin or flavor contain the query.
pub fn filter<'a>(
    catalog: &'a Catalog,
    category: CategoryFilter<CheeseCategory>,
    query: &str,
) -> Vec<&'a Cheese> {
    let query = TextQuery::new(query);
    catalog
        .cheeses()
        .iter()
        .filter(|c| category.matches(&c.category))
        .filter(|c| query.matches_any([c.name.as_str(), c.origin.as_str(), c.flavor.as_str()]))
        .collect()
}

/// Non-empty pairing lists of a cheese, wines first.
pub fn pairings(cheese: &Cheese) -> Vec<PairingGroup<'_>> {
    let p = &cheese.pairings;
    groups([
        ("wines", "Wines", p.wines.as_slice()),
        ("fruits", "Fruits", p.fruits.as_slice()),
        ("nuts", "Nuts", p.nuts.as_slice()),
        ("condiments", "Condiments & Spreads", p.condiments.as_slice()),
        ("breads", "Breads & Crackers", p.breads.as_slice()),
        ("meats", "Charcuterie", p.meats.as_slice()),
        ("beverages", "Other Beverages", p.beverages.as_slice()),
    ])
}

pub fn pairings_for<'a>(catalog: &'a Catalog, id: &str) -> Option<Vec<PairingGroup<'a>>> {
    catalog.cheese(id).map(pairings)
}
