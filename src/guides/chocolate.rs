use super::{CategoryFilter, PairingGroup, TextQuery, groups};
use crate::catalog::{Catalog, Chocolate, ChocolateKind};

pub fn kind_label(kind: ChocolateKind) -> &'static str {
    match kind {
        ChocolateKind::Dark => "Dark",
        ChocolateKind::Milk => "Milk",
        ChocolateKind::White => "White",
        ChocolateKind::Specialty => "Specialty",
    }
}

/// Chocolates of `kind` whose name or flavor contain the query.
pub fn filter<'a>(
    catalog: &'a Catalog,
    kind: CategoryFilter<ChocolateKind>,
    query: &str,
) -> Vec<&'a Chocolate> {
    let query = TextQuery::new(query);
    catalog
        .chocolates()
        .iter()
        .filter(|c| kind.matches(&c.kind))
        .filter(|c| query.matches(&c.name) || query.matches(&c.flavor))
        .collect()
}

pub fn pairings(chocolate: &Chocolate) -> Vec<PairingGroup<'_>> {
    let p = &chocolate.pairings;
    groups([
        ("wines", "Wines", p.wines.as_slice()),
        ("spirits", "Spirits & Liqueurs", p.spirits.as_slice()),
        ("fruits", "Fruits", p.fruits.as_slice()),
        ("nuts", "Nuts", p.nuts.as_slice()),
        ("cheeses", "Cheeses", p.cheeses.as_slice()),
        ("spices", "Spices & Flavors", p.spices.as_slice()),
        ("beverages", "Other Beverages", p.beverages.as_slice()),
        ("avoid", "Avoid", p.avoid.as_slice()),
    ])
}

pub fn pairings_for<'a>(catalog: &'a Catalog, id: &str) -> Option<Vec<PairingGroup<'a>>> {
    catalog.chocolate(id).map(pairings)
}
