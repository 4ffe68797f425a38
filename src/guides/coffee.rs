use super::{CategoryFilter, PairingGroup, groups};
use crate::catalog::{Catalog, Coffee, CoffeeCategory};

pub fn category_label(category: CoffeeCategory) -> &'static str {
    match category {
        CoffeeCategory::Roast => "By Roast",
        CoffeeCategory::Preparation => "By Preparation",
        CoffeeCategory::Origin => "By Origin",
    }
}

pub fn filter(catalog: &Catalog, category: CategoryFilter<CoffeeCategory>) -> Vec<&Coffee> {
    catalog
        .coffees()
        .iter()
        .filter(|c| category.matches(&c.category))
        .collect()
}

/// Non-empty pairing lists of a coffee, ending with what to avoid.
pub fn pairings(coffee: &Coffee) -> Vec<PairingGroup<'_>> {
    let p = &coffee.pairings;
    groups([
        ("pastries", "Pastries", p.pastries.as_slice()),
        ("cakes", "Cakes & Breads", p.cakes.as_slice()),
        ("cookies", "Cookies", p.cookies.as_slice()),
        ("chocolate", "Chocolate", p.chocolate.as_slice()),
        ("fruits", "Fruits", p.fruits.as_slice()),
        ("other", "Other Desserts", p.other.as_slice()),
        ("avoid", "Best Avoided", p.avoid.as_slice()),
    ])
}

pub fn pairings_for<'a>(catalog: &'a Catalog, id: &str) -> Option<Vec<PairingGroup<'a>>> {
    catalog.coffee(id).map(pairings)
}
