use super::{DietaryFilter, TextQuery};
use crate::catalog::{Catalog, DietaryTag, Ingredient, Substitution};

/// Ingredients whose name or any common use contain the query. A blank query
/// lists every ingredient.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Ingredient> {
    let query = TextQuery::new(query);
    catalog
        .substitutions()
        .ingredients
        .iter()
        .filter(|ing| {
            query.is_blank()
                || query.matches(&ing.name)
                || query.matches_any(ing.common_uses.iter().map(String::as_str))
        })
        .collect()
}

/// Substitutes for `ingredient` carrying every tag in `filter`.
pub fn filter_substitutions<'a>(
    ingredient: &'a Ingredient,
    filter: &DietaryFilter,
) -> Vec<&'a Substitution> {
    ingredient
        .substitutions
        .iter()
        .filter(|sub| filter.matches(&sub.dietary_tags))
        .collect()
}

/// Substitutes for the ingredient `id`, or `None` if there is no such
/// ingredient.
pub fn substitutions_for<'a>(
    catalog: &'a Catalog,
    id: &str,
    filter: &DietaryFilter,
) -> Option<Vec<&'a Substitution>> {
    catalog
        .ingredient(id)
        .map(|ing| filter_substitutions(ing, filter))
}

/// Display label of a dietary tag from the catalog's tag list.
pub fn tag_label(catalog: &Catalog, tag: DietaryTag) -> &str {
    catalog
        .substitutions()
        .dietary_tags
        .iter()
        .find(|t| t.id == tag)
        .map(|t| t.label.as_str())
        .unwrap_or(tag.as_str())
}
