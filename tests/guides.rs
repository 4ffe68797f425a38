//! Guide filtering and pairing tests
//!
mod common;
use common::*;
use pairdish::guides::flavor::PairedIngredient;
use pairdish::guides::glycemic::{GiFilter, GlycemicLevel, SortKey};
use pairdish::prelude::*;

#[cfg(test)]
mod flavor_tests {
    use super::*;

    fn names(results: &[flavor::PairingResult<'_>]) -> Vec<String> {
        results
            .iter()
            .map(|r| r.ingredient.profile().name.clone())
            .collect()
    }

    #[test]
    fn test_salmon_pairings_scores_step_down() {
        let catalog = catalog();
        let pairings = flavor::pairings_for(&catalog, "salmon", CategoryFilter::All);

        assert_eq!(pairings.len(), 14);
        let best: Vec<u32> = pairings
            .iter()
            .filter(|p| !p.is_unexpected)
            .map(|p| p.score)
            .collect();
        assert_eq!(best, vec![95, 92, 89, 86, 83, 80, 77, 74]);
        let unexpected: Vec<u32> = pairings
            .iter()
            .filter(|p| p.is_unexpected)
            .map(|p| p.score)
            .collect();
        assert_eq!(unexpected, vec![82, 80, 78, 76, 74, 72]);
    }

    #[test]
    fn test_missing_partners_become_placeholders() {
        let catalog = catalog();
        let pairings = flavor::pairings_for(&catalog, "salmon", CategoryFilter::All);

        let dill = &pairings[0];
        assert!(dill.ingredient.is_placeholder());
        assert_eq!(dill.ingredient.profile().id, "dill");
        assert_eq!(dill.ingredient.profile().category, FlavorCategory::Herb);

        let lemon = &pairings[1];
        assert!(matches!(lemon.ingredient, PairedIngredient::Listed(p) if p.id == "lemon"));

        let miso = pairings.iter().find(|p| p.ingredient.profile().name == "miso").unwrap();
        assert!(miso.is_unexpected);
        assert_eq!(miso.ingredient.profile().category, FlavorCategory::Spice);

        let coffee_rub = pairings.last().unwrap();
        assert_eq!(coffee_rub.ingredient.profile().id, "coffee-rub");
    }

    #[test]
    fn test_category_filter_narrows_pairings() {
        let catalog = catalog();

        let fruit = flavor::pairings_for(
            &catalog,
            "salmon",
            CategoryFilter::Only(FlavorCategory::Fruit),
        );
        assert_eq!(names(&fruit), vec!["Lemon", "Mango"]);

        let veg = flavor::pairings_for(
            &catalog,
            "salmon",
            CategoryFilter::Only(FlavorCategory::Vegetable),
        );
        assert_eq!(names(&veg), vec!["Asparagus", "Beets"]);
        assert_eq!(veg[0].score, 80);
    }

    #[test]
    fn test_shared_notes_on_classic_pairings() {
        let catalog = catalog();
        let pairings = flavor::pairings_for(&catalog, "basil", CategoryFilter::All);

        assert_eq!(pairings[0].ingredient.profile().id, "tomato");
        assert_eq!(pairings[0].shared_notes, vec!["sweet"]);

        let lemon = pairings
            .iter()
            .find(|p| p.ingredient.profile().id == "lemon")
            .unwrap();
        assert_eq!(lemon.score, 83);
        assert_eq!(lemon.shared_notes, vec!["fresh"]);
    }

    #[test]
    fn test_unknown_ingredient_has_no_pairings() {
        let catalog = catalog();
        assert!(flavor::pairings_for(&catalog, "dragonfruit", CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_match_score() {
        let catalog = catalog();

        assert_eq!(flavor::match_score(&catalog, "salmon", "lemon"), 92);
        assert_eq!(flavor::match_score(&catalog, "salmon", "mango"), 82);
        // Both sweet.
        assert_eq!(flavor::match_score(&catalog, "basil", "rosemary"), 65);
        // Fatty and umami.
        assert_eq!(flavor::match_score(&catalog, "chicken", "salmon"), 80);
        assert_eq!(flavor::match_score(&catalog, "salmon", "unicorn"), 0);
    }

    #[test]
    fn test_search_and_suggestions() {
        let catalog = catalog();

        assert_eq!(flavor::search(&catalog, "SWEET").len(), 14);
        assert_eq!(flavor::suggestions(&catalog, "sweet").len(), flavor::MAX_SUGGESTIONS);
        assert!(flavor::suggestions(&catalog, "   ").is_empty());
        assert_eq!(flavor::search(&catalog, "").len(), catalog.flavors().len());
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let catalog = catalog();

        assert_eq!(
            flavor::categories(&catalog),
            vec![
                FlavorCategory::Protein,
                FlavorCategory::Vegetable,
                FlavorCategory::Herb,
                FlavorCategory::Spice,
                FlavorCategory::Fruit,
                FlavorCategory::Dairy,
                FlavorCategory::Grain,
            ]
        );
        assert_eq!(flavor::by_category(&catalog, FlavorCategory::Herb).len(), 2);
    }
}

#[cfg(test)]
mod pairing_guide_tests {
    use super::*;

    #[test]
    fn test_cheese_filter() {
        let catalog = catalog();

        let soft = cheese::filter(&catalog, CategoryFilter::Only(CheeseCategory::Soft), "");
        let ids: Vec<&str> = soft.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["brie", "camembert"]);

        let french = cheese::filter(&catalog, CategoryFilter::All, "france");
        assert_eq!(french.len(), 4);

        let none = cheese::filter(&catalog, CategoryFilter::Only(CheeseCategory::Blue), "france");
        assert_eq!(none.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["roquefort"]);
    }

    #[test]
    fn test_cheese_pairing_groups() {
        let catalog = catalog();
        let groups = cheese::pairings_for(&catalog, "brie").unwrap();

        let labels: Vec<&str> = groups.iter().map(|g| g.label).collect();
        assert_eq!(
            labels,
            vec![
                "Wines",
                "Fruits",
                "Nuts",
                "Condiments & Spreads",
                "Breads & Crackers",
                "Charcuterie",
                "Other Beverages",
            ]
        );
        assert_eq!(groups[0].items.len(), 4);
        assert!(cheese::pairings_for(&catalog, "velveeta").is_none());
    }

    #[test]
    fn test_empty_groups_are_dropped() {
        let catalog = catalog();
        let mut brie = catalog.cheese("brie").unwrap().clone();
        brie.pairings.nuts.clear();

        let groups = cheese::pairings(&brie);
        assert_eq!(groups.len(), 6);
        assert!(groups.iter().all(|g| g.key != "nuts"));
    }

    #[test]
    fn test_coffee_guide() {
        let catalog = catalog();

        let origins = coffee::filter(&catalog, CategoryFilter::Only(CoffeeCategory::Origin));
        assert_eq!(origins.len(), 3);
        assert_eq!(coffee::filter(&catalog, CategoryFilter::All).len(), 13);
        assert_eq!(coffee::category_label(CoffeeCategory::Roast), "By Roast");

        let groups = coffee::pairings_for(&catalog, "espresso").unwrap();
        assert_eq!(groups.len(), 7);
        assert_eq!(groups.last().unwrap().label, "Best Avoided");
    }

    #[test]
    fn test_chocolate_guide() {
        let catalog = catalog();

        let dark = chocolate::filter(&catalog, CategoryFilter::Only(ChocolateKind::Dark), "");
        assert_eq!(dark.len(), 4);
        assert_eq!(
            chocolate::filter(&catalog, "specialty".parse().unwrap(), "").len(),
            4
        );

        let groups = chocolate::pairings_for(&catalog, "dark-70").unwrap();
        assert_eq!(groups.len(), 8);
        assert_eq!(groups[1].label, "Spirits & Liqueurs");
    }

    #[test]
    fn test_category_filter_parses() {
        let all: CategoryFilter<CheeseCategory> = "all".parse().unwrap();
        assert_eq!(all, CategoryFilter::All);

        let blue: CategoryFilter<CheeseCategory> = "blue".parse().unwrap();
        assert_eq!(blue, CategoryFilter::Only(CheeseCategory::Blue));

        let err = "squeaky".parse::<CategoryFilter<CheeseCategory>>().unwrap_err();
        assert_eq!(err.to_string(), "'squeaky' is not a valid CheeseCategory");
    }
}

#[cfg(test)]
mod herb_tests {
    use super::*;

    #[test]
    fn test_herb_filter() {
        let catalog = catalog();

        let blends = herbs::filter(&catalog, CategoryFilter::Only(HerbCategory::Blend), "");
        assert_eq!(blends.len(), 3);

        let indian = herbs::filter(&catalog, CategoryFilter::All, "Indian");
        assert_eq!(indian.len(), 10);
        assert_eq!(herbs::category_label(HerbCategory::Herb), "Fresh Herbs");
    }

    #[test]
    fn test_pairing_suggestions_in_matrix_order() {
        let catalog = catalog();
        let ids: Vec<&str> = herbs::pairing_suggestions(&catalog, "basil")
            .iter()
            .map(|h| h.id.as_str())
            .collect();

        // Garlic is not in the matrix.
        assert_eq!(ids, vec!["parsley", "thyme", "mint", "oregano"]);
        assert!(herbs::pairing_suggestions(&catalog, "saffron").is_empty());
    }
}

#[cfg(test)]
mod glycemic_tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(glycemic::gi_level(55), GlycemicLevel::Low);
        assert_eq!(glycemic::gi_level(56), GlycemicLevel::Medium);
        assert_eq!(glycemic::gi_level(69), GlycemicLevel::Medium);
        assert_eq!(glycemic::gi_level(70), GlycemicLevel::High);
        assert_eq!(glycemic::gl_level(10), GlycemicLevel::Low);
        assert_eq!(glycemic::gl_level(19), GlycemicLevel::Medium);
        assert_eq!(glycemic::gl_level(20), GlycemicLevel::High);
    }

    #[test]
    fn test_filter_sorts_by_gi_keeping_table_order_on_ties() {
        let catalog = catalog();
        let options = GiFilter {
            category: CategoryFilter::Only(GiCategory::Grains),
            ..Default::default()
        };
        let foods = glycemic::filter(&catalog, &options);
        let ids: Vec<&str> = foods.iter().take(3).map(|f| f.id.as_str()).collect();

        assert_eq!(foods.len(), 13);
        assert_eq!(ids, vec!["flour-tortilla", "steel-cut-oats", "whole-wheat-pasta"]);
        assert_eq!(foods.last().unwrap().id, "white-bread");
    }

    #[test]
    fn test_low_gi_only_and_name_sort() {
        let catalog = catalog();
        let options = GiFilter {
            low_gi_only: true,
            sort: SortKey::Name,
            ..Default::default()
        };
        let foods = glycemic::filter(&catalog, &options);

        assert_eq!(foods.len(), 45);
        assert!(foods.iter().all(|f| f.gi <= 55));
        assert!(
            foods
                .windows(2)
                .all(|w| w[0].name.to_lowercase() <= w[1].name.to_lowercase())
        );
    }

    #[test]
    fn test_query_matches_name_or_category() {
        let catalog = catalog();
        let options = GiFilter {
            query: "RICE".to_string(),
            ..Default::default()
        };
        assert_eq!(glycemic::filter(&catalog, &options).len(), 4);
    }

    #[test]
    fn test_alternatives() {
        let catalog = catalog();
        let swaps = glycemic::alternatives(&catalog, "white-rice");
        let to: Vec<&str> = swaps.iter().map(|s| s.to.id.as_str()).collect();

        assert_eq!(to, vec!["brown-rice", "quinoa", "cauliflower"]);
        assert_eq!(swaps[0].alternative.gi_reduction, 23);
        assert!(glycemic::alternatives(&catalog, "not-a-food").is_empty());
        assert_eq!(
            glycemic::category_name(&catalog, GiCategory::Grains),
            "Grains & Breads"
        );
    }
}

#[cfg(test)]
mod substitution_tests {
    use super::*;

    #[test]
    fn test_two_dietary_tags_require_both() {
        let catalog = catalog();
        let milk = catalog.ingredient("milk").unwrap();

        // Almond milk is vegan and dairy-free but not nut-free.
        let almond = milk.substitutions.iter().find(|s| s.id == "milk-almond").unwrap();
        assert!(almond.dietary_tags.contains(&DietaryTag::Vegan));
        assert!(!almond.dietary_tags.contains(&DietaryTag::NutFree));

        let filter: DietaryFilter = [DietaryTag::Vegan, DietaryTag::NutFree].into_iter().collect();
        let ids: Vec<&str> = substitutions::filter_substitutions(milk, &filter)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["milk-oat", "milk-coconut", "milk-soy"]);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let catalog = catalog();
        let everything = DietaryFilter::new();
        let subs = substitutions::substitutions_for(&catalog, "butter", &everything).unwrap();
        assert_eq!(subs.len(), 5);
        assert!(substitutions::substitutions_for(&catalog, "lard", &everything).is_none());
    }

    #[test]
    fn test_dietary_filter_toggle() {
        let mut filter = DietaryFilter::new();
        filter.toggle(DietaryTag::Keto);
        filter.toggle(DietaryTag::Vegan);
        assert_eq!(filter.selected(), &[DietaryTag::Keto, DietaryTag::Vegan]);

        filter.toggle(DietaryTag::Keto);
        assert!(!filter.contains(DietaryTag::Keto));
        assert!(filter.matches(&[DietaryTag::Vegan, DietaryTag::DairyFree]));

        filter.clear();
        assert!(filter.is_empty());
        assert!(filter.matches(&[]));
    }

    #[test]
    fn test_search() {
        let catalog = catalog();

        assert_eq!(substitutions::search(&catalog, "").len(), 11);
        assert_eq!(substitutions::search(&catalog, "baking").len(), 10);
        assert!(substitutions::search(&catalog, "zzz").is_empty());
        assert_eq!(substitutions::tag_label(&catalog, DietaryTag::LowSugar), "Low Sugar");
    }
}
