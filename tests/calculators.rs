//! Calculator tests
//!
//! The calculators are pure functions of their inputs, so these tests only
//! touch the catalog for meal prep.
mod common;
use common::*;
use pairdish::calculators::nutrition::{
    ActivityLevel, CalorieGoal, Macro, MacroPreset, MacroSplit, Sex, UnitSystem, bmr,
};
use pairdish::calculators::oven::{
    COMMON_TEMPS, GAS_MARKS, celsius_to_fahrenheit, fahrenheit_to_celsius, nearest_gas_mark,
};
use pairdish::calculators::party::{EventType, FOOD_CATEGORIES, FoodCategoryId, MealTime};
use pairdish::calculators::sourdough::{BREAD_PRESETS, HydrationLevel};
use pairdish::calculators::wine::{ServingStyle, WineKind, WineRatio};
use pairdish::prelude::*;

#[cfg(test)]
mod oven_tests {
    use super::*;

    #[test]
    fn test_350_fahrenheit_round_trip() {
        let celsius = fahrenheit_to_celsius(350.0);
        assert!((celsius_to_fahrenheit(celsius) - 350.0).abs() < 1e-9);

        let forward = oven::convert("350", TemperatureUnit::Fahrenheit, false);
        assert_eq!(forward.celsius, 177.0);
        assert_eq!(forward.gas_mark, "4");
        assert_eq!(forward.heat_level, "Moderate");

        let back = oven::convert(&forward.celsius.to_string(), TemperatureUnit::Celsius, false);
        assert!((back.fahrenheit - 350.0).abs() <= 1.0);
    }

    #[test]
    fn test_gas_mark_input() {
        let c = oven::convert("½", TemperatureUnit::GasMark, false);
        assert_eq!(c.fahrenheit, 250.0);
        assert_eq!(c.celsius, 121.0);
        assert_eq!(c.heat_level, "Very Low");

        let c = oven::convert(" 6 ", TemperatureUnit::GasMark, false);
        assert_eq!(c.fahrenheit, 400.0);
    }

    #[test]
    fn test_convection_lowers_by_25() {
        let c = oven::convert("400", TemperatureUnit::Fahrenheit, true);
        assert_eq!(c.fahrenheit, 375.0);
        assert_eq!(c.gas_mark, "5");

        // Lands exactly between ½ and 1.
        let c = oven::convert("287.5", TemperatureUnit::Fahrenheit, true);
        assert_eq!(c.fahrenheit, 263.0);
        assert_eq!(c.gas_mark, "1");
    }

    #[test]
    fn test_unparseable_input_reads_zero() {
        let c = oven::convert("hot", TemperatureUnit::Fahrenheit, false);
        assert_eq!(c.fahrenheit, 0.0);
        assert_eq!(c.gas_mark, "¼");

        let c = oven::convert("200abc", TemperatureUnit::Celsius, false);
        assert_eq!(c.fahrenheit, 392.0);
    }

    #[test]
    fn test_every_gas_mark_maps_to_itself() {
        for (mark, f) in GAS_MARKS {
            assert_eq!(nearest_gas_mark(f), mark);
        }
        assert_eq!(COMMON_TEMPS.len(), 11);
    }
}

#[cfg(test)]
mod nutrition_tests {
    use super::*;

    #[test]
    fn test_bmr_follows_mifflin_st_jeor() {
        assert_eq!(bmr(70.0, 170.0, 30.0, Sex::Male), 1617.5);
        assert_eq!(bmr(70.0, 170.0, 30.0, Sex::Female), 1451.5);
    }

    #[test]
    fn test_default_plan() {
        let plan = MacroPlan::compute(&MacroInputs::default());

        assert_eq!(plan.bmr, 1617.5);
        assert_eq!(plan.tdee, 2507.0);
        assert_eq!(plan.target_calories, 2507.0);
        assert_eq!(plan.grams.protein, 157.0);
        assert_eq!(plan.grams.carbs, 313.0);
        assert_eq!(plan.grams.fat, 70.0);
    }

    #[test]
    fn test_per_meal_grams() {
        let grams = MacroPlan::compute(&MacroInputs::default()).grams;

        let three = grams.per_meal(3);
        assert_eq!((three.protein, three.carbs, three.fat), (52.0, 104.0, 23.0));
        let four = grams.per_meal(4);
        assert_eq!((four.protein, four.carbs, four.fat), (39.0, 78.0, 18.0));
        assert_eq!(grams.per_meal(0), grams);
    }

    #[test]
    fn test_imperial_units_convert_first() {
        let inputs = MacroInputs {
            weight: 154.0,
            height: 67.0,
            unit: UnitSystem::Imperial,
            ..Default::default()
        };
        let plan = MacroPlan::compute(&inputs);

        assert!((plan.weight_kg - 69.853168).abs() < 1e-6);
        assert!((plan.height_cm - 170.18).abs() < 1e-9);
    }

    #[test]
    fn test_goal_offsets_target() {
        let inputs = MacroInputs {
            activity: ActivityLevel::Sedentary,
            goal: CalorieGoal::Lose,
            ..Default::default()
        };
        let plan = MacroPlan::compute(&inputs);

        assert_eq!(plan.tdee, 1941.0);
        assert_eq!(
            plan.target_calories,
            plan.tdee + CalorieGoal::Lose.modifier()
        );
    }

    #[test]
    fn test_custom_split_is_used_only_for_custom_preset() {
        let custom = MacroSplit {
            protein: 40.0,
            carbs: 20.0,
            fat: 40.0,
        };
        let mut inputs = MacroInputs {
            preset: MacroPreset::Keto,
            custom,
            ..Default::default()
        };
        assert_eq!(inputs.split(), MacroPreset::Keto.split());

        inputs.preset = MacroPreset::Custom;
        assert_eq!(inputs.split(), custom);
    }

    #[test]
    fn test_rebalance_spreads_the_difference() {
        let split = MacroPreset::Balanced.split().rebalance(Macro::Protein, 35.0);
        assert_eq!(split.protein, 35.0);
        assert_eq!(split.carbs, 45.0);
        assert_eq!(split.fat, 20.0);
    }

    #[test]
    fn test_rebalance_clamps_and_rescales() {
        let split = MacroPreset::Balanced.split().rebalance(Macro::Fat, 90.0);
        assert_eq!(split.total(), 100.0);
        assert!(split.protein >= 4.0);
    }

    #[test]
    fn test_every_preset_sums_to_100() {
        for preset in MacroPreset::ALL {
            assert_eq!(preset.split().total(), 100.0, "{preset}");
        }
    }
}

#[cfg(test)]
mod sourdough_tests {
    use super::*;

    #[test]
    fn test_full_hydration_starter_splits_evenly() {
        let formula = DoughFormula::default();
        let analysis = formula.analyze();

        assert_eq!(analysis.starter_flour, 50.0);
        assert_eq!(analysis.starter_water, 50.0);
        assert_eq!(analysis.starter_flour, formula.starter / 2.0);
    }

    #[test]
    fn test_default_formula_analysis() {
        let analysis = DoughFormula::default().analyze();

        assert_eq!(analysis.total_flour, 550.0);
        assert_eq!(analysis.total_water, 400.0);
        assert!((analysis.hydration - 72.7272727).abs() < 1e-6);
        assert_eq!(analysis.level, HydrationLevel::Medium);
        assert_eq!(analysis.total_weight, 960.0);
    }

    #[test]
    fn test_adjust_to_hydration_changes_only_water() {
        let formula = DoughFormula::default();
        let adjusted = formula.adjust_to_hydration(80.0).unwrap();

        assert_eq!(adjusted.water, 390.0);
        assert_eq!(adjusted.flour, formula.flour);
        assert_eq!(adjusted.total_weight, 1000.0);
        assert!(formula.adjust_to_hydration(0.0).is_none());
        assert!(formula.adjust_to_hydration(f64::NAN).is_none());
    }

    #[test]
    fn test_scale_to_weight() {
        let scaled = DoughFormula::default().scale_to_weight(1920.0).unwrap();

        assert_eq!(scaled.flour, 1000.0);
        assert_eq!(scaled.water, 700.0);
        assert_eq!(scaled.total_weight, 1920.0);
        assert!(DoughFormula::default().scale_to_weight(-5.0).is_none());
    }

    #[test]
    fn test_presets_and_levels() {
        assert_eq!(BREAD_PRESETS.len(), 5);
        assert_eq!(HydrationLevel::classify(59.9), HydrationLevel::VeryLow);
        assert_eq!(HydrationLevel::classify(70.0), HydrationLevel::Medium);
        assert_eq!(HydrationLevel::classify(85.0), HydrationLevel::VeryHigh);
    }
}

#[cfg(test)]
mod party_tests {
    use super::*;

    fn quantity_of(plan: &party::PartyPlan, id: FoodCategoryId) -> &party::FoodQuantity {
        plan.quantities
            .iter()
            .find(|q| q.category.id == id)
            .expect("every category is planned")
    }

    #[test]
    fn test_default_party_plan() {
        let plan = PartyInputs::default().plan();

        assert_eq!(plan.multiplier, 1.0);
        assert_eq!(plan.quantities.len(), FOOD_CATEGORIES.len());

        let meat = quantity_of(&plan, FoodCategoryId::Meat);
        assert_eq!(meat.raw_oz, 120.0);
        assert_eq!(meat.total_pounds, Some(7.5));
        assert_eq!(meat.per_person, "6 oz");

        let apps = quantity_of(&plan, FoodCategoryId::Appetizers);
        assert_eq!(apps.total_pieces, Some(100.0));

        assert_eq!(plan.budget.budget, 160.0);
        assert_eq!(plan.budget.moderate, 300.0);
        assert_eq!(plan.budget.premium, 500.0);
    }

    #[test]
    fn test_children_eat_less() {
        let inputs = PartyInputs {
            child_count: 10,
            ..Default::default()
        };
        assert_eq!(inputs.adult_equivalent(), 16.0);
    }

    #[test]
    fn test_long_event_and_heavy_eaters_raise_multiplier() {
        let inputs = PartyInputs {
            duration: 5.0,
            heavy_eaters: 10,
            ..Default::default()
        };
        assert!((inputs.multiplier() - 1.1 * 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_cocktail_boosts_appetizers_and_appetizer_meal_shrinks_mains() {
        let cocktail = PartyInputs {
            event_type: EventType::Cocktail,
            ..Default::default()
        }
        .plan();
        // 20 guests x 5 pieces x 0.8 = 80, boosted by 1.8.
        assert_eq!(
            quantity_of(&cocktail, FoodCategoryId::Appetizers).total_pieces,
            Some(144.0)
        );

        let apps_only = PartyInputs {
            meal_time: MealTime::Appetizers,
            ..Default::default()
        }
        .plan();
        let meat = quantity_of(&apps_only, FoodCategoryId::Meat);
        assert!((meat.raw_oz - 20.0 * 6.0 * 0.6 * 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_clamped_inputs() {
        let inputs = PartyInputs {
            guest_count: 1000,
            child_count: 5000,
            duration: 0.0,
            heavy_eaters: 4000,
            ..Default::default()
        }
        .clamped();

        assert_eq!(inputs.guest_count, 200);
        assert_eq!(inputs.child_count, 199);
        assert_eq!(inputs.duration, 1.0);
        assert_eq!(inputs.heavy_eaters, 200);

        let tiny = PartyInputs {
            guest_count: 0,
            ..Default::default()
        }
        .clamped();
        assert_eq!(tiny.guest_count, 5);
    }

    #[test]
    fn test_shopping_list_layout() {
        let mut inputs = PartyInputs {
            event_name: "Game Night".to_string(),
            ..Default::default()
        };
        inputs.dietary.vegan = 3;
        let list = inputs.shopping_list();

        assert!(list.starts_with("PARTY FOOD SHOPPING LIST\n"));
        assert!(list.contains("Event: Game Night (Casual Party)"));
        assert!(list.contains("Guests: 20 (20 adults, 0 children)"));
        assert!(list.contains("7.5 lbs"));
        assert!(list.contains("Vegan options for 3 guests"));
        assert!(!list.contains("Vegetarian options"));
        assert!(list.contains("ESTIMATED BUDGET: $300"));
    }

    #[test]
    fn test_shopping_list_sections() {
        let mut inputs = PartyInputs::default();
        inputs.dietary.vegetarian = 2;
        inputs.dietary.gluten_free = 1;
        let list = inputs.shopping_list();

        assert!(list.contains("Duration: 3 hours\n\nQUANTITIES NEEDED:\n------------------\n"));
        assert_eq!(list.lines().filter(|l| l.ends_with(" lbs")).count(), 6);
        assert!(list.contains(
            "\nDIETARY NEEDS:\n--------------\n\
             Vegetarian options for 2 guests\n\
             Gluten-free options for 1 guests\n"
        ));
        assert!(list.ends_with("\n---\nCalculated with PairDish | https://pairdish.com"));

        let plain = PartyInputs::default().shopping_list();
        assert!(!plain.contains("DIETARY NEEDS"));
    }
}

#[cfg(test)]
mod wine_tests {
    use super::*;

    #[test]
    fn test_default_wine_plan() {
        let plan = WineInputs::default().calculate().unwrap();

        assert_eq!(plan.total_glasses, 55.0);
        assert_eq!(plan.red_bottles, 5.0);
        assert_eq!(plan.white_bottles, 5.0);
        assert_eq!(plan.sparkling_bottles, 3.0);
        assert_eq!(plan.total_bottles, 13.0);
        assert_eq!(plan.bottles(WineKind::Sparkling), 3.0);
        assert_eq!(plan.budget.low, 155.0);
        assert_eq!(plan.budget.mid, 325.0);
        assert_eq!(plan.budget.high, 655.0);
    }

    #[test]
    fn test_too_small_events_have_no_plan() {
        let no_guests = WineInputs {
            guests: 0,
            ..Default::default()
        };
        assert!(no_guests.calculate().is_none());

        let too_short = WineInputs {
            hours: 0.25,
            ..Default::default()
        };
        assert!(too_short.calculate().is_none());
    }

    #[test]
    fn test_zero_ratio_buys_nothing() {
        let inputs = WineInputs {
            ratio: WineRatio {
                red: 0.0,
                white: 0.0,
                sparkling: 0.0,
            },
            ..Default::default()
        };
        let plan = inputs.calculate().unwrap();
        assert_eq!(plan.total_bottles, 0.0);
        assert_eq!(plan.budget.high, 0.0);
    }

    #[test]
    fn test_serving_style_scales_glasses() {
        let inputs = WineInputs {
            serving_style: ServingStyle::CocktailHour,
            ..Default::default()
        };
        assert!((inputs.glasses_per_hour() - 0.88).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_adjust_takes_excess_from_others() {
        let ratio = WineRatio::default().adjust(WineKind::Red, 60.0);
        assert_eq!(ratio.red, 60.0);
        assert_eq!(ratio.white, 26.0);
        assert_eq!(ratio.sparkling, 13.0);

        let ratio = WineRatio::default().adjust(WineKind::White, 150.0);
        assert_eq!(ratio.white, 100.0);
        assert_eq!(ratio.red, 0.0);
        assert_eq!(ratio.sparkling, 0.0);
    }
}

#[cfg(test)]
mod meal_prep_tests {
    use super::*;

    fn sample_week(catalog: &Catalog) -> WeekPlan {
        let bowls = catalog.meal_template("chicken-bowls").unwrap();
        let sheet_pan = catalog.meal_template("sheet-pan-chicken").unwrap();
        let mut plan = WeekPlan::new();
        assert!(plan.assign(Day::Monday, MealType::Lunch, bowls));
        assert!(plan.assign(Day::Tuesday, MealType::Lunch, bowls));
        assert!(plan.assign(Day::Monday, MealType::Dinner, sheet_pan));
        plan
    }

    #[test]
    fn test_assign_rejects_wrong_meal_type() {
        let catalog = catalog();
        let oats = catalog.meal_template("overnight-oats").unwrap();
        let mut plan = WeekPlan::new();

        assert!(!plan.assign(Day::Friday, MealType::Dinner, oats));
        assert_eq!(plan.get(Day::Friday, MealType::Dinner), None);
        assert!(plan.assign(Day::Friday, MealType::Breakfast, oats));
        assert_eq!(plan.get(Day::Friday, MealType::Breakfast), Some("overnight-oats"));
    }

    #[test]
    fn test_assignments_run_in_week_order() {
        let catalog = catalog();
        let plan = sample_week(&catalog);
        let order: Vec<_> = plan.assignments().collect();

        assert_eq!(
            order,
            vec![
                (Day::Monday, MealType::Lunch, "chicken-bowls"),
                (Day::Monday, MealType::Dinner, "sheet-pan-chicken"),
                (Day::Tuesday, MealType::Lunch, "chicken-bowls"),
            ]
        );
    }

    #[test]
    fn test_summary_batches_and_shopping_list() {
        let catalog = catalog();
        let summary = sample_week(&catalog).summary(&catalog, 2);

        assert_eq!(summary.total_meals, 3);
        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.items[0].template.id, "chicken-bowls");
        assert_eq!(summary.items[0].count, 2);
        assert_eq!(summary.items[0].total_servings, 4);
        assert_eq!(summary.items[0].batches, 4);
        assert_eq!(summary.items[1].batches, 1);
        assert_eq!(summary.total_prep_minutes, 160);
        assert_eq!(summary.total_prep_time(), "2h 40m");
        assert_eq!(
            summary.ingredients,
            vec![
                "broccoli",
                "carrots",
                "chicken breast",
                "chicken thighs",
                "olive oil",
                "onions",
                "potatoes",
                "rice",
                "teriyaki sauce",
            ]
        );
    }

    #[test]
    fn test_servings_are_clamped() {
        let catalog = catalog();
        let plan = sample_week(&catalog);

        assert_eq!(plan.summary(&catalog, 0).items[0].total_servings, 2);
        assert_eq!(plan.summary(&catalog, 50).items[0].total_servings, 16);
    }

    #[test]
    fn test_remove_and_clear() {
        let catalog = catalog();
        let mut plan = sample_week(&catalog);

        assert_eq!(
            plan.remove(Day::Monday, MealType::Lunch),
            Some("chicken-bowls".to_string())
        );
        assert_eq!(plan.assignments().count(), 2);

        plan.clear();
        assert_eq!(plan.summary(&catalog, 1).total_meals, 0);
        assert_eq!(plan.summary(&catalog, 1).total_prep_time(), "0 min");
    }

    #[test]
    fn test_templates_for_meal_type() {
        let catalog = catalog();
        let snacks: Vec<_> = meal_prep::templates_for(&catalog, MealType::Snack)
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(
            snacks,
            vec!["energy-balls", "hummus-veggies", "cheese-crackers", "protein-boxes"]
        );
    }
}
