//! # PairDish - Food & Drink Toolkit
//!
//! **PairDish** bundles the calculators, pairing guides and personality quizzes
//! of a food and drink site into one library. Every widget reads from a single
//! read-only [`Catalog`](catalog::Catalog) that ships inside the binary and is
//! validated once when it is built.
//!
//! ## Core Workflow
//!
//! 1.  **Load the Catalog**: `Catalog::builtin()` parses and validates the embedded
//!     tables. A custom catalog can be built from [`CatalogTables`](catalog::CatalogTables)
//!     or loaded from a binary [`CatalogSnapshot`](catalog::CatalogSnapshot).
//! 2.  **Ask It Questions**: The [`guides`] filter and pair records, the [`quiz`]
//!     module scores personality quizzes, and the [`calculators`] turn a handful of
//!     inputs into quantities, temperatures and macro targets.
//! 3.  **Share the State**: Any calculator input can be packed into a link with
//!     [`share::share_url`] and restored with [`share::decode_or_default`].
//!
//! Calculators are pure functions of their inputs and never touch the catalog,
//! except the meal-prep planner which reads the meal templates.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pairdish::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::builtin()?;
//!
//!     // Pairings for salmon, from every category.
//!     for pairing in flavor::pairings_for(&catalog, "salmon", CategoryFilter::All) {
//!         println!("{} ({}%)", pairing.ingredient.profile().name, pairing.score);
//!     }
//!
//!     // Score a quiz, always picking the first option.
//!     let bank = catalog.cooking_style();
//!     let answers = vec![0; bank.questions.len()];
//!     let result = bank.score(&answers);
//!     if let Some(top) = result.primary() {
//!         println!("You are {}", top.outcome.name);
//!     }
//!
//!     // Convert an oven temperature.
//!     let conversion = oven::convert("350", TemperatureUnit::Fahrenheit, false);
//!     println!("{}°C, gas mark {}", conversion.celsius, conversion.gas_mark);
//!
//!     // Share a party plan.
//!     let party = PartyInputs { guest_count: 40, ..Default::default() };
//!     println!("{}", share::share_url("/party-food-calculator", &party)?);
//!
//!     Ok(())
//! }
//! ```

#[macro_use]
pub mod labels;

pub mod calculators;
pub mod catalog;
pub mod error;
pub mod format;
pub mod guides;
pub mod prelude;
pub mod quiz;
pub mod share;
