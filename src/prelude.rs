//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the pairdish crate.
//! Guides and calculators are re-exported as modules, since their functions
//! share names (`filter`, `pairings_for`) across record types.
//!
//! # Example
//!
//! ```rust,no_run
//! use pairdish::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Catalog::builtin()?;
//!
//! let soft = cheese::filter(&catalog, CategoryFilter::Only(CheeseCategory::Soft), "");
//! println!("{} soft cheeses", soft.len());
//!
//! let plan = MacroPlan::compute(&MacroInputs::default());
//! println!("{} kcal a day", plan.target_calories);
//! # Ok(())
//! # }
//! ```

// Catalog and its records
pub use crate::catalog::*;

// Quizzes
pub use crate::quiz::{
    AnswerOption, CookingStyle, Outcome, Question, QuizBank, QuizResult, QuizSession,
    RankedOutcome, WinePersonality,
};

// Guides
pub use crate::guides::{
    CategoryFilter, DietaryFilter, PairingGroup, TextQuery, cheese, chocolate, coffee, flavor,
    glycemic, herbs, substitutions,
};

// Calculators
pub use crate::calculators::meal_prep::{Day, WeekPlan};
pub use crate::calculators::nutrition::{MacroInputs, MacroPlan};
pub use crate::calculators::oven::TemperatureUnit;
pub use crate::calculators::party::PartyInputs;
pub use crate::calculators::sourdough::DoughFormula;
pub use crate::calculators::wine::WineInputs;
pub use crate::calculators::{meal_prep, nutrition, oven, party, sourdough, wine};

// Error types
pub use crate::error::{CatalogError, ShareError, SnapshotError};
pub use crate::labels::UnknownLabel;

pub use crate::share;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
