//! Pure numeric calculators.
//!
//! None of these fail: out-of-range inputs are clamped or coerced, and inputs
//! that cannot produce a meaningful answer yield `None`.

pub mod meal_prep;
pub mod nutrition;
pub mod oven;
pub mod party;
pub mod sourdough;
pub mod wine;
