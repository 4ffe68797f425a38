//! Common test utilities for loading the catalog and building inputs.
use pairdish::prelude::*;
use std::path::PathBuf;

/// The built-in catalog. Every test that needs data starts here.
#[allow(dead_code)]
pub fn catalog() -> Catalog {
    Catalog::builtin().expect("Built-in catalog should load and validate")
}

/// A fresh copy of the built-in tables, for tests that break them on purpose.
#[allow(dead_code)]
pub fn builtin_tables() -> CatalogTables {
    CatalogTables::builtin().expect("Built-in tables should parse")
}

/// A per-process scratch file path, so parallel test runs do not collide.
#[allow(dead_code)]
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pairdish-{}-{}", std::process::id(), name))
}

/// Answers every question of a bank with the same option.
#[allow(dead_code)]
pub fn same_answer<O>(bank: &QuizBank<O>, option: usize) -> Vec<usize> {
    vec![option; bank.questions.len()]
}

/// Ids of a ranking, best first.
#[allow(dead_code)]
pub fn ranked_ids<O: Outcome>(result: &QuizResult<'_, O>) -> Vec<String> {
    result
        .ranking
        .iter()
        .map(|r| r.outcome.id().to_string())
        .collect()
}
