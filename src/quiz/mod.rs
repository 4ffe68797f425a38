//! Personality quizzes scored by summing per-option points.
//!
//! A [`QuizBank`] is a fixed list of outcomes and questions. Every option of
//! every question awards points to one or more outcomes; scoring a set of
//! answers adds those points up and ranks the outcomes, highest first.
//! Outcomes with equal totals keep the order they are declared in, so the
//! ranking is fully deterministic.

use crate::error::CatalogError;
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::warn;

mod outcomes;
mod session;

pub use outcomes::*;
pub use session::*;

/// Anything a quiz can rank.
pub trait Outcome {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn tagline(&self) -> &str;
    fn description(&self) -> &str;
}

/// One selectable answer and the points it awards, keyed by outcome id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub scores: AHashMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

/// The fixed outcomes and questions of a quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizBank<O> {
    pub outcomes: Vec<O>,
    pub questions: Vec<Question>,
}

/// An outcome together with the points it collected.
#[derive(Debug, Clone, Serialize)]
pub struct RankedOutcome<'a, O> {
    pub outcome: &'a O,
    pub score: u32,
}

/// All outcomes ordered by score, highest first.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResult<'a, O> {
    pub ranking: Vec<RankedOutcome<'a, O>>,
    /// Number of answers that actually contributed points.
    pub answered: usize,
}

impl<O: Outcome> QuizBank<O> {
    pub fn outcome(&self, id: &str) -> Option<&O> {
        self.outcomes.iter().find(|o| o.id() == id)
    }

    /// Scores an ordered list of option indexes, one per question.
    ///
    /// Answers past the last question and option indexes that do not exist are
    /// skipped, so an incomplete quiz still ranks every outcome.
    pub fn score(&self, answers: &[usize]) -> QuizResult<'_, O> {
        let positions: AHashMap<&str, usize> = self
            .outcomes
            .iter()
            .enumerate()
            .map(|(i, o)| (o.id(), i))
            .collect();
        let mut totals = vec![0u32; self.outcomes.len()];
        let mut answered = 0;

        for (question_index, &option_index) in answers.iter().enumerate() {
            let Some(question) = self.questions.get(question_index) else {
                warn!(question_index, "Answer has no matching question, skipping");
                continue;
            };
            let Some(option) = question.options.get(option_index) else {
                warn!(
                    question = %question.id,
                    option_index, "Answer picks an option that does not exist, skipping"
                );
                continue;
            };
            for (outcome_id, points) in &option.scores {
                if let Some(&pos) = positions.get(outcome_id.as_str()) {
                    totals[pos] = totals[pos].saturating_add(*points);
                }
            }
            answered += 1;
        }

        let ranking = self
            .outcomes
            .iter()
            .zip(totals)
            .map(|(outcome, score)| RankedOutcome { outcome, score })
            // Stable sort: equal scores stay in declaration order.
            .sorted_by(|a, b| b.score.cmp(&a.score))
            .collect();

        QuizResult { ranking, answered }
    }

    /// Checks that the bank can always produce a primary and secondary result
    /// and that every option only awards points to declared outcomes.
    pub fn validate(&self, quiz: &str) -> Result<(), CatalogError> {
        if self.outcomes.len() < 2 {
            return Err(CatalogError::MalformedQuiz {
                quiz: quiz.to_string(),
                message: format!("needs at least 2 outcomes, found {}", self.outcomes.len()),
            });
        }

        let mut seen = AHashSet::new();
        for outcome in &self.outcomes {
            if !seen.insert(outcome.id()) {
                return Err(CatalogError::DuplicateId {
                    table: quiz.to_string(),
                    id: outcome.id().to_string(),
                });
            }
        }

        for question in &self.questions {
            if question.options.is_empty() {
                return Err(CatalogError::MalformedQuiz {
                    quiz: quiz.to_string(),
                    message: format!("question '{}' has no options", question.id),
                });
            }
            for option in &question.options {
                // Sorted so the reported id does not depend on hash order.
                if let Some(missing) = option
                    .scores
                    .keys()
                    .sorted()
                    .find(|id| !seen.contains(id.as_str()))
                {
                    return Err(CatalogError::UnresolvedReference {
                        table: quiz.to_string(),
                        source_id: question.id.clone(),
                        missing_id: missing.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<'a, O: Outcome> QuizResult<'a, O> {
    /// The best-scoring outcome.
    pub fn primary(&self) -> Option<&RankedOutcome<'a, O>> {
        self.ranking.first()
    }

    /// The runner-up.
    pub fn secondary(&self) -> Option<&RankedOutcome<'a, O>> {
        self.ranking.get(1)
    }

    pub fn score_of(&self, id: &str) -> Option<u32> {
        self.ranking
            .iter()
            .find(|r| r.outcome.id() == id)
            .map(|r| r.score)
    }

    /// 1-based position of an outcome in the ranking.
    pub fn rank_of(&self, id: &str) -> Option<usize> {
        self.ranking
            .iter()
            .position(|r| r.outcome.id() == id)
            .map(|p| p + 1)
    }

    /// Each outcome's share of all awarded points, as whole percentages in
    /// ranking order. Every share is zero when nothing was scored.
    pub fn percentages(&self) -> Vec<(&'a str, u32)> {
        let total: u64 = self.ranking.iter().map(|r| u64::from(r.score)).sum();
        self.ranking
            .iter()
            .map(|r| {
                let outcome: &'a O = r.outcome;
                let pct = if total == 0 {
                    0
                } else {
                    crate::format::js_round(r.score as f64 / total as f64 * 100.0) as u32
                };
                (outcome.id(), pct)
            })
            .collect()
    }
}
