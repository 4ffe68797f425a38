use super::Outcome;
use serde::{Deserialize, Serialize};

/// A result of the cooking style quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookingStyle {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    pub signature_dishes: Vec<String>,
    pub kitchen_essentials: Vec<String>,
    pub cookbooks: Vec<String>,
}

/// A result of the wine personality quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinePersonality {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub wines: Vec<String>,
    pub foods: Vec<String>,
    pub traits: Vec<String>,
}

impl Outcome for CookingStyle {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn tagline(&self) -> &str {
        &self.tagline
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl Outcome for WinePersonality {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn tagline(&self) -> &str {
        &self.tagline
    }
    fn description(&self) -> &str {
        &self.description
    }
}
