use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::career::CareerPath;
use crate::recommend::{LearningStep, Tier};

/// Result-page texts, compiled in from `resources/catalog.json`.
pub static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    serde_json::from_str(include_str!("../resources/catalog.json"))
        .expect("embedded results catalog must be valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierMessage {
    pub title: String,
    pub subtitle: String,
    pub action: String,
    /// One-line verdict shown next to the overall score.
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct TierMessages {
    pub high: TierMessage,
    pub medium: TierMessage,
    pub low: TierMessage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub tiers: TierMessages,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    pub learning_path: Vec<LearningStep>,
    pub career_paths: Vec<CareerPath>,
}

impl Catalog {
    pub fn tier(&self, tier: Tier) -> &TierMessage {
        match tier {
            Tier::High => &self.tiers.high,
            Tier::Medium => &self.tiers.medium,
            Tier::Low => &self.tiers.low,
        }
    }
}
