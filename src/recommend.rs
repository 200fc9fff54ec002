use serde::{Deserialize, Serialize};

use crate::catalog::{TierMessage, CATALOG};
use crate::score::Readiness;

pub const HIGH_THRESHOLD: u8 = 80;
pub const PURSUE_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn of(overall: u8) -> Self {
        match overall {
            score if score >= HIGH_THRESHOLD => Tier::High,
            score if score >= PURSUE_THRESHOLD => Tier::Medium,
            _ => Tier::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningStep {
    pub title: String,
    pub description: String,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub tier: Tier,
    pub should_pursue: bool,
    /// Same as the overall score.
    pub confidence: u8,
    pub headline: TierMessage,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    pub learning_path: Vec<LearningStep>,
}

/// Derives the recommendation from a report.
///
/// `overall` of 80 and above is [`Tier::High`], 60 to 79 [`Tier::Medium`],
/// anything lower [`Tier::Low`]. Pursuing the career is suggested from 60 on.
///
/// Strengths, growth areas and the learning path do not depend on the
/// score yet; only the tier headline does.
pub fn recommend<R: Readiness>(report: &R) -> Recommendation {
    let overall = report.overall();
    let tier = Tier::of(overall);
    Recommendation {
        tier,
        should_pursue: overall >= PURSUE_THRESHOLD,
        confidence: overall,
        headline: CATALOG.tier(tier).clone(),
        strengths: CATALOG.strengths.clone(),
        growth_areas: CATALOG.growth_areas.clone(),
        learning_path: CATALOG.learning_path.clone(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::score::ScoreReport;

    fn report(overall: u8) -> ScoreReport {
        ScoreReport {
            overall,
            ..Default::default()
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::of(100), Tier::High);
        assert_eq!(Tier::of(80), Tier::High);
        assert_eq!(Tier::of(79), Tier::Medium);
        assert_eq!(Tier::of(60), Tier::Medium);
        assert_eq!(Tier::of(59), Tier::Low);
        assert_eq!(Tier::of(0), Tier::Low);
    }

    #[test]
    fn test_should_pursue() {
        assert!(!recommend(&report(59)).should_pursue);
        assert!(recommend(&report(60)).should_pursue);
        assert!(recommend(&report(61)).should_pursue);
    }

    #[test]
    fn test_confidence_mirrors_overall() {
        for overall in [0, 42, 60, 80, 100] {
            assert_eq!(recommend(&report(overall)).confidence, overall);
        }
    }

    #[test]
    fn test_headline_follows_tier() {
        let recommendation = recommend(&report(85));
        assert_eq!(recommendation.tier, Tier::High);
        assert_eq!(recommendation.headline.title, "Highly Recommended");

        let recommendation = recommend(&report(65));
        assert_eq!(recommendation.headline.title, "Recommended with Development");
    }

    #[test]
    fn test_catalog_lists_are_fixed() {
        let low = recommend(&report(10));
        let high = recommend(&report(95));
        assert_eq!(low.strengths, high.strengths);
        assert_eq!(low.growth_areas, high.growth_areas);
        assert_eq!(low.learning_path, high.learning_path);
        assert_eq!(low.learning_path[0].title, "Foundation Building");
        assert_eq!(low.learning_path[2].title, "Specialization");
    }

    #[test]
    fn test_tier_json() {
        let json = serde_json::to_value(recommend(&report(70))).unwrap();
        assert_eq!(json["tier"], "medium");
        assert_eq!(json["shouldPursue"], true);
        assert_eq!(json["learningPath"][1]["title"], "Technical Development");
    }
}
