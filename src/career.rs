use serde::{Deserialize, Serialize};

use crate::catalog::CATALOG;
use crate::score::Readiness;

/// Which part of the report a career path's match is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchBasis {
    Overall,
    /// The better of psychological fit and career alignment.
    PsychologicalOrCareer,
    Psychological,
}

impl MatchBasis {
    pub fn score<R: Readiness>(&self, report: &R) -> u8 {
        let (psychological, _, career) = report.scores();
        match self {
            MatchBasis::Overall => report.overall(),
            MatchBasis::PsychologicalOrCareer => psychological.max(career),
            MatchBasis::Psychological => psychological,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPath {
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    /// Outlook text, e.g. demand and salary range.
    pub growth: String,
    #[serde(skip_serializing)]
    pub basis: MatchBasis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerMatch {
    #[serde(flatten)]
    pub path: CareerPath,
    #[serde(rename = "match")]
    pub percent: u8,
}

/// Pairs every catalog career path with its match percentage.
///
/// The result keeps catalog order (Analyst, Consultant, Researcher); use
/// [`ranked`] for best-first.
pub fn match_paths<R: Readiness>(report: &R) -> Vec<CareerMatch> {
    CATALOG
        .career_paths
        .iter()
        .map(|path| CareerMatch {
            percent: path.basis.score(report),
            path: path.clone(),
        })
        .collect()
}

/// Sorts matches best-first. Ties keep their catalog order.
pub fn ranked(mut matches: Vec<CareerMatch>) -> Vec<CareerMatch> {
    matches.sort_by(|a, b| b.percent.cmp(&a.percent));
    matches
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::score::ScoreReport;

    fn sample() -> ScoreReport {
        ScoreReport {
            overall: 62,
            psychological: 70,
            technical: 40,
            career: 75,
            ..Default::default()
        }
    }

    #[test]
    fn test_match_paths() {
        let matches = match_paths(&sample());
        let titles: Vec<&str> = matches.iter().map(|m| m.path.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "AI Ethics Analyst",
                "Responsible AI Consultant",
                "AI Policy Researcher"
            ]
        );
        let percents: Vec<u8> = matches.iter().map(|m| m.percent).collect();
        assert_eq!(percents, vec![62, 75, 70]);
    }

    #[test]
    fn test_consultant_takes_the_better_score() {
        let report = ScoreReport {
            psychological: 90,
            career: 30,
            ..Default::default()
        };
        assert_eq!(MatchBasis::PsychologicalOrCareer.score(&report), 90);
    }

    #[test]
    fn test_match_paths_is_deterministic() {
        let report = sample();
        assert_eq!(match_paths(&report), match_paths(&report));
    }

    #[test]
    fn test_ranked() {
        let ranked = ranked(match_paths(&sample()));
        let percents: Vec<u8> = ranked.iter().map(|m| m.percent).collect();
        assert_eq!(percents, vec![75, 70, 62]);
        assert_eq!(ranked[0].path.title, "Responsible AI Consultant");

        let ties = ranked_titles(ScoreReport::default());
        assert_eq!(ties[0], "AI Ethics Analyst");
        assert_eq!(ties[2], "AI Policy Researcher");
    }

    fn ranked_titles(report: ScoreReport) -> Vec<String> {
        ranked(match_paths(&report))
            .into_iter()
            .map(|m| m.path.title)
            .collect()
    }

    #[test]
    fn test_match_json() {
        let json = serde_json::to_value(&match_paths(&sample())[0]).unwrap();
        assert_eq!(json["title"], "AI Ethics Analyst");
        assert_eq!(json["match"], 62);
        assert!(json.get("basis").is_none());
    }
}
