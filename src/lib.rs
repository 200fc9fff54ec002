//! Scoring core of the E.T.H.I.C. career-readiness assessment for AI ethics
//! roles: question bank, answer collection, score aggregation,
//! recommendation and career-path matching.

pub mod answers;
pub mod assessment;
pub mod bank;
pub mod bulk;
pub mod career;
pub mod catalog;
mod error;
pub mod recommend;
pub mod score;
pub mod telemetry;

use serde::Serialize;

pub use answers::{AnswerStore, SectionAnswers};
pub use assessment::{
    AssessmentData, PsychometricAnswers, TechnicalAnswers, WiscarLevel, WiscarProfile,
};
pub use bank::{Dimension, ScaleKey, SectionId, QUESTIONS};
pub use bulk::read_bulk;
pub use career::{match_paths, ranked, CareerMatch, CareerPath};
pub use error::Error;
pub use recommend::{recommend, Recommendation, Tier};
pub use score::{aggregate, Readiness, ScoreBand, ScoreReport};

/// Everything the results view shows for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Results {
    pub scores: ScoreReport,
    pub recommendation: Recommendation,
    pub career_paths: Vec<CareerMatch>,
}

/// Scores a submitted assessment.
///
/// Scoring with nothing handed over is a caller error and yields
/// [`Error::MissingAssessment`]; incomplete data is scored with zero
/// contributions instead.
pub fn evaluate(data: Option<&AssessmentData>) -> Result<Results, Error> {
    let data = data.ok_or(Error::MissingAssessment)?;
    let scores = aggregate(data);
    Ok(Results {
        recommendation: recommend(&scores),
        career_paths: match_paths(&scores),
        scores,
    })
}
