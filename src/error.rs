use crate::bank::SectionId;
use tracing_subscriber::filter::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Value outside the range the question accepts.
    #[error("answer {value} is not allowed for {section} question {question}")]
    IllegalAnswer {
        section: SectionId,
        question: u32,
        value: f64,
    },
    /// An answer sheet row that cannot be mapped onto the question bank.
    #[error("row {row}: {reason}")]
    IllegalRow { row: usize, reason: String },
    /// Some questions of the section are unanswered.
    #[error("the {0} section has unanswered questions")]
    NotFulfilled(SectionId),
    /// Scoring was asked for without any assessment data.
    #[error("no assessment data was handed over for scoring")]
    MissingAssessment,
    /// The default log filter does not parse.
    #[error("invalid log filter '{value}'")]
    LogFilter { value: String, source: ParseError },
    /// A global subscriber is already installed.
    #[error("unable to install log subscriber: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
    /// Reading stdin or an answer sheet file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Malformed CSV in a bulk answer sheet.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// JSON encoding or decoding failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
