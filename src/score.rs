use serde::Serialize;
use tracing::debug;

use crate::assessment::AssessmentData;
use crate::bank::{Dimension, Question, ScaleKey, SectionId, QUESTIONS};

/// Maps the 1..=5 answer range onto 0..=100.
pub const SCALE_FACTOR: f64 = 20.0;
pub const CORRECT_POINTS: u8 = 5;
pub const INCORRECT_POINTS: u8 = 2;

/// Mean of `values`, or 0 for an empty input.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Scales a raw 0..=5 value to a whole percentage.
///
/// Rounds half away from zero (`f64::round`). Out-of-range input saturates
/// at 0 and 100.
pub fn percent(raw: f64) -> u8 {
    (raw * SCALE_FACTOR).round().clamp(0.0, 100.0) as u8
}

/// Points for one multiple-choice item: 5 when correct, 2 when answered but
/// wrong, 0 when unanswered.
pub fn grade(question: &Question, choice: Option<usize>) -> u8 {
    match choice {
        Some(choice) if question.is_correct(choice) => CORRECT_POINTS,
        Some(_) => INCORRECT_POINTS,
        None => 0,
    }
}

/// Percentage for a psychometric sub-scale. Answers are matched to the
/// catalog by position; entries past the catalog are ignored.
pub fn likert_score(key: ScaleKey, values: &[u8]) -> u8 {
    percent(mean(likert_points(key, values)))
}

fn likert_points(key: ScaleKey, values: &[u8]) -> impl Iterator<Item = f64> + '_ {
    let len = QUESTIONS
        .subscale(key)
        .map_or(0, |subscale| subscale.questions.len());
    values.iter().take(len).map(|&v| v as f64)
}

/// Grades a technical sub-scale against its catalog. Choices are matched to
/// questions by position; entries past the catalog are ignored.
pub fn technical_score(key: ScaleKey, choices: &[Option<usize>]) -> u8 {
    let Some(subscale) = QUESTIONS.subscale(key) else {
        return 0;
    };
    let points = subscale
        .questions
        .iter()
        .zip(choices.iter())
        .map(|(question, &choice)| grade(question, choice) as f64);
    percent(mean(points))
}

pub trait Readiness {
    /// (psychological, technical, career)
    fn scores(&self) -> (u8, u8, u8);

    fn overall(&self) -> u8 {
        let (psychological, technical, career) = self.scores();
        overall(psychological, technical, career)
    }
}

pub fn overall(psychological: u8, technical: u8, career: u8) -> u8 {
    let sum = psychological as f64 + technical as f64 + career as f64;
    (sum / 3.0).round() as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
}

impl WiscarScores {
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Will => self.will,
            Dimension::Interest => self.interest,
            Dimension::Skill => self.skill,
            Dimension::Cognitive => self.cognitive,
            Dimension::Ability => self.ability,
            Dimension::RealWorld => self.real_world,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PsychometricScores {
    pub interests: u8,
    pub personality: u8,
    pub work_style: u8,
}

impl PsychometricScores {
    fn from_fn(score: impl Fn(ScaleKey) -> u8) -> Self {
        PsychometricScores {
            interests: score(ScaleKey::Interests),
            personality: score(ScaleKey::Personality),
            work_style: score(ScaleKey::WorkStyle),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TechnicalScores {
    pub aptitude: u8,
    pub knowledge: u8,
    pub domain: u8,
}

impl TechnicalScores {
    fn from_fn(score: impl Fn(ScaleKey) -> u8) -> Self {
        TechnicalScores {
            aptitude: score(ScaleKey::Aptitude),
            knowledge: score(ScaleKey::Knowledge),
            domain: score(ScaleKey::Domain),
        }
    }
}

/// Percentages derived from one [`AssessmentData`]. Every field is in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub overall: u8,
    pub psychological: u8,
    /// The knowledge sub-scale; see `technical_scales` for all three.
    pub technical: u8,
    pub career: u8,
    pub wiscar: WiscarScores,
    pub psychometric_scales: PsychometricScores,
    pub technical_scales: TechnicalScores,
}

impl Readiness for ScoreReport {
    fn scores(&self) -> (u8, u8, u8) {
        (self.psychological, self.technical, self.career)
    }

    fn overall(&self) -> u8 {
        self.overall
    }
}

/// Reduces the raw answers to a [`ScoreReport`].
///
/// - psychological: mean of every Likert answer across interests,
///   personality and work style, × 20
/// - technical: knowledge sub-scale, 5/2/0 points per item averaged, × 20
/// - career: mean of the six WISCAR sliders, × 20
/// - overall: mean of the three above
///
/// Empty lists and unset sliders contribute 0. Both Likert and choice lists
/// are cut to their sub-scale's catalog length.
pub fn aggregate(data: &AssessmentData) -> ScoreReport {
    let psychometric = &data.psychometric;
    let technical = &data.technical;

    let psychometric_scales = PsychometricScores::from_fn(|key| {
        likert_score(key, psychometric.scale(key).unwrap_or_default())
    });
    let technical_scales = TechnicalScores::from_fn(|key| {
        technical_score(key, technical.scale(key).unwrap_or_default())
    });

    let wiscar = &data.wiscar;
    let wiscar_scores = WiscarScores {
        will: percent(wiscar.get(Dimension::Will)),
        interest: percent(wiscar.get(Dimension::Interest)),
        skill: percent(wiscar.get(Dimension::Skill)),
        cognitive: percent(wiscar.get(Dimension::Cognitive)),
        ability: percent(wiscar.get(Dimension::Ability)),
        real_world: percent(wiscar.get(Dimension::RealWorld)),
    };

    let likert = QUESTIONS
        .subscales(SectionId::Psychometric)
        .iter()
        .flat_map(move |subscale| {
            likert_points(
                subscale.key,
                psychometric.scale(subscale.key).unwrap_or_default(),
            )
        });
    let psychological = percent(mean(likert));
    let technical = technical_scales.knowledge;
    let career = percent(mean(wiscar.values()));

    let report = ScoreReport {
        overall: overall(psychological, technical, career),
        psychological,
        technical,
        career,
        wiscar: wiscar_scores,
        psychometric_scales,
        technical_scales,
    };
    debug!(
        overall = report.overall,
        psychological, technical, career, "aggregated assessment"
    );
    report
}

/// Qualitative label for a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Average,
    NeedsDevelopment,
}

impl ScoreBand {
    pub fn of(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Excellent,
            70..=79 => ScoreBand::Good,
            60..=69 => ScoreBand::Average,
            _ => ScoreBand::NeedsDevelopment,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Average => "Average",
            ScoreBand::NeedsDevelopment => "Needs Development",
        }
    }
}
