use serde::{Deserialize, Serialize};

use crate::bank::{Dimension, ScaleKey, SectionId, QUESTIONS, SLIDER_MAX, SLIDER_MIN};
use crate::Error;

/// Likert responses per psychometric sub-scale, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsychometricAnswers {
    pub interests: Vec<u8>,
    pub personality: Vec<u8>,
    pub work_style: Vec<u8>,
}

impl PsychometricAnswers {
    /// Answers of one sub-scale; `None` for a technical key.
    pub fn scale(&self, key: ScaleKey) -> Option<&[u8]> {
        match key {
            ScaleKey::Interests => Some(self.interests.as_slice()),
            ScaleKey::Personality => Some(self.personality.as_slice()),
            ScaleKey::WorkStyle => Some(self.work_style.as_slice()),
            ScaleKey::Aptitude | ScaleKey::Knowledge | ScaleKey::Domain => None,
        }
    }
}

/// Chosen option index per technical question, in catalog order.
/// `None` marks a question left unanswered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAnswers {
    pub aptitude: Vec<Option<usize>>,
    pub knowledge: Vec<Option<usize>>,
    pub domain: Vec<Option<usize>>,
}

impl TechnicalAnswers {
    pub fn scale(&self, key: ScaleKey) -> Option<&[Option<usize>]> {
        match key {
            ScaleKey::Aptitude => Some(self.aptitude.as_slice()),
            ScaleKey::Knowledge => Some(self.knowledge.as_slice()),
            ScaleKey::Domain => Some(self.domain.as_slice()),
            ScaleKey::Interests | ScaleKey::Personality | ScaleKey::WorkStyle => None,
        }
    }
}

/// Self-rated WISCAR sliders. Every dimension is 0 until it is set, and
/// within 1.0..=5.0 afterwards. Deserializing applies the same check as
/// [`WiscarProfile::set`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawWiscarProfile")]
pub struct WiscarProfile {
    will: f64,
    interest: f64,
    skill: f64,
    cognitive: f64,
    ability: f64,
    real_world: f64,
}

impl WiscarProfile {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Will => self.will,
            Dimension::Interest => self.interest,
            Dimension::Skill => self.skill,
            Dimension::Cognitive => self.cognitive,
            Dimension::Ability => self.ability,
            Dimension::RealWorld => self.real_world,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) -> Result<(), Error> {
        let accepted = QUESTIONS
            .dimension(dimension)
            .and_then(|question| QUESTIONS.item(SectionId::Wiscar, question.id))
            .map(|item| item.accepts(value));
        match accepted {
            Some(true) => {
                *self.slot(dimension) = value;
                Ok(())
            }
            _ => Err(Error::IllegalAnswer {
                section: SectionId::Wiscar,
                question: QUESTIONS.dimension(dimension).map_or(0, |q| q.id),
                value,
            }),
        }
    }

    /// Builder form of [`WiscarProfile::set`].
    pub fn with(mut self, dimension: Dimension, value: f64) -> Result<Self, Error> {
        self.set(dimension, value)?;
        Ok(self)
    }

    pub fn is_set(&self, dimension: Dimension) -> bool {
        self.get(dimension) >= SLIDER_MIN
    }

    pub fn values(&self) -> [f64; 6] {
        Dimension::ALL.map(|dimension| self.get(dimension))
    }

    pub(crate) fn insert(&mut self, dimension: Dimension, value: f64) {
        *self.slot(dimension) = value.clamp(0.0, SLIDER_MAX);
    }

    fn slot(&mut self, dimension: Dimension) -> &mut f64 {
        match dimension {
            Dimension::Will => &mut self.will,
            Dimension::Interest => &mut self.interest,
            Dimension::Skill => &mut self.skill,
            Dimension::Cognitive => &mut self.cognitive,
            Dimension::Ability => &mut self.ability,
            Dimension::RealWorld => &mut self.real_world,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWiscarProfile {
    will: f64,
    interest: f64,
    skill: f64,
    cognitive: f64,
    ability: f64,
    real_world: f64,
}

impl TryFrom<RawWiscarProfile> for WiscarProfile {
    type Error = Error;

    fn try_from(raw: RawWiscarProfile) -> Result<Self, Error> {
        let values = [
            raw.will,
            raw.interest,
            raw.skill,
            raw.cognitive,
            raw.ability,
            raw.real_world,
        ];
        let mut profile = WiscarProfile::default();
        for (dimension, value) in Dimension::ALL.into_iter().zip(values) {
            // 0 is unset
            if value != 0.0 {
                profile.set(dimension, value)?;
            }
        }
        Ok(profile)
    }
}

/// Label shown next to a WISCAR slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WiscarLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl WiscarLevel {
    pub fn of(value: f64) -> Self {
        match value {
            v if v <= 1.0 => WiscarLevel::VeryLow,
            v if v <= 2.0 => WiscarLevel::Low,
            v if v <= 3.0 => WiscarLevel::Moderate,
            v if v <= 4.0 => WiscarLevel::High,
            _ => WiscarLevel::VeryHigh,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WiscarLevel::VeryLow => "Very Low",
            WiscarLevel::Low => "Low",
            WiscarLevel::Moderate => "Moderate",
            WiscarLevel::High => "High",
            WiscarLevel::VeryHigh => "Very High",
        }
    }
}

/// Everything answered in one session, handed from the quiz flow to scoring
/// by value once the quiz is submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentData {
    pub psychometric: PsychometricAnswers,
    pub technical: TechnicalAnswers,
    pub wiscar: WiscarProfile,
}
