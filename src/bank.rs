use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The fixed question catalogs, compiled in from `resources/questions.json`.
pub static QUESTIONS: Lazy<QuestionBank> = Lazy::new(|| {
    serde_json::from_str(include_str!("../resources/questions.json"))
        .expect("embedded question bank must be valid")
});

/// Likert answers range over 1 (strongly disagree) to 5 (strongly agree).
pub const LIKERT_RANGE: std::ops::RangeInclusive<u8> = 1..=5;
pub const SLIDER_MIN: f64 = 1.0;
pub const SLIDER_MAX: f64 = 5.0;
pub const SLIDER_STEP: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Psychometric,
    Technical,
    Wiscar,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [
        SectionId::Psychometric,
        SectionId::Technical,
        SectionId::Wiscar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Psychometric => "psychometric",
            SectionId::Technical => "technical",
            SectionId::Wiscar => "wiscar",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-scale of the psychometric or technical section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleKey {
    Interests,
    Personality,
    WorkStyle,
    Aptitude,
    Knowledge,
    Domain,
}

impl ScaleKey {
    pub fn section(&self) -> SectionId {
        match self {
            ScaleKey::Interests | ScaleKey::Personality | ScaleKey::WorkStyle => {
                SectionId::Psychometric
            }
            ScaleKey::Aptitude | ScaleKey::Knowledge | ScaleKey::Domain => SectionId::Technical,
        }
    }
}

/// One of the six WISCAR readiness dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Will,
        Dimension::Interest,
        Dimension::Skill,
        Dimension::Cognitive,
        Dimension::Ability,
        Dimension::RealWorld,
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub category: String,
    /// Empty for Likert statements.
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct: Option<usize>,
}

impl Question {
    pub fn is_multiple_choice(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        self.correct == Some(choice)
    }
}

#[derive(Debug, Deserialize)]
pub struct Subscale {
    pub key: ScaleKey,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
pub struct Section {
    pub title: String,
    pub description: String,
    pub subscales: Vec<Subscale>,
}

/// A self-rated WISCAR dimension. The scenarios only illustrate the
/// dimension; there is no right answer.
#[derive(Debug, Clone, Deserialize)]
pub struct DimensionQuestion {
    pub id: u32,
    pub key: Dimension,
    pub title: String,
    pub description: String,
    pub scenarios: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct WiscarSection {
    pub title: String,
    pub description: String,
    pub dimensions: Vec<DimensionQuestion>,
}

/// An answerable catalog entry and the kind of value it takes.
#[derive(Debug, Clone, Copy)]
pub enum Item<'a> {
    Likert(&'a Question),
    Choice(&'a Question),
    Slider(&'a DimensionQuestion),
}

impl Item<'_> {
    /// Whether `value` is a legal response for this item.
    ///
    /// Likert: an integer in 1..=5. Choice: the 0-based index of one of the
    /// options. Slider: 1.0..=5.0 in steps of 0.5.
    pub fn accepts(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self {
            Item::Likert(_) => {
                value.fract() == 0.0
                    && (*LIKERT_RANGE.start() as f64..=*LIKERT_RANGE.end() as f64)
                        .contains(&value)
            }
            Item::Choice(question) => {
                value.fract() == 0.0 && value >= 0.0 && (value as usize) < question.options.len()
            }
            Item::Slider(_) => {
                (SLIDER_MIN..=SLIDER_MAX).contains(&value)
                    && ((value - SLIDER_MIN) / SLIDER_STEP).fract() == 0.0
            }
        }
    }
}

/// The E.T.H.I.C. question catalogs.
#[derive(Debug, Deserialize)]
pub struct QuestionBank {
    pub psychometric: Section,
    pub technical: Section,
    pub wiscar: WiscarSection,
}

impl QuestionBank {
    /// Sub-scales of a section; WISCAR has none.
    pub fn subscales(&self, section: SectionId) -> &[Subscale] {
        match section {
            SectionId::Psychometric => &self.psychometric.subscales,
            SectionId::Technical => &self.technical.subscales,
            SectionId::Wiscar => &[],
        }
    }

    pub fn subscale(&self, key: ScaleKey) -> Option<&Subscale> {
        self.subscales(key.section())
            .iter()
            .find(|subscale| subscale.key == key)
    }

    /// Questions of a section in catalog order.
    pub fn questions(&self, section: SectionId) -> impl Iterator<Item = &Question> {
        self.subscales(section)
            .iter()
            .flat_map(|subscale| subscale.questions.iter())
    }

    pub fn question(&self, section: SectionId, id: u32) -> Option<&Question> {
        self.questions(section).find(|question| question.id == id)
    }

    pub fn dimension(&self, key: Dimension) -> Option<&DimensionQuestion> {
        self.wiscar
            .dimensions
            .iter()
            .find(|dimension| dimension.key == key)
    }

    /// Every answerable id of a section in catalog order.
    pub fn question_ids(&self, section: SectionId) -> Vec<u32> {
        match section {
            SectionId::Wiscar => self.wiscar.dimensions.iter().map(|d| d.id).collect(),
            _ => self.questions(section).map(|q| q.id).collect(),
        }
    }

    pub fn item(&self, section: SectionId, id: u32) -> Option<Item<'_>> {
        match section {
            SectionId::Psychometric => self.question(section, id).map(Item::Likert),
            SectionId::Technical => self.question(section, id).map(Item::Choice),
            SectionId::Wiscar => self
                .wiscar
                .dimensions
                .iter()
                .find(|dimension| dimension.id == id)
                .map(Item::Slider),
        }
    }

    pub fn title(&self, section: SectionId) -> &str {
        match section {
            SectionId::Psychometric => &self.psychometric.title,
            SectionId::Technical => &self.technical.title,
            SectionId::Wiscar => &self.wiscar.title,
        }
    }
}
