use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::assessment::{AssessmentData, PsychometricAnswers, TechnicalAnswers, WiscarProfile};
use crate::bank::{Dimension, ScaleKey, SectionId, QUESTIONS};
use crate::Error;

/// Recorded responses of one section, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionAnswers(BTreeMap<u32, f64>);

impl SectionAnswers {
    pub fn get(&self, question: u32) -> Option<f64> {
        self.0.get(&question).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0.iter().map(|(&id, &value)| (id, value))
    }
}

/// In-progress answers of a quiz session.
///
/// Answers can be recorded in any order and overwritten at will; the store
/// only turns into an [`AssessmentData`] at [`AnswerStore::submit`].
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    psychometric: SectionAnswers,
    technical: SectionAnswers,
    wiscar: SectionAnswers,
}

impl AnswerStore {
    /// Stores or overwrites one answer.
    ///
    /// An id outside the section's catalog is ignored. A value the question
    /// does not accept is rejected and leaves the store untouched.
    pub fn record_answer(
        &mut self,
        section: SectionId,
        question: u32,
        value: f64,
    ) -> Result<(), Error> {
        let Some(item) = QUESTIONS.item(section, question) else {
            debug!(%section, question, "ignoring answer for question outside the catalog");
            return Ok(());
        };
        if !item.accepts(value) {
            return Err(Error::IllegalAnswer {
                section,
                question,
                value,
            });
        }
        self.section_mut(section).0.insert(question, value);
        Ok(())
    }

    pub fn is_section_complete(&self, section: SectionId) -> bool {
        let answers = self.section(section);
        QUESTIONS
            .question_ids(section)
            .iter()
            .all(|id| answers.0.contains_key(id))
    }

    pub fn is_complete(&self) -> bool {
        SectionId::ALL
            .iter()
            .all(|&section| self.is_section_complete(section))
    }

    /// An owned copy of a section's answers; later writes do not reach it.
    pub fn snapshot(&self, section: SectionId) -> SectionAnswers {
        self.section(section).clone()
    }

    /// Hands the completed quiz over for scoring.
    pub fn submit(&self) -> Result<AssessmentData, Error> {
        if let Some(&section) = SectionId::ALL
            .iter()
            .find(|&&section| !self.is_section_complete(section))
        {
            return Err(Error::NotFulfilled(section));
        }
        Ok(self.assessment())
    }

    /// Snapshot of the whole store without the completeness check.
    /// Unanswered Likert items become 0, unanswered choices `None` and unset
    /// dimensions stay 0.
    pub fn assessment(&self) -> AssessmentData {
        let likert = |key: ScaleKey| -> Vec<u8> {
            QUESTIONS
                .subscale(key)
                .map(|subscale| {
                    subscale
                        .questions
                        .iter()
                        .map(|q| self.psychometric.get(q.id).map_or(0, |v| v as u8))
                        .collect()
                })
                .unwrap_or_default()
        };
        let choices = |key: ScaleKey| -> Vec<Option<usize>> {
            QUESTIONS
                .subscale(key)
                .map(|subscale| {
                    subscale
                        .questions
                        .iter()
                        .map(|q| self.technical.get(q.id).map(|v| v as usize))
                        .collect()
                })
                .unwrap_or_default()
        };

        let mut wiscar = WiscarProfile::default();
        for dimension in Dimension::ALL {
            if let Some(value) = QUESTIONS
                .dimension(dimension)
                .and_then(|question| self.wiscar.get(question.id))
            {
                wiscar.insert(dimension, value);
            }
        }

        AssessmentData {
            psychometric: PsychometricAnswers {
                interests: likert(ScaleKey::Interests),
                personality: likert(ScaleKey::Personality),
                work_style: likert(ScaleKey::WorkStyle),
            },
            technical: TechnicalAnswers {
                aptitude: choices(ScaleKey::Aptitude),
                knowledge: choices(ScaleKey::Knowledge),
                domain: choices(ScaleKey::Domain),
            },
            wiscar,
        }
    }

    fn section(&self, section: SectionId) -> &SectionAnswers {
        match section {
            SectionId::Psychometric => &self.psychometric,
            SectionId::Technical => &self.technical,
            SectionId::Wiscar => &self.wiscar,
        }
    }

    fn section_mut(&mut self, section: SectionId) -> &mut SectionAnswers {
        match section {
            SectionId::Psychometric => &mut self.psychometric,
            SectionId::Technical => &mut self.technical,
            SectionId::Wiscar => &mut self.wiscar,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fill(store: &mut AnswerStore, section: SectionId, value: f64) {
        for id in QUESTIONS.question_ids(section) {
            assert!(store.record_answer(section, id, value).is_ok());
        }
    }

    #[test]
    fn test_record_answer_out_of_catalog() {
        let mut store = AnswerStore::default();
        assert!(store.record_answer(SectionId::Psychometric, 0, 3.0).is_ok());
        assert!(store.record_answer(SectionId::Psychometric, 16, 3.0).is_ok());
        assert!(store.record_answer(SectionId::Wiscar, 7, 3.0).is_ok());
        for section in SectionId::ALL {
            assert!(store.snapshot(section).is_empty());
        }
    }

    #[test]
    fn test_record_answer_illegal_value() {
        let mut store = AnswerStore::default();
        assert!(store.record_answer(SectionId::Psychometric, 1, 6.0).is_err());
        assert!(store.record_answer(SectionId::Technical, 1, 4.0).is_err());
        assert!(store.record_answer(SectionId::Wiscar, 1, 0.0).is_err());
        assert!(store.snapshot(SectionId::Psychometric).is_empty());

        assert!(store.record_answer(SectionId::Psychometric, 1, 4.0).is_ok());
        assert!(store.record_answer(SectionId::Psychometric, 1, 0.0).is_err());
        assert_eq!(store.snapshot(SectionId::Psychometric).get(1), Some(4.0));
    }

    #[test]
    fn test_section_complete() {
        let mut store = AnswerStore::default();
        assert!(!store.is_section_complete(SectionId::Psychometric));

        let ids = QUESTIONS.question_ids(SectionId::Psychometric);
        // any order
        for &id in ids.iter().skip(1).rev() {
            assert!(store.record_answer(SectionId::Psychometric, id, 2.0).is_ok());
        }
        assert!(!store.is_section_complete(SectionId::Psychometric));
        assert!(store
            .record_answer(SectionId::Psychometric, ids[0], 2.0)
            .is_ok());
        assert!(store.is_section_complete(SectionId::Psychometric));
        assert!(!store.is_section_complete(SectionId::Technical));
        assert!(!store.is_complete());

        fill(&mut store, SectionId::Technical, 1.0);
        fill(&mut store, SectionId::Wiscar, 4.5);
        assert!(store.is_complete());
    }

    #[test]
    fn test_snapshot_does_not_alias() {
        let mut store = AnswerStore::default();
        assert!(store.record_answer(SectionId::Technical, 3, 2.0).is_ok());
        let before = store.snapshot(SectionId::Technical);

        assert!(store.record_answer(SectionId::Technical, 3, 0.0).is_ok());
        assert!(store.record_answer(SectionId::Technical, 4, 1.0).is_ok());

        assert_eq!(before.get(3), Some(2.0));
        assert_eq!(before.len(), 1);
        let after = store.snapshot(SectionId::Technical);
        assert_eq!(after.get(3), Some(0.0));
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn test_overwrite_touches_one_entry() {
        let mut store = AnswerStore::default();
        fill(&mut store, SectionId::Psychometric, 3.0);
        assert!(store.record_answer(SectionId::Psychometric, 7, 5.0).is_ok());
        let snapshot = store.snapshot(SectionId::Psychometric);
        assert_eq!(snapshot.len(), 15);
        for (id, value) in snapshot.iter() {
            assert_eq!(value, if id == 7 { 5.0 } else { 3.0 });
        }
    }

    #[test]
    fn test_submit_not_fulfilled() {
        let mut store = AnswerStore::default();
        fill(&mut store, SectionId::Psychometric, 5.0);
        fill(&mut store, SectionId::Wiscar, 5.0);
        match store.submit() {
            Err(Error::NotFulfilled(section)) => assert_eq!(section, SectionId::Technical),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_submit() {
        let mut store = AnswerStore::default();
        fill(&mut store, SectionId::Psychometric, 4.0);
        fill(&mut store, SectionId::Technical, 1.0);
        fill(&mut store, SectionId::Wiscar, 2.5);
        let data = store.submit().unwrap();

        assert_eq!(data.psychometric.interests, vec![4; 5]);
        assert_eq!(data.psychometric.work_style, vec![4; 5]);
        assert_eq!(data.technical.knowledge, vec![Some(1); 5]);
        assert_eq!(data.wiscar.values(), [2.5; 6]);

        // the submitted data is detached from the store
        assert!(store.record_answer(SectionId::Psychometric, 1, 1.0).is_ok());
        assert_eq!(data.psychometric.interests[0], 4);
    }

    #[test]
    fn test_assessment_partial() {
        let mut store = AnswerStore::default();
        assert!(store.record_answer(SectionId::Psychometric, 2, 5.0).is_ok());
        assert!(store.record_answer(SectionId::Technical, 6, 3.0).is_ok());
        assert!(store.record_answer(SectionId::Wiscar, 2, 3.0).is_ok());
        let data = store.assessment();

        assert_eq!(data.psychometric.interests, vec![0, 5, 0, 0, 0]);
        assert_eq!(data.technical.knowledge, vec![Some(3), None, None, None, None]);
        assert_eq!(data.technical.aptitude, vec![None; 5]);
        assert_eq!(data.wiscar.get(Dimension::Interest), 3.0);
        assert_eq!(data.wiscar.get(Dimension::Will), 0.0);
    }
}
