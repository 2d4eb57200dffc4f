use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a questionnaire item, unique across the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
}

/// A thematic group of questions scored independently of the others.
///
/// `threshold` is the highest score that still reads as red; one point above
/// it is amber and anything higher is green.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dimension {
    pub id: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub questions: &'static [Question],
    pub threshold: u8,
    pub reflection: &'static str,
    pub reflection_prompt: &'static str,
}

impl Dimension {
    pub fn max_score(&self) -> u8 {
        self.questions.len() as u8
    }

    pub fn question_ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.questions.iter().map(|question| question.id)
    }

    /// Amber needs exactly `threshold + 1`, which some calibrations never reach.
    pub fn amber_reachable(&self) -> bool {
        u16::from(self.threshold) + 1 <= u16::from(self.max_score())
    }
}

/// Traffic-light classification of a dimension score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Green,
    Amber,
    Red,
}

impl Status {
    pub fn from_score(score: u8, threshold: u8) -> Self {
        if score <= threshold {
            Self::Red
        } else if u16::from(score) == u16::from(threshold) + 1 {
            Self::Amber
        } else {
            Self::Green
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Amber => "Amber",
            Self::Red => "Red",
        }
    }

    /// Green or amber; the rules treat both as "work has been done here".
    pub const fn is_established(self) -> bool {
        matches!(self, Self::Green | Self::Amber)
    }
}

/// Yes/no responses collected for a single diagnostic run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, bool>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every listed question "yes" and every other catalog question "no".
    pub fn from_yes<I>(catalog: &[Dimension], yes: I) -> Self
    where
        I: IntoIterator<Item = QuestionId>,
    {
        let mut set = Self::uniform(catalog, false);
        for id in yes {
            set.record(id, true);
        }
        set
    }

    pub fn uniform(catalog: &[Dimension], answer: bool) -> Self {
        let answers = catalog
            .iter()
            .flat_map(|dimension| dimension.question_ids())
            .map(|id| (id, answer))
            .collect();
        Self { answers }
    }

    pub fn record(&mut self, id: QuestionId, answer: bool) -> Option<bool> {
        self.answers.insert(id, answer)
    }

    pub fn answer(&self, id: QuestionId) -> Option<bool> {
        self.answers.get(&id).copied()
    }

    pub fn is_yes(&self, id: QuestionId) -> bool {
        self.answer(id).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, bool)> + '_ {
        self.answers.iter().map(|(id, answer)| (*id, *answer))
    }

    /// Catalog question ids without an answer, in ascending order.
    pub fn missing(&self, catalog: &[Dimension]) -> Vec<QuestionId> {
        let mut missing: Vec<QuestionId> = catalog
            .iter()
            .flat_map(|dimension| dimension.question_ids())
            .filter(|id| !self.answers.contains_key(id))
            .collect();
        missing.sort();
        missing
    }

    /// Answered ids that do not belong to any catalog dimension.
    pub fn unknown(&self, catalog: &[Dimension]) -> Vec<QuestionId> {
        self.answers
            .keys()
            .copied()
            .filter(|id| {
                !catalog
                    .iter()
                    .any(|dimension| dimension.question_ids().any(|known| known == *id))
            })
            .collect()
    }
}

impl FromIterator<(QuestionId, bool)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, bool)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// Score and status of one dimension for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionResult<'a> {
    pub dimension: &'a Dimension,
    pub score: u8,
    pub max_score: u8,
    pub status: Status,
    pub percentage: f64,
}

impl DimensionResult<'_> {
    pub fn dimension_id(&self) -> &'static str {
        self.dimension.id
    }

    /// Reflection copy is only surfaced for dimensions that are not green.
    pub fn reflection(&self) -> Option<(&'static str, &'static str)> {
        if self.status == Status::Green {
            None
        } else {
            Some((self.dimension.reflection, self.dimension.reflection_prompt))
        }
    }
}
