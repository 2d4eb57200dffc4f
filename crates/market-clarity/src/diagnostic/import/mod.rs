mod parser;

use super::domain::{AnswerSet, QuestionId};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidAnswer { line: u64, value: String },
    DuplicateQuestion { line: u64, question_id: QuestionId },
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answer sheet: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answer sheet CSV: {}", err),
            AnswerImportError::InvalidAnswer { line, value } => write!(
                f,
                "line {line}: '{value}' is not a yes/no answer"
            ),
            AnswerImportError::DuplicateQuestion { line, question_id } => write!(
                f,
                "line {line}: question {question_id} answered more than once"
            ),
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
            AnswerImportError::InvalidAnswer { .. }
            | AnswerImportError::DuplicateQuestion { .. } => None,
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads `question_id,answer` sheets into an [`AnswerSet`].
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AnswerSet, AnswerImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<AnswerSet, AnswerImportError> {
        let records = parser::parse_records(reader)?;
        let mut answers = AnswerSet::new();

        for record in records {
            let answer = parser::parse_answer(&record.raw_answer).ok_or_else(|| {
                AnswerImportError::InvalidAnswer {
                    line: record.line,
                    value: record.raw_answer.clone(),
                }
            })?;

            if answers.record(record.question_id, answer).is_some() {
                return Err(AnswerImportError::DuplicateQuestion {
                    line: record.line,
                    question_id: record.question_id,
                });
            }
        }

        Ok(answers)
    }
}
