use super::super::domain::QuestionId;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug)]
pub(crate) struct AnswerRecord {
    pub(crate) line: u64,
    pub(crate) question_id: QuestionId,
    pub(crate) raw_answer: String,
}

/// Line numbers come from the reader's record positions, so skipped blank
/// lines are still counted.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<AnswerRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut record = csv::StringRecord::new();
    let mut records = Vec::new();

    while csv_reader.read_record(&mut record)? {
        let row: AnswerRow = record.deserialize(Some(&headers))?;
        records.push(AnswerRecord {
            line: record.position().map_or(0, |position| position.line()),
            question_id: QuestionId(row.question_id),
            raw_answer: row.answer,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(alias = "Question ID", alias = "id")]
    question_id: u32,
    #[serde(alias = "Answer")]
    answer: String,
}

pub(crate) fn parse_answer(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Some(true),
        "no" | "n" | "false" | "0" => Some(false),
        _ => None,
    }
}
