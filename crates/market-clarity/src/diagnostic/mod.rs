//! Internal Market Clarity Diagnostic: questionnaire catalog, scoring, and
//! pattern interpretation.
//!
//! Answers flow through [`DiagnosticEngine::evaluate`], which applies the
//! configured [`IncompleteAnswerPolicy`], scores every dimension in catalog
//! order, and returns every interpretation whose rule holds.

pub mod catalog;
pub mod config;
pub mod copy;
pub mod domain;
pub mod engine;
pub mod import;
pub mod patterns;
pub mod report;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{DIMENSIONS, QUESTION_COUNT};
pub use config::{DiagnosticConfig, IncompleteAnswerPolicy};
pub use copy::{ATTRIBUTION, COI_COPY, CTA_COPY};
pub use domain::{AnswerSet, Dimension, DimensionResult, Question, QuestionId, Status};
pub use engine::{DiagnosticEngine, DiagnosticError, DiagnosticOutcome};
pub use import::{AnswerImportError, AnswerSheetImporter};
pub use patterns::{match_patterns, PatternInterpretation, PatternRule, PATTERN_INTERPRETATIONS};
pub use report::DiagnosticReport;
pub use router::diagnostic_router;
pub use scoring::{score, score_all};
