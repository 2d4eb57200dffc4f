use crate::infra::parse_question_id;
use clap::Args;
use market_clarity::config::AppConfig;
use market_clarity::diagnostic::{
    AnswerSet, AnswerSheetImporter, DiagnosticConfig, DiagnosticEngine, DiagnosticReport,
    IncompleteAnswerPolicy, QuestionId, ATTRIBUTION, CTA_COPY, DIMENSIONS,
};
use market_clarity::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Comma-separated question ids answered "yes"; every other question is "no"
    #[arg(long, value_delimiter = ',', value_parser = parse_question_id)]
    pub(crate) yes: Vec<QuestionId>,
    /// CSV answer sheet with `question_id,answer` rows
    #[arg(long)]
    pub(crate) answers_csv: Option<PathBuf>,
    /// Score unanswered questions as "no" instead of rejecting the sheet
    #[arg(long)]
    pub(crate) treat_missing_as_no: bool,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only run the named profile
    #[arg(long)]
    pub(crate) profile: Option<String>,
}

pub(crate) struct DemoProfile {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
    pub(crate) yes: &'static [u32],
}

pub(crate) const DEMO_PROFILES: &[DemoProfile] = &[
    DemoProfile {
        name: "early-discovery",
        summary: "Sponsor secured, nobody has spoken to the people expected to adopt",
        yes: &[1, 13, 16],
    },
    DemoProfile {
        name: "translation-gap",
        summary: "Customers known and costs mapped, value still stated in programme language",
        yes: &[1, 2, 3, 4, 5, 9, 10, 11, 13, 14, 16, 17],
    },
    DemoProfile {
        name: "cost-blind",
        summary: "Compelling pitch, adoption costs never counted",
        yes: &[1, 2, 3, 5, 6, 7, 8, 13, 14, 16, 17, 18],
    },
    DemoProfile {
        name: "triangle-misread",
        summary: "Strong customer work, sponsor dynamics unmanaged",
        yes: &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 16, 17, 18],
    },
    DemoProfile {
        name: "ready",
        summary: "Every question answered yes",
        yes: &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18],
    },
];

impl DemoProfile {
    pub(crate) fn answers(&self) -> AnswerSet {
        AnswerSet::from_yes(DIMENSIONS, self.yes.iter().copied().map(QuestionId))
    }
}

pub(crate) fn run_questions() {
    println!("Internal Market Clarity Diagnostic");
    for dimension in DIMENSIONS {
        println!("\n{} ({})", dimension.name, dimension.id);
        println!("  {}", dimension.subtitle);
        for question in dimension.questions {
            println!("  {:>2}. {}", question.id, question.text);
        }
    }
    println!("\n{ATTRIBUTION}");
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        yes,
        answers_csv,
        treat_missing_as_no,
        json,
    } = args;

    let mut config = AppConfig::load()?.diagnostic;
    if treat_missing_as_no {
        config.incomplete_answers = IncompleteAnswerPolicy::TreatAsNo;
    }

    let answers = collect_answers(yes, answers_csv)?;
    let report = score_answers(config, &answers)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let profiles: Vec<&DemoProfile> = DEMO_PROFILES
        .iter()
        .filter(|profile| {
            args.profile
                .as_deref()
                .map_or(true, |name| name.eq_ignore_ascii_case(profile.name))
        })
        .collect();

    if profiles.is_empty() {
        let known: Vec<&str> = DEMO_PROFILES.iter().map(|profile| profile.name).collect();
        println!("No demo profile matches; choose one of: {}", known.join(", "));
        return Ok(());
    }

    println!("Internal Market Clarity Diagnostic demo");
    for profile in profiles {
        println!("\n=== {} ===", profile.name);
        println!("{}", profile.summary);
        let report = score_answers(DiagnosticConfig::default(), &profile.answers())?;
        render_report(&report);
    }

    Ok(())
}

/// Without a sheet, ids not listed as "yes" are answered "no"; with a sheet,
/// `--yes` ids are layered on top of its answers.
fn collect_answers(
    yes: Vec<QuestionId>,
    answers_csv: Option<PathBuf>,
) -> Result<AnswerSet, AppError> {
    match answers_csv {
        Some(path) => {
            let mut answers = AnswerSheetImporter::from_path(path)?;
            for id in yes {
                answers.record(id, true);
            }
            Ok(answers)
        }
        None => Ok(AnswerSet::from_yes(DIMENSIONS, yes)),
    }
}

pub(crate) fn score_answers(
    config: DiagnosticConfig,
    answers: &AnswerSet,
) -> Result<DiagnosticReport, AppError> {
    let engine = DiagnosticEngine::new(config);
    let outcome = engine.evaluate(answers)?;
    Ok(outcome.report())
}

fn render_report(report: &DiagnosticReport) {
    println!(
        "\nOverall score: {}/{} ({} dimension{} with gaps)",
        report.total_score,
        report.max_total_score,
        report.gap_count,
        if report.gap_count == 1 { "" } else { "s" }
    );

    println!("\nDimensions");
    for result in &report.results {
        println!(
            "- [{}] {}: {}/{} ({:.0}%)",
            result.status_label,
            result.name,
            result.score,
            result.max_score,
            result.percentage * 100.0
        );
        if let Some(reflection) = &result.reflection {
            println!("    {}", reflection.reflection);
            println!("    Ask yourself: {}", reflection.prompt);
        }
    }

    if report.patterns.is_empty() {
        println!("\nPatterns: none");
    } else {
        println!("\nPatterns");
        for pattern in &report.patterns {
            println!("- {}: {}", pattern.label, pattern.description);
        }
    }

    if report.show_workshop_callout {
        println!("\n{}", CTA_COPY.callout);
    }
}
