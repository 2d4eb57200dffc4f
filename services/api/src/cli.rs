use crate::demo::{run_demo, run_questions, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use market_clarity::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Internal Market Clarity Diagnostic",
    about = "Serve and run the Internal Market Clarity Diagnostic from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the questionnaire or score an answer set
    Diagnostic {
        #[command(subcommand)]
        command: DiagnosticCommand,
    },
    /// Score a few canned profiles and print their interpretations
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum DiagnosticCommand {
    /// Print every dimension and its questions
    Questions,
    /// Score an answer set and print the resulting profile
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Diagnostic {
            command: DiagnosticCommand::Questions,
        } => {
            run_questions();
            Ok(())
        }
        Command::Diagnostic {
            command: DiagnosticCommand::Score(args),
        } => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
