use crate::assess::{run_assessment, run_questions, AssessArgs, QuestionsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dhara::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Dhara",
    about = "Serve or run the Dhara dosha assessment engine from the command line",
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
    /// Assess a symptom description or a set of quiz answers offline
    Assess(AssessArgs),
    /// List the dosha quiz questions and their options
    Questions(QuestionsArgs),
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
        Command::Assess(args) => run_assessment(args),
        Command::Questions(args) => run_questions(args),
    }
}
