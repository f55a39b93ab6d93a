use crate::aptitude::{run_score, ScoreArgs};
use crate::server;
use atomik::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Atomik API",
    about = "Run the Atomik tutor directory and aptitude screening service",
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
    /// Work with the aptitude screening test offline
    Aptitude {
        #[command(subcommand)]
        command: AptitudeCommand,
    },
}

#[derive(Subcommand, Debug)]
enum AptitudeCommand {
    /// Score an answer sheet against the configured answer key
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
    /// CSV export of tutor profiles loaded into the directory at start-up
    #[arg(long)]
    pub(crate) seed_tutors: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Aptitude {
            command: AptitudeCommand::Score(args),
        } => run_score(args),
    }
}
