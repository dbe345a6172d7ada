use crate::commands::{
    run_applications, run_candidates, run_invoke, run_jobs, ApplicationsArgs, CandidateArgs,
    InvokeArgs, JobsArgs,
};
use crate::server;
use ats_adapter::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Recruitee ATS Adapter",
    about = "Serve or run the standardized jobs/candidates/applications adapter for Recruitee",
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
    /// List the tenant's jobs
    Jobs(JobsArgs),
    /// List the applications received for one job
    Applications(ApplicationsArgs),
    /// Create a candidate, optionally attached to a job
    Candidates(CandidateArgs),
    /// Run one adapter function against a serverless proxy event
    Invoke(InvokeArgs),
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
        Command::Jobs(args) => run_jobs(args).await,
        Command::Applications(args) => run_applications(args).await,
        Command::Candidates(args) => run_candidates(args).await,
        Command::Invoke(args) => run_invoke(args).await,
    }
}
