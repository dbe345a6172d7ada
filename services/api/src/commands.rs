use crate::infra::{build_adapter, write_json, write_records, OutputFormat};
use ats_adapter::adapter::{
    invoke, parse_event, AdapterFunction, AtsAdapter, CandidateCreationRequest, RecruiteeClient,
};
use ats_adapter::config::AppConfig;
use ats_adapter::error::AppError;
use ats_adapter::telemetry;
use clap::Args;
use serde_json::Value;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct JobsArgs {
    /// Output format for the listing
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct ApplicationsArgs {
    /// Recruitee offer id to list applications for
    #[arg(long)]
    pub(crate) job_id: String,
    /// Output format for the listing
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct CandidateArgs {
    /// Candidate full name
    #[arg(long)]
    pub(crate) name: String,
    /// Candidate e-mail address
    #[arg(long)]
    pub(crate) email: String,
    /// Optional phone number
    #[arg(long)]
    pub(crate) phone: Option<String>,
    /// Optional link to the candidate's resume
    #[arg(long)]
    pub(crate) resume_url: Option<String>,
    /// Optional numeric offer id to attach the candidate to
    #[arg(long)]
    pub(crate) job_id: Option<String>,
}

impl From<CandidateArgs> for CandidateCreationRequest {
    fn from(args: CandidateArgs) -> Self {
        Self {
            name: Some(args.name),
            email: Some(args.email),
            phone: args.phone,
            resume_url: args.resume_url,
            job_id: args.job_id.map(Value::String),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct InvokeArgs {
    /// Function to run: get-jobs, create-candidate or get-applications
    #[arg(value_parser = parse_function)]
    pub(crate) function: AdapterFunction,
    /// Proxy event JSON file; `-` reads stdin. Defaults to an empty event.
    #[arg(long)]
    pub(crate) event: Option<PathBuf>,
}

pub(crate) fn parse_function(raw: &str) -> Result<AdapterFunction, String> {
    raw.parse::<AdapterFunction>().map_err(|err| {
        let known: Vec<&str> = AdapterFunction::ALL.iter().map(|f| f.name()).collect();
        format!("{err} (expected one of: {})", known.join(", "))
    })
}

fn command_adapter() -> Result<Arc<AtsAdapter<RecruiteeClient>>, AppError> {
    let config = AppConfig::load()?;
    telemetry::init_stderr(&config.telemetry)?;
    build_adapter(&config)
}

pub(crate) async fn run_jobs(args: JobsArgs) -> Result<(), AppError> {
    let adapter = command_adapter()?;
    let jobs = adapter.list_jobs().await?;
    write_records(io::stdout().lock(), &jobs, args.format)
}

pub(crate) async fn run_applications(args: ApplicationsArgs) -> Result<(), AppError> {
    let adapter = command_adapter()?;
    let applications = adapter.list_applications(Some(args.job_id.as_str())).await?;
    write_records(io::stdout().lock(), &applications, args.format)
}

pub(crate) async fn run_candidates(args: CandidateArgs) -> Result<(), AppError> {
    let adapter = command_adapter()?;
    let created = adapter
        .create_candidate(CandidateCreationRequest::from(args))
        .await?;
    write_json(io::stdout().lock(), &created)
}

pub(crate) async fn run_invoke(args: InvokeArgs) -> Result<(), AppError> {
    let raw = read_event(args.event.as_ref())?;
    let adapter = command_adapter()?;

    let response = match parse_event(&raw) {
        Ok(event) => invoke(&adapter, args.function, &event).await,
        Err(response) => response,
    };
    write_json(io::stdout().lock(), &response)
}

fn read_event(source: Option<&PathBuf>) -> Result<String, AppError> {
    match source {
        None => Ok(String::new()),
        Some(path) if path.as_os_str() == "-" => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}
