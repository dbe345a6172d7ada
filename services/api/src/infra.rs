use ats_adapter::adapter::{AtsAdapter, RecruiteeClient};
use ats_adapter::config::AppConfig;
use ats_adapter::error::AppError;
use clap::ValueEnum;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::io::Write;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_adapter(
    config: &AppConfig,
) -> Result<Arc<AtsAdapter<RecruiteeClient>>, AppError> {
    let client = RecruiteeClient::new(&config.recruitee)?;
    Ok(Arc::new(AtsAdapter::new(Arc::new(client))))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Json,
    Csv,
}

pub(crate) fn write_records<T, W>(
    writer: W,
    records: &[T],
    format: OutputFormat,
) -> Result<(), AppError>
where
    T: Serialize,
    W: Write,
{
    match format {
        OutputFormat::Json => write_json(writer, records),
        OutputFormat::Csv => {
            let mut csv = csv::Writer::from_writer(writer);
            for record in records {
                csv.serialize(record)
                    .map_err(|err| AppError::Output(err.to_string()))?;
            }
            csv.flush()?;
            Ok(())
        }
    }
}

pub(crate) fn write_json<T, W>(mut writer: W, value: &T) -> Result<(), AppError>
where
    T: Serialize + ?Sized,
    W: Write,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}
