//! Serverless entry points: API-Gateway-style proxy events in, proxy
//! responses with a JSON-encoded body out.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::CandidateCreationRequest;
use super::gateway::AtsGateway;
use super::response::HandlerResponse;
use super::service::AtsAdapter;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl ProxyEvent {
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(key))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub body: String,
}

impl From<HandlerResponse> for ProxyResponse {
    fn from(response: HandlerResponse) -> Self {
        Self {
            status_code: response.status,
            body: response.body.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterFunction {
    GetJobs,
    CreateCandidate,
    GetApplications,
}

impl AdapterFunction {
    pub const ALL: [AdapterFunction; 3] = [
        AdapterFunction::GetJobs,
        AdapterFunction::CreateCandidate,
        AdapterFunction::GetApplications,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AdapterFunction::GetJobs => "get-jobs",
            AdapterFunction::CreateCandidate => "create-candidate",
            AdapterFunction::GetApplications => "get-applications",
        }
    }
}

impl fmt::Display for AdapterFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown function '{0}'")]
pub struct UnknownFunction(pub String);

impl FromStr for AdapterFunction {
    type Err = UnknownFunction;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|function| function.name() == normalized)
            .ok_or_else(|| UnknownFunction(value.to_string()))
    }
}

/// Runs one adapter function against a proxy event.
pub async fn invoke<G>(
    adapter: &AtsAdapter<G>,
    function: AdapterFunction,
    event: &ProxyEvent,
) -> ProxyResponse
where
    G: AtsGateway,
{
    let response = match function {
        AdapterFunction::GetJobs => HandlerResponse::ok(adapter.list_jobs().await),
        AdapterFunction::CreateCandidate => {
            let body = event.body.as_deref().unwrap_or("{}");
            let result = match CandidateCreationRequest::from_body(body.as_bytes()) {
                Ok(request) => adapter.create_candidate(request).await,
                Err(err) => Err(err),
            };
            HandlerResponse::created(result)
        }
        AdapterFunction::GetApplications => {
            HandlerResponse::ok(adapter.list_applications(event.query("job_id")).await)
        }
    };

    ProxyResponse::from(response)
}

/// Parses a raw event document; failures become a 500 proxy response.
pub fn parse_event(raw: &str) -> Result<ProxyEvent, ProxyResponse> {
    if raw.trim().is_empty() {
        return Ok(ProxyEvent::default());
    }
    serde_json::from_str(raw).map_err(|err| {
        ProxyResponse::from(HandlerResponse::new(500, json!({ "error": err.to_string() })))
    })
}
