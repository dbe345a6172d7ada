use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::service::AdapterError;

pub const DEFAULT_JOB_LOCATION: &str = "Remote";
pub const DEFAULT_JOB_STATUS: &str = "OPEN";
pub const CANDIDATE_CREATED_MESSAGE: &str = "Candidate created successfully";

/// Standardized job record produced from a vendor offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: Option<String>,
    pub location: String,
    pub status: String,
    pub external_url: Option<String>,
}

/// Inbound candidate creation body.
///
/// Every field is optional at the wire level so that missing required fields
/// are reported as validation failures instead of deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateCreationRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub job_id: Option<Value>,
}

impl CandidateCreationRequest {
    /// Parses a raw request body. An empty body reads as `{}`; anything other
    /// than a JSON object is rejected.
    pub fn from_body(body: &[u8]) -> Result<Self, AdapterError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let unexpected = |err: serde_json::Error| AdapterError::Unexpected(err.to_string());
        match serde_json::from_slice::<Value>(body).map_err(unexpected)? {
            object @ Value::Object(_) => serde_json::from_value(object).map_err(unexpected),
            _ => Err(AdapterError::Unexpected(
                "request body must be a JSON object".to_string(),
            )),
        }
    }

    pub fn validate(self) -> Result<ValidCandidate, AdapterError> {
        let (Some(name), Some(email)) = (present(self.name), present(self.email)) else {
            return Err(AdapterError::Validation("Name and Email are required".to_string()));
        };

        let offer_id = match self.job_id {
            None => None,
            Some(raw) => coerce_offer_id(&raw)?,
        };

        Ok(ValidCandidate {
            name,
            email,
            phone: present(self.phone),
            resume_url: present(self.resume_url),
            offer_id,
        })
    }
}

/// Candidate input that passed validation; the only shape a vendor payload is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCandidate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub offer_id: Option<i64>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Coerces a `job_id` into the vendor's numeric offer id.
///
/// Falsy values (null, `false`, zero, the empty string, empty arrays and
/// objects) mean "no association".
fn coerce_offer_id(raw: &Value) -> Result<Option<i64>, AdapterError> {
    let invalid = || AdapterError::Validation("job_id must be numeric".to_string());
    match raw {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Array(items) if items.is_empty() => Ok(None),
        Value::Object(fields) if fields.is_empty() => Ok(None),
        Value::Number(number) if number.as_f64() == Some(0.0) => Ok(None),
        Value::Number(number) => match number.as_i64() {
            Some(id) => Ok(Some(id)),
            None => number
                .as_f64()
                .map(f64::trunc)
                .filter(|value| (i64::MIN as f64..i64::MAX as f64).contains(value))
                .map(|value| Some(value as i64))
                .ok_or_else(invalid),
        },
        Value::String(text) if text.trim().is_empty() => Ok(None),
        Value::String(text) => text.trim().parse::<i64>().map(Some).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateCreationResult {
    pub message: String,
    pub id: Value,
    pub recruitee_id: Value,
}

impl CandidateCreationResult {
    pub fn created(vendor_id: Value) -> Self {
        Self {
            message: CANDIDATE_CREATED_MESSAGE.to_string(),
            id: vendor_id.clone(),
            recruitee_id: vendor_id,
        }
    }
}

/// Application status as exposed to callers.
///
/// Vendor placement stages are not mapped yet, so every application reads as applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Applied,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSummary {
    pub id: String,
    pub candidate_name: Option<String>,
    pub email: String,
    pub status: ApplicationStatus,
}
