//! Recruitee wire shapes and their mapping onto the adapter's DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::{
    ApplicationStatus, ApplicationSummary, JobListing, ValidCandidate, DEFAULT_JOB_LOCATION,
    DEFAULT_JOB_STATUS,
};

/// Response of `GET /offers`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OffersEnvelope {
    #[serde(default)]
    pub offers: Option<Vec<Offer>>,
}

impl OffersEnvelope {
    pub fn into_job_listings(self) -> Vec<JobListing> {
        self.offers
            .unwrap_or_default()
            .into_iter()
            .map(JobListing::from)
            .collect()
    }
}

/// Recruitee calls jobs "offers".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Offer {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub careers_url: Option<String>,
}

impl From<Offer> for JobListing {
    fn from(offer: Offer) -> Self {
        // Recruitee reports lower-case states such as "published" or "internal".
        let status = offer
            .status
            .as_deref()
            .unwrap_or(DEFAULT_JOB_STATUS)
            .to_uppercase();

        Self {
            id: identifier(&offer.id),
            title: offer.title,
            location: offer
                .location
                .unwrap_or_else(|| DEFAULT_JOB_LOCATION.to_string()),
            status,
            external_url: offer.careers_url,
        }
    }
}

/// Response of `GET /offers/{id}/candidates`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfferCandidatesEnvelope {
    #[serde(default)]
    pub candidates: Option<Vec<OfferCandidate>>,
}

impl OfferCandidatesEnvelope {
    pub fn into_application_summaries(self) -> Vec<ApplicationSummary> {
        self.candidates
            .unwrap_or_default()
            .into_iter()
            .map(ApplicationSummary::from)
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfferCandidate {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub emails: Option<Vec<String>>,
}

impl From<OfferCandidate> for ApplicationSummary {
    fn from(candidate: OfferCandidate) -> Self {
        let email = candidate
            .emails
            .and_then(|emails| emails.into_iter().next())
            .unwrap_or_default();

        Self {
            id: identifier(&candidate.id),
            candidate_name: candidate.name,
            email,
            // Recruitee tracks per-offer progress in placements; not mapped yet.
            status: ApplicationStatus::Applied,
        }
    }
}

/// Body of `POST /candidates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePayload {
    pub candidate: CandidateDraft,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offers: Option<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDraft {
    pub name: String,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub links: Vec<String>,
}

impl From<ValidCandidate> for CandidatePayload {
    fn from(candidate: ValidCandidate) -> Self {
        Self {
            candidate: CandidateDraft {
                name: candidate.name,
                emails: vec![candidate.email],
                phones: candidate.phone.into_iter().collect(),
                links: candidate.resume_url.into_iter().collect(),
            },
            offers: candidate.offer_id.map(|id| vec![id]),
        }
    }
}

/// Response of `POST /candidates`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedCandidateEnvelope {
    #[serde(default)]
    pub candidate: Option<CreatedCandidate>,
}

impl CreatedCandidateEnvelope {
    pub fn candidate_id(self) -> Value {
        self.candidate
            .map(|candidate| candidate.id)
            .unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedCandidate {
    #[serde(default)]
    pub id: Value,
}

/// Renders a vendor identifier as a string: text stays as-is, numbers use
/// their decimal form, null becomes empty.
pub fn identifier(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
