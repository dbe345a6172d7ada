use std::sync::Arc;

use tracing::{error, info, warn};

use super::domain::{
    ApplicationSummary, CandidateCreationRequest, CandidateCreationResult, JobListing,
};
use super::gateway::{AtsGateway, GatewayError, VendorResponse};
use super::vendor::{
    CandidatePayload, CreatedCandidateEnvelope, OfferCandidatesEnvelope, OffersEnvelope,
};

pub const JOBS_FETCH_FAILED: &str = "Failed to fetch jobs from Recruitee";
pub const APPLICATIONS_FETCH_FAILED: &str = "Could not fetch applications";
pub const MISSING_JOB_ID: &str = "Missing job_id parameter";

/// Error returned by every adapter operation; each variant knows its status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    #[error("{0}")]
    Validation(String),
    #[error("{message}")]
    Vendor { status: u16, message: String },
    #[error("{0}")]
    Unexpected(String),
}

impl AdapterError {
    pub fn status(&self) -> u16 {
        match self {
            AdapterError::Validation(_) => 400,
            AdapterError::Vendor { status, .. } => *status,
            AdapterError::Unexpected(_) => 500,
        }
    }
}

impl From<GatewayError> for AdapterError {
    fn from(value: GatewayError) -> Self {
        Self::Unexpected(value.to_string())
    }
}

/// How a non-success vendor reply is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorErrorPolicy {
    /// Keep the vendor status, replace the body with a fixed message.
    Normalize(&'static str),
    /// Keep the vendor status and hand back the raw vendor body text.
    Passthrough,
}

impl VendorErrorPolicy {
    pub fn apply(self, response: VendorResponse) -> AdapterError {
        let message = match self {
            VendorErrorPolicy::Normalize(message) => message.to_string(),
            VendorErrorPolicy::Passthrough => response.body,
        };
        AdapterError::Vendor {
            status: response.status,
            message,
        }
    }
}

/// The three adapter operations, sharing one vendor gateway.
#[derive(Debug)]
pub struct AtsAdapter<G> {
    gateway: Arc<G>,
}

impl<G> Clone for AtsAdapter<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G> AtsAdapter<G>
where
    G: AtsGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// List every vendor offer as a standardized job listing.
    pub async fn list_jobs(&self) -> Result<Vec<JobListing>, AdapterError> {
        let response = self.gateway.list_offers().await.map_err(unexpected)?;
        if !response.is_ok() {
            return Err(vendor_failure(
                "list_jobs",
                VendorErrorPolicy::Normalize(JOBS_FETCH_FAILED),
                response,
            ));
        }

        let envelope: OffersEnvelope = response.json().map_err(unexpected)?;
        let jobs = envelope.into_job_listings();
        info!(count = jobs.len(), "listed jobs");
        Ok(jobs)
    }

    /// Create a candidate, optionally attached to one offer.
    pub async fn create_candidate(
        &self,
        request: CandidateCreationRequest,
    ) -> Result<CandidateCreationResult, AdapterError> {
        let candidate = request.validate()?;
        let payload = CandidatePayload::from(candidate);

        let response = self
            .gateway
            .create_candidate(&payload)
            .await
            .map_err(unexpected)?;
        if !response.is_created() {
            return Err(vendor_failure(
                "create_candidate",
                VendorErrorPolicy::Passthrough,
                response,
            ));
        }

        let envelope: CreatedCandidateEnvelope = response.json().map_err(unexpected)?;
        let vendor_id = envelope.candidate_id();
        info!(candidate_id = %vendor_id, offers = ?payload.offers, "created candidate");
        Ok(CandidateCreationResult::created(vendor_id))
    }

    /// List the candidates attached to one offer.
    pub async fn list_applications(
        &self,
        job_id: Option<&str>,
    ) -> Result<Vec<ApplicationSummary>, AdapterError> {
        let job_id = job_id
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AdapterError::Validation(MISSING_JOB_ID.to_string()))?;

        let response = self
            .gateway
            .list_offer_candidates(job_id)
            .await
            .map_err(unexpected)?;
        if !response.is_ok() {
            return Err(vendor_failure(
                "list_applications",
                VendorErrorPolicy::Normalize(APPLICATIONS_FETCH_FAILED),
                response,
            ));
        }

        let envelope: OfferCandidatesEnvelope = response.json().map_err(unexpected)?;
        let applications = envelope.into_application_summaries();
        info!(job_id, count = applications.len(), "listed applications");
        Ok(applications)
    }
}

fn vendor_failure(
    operation: &'static str,
    policy: VendorErrorPolicy,
    response: VendorResponse,
) -> AdapterError {
    warn!(operation, status = response.status, "recruitee rejected request");
    policy.apply(response)
}

fn unexpected(err: GatewayError) -> AdapterError {
    error!(error = %err, "recruitee call failed");
    AdapterError::from(err)
}
