use std::fmt::Debug;
use std::future::Future;

use serde::de::DeserializeOwned;

use super::vendor::CandidatePayload;

/// Raw vendor reply: the status code and the unparsed body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorResponse {
    pub status: u16,
    pub body: String,
}

impl VendorResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    pub fn is_created(&self) -> bool {
        matches!(self.status, 200 | 201)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, GatewayError> {
        serde_json::from_str(&self.body).map_err(|err| GatewayError::Decode(err.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
    #[error("cannot build vendor url from '{0}'")]
    Url(String),
    #[error("unable to build http client: {0}")]
    Client(String),
}

/// Outbound seam to the ATS vendor. Each call issues exactly one request and
/// hands back whatever status the vendor answered with.
pub trait AtsGateway: Debug + Send + Sync + 'static {
    fn list_offers(&self) -> impl Future<Output = Result<VendorResponse, GatewayError>> + Send;

    fn create_candidate(
        &self,
        payload: &CandidatePayload,
    ) -> impl Future<Output = Result<VendorResponse, GatewayError>> + Send;

    fn list_offer_candidates(
        &self,
        offer_id: &str,
    ) -> impl Future<Output = Result<VendorResponse, GatewayError>> + Send;
}
