use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use tracing::debug;
use url::Url;

use super::gateway::{AtsGateway, GatewayError, VendorResponse};
use super::vendor::CandidatePayload;
use crate::config::RecruiteeConfig;

/// Recruitee REST client sharing one connection pool and one set of credentials.
#[derive(Clone)]
pub struct RecruiteeClient {
    http: Client,
    base_url: Url,
    api_token: String,
}

impl RecruiteeClient {
    pub fn new(config: &RecruiteeConfig) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .build()
            .map_err(|err| GatewayError::Client(err.to_string()))?;
        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: Client, config: &RecruiteeConfig) -> Self {
        Self {
            http,
            base_url: config.tenant_base_url(),
            api_token: config.api_token.clone(),
        }
    }

    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::Url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.api_token)
            .header(CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
    }

    async fn execute(&self, request: RequestBuilder) -> Result<VendorResponse, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        debug!(status, bytes = body.len(), "recruitee responded");
        Ok(VendorResponse { status, body })
    }
}

impl std::fmt::Debug for RecruiteeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecruiteeClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl AtsGateway for RecruiteeClient {
    async fn list_offers(&self) -> Result<VendorResponse, GatewayError> {
        let url = self.endpoint(&["offers"])?;
        debug!(%url, "GET offers");
        self.execute(self.request(Method::GET, url)).await
    }

    async fn create_candidate(
        &self,
        payload: &CandidatePayload,
    ) -> Result<VendorResponse, GatewayError> {
        let url = self.endpoint(&["candidates"])?;
        debug!(%url, offers = ?payload.offers, "POST candidate");
        self.execute(self.request(Method::POST, url).json(payload)).await
    }

    async fn list_offer_candidates(&self, offer_id: &str) -> Result<VendorResponse, GatewayError> {
        let url = self.endpoint(&["offers", offer_id, "candidates"])?;
        debug!(%url, "GET offer candidates");
        self.execute(self.request(Method::GET, url)).await
    }
}
