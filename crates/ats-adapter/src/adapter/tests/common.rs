use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::adapter::gateway::{AtsGateway, GatewayError, VendorResponse};
use crate::adapter::service::AtsAdapter;
use crate::adapter::vendor::CandidatePayload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum RecordedCall {
    ListOffers,
    CreateCandidate(CandidatePayload),
    ListOfferCandidates(String),
}

/// Scripted gateway: replies are served in order, every call is recorded.
#[derive(Debug, Default)]
pub(super) struct FakeGateway {
    replies: Mutex<VecDeque<Result<VendorResponse, GatewayError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeGateway {
    pub(super) fn replying(status: u16, body: impl Into<String>) -> Self {
        let gateway = Self::default();
        gateway.push(Ok(VendorResponse::new(status, body)));
        gateway
    }

    pub(super) fn failing(error: GatewayError) -> Self {
        let gateway = Self::default();
        gateway.push(Err(error));
        gateway
    }

    pub(super) fn push(&self, reply: Result<VendorResponse, GatewayError>) {
        self.replies.lock().expect("reply mutex").push_back(reply);
    }

    pub(super) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("call mutex").clone()
    }

    fn record(&self, call: RecordedCall) -> Result<VendorResponse, GatewayError> {
        self.calls.lock().expect("call mutex").push(call);
        self.replies
            .lock()
            .expect("reply mutex")
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Transport("no reply scripted".to_string())))
    }
}

impl AtsGateway for FakeGateway {
    async fn list_offers(&self) -> Result<VendorResponse, GatewayError> {
        self.record(RecordedCall::ListOffers)
    }

    async fn create_candidate(
        &self,
        payload: &CandidatePayload,
    ) -> Result<VendorResponse, GatewayError> {
        self.record(RecordedCall::CreateCandidate(payload.clone()))
    }

    async fn list_offer_candidates(&self, offer_id: &str) -> Result<VendorResponse, GatewayError> {
        self.record(RecordedCall::ListOfferCandidates(offer_id.to_string()))
    }
}

pub(super) fn adapter(gateway: FakeGateway) -> (AtsAdapter<FakeGateway>, Arc<FakeGateway>) {
    let gateway = Arc::new(gateway);
    (AtsAdapter::new(Arc::clone(&gateway)), gateway)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
