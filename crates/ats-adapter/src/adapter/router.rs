use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    routing::{get, post},
    Router,
};

use super::domain::CandidateCreationRequest;
use super::gateway::AtsGateway;
use super::response::HandlerResponse;
use super::service::{AdapterError, AtsAdapter};

/// Router builder exposing the three adapter endpoints.
pub fn adapter_router<G>(adapter: Arc<AtsAdapter<G>>) -> Router
where
    G: AtsGateway,
{
    Router::new()
        .route("/jobs", get(list_jobs_handler::<G>))
        .route("/candidates", post(create_candidate_handler::<G>))
        .route("/applications", get(list_applications_handler::<G>))
        .with_state(adapter)
}

pub(crate) async fn list_jobs_handler<G>(
    State(adapter): State<Arc<AtsAdapter<G>>>,
) -> HandlerResponse
where
    G: AtsGateway,
{
    HandlerResponse::ok(adapter.list_jobs().await)
}

pub(crate) async fn create_candidate_handler<G>(
    State(adapter): State<Arc<AtsAdapter<G>>>,
    body: Bytes,
) -> HandlerResponse
where
    G: AtsGateway,
{
    let result = match CandidateCreationRequest::from_body(&body) {
        Ok(request) => adapter.create_candidate(request).await,
        Err(err) => Err(err),
    };
    HandlerResponse::created(result)
}

pub(crate) async fn list_applications_handler<G>(
    State(adapter): State<Arc<AtsAdapter<G>>>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> HandlerResponse
where
    G: AtsGateway,
{
    // Repeated keys collapse to the last value, as proxy integrations do.
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            return HandlerResponse::from(AdapterError::Validation(rejection.body_text()))
        }
    };
    let job_id = params.get("job_id").map(String::as_str);
    HandlerResponse::ok(adapter.list_applications(job_id).await)
}
