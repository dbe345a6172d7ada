use std::sync::Arc;

use ats_adapter::adapter::{
    adapter_router, invoke, AdapterFunction, AtsAdapter, CandidateCreationRequest, ProxyEvent,
    RecruiteeClient,
};
use ats_adapter::config::RecruiteeConfig;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn adapter_for(server: &MockServer) -> AtsAdapter<RecruiteeClient> {
    let config = RecruiteeConfig::new(&server.uri(), "acme", TOKEN).expect("valid config");
    let client = RecruiteeClient::new(&config).expect("client builds");
    AtsAdapter::new(Arc::new(client))
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json payload")
}

#[tokio::test]
async fn list_jobs_sends_bearer_token_to_tenant_offers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/c/acme/offers"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offers": [
                { "id": 1, "title": "Engineer", "status": "published" },
                { "id": 2, "title": null, "location": "Lisbon", "careers_url": "https://acme.recruitee.com/o/ops" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let router = adapter_router(Arc::new(adapter_for(&server)));
    let response = router
        .oneshot(Request::get("/jobs").body(Body::empty()).expect("request"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!([
            {
                "id": "1",
                "title": "Engineer",
                "location": "Remote",
                "status": "PUBLISHED",
                "external_url": null
            },
            {
                "id": "2",
                "title": null,
                "location": "Lisbon",
                "status": "OPEN",
                "external_url": "https://acme.recruitee.com/o/ops"
            }
        ])
    );
}

#[tokio::test]
async fn create_candidate_posts_vendor_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/c/acme/candidates"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({
            "candidate": {
                "name": "Alice",
                "emails": ["a@x.com"],
                "phones": [],
                "links": []
            },
            "offers": [42]
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "candidate": { "id": 9001 } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let adapter = adapter_for(&server);
    let request = CandidateCreationRequest::from_body(
        br#"{"name":"Alice","email":"a@x.com","job_id":"42"}"#,
    )
    .expect("body parses");

    let created = adapter
        .create_candidate(request)
        .await
        .expect("candidate created");

    assert_eq!(created.id, json!(9001));
    assert_eq!(created.recruitee_id, json!(9001));
}

#[tokio::test]
async fn create_candidate_passes_vendor_rejection_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/c/acme/candidates"))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid email"))
        .expect(1)
        .mount(&server)
        .await;

    let router = adapter_router(Arc::new(adapter_for(&server)));
    let response = router
        .oneshot(
            Request::post("/candidates")
                .body(Body::from(r#"{"name":"Alice","email":"a@x"}"#))
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await, json!({ "error": "invalid email" }));
}

#[tokio::test]
async fn create_candidate_validation_makes_no_vendor_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let router = adapter_router(Arc::new(adapter_for(&server)));
    let response = router
        .oneshot(
            Request::post("/candidates")
                .body(Body::from("{}"))
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn applications_hit_offer_candidates_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/c/acme/offers/42/candidates"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                { "id": 5, "name": "Bo", "emails": [] },
                { "id": 6, "name": "Cy", "emails": ["cy@x.com"], "placements": [{ "stage": "hired" }] }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let event = ProxyEvent {
        body: None,
        query_string_parameters: Some([("job_id".to_string(), "42".to_string())].into()),
    };
    let response = invoke(&adapter_for(&server), AdapterFunction::GetApplications, &event).await;

    assert_eq!(response.status_code, 200);
    let body: Value = serde_json::from_str(&response.body).expect("json body");
    assert_eq!(
        body,
        json!([
            { "id": "5", "candidate_name": "Bo", "email": "", "status": "APPLIED" },
            { "id": "6", "candidate_name": "Cy", "email": "cy@x.com", "status": "APPLIED" }
        ])
    );
}

#[tokio::test]
async fn applications_vendor_error_uses_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/c/acme/offers/77/candidates"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let err = adapter_for(&server)
        .list_applications(Some("77"))
        .await
        .expect_err("vendor error");

    assert_eq!(err.status(), 404);
    assert_eq!(err.to_string(), "Could not fetch applications");
}

#[tokio::test]
async fn unreachable_vendor_becomes_500() {
    let server = MockServer::start().await;
    let adapter = adapter_for(&server);
    drop(server);

    let response = invoke(&adapter, AdapterFunction::GetJobs, &ProxyEvent::default()).await;

    assert_eq!(response.status_code, 500);
    let body: Value = serde_json::from_str(&response.body).expect("json body");
    assert!(body["error"].as_str().is_some_and(|text| !text.is_empty()));
}
