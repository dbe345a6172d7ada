//! Recruitee adapter: standardized jobs, candidates and applications on top
//! of the vendor's offers and candidates endpoints.

pub mod client;
pub mod domain;
pub mod gateway;
pub mod proxy;
pub mod response;
pub mod router;
pub mod service;
pub mod vendor;

#[cfg(test)]
mod tests;

pub use client::RecruiteeClient;
pub use domain::{
    ApplicationStatus, ApplicationSummary, CandidateCreationRequest, CandidateCreationResult,
    JobListing, ValidCandidate,
};
pub use gateway::{AtsGateway, GatewayError, VendorResponse};
pub use proxy::{invoke, parse_event, AdapterFunction, ProxyEvent, ProxyResponse};
pub use response::HandlerResponse;
pub use router::adapter_router;
pub use service::{AdapterError, AtsAdapter, VendorErrorPolicy};
pub use vendor::CandidatePayload;
