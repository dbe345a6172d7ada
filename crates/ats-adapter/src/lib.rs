//! Adapter exposing a standardized jobs/candidates/applications contract on
//! top of the Recruitee applicant-tracking API.

pub mod adapter;
pub mod config;
pub mod error;
pub mod telemetry;
