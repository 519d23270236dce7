//! Core of the Credence misinformation-risk service: the assessment engine,
//! the report ledger, and the shared configuration, error, and telemetry
//! plumbing used by the HTTP boundary.

pub mod assessment;
pub mod config;
pub mod error;
pub mod reports;
pub mod resources;
pub mod telemetry;
