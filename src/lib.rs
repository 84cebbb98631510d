//! Creditworthiness assessment for merchant venues.
//!
//! The underwriting workflow turns a venue's trailing transaction history
//! into normalized metrics, applies hard eligibility gates alongside a
//! five-pillar weighted scoring model, and sizes a revenue-based credit
//! offer for eligible venues. Storage, offer lifecycle management, and any
//! delivery surface live behind collaborator traits implemented by the
//! surrounding payments platform.

pub mod config;
pub mod telemetry;
pub mod workflows;
