//! Web service module for SNP scoring
//!
//! This module exposes the variant scorer over HTTP:
//! - `POST /api/analyze_snps` scores a batch of SNP records
//! - `GET /health` and `GET /` return static status objects
//! - `GET /api/info` describes the service and its model
//!
//! All responses carry permissive CORS headers unless disabled in configuration.

pub mod config;
pub mod handlers;
pub mod server;
pub mod types;
pub mod validation;

pub use config::ServiceConfig;
pub use server::{create_app, router, AppState};
pub use types::*;
