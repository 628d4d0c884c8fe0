// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! genoscore: SNP pathogenicity scoring
//!
//! Scores single-nucleotide variants with a deterministic heuristic derived from
//! chromosome and position, and serves the scorer over HTTP.
//!
//! # Example
//!
//! ```
//! use genoscore::{score_variant, Chromosome, Genotype, Impact, Variant};
//!
//! let variant = Variant {
//!     rs_id: "rs429358".to_string(),
//!     chromosome: Chromosome::Autosome(1),
//!     position: 500,
//!     genotype: Genotype::parse("CT").unwrap(),
//! };
//!
//! let prediction = score_variant(&variant);
//! assert_eq!(prediction.pathogenicity, 0.46);
//! assert_eq!(prediction.effect, Impact::Moderate.label());
//! ```

pub mod analysis;
pub mod error;
pub mod model;
pub mod score;
#[cfg(feature = "web-service")]
pub mod service;
pub mod variant;

// Re-export commonly used types
pub use analysis::{analyze, AnalysisResult, AnalyzeRequest, AnalyzeResponse};
pub use error::Error;
pub use model::{HeuristicModel, PredictionModel};
pub use score::{score_variant, Impact};
pub use variant::{Chromosome, Genotype, Prediction, Variant, VariantError};

/// Result type alias for genoscore operations
pub type Result<T> = std::result::Result<T, Error>;
