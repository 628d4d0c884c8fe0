//! Heuristic variant scoring
//!
//! Pathogenicity is a pure function of position and chromosome:
//!
//! ```text
//! base          = (position mod 1000) / 1000
//! pathogenicity = min(base * 0.7 + chromosome * 0.01 + 0.1, 0.95)
//! ```
//!
//! rounded to three decimals. The impact label is a threshold over that score.
//!
//! # Example
//!
//! ```
//! use genoscore::score::{pathogenicity, Impact};
//!
//! let score = pathogenicity(500, 1);
//! assert_eq!(score, 0.46);
//! assert_eq!(Impact::from_pathogenicity(score), Impact::Moderate);
//! ```

use crate::variant::{Prediction, Variant};

/// Lower bound of the score (the intercept of the formula)
pub const MIN_PATHOGENICITY: f64 = 0.1;

/// Upper bound of the score
pub const MAX_PATHOGENICITY: f64 = 0.95;

/// Weight applied to the position-derived base term
pub const POSITION_WEIGHT: f64 = 0.7;

/// Weight applied to the chromosome number
pub const CHROMOSOME_WEIGHT: f64 = 0.01;

/// Confidence reported for every heuristic prediction
pub const HEURISTIC_CONFIDENCE: f64 = 0.75;

/// Scores strictly above this are high impact
pub const HIGH_IMPACT_THRESHOLD: f64 = 0.8;

/// Scores strictly above this (and not high) are moderate impact
///
/// Set so that 0.46 (position 500 on chromosome 1) classifies as moderate.
pub const MODERATE_IMPACT_THRESHOLD: f64 = 0.4;

/// Consequence descriptions, indexed by [`consequence_index`]
pub const CONSEQUENCES: [&str; 10] = [
    "Missense variant - may alter protein function",
    "Synonymous variant - no amino acid change",
    "Intron variant - may affect splicing",
    "Regulatory region variant",
    "3' UTR variant - may affect mRNA stability",
    "5' UTR variant - may affect translation",
    "Splice site variant - likely affects splicing",
    "Stop gained - truncates protein",
    "Frameshift variant - alters reading frame",
    "Non-coding transcript variant",
];

/// Impact class derived from a pathogenicity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Impact {
    High,
    Moderate,
    Low,
}

impl Impact {
    /// Classify a pathogenicity score
    pub fn from_pathogenicity(score: f64) -> Self {
        if score > HIGH_IMPACT_THRESHOLD {
            Impact::High
        } else if score > MODERATE_IMPACT_THRESHOLD {
            Impact::Moderate
        } else {
            Impact::Low
        }
    }

    /// Label reported in the `effect` field
    pub fn label(&self) -> &'static str {
        match self {
            Impact::High => "High impact",
            Impact::Moderate => "Moderate impact",
            Impact::Low => "Low impact",
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Round to a fixed number of decimal places
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Pathogenicity for a position on the chromosome with the given scoring number
pub fn pathogenicity(position: u64, chromosome: u8) -> f64 {
    let base = (position % 1000) as f64 / 1000.0;
    let raw =
        base * POSITION_WEIGHT + f64::from(chromosome) * CHROMOSOME_WEIGHT + MIN_PATHOGENICITY;
    round_to(raw.min(MAX_PATHOGENICITY), 3)
}

/// Index into [`CONSEQUENCES`] for a record
///
/// Mixes the third byte of the identifier (the first digit of an `rs` id) into
/// the position; identifiers shorter than three bytes fall back to position alone.
pub fn consequence_index(rs_id: &str, position: u64) -> usize {
    let len = CONSEQUENCES.len() as u64;
    let offset = rs_id.as_bytes().get(2).map_or(0, |b| u64::from(*b) % len);
    ((position % len + offset) % len) as usize
}

/// Score a variant with the heuristic formula
pub fn score_variant(variant: &Variant) -> Prediction {
    let pathogenicity = pathogenicity(variant.position, variant.chromosome.number());
    let impact = Impact::from_pathogenicity(pathogenicity);

    Prediction {
        pathogenicity,
        effect: impact.label().to_string(),
        confidence: HEURISTIC_CONFIDENCE,
        consequence: CONSEQUENCES[consequence_index(&variant.rs_id, variant.position)].to_string(),
    }
}
