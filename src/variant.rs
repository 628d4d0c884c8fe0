//! Variant and prediction data model
//!
//! A [`Variant`] is the validated form of one SNP record from a request; a
//! [`Prediction`] is the annotation produced for it. Both are plain values with
//! no identity beyond the record they describe.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Allele characters accepted in a genotype call (D/I for deletion/insertion calls)
static GENOTYPE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ACGTDI-]{1,2}$").unwrap());

/// Errors raised while turning a raw record into a [`Variant`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    #[error("SNP record must be a JSON object")]
    NotAnObject,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("invalid chromosome '{0}'")]
    InvalidChromosome(String),

    #[error("invalid position '{0}': expected a non-negative integer")]
    InvalidPosition(String),

    #[error("invalid genotype '{0}': expected one or two allele characters")]
    InvalidGenotype(String),
}

/// Human chromosome a variant lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chromosome {
    /// Chromosomes 1 through 22
    Autosome(u8),
    X,
    Y,
    /// Mitochondrial genome
    Mito,
}

impl Chromosome {
    /// Build a chromosome from its scoring number (1-22, X=23, Y=24, MT=25)
    pub fn from_number(n: u64) -> Option<Self> {
        match n {
            1..=22 => Some(Chromosome::Autosome(n as u8)),
            23 => Some(Chromosome::X),
            24 => Some(Chromosome::Y),
            25 => Some(Chromosome::Mito),
            _ => None,
        }
    }

    /// Numeric value used by the scoring formula
    pub fn number(&self) -> u8 {
        match self {
            Chromosome::Autosome(n) => *n,
            Chromosome::X => 23,
            Chromosome::Y => 24,
            Chromosome::Mito => 25,
        }
    }
}

impl FromStr for Chromosome {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = match trimmed.get(..3) {
            Some(prefix) if prefix.eq_ignore_ascii_case("chr") => &trimmed[3..],
            _ => trimmed,
        };

        let parsed = match name.to_ascii_uppercase().as_str() {
            "X" => Some(Chromosome::X),
            "Y" => Some(Chromosome::Y),
            "M" | "MT" => Some(Chromosome::Mito),
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                digits.parse().ok().and_then(Chromosome::from_number)
            }
            _ => None,
        };

        parsed.ok_or_else(|| VariantError::InvalidChromosome(s.to_string()))
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chromosome::Autosome(n) => write!(f, "{}", n),
            Chromosome::X => write!(f, "X"),
            Chromosome::Y => write!(f, "Y"),
            Chromosome::Mito => write!(f, "MT"),
        }
    }
}

/// Genotype call of one or two alleles, stored upper-case
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Genotype(String);

impl Genotype {
    /// Parse a genotype string such as `"AG"`, `"t"` or `"--"`
    pub fn parse(s: &str) -> Result<Self, VariantError> {
        let upper = s.trim().to_ascii_uppercase();
        if GENOTYPE_PATTERN.is_match(&upper) {
            Ok(Genotype(upper))
        } else {
            Err(VariantError::InvalidGenotype(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated SNP record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// dbSNP identifier, e.g. `rs429358`
    pub rs_id: String,
    pub chromosome: Chromosome,
    /// Genomic position (non-negative)
    pub position: u64,
    pub genotype: Genotype,
}

/// Annotation produced for one variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Heuristic pathogenicity score in [0.1, 0.95], rounded to 3 decimals
    pub pathogenicity: f64,
    /// Impact label, e.g. "Moderate impact"
    pub effect: String,
    /// Confidence in [0, 1]
    pub confidence: f64,
    /// Descriptive consequence text
    pub consequence: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chromosome_from_str_autosomes() {
        assert_eq!("1".parse::<Chromosome>().unwrap(), Chromosome::Autosome(1));
        assert_eq!("22".parse::<Chromosome>().unwrap(), Chromosome::Autosome(22));
        assert_eq!(
            "chr17".parse::<Chromosome>().unwrap(),
            Chromosome::Autosome(17)
        );
        assert_eq!(
            " CHR7 ".parse::<Chromosome>().unwrap(),
            Chromosome::Autosome(7)
        );
    }

    #[test]
    fn test_chromosome_from_str_sex_and_mito() {
        assert_eq!("X".parse::<Chromosome>().unwrap(), Chromosome::X);
        assert_eq!("chrY".parse::<Chromosome>().unwrap(), Chromosome::Y);
        assert_eq!("MT".parse::<Chromosome>().unwrap(), Chromosome::Mito);
        assert_eq!("chrM".parse::<Chromosome>().unwrap(), Chromosome::Mito);
        assert_eq!("x".parse::<Chromosome>().unwrap(), Chromosome::X);
    }

    #[test]
    fn test_chromosome_from_str_rejects_invalid() {
        for input in ["", "0", "26", "chr", "chrZ", "1a", "-1", "1.5"] {
            assert!(
                matches!(
                    input.parse::<Chromosome>(),
                    Err(VariantError::InvalidChromosome(_))
                ),
                "expected {:?} to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_chromosome_numbers() {
        assert_eq!(Chromosome::Autosome(5).number(), 5);
        assert_eq!(Chromosome::X.number(), 23);
        assert_eq!(Chromosome::Y.number(), 24);
        assert_eq!(Chromosome::Mito.number(), 25);
        assert_eq!(Chromosome::from_number(23), Some(Chromosome::X));
        assert_eq!(Chromosome::from_number(0), None);
        assert_eq!(Chromosome::from_number(26), None);
    }

    #[test]
    fn test_chromosome_display() {
        assert_eq!(Chromosome::Autosome(9).to_string(), "9");
        assert_eq!(Chromosome::Mito.to_string(), "MT");
    }

    #[test]
    fn test_genotype_parse() {
        assert_eq!(Genotype::parse("AG").unwrap().as_str(), "AG");
        assert_eq!(Genotype::parse("t").unwrap().as_str(), "T");
        assert_eq!(Genotype::parse("--").unwrap().as_str(), "--");
        assert_eq!(Genotype::parse("DI").unwrap().as_str(), "DI");
    }

    #[test]
    fn test_genotype_parse_rejects_invalid() {
        assert!(Genotype::parse("").is_err());
        assert!(Genotype::parse("AGT").is_err());
        assert!(Genotype::parse("A/G").is_err());
        assert!(Genotype::parse("NN").is_err());
    }
}
