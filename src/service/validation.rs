//! Input validation for analyze requests

use serde::{Deserialize, Serialize};

/// Validation errors for user input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// Batch size exceeds maximum allowed
    BatchTooLarge { max: usize, actual: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::BatchTooLarge { max, actual } => {
                write!(f, "Batch size {} exceeds maximum allowed ({})", actual, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for super::types::ServiceError {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::BatchTooLarge { max, actual } => {
                super::types::ServiceError::BatchTooLarge { max, actual }
            }
        }
    }
}

/// Validate the number of SNP records in a batch
pub fn validate_batch_size(actual: usize, max: usize) -> Result<(), ValidationError> {
    if actual > max {
        return Err(ValidationError::BatchTooLarge { max, actual });
    }
    Ok(())
}
