//! Error taxonomy for TrialDeck.

use crate::enums::EntityType;
use thiserror::Error;

/// Store layer errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: EntityType, id: String },
}

/// Validation errors raised by create/update requests.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("At least one field must be provided for update")]
    EmptyUpdate,
}

impl ValidationError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        ValidationError::RequiredFieldMissing {
            field: field.into(),
        }
    }

    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Master error type for all TrialDeck errors.
#[derive(Debug, Clone, Error)]
pub enum TrialDeckError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type alias for TrialDeck operations.
pub type TrialDeckResult<T> = Result<T, TrialDeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity_and_id() {
        let err = StoreError::NotFound {
            entity_type: EntityType::Agent,
            id: "agent-999".to_string(),
        };
        assert_eq!(err.to_string(), "Agent not found: agent-999");
    }

    #[test]
    fn test_validation_error_constructors() {
        assert_eq!(
            ValidationError::missing_field("name"),
            ValidationError::RequiredFieldMissing {
                field: "name".to_string()
            }
        );
        assert!(matches!(
            ValidationError::invalid_value("progress", "must be <= 100"),
            ValidationError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_master_error_wraps_subsystems() {
        let err: TrialDeckError = ValidationError::missing_field("sponsor").into();
        assert!(matches!(err, TrialDeckError::Validation(_)));
    }
}
