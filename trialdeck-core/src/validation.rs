//! Validation Traits
//!
//! Common validation patterns shared by the create/update request types.

use crate::error::ValidationError;

/// Trait for validating non-empty strings.
///
/// Whitespace-only values count as empty: a name of `"   "` is still a
/// missing name.
pub trait ValidateNonEmpty {
    /// Validate that the value is non-empty.
    ///
    /// # Errors
    /// Returns `ValidationError::RequiredFieldMissing` if the value is empty
    /// or whitespace-only.
    fn validate_non_empty(&self, field_name: &str) -> Result<(), ValidationError>;
}

impl ValidateNonEmpty for str {
    fn validate_non_empty(&self, field_name: &str) -> Result<(), ValidationError> {
        if self.trim().is_empty() {
            return Err(ValidationError::missing_field(field_name));
        }
        Ok(())
    }
}

impl ValidateNonEmpty for String {
    fn validate_non_empty(&self, field_name: &str) -> Result<(), ValidationError> {
        self.as_str().validate_non_empty(field_name)
    }
}

impl<T: ValidateNonEmpty> ValidateNonEmpty for Option<T> {
    fn validate_non_empty(&self, field_name: &str) -> Result<(), ValidationError> {
        match self {
            Some(value) => value.validate_non_empty(field_name),
            None => Err(ValidationError::missing_field(field_name)),
        }
    }
}

/// Trait for checking if an update request has any fields set.
pub trait HasUpdates {
    /// Check if any update fields are set.
    fn has_any_updates(&self) -> bool;

    /// Validate that at least one update field is set.
    fn validate_has_updates(&self) -> Result<(), ValidationError> {
        if !self.has_any_updates() {
            return Err(ValidationError::EmptyUpdate);
        }
        Ok(())
    }
}
