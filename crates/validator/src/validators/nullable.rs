//! Presence validators
//!
//! - [`NotNull`] - an `Option` must be `Some`
//! - [`NotEmpty`] - a string must have at least one character
//!
//! Both report [`PRESENCE_PRIORITY`], so in a chain they run before every
//! validator without an explicit priority and stop a fail-fast chain before
//! the value-shaped checks see a missing value.

use std::fmt;
use std::marker::PhantomData;

use crate::engine::PRESENCE_PRIORITY;
use crate::foundation::{AssertionFailed, Validate, ValidationError};

/// Validates that an `Option` is `Some`.
///
/// # Type Parameters
///
/// * `T` - The inner type of the `Option`
pub struct NotNull<T> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T> NotNull<T> {
    /// Creates the validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for NotNull<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NotNull<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NotNull<T> {}

impl<T> fmt::Debug for NotNull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NotNull")
    }
}

impl<T> Validate for NotNull<T> {
    type Input = Option<T>;

    fn check(&self, input: &Self::Input) -> Result<bool, AssertionFailed> {
        Ok(input.is_some())
    }

    fn describe_failure(&self, _input: &Self::Input, field_name: &str) -> Option<ValidationError> {
        Some(ValidationError::not_null(field_name))
    }

    fn as_priority(&self) -> Option<i32> {
        Some(PRESENCE_PRIORITY)
    }
}

/// Creates a [`NotNull`] validator.
#[must_use]
pub const fn not_null<T>() -> NotNull<T> {
    NotNull::new()
}

crate::validator! {
    /// Validates that a string is not empty.
    pub NotEmpty for str;
    priority(PRESENCE_PRIORITY);
    rule(input) { !input.is_empty() }
    error(input, field) { ValidationError::not_empty(field) }
    fn not_empty();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;

    #[test]
    fn test_not_null() {
        let validator = not_null::<String>();
        assert!(validator.is_valid(&Some("hello".to_owned())));
        assert!(!validator.is_valid(&None));
    }

    #[test]
    fn test_not_null_message() {
        let error = not_null::<i32>().validate(&None, "Email").unwrap_err();
        assert_eq!(error.code, "not_null");
        assert_eq!(error.field.as_deref(), Some("Email"));
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty().is_valid("x"));
        assert!(!not_empty().is_valid(""));
        assert_eq!(not_empty().validate("", "Name").unwrap_err().code, "not_empty");
    }

    #[test]
    fn test_presence_priority() {
        assert_eq!(not_null::<u8>().as_priority(), Some(0));
        assert_eq!(NotEmpty.as_priority(), Some(0));
    }
}
