//! Closure-backed validators
//!
//! - [`Predicate`] - any `Fn(&T) -> bool` with a message
//! - [`AlwaysFail`] - fails every input; backs the builder's
//!   `then_error_message` / `otherwise_message` shortcuts

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{AssertionFailed, Validate, ValidationError};
use crate::messages::MessageSource;

fn failure_from(source: &MessageSource, field_name: &str) -> ValidationError {
    ValidationError::new(source.code(), source.render(&[field_name])).with_field(field_name.to_owned())
}

// ============================================================================
// PREDICATE
// ============================================================================

/// Validates with an arbitrary function.
///
/// The message template sees the field name as `{0}`.
///
/// # Examples
///
/// ```
/// use verdict_validator::messages::MessageSource;
/// use verdict_validator::prelude::*;
///
/// let even = predicate(|n: &i32| n % 2 == 0, MessageSource::text("{0} must be even").unwrap());
/// assert!(even.is_valid(&4));
/// assert_eq!(even.validate(&3, "Count").unwrap_err().message, "Count must be even");
/// ```
pub struct Predicate<T: ?Sized, F> {
    test: F,
    message: MessageSource,
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> Predicate<T, F>
where
    F: Fn(&T) -> bool,
{
    /// Creates the validator.
    pub fn new(test: F, message: MessageSource) -> Self {
        Self {
            test,
            message,
            _input: PhantomData,
        }
    }

    /// The message reported on failure.
    pub fn message(&self) -> &MessageSource {
        &self.message
    }
}

impl<T: ?Sized, F: Clone> Clone for Predicate<T, F> {
    fn clone(&self) -> Self {
        Self {
            test: self.test.clone(),
            message: self.message.clone(),
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for Predicate<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("test", &"<function>")
            .field("message", &self.message)
            .finish()
    }
}

impl<T: ?Sized, F> Validate for Predicate<T, F>
where
    F: Fn(&T) -> bool,
{
    type Input = T;

    fn check(&self, input: &T) -> Result<bool, AssertionFailed> {
        Ok((self.test)(input))
    }

    fn describe_failure(&self, _input: &T, field_name: &str) -> Option<ValidationError> {
        Some(failure_from(&self.message, field_name))
    }
}

/// Creates a [`Predicate`] validator.
pub fn predicate<T: ?Sized, F>(test: F, message: MessageSource) -> Predicate<T, F>
where
    F: Fn(&T) -> bool,
{
    Predicate::new(test, message)
}

// ============================================================================
// ALWAYS FAIL
// ============================================================================

/// Fails every input with a fixed message.
pub struct AlwaysFail<T: ?Sized> {
    message: MessageSource,
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized> AlwaysFail<T> {
    /// Creates the validator.
    pub fn new(message: MessageSource) -> Self {
        Self {
            message,
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized> Clone for AlwaysFail<T> {
    fn clone(&self) -> Self {
        Self::new(self.message.clone())
    }
}

impl<T: ?Sized> fmt::Debug for AlwaysFail<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AlwaysFail").field(&self.message).finish()
    }
}

impl<T: ?Sized> Validate for AlwaysFail<T> {
    type Input = T;

    fn check(&self, _input: &T) -> Result<bool, AssertionFailed> {
        Ok(false)
    }

    fn describe_failure(&self, _input: &T, field_name: &str) -> Option<ValidationError> {
        Some(failure_from(&self.message, field_name))
    }
}
