//! MESSAGE combinator - custom failure messages

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::foundation::{AssertionFailed, Validate, ValidationError};
use crate::messages::format_template;

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the failure message of a validator.
///
/// The replacement is either a literal template or a resource key rendered
/// through the override registry. Both may be changed with the setters at
/// any point before the validator is handed to a chain; when both are set,
/// the literal text wins.
///
/// Templates see the same positional arguments as the inner validator's own
/// message: `{0}` is the field name, `{1}`.. the inner failure's parameters.
///
/// Only regular failures are rewritten. When the inner validator's
/// [`check`](Validate::check) returns an [`AssertionFailed`], that message is
/// reported verbatim with the assertion's code.
///
/// The wrapped validator counts as a single leaf: it reports at most one
/// failure, and a nested condition set behind it runs untagged rules only.
///
/// # Examples
///
/// ```
/// use verdict_validator::prelude::*;
///
/// let validator = min_length(8).with_message("{0} needs {1}+ characters");
/// let error = validator.validate("short", "Password").unwrap_err();
/// assert_eq!(error.message, "Password needs 8+ characters");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Option<Cow<'static, str>>,
    resource: Option<Cow<'static, str>>,
}

impl<V> WithMessage<V> {
    /// Wraps `inner` without any override yet.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            message: None,
            resource: None,
        }
    }

    /// Sets the literal template.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.set_message(text);
        self
    }

    /// Sets the resource key.
    #[must_use = "builder methods must be chained or built"]
    pub fn resource(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.set_resource(key);
        self
    }

    /// Replaces the literal template in place.
    pub fn set_message(&mut self, text: impl Into<Cow<'static, str>>) {
        self.message = Some(text.into());
    }

    /// Replaces the resource key in place.
    pub fn set_resource(&mut self, key: impl Into<Cow<'static, str>>) {
        self.resource = Some(key.into());
    }

    /// Drops both overrides, restoring the inner message.
    pub fn reset(&mut self) {
        self.message = None;
        self.resource = None;
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }

    fn rewrite(&self, original: ValidationError, field_name: &str) -> ValidationError {
        if self.message.is_none() && self.resource.is_none() {
            return original;
        }

        // `args` borrows the params, so it must be gone before they move.
        let (code, message) = {
            let mut args: SmallVec<[&str; 4]> = SmallVec::new();
            args.push(field_name);
            args.extend(original.params.iter().map(|(_, v)| v.as_ref()));

            match (&self.message, &self.resource) {
                (Some(text), _) => (original.code.clone(), format_template(text, &args)),
                (None, Some(key)) => (key.clone(), crate::messages::render(key, &args)),
                (None, None) => (original.code.clone(), original.message.to_string()),
            }
        };

        ValidationError {
            code,
            message: Cow::Owned(message),
            field: original.field,
            params: original.params,
        }
    }
}

impl<V: Validate> Validate for WithMessage<V> {
    type Input = V::Input;

    fn check(&self, input: &Self::Input) -> Result<bool, AssertionFailed> {
        self.inner.check(input)
    }

    fn describe_failure(&self, input: &Self::Input, field_name: &str) -> Option<ValidationError> {
        let original = self
            .inner
            .describe_failure(input, field_name)
            .unwrap_or_else(|| ValidationError::invalid(field_name));
        Some(self.rewrite(original, field_name))
    }

    fn as_priority(&self) -> Option<i32> {
        self.inner.as_priority()
    }
}

/// Creates a WithMessage combinator with a literal template.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator).message(message)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;

    struct MinLength {
        min: usize,
    }

    impl Validate for MinLength {
        type Input = str;

        fn check(&self, input: &str) -> Result<bool, AssertionFailed> {
            Ok(input.len() >= self.min)
        }

        fn describe_failure(&self, _input: &str, field: &str) -> Option<ValidationError> {
            Some(
                ValidationError::new("min_length", format!("{field} too short"))
                    .with_field(field.to_owned())
                    .with_param("min", self.min.to_string()),
            )
        }
    }

    #[test]
    fn test_with_message_success() {
        let validator = with_message(MinLength { min: 3 }, "Custom message");
        assert!(validator.is_valid("hello"));
    }

    #[test]
    fn test_with_message_replaces_message_keeps_code() {
        let validator = with_message(MinLength { min: 10 }, "{0} needs {1} characters");
        let error = validator.validate("short", "Password").unwrap_err();

        assert_eq!(error.message, "Password needs 10 characters");
        assert_eq!(error.code, "min_length");
        assert_eq!(error.param("min"), Some("10"));
    }

    #[test]
    fn test_resource_replaces_code() {
        let validator = WithMessage::new(MinLength { min: 10 }).resource("no_such_resource_key");
        let error = validator.validate("short", "Name").unwrap_err();

        assert_eq!(error.code, "no_such_resource_key");
        assert_eq!(error.message, "Name is invalid.");
    }

    #[test]
    fn test_setters_mutate_before_use() {
        let mut validator = WithMessage::new(MinLength { min: 10 });
        let untouched = validator.validate("short", "Name").unwrap_err();
        assert_eq!(untouched.message, "Name too short");

        validator.set_message("first");
        validator.set_message("second");
        assert_eq!(validator.validate("short", "Name").unwrap_err().message, "second");

        validator.reset();
        assert_eq!(validator.validate("short", "Name").unwrap_err().message, "Name too short");
    }

    struct Unique;

    impl Validate for Unique {
        type Input = str;

        fn check(&self, input: &str) -> Result<bool, AssertionFailed> {
            if input == "taken" {
                return Err(AssertionFailed::new("raw"));
            }
            Ok(!input.is_empty())
        }

        fn describe_failure(&self, _input: &str, _field: &str) -> Option<ValidationError> {
            None
        }
    }

    #[test]
    fn test_renders_every_param_position() {
        let validator = with_message(MinLength { min: 4 }, "{1}: {0} {1}");
        let error = validator.validate("ab", "Pin").unwrap_err();

        assert_eq!(error.message, "4: Pin 4");
        assert_eq!(error.field.as_deref(), Some("Pin"));
        assert_eq!(error.param("min"), Some("4"));
    }

    #[test]
    fn test_assertion_message_is_kept_verbatim() {
        let validator = Unique.with_message("custom {0}");

        let error = validator.validate("taken", "Login").unwrap_err();
        assert_eq!(error.message, "raw");
        assert_eq!(error.code, "assertion");

        let error = validator.validate("", "Login").unwrap_err();
        assert_eq!(error.message, "custom Login");
    }

    #[test]
    fn test_text_wins_over_resource() {
        let validator = WithMessage::new(MinLength { min: 10 })
            .resource("some_key")
            .message("text");
        assert_eq!(validator.validate("x", "N").unwrap_err().message, "text");
    }
}
