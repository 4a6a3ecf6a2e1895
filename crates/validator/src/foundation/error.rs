//! Error types for validation failures
//!
//! Three kinds of error flow through the crate:
//!
//! - [`ValidationError`] describes one failed rule. It is *data*: evaluation
//!   collects these into a [`ValidationErrors`] list instead of returning `Err`.
//! - [`AssertionFailed`] is the signal a leaf validator returns from
//!   [`Validate::check`](crate::foundation::Validate::check) when it wants to
//!   fail with an exact message. The composite evaluator folds it into a
//!   regular [`ValidationError`].
//! - [`ArgumentError`] reports a configuration mistake (blank message,
//!   blank resource key) at the call that caused it.
//!
//! String fields use `Cow<'static, str>` so static codes and messages do
//! not allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::messages;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Parameters attached to a failure, in the order they appear in the
/// message template (`{1}`, `{2}`, ...).
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A structured description of one failed rule.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "Name is too short")
///     .with_field("Name")
///     .with_param("min", "5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Error code, doubling as the resource key of the message template.
    ///
    /// Examples: "not_null", "min_length", "assertion"
    pub code: Cow<'static, str>,

    /// Rendered, human-readable message.
    pub message: Cow<'static, str>,

    /// Display name of the validated value, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,

    /// Template parameters, in positional order.
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub params: ErrorParams,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
        }
    }

    /// Sets the field display name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a template parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON value.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================
//
// Each constructor renders its message through the override registry, so an
// applied override for the code replaces the built-in template.

impl ValidationError {
    /// Builds an error whose message is the registry rendering of `code`.
    ///
    /// `{0}` in the template is the field name; `{1}`.. are the values of
    /// `params` in order.
    pub fn from_template(
        code: &'static str,
        field: &str,
        params: &[(&'static str, String)],
    ) -> Self {
        let mut args: SmallVec<[&str; 4]> = SmallVec::new();
        args.push(field);
        args.extend(params.iter().map(|(_, v)| v.as_str()));

        let mut error = Self::new(code, messages::render(code, &args)).with_field(field.to_owned());
        for (k, v) in params {
            error = error.with_param(*k, v.clone());
        }
        error
    }

    /// Creates a "not_null" error.
    pub fn not_null(field: &str) -> Self {
        Self::from_template("not_null", field, &[])
    }

    /// Creates a "not_empty" error.
    pub fn not_empty(field: &str) -> Self {
        Self::from_template("not_empty", field, &[])
    }

    /// Creates a "min_length" error.
    pub fn min_length(field: &str, min: usize, actual: usize) -> Self {
        Self::from_template(
            "min_length",
            field,
            &[("min", min.to_string()), ("actual", actual.to_string())],
        )
    }

    /// Creates a "max_length" error.
    pub fn max_length(field: &str, max: usize, actual: usize) -> Self {
        Self::from_template(
            "max_length",
            field,
            &[("max", max.to_string()), ("actual", actual.to_string())],
        )
    }

    /// Creates a "min" error for ordered values.
    pub fn min_value<T: fmt::Display>(field: &str, min: &T) -> Self {
        Self::from_template("min", field, &[("min", min.to_string())])
    }

    /// Creates a "max" error for ordered values.
    pub fn max_value<T: fmt::Display>(field: &str, max: &T) -> Self {
        Self::from_template("max", field, &[("max", max.to_string())])
    }

    /// Creates the generic "invalid" error.
    pub fn invalid(field: &str) -> Self {
        Self::from_template("invalid", field, &[])
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds multiple errors to the collection.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the first error, if any.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Iterates over the rendered messages in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.message.as_ref())
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// ASSERTION SIGNAL
// ============================================================================

/// A leaf validator's request to fail with an exact message.
///
/// Returned from [`Validate::check`](crate::foundation::Validate::check)
/// instead of `Ok(false)`. Works with `?`, so helper functions inside a
/// validator can bail out early.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AssertionFailed {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl AssertionFailed {
    /// Creates an assertion carrying `message` verbatim.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: Cow::Borrowed("assertion"),
            message: message.into(),
        }
    }

    /// Replaces the default `"assertion"` code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Converts the signal into a failure for `field`.
    pub fn into_validation_error(self, field: &str) -> ValidationError {
        ValidationError::new(self.code, self.message).with_field(field.to_owned())
    }
}

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

/// A builder or registry call received an unusable argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ArgumentError {
    /// A string argument was empty or whitespace only.
    #[error("argument `{argument}` must not be empty or whitespace")]
    Blank {
        /// Name of the offending argument.
        argument: &'static str,
    },

    /// A pattern failed to compile.
    #[error("argument `{argument}` is not a valid pattern: {reason}")]
    InvalidPattern {
        /// Name of the offending argument.
        argument: &'static str,
        /// Compiler diagnostic.
        reason: String,
    },
}

impl ArgumentError {
    /// Fails with [`ArgumentError::Blank`] when `value` is empty or whitespace.
    pub fn ensure_not_blank(argument: &'static str, value: &str) -> Result<(), Self> {
        if value.trim().is_empty() {
            Err(Self::Blank { argument })
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("min", "Too small")
            .with_param("min", "5")
            .with_param("actual", "3");

        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("max"), None);
    }

    #[test]
    fn test_display_with_field() {
        let error = ValidationError::new("required", "Name is required.").with_field("Name");
        assert_eq!(error.to_string(), "[Name] required: Name is required.");
    }

    #[test]
    fn test_min_length_constructor_params() {
        let error = ValidationError::min_length("Name", 5, 3);
        assert_eq!(error.code, "min_length");
        assert_eq!(error.field.as_deref(), Some("Name"));
        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("error1", "First error"));
        errors.add(ValidationError::new("error2", "Second error"));

        assert_eq!(errors.len(), 2);
        assert!(errors.has_errors());
        assert_eq!(
            errors.messages().collect::<Vec<_>>(),
            ["First error", "Second error"]
        );
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result(()).is_ok());
        let errors: ValidationErrors = [ValidationError::new("x", "y")].into_iter().collect();
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn test_assertion_conversion() {
        let error = AssertionFailed::new("exact text")
            .with_code("custom")
            .into_validation_error("Email");
        assert_eq!(error.code, "custom");
        assert_eq!(error.message, "exact text");
        assert_eq!(error.field.as_deref(), Some("Email"));
    }

    #[test]
    fn test_ensure_not_blank() {
        assert!(ArgumentError::ensure_not_blank("key", "k").is_ok());
        assert_eq!(
            ArgumentError::ensure_not_blank("key", "   "),
            Err(ArgumentError::Blank { argument: "key" })
        );
        assert!(ArgumentError::ensure_not_blank("key", "").is_err());
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("required", "This field is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_json_shape() {
        let error = ValidationError::new("min", "Too small").with_field("Age");
        let json = error.to_json_value();
        assert_eq!(json["code"], "min");
        assert_eq!(json["field"], "Age");
        assert!(json.get("params").is_none());
    }
}
