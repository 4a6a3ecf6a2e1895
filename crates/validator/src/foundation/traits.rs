//! Core traits for the validation system
//!
//! [`Validate`] is the leaf contract every rule implements. [`ValidateExt`]
//! is blanket-implemented on top of it and provides the caller-facing
//! `is_valid` / `get_failures` / `validate` trio plus the combinator methods.

use std::borrow::Cow;

use crate::engine::RuleSetFilter;
use crate::foundation::{AssertionFailed, ValidationError, ValidationErrors};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The contract of a leaf validator.
///
/// A validator answers two questions about a value: does it pass
/// ([`check`](Self::check)), and if not, how should the failure read
/// ([`describe_failure`](Self::describe_failure)). Everything else (ordering,
/// aggregation, rule sets, branch selection) belongs to the engine.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::foundation::{AssertionFailed, Validate, ValidationError};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn check(&self, input: &i64) -> Result<bool, AssertionFailed> {
///         Ok(input % 2 == 0)
///     }
///
///     fn describe_failure(&self, _input: &i64, field: &str) -> Option<ValidationError> {
///         Some(ValidationError::new("even", format!("{field} must be even")))
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` inputs such as `str` to validate borrowed data.
    type Input: ?Sized;

    /// Decides whether `input` passes.
    ///
    /// Returning `Err` is a shortcut for "fail with exactly this message"
    /// and is treated by the engine like `Ok(false)` with that message.
    fn check(&self, input: &Self::Input) -> Result<bool, AssertionFailed>;

    /// Describes why `input` failed, using `field_name` as display name.
    ///
    /// `None` makes the engine fall back to the generic "invalid" message.
    fn describe_failure(&self, input: &Self::Input, field_name: &str) -> Option<ValidationError>;

    /// Ordering key used by the priority classifier.
    ///
    /// Validators that return `Some` run before those that return `None`,
    /// ascending by value.
    fn as_priority(&self) -> Option<i32> {
        None
    }

    /// Collects every failure for `input` while the chain runs the rule sets
    /// in `filter`.
    ///
    /// Leaf validators report at most one failure and ignore the filter.
    /// Validators that wrap a whole rule chain (see
    /// [`ConditionSet::into_rule`](crate::engine::ConditionSet::into_rule))
    /// hand the filter down and report each nested failure.
    fn collect_failures(
        &self,
        input: &Self::Input,
        field_name: &str,
        filter: &RuleSetFilter,
    ) -> ValidationErrors {
        let _ = filter;
        run_one(self, input, field_name).into_iter().collect()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn check(&self, input: &Self::Input) -> Result<bool, AssertionFailed> {
        (**self).check(input)
    }

    fn describe_failure(&self, input: &Self::Input, field_name: &str) -> Option<ValidationError> {
        (**self).describe_failure(input, field_name)
    }

    fn as_priority(&self) -> Option<i32> {
        (**self).as_priority()
    }

    fn collect_failures(
        &self,
        input: &Self::Input,
        field_name: &str,
        filter: &RuleSetFilter,
    ) -> ValidationErrors {
        (**self).collect_failures(input, field_name, filter)
    }
}

impl<V: Validate + ?Sized> Validate for std::sync::Arc<V> {
    type Input = V::Input;

    fn check(&self, input: &Self::Input) -> Result<bool, AssertionFailed> {
        (**self).check(input)
    }

    fn describe_failure(&self, input: &Self::Input, field_name: &str) -> Option<ValidationError> {
        (**self).describe_failure(input, field_name)
    }

    fn as_priority(&self) -> Option<i32> {
        (**self).as_priority()
    }

    fn collect_failures(
        &self,
        input: &Self::Input,
        field_name: &str,
        filter: &RuleSetFilter,
    ) -> ValidationErrors {
        (**self).collect_failures(input, field_name, filter)
    }
}

/// Runs one validator and turns its outcome into an optional failure.
///
/// This is the single place where the assertion shortcut is folded into a
/// regular failure.
pub(crate) fn run_one<V>(validator: &V, input: &V::Input, field_name: &str) -> Option<ValidationError>
where
    V: Validate + ?Sized,
{
    match validator.check(input) {
        Ok(true) => None,
        Ok(false) => Some(
            validator
                .describe_failure(input, field_name)
                .unwrap_or_else(|| ValidationError::invalid(field_name)),
        ),
        Err(assertion) => Some(assertion.into_validation_error(field_name)),
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing evaluation shortcuts and combinators.
///
/// Automatically implemented for every [`Validate`] type.
pub trait ValidateExt: Validate {
    /// Returns whether `input` passes. Assertion shortcuts count as failures.
    fn is_valid(&self, input: &Self::Input) -> bool {
        matches!(self.check(input), Ok(true))
    }

    /// Returns the failures for `input` (empty when valid).
    fn get_failures(&self, input: &Self::Input, field_name: &str) -> ValidationErrors {
        self.collect_failures(input, field_name, &RuleSetFilter::none())
    }

    /// Fail-fast entry point: converts the first failure into an `Err`.
    fn validate(&self, input: &Self::Input, field_name: &str) -> Result<(), ValidationError> {
        match self.get_failures(input, field_name).into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Replaces the failure message with `text` (a template: `{0}` is the
    /// field name, `{1}`.. are the inner failure's parameters).
    fn with_message(self, text: impl Into<Cow<'static, str>>) -> WithMessage<Self>
    where
        Self: Sized,
    {
        WithMessage::new(self).message(text)
    }

    /// Renders the failure message from the resource `key` instead.
    fn with_message_resource(self, key: impl Into<Cow<'static, str>>) -> WithMessage<Self>
    where
        Self: Sized,
    {
        WithMessage::new(self).resource(key)
    }

    /// Assigns an explicit priority.
    fn with_priority(self, priority: i32) -> WithPriority<Self>
    where
        Self: Sized,
    {
        WithPriority::new(self, priority)
    }
}

impl<T: Validate + ?Sized> ValidateExt for T {}

pub use crate::combinators::message::WithMessage;
pub use crate::combinators::priority::WithPriority;

// ============================================================================
// TESTS
// ============================================================================
