//! PROXY combinator - reuse a validator on another input type
//!
//! A [`Proxy`] owns a concrete validator and a projection from the outer
//! subject onto the inner validator's input. It is how a `str` validator
//! checks an `Option<String>`, or how a nested field of a struct gets its
//! own rules.
//!
//! Configuration changes go through [`Proxy::configure`], which mutates the
//! owned validator and then notifies the optional `on_change` callback.

use std::fmt;
use std::marker::PhantomData;

use crate::engine::RuleSetFilter;
use crate::foundation::{AssertionFailed, Validate, ValidationError, ValidationErrors};

// ============================================================================
// PROXY COMBINATOR
// ============================================================================

/// Callback notified after the inner validator was reconfigured.
pub type ChangeCallback<V> = Box<dyn Fn(&V) + Send + Sync>;

/// Runs an inner validator on a projection of the subject.
///
/// When the projection yields `None` (an absent optional value) the inner
/// validator does not run and the proxy passes; pair it with
/// [`not_null`](crate::validators::not_null) to require presence.
///
/// # Type Parameters
///
/// * `T` - The outer subject type
/// * `V` - The inner validator
/// * `F` - The projection function
pub struct Proxy<T: ?Sized, V, F> {
    inner: V,
    project: F,
    field_name: Option<String>,
    on_change: Option<ChangeCallback<V>>,
    _input: PhantomData<fn(&T)>,
}

impl<T, V, F> Proxy<T, V, F>
where
    T: ?Sized,
    V: Validate,
    F: for<'a> Fn(&'a T) -> Option<&'a V::Input>,
{
    /// Creates a proxy projecting the subject with `project`.
    pub fn new(inner: V, project: F) -> Self {
        Self {
            inner,
            project,
            field_name: None,
            on_change: None,
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized, V, F> Proxy<T, V, F> {
    /// Uses `name` as display name instead of the caller's.
    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.field_name = Some(name.into());
        self
    }

    /// Registers the callback run after every [`configure`](Self::configure).
    #[must_use = "builder methods must be chained or built"]
    pub fn on_change(mut self, callback: impl Fn(&V) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Mutates the inner validator and forwards the change.
    pub fn configure(&mut self, change: impl FnOnce(&mut V)) {
        change(&mut self.inner);
        if let Some(callback) = &self.on_change {
            callback(&self.inner);
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the display name override, if any.
    pub fn field_name(&self) -> Option<&str> {
        self.field_name.as_deref()
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }

    fn display_name<'n>(&'n self, caller: &'n str) -> &'n str {
        self.field_name.as_deref().unwrap_or(caller)
    }
}

impl<T, V, F> Validate for Proxy<T, V, F>
where
    T: ?Sized,
    V: Validate,
    F: for<'a> Fn(&'a T) -> Option<&'a V::Input>,
{
    type Input = T;

    fn check(&self, input: &T) -> Result<bool, AssertionFailed> {
        match (self.project)(input) {
            Some(projected) => self.inner.check(projected),
            None => Ok(true),
        }
    }

    fn describe_failure(&self, input: &T, field_name: &str) -> Option<ValidationError> {
        let projected = (self.project)(input)?;
        let name = self.display_name(field_name);
        Some(
            self.inner
                .describe_failure(projected, name)
                .unwrap_or_else(|| ValidationError::invalid(name)),
        )
    }

    fn as_priority(&self) -> Option<i32> {
        self.inner.as_priority()
    }

    fn collect_failures(
        &self,
        input: &T,
        field_name: &str,
        filter: &RuleSetFilter,
    ) -> ValidationErrors {
        match (self.project)(input) {
            Some(projected) => {
                self.inner
                    .collect_failures(projected, self.display_name(field_name), filter)
            }
            None => ValidationErrors::new(),
        }
    }
}

impl<T: ?Sized, V: fmt::Debug, F> fmt::Debug for Proxy<T, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proxy")
            .field("inner", &self.inner)
            .field("field_name", &self.field_name)
            .field("project", &"<function>")
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Creates a [`Proxy`].
///
/// ```
/// use verdict_validator::prelude::*;
///
/// let validator = proxy(min_length(3), |v: &Option<String>| v.as_deref());
/// assert!(validator.is_valid(&Some("abcd".to_owned())));
/// assert!(!validator.is_valid(&Some("ab".to_owned())));
/// assert!(validator.is_valid(&None));
/// ```
pub fn proxy<T, V, F>(inner: V, project: F) -> Proxy<T, V, F>
where
    T: ?Sized,
    V: Validate,
    F: for<'a> Fn(&'a T) -> Option<&'a V::Input>,
{
    Proxy::new(inner, project)
}

// ============================================================================
// TESTS
// ============================================================================
