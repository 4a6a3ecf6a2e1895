//! The condition engine.
//!
//! A [`ConditionBuilder`] collects predicate-gated rule chains plus one
//! optional default chain. [`ConditionBuilder::build`] snapshots them into an
//! immutable [`ConditionSet`], which evaluates a subject by running exactly
//! one chain: the chain of the first predicate that holds, or the default
//! chain when none does.
//!
//! # Examples
//!
//! ```
//! use verdict_validator::prelude::*;
//!
//! let set = ConditionBuilder::<i64>::new()
//!     .when(|v| *v > 10)
//!     .then(|chain| chain.push(min(10)))
//!     .otherwise(|chain| chain.push(min(50)))
//!     .build();
//!
//! assert!(set.is_valid(&15, &EvaluationContext::new()));
//! assert!(!set.is_valid(&5, &EvaluationContext::new()));
//! ```
//!
//! # Builder states
//!
//! Opening a branch with [`when`](ConditionBuilder::when) yields a
//! [`ThenBuilder`], the only type that can close it. A branch can therefore
//! not be closed twice, and the builder cannot be used while a branch is
//! open:
//!
//! ```compile_fail
//! use verdict_validator::prelude::*;
//!
//! // `then` needs an open branch.
//! let _ = ConditionBuilder::<i64>::new().then(|chain| chain.push(min(1)));
//! ```
//!
//! ```compile_fail
//! use verdict_validator::prelude::*;
//!
//! // A second `when` before the first branch is closed.
//! let _ = ConditionBuilder::<i64>::new().when(|v| *v > 0).when(|v| *v > 1);
//! ```
//!
//! ```compile_fail
//! use verdict_validator::prelude::*;
//!
//! // `build` while a branch is still open.
//! let _ = ConditionBuilder::<i64>::new().when(|v| *v > 0).build();
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::engine::RuleSetFilter;
use crate::engine::chain::RuleChain;
use crate::foundation::{
    ArgumentError, AssertionFailed, EvaluationContext, Validate, ValidationError,
    ValidationErrors, ValidatorResult,
};
use crate::messages::MessageSource;
use crate::validators::AlwaysFail;

/// A side-effect-free test on the subject.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A predicate paired with the chain it guards.
pub struct Condition<T: ?Sized> {
    predicate: Predicate<T>,
    chain: Arc<RuleChain<T>>,
}

impl<T: ?Sized> Condition<T> {
    /// Whether the predicate holds for `subject`.
    pub fn applies_to(&self, subject: &T) -> bool {
        (self.predicate)(subject)
    }

    /// The guarded chain.
    pub fn chain(&self) -> &RuleChain<T> {
        &self.chain
    }
}

impl<T: ?Sized> Clone for Condition<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            chain: Arc::clone(&self.chain),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Condition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Fluent builder for a [`ConditionSet`].
pub struct ConditionBuilder<T: ?Sized> {
    conditions: Vec<Condition<T>>,
    default_chain: Option<Arc<RuleChain<T>>>,
}

impl<T: ?Sized> Default for ConditionBuilder<T> {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
            default_chain: None,
        }
    }
}

impl<T: ?Sized> fmt::Debug for ConditionBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionBuilder")
            .field("conditions", &self.conditions)
            .field("default_chain", &self.default_chain)
            .finish()
    }
}

impl<T: ?Sized + 'static> ConditionBuilder<T> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a branch guarded by `predicate`.
    pub fn when<P>(self, predicate: P) -> ThenBuilder<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        ThenBuilder {
            builder: self,
            predicate: Arc::new(predicate),
        }
    }

    /// Opens a branch guarded by the negation of `predicate`.
    pub fn unless<P>(self, predicate: P) -> ThenBuilder<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.when(move |value: &T| !predicate(value))
    }

    /// Sets the chain used when no branch matches.
    ///
    /// Calling this again replaces the previous default chain.
    pub fn otherwise<F>(mut self, chain: F) -> Self
    where
        F: FnOnce(RuleChain<T>) -> RuleChain<T>,
    {
        self.default_chain = Some(Arc::new(chain(RuleChain::new())));
        self
    }

    /// Sets a default chain that always fails with `text`.
    ///
    /// Replaces any previous default chain.
    pub fn otherwise_message(self, text: impl Into<Cow<'static, str>>) -> Result<Self, ArgumentError> {
        let chain = always_fail_chain(MessageSource::text(text)?);
        Ok(self.otherwise(|_| chain))
    }

    /// Sets a default chain that always fails with the template stored
    /// under resource `key`.
    ///
    /// Replaces any previous default chain.
    pub fn otherwise_resource(self, key: impl Into<Cow<'static, str>>) -> Result<Self, ArgumentError> {
        let chain = always_fail_chain(MessageSource::resource(key)?);
        Ok(self.otherwise(|_| chain))
    }

    /// Number of closed branches.
    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }

    /// Snapshots the current branches and default chain.
    ///
    /// The builder is left untouched; later additions do not show up in
    /// sets built earlier.
    pub fn build(&self) -> ConditionSet<T> {
        ConditionSet {
            conditions: self.conditions.clone().into(),
            default_chain: self.default_chain.clone(),
        }
    }
}

/// A builder with one branch open, waiting for its chain.
#[must_use = "an open branch must be closed with `then` or `then_error_message`"]
pub struct ThenBuilder<T: ?Sized> {
    builder: ConditionBuilder<T>,
    predicate: Predicate<T>,
}

impl<T: ?Sized + 'static> ThenBuilder<T> {
    /// Closes the branch with the chain built by `chain`.
    pub fn then<F>(self, chain: F) -> ConditionBuilder<T>
    where
        F: FnOnce(RuleChain<T>) -> RuleChain<T>,
    {
        self.close(chain(RuleChain::new()))
    }

    /// Closes the branch with a chain that always fails with `text`.
    pub fn then_error_message(
        self,
        text: impl Into<Cow<'static, str>>,
    ) -> Result<ConditionBuilder<T>, ArgumentError> {
        let chain = always_fail_chain(MessageSource::text(text)?);
        Ok(self.close(chain))
    }

    /// Closes the branch with a chain that always fails with the template
    /// stored under resource `key`.
    pub fn then_error_resource(
        self,
        key: impl Into<Cow<'static, str>>,
    ) -> Result<ConditionBuilder<T>, ArgumentError> {
        let chain = always_fail_chain(MessageSource::resource(key)?);
        Ok(self.close(chain))
    }

    fn close(self, chain: RuleChain<T>) -> ConditionBuilder<T> {
        let Self {
            mut builder,
            predicate,
        } = self;
        builder.conditions.push(Condition {
            predicate,
            chain: Arc::new(chain),
        });
        builder
    }
}

fn always_fail_chain<T: ?Sized + 'static>(source: MessageSource) -> RuleChain<T> {
    RuleChain::new().push(AlwaysFail::new(source))
}

// ============================================================================
// CONDITION SET
// ============================================================================

/// Which chain a [`ConditionSet`] picked for a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// The branch registered at this index.
    Condition(usize),
    /// The default chain.
    Default,
    /// Nothing matched and there is no default chain.
    None,
}

/// An immutable, shareable snapshot of a [`ConditionBuilder`].
pub struct ConditionSet<T: ?Sized> {
    conditions: Arc<[Condition<T>]>,
    default_chain: Option<Arc<RuleChain<T>>>,
}

impl<T: ?Sized> Clone for ConditionSet<T> {
    fn clone(&self) -> Self {
        Self {
            conditions: Arc::clone(&self.conditions),
            default_chain: self.default_chain.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for ConditionSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionSet")
            .field("conditions", &self.conditions)
            .field("default_chain", &self.default_chain)
            .finish()
    }
}

impl<T: ?Sized> ConditionSet<T> {
    /// The registered branches, in registration order.
    pub fn conditions(&self) -> &[Condition<T>] {
        &self.conditions
    }

    /// The default chain, if one was set.
    pub fn default_chain(&self) -> Option<&RuleChain<T>> {
        self.default_chain.as_deref()
    }

    /// Picks the chain for `subject`: first matching branch wins.
    pub fn select(&self, subject: &T) -> (Branch, Option<&RuleChain<T>>) {
        if let Some((index, condition)) = self
            .conditions
            .iter()
            .enumerate()
            .find(|(_, condition)| condition.applies_to(subject))
        {
            return (Branch::Condition(index), Some(condition.chain()));
        }
        match self.default_chain.as_deref() {
            Some(chain) => (Branch::Default, Some(chain)),
            None => (Branch::None, None),
        }
    }

    /// Evaluates `subject` and returns the full result.
    pub fn evaluate<'a>(&self, subject: &'a T, ctx: &EvaluationContext) -> ValidatorResult<'a, T> {
        match self.run(subject, &ctx.field_name, &ctx.rule_sets) {
            Some(failures) => ValidatorResult::new(Some(subject), failures),
            None => ValidatorResult::valid(Some(subject)),
        }
    }

    /// Runs the selected chain; `None` when no chain applies.
    fn run(&self, subject: &T, field_name: &str, filter: &RuleSetFilter) -> Option<ValidationErrors> {
        let (branch, chain) = self.select(subject);
        debug!(?branch, field = %field_name, "condition branch selected");
        chain.map(|chain| chain.run(subject, field_name, filter))
    }

    /// Whether `subject` passes.
    pub fn is_valid(&self, subject: &T, ctx: &EvaluationContext) -> bool {
        self.evaluate(subject, ctx).is_valid()
    }

    /// Fail-fast entry point: the first failure becomes the `Err`.
    pub fn validate(&self, subject: &T, ctx: &EvaluationContext) -> Result<(), ValidationError> {
        match self.evaluate(subject, ctx).into_result() {
            Ok(()) => Ok(()),
            Err(failures) => Err(failures
                .into_iter()
                .next()
                .unwrap_or_else(|| ValidationError::invalid(&ctx.field_name))),
        }
    }

    /// Wraps the set as a single validator, so it can sit inside another
    /// chain (typically behind a [`Proxy`](crate::combinators::Proxy) that
    /// projects a nested field).
    ///
    /// Inside a chain the nested set runs with the outer field name and the
    /// outer rule set filter, and every nested failure is reported. Used on
    /// its own (`is_valid`, `validate`) it runs untagged rules only.
    pub fn into_rule(self) -> Conditional<T> {
        Conditional { set: self }
    }
}

/// A [`ConditionSet`] used as a leaf validator. See
/// [`ConditionSet::into_rule`].
pub struct Conditional<T: ?Sized> {
    set: ConditionSet<T>,
}

impl<T: ?Sized> Clone for Conditional<T> {
    fn clone(&self) -> Self {
        Self {
            set: self.set.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Conditional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Conditional").field(&self.set).finish()
    }
}

impl<T: ?Sized> Validate for Conditional<T> {
    type Input = T;

    fn check(&self, input: &T) -> Result<bool, AssertionFailed> {
        Ok(self.set.is_valid(input, &EvaluationContext::new()))
    }

    fn describe_failure(&self, input: &T, field_name: &str) -> Option<ValidationError> {
        self.collect_failures(input, field_name, &RuleSetFilter::none())
            .into_iter()
            .next()
    }

    fn collect_failures(
        &self,
        input: &T,
        field_name: &str,
        filter: &RuleSetFilter,
    ) -> ValidationErrors {
        self.set
            .run(input, field_name, filter)
            .unwrap_or_default()
    }
}
