//! Rule chains: the ordered validators attached to one branch.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::engine::composite::{self, CompositeMode};
use crate::engine::priority::order_by_priority;
use crate::engine::rule_set::RuleSetFilter;
use crate::foundation::{Validate, ValidationErrors};

/// A shareable, type-erased validator over `T`.
pub type DynValidator<T> = Arc<dyn Validate<Input = T> + Send + Sync>;

/// One entry of a [`RuleChain`]: a validator plus its rule set tags.
pub struct Rule<T: ?Sized> {
    validator: DynValidator<T>,
    rule_sets: Option<Vec<String>>,
}

impl<T: ?Sized> Rule<T> {
    /// The wrapped validator.
    pub fn validator(&self) -> &(dyn Validate<Input = T> + Send + Sync) {
        self.validator.as_ref()
    }

    /// The rule set tags, `None` for an untagged rule.
    pub fn rule_sets(&self) -> Option<&[String]> {
        self.rule_sets.as_deref()
    }
}

impl<T: ?Sized> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
            rule_sets: self.rule_sets.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("priority", &self.validator.as_priority())
            .field("rule_sets", &self.rule_sets)
            .finish_non_exhaustive()
    }
}

/// An ordered list of validators evaluated under one [`CompositeMode`].
///
/// Built fluently inside the callbacks passed to
/// [`ConditionBuilder`](crate::engine::ConditionBuilder):
///
/// ```rust,ignore
/// .then(|chain| chain
///     .push(not_null())
///     .push_in(["login"], proxy(min_length(8), |v: &Option<String>| v.as_deref()))
///     .mode(CompositeMode::All))
/// ```
pub struct RuleChain<T: ?Sized> {
    rules: Vec<Rule<T>>,
    mode: CompositeMode,
}

impl<T: ?Sized> Default for RuleChain<T> {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            mode: CompositeMode::default(),
        }
    }
}

impl<T: ?Sized> Clone for RuleChain<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            mode: self.mode,
        }
    }
}

impl<T: ?Sized> fmt::Debug for RuleChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleChain")
            .field("mode", &self.mode)
            .field("rules", &self.rules)
            .finish()
    }
}

impl<T: ?Sized + 'static> RuleChain<T> {
    /// Creates an empty fail-fast chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an untagged validator.
    pub fn push<V>(self, validator: V) -> Self
    where
        V: Validate<Input = T> + Send + Sync + 'static,
    {
        self.push_shared(Arc::new(validator), None)
    }

    /// Appends a validator that only runs for the given rule sets.
    pub fn push_in<I, S, V>(self, rule_sets: I, validator: V) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        V: Validate<Input = T> + Send + Sync + 'static,
    {
        let tags = rule_sets.into_iter().map(Into::into).collect();
        self.push_shared(Arc::new(validator), Some(tags))
    }

    /// Appends an already shared validator.
    pub fn push_shared(mut self, validator: DynValidator<T>, rule_sets: Option<Vec<String>>) -> Self {
        self.rules.push(Rule {
            validator,
            rule_sets,
        });
        self
    }

    /// Sets the composite mode.
    pub fn mode(mut self, mode: CompositeMode) -> Self {
        self.mode = mode;
        self
    }
}

impl<T: ?Sized> RuleChain<T> {
    /// The composite mode.
    pub fn composite_mode(&self) -> CompositeMode {
        self.mode
    }

    /// The rules in registration order.
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the chain has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rules that take part under `filter`, in execution order.
    pub fn plan(&self, filter: &RuleSetFilter) -> Vec<&Rule<T>> {
        let mut selected: Vec<&Rule<T>> = self
            .rules
            .iter()
            .filter(|rule| {
                let included = filter.matches(rule.rule_sets());
                if !included {
                    trace!(rule_sets = ?rule.rule_sets, "rule skipped by rule set filter");
                }
                included
            })
            .collect();
        order_by_priority(&mut selected, |rule| rule.validator());
        selected
    }

    /// Filters, orders and runs the chain against `input`.
    pub fn run(&self, input: &T, field_name: &str, filter: &RuleSetFilter) -> ValidationErrors {
        let plan = self.plan(filter);
        composite::evaluate(
            plan.into_iter().map(Rule::validator),
            input,
            field_name,
            filter,
            self.mode,
        )
    }
}
