//! PRIORITY combinator - explicit execution order

use crate::engine::RuleSetFilter;
use crate::foundation::{AssertionFailed, Validate, ValidationError, ValidationErrors};

/// Gives a validator an explicit priority (lower runs earlier).
///
/// Overrides whatever the inner validator reports, including the built-in
/// priority of presence checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithPriority<V> {
    inner: V,
    priority: i32,
}

impl<V> WithPriority<V> {
    /// Wraps `inner` with `priority`.
    pub fn new(inner: V, priority: i32) -> Self {
        Self { inner, priority }
    }

    /// The assigned priority.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validate> Validate for WithPriority<V> {
    type Input = V::Input;

    fn check(&self, input: &Self::Input) -> Result<bool, AssertionFailed> {
        self.inner.check(input)
    }

    fn describe_failure(&self, input: &Self::Input, field_name: &str) -> Option<ValidationError> {
        self.inner.describe_failure(input, field_name)
    }

    fn as_priority(&self) -> Option<i32> {
        Some(self.priority)
    }

    fn collect_failures(
        &self,
        input: &Self::Input,
        field_name: &str,
        filter: &RuleSetFilter,
    ) -> ValidationErrors {
        self.inner.collect_failures(input, field_name, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{CompositeMode, ConditionBuilder};
    use crate::foundation::ValidateExt;
    use crate::validators::{max, min, not_null};

    #[test]
    fn test_overrides_builtin_priority() {
        let validator = not_null::<i32>();
        assert_eq!(validator.as_priority(), Some(0));
        assert_eq!(validator.with_priority(50).as_priority(), Some(50));
    }

    #[test]
    fn test_forwards_check() {
        let validator = not_null::<i32>().with_priority(1);
        assert!(validator.is_valid(&Some(1)));
        assert!(!validator.is_valid(&None));
    }

    #[test]
    fn test_forwards_nested_failures() {
        let nested = ConditionBuilder::<i64>::new()
            .otherwise(|c| c.mode(CompositeMode::All).push_in(["strict"], min(10)).push(max(5)))
            .build()
            .into_rule()
            .with_priority(3);

        assert_eq!(nested.collect_failures(&7, "N", &RuleSetFilter::none()).len(), 1);
        assert_eq!(nested.collect_failures(&7, "N", &RuleSetFilter::wildcard()).len(), 2);
    }
}
