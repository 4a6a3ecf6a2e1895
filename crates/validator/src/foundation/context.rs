//! Per-invocation evaluation settings.
//!
//! An [`EvaluationContext`] carries what changes between calls against the
//! same built rules: the display name used in messages and the active rule
//! set filter. It deserializes from any serde format, so a host can keep it
//! in its own configuration:
//!
//! ```json
//! { "field_name": "Password", "rule_sets": ["login"] }
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::engine::RuleSetFilter;

/// Display name used when the caller does not provide one.
pub const DEFAULT_FIELD_NAME: &str = "Value";

/// Settings for one evaluation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationContext {
    /// Display name substituted for `{0}` in failure messages.
    pub field_name: Cow<'static, str>,
    /// Which tagged rules take part.
    pub rule_sets: RuleSetFilter,
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self {
            field_name: Cow::Borrowed(DEFAULT_FIELD_NAME),
            rule_sets: RuleSetFilter::none(),
        }
    }
}

impl EvaluationContext {
    /// Default context: display name `"Value"`, no rule set filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a named field, no rule set filter.
    pub fn for_field(field_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field_name: field_name.into(),
            ..Self::default()
        }
    }

    /// Starts a builder.
    pub fn builder() -> EvaluationContextBuilder {
        EvaluationContextBuilder::default()
    }
}

/// Builder for [`EvaluationContext`].
#[derive(Debug, Default)]
pub struct EvaluationContextBuilder {
    context: EvaluationContext,
}

impl EvaluationContextBuilder {
    /// Sets the display name.
    pub fn field_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.context.field_name = name.into();
        self
    }

    /// Sets the rule set filter.
    pub fn rule_sets(mut self, filter: RuleSetFilter) -> Self {
        self.context.rule_sets = filter;
        self
    }

    /// Finishes the context.
    pub fn build(self) -> EvaluationContext {
        self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = EvaluationContext::new();
        assert_eq!(ctx.field_name, "Value");
        assert_eq!(ctx.rule_sets, RuleSetFilter::none());
    }

    #[test]
    fn test_builder() {
        let ctx = EvaluationContext::builder()
            .field_name("Email")
            .rule_sets(RuleSetFilter::of(["login"]))
            .build();
        assert_eq!(ctx.field_name, "Email");
        assert_eq!(ctx.rule_sets, RuleSetFilter::of(["login"]));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let ctx: EvaluationContext = serde_json::from_str(r#"{"rule_sets":["*"]}"#).unwrap();
        assert_eq!(ctx.field_name, "Value");
        assert_eq!(ctx.rule_sets, RuleSetFilter::wildcard());

        let ctx: EvaluationContext = serde_json::from_str("{}").unwrap();
        assert_eq!(ctx, EvaluationContext::default());
    }
}
