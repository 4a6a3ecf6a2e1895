//! Rule composition and execution.
//!
//! Evaluation of a [`ConditionSet`] runs in six steps:
//!
//! 1. test branch predicates in registration order,
//! 2. take the chain of the first predicate that holds,
//! 3. else take the default chain, or report valid when there is none,
//! 4. drop rules whose rule set tags do not match the [`RuleSetFilter`],
//! 5. stable-sort the rest by priority,
//! 6. run them under the chain's [`CompositeMode`].

pub mod chain;
pub mod composite;
pub mod condition;
pub mod priority;
pub mod rule_set;

pub use chain::{DynValidator, Rule, RuleChain};
pub use composite::CompositeMode;
pub use condition::{
    Branch, Condition, ConditionBuilder, ConditionSet, Conditional, Predicate, ThenBuilder,
};
pub use priority::{DEFAULT_PRIORITY, PRESENCE_PRIORITY, effective_priority, order_by_priority};
pub use rule_set::{RuleSetFilter, WILDCARD, rule_set_matches};
