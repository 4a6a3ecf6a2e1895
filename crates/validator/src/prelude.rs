//! Prelude module for convenient imports.
//!
//! Provides a single `use verdict_validator::prelude::*;` import that brings
//! in the traits, the engine types, the built-in validators and the
//! combinators.
//!
//! The registry functions are deliberately not glob-exported; call them
//! through [`messages`].

// ============================================================================
// FOUNDATION: Core traits, errors, results
// ============================================================================

pub use crate::foundation::{
    ArgumentError, AssertionFailed, EvaluationContext, Validate, ValidateExt, ValidationError,
    ValidationErrors, ValidatorResult,
};

// ============================================================================
// ENGINE: Rule chains and conditions
// ============================================================================

pub use crate::engine::{
    Branch, CompositeMode, ConditionBuilder, ConditionSet, RuleChain, RuleSetFilter, ThenBuilder,
    rule_set_matches,
};

// ============================================================================
// VALIDATORS: Built-in leaf rules
// ============================================================================

pub use crate::validators::{
    AlwaysFail, Max, MaxLength, Min, MinLength, NotEmpty, NotNull, Predicate, max, max_length,
    min, min_length, not_empty, not_null, predicate,
};

#[cfg(feature = "pattern")]
pub use crate::validators::{Pattern, pattern};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{Proxy, WithMessage, WithPriority, proxy, with_message};

// ============================================================================
// MESSAGES
// ============================================================================

pub use crate::messages::{self, MessageSource};
