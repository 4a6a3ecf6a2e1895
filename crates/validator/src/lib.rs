//! # verdict-validator
//!
//! A composable validation engine: declare which checks apply to a value,
//! under what condition, in what order, how failures aggregate, and which
//! named rule sets an invocation runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use verdict_validator::prelude::*;
//!
//! let set = ConditionBuilder::<String>::new()
//!     .when(|name| name.starts_with("admin"))
//!     .then(|chain| chain.push(proxy(min_length(8), |s: &String| Some(s.as_str()))))
//!     .otherwise(|chain| chain.push(proxy(not_empty(), |s: &String| Some(s.as_str()))))
//!     .build();
//!
//! let ctx = EvaluationContext::for_field("Username");
//! assert!(set.is_valid(&"alice".to_owned(), &ctx));
//!
//! // The result borrows the subject, so bind it first.
//! let admin = "admin".to_owned();
//! let result = set.evaluate(&admin, &ctx);
//! assert_eq!(
//!     result.first_failure().map(|f| f.message.as_ref()),
//!     Some("Username must be at least 8 characters long.")
//! );
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) leaf contract,
//!   errors, results and the evaluation context
//! - [`engine`]: rule set matching, priority ordering, composite evaluation
//!   and the condition builder
//! - [`messages`]: the process-wide message override registry
//! - [`combinators`]: message and priority overrides, [`Proxy`](combinators::Proxy)
//! - [`validators`]: a small set of built-in leaf rules
//!
//! Use the [`validator!`] macro for zero-boilerplate leaf validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.

// ValidationError is the value type of every failure; boxing it would add an
// allocation to each one.
#![allow(clippy::result_large_err)]
// Shared validators and predicates are `Arc<dyn Fn(..) + Send + Sync>`.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod engine;
pub mod foundation;
mod macros;
pub mod messages;
pub mod prelude;
pub mod validators;
