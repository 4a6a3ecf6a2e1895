//! Core validation types and traits
//!
//! - **Traits**: [`Validate`] (the leaf contract), [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`AssertionFailed`],
//!   [`ArgumentError`]
//! - **Results**: [`ValidatorResult`]
//! - **Settings**: [`EvaluationContext`]

pub mod context;
pub mod error;
pub mod result;
pub mod traits;

pub use context::{DEFAULT_FIELD_NAME, EvaluationContext, EvaluationContextBuilder};
pub use error::{ArgumentError, AssertionFailed, ErrorParams, ValidationError, ValidationErrors};
pub use result::ValidatorResult;
pub use traits::{Validate, ValidateExt};
