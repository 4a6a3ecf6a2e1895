//! Built-in validators
//!
//! A small catalogue of leaf rules. Anything else implements
//! [`Validate`](crate::foundation::Validate) directly or goes through
//! [`predicate`].
//!
//! - **Presence**: [`NotNull`], [`NotEmpty`]
//! - **Length**: [`MinLength`], [`MaxLength`]
//! - **Range**: [`Min`], [`Max`]
//! - **Format**: [`Pattern`] (feature `pattern`)
//! - **Custom**: [`Predicate`], [`AlwaysFail`]

pub mod custom;
pub mod length;
pub mod nullable;
#[cfg(feature = "pattern")]
pub mod pattern;
pub mod range;

pub use custom::{AlwaysFail, Predicate, predicate};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use nullable::{NotEmpty, NotNull, not_empty, not_null};
#[cfg(feature = "pattern")]
pub use pattern::{Pattern, pattern};
pub use range::{Max, Min, max, min};
