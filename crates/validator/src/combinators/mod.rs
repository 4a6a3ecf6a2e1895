//! Validator wrappers.
//!
//! - [`WithMessage`]: replace the failure message (literal or resource key)
//! - [`WithPriority`]: set the execution priority
//! - [`Proxy`]: run a validator on a projection of the subject

pub mod message;
pub mod priority;
pub mod proxy;

pub use message::{WithMessage, with_message};
pub use priority::WithPriority;
pub use proxy::{ChangeCallback, Proxy, proxy};
