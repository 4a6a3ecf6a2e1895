//! Execution ordering.
//!
//! Presence checks must run before checks that assume a value is present,
//! so that under fail-fast evaluation a missing value reports "required"
//! instead of a confusing length or format failure. Validators opt in by
//! returning a priority from [`Validate::as_priority`]; lower runs first.

use crate::foundation::Validate;

/// Priority given to validators that do not declare one.
pub const DEFAULT_PRIORITY: i32 = i32::MAX;

/// Priority of the built-in presence checks (`NotNull`, `NotEmpty`).
pub const PRESENCE_PRIORITY: i32 = 0;

/// Effective ordering key of a validator.
pub fn effective_priority<V: Validate + ?Sized>(validator: &V) -> i32 {
    validator.as_priority().unwrap_or(DEFAULT_PRIORITY)
}

/// Stable-sorts `items` by the priority of the validator `key` extracts.
///
/// Items with equal priority keep their registration order.
pub fn order_by_priority<I, V, K>(items: &mut [I], key: K)
where
    V: Validate + ?Sized,
    K: Fn(&I) -> &V,
{
    items.sort_by_key(|item| effective_priority(key(item)));
}
