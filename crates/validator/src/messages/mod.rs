//! Message override registry.
//!
//! Every built-in validator renders its failure message from a template
//! keyed by its error code. The registry lets a process replace those
//! templates after the validators were built, without touching them:
//!
//! ```rust,ignore
//! use verdict_validator::messages;
//!
//! messages::add_override("not_null", "Please fill in {0}.")?;
//! messages::apply_overrides();
//! // every NotNull failure from now on reads "Please fill in ...".
//! ```
//!
//! The registry keeps two tables behind one reader/writer lock:
//!
//! - the *staged* table, edited by [`add_override`], [`add_overrides`] and
//!   read by [`try_get_override`];
//! - the *active* table, consulted by [`render`], which only changes when
//!   [`apply_overrides`] publishes the staged table.
//!
//! Readers always see a whole table; writers serialize on the lock.

pub mod catalog;
pub mod format;

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use tracing::debug;

use crate::foundation::ArgumentError;

pub use catalog::{DEFAULT_TEMPLATES, FALLBACK_TEMPLATE, GERMAN_TEMPLATES, default_template};
pub use format::format_template;

#[derive(Debug, Default)]
struct Registry {
    staged: HashMap<String, String>,
    active: Arc<HashMap<String, String>>,
}

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::default()));

// ============================================================================
// REGISTRY API
// ============================================================================

/// Stages an override template for resource `key`.
///
/// Fails when `key` is empty or whitespace. Takes effect once
/// [`apply_overrides`] runs.
pub fn add_override(
    key: impl Into<String>,
    template: impl Into<String>,
) -> Result<(), ArgumentError> {
    let key = key.into();
    ArgumentError::ensure_not_blank("key", &key)?;
    REGISTRY.write().staged.insert(key, template.into());
    Ok(())
}

/// Stages several overrides at once.
///
/// Every key is checked before anything is written, so a blank key leaves
/// the staged table unchanged.
pub fn add_overrides<I, K, V>(overrides: I) -> Result<(), ArgumentError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let entries = overrides
        .into_iter()
        .map(|(k, v)| {
            let key = k.into();
            ArgumentError::ensure_not_blank("key", &key)?;
            Ok((key, v.into()))
        })
        .collect::<Result<Vec<_>, ArgumentError>>()?;

    REGISTRY.write().staged.extend(entries);
    Ok(())
}

/// Returns the staged override for `key`, if any.
pub fn try_get_override(key: &str) -> Result<Option<String>, ArgumentError> {
    ArgumentError::ensure_not_blank("key", key)?;
    Ok(REGISTRY.read().staged.get(key).cloned())
}

/// Removes every staged and active override.
pub fn clear_overrides() {
    let mut registry = REGISTRY.write();
    registry.staged.clear();
    registry.active = Arc::default();
    debug!("message overrides cleared");
}

/// Publishes the staged table as the active one.
///
/// Idempotent. With nothing staged this is a no-op and the active table
/// stays as it was.
pub fn apply_overrides() {
    let mut registry = REGISTRY.write();
    if registry.staged.is_empty() {
        return;
    }
    if *registry.active != registry.staged {
        registry.active = Arc::new(registry.staged.clone());
    }
    debug!(count = registry.active.len(), "message overrides applied");
}

/// Replaces all overrides with the built-in German table and applies it.
///
/// Whatever was staged or active before is discarded.
pub fn use_localized_messages() {
    let mut registry = REGISTRY.write();
    registry.staged = GERMAN_TEMPLATES
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    registry.active = Arc::new(registry.staged.clone());
    debug!(count = registry.active.len(), "localized messages applied");
}

/// Snapshot of the active table.
pub fn active_overrides() -> Arc<HashMap<String, String>> {
    Arc::clone(&REGISTRY.read().active)
}

// ============================================================================
// RENDERING
// ============================================================================

/// Renders the template for `key` with positional `args`.
///
/// Lookup order: active override, built-in default, [`FALLBACK_TEMPLATE`].
pub fn render<S: AsRef<str>>(key: &str, args: &[S]) -> String {
    let active = active_overrides();
    let template = active
        .get(key)
        .map(String::as_str)
        .or_else(|| default_template(key))
        .unwrap_or(FALLBACK_TEMPLATE);
    format_template(template, args)
}

/// Where a custom failure message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// A literal template.
    Text(Cow<'static, str>),
    /// A resource key, rendered through [`render`].
    Resource(Cow<'static, str>),
}

impl MessageSource {
    /// A literal template; fails when blank.
    pub fn text(text: impl Into<Cow<'static, str>>) -> Result<Self, ArgumentError> {
        let text = text.into();
        ArgumentError::ensure_not_blank("message", &text)?;
        Ok(Self::Text(text))
    }

    /// A resource key; fails when blank.
    pub fn resource(key: impl Into<Cow<'static, str>>) -> Result<Self, ArgumentError> {
        let key = key.into();
        ArgumentError::ensure_not_blank("key", &key)?;
        Ok(Self::Resource(key))
    }

    /// The error code a failure from this source carries.
    pub fn code(&self) -> Cow<'static, str> {
        match self {
            Self::Text(_) => Cow::Borrowed("invalid"),
            Self::Resource(key) => key.clone(),
        }
    }

    /// Renders the message with positional `args`.
    pub fn render<S: AsRef<str>>(&self, args: &[S]) -> String {
        match self {
            Self::Text(text) => format_template(text, args),
            Self::Resource(key) => render(key, args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests that mutate the registry live in tests/message_overrides.rs,
    // which serializes them; these only read.

    #[test]
    fn test_blank_keys_rejected() {
        assert!(add_override("", "x").is_err());
        assert!(add_override(" \t", "x").is_err());
        assert!(try_get_override("").is_err());
        assert!(add_overrides([("ok", "x"), ("  ", "y")]).is_err());
    }

    #[test]
    fn test_render_unknown_key_uses_fallback() {
        assert_eq!(render("no_such_key_anywhere", &["Name"]), "Name is invalid.");
    }

    #[test]
    fn test_message_source() {
        assert!(MessageSource::text("").is_err());
        assert!(MessageSource::resource(" ").is_err());

        let source = MessageSource::text("{0} is off").unwrap();
        assert_eq!(source.render(&["Mode"]), "Mode is off");
        assert_eq!(source.code(), "invalid");

        let source = MessageSource::resource("my_key").unwrap();
        assert_eq!(source.code(), "my_key");
    }
}
