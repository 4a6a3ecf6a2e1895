//! Rule set matching.
//!
//! Rules may be tagged with rule set names. A caller picks which tagged
//! rules run by passing a [`RuleSetFilter`]:
//!
//! - no filter runs only the *untagged* rules,
//! - a named filter runs only the rules sharing at least one name with it,
//! - the wildcard `"*"` runs everything, tagged or not.
//!
//! Tagged rules therefore never run without being asked for explicitly.

use serde::{Deserialize, Serialize};

/// The rule set name that matches every rule.
pub const WILDCARD: &str = "*";

/// Decides whether a rule tagged with `rule_tags` takes part in an
/// evaluation requested with `filter`.
///
/// `None` and an empty slice mean the same thing on both sides.
///
/// ```
/// use verdict_validator::engine::rule_set_matches;
///
/// let none: Option<&[&str]> = None;
/// assert!(rule_set_matches(none, none));
/// assert!(!rule_set_matches(Some(&["login"][..]), none));
/// assert!(rule_set_matches(Some(&["login"][..]), Some(&["*"][..])));
/// assert!(!rule_set_matches(none, Some(&["login"][..])));
/// ```
pub fn rule_set_matches<R, F>(rule_tags: Option<&[R]>, filter: Option<&[F]>) -> bool
where
    R: AsRef<str>,
    F: AsRef<str>,
{
    let tags = rule_tags.unwrap_or_default();
    let filter = filter.unwrap_or_default();

    if filter.is_empty() {
        return tags.is_empty();
    }
    if filter.iter().any(|name| name.as_ref() == WILDCARD) {
        return true;
    }
    tags.iter()
        .any(|tag| filter.iter().any(|name| name.as_ref() == tag.as_ref()))
}

/// The rule set names requested for one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSetFilter(Option<Vec<String>>);

impl RuleSetFilter {
    /// No filter: only untagged rules run.
    pub const fn none() -> Self {
        Self(None)
    }

    /// The wildcard filter: every rule runs.
    pub fn wildcard() -> Self {
        Self(Some(vec![WILDCARD.to_owned()]))
    }

    /// A filter naming specific rule sets.
    pub fn of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(Some(names.into_iter().map(Into::into).collect()))
    }

    /// The requested names, `None` when no filter was given.
    pub fn names(&self) -> Option<&[String]> {
        self.0.as_deref()
    }

    /// Whether a rule tagged with `rule_tags` takes part.
    pub fn matches<S: AsRef<str>>(&self, rule_tags: Option<&[S]>) -> bool {
        rule_set_matches(rule_tags, self.names())
    }
}

impl<S: Into<String>> FromIterator<S> for RuleSetFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::of(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_constructors() {
        assert_eq!(RuleSetFilter::none().names(), None);
        assert_eq!(
            RuleSetFilter::wildcard().names(),
            Some(&["*".to_owned()][..])
        );
        let filter: RuleSetFilter = ["a", "b"].into_iter().collect();
        assert_eq!(filter, RuleSetFilter::of(["a", "b"]));
    }

    #[test]
    fn test_filter_matches_delegates() {
        let tags = vec!["login".to_owned()];
        assert!(RuleSetFilter::of(["login"]).matches(Some(tags.as_slice())));
        assert!(!RuleSetFilter::none().matches(Some(tags.as_slice())));
        assert!(RuleSetFilter::none().matches::<String>(None));
    }

    #[test]
    fn test_filter_serde_transparent() {
        let filter: RuleSetFilter = serde_json::from_str(r#"["a","*"]"#).unwrap();
        assert_eq!(filter, RuleSetFilter::of(["a", "*"]));
        let filter: RuleSetFilter = serde_json::from_str("null").unwrap();
        assert_eq!(filter, RuleSetFilter::none());
    }
}
