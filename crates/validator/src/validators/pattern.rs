//! Regular expression validator
//!
//! Available with the `pattern` feature (on by default).

use regex::Regex;

use crate::foundation::{ArgumentError, AssertionFailed, Validate, ValidationError};

/// Validates that a string matches a regular expression.
///
/// The expression is searched, not anchored: add `^` and `$` to match the
/// whole input.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::InvalidPattern`] when the expression does not compile,
    /// [`ArgumentError::Blank`] when it is blank.
    pub fn new(pattern: &str) -> Result<Self, ArgumentError> {
        ArgumentError::ensure_not_blank("pattern", pattern)?;
        let regex = Regex::new(pattern).map_err(|e| ArgumentError::InvalidPattern {
            argument: "pattern",
            reason: e.to_string(),
        })?;
        Ok(Self { regex })
    }

    /// The source expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

impl Validate for Pattern {
    type Input = str;

    fn check(&self, input: &str) -> Result<bool, AssertionFailed> {
        Ok(self.regex.is_match(input))
    }

    fn describe_failure(&self, _input: &str, field_name: &str) -> Option<ValidationError> {
        Some(ValidationError::from_template(
            "pattern",
            field_name,
            &[("pattern", self.regex.as_str().to_owned())],
        ))
    }
}

/// Creates a [`Pattern`] validator.
///
/// # Errors
///
/// See [`Pattern::new`].
pub fn pattern(pattern: &str) -> Result<Pattern, ArgumentError> {
    Pattern::new(pattern)
}
