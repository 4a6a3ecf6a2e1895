//! The outcome of one evaluation pass.

use std::fmt;

use serde::Serialize;

use crate::foundation::{ValidationError, ValidationErrors};

/// Immutable snapshot of one evaluation: validity, the ordered failures and
/// a borrow of the subject that was evaluated.
#[derive(Debug, Serialize)]
pub struct ValidatorResult<'a, T: ?Sized> {
    is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    failures: Option<ValidationErrors>,
    #[serde(skip)]
    subject: Option<&'a T>,
}

impl<'a, T: ?Sized> ValidatorResult<'a, T> {
    /// Builds a result from the collected failures.
    pub fn new(subject: Option<&'a T>, failures: ValidationErrors) -> Self {
        if failures.is_empty() {
            Self::valid(subject)
        } else {
            Self {
                is_valid: false,
                failures: Some(failures),
                subject,
            }
        }
    }

    /// A passing result.
    pub fn valid(subject: Option<&'a T>) -> Self {
        Self {
            is_valid: true,
            failures: None,
            subject,
        }
    }

    /// Whether every applicable rule passed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Failures in evaluation order, `None` when valid.
    pub fn failures(&self) -> Option<&ValidationErrors> {
        self.failures.as_ref()
    }

    /// The first failure, if any.
    pub fn first_failure(&self) -> Option<&ValidationError> {
        self.failures.as_ref().and_then(ValidationErrors::first)
    }

    /// The evaluated subject.
    pub fn subject(&self) -> Option<&'a T> {
        self.subject
    }

    /// Number of failures.
    pub fn failure_count(&self) -> usize {
        self.failures.as_ref().map_or(0, ValidationErrors::len)
    }

    /// Converts into `Ok(())` or the failure list.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        match self.failures {
            Some(failures) => Err(failures),
            None => Ok(()),
        }
    }

    /// Converts the result to a JSON value (the subject is not included).
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "is_valid": self.is_valid,
            "failures": self
                .failures
                .as_ref()
                .map(|f| f.errors().iter().map(ValidationError::to_json_value).collect::<Vec<_>>()),
        })
    }
}

impl<T: ?Sized> Clone for ValidatorResult<'_, T> {
    fn clone(&self) -> Self {
        Self {
            is_valid: self.is_valid,
            failures: self.failures.clone(),
            subject: self.subject,
        }
    }
}

impl<T: ?Sized> fmt::Display for ValidatorResult<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failures {
            None => write!(f, "valid"),
            Some(failures) => write!(f, "{failures}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_failures_is_valid() {
        let result = ValidatorResult::new(Some(&5), ValidationErrors::new());
        assert!(result.is_valid());
        assert!(result.failures().is_none());
        assert_eq!(result.subject(), Some(&5));
        assert_eq!(result.to_string(), "valid");
    }

    #[test]
    fn test_failures_preserved_in_order() {
        let failures: ValidationErrors = [
            ValidationError::new("a", "first"),
            ValidationError::new("b", "second"),
        ]
        .into_iter()
        .collect();
        let result = ValidatorResult::<str>::new(Some("x"), failures);

        assert!(!result.is_valid());
        assert_eq!(result.failure_count(), 2);
        assert_eq!(result.first_failure().map(|e| e.code.as_ref()), Some("a"));
        let json = result.to_json_value();
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["failures"][1]["message"], "second");
        assert!(result.into_result().is_err());
    }
}
