//! Aggregation of an ordered validator list.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::engine::RuleSetFilter;
use crate::foundation::{Validate, ValidationErrors};

/// How the failures of several validators combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeMode {
    /// Stop at the first failure and report only it.
    #[default]
    FailFast,
    /// Run everything, report every failure.
    All,
    /// Valid as soon as one validator passes; otherwise report every failure.
    Any,
}

/// Runs `validators` in order against `input` under `mode`.
///
/// Returns the collected failures; an empty list means valid. An empty
/// validator list is valid under every mode. `filter` is handed to every
/// validator so nested condition sets select the same rule sets.
///
/// A validator may report several failures (a nested set under `All`);
/// they count as one failed step and are kept together.
pub fn evaluate<'v, V, I>(
    validators: I,
    input: &V::Input,
    field_name: &str,
    filter: &RuleSetFilter,
    mode: CompositeMode,
) -> ValidationErrors
where
    V: Validate + ?Sized + 'v,
    I: IntoIterator<Item = &'v V>,
{
    let mut failures = ValidationErrors::new();

    for (index, validator) in validators.into_iter().enumerate() {
        let step = validator.collect_failures(input, field_name, filter);
        let passed = step.is_empty();
        trace!(index, passed, ?mode, "validator executed");

        match mode {
            CompositeMode::FailFast if !passed => {
                failures.extend(step);
                return failures;
            }
            CompositeMode::Any if passed => return ValidationErrors::new(),
            _ => failures.extend(step),
        }
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{AssertionFailed, ValidationError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Step {
        pass: bool,
        code: &'static str,
        calls: AtomicUsize,
    }

    impl Step {
        fn new(pass: bool, code: &'static str) -> Self {
            Self {
                pass,
                code,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Validate for Step {
        type Input = i32;

        fn check(&self, _input: &i32) -> Result<bool, AssertionFailed> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.pass)
        }

        fn describe_failure(&self, _input: &i32, field: &str) -> Option<ValidationError> {
            Some(ValidationError::new(self.code, format!("{field} failed {}", self.code)))
        }
    }

    fn steps() -> [Step; 3] {
        [
            Step::new(true, "p"),
            Step::new(false, "f1"),
            Step::new(false, "f2"),
        ]
    }

    struct Asserting(&'static str);

    impl Validate for Asserting {
        type Input = i32;

        fn check(&self, _input: &i32) -> Result<bool, AssertionFailed> {
            Err(AssertionFailed::new(self.0))
        }

        fn describe_failure(&self, _input: &i32, _field: &str) -> Option<ValidationError> {
            None
        }
    }

    fn none() -> RuleSetFilter {
        RuleSetFilter::none()
    }

    fn codes(errors: &ValidationErrors) -> Vec<&str> {
        errors.errors().iter().map(|e| e.code.as_ref()).collect()
    }

    #[test]
    fn test_fail_fast_stops_at_first_failure() {
        let steps = steps();
        let errors = evaluate(&steps, &0, "N", &none(), CompositeMode::FailFast);
        assert_eq!(codes(&errors), ["f1"]);
        assert_eq!(steps[2].calls(), 0);
    }

    #[test]
    fn test_all_collects_in_order() {
        let steps = steps();
        let errors = evaluate(&steps, &0, "N", &none(), CompositeMode::All);
        assert_eq!(codes(&errors), ["f1", "f2"]);
        assert_eq!(errors.errors()[0].message, "N failed f1");
    }

    #[test]
    fn test_any_passes_when_one_passes() {
        let steps = steps();
        assert!(evaluate(&steps, &0, "N", &none(), CompositeMode::Any).is_empty());
        // The first validator passes, nothing else needs to run.
        assert_eq!(steps[1].calls(), 0);
    }

    #[test]
    fn test_any_reports_every_failure() {
        let steps = [Step::new(false, "a"), Step::new(false, "b")];
        let errors = evaluate(&steps, &0, "N", &none(), CompositeMode::Any);
        assert_eq!(codes(&errors), ["a", "b"]);
    }

    #[test]
    fn test_empty_list_is_valid() {
        let empty: [Step; 0] = [];
        for mode in [CompositeMode::FailFast, CompositeMode::All, CompositeMode::Any] {
            assert!(evaluate(&empty, &0, "N", &none(), mode).is_empty());
        }
    }

    #[test]
    fn test_assertion_is_folded_in_place() {
        let validators: [Box<dyn Validate<Input = i32>>; 2] = [
            Box::new(Asserting("Reference must be unique")),
            Box::new(Step::new(false, "f1")),
        ];
        let errors = evaluate(&validators, &0, "N", &none(), CompositeMode::All);

        assert_eq!(codes(&errors), ["assertion", "f1"]);
        assert_eq!(errors.errors()[0].message, "Reference must be unique");
        assert_eq!(errors.errors()[0].field.as_deref(), Some("N"));

        let errors = evaluate(&validators, &0, "N", &none(), CompositeMode::FailFast);
        assert_eq!(codes(&errors), ["assertion"]);
    }

    #[test]
    fn test_mode_serde_names() {
        let mode: CompositeMode = serde_json::from_str(r#""fail_fast""#).unwrap();
        assert_eq!(mode, CompositeMode::FailFast);
        assert_eq!(serde_json::to_string(&CompositeMode::Any).unwrap(), r#""any""#);
    }
}
