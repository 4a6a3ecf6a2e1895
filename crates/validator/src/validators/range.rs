//! Range validators for ordered values

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is greater than or equal to `min`.
    pub Min<T: PartialOrd + Display> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input, field) { ValidationError::min_value(field, &self.min) }
    fn min(value: T);
}

crate::validator! {
    /// Validates that a value is less than or equal to `max`.
    pub Max<T: PartialOrd + Display> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input, field) { ValidationError::max_value(field, &self.max) }
    fn max(value: T);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;

    #[test]
    fn test_min() {
        let validator = min(0_i64);
        assert!(validator.is_valid(&0));
        assert!(validator.is_valid(&7));
        assert!(!validator.is_valid(&-1));
    }

    #[test]
    fn test_max() {
        let validator = max(10_u32);
        assert!(validator.is_valid(&10));
        assert!(!validator.is_valid(&11));
    }

    #[test]
    fn test_float_nan_fails() {
        assert!(!min(0.0_f64).is_valid(&f64::NAN));
        assert!(!max(0.0_f64).is_valid(&f64::NAN));
    }

    #[test]
    fn test_messages() {
        let error = min(18).validate(&12, "Age").unwrap_err();
        assert_eq!(error.code, "min");
        assert_eq!(error.message, "Age must be greater than or equal to 18.");

        let error = max(65).validate(&70, "Age").unwrap_err();
        assert_eq!(error.code, "max");
        assert_eq!(error.param("max"), Some("65"));
    }
}
