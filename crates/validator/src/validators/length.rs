//! String length validators
//!
//! Lengths are counted in Unicode scalar values (`chars`), not bytes.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input, field) {
        ValidationError::min_length(field, self.min, input.chars().count())
    }
    fn min_length(min: usize);
}

crate::validator! {
    /// Validates that a string has at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input, field) {
        ValidationError::max_length(field, self.max, input.chars().count())
    }
    fn max_length(max: usize);
}
