//! Macros for creating validators with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::validator;
//! use verdict_validator::foundation::ValidationError;
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub NotEmpty for str;
//!     priority(0);
//!     rule(input) { !input.is_empty() }
//!     error(input, field) { ValidationError::not_empty(field) }
//!     fn not_empty();
//! }
//!
//! // Struct with fields
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinLength { min: usize } for str;
//!     rule(self, input) { input.chars().count() >= self.min }
//!     error(self, input, field) { ValidationError::min_length(field, self.min, input.len()) }
//!     fn min_length(min: usize);
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate`
/// implementation, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`. An optional `priority(n);` line makes the validator
/// report `n` from `as_priority`.
///
/// Struct fields are public so a validator can be adjusted after
/// construction, before it is shared.
#[macro_export]
macro_rules! validator {
    // ── Unit validator (no fields) + factory fn ─────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        $(priority($prio:expr);)?
        rule($inp:ident) $rule:block
        error($einp:ident, $field:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            fn check(&self, $inp: &Self::Input) -> ::std::result::Result<bool, $crate::foundation::AssertionFailed> {
                Ok($rule)
            }

            #[allow(unused_variables)]
            fn describe_failure(
                &self,
                $einp: &Self::Input,
                $field: &str,
            ) -> ::std::option::Option<$crate::foundation::ValidationError> {
                Some($err)
            }

            $(
                fn as_priority(&self) -> ::std::option::Option<i32> {
                    Some($prio)
                }
            )?
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Struct with fields + auto new + factory fn ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($fname:ident: $fty:ty),+ $(,)? } for $input:ty;
        $(priority($prio:expr);)?
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident, $field:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $fname: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($fname: $fty),+) -> Self {
                Self { $($fname),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            fn check(&$self_, $inp: &Self::Input) -> ::std::result::Result<bool, $crate::foundation::AssertionFailed> {
                Ok($rule)
            }

            #[allow(unused_variables)]
            fn describe_failure(
                &$self2,
                $einp: &Self::Input,
                $field: &str,
            ) -> ::std::option::Option<$crate::foundation::ValidationError> {
                Some($err)
            }

            $(
                fn as_priority(&self) -> ::std::option::Option<i32> {
                    Some($prio)
                }
            )?
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct + auto new + factory fn ──────────────────────────
    //
    // A single generic parameter with one or more simple trait bounds.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($fname:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident, $field:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $fname: $fty,)+
        }

        impl<$gen> $name<$gen> {
            #[must_use]
            pub fn new($($fname: $fty),+) -> Self {
                Self { $($fname),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            fn check(&$self_, $inp: &Self::Input) -> ::std::result::Result<bool, $crate::foundation::AssertionFailed> {
                Ok($rule)
            }

            #[allow(unused_variables)]
            fn describe_failure(
                &$self2,
                $einp: &Self::Input,
                $field: &str,
            ) -> ::std::option::Option<$crate::foundation::ValidationError> {
                Some($err)
            }
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };
}
