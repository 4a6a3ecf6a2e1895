//! Built-in message templates.
//!
//! Keys are the error codes of the built-in validators. `{0}` is always the
//! display name of the value.

/// Template used when a key has neither an override nor a built-in entry.
pub const FALLBACK_TEMPLATE: &str = "{0} is invalid.";

/// English defaults, baked into the validators.
pub const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    ("not_null", "{0} is required."),
    ("not_empty", "{0} must not be empty."),
    ("min_length", "{0} must be at least {1} characters long."),
    ("max_length", "{0} must be at most {1} characters long."),
    ("min", "{0} must be greater than or equal to {1}."),
    ("max", "{0} must be less than or equal to {1}."),
    ("pattern", "{0} is not in the correct format."),
    ("invalid", FALLBACK_TEMPLATE),
];

/// German table loaded by [`use_localized_messages`](super::use_localized_messages).
pub const GERMAN_TEMPLATES: &[(&str, &str)] = &[
    ("not_null", "{0} ist erforderlich."),
    ("not_empty", "{0} darf nicht leer sein."),
    ("min_length", "{0} muss mindestens {1} Zeichen lang sein."),
    ("max_length", "{0} darf höchstens {1} Zeichen lang sein."),
    ("min", "{0} muss größer oder gleich {1} sein."),
    ("max", "{0} muss kleiner oder gleich {1} sein."),
    ("pattern", "{0} hat nicht das richtige Format."),
    ("invalid", "{0} ist ungültig."),
];

/// Looks up the built-in English template for `key`.
pub fn default_template(key: &str) -> Option<&'static str> {
    DEFAULT_TEMPLATES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, template)| *template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lookup() {
        assert_eq!(default_template("not_null"), Some("{0} is required."));
        assert_eq!(default_template("unknown"), None);
    }

    #[test]
    fn test_localized_table_covers_defaults() {
        for (key, _) in DEFAULT_TEMPLATES {
            assert!(
                GERMAN_TEMPLATES.iter().any(|(k, _)| k == key),
                "missing German template for {key}"
            );
        }
    }
}
