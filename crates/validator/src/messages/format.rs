//! Positional message templates.
//!
//! `{0}`, `{1}`, ... are replaced by the argument at that index. `{{` and
//! `}}` produce literal braces. A placeholder whose index is out of range, or
//! that is not a number, is kept verbatim.

/// Renders `template` with positional `args`.
///
/// ```
/// use verdict_validator::messages::format_template;
///
/// assert_eq!(format_template("{0} must be at least {1}.", &["Age", "18"]), "Age must be at least 18.");
/// assert_eq!(format_template("{{0}} is literal", &["x"]), "{0} is literal");
/// assert_eq!(format_template("{3} stays", &["x"]), "{3} stays");
/// ```
pub fn format_template<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
        } else if tail.starts_with('{') {
            match tail.find('}') {
                Some(end) => {
                    let placeholder = &tail[..=end];
                    let arg = tail[1..end]
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .and_then(|index| args.get(index));
                    match arg {
                        Some(arg) => out.push_str(arg.as_ref()),
                        None => out.push_str(placeholder),
                    }
                    rest = &tail[end + 1..];
                }
                None => {
                    out.push_str(tail);
                    rest = "";
                }
            }
        } else {
            out.push('}');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
