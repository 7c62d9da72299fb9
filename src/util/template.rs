//! `$name` placeholder substitution for admin-supplied message templates.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:(\$)|([_A-Za-z][_A-Za-z0-9]*)|\{([_A-Za-z][_A-Za-z0-9]*)\})")
        .expect("Valid placeholder regex")
});

/// Replaces `$name` and `${name}` with the matching value from `vars`.
///
/// `$$` renders a literal `$`. Placeholders without a value, and stray `$`
/// characters, are left as written so a typo never breaks the message.
///
/// # Arguments
/// - `template` - Text supplied by a guild administrator
/// - `vars` - Placeholder names and their replacement text
///
/// # Returns
/// - `String` - The substituted text
pub fn safe_substitute(template: &str, vars: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            if caps.get(1).is_some() {
                return "$".to_string();
            }

            let name = caps.get(2).or_else(|| caps.get(3)).map(|m| m.as_str());
            vars.iter()
                .find(|(key, _)| Some(*key) == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
