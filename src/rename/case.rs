//! CamelCase to kebab-case conversion

/// Convert a CamelCase string to kebab-case.
///
/// A hyphen is inserted before every ASCII capital except one in the first
/// position, then the whole string is lowercased with full Unicode rules.
/// Consecutive capitals each get their own hyphen, so `"ABCWord"` becomes
/// `"a-b-c-word"`. Non-ASCII capitals are lowercased but never split on.
pub fn to_kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 4);

    for (i, c) in input.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push('-');
        }
        out.push(c);
    }

    // Whole-string lowercasing so final sigma and titlecase letters fold correctly
    out.to_lowercase()
}
