//! Splitting file names into base name and extension

/// Split a file name into `(base, extension)` at the final dot.
///
/// The extension keeps its leading dot. Leading dots belong to the base name,
/// so dotfiles like `.gitignore` have no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    let leading = name.len() - name.trim_start_matches('.').len();

    match name[leading..].rfind('.') {
        Some(idx) => name.split_at(leading + idx),
        None => (name, ""),
    }
}

/// Build the kebab-case file name for `name`, leaving the extension untouched.
pub fn kebab_file_name(name: &str) -> String {
    let (base, extension) = split_extension(name);
    format!("{}{}", super::to_kebab_case(base), extension)
}
