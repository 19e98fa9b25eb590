//! Target file detection by extension

/// Extensions treated as documents, compared against the lowercased suffix
pub const TARGET_EXTENSIONS: [&str; 3] = [".md", ".txt", ".mkd"];

/// Suffix of the final path element starting at its last '.', if any.
///
/// A name that is only an extension (".md") counts as having one.
fn extension_of(name: &str) -> Option<&str> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    base.rfind('.').map(|idx| &base[idx..])
}

/// Check whether a file name has one of the target extensions (case-insensitive)
pub fn is_target_file(name: &str) -> bool {
    match extension_of(name) {
        Some(ext) => {
            let ext = ext.to_lowercase();
            TARGET_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}
