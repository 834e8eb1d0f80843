//! Android resource name sanitizer.

/// Convert an artboard name into a valid Android resource identifier.
///
/// Lower-cases the input and replaces every character that is not an ASCII
/// word character (`[A-Za-z0-9_]`) or a dot with `_`. Replacement is per
/// UTF-16 code unit, so a character outside the Basic Multilingual Plane
/// (most emoji) becomes two underscores. Distinct names can map to the same
/// identifier; the later export overwrites the earlier one.
pub fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            out.push(c);
        } else {
            out.extend(std::iter::repeat('_').take(c.len_utf16()));
        }
    }

    out
}
