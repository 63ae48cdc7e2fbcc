//! Slug derivation.

/// Derive a slug from a title: lower-case it, turn each space into a hyphen,
/// then drop everything that is not an ASCII word character or a hyphen.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Like [`slugify`], but an absent title yields an absent slug.
pub fn derive_slug(title: Option<&str>) -> Option<String> {
    title.map(slugify)
}
