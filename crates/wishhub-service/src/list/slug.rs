//! Slug derivation for gift lists.

use rand::RngExt;

/// Derive a URL-safe slug from a list name: lowercased, runs of
/// non-alphanumeric characters collapsed to single hyphens, leading and
/// trailing hyphens trimmed.
pub fn derive_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_was_hyphen = false;
        } else if !last_was_hyphen && !slug.is_empty() {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Append a random 6-hex-char suffix for collision recovery.
pub fn with_random_suffix(base: &str) -> String {
    let bytes: [u8; 3] = rand::rng().random();
    format!(
        "{base}-{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2]
    )
}
