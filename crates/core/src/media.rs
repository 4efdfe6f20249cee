//! Filename conventions for user-uploaded media.
//!
//! Avatars are stored under `avatars/` with the owner's slugified username
//! prefixed to the original filename, e.g. `avatars/jane-doe-selfie.png`.

/// Reduce a username to a filesystem- and URL-safe slug.
///
/// Lowercases ASCII alphanumerics, maps any other run of characters to a
/// single `-`, and trims leading/trailing dashes.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut prev_dash = true; // suppress a leading dash
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Relative storage path for an uploaded avatar.
///
/// Convention: `avatars/{slug(username)}-{filename}`. The original filename
/// is reduced to its final path component and restricted to a safe
/// character set so a hostile `filename` part cannot escape the media root.
pub fn avatar_path(username: &str, original_filename: &str) -> String {
    let base = original_filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_filename);
    let safe: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("avatars/{}-{}", slugify(username), safe)
}
