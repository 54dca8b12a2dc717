//! Asset path helpers.
//!
//! Store paths are slash-separated, with no leading slash. `join` and
//! `sanitize_key` are deterministic so that repeated generate runs address
//! the same destination artifacts.

/// Longest sanitized key emitted by [`sanitize_key`].
pub const MAX_KEY_LEN: usize = 48;

/// Join two path fragments with a single slash, normalizing backslashes.
pub fn join(a: &str, b: &str) -> String {
    if a.is_empty() {
        return b.replace('\\', "/");
    }
    if b.is_empty() {
        return a.replace('\\', "/");
    }
    format!(
        "{}/{}",
        a.trim_end_matches('/'),
        b.trim_start_matches('/')
    )
    .replace('\\', "/")
}

/// File name of the last path segment without its extension.
pub fn file_stem(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(0) | None => name,
        Some(idx) => &name[..idx],
    }
}

/// Parent folder of a path, or `""` for a bare file name.
pub fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Reduce a string to a safe key alphabet (`[A-Za-z0-9_]`), truncated to
/// [`MAX_KEY_LEN`]. Every other character becomes `_`.
pub fn sanitize_key(s: &str) -> String {
    s.chars()
        .take(MAX_KEY_LEN)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
