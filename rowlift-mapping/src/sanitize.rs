//! Subject-identifier sanitization

/// Derive a URI-safe local identifier from a raw field value.
///
/// Replaces each occurrence of the forbidden characters with `_`. Total
/// and deterministic. This is a best-effort slugify, not a guarantee of
/// URI legality for arbitrary Unicode input.
pub fn sanitize(raw: &str, forbidden: &[char]) -> String {
    raw.chars()
        .map(|c| if forbidden.contains(&c) { '_' } else { c })
        .collect()
}
