//! Comma-delimited technology tags.
//!
//! Tags are never stored parsed; callers re-derive them from the canonical
//! string on every render.

/// Split on commas, trim, and drop empty tokens
pub fn parse(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).filter(|tag| !tag.is_empty()).collect()
}

/// The first `limit` tags and how many were left out
pub fn preview(raw: &str, limit: usize) -> (Vec<&str>, usize) {
    let mut all = parse(raw);
    let hidden = all.len().saturating_sub(limit);
    all.truncate(limit);
    (all, hidden)
}
