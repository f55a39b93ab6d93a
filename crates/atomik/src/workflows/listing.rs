/// Number of records returned when a listing request omits `limit`.
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Upper bound applied to every listing request.
pub const MAX_LIST_LIMIT: usize = 500;

/// Resolve a caller supplied limit. Zero is honored and yields an empty page.
pub fn clamp_limit(requested: Option<usize>) -> usize {
    requested.unwrap_or(DEFAULT_LIST_LIMIT).min(MAX_LIST_LIMIT)
}
