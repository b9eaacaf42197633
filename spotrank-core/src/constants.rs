/// Upper bound on the length of a ranked list ("Top 10" carousels).
/// `RankOptions::limit` is clamped to this value.
pub const MAX_RANKED_ITEMS: usize = 10;

/// Number of middle page-number buttons shown between the fixed first and
/// last page buttons when the caller does not choose a width.
pub const DEFAULT_VISIBLE_COUNT: usize = 10;

/// Widest page-number window `compute_window` will build. Larger requests
/// are capped, which keeps the window bounded for any input.
pub const MAX_VISIBLE_COUNT: usize = 100;

/// The first page. Pages are 1-based throughout this crate; see `PageBase`
/// for converting 0-based call sites.
pub const FIRST_PAGE: i64 = 1;
