//! spotrank-core: Pure-computation core for popularity lists and page controls.
//!
//! Records → composite popularity score → "Top 10" with dense ranks.
//! Current page + total pages → window of page-number buttons.
//! No IO, no HTTP, no logging. Fetch your data elsewhere and pass it in.
//!
//! Pages are 1-based everywhere. Use `PageBase` to convert 0-based call sites.
//!
//! # Quick start
//!
//! ```rust
//! use spotrank_core::{compute_default_window, rank_top_items, RankOptions, Rankable};
//!
//! #[derive(Clone)]
//! struct Spot { title: String, views: i64, likes: i64 }
//!
//! impl Rankable for Spot {
//!     fn views(&self) -> Option<i64> { Some(self.views) }
//!     fn likes(&self) -> Option<i64> { Some(self.likes) }
//!     fn bookmarks(&self) -> Option<i64> { None }
//!     fn title(&self, _field: &str) -> Option<&str> { Some(&self.title) }
//! }
//!
//! let spots = vec![
//!     Spot { title: "남산".into(), views: 3, likes: 2 },
//!     Spot { title: "경복궁".into(), views: 5, likes: 0 },
//!     Spot { title: "해운대".into(), views: 9, likes: 4 },
//! ];
//!
//! let top = rank_top_items(&spots, &RankOptions::new("title"));
//! for r in &top {
//!     println!("#{} {} ({})", r.rank, r.item.title, r.score);
//! }
//! assert_eq!(top[0].item.title, "해운대");
//! assert_eq!((top[1].rank, top[2].rank), (2, 2));
//!
//! let window = compute_default_window(5, 20);
//! assert_eq!(window.visible_pages, (2..=11).collect::<Vec<_>>());
//! assert!(window.show_trailing_ellipsis);
//! ```

pub mod collation;
pub mod constants;
pub mod pagination;
pub mod rank;
pub mod types;

// Re-export primary public API at crate root.
pub use collation::{compare_titles, KoreanCollator};
pub use constants::{DEFAULT_VISIBLE_COUNT, FIRST_PAGE, MAX_RANKED_ITEMS, MAX_VISIBLE_COUNT};
pub use pagination::{
    clamp_page, compute_default_window, compute_window, page_bounds, total_pages, PaginationBar,
};
pub use rank::{assign_dense_ranks, rank_top_items, score_of};
pub use types::{PageAction, PageBase, PageWindow, RankOptions, RankedItem, Rankable};
