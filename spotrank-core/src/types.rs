use crate::constants::MAX_RANKED_ITEMS;

/// A record that can be scored for popularity lists.
///
/// Counters are optional because backend payloads routinely omit them or send
/// `null`. Missing and negative counters are both scored as 0.
pub trait Rankable {
    fn views(&self) -> Option<i64>;
    fn likes(&self) -> Option<i64>;
    fn bookmarks(&self) -> Option<i64>;
    /// Text used to break score ties. The field name differs between list
    /// screens (`title`, `spotName`, `name`, ...), so the caller picks it.
    fn title(&self, field: &str) -> Option<&str>;
}

/// A ranked item: a copy of the caller's record plus its derived score and rank.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedItem<T> {
    pub item: T,
    /// views + likes + bookmarks.
    pub score: u64,
    /// 1-based. Items with equal scores share a rank.
    pub rank: usize,
}

/// Options for `rank_top_items()`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankOptions {
    /// Name of the field holding the tie-break title.
    pub title_field: String,
    /// Maximum number of items returned. Clamped to `MAX_RANKED_ITEMS`.
    pub limit: usize,
}

impl RankOptions {
    pub fn new(title_field: impl Into<String>) -> Self {
        RankOptions {
            title_field: title_field.into(),
            limit: MAX_RANKED_ITEMS,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub(crate) fn effective_limit(&self) -> usize {
        self.limit.min(MAX_RANKED_ITEMS)
    }
}

/// The middle run of page-number buttons, between the fixed first and last buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageWindow {
    /// Contiguous, ascending, 1-based. Never contains page 1 or the last page.
    pub visible_pages: Vec<i64>,
    pub show_leading_ellipsis: bool,
    pub show_trailing_ellipsis: bool,
}

impl PageWindow {
    pub fn is_empty(&self) -> bool {
        self.visible_pages.is_empty()
    }

    pub fn first(&self) -> Option<i64> {
        self.visible_pages.first().copied()
    }

    pub fn last(&self) -> Option<i64> {
        self.visible_pages.last().copied()
    }
}

/// A click on a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageAction {
    First,
    Previous,
    Next,
    Last,
    /// Jump to a 1-based page number.
    Goto(i64),
}

/// Page numbering used by a call site.
///
/// The core always works 1-based. Call sites that keep 0-based page indices
/// (e.g. Spring-style `page=0` requests) convert at the boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageBase {
    #[default]
    OneBased,
    ZeroBased,
}

impl PageBase {
    pub fn to_one_based(self, page: i64) -> i64 {
        match self {
            PageBase::OneBased => page,
            PageBase::ZeroBased => page.saturating_add(1),
        }
    }

    pub fn from_one_based(self, page: i64) -> i64 {
        match self {
            PageBase::OneBased => page,
            PageBase::ZeroBased => page.saturating_sub(1),
        }
    }
}

#[cfg(feature = "serde")]
impl Rankable for serde_json::Value {
    fn views(&self) -> Option<i64> {
        json_counter(self, "views")
    }

    fn likes(&self) -> Option<i64> {
        json_counter(self, "likes")
    }

    fn bookmarks(&self) -> Option<i64> {
        json_counter(self, "bookmarks")
    }

    fn title(&self, field: &str) -> Option<&str> {
        self.get(field)?.as_str()
    }
}

/// Read a counter from a JSON object. Accepts integers, floats (truncated)
/// and numeric strings; anything else is treated as absent.
#[cfg(feature = "serde")]
fn json_counter(value: &serde_json::Value, key: &str) -> Option<i64> {
    use serde_json::Value;

    match value.get(key)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
