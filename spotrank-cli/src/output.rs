/// Output formatting: terminal table, pagination bar text, and JSON.
use serde::Serialize;
use serde_json::Value;
use spotrank_core::{PageBase, PaginationBar, RankedItem, Rankable};
use unicode_width::UnicodeWidthStr;

#[derive(Serialize)]
struct JsonRankedItem<'a> {
    rank: usize,
    title: &'a str,
    score: u64,
    item: &'a Value,
}

#[derive(Serialize)]
struct JsonRankOutput<'a> {
    items: Vec<JsonRankedItem<'a>>,
    total_input: usize,
    title_field: &'a str,
}

#[derive(Serialize)]
struct JsonPagesOutput<'a> {
    /// Always "one-based": the bar is reported in 1-based page numbers.
    numbering: &'static str,
    /// The page as the caller passed it.
    requested_page: i64,
    bar: &'a PaginationBar,
}

fn counter(value: Option<i64>) -> i64 {
    value.unwrap_or(0).max(0)
}

fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}

/// Render ranked items as a terminal table.
pub fn render_table(ranked: &[RankedItem<Value>], title_field: &str, total_input: usize) -> String {
    let titles: Vec<&str> = ranked.iter().map(|r| r.item.title(title_field).unwrap_or("")).collect();

    // Terminal columns: Hangul syllables are two columns wide, and `{:<w$}`
    // pads by char count, so titles are padded by hand.
    let title_width = titles
        .iter()
        .map(|t| t.width())
        .max()
        .unwrap_or(5)
        .max(5); // at least "Title"

    let mut out = String::new();
    out.push_str(&format!(
        " # | {} |  Score |  Views |  Likes | Bookmarks\n",
        pad_to_width("Title", title_width)
    ));
    out.push_str(&format!(
        "---|-{}-|--------|--------|--------|----------\n",
        "-".repeat(title_width)
    ));

    for (r, title) in ranked.iter().zip(&titles) {
        out.push_str(&format!(
            "{:>2} | {} | {:>6} | {:>6} | {:>6} | {:>9}\n",
            r.rank,
            pad_to_width(title, title_width),
            r.score,
            counter(r.item.views()),
            counter(r.item.likes()),
            counter(r.item.bookmarks()),
        ));
    }

    out.push_str(&format!("\n{} of {} items ranked\n", ranked.len(), total_input));
    out
}

/// Render ranked items as pretty JSON.
pub fn render_rank_json(
    ranked: &[RankedItem<Value>],
    title_field: &str,
    total_input: usize,
) -> serde_json::Result<String> {
    let items = ranked
        .iter()
        .map(|r| JsonRankedItem {
            rank: r.rank,
            title: r.item.title(title_field).unwrap_or(""),
            score: r.score,
            item: &r.item,
        })
        .collect();

    serde_json::to_string_pretty(&JsonRankOutput {
        items,
        total_input,
        title_field,
    })
}

/// Render a pagination bar as one line of text.
///
/// `«`/`»` jump to the first/last page and `‹`/`›` step one page; disabled
/// arrows are drawn as `·`. The current page is bracketed. Page labels are
/// always 1-based, whatever numbering the caller used on input.
pub fn render_bar(bar: &PaginationBar) -> String {
    let label = |page: i64| {
        if bar.is_highlighted(page) {
            format!("[{page}]")
        } else {
            page.to_string()
        }
    };

    if !bar.is_navigable() {
        return label(1);
    }

    let mut parts: Vec<String> = Vec::new();
    let (first, prev) = if bar.prev_disabled { ("·", "·") } else { ("«", "‹") };
    parts.push(first.to_string());
    parts.push(prev.to_string());

    parts.push(label(1));
    if bar.window.show_leading_ellipsis {
        parts.push("…".to_string());
    }
    parts.extend(bar.window.visible_pages.iter().map(|&p| label(p)));
    if bar.window.show_trailing_ellipsis {
        parts.push("…".to_string());
    }
    if bar.show_last {
        parts.push(label(bar.total_pages));
    }

    let (next, last) = if bar.next_disabled { ("·", "·") } else { ("›", "»") };
    parts.push(next.to_string());
    parts.push(last.to_string());

    parts.join(" ")
}

/// Render a pagination bar as pretty JSON.
pub fn render_pages_json(bar: &PaginationBar, base: PageBase) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonPagesOutput {
        numbering: "one-based",
        requested_page: base.from_one_based(bar.current_page),
        bar,
    })
}
