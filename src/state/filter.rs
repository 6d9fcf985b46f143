//! Substring filter over the page's content cards.
//!
//! The filter is synchronous and idempotent: the visible set and the status
//! text depend only on the block texts and the query.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// A content block the filter can inspect and hide.
pub trait FilterBlock {
    /// Full rendered text of the block.
    fn text(&self) -> String;
    /// Show the block, or remove it from layout entirely.
    fn set_visible(&mut self, visible: bool);
}

/// Transient filter state: last query and the count it produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub visible_count: usize,
}

/// Result of one filter pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    pub visible_count: usize,
    /// Live-region announcement; empty when the query is empty.
    pub status: String,
}

/// Trim and lower-case a raw query.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `text` contains an already normalized query.
pub fn matches(text: &str, normalized_query: &str) -> bool {
    normalized_query.is_empty() || text.to_lowercase().contains(normalized_query)
}

/// Announcement for `count` matches of `normalized_query`.
pub fn status_text(count: usize, normalized_query: &str) -> String {
    if normalized_query.is_empty() {
        return String::new();
    }
    let noun = if count == 1 { "result" } else { "results" };
    format!("{count} {noun} for “{normalized_query}”.")
}

/// Filter owner: applies queries to blocks and remembers the last pass.
#[derive(Debug, Default)]
pub struct RecordFilter {
    state: FilterState,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Show blocks containing `raw_query`, hide the rest, and report.
    pub fn apply<B: FilterBlock>(&mut self, blocks: &mut [B], raw_query: &str) -> FilterOutcome {
        let query = normalize_query(raw_query);
        let mut visible_count = 0;
        for block in blocks.iter_mut() {
            let visible = matches(&block.text(), &query);
            block.set_visible(visible);
            if visible {
                visible_count += 1;
            }
        }
        let status = status_text(visible_count, &query);
        self.state = FilterState { query, visible_count };
        FilterOutcome { visible_count, status }
    }
}
