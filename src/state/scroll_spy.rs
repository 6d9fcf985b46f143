//! Scroll-spy: which navigation link matches the section in view.
//!
//! The observer itself lives in the browser glue; this type only decides
//! which link is active and which fragment the URL should show.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

/// One observer notification, reduced to what the spy needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionEntry {
    pub section_id: String,
    pub is_intersecting: bool,
}

/// Active-link tracker over a fixed set of sections and links.
#[derive(Clone, Debug, Default)]
pub struct ScrollSpy {
    sections: Vec<String>,
    /// `href` of each navigation link, in document order.
    links: Vec<String>,
    /// `href` of the active link, if any link matched.
    active: Option<String>,
}

impl ScrollSpy {
    pub fn new(sections: Vec<String>, links: Vec<String>) -> Self {
        Self { sections, links, active: None }
    }

    /// Nothing to observe or nothing to highlight.
    pub fn is_inert(&self) -> bool {
        self.sections.is_empty() || self.links.is_empty()
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether the link at `index` carries the active marker.
    pub fn is_active(&self, index: usize) -> bool {
        match (self.links.get(index), self.active.as_deref()) {
            (Some(href), Some(active)) => href == active,
            _ => false,
        }
    }

    /// Pre-activate from the URL fragment present at load (with or without
    /// the leading `#`). Returns whether a fragment was applied.
    pub fn activate_from_hash(&mut self, hash: &str) -> bool {
        let id = hash.trim_start_matches('#');
        if id.is_empty() {
            return false;
        }
        self.activate_section(id);
        true
    }

    /// Handle an observer batch. Returns the fragment to write into the URL
    /// for the last intersecting entry, if any.
    pub fn on_entries(&mut self, entries: &[SectionEntry]) -> Option<String> {
        let mut fragment = None;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            self.activate_section(&entry.section_id);
            fragment = Some(format!("#{}", entry.section_id));
        }
        fragment
    }

    /// Optimistic activation on a link click.
    pub fn on_link_click(&mut self, index: usize) {
        if let Some(href) = self.links.get(index) {
            self.active = Some(href.clone());
        }
    }

    fn activate_section(&mut self, id: &str) {
        let target = format!("#{id}");
        self.active = self.links.iter().find(|href| **href == target).cloned();
    }
}
