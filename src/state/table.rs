//! Certifications table: dataset ownership, sort state, and row rendering.
//!
//! DESIGN
//! ======
//! `TableEngine` owns the records and decides order; a `TableView` receives
//! whole row lists and header states. Every sort hands the view a complete
//! replacement row list, never a patch of the previous one.
//!
//! Ties keep dataset order in both directions (`sort_by` is stable and the
//! descending comparator is reversed rather than the sorted output).

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;

use crate::net::certs::Dataset;
use crate::net::types::CertificationRecord;
use crate::util::dates::parse_issued_millis;

/// Placeholder for an empty credential cell.
pub const EM_DASH: &str = "—";

/// Sortable column, as named by a header's `data-sort` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Issuer,
    Issued,
    Expires,
    CredentialId,
}

impl SortKey {
    pub fn parse(attr: &str) -> Option<Self> {
        match attr {
            "name" => Some(Self::Name),
            "issuer" => Some(Self::Issuer),
            "issued" => Some(Self::Issued),
            "expires" => Some(Self::Expires),
            "credentialId" => Some(Self::CredentialId),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Issuer => "issuer",
            Self::Issued => "issued",
            Self::Expires => "expires",
            Self::CredentialId => "credentialId",
        }
    }

    fn field(self, record: &CertificationRecord) -> Option<&str> {
        match self {
            Self::Name => record.name.as_deref(),
            Self::Issuer => record.issuer.as_deref(),
            Self::Issued => record.issued.as_deref(),
            Self::Expires => record.expires.as_deref(),
            Self::CredentialId => record.credential_id.as_deref(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort column and direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Issued,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// State after a header activation: same key flips, new key ascends.
    #[must_use]
    pub fn next(self, key: SortKey) -> Self {
        let direction = if self.key == key {
            self.direction.flipped()
        } else {
            SortDirection::Ascending
        };
        Self { key, direction }
    }

    /// `aria-sort` value for the header of `key`.
    pub fn aria_for(self, key: SortKey) -> AriaSort {
        if self.key != key {
            return AriaSort::None;
        }
        match self.direction {
            SortDirection::Ascending => AriaSort::Ascending,
            SortDirection::Descending => AriaSort::Descending,
        }
    }
}

/// Header sort indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AriaSort {
    Ascending,
    Descending,
    None,
}

impl AriaSort {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::None => "none",
        }
    }
}

/// Content of the credential column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CredentialCell {
    /// Opens in a new context with `rel="noreferrer noopener"`.
    Link { href: String, label: String },
    Text(String),
    Placeholder,
}

impl CredentialCell {
    pub fn for_record(record: &CertificationRecord) -> Self {
        match (record.url.as_deref(), record.credential_id.as_deref()) {
            (Some(href), id) => Self::Link {
                href: href.to_owned(),
                label: id.unwrap_or("View").to_owned(),
            },
            (None, Some(id)) => Self::Text(id.to_owned()),
            (None, None) => Self::Placeholder,
        }
    }
}

/// Display-ready row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub name: String,
    pub issuer: String,
    pub issued: String,
    pub credential: CredentialCell,
}

impl RowView {
    pub fn from_record(record: &CertificationRecord) -> Self {
        Self {
            name: record.name.clone().unwrap_or_default(),
            issuer: record.issuer.clone().unwrap_or_default(),
            issued: record.issued.clone().unwrap_or_default(),
            credential: CredentialCell::for_record(record),
        }
    }
}

/// Render target for the table.
pub trait TableView {
    /// Reflect `aria-sort` on the header for `key`.
    fn set_header_sort(&mut self, key: SortKey, sort: AriaSort);
    /// Clear the body and rebuild it from `rows`.
    fn replace_rows(&mut self, rows: Vec<RowView>);
    /// Keys of the headers present in the markup.
    fn header_keys(&self) -> Vec<SortKey>;
}

/// Order two records under `state`.
pub fn compare_records(a: &CertificationRecord, b: &CertificationRecord, state: SortState) -> Ordering {
    let ordering = match state.key {
        SortKey::Issued => {
            let left = state.key.field(a).and_then(parse_issued_millis);
            let right = state.key.field(b).and_then(parse_issued_millis);
            left.cmp(&right)
        }
        key => {
            let left = key.field(a).unwrap_or_default().to_lowercase();
            let right = key.field(b).unwrap_or_default().to_lowercase();
            left.cmp(&right)
        }
    };
    match state.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Sorted copy of `records`.
pub fn sorted(records: &[CertificationRecord], state: SortState) -> Vec<CertificationRecord> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| compare_records(a, b, state));
    out
}

/// Table controller over a render target.
pub struct TableEngine<V> {
    view: V,
    records: Vec<CertificationRecord>,
    sort: SortState,
}

impl<V: TableView> TableEngine<V> {
    /// Engine with no data; nothing is rendered until `load`.
    pub fn new(view: V) -> Self {
        Self {
            view,
            records: Vec::new(),
            sort: SortState::default(),
        }
    }

    /// Adopt `dataset` and render it under the current sort state.
    pub fn load(&mut self, dataset: Dataset) {
        self.records = dataset.into_records();
        self.refresh();
    }

    /// Activate the column `key` and re-render.
    pub fn sort(&mut self, key: SortKey) -> SortState {
        self.sort = self.sort.next(key);
        self.refresh();
        self.sort
    }

    /// Replace the body with `records` in the given order.
    pub fn render(&mut self, records: &[CertificationRecord]) {
        let rows = records.iter().map(RowView::from_record).collect();
        self.view.replace_rows(rows);
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn records(&self) -> &[CertificationRecord] {
        &self.records
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn refresh(&mut self) {
        for key in self.view.header_keys() {
            self.view.set_header_sort(key, self.sort.aria_for(key));
        }
        let ordered = sorted(&self.records, self.sort);
        self.render(&ordered);
    }
}
