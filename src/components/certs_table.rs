//! Certifications table body.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted into the page's existing `<tbody>`. Rows come from a signal the
//! `TableEngine` view writes. Each write is a new `RowBatch` whose row keys
//! carry the batch generation, so `<For>` drops every existing `<tr>` and
//! builds the body again instead of patching rows in place.

#[cfg(test)]
#[path = "certs_table_test.rs"]
mod certs_table_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::table::{CredentialCell, EM_DASH, RowView};

/// Row identity: batch generation and position within the batch.
pub type RowKey = (u64, usize);

/// One complete rendering of the body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowBatch {
    generation: u64,
    rows: Vec<RowView>,
}

impl RowBatch {
    /// Batch replacing `self` with `rows`.
    #[must_use]
    pub fn next(&self, rows: Vec<RowView>) -> Self {
        Self {
            generation: self.generation + 1,
            rows,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rows(&self) -> &[RowView] {
        &self.rows
    }

    /// Rows paired with keys unique to this batch.
    pub fn keyed(&self) -> Vec<(RowKey, RowView)> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| ((self.generation, index), row.clone()))
            .collect()
    }
}

/// Every row of the current sorted view.
#[component]
pub fn CertRows(rows: ReadSignal<RowBatch>) -> impl IntoView {
    view! {
        <For
            each=move || rows.with(RowBatch::keyed)
            key=|(key, _)| *key
            children=|(_, row)| view! { <CertRow row=row/> }
        />
    }
}

#[component]
fn CertRow(row: RowView) -> impl IntoView {
    let RowView { name, issuer, issued, credential } = row;
    view! {
        <tr>
            <td>{name}</td>
            <td>{issuer}</td>
            <td>{issued}</td>
            <td>{credential_view(credential)}</td>
        </tr>
    }
}

fn credential_view(cell: CredentialCell) -> AnyView {
    match cell {
        CredentialCell::Link { href, label } => view! {
            <a href=href target="_blank" rel="noreferrer noopener">
                {label}
            </a>
        }
        .into_any(),
        CredentialCell::Text(text) => text.into_any(),
        CredentialCell::Placeholder => EM_DASH.into_any(),
    }
}
