//! The derived view: what the presentation layer renders for one state.

use std::sync::Arc;

use serde::Serialize;

use crate::core::filter::filter_records;
use crate::core::paginate::{clamp_page, paginate, total_pages};
use crate::core::sort::sort_records;
use crate::core::state_update::ViewState;
use crate::core::store::RecordStore;
use crate::core::types::TextField;
use crate::record::Record;

/// Materialized output of the pipeline for one state snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedView {
    pub visible_records: Vec<Record>,
    pub total_pages: usize,
    /// Page actually shown, after clamping.
    pub current_page: usize,
    pub available_countries: Vec<String>,
    pub filtered_count: usize,
}

impl DerivedView {
    /// View of an empty store.
    pub fn empty() -> Self {
        Self {
            visible_records: Vec::new(),
            total_pages: 0,
            current_page: 1,
            available_countries: Vec::new(),
            filtered_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.visible_records.is_empty()
    }
}

/// Compute the view for `state` from scratch: filter the raw records, sort the
/// filtered list, then slice the requested page (clamped).
pub fn derive_view(store: &RecordStore, state: &ViewState, page_size: usize) -> DerivedView {
    let filtered = filter_records(store.records(), &state.criteria);
    let ordered = sort_records(&filtered, state.directive);
    page_view(
        &ordered,
        page_size,
        state.page,
        store.distinct_values(TextField::State),
    )
}

/// Final pipeline stage: clamp `requested_page` and slice `ordered`.
pub fn page_view(
    ordered: &[Arc<Record>],
    page_size: usize,
    requested_page: usize,
    available_countries: Vec<String>,
) -> DerivedView {
    let current_page = clamp_page(requested_page, total_pages(ordered.len(), page_size));
    let page = paginate(ordered, page_size, current_page);
    DerivedView {
        visible_records: page
            .visible
            .iter()
            .map(|record| record.as_ref().clone())
            .collect(),
        total_pages: page.total_pages,
        current_page,
        available_countries,
        filtered_count: ordered.len(),
    }
}
