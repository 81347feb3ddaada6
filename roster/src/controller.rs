//! Orchestration of the view pipeline for one table session.
//!
//! [`ViewController`] owns the record store, the current [`ViewState`] and the
//! cached output of each pipeline stage. A user action replaces the state in
//! one step and recomputes from the first stage it invalidates:
//!
//! - filter changes (and loads) rerun filter → sort → paginate from raw records;
//! - sort requests rerun sort → paginate from the cached filter output;
//! - page navigation only reslices the cached sorted output.
//!
//! No stage ever reads its own previous output, so the staged result always
//! equals [`derive_view`] computed from scratch.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::derive::{DerivedView, derive_view, page_view};
use crate::core::filter::filter_records;
use crate::core::invariants::validate_view_invariants;
use crate::core::paginate::{DEFAULT_PAGE_SIZE, PageRequest};
use crate::core::sort::sort_records;
use crate::core::state_update::{Stage, ViewAction, ViewState, apply_action};
use crate::core::store::RecordStore;
use crate::core::types::{Column, Country, FilterCriteria, Selection, SortKey, TextField};
use crate::record::{Gender, Record};

/// Stateful driver for a filterable, sortable, paginated record table.
#[derive(Debug, Clone)]
pub struct ViewController {
    store: RecordStore,
    page_size: usize,
    state: ViewState,
    countries: Vec<String>,
    filtered: Vec<Arc<Record>>,
    ordered: Vec<Arc<Record>>,
    view: DerivedView,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewController {
    /// Controller over an empty store. A zero `page_size` is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            store: RecordStore::default(),
            page_size: page_size.max(1),
            state: ViewState::default(),
            countries: Vec::new(),
            filtered: Vec::new(),
            ordered: Vec::new(),
            view: DerivedView::empty(),
        }
    }

    pub fn with_records(records: Vec<Record>, page_size: usize) -> Self {
        let mut controller = Self::new(page_size);
        controller.load(records);
        controller
    }

    /// Replace the raw records, then rerun the pipeline as if the current
    /// criteria had just been selected (page resets to 1).
    ///
    /// An empty batch is how a failed or missing load is represented.
    pub fn load(&mut self, records: Vec<Record>) -> &DerivedView {
        debug!(records = records.len(), "loading records");
        self.store.load(records);
        self.countries = self.store.distinct_values(TextField::State);
        let criteria = self.state.criteria.clone();
        self.apply(ViewAction::SetFilter(criteria))
    }

    pub fn set_filter(&mut self, criteria: FilterCriteria) -> &DerivedView {
        self.apply(ViewAction::SetFilter(criteria))
    }

    pub fn set_gender(&mut self, gender: Selection<Gender>) -> &DerivedView {
        self.apply(ViewAction::SetGender(gender))
    }

    pub fn set_country(&mut self, country: Selection<Country>) -> &DerivedView {
        self.apply(ViewAction::SetCountry(country))
    }

    pub fn request_sort(&mut self, key: SortKey) -> &DerivedView {
        self.apply(ViewAction::RequestSort(key))
    }

    /// Header click on `column`. Non-sortable columns leave the view unchanged.
    pub fn click_header(&mut self, column: Column) -> &DerivedView {
        match column.sort_key() {
            Some(key) => self.request_sort(key),
            None => &self.view,
        }
    }

    /// Go to `page`, clamped into the valid range.
    pub fn paginate(&mut self, page: usize) -> &DerivedView {
        self.apply(ViewAction::Paginate(PageRequest::GoTo(page)))
    }

    pub fn previous(&mut self) -> &DerivedView {
        self.apply(ViewAction::Paginate(PageRequest::Previous))
    }

    pub fn next(&mut self) -> &DerivedView {
        self.apply(ViewAction::Paginate(PageRequest::Next))
    }

    /// Apply one user action and recompute the invalidated stages.
    pub fn apply(&mut self, action: ViewAction) -> &DerivedView {
        debug!(action = %action, page = self.state.page, "applying view action");
        let transition = apply_action(&self.state, action, self.view.total_pages);

        if transition.recompute_from <= Stage::Filter {
            self.filtered = filter_records(self.store.records(), &transition.next.criteria);
        }
        if transition.recompute_from <= Stage::Sort {
            self.ordered = sort_records(&self.filtered, transition.next.directive);
        }
        let view = page_view(
            &self.ordered,
            self.page_size,
            transition.next.page,
            self.countries.clone(),
        );
        if view.current_page != transition.next.page {
            debug!(
                requested = transition.next.page,
                clamped = view.current_page,
                "page clamped"
            );
        }

        let errors = validate_view_invariants(&view, self.store.len(), self.page_size);
        if !errors.is_empty() {
            warn!(errors = ?errors, "derived view violates invariants");
        }

        self.state = ViewState {
            page: view.current_page,
            ..transition.next
        };
        self.view = view;
        debug!(
            filtered = self.view.filtered_count,
            total_pages = self.view.total_pages,
            page = self.view.current_page,
            "view recomputed"
        );
        &self.view
    }

    pub fn view(&self) -> &DerivedView {
        &self.view
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Recompute the current view from scratch, ignoring stage caches.
    pub fn rederive(&self) -> DerivedView {
        derive_view(&self.store, &self.state, self.page_size)
    }
}
