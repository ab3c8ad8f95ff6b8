// src/state.rs

//! View state of the hub.
//!
//! Which panel is open, the service filter and the search box are an explicit
//! value owned by the caller. Lists shown to the user are derived from the
//! catalog on every call and never cached here.

use crate::catalog::{Catalog, Entry};
use crate::models::{ResultKind, SearchResult, Selection, Service};
use crate::query::{ServiceFilter, filter_services, search};

/// The panel currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Department(String),
    Service(String),
    Manual,
}

/// Navigation, filter and search state of one hub session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HubState {
    view: View,
    filter: ServiceFilter,
    query: String,
}

impl HubState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn filter(&self) -> ServiceFilter {
        self.filter
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Open the detail view for a department or service.
    pub fn select(&mut self, selection: Selection) {
        log::debug!("Selected {} '{}'", selection.kind, selection.id);
        self.view = match selection.kind {
            ResultKind::Department => View::Department(selection.id),
            ResultKind::Service => View::Service(selection.id),
        };
    }

    /// Back to the landing panel. Clears any selection.
    pub fn navigate_home(&mut self) {
        self.view = View::Home;
    }

    /// Show the user guide. Clears any selection.
    pub fn open_manual(&mut self) {
        self.view = View::Manual;
    }

    pub fn set_filter(&mut self, filter: ServiceFilter) {
        self.filter = filter;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The current selection, if a detail view is open.
    pub fn selection(&self) -> Option<Selection> {
        match &self.view {
            View::Department(id) => Some(Selection::department(id.clone())),
            View::Service(id) => Some(Selection::service(id.clone())),
            View::Home | View::Manual => None,
        }
    }

    /// The selected entry, or `None` when nothing is selected or the id is
    /// not in the catalog.
    pub fn selected<'a>(&self, catalog: &'a Catalog) -> Option<Entry<'a>> {
        self.selection()
            .and_then(|selection| catalog.resolve(&selection))
    }

    /// Services passing the current filter.
    pub fn visible_services<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Service> {
        filter_services(catalog.list_services(), self.filter)
    }

    /// Matches for the current search text.
    pub fn search_results(&self, catalog: &Catalog) -> Vec<SearchResult> {
        search(
            catalog.list_departments(),
            catalog.list_services(),
            &self.query,
        )
    }
}
