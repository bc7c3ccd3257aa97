//! State of one dashboard card.
//!
//! The base flattened rows are kept separately from anything displayed;
//! the view recomputes the displayed slice from them on every render via
//! `TableQuery::apply`. Flattening waits until both the grouped data and
//! the catalog have arrived, so a half-loaded card never shows rows the
//! filter options cannot account for.

use common::pipeline::{flatten, Named, Row, TableQuery, DEFAULT_PAGE_SIZE};

use super::domain::Dashboard;

pub struct DashboardCard<D: Dashboard> {
    /// Grouped response of the view's data endpoint; `None` until loaded.
    pub sources: Option<Vec<D::Source>>,

    /// Catalog entries backing the filter option list; `None` until loaded.
    pub catalog: Option<Vec<D::Catalog>>,

    /// The full flattened row set, rebuilt on every successful fetch.
    pub base_rows: Vec<Row<D::Item>>,

    /// Filter selection, sort spec, and page position.
    pub query: TableQuery<D::Column>,

    /// Last fetch error, shown as a banner.
    pub error: Option<String>,

    /// Guard so the first-render fetch runs once.
    pub loaded: bool,
}

impl<D: Dashboard> DashboardCard<D> {
    pub fn new() -> Self {
        Self {
            sources: None,
            catalog: None,
            base_rows: Vec::new(),
            query: TableQuery::new(DEFAULT_PAGE_SIZE),
            error: None,
            loaded: false,
        }
    }

    /// Re-flattens once both inputs are present. New base data changes the
    /// view's shape, so the page position resets.
    pub fn rebuild_rows(&mut self) {
        if self.catalog.is_none() {
            return;
        }
        let Some(sources) = &self.sources else {
            return;
        };
        self.base_rows = flatten(sources);
        self.query.reset_page();
    }

    pub fn filter_options(&self) -> Vec<String> {
        self.catalog
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|entry| entry.name().to_string())
            .collect()
    }

    pub fn is_loading(&self) -> bool {
        self.error.is_none() && (self.sources.is_none() || self.catalog.is_none())
    }
}
