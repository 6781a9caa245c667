// crates/paypoint-core/src/session.rs
use crate::catalog::{Facets, PointCatalog};
use crate::geo;
use crate::location::{Geolocation, LocationEvent, LocationProvider, LocationState};
use crate::model::{Facet, FilterState};
use crate::query::{self, QueryResult};

/// Presentation-side context: the catalog, the user's filter selection, the
/// geolocation attempt, and the current [`QueryResult`].
///
/// The query functions stay stateless; this struct owns the mutable inputs
/// and re-runs the affected query whenever one of them changes. Filter
/// changes recompute the filtered list and bounds. The nearest point is
/// computed once, when the location resolves, and is independent of filters.
#[derive(Debug)]
pub struct LocatorSession<'a> {
    catalog: &'a PointCatalog,
    filters: FilterState,
    location: Geolocation,
    result: QueryResult<'a>,
}

impl<'a> LocatorSession<'a> {
    pub fn new(catalog: &'a PointCatalog) -> Self {
        let filters = FilterState::default();
        let result = query::run(catalog, &filters, None);
        Self {
            catalog,
            filters,
            location: Geolocation::new(),
            result,
        }
    }

    pub fn catalog(&self) -> &'a PointCatalog {
        self.catalog
    }

    /// Values for the three filter selectors.
    pub fn facets(&self) -> &'a Facets {
        self.catalog.facets()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn result(&self) -> &QueryResult<'a> {
        &self.result
    }

    pub fn location(&self) -> &LocationState {
        self.location.state()
    }

    /// Selects a facet value; an empty value clears the facet.
    pub fn set_filter(&mut self, facet: Facet, value: impl Into<String>) {
        self.filters.set(facet, value);
        self.refilter();
    }

    /// Replaces the whole filter selection.
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.refilter();
    }

    /// Starts the single geolocation attempt. See [`Geolocation::start`].
    pub fn start_location(&mut self, provider: &dyn LocationProvider) -> bool {
        self.location.start(provider)
    }

    /// Picks up the geolocation answer if it has arrived and, on success,
    /// computes the nearest point.
    pub fn poll_location(&mut self) -> Option<LocationEvent> {
        let event = self.location.poll()?;
        let catalog = self.catalog;
        self.result.nearest = match &event {
            LocationEvent::Resolved(coord) => query::nearest(catalog.points(), Some(*coord)),
            LocationEvent::Failed(_) => None,
        };
        Some(event)
    }

    fn refilter(&mut self) {
        let catalog = self.catalog;
        self.result.filtered = query::filter(catalog.points(), &self.filters);
        self.result.bounds = geo::bounds(&self.result.filtered);
        tracing::debug!(
            filtered = self.result.filtered.len(),
            filters = ?self.filters,
            "filters applied"
        );
    }
}
