//! Catalog view state machine with incremental pagination.
//!
//! Every input change moves the view to [`ViewPhase::Loading`] and hands out
//! a [`Ticket`]. Completing the newest ticket publishes fresh results;
//! completing an older one is ignored, so the last change to start wins
//! regardless of completion order.

use crate::query::CatalogQuery;
use crate::seed::CATALOG;
use crate::types::{CatalogEntry, KindFilter, SortKey};
use serde::Serialize;

/// Number of entries revealed per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPhase {
    /// Nothing has been searched yet
    Idle,
    Loading,
    HasResults,
    Empty,
}

/// Handle for one pending recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Searchable, pageable view over a catalog.
///
/// # Examples
///
/// ```
/// use playfetch_catalog::view::{CatalogView, ViewPhase};
/// use playfetch_catalog::types::KindFilter;
///
/// let mut view = CatalogView::seeded(6);
/// assert_eq!(view.phase(), ViewPhase::Idle);
///
/// let ticket = view.set_filter(KindFilter::Popular);
/// assert_eq!(view.phase(), ViewPhase::Loading);
/// view.complete(ticket);
///
/// assert_eq!(view.phase(), ViewPhase::HasResults);
/// assert!(view.visible().iter().all(|e| e.popularity > 90));
/// ```
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    catalog: &'a [CatalogEntry],
    query: CatalogQuery,
    page_size: usize,
    visible: usize,
    results: Vec<&'a CatalogEntry>,
    phase: ViewPhase,
    generation: u64,
}

impl CatalogView<'static> {
    /// View over the built-in catalog.
    pub fn seeded(page_size: usize) -> Self {
        Self::new(CATALOG, page_size)
    }
}

impl<'a> CatalogView<'a> {
    /// Creates an idle view. A zero page size is treated as one.
    pub fn new(catalog: &'a [CatalogEntry], page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            catalog,
            query: CatalogQuery::default(),
            page_size,
            visible: page_size,
            results: Vec::new(),
            phase: ViewPhase::Idle,
            generation: 0,
        }
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search(&mut self, term: impl Into<String>) -> Ticket {
        self.query.search = term.into();
        self.begin()
    }

    pub fn set_filter(&mut self, filter: KindFilter) -> Ticket {
        self.query.filter = filter;
        self.begin()
    }

    pub fn set_sort(&mut self, sort: SortKey) -> Ticket {
        self.query.sort = sort;
        self.begin()
    }

    /// Starts a recompute with the current inputs (the "search" button).
    ///
    /// Resets pagination to the first page and invalidates earlier tickets.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.visible = self.page_size;
        self.phase = ViewPhase::Loading;
        Ticket(self.generation)
    }

    /// Publishes results for `ticket` if it is still the newest one.
    ///
    /// Returns `false` and leaves the view untouched for stale tickets.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "ignoring stale catalog ticket"
            );
            return false;
        }

        self.results = self.query.apply(self.catalog);
        self.phase = if self.results.is_empty() {
            ViewPhase::Empty
        } else {
            ViewPhase::HasResults
        };
        tracing::debug!(
            search = %self.query.search,
            filter = %self.query.filter,
            sort = %self.query.sort,
            total = self.results.len(),
            "catalog recomputed"
        );
        true
    }

    /// Begins and completes a recompute in one step.
    pub fn refresh(&mut self) {
        let ticket = self.begin();
        self.complete(ticket);
    }

    /// Entries currently shown.
    pub fn visible(&self) -> &[&'a CatalogEntry] {
        let end = self.visible.min(self.results.len());
        &self.results[..end]
    }

    /// Number of entries matching the last published query.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Whether "load more" would reveal anything.
    pub fn has_more(&self) -> bool {
        self.phase == ViewPhase::HasResults && self.visible < self.results.len()
    }

    /// Reveals the next page. Returns how many entries became visible.
    pub fn load_more(&mut self) -> usize {
        if !self.has_more() {
            return 0;
        }
        let before = self.visible().len();
        self.visible += self.page_size;
        self.visible().len() - before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(view: &CatalogView<'a>) -> Vec<&'a str> {
        view.visible().iter().map(|e| e.name).collect()
    }

    #[test]
    fn test_initial_state_is_idle_and_empty() {
        let view = CatalogView::seeded(DEFAULT_PAGE_SIZE);
        assert_eq!(view.phase(), ViewPhase::Idle);
        assert!(view.visible().is_empty());
        assert!(!view.has_more());
        assert_eq!(view.query(), &CatalogQuery::default());
    }

    #[test]
    fn test_first_refresh_shows_first_page() {
        let mut view = CatalogView::seeded(DEFAULT_PAGE_SIZE);
        view.refresh();

        assert_eq!(view.phase(), ViewPhase::HasResults);
        assert_eq!(view.total(), 12);
        assert_eq!(view.visible().len(), 6);
        assert!(view.has_more());
    }

    #[test]
    fn test_load_more_reveals_all_then_stops() {
        let mut view = CatalogView::seeded(6);
        view.refresh();

        assert_eq!(view.load_more(), 6);
        assert_eq!(view.visible().len(), 12);
        assert!(!view.has_more());

        assert_eq!(view.load_more(), 0);
        assert_eq!(view.visible().len(), 12);
    }

    #[test]
    fn test_partial_last_page() {
        let mut view = CatalogView::seeded(6);
        let ticket = view.set_search("com.");
        assert!(view.complete(ticket));

        assert_eq!(view.total(), 11);
        assert_eq!(view.load_more(), 5);
        assert!(!view.has_more());
    }

    #[test]
    fn test_filter_change_resets_pagination() {
        let mut view = CatalogView::seeded(6);
        view.refresh();
        view.load_more();
        assert_eq!(view.visible().len(), 12);

        let ticket = view.set_filter(KindFilter::Game);
        assert_eq!(view.phase(), ViewPhase::Loading);
        view.complete(ticket);

        assert_eq!(view.total(), 6);
        assert_eq!(view.visible().len(), 6);
        assert!(!view.has_more());
    }

    #[test]
    fn test_search_change_resets_pagination() {
        let mut view = CatalogView::seeded(4);
        view.refresh();
        view.load_more();
        assert_eq!(view.visible().len(), 8);

        let ticket = view.set_search("com.");
        assert_eq!(view.phase(), ViewPhase::Loading);
        view.complete(ticket);

        assert_eq!(view.total(), 11);
        assert_eq!(view.visible().len(), 4);
        assert!(view.has_more());
    }

    #[test]
    fn test_sort_change_resets_pagination() {
        let mut view = CatalogView::seeded(4);
        view.refresh();
        view.load_more();
        assert_eq!(view.visible().len(), 8);

        let ticket = view.set_sort(SortKey::Rating);
        view.complete(ticket);
        assert_eq!(view.visible().len(), 4);
        assert_eq!(view.visible()[0].name, "Spotify - Música y Podcasts");
    }

    #[test]
    fn test_empty_phase() {
        let mut view = CatalogView::seeded(6);
        let ticket = view.set_search("does-not-exist");
        view.complete(ticket);

        assert_eq!(view.phase(), ViewPhase::Empty);
        assert!(view.visible().is_empty());
        assert_eq!(view.load_more(), 0);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut view = CatalogView::seeded(6);
        let first = view.set_search("candy");
        let second = view.set_search("netflix");

        // The newer request finishes first
        assert!(view.complete(second));
        assert_eq!(names(&view), vec!["Netflix"]);

        // The older one finishes late and must not overwrite
        assert!(!view.complete(first));
        assert_eq!(names(&view), vec!["Netflix"]);
        assert_eq!(view.phase(), ViewPhase::HasResults);
    }

    #[test]
    fn test_load_more_while_loading_is_noop() {
        let mut view = CatalogView::seeded(6);
        view.refresh();
        let _pending = view.set_sort(SortKey::Popularity);

        assert!(!view.has_more());
        assert_eq!(view.load_more(), 0);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let mut view = CatalogView::seeded(0);
        assert_eq!(view.page_size(), 1);
        view.refresh();
        assert_eq!(view.visible().len(), 1);
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = &CATALOG[..3];
        let mut view = CatalogView::new(catalog, 2);
        view.refresh();
        assert_eq!(view.total(), 3);
        assert_eq!(view.load_more(), 1);
    }
}
