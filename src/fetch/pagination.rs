//! Page bounds for a paginated view.

use serde::Serialize;

use crate::projector::PageBounds;

/// Current position within a paginated result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

/// Tracks page bounds and decides whether navigation may proceed
///
/// The controller never issues requests itself; it answers which page should
/// be fetched next, or `None` when the move is out of bounds or a fetch is
/// already in flight.
#[derive(Debug, Clone, Default)]
pub struct PaginationController {
    info: PageInfo,
}

impl PaginationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self) -> PageInfo {
        self.info
    }

    pub fn current_page(&self) -> u32 {
        self.info.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.info.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.info.current_page < self.info.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.info.current_page > 1
    }

    pub fn next_target(&self, in_flight: bool) -> Option<u32> {
        (!in_flight && self.has_next()).then(|| self.info.current_page + 1)
    }

    pub fn previous_target(&self, in_flight: bool) -> Option<u32> {
        (!in_flight && self.has_previous()).then(|| self.info.current_page - 1)
    }

    pub fn jump_target(&self, page: u32, in_flight: bool) -> Option<u32> {
        let in_bounds = (1..=self.info.total_pages).contains(&page);
        (!in_flight && in_bounds && page != self.info.current_page).then_some(page)
    }

    /// Record the bounds reported by a successful response for `requested` page
    pub fn record(&mut self, requested: u32, bounds: PageBounds) {
        let total_pages = bounds.total_pages.unwrap_or(1).max(1);
        let current_page = bounds
            .current_page
            .unwrap_or(requested)
            .clamp(1, total_pages);
        self.info = PageInfo {
            current_page,
            total_pages,
        };
    }

    pub fn reset(&mut self) {
        self.info = PageInfo::default();
    }
}
