//! Generic paginated controller, instantiated once per view.

use std::sync::Arc;

use crate::error::Result;
use crate::fetch::{FetchController, FetchState, PageInfo, PaginationController, Transport};
use crate::projector::{ProjectedPage, ResultProjector, ResultSet};
use crate::query::{ParameterSchema, QuerySnapshot, QueryState, RequestBuilder, RouteLayout};

/// Ties query state, request building, fetching, pagination and projection
/// together for one view.
///
/// Local errors (unknown filter, invalid value, incomplete query) are returned
/// directly and never reach the network. Request failures land in
/// [`ViewController::fetch_state`].
pub struct ViewController<P: ResultProjector, T> {
    query: QueryState,
    builder: RequestBuilder,
    fetch: FetchController<ProjectedPage<P::Record>>,
    pagination: PaginationController,
    projector: P,
    transport: T,
}

impl<P, T> ViewController<P, T>
where
    P: ResultProjector,
    T: Transport,
{
    pub fn new(
        schema: ParameterSchema,
        layout: RouteLayout,
        projector: P,
        transport: T,
        page_size: u32,
    ) -> Self {
        let schema = Arc::new(schema);
        Self {
            query: QueryState::new(schema.clone(), page_size),
            builder: RequestBuilder::new(schema, layout),
            fetch: FetchController::new(),
            pagination: PaginationController::new(),
            projector,
            transport,
        }
    }

    pub fn set_filter(&mut self, name: &str, raw: impl Into<String>) -> Result<()> {
        self.query.set_filter(name, raw)
    }

    /// Freeze pending filters and fetch page 1
    ///
    /// Page bounds from the previous query are discarded, so navigation stays
    /// on page 1 until the new query succeeds.
    pub async fn submit(&mut self) -> Result<()> {
        let snapshot = self.query.submit()?;
        self.pagination.reset();
        self.run(snapshot).await;
        Ok(())
    }

    /// Fetch the next page. Returns `false` when the move was a no-op.
    pub async fn next_page(&mut self) -> bool {
        match self.pagination.next_target(self.fetch.is_loading()) {
            Some(page) => self.go_to(page).await,
            None => false,
        }
    }

    /// Fetch the previous page. Returns `false` when the move was a no-op.
    pub async fn previous_page(&mut self) -> bool {
        match self.pagination.previous_target(self.fetch.is_loading()) {
            Some(page) => self.go_to(page).await,
            None => false,
        }
    }

    /// Fetch an arbitrary page within the known bounds
    pub async fn jump_to(&mut self, page: u32) -> bool {
        match self.pagination.jump_target(page, self.fetch.is_loading()) {
            Some(page) => self.go_to(page).await,
            None => false,
        }
    }

    pub fn fetch_state(&self) -> &FetchState<ProjectedPage<P::Record>> {
        self.fetch.state()
    }

    pub fn page_info(&self) -> PageInfo {
        self.pagination.info()
    }

    pub fn has_next(&self) -> bool {
        !self.fetch.is_loading() && self.pagination.has_next()
    }

    pub fn has_previous(&self) -> bool {
        !self.fetch.is_loading() && self.pagination.has_previous()
    }

    pub fn results(&self) -> Option<&ResultSet<P::Record>> {
        self.fetch.state().success().map(|page| &page.results)
    }

    /// Percentage to chart: only on page one, and only when the service sent one
    pub fn chart_statistic(&self) -> Option<f64> {
        if self.pagination.current_page() != 1 {
            return None;
        }
        self.results().and_then(|r| r.statistic)
    }

    async fn go_to(&mut self, page: u32) -> bool {
        match self.query.with_page(page) {
            Some(snapshot) => {
                self.run(snapshot).await;
                true
            }
            None => false,
        }
    }

    async fn run(&mut self, snapshot: QuerySnapshot) {
        let request = self.builder.build(&snapshot);
        let projector = &self.projector;
        let applied = self
            .fetch
            .execute(&self.transport, &request, |payload| {
                projector.project_page(&payload)
            })
            .await;

        if applied && let FetchState::Success(page) = self.fetch.state() {
            self.pagination.record(snapshot.page(), page.bounds);
        }
    }
}
