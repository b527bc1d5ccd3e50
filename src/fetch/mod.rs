//! Request lifecycle for a single view.
//!
//! [`FetchController`] is the only writer of [`FetchState`]. Each request it
//! issues is tagged with a sequence number and only the response to the most
//! recently issued request is applied; anything older is dropped on arrival.

pub mod pagination;
pub mod transport;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::query::Request;

pub use pagination::{PageInfo, PaginationController};
pub use transport::{HttpTransport, Transport};

/// Lifecycle of the current request
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", content = "payload", rename_all = "lowercase")]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            FetchState::Success(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Handle for an issued request, used to match its completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Owns the [`FetchState`] of one view
#[derive(Debug)]
pub struct FetchController<T> {
    state: FetchState<T>,
    issued: u64,
    applied: u64,
}

impl<T> Default for FetchController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchController<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            issued: 0,
            applied: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Start a new request. Any earlier request still in flight is superseded.
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        self.state = FetchState::Loading;
        RequestTicket(self.issued)
    }

    /// Apply the outcome of a request. Returns `false` when the response was stale
    /// and has been discarded.
    pub fn complete(&mut self, ticket: RequestTicket, outcome: Result<T>) -> bool {
        if ticket.0 != self.issued || ticket.0 <= self.applied {
            tracing::debug!(
                "discarding response #{} (latest issued #{}, applied #{})",
                ticket.0,
                self.issued,
                self.applied
            );
            return false;
        }

        self.applied = ticket.0;
        self.state = match outcome {
            Ok(payload) => FetchState::Success(payload),
            Err(e) => {
                tracing::warn!("request #{} failed: {e}", ticket.0);
                FetchState::Failed(e.to_string())
            }
        };
        true
    }

    /// Issue `request`, await it, and apply the decoded outcome
    pub async fn execute<Tr, F>(&mut self, transport: &Tr, request: &Request, decode: F) -> bool
    where
        Tr: Transport,
        F: FnOnce(Value) -> Result<T>,
    {
        let ticket = self.begin();
        tracing::debug!("issuing request #{} for {}", ticket.0, request.path());
        let outcome = transport.get(request).await.and_then(decode);
        self.complete(ticket, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CensoError;

    #[test]
    fn test_starts_idle() {
        let fetch: FetchController<u32> = FetchController::new();
        assert_eq!(fetch.state(), &FetchState::Idle);
        assert!(!fetch.is_loading());
    }

    #[test]
    fn test_success_transition() {
        let mut fetch = FetchController::new();
        let ticket = fetch.begin();
        assert!(fetch.is_loading());
        assert!(fetch.complete(ticket, Ok("payload")));
        assert_eq!(fetch.state(), &FetchState::Success("payload"));
    }

    #[test]
    fn test_failure_transition_keeps_message() {
        let mut fetch: FetchController<()> = FetchController::new();
        let ticket = fetch.begin();
        fetch.complete(
            ticket,
            Err(CensoError::RequestFailed("service returned HTTP 500".into())),
        );
        assert_eq!(
            fetch.state().error(),
            Some("request failed: service returned HTTP 500")
        );
    }

    #[test]
    fn test_reentrant_after_failure() {
        let mut fetch = FetchController::new();
        let first = fetch.begin();
        fetch.complete(first, Err(CensoError::RequestFailed("timeout".into())));
        let second = fetch.begin();
        assert!(fetch.is_loading());
        fetch.complete(second, Ok(7));
        assert_eq!(fetch.state().success(), Some(&7));
    }

    #[test]
    fn test_late_response_from_superseded_request_is_dropped() {
        let mut fetch = FetchController::new();
        let a = fetch.begin();
        let b = fetch.begin();

        assert!(fetch.complete(b, Ok("B")));
        assert!(!fetch.complete(a, Ok("A")));
        assert_eq!(fetch.state(), &FetchState::Success("B"));
    }

    #[test]
    fn test_early_response_from_superseded_request_is_dropped() {
        let mut fetch = FetchController::new();
        let a = fetch.begin();
        let b = fetch.begin();

        assert!(!fetch.complete(a, Ok("A")));
        assert!(fetch.is_loading());
        assert!(fetch.complete(b, Ok("B")));
        assert_eq!(fetch.state(), &FetchState::Success("B"));
    }

    #[test]
    fn test_stale_failure_does_not_clobber_success() {
        let mut fetch = FetchController::new();
        let a = fetch.begin();
        let b = fetch.begin();
        fetch.complete(b, Ok(2));
        fetch.complete(a, Err(CensoError::RequestFailed("connection reset".into())));
        assert_eq!(fetch.state(), &FetchState::Success(2));
    }

    #[test]
    fn test_duplicate_completion_ignored() {
        let mut fetch = FetchController::new();
        let a = fetch.begin();
        assert!(fetch.complete(a, Ok(1)));
        assert!(!fetch.complete(a, Ok(2)));
        assert_eq!(fetch.state().success(), Some(&1));
        assert_eq!(a.sequence(), 1);
    }
}
