//! Cached query state for server reads.
//!
//! DESIGN
//! ======
//! Each endpoint owns one `QueryState`, identified by a `QueryKey`. Every
//! fetch is stamped with a generation; only the response carrying the latest
//! generation is applied, so a superseded probe can never overwrite a newer
//! one. A failed fetch clears the cached value instead of retrying.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::net::api;
use crate::net::error::ApiError;

/// Identity of a cached read, one per endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    CurrentUser,
    AdminSession,
}

impl QueryKey {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::CurrentUser => api::CURRENT_USER_PATH,
            Self::AdminSession => api::ADMIN_SESSION_PATH,
        }
    }
}

/// Proof of which fetch a response belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
    generation: u64,
    in_flight: bool,
    settled: bool,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            generation: 0,
            in_flight: false,
            settled: false,
        }
    }
}

impl<T> QueryState<T> {
    /// No fetch has completed yet. Later refetches keep this `false`.
    pub fn is_loading(&self) -> bool {
        !self.settled
    }

    /// A request is outstanding, including background refetches.
    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    /// Nothing has ever been requested for this key.
    pub fn is_idle(&self) -> bool {
        self.generation == 0
    }

    /// Start a fetch, superseding any outstanding one.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.in_flight = true;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Apply a response. Returns `false` when the ticket is stale and the
    /// response was discarded.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<T, ApiError>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.in_flight = false;
        self.settled = true;
        match result {
            Ok(value) => {
                self.data = Some(value);
                self.error = None;
            }
            Err(err) => {
                self.data = None;
                self.error = Some(err);
            }
        }
        true
    }
}
