// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;
use tether_core::{Promise, Resolver, Result, TetherError};

pub type SearchResults = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("search backend unavailable")]
    Unavailable,
    #[error("query rejected: {0}")]
    Rejected(String),
}

/// Canned results for `query`.
#[must_use]
pub fn results_for(query: &str) -> SearchResults {
    vec![format!("{query} #1"), format!("{query} #2")]
}

struct Request {
    query: String,
    resolver: Resolver<SearchResults, SearchError>,
}

/// Search backend whose requests stay pending until completed by the test.
#[derive(Default)]
pub struct FakeSearchService {
    requests: Mutex<Vec<Request>>,
}

impl FakeSearchService {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Starts a search; the promise resolves when the test completes request `n`.
    pub fn search(&self, query: &str) -> Promise<SearchResults, SearchError> {
        let (promise, resolver) = Promise::pending();
        self.requests.lock().push(Request {
            query: query.to_string(),
            resolver,
        });
        promise
    }

    /// Queries received so far, in order.
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.requests.lock().iter().map(|r| r.query.clone()).collect()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Completes request `index` with [`results_for`] its query.
    pub fn complete(&self, index: usize) -> Result<()> {
        let (query, resolver) = self.request(index)?;
        resolver.succeed(results_for(&query))
    }

    /// Fails request `index` with `error`.
    pub fn fail(&self, index: usize, error: SearchError) -> Result<()> {
        let (_, resolver) = self.request(index)?;
        resolver.fail(error)
    }

    fn request(&self, index: usize) -> Result<(String, Resolver<SearchResults, SearchError>)> {
        let requests = self.requests.lock();
        let request = requests
            .get(index)
            .ok_or_else(|| TetherError::invalid_state(format!("no search request #{index}")))?;
        Ok((request.query.clone(), request.resolver.clone()))
    }
}
